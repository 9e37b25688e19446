// Square roots by Newton's method
// Compare the iterative estimate with f64::sqrt

/// Iteration stops once two successive guesses are this close.
pub const EPSILON: f64 = 1e-7;

/// Upper bound on refinements. Large inputs have a float spacing wider than
/// EPSILON and can bounce between two neighbours forever.
pub const MAX_ITERATIONS: usize = 1000;

/// Square root of `x`, starting from a guess of 1.0.
///
/// Negative and NaN inputs give NaN; 0 and +inf are returned unchanged.
pub fn newton_sqrt(x: f64) -> f64 {
    if x.is_nan() || x < 0.0 {
        return f64::NAN;
    }
    if x == 0.0 || x.is_infinite() {
        return x;
    }

    let mut guess = 1.0_f64;
    for _ in 0..MAX_ITERATIONS {
        let next = guess - (guess * guess - x) / (2.0 * guess);
        let change = (next - guess).abs();
        guess = next;
        if change <= EPSILON {
            break;
        }
    }
    guess
}

fn main() {
    println!("{} {}", newton_sqrt(2.0), 2.0_f64.sqrt());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(x: f64) {
        let estimate = newton_sqrt(x);
        let expected = x.sqrt();
        assert!(
            (estimate - expected).abs() <= EPSILON * expected.max(1.0),
            "sqrt({x}): got {estimate}, expected {expected}"
        );
    }

    #[test]
    fn test_sqrt_two() {
        assert!((newton_sqrt(2.0) - 1.414_213_56).abs() < EPSILON);
        assert_close(2.0);
    }

    #[test]
    fn test_representative_inputs() {
        for x in [1.0, 4.0, 9.0, 0.25, 0.01, 10.0, 12345.678, 1e6] {
            assert_close(x);
        }
    }

    #[test]
    fn test_perfect_squares() {
        assert_eq!(newton_sqrt(1.0), 1.0);
        assert!((newton_sqrt(144.0) - 12.0).abs() < EPSILON);
    }

    #[test]
    fn test_special_values() {
        assert_eq!(newton_sqrt(0.0), 0.0);
        assert!(newton_sqrt(-4.0).is_nan());
        assert!(newton_sqrt(f64::NAN).is_nan());
        assert_eq!(newton_sqrt(f64::INFINITY), f64::INFINITY);
    }

    #[test]
    fn test_huge_input_terminates() {
        let x = 1e30;
        let estimate = newton_sqrt(x);
        assert!((estimate / x.sqrt() - 1.0).abs() < 1e-12);
    }
}
