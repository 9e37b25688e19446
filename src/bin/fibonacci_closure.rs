// Fibonacci numbers from a generator that keeps its own state
// Demonstrates a stateful Iterator and a closure capturing it

use colored::Colorize;

//==============================================================================
// Milestone 1: Generator state
//==============================================================================

/// Yields 0, 1, 1, 2, 3, ... and stops only when the next term overflows `u64`.
#[derive(Debug, Default)]
pub struct Fibonacci {
    /// The last two terms handed out, oldest first. `None` until produced.
    previous: Option<u64>,
    current: Option<u64>,
}

impl Fibonacci {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Iterator for Fibonacci {
    type Item = u64;

    fn next(&mut self) -> Option<Self::Item> {
        let next = match (self.previous, self.current) {
            (None, _) => 0,
            (Some(_), None) => 1,
            (Some(a), Some(b)) => a.checked_add(b)?,
        };

        if self.previous.is_none() {
            self.previous = Some(next);
        } else if self.current.is_none() {
            self.current = Some(next);
        } else {
            self.previous = self.current;
            self.current = Some(next);
        }
        Some(next)
    }
}

//==============================================================================
// Milestone 2: Closure form
//==============================================================================

/// Returns a closure that produces the next term on every call.
///
/// Panics once the sequence overflows `u64` (after term 93).
pub fn fibonacci() -> impl FnMut() -> u64 {
    let mut terms = Fibonacci::new();
    move || terms.next().expect("fibonacci term overflowed u64")
}

fn main() {
    println!("{}", "=== Fibonacci closure ===".bold());

    let mut f = fibonacci();
    for _ in 0..10 {
        println!("{}", f());
    }
}

//==============================================================================
// Tests
//==============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_ten_terms() {
        let terms: Vec<u64> = Fibonacci::new().take(10).collect();
        assert_eq!(terms, vec![0, 1, 1, 2, 3, 5, 8, 13, 21, 34]);
    }

    #[test]
    fn test_closure_matches_iterator() {
        let mut f = fibonacci();
        let from_closure: Vec<u64> = (0..30).map(|_| f()).collect();
        let from_iter: Vec<u64> = Fibonacci::new().take(30).collect();
        assert_eq!(from_closure, from_iter);
    }

    #[test]
    fn test_independent_generators() {
        let mut a = fibonacci();
        let mut b = fibonacci();
        a();
        a();
        a();
        assert_eq!(b(), 0);
        assert_eq!(a(), 2);
    }

    #[test]
    fn test_stops_on_overflow() {
        let terms: Vec<u64> = Fibonacci::new().collect();
        assert_eq!(terms.len(), 94);
        assert_eq!(*terms.last().unwrap(), 12_200_160_415_121_876_738);
    }
}
