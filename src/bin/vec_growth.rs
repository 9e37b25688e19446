//==============================================================================
// Vec growth inspector
// Watch how the standard Vec grows its capacity while elements are pushed
//==============================================================================

use colored::Colorize;

/// Elements appended in each phase, in order.
pub const PHASES: [usize; 3] = [10, 100, 1000];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrowthSnapshot {
    pub len: usize,
    pub capacity: usize,
}

impl GrowthSnapshot {
    pub fn of<T>(vec: &Vec<T>) -> Self {
        Self {
            len: vec.len(),
            capacity: vec.capacity(),
        }
    }

    /// Capacity over length; `None` while the vector is empty.
    pub fn ratio(&self) -> Option<f64> {
        (self.len > 0).then(|| self.capacity as f64 / self.len as f64)
    }
}

/// Pushes `phases[i]` elements per phase onto a fresh `Vec` and records the
/// state before the first phase and after each one.
pub fn inspect_growth(phases: &[usize]) -> Vec<GrowthSnapshot> {
    let mut values: Vec<usize> = Vec::new();
    let mut snapshots = vec![GrowthSnapshot::of(&values)];

    for &count in phases {
        for i in 0..count {
            values.push(i);
        }
        snapshots.push(GrowthSnapshot::of(&values));
    }
    snapshots
}

fn main() {
    println!("{}", "=== Vec growth ===".bold());

    for snapshot in inspect_growth(&PHASES) {
        match snapshot.ratio() {
            Some(ratio) => println!("{} {} {}", snapshot.len, snapshot.capacity, ratio),
            None => println!("{} {}", snapshot.len, snapshot.capacity),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lengths_accumulate() {
        let lens: Vec<usize> = inspect_growth(&PHASES).iter().map(|s| s.len).collect();
        assert_eq!(lens, vec![0, 10, 110, 1110]);
    }

    #[test]
    fn test_capacity_covers_length() {
        for snapshot in inspect_growth(&PHASES) {
            assert!(snapshot.capacity >= snapshot.len);
        }
    }

    #[test]
    fn test_empty_vec_has_no_ratio() {
        let first = inspect_growth(&PHASES)[0];
        assert_eq!(first.len, 0);
        assert_eq!(first.ratio(), None);
    }

    #[test]
    fn test_ratio_is_at_least_one() {
        for snapshot in inspect_growth(&PHASES).iter().skip(1) {
            assert!(snapshot.ratio().unwrap() >= 1.0);
        }
    }

    #[test]
    fn test_capacity_never_shrinks() {
        let snapshots = inspect_growth(&[3, 5, 40, 1]);
        for pair in snapshots.windows(2) {
            assert!(pair[1].capacity >= pair[0].capacity);
        }
    }
}
