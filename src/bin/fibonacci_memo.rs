// Fibonacci numbers through a memo table
// Recursive definition, each term computed once

pub const TABLE_SIZE: usize = 100;

/// Lookup table for the first [`TABLE_SIZE`] terms. Zero marks "not computed";
/// term 0 is genuinely zero and recomputing it is free.
pub type Memo = [u128; TABLE_SIZE];

/// Term `n` of the sequence, filling `memo` on the way down.
///
/// Panics when `n >= TABLE_SIZE`.
pub fn fibonacci(n: usize, memo: &mut Memo) -> u128 {
    if memo[n] == 0 {
        memo[n] = match n {
            0 | 1 => n as u128,
            _ => fibonacci(n - 1, memo) + fibonacci(n - 2, memo),
        };
    }
    memo[n]
}

fn main() {
    let mut memo: Memo = [0; TABLE_SIZE];
    for n in 0..TABLE_SIZE {
        println!("Fibo #{}: {}", n, fibonacci(n, &mut memo));
    }
}
