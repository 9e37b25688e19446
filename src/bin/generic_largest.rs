// Generic functions and structs with trait bounds
// One implementation serving integers, floats, chars and strings

use colored::Colorize;
use std::fmt::Display;

//==============================================================================
// Milestone 1: Generic function
//==============================================================================

/// The largest element, or `None` for an empty slice. Ties keep the first.
pub fn largest<T: PartialOrd>(items: &[T]) -> Option<&T> {
    let mut largest = items.first()?;
    for item in items {
        if item > largest {
            largest = item;
        }
    }
    Some(largest)
}

//==============================================================================
// Milestone 2: Generic struct with a conditional impl
//==============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Pair<T> {
    pub left: T,
    pub right: T,
}

impl<T> Pair<T> {
    pub fn new(left: T, right: T) -> Self {
        Self { left, right }
    }

    pub fn swap(self) -> Self {
        Self {
            left: self.right,
            right: self.left,
        }
    }
}

impl<T: PartialOrd + Display> Pair<T> {
    pub fn larger(&self) -> &T {
        if self.right > self.left {
            &self.right
        } else {
            &self.left
        }
    }

    pub fn describe(&self) -> String {
        format!("max({}, {}) = {}", self.left, self.right, self.larger())
    }
}

fn main() {
    println!("{}", "=== Generic largest ===".bold());

    let numbers = [34, 50, 25, 100, 65];
    let floats = [0.5, -1.25, 3.75];
    let chars = ['y', 'm', 'a', 'q'];
    let words = ["pear", "apple", "zucchini", "fig"];

    if let Some(n) = largest(&numbers) {
        println!("Largest number: {n}");
    }
    if let Some(f) = largest(&floats) {
        println!("Largest float: {f}");
    }
    if let Some(c) = largest(&chars) {
        println!("Largest char: {c}");
    }
    if let Some(w) = largest(&words) {
        println!("Largest word: {w}");
    }

    println!("{}", Pair::new(3, 7).describe());
    println!("{}", Pair::new("left", "right").swap().describe());
}
