//! Fibonacci target ladder.
//!
//! The recognized range is the fixed table below. Values past its last
//! entry are never Fibonacci as far as the game is concerned, and the
//! target saturates at the last entry.

/// Recognized Fibonacci values, including the duplicate leading 1.
pub const FIB_SEQUENCE: [u64; 17] = [
    1, 1, 2, 3, 5, 8, 13, 21, 34, 55, 89, 144, 233, 377, 610, 987, 1597,
];

/// Target after a target that is not in the table.
const RESTART_TARGET: u64 = 2;

/// Whether `n` is in the table.
#[must_use]
pub fn is_fibonacci(n: u64) -> bool {
    FIB_SEQUENCE.contains(&n)
}

/// The target that follows `current`.
///
/// Uses the last occurrence of `current`, so the target after 1 is 2.
/// Unknown values restart at 2; the final entry maps to itself.
#[must_use]
pub fn next_required_fib(current: u64) -> u64 {
    match FIB_SEQUENCE.iter().rposition(|&f| f == current) {
        None => RESTART_TARGET,
        Some(i) => FIB_SEQUENCE
            .get(i + 1)
            .copied()
            .unwrap_or(FIB_SEQUENCE[FIB_SEQUENCE.len() - 1]),
    }
}

/// Whether `target` is the saturated final entry.
#[must_use]
pub fn is_final_target(target: u64) -> bool {
    FIB_SEQUENCE.last() == Some(&target)
}
