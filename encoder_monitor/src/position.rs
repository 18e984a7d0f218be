use core::sync::atomic::{AtomicI32, Ordering};

use crate::decode::Direction;

/// The running quadrature position, shared between edge handlers and readers.
///
/// Reads are a single 32-bit atomic load, so a reader never sees a half
/// written value and never waits. Writers do a read-modify-write, which the
/// Cortex-M0+ cannot do atomically; it runs inside a critical section so two
/// edge handlers preempting each other cannot lose a step.
///
/// The count wraps: one step past `i32::MAX` is `i32::MIN` and vice versa.
#[derive(Debug)]
pub struct Position {
    count: AtomicI32,
}

impl Position {
    pub const fn new() -> Self {
        Self {
            count: AtomicI32::new(0),
        }
    }

    /// Starts counting from `count` instead of zero.
    pub const fn starting_at(count: i32) -> Self {
        Self {
            count: AtomicI32::new(count),
        }
    }

    /// Current count.
    pub fn get(&self) -> i32 {
        self.count.load(Ordering::Acquire)
    }

    /// Moves the count one step in `direction`, returning the new count.
    pub fn step(&self, direction: Direction) -> i32 {
        critical_section::with(|_| {
            let next = self.count.load(Ordering::Relaxed).wrapping_add(direction.delta());
            self.count.store(next, Ordering::Release);
            next
        })
    }

    /// Signed distance travelled since an earlier reading of [`Position::get`].
    ///
    /// Correct across wraparound as long as fewer than 2^31 steps happened in between.
    pub fn delta_since(&self, previous: i32) -> i32 {
        self.get().wrapping_sub(previous)
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero() {
        assert_eq!(Position::new().get(), 0);
        assert_eq!(Position::default().get(), 0);
    }

    #[test]
    fn steps_by_exactly_one() {
        let position = Position::new();
        assert_eq!(position.step(Direction::Increment), 1);
        assert_eq!(position.step(Direction::Increment), 2);
        assert_eq!(position.step(Direction::Decrement), 1);
        assert_eq!(position.get(), 1);
    }

    #[test]
    fn wraps_at_max() {
        let position = Position::starting_at(i32::MAX);
        assert_eq!(position.step(Direction::Increment), i32::MIN);
        assert_eq!(position.step(Direction::Decrement), i32::MAX);
    }

    #[test]
    fn wraps_at_min() {
        let position = Position::starting_at(i32::MIN);
        assert_eq!(position.step(Direction::Decrement), i32::MAX);
    }

    #[test]
    fn delta_since_spans_wraparound() {
        let position = Position::starting_at(i32::MAX - 1);
        let before = position.get();
        for _ in 0..4 {
            position.step(Direction::Increment);
        }
        assert_eq!(position.get(), i32::MIN + 2);
        assert_eq!(position.delta_since(before), 4);

        for _ in 0..10 {
            position.step(Direction::Decrement);
        }
        assert_eq!(position.delta_since(before), -6);
    }
}
