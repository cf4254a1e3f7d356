/// Something moving by steps.
#[cfg_attr(test, mockall::automock)]
pub trait Walker: Send + Sync {
    /// Move by the given step.
    fn go(&self, x: i32, y: i32);
}

/// Move twice by `(10, 20)`.
pub fn walk_twice(walker: &dyn Walker) {
    walker.go(10, 20);
    walker.go(10, 20);
}

/// Move four times by `(10, 20)`.
pub fn walk_four_times(walker: &dyn Walker) {
    for _ in 0..4 {
        walker.go(10, 20);
    }
}

/// Move by four growing steps, from `(11, 21)` to `(14, 24)`.
pub fn walk_diagonal(walker: &dyn Walker) {
    for step in 1..=4 {
        walker.go(10 + step, 20 + step);
    }
}
