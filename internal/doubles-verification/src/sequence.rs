use std::sync::atomic::{AtomicUsize, Ordering};

static NEXT_SEQUENCE_ID: AtomicUsize = AtomicUsize::new(0);

/// An ordering chain of expectations.
///
/// Expectations added to a sequence must be satisfied in their declaration order. An expectation
/// can belong to several sequences, which allows to express partial orders as a set of
/// independent chains sharing some steps.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Sequence {
    id: usize,
}

impl Sequence {
    /// Create a new, empty, sequence.
    pub fn new() -> Self {
        Self {
            id: NEXT_SEQUENCE_ID.fetch_add(1, Ordering::Relaxed),
        }
    }
}

impl Default for Sequence {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_sequences_are_distinct() {
        let first = Sequence::new();
        let second = Sequence::new();

        assert_ne!(first, second);
        assert_eq!(first, first.clone());
    }
}
