use std::fmt::{Display, Formatter};
use std::ops::RangeInclusive;

/// Number of calls an [Expectation][crate::Expectation] accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Times {
    /// Exactly `n` calls.
    Exactly(usize),

    /// `n` calls or more.
    AtLeast(usize),

    /// `n` calls or less.
    AtMost(usize),

    /// Between `min` and `max` calls, both included.
    Between(usize, usize),

    /// Any number of calls, including none.
    AnyNumber,
}

impl Times {
    /// Exactly one call.
    pub fn once() -> Self {
        Self::Exactly(1)
    }

    /// No call at all.
    pub fn never() -> Self {
        Self::Exactly(0)
    }

    /// Between `min` and `max` calls, both included.
    ///
    /// Panics if `min` is greater than `max`.
    pub fn between(min: usize, max: usize) -> Self {
        assert!(
            min <= max,
            "invalid call count range: min ({min}) is greater than max ({max})"
        );
        Self::Between(min, max)
    }

    /// Panics on a [Times::Between] built without [Times::between] and holding an inverted range.
    pub(crate) fn checked(self) -> Self {
        match self {
            Self::Between(min, max) => Self::between(min, max),
            times => times,
        }
    }

    fn lower_bound(&self) -> usize {
        match self {
            Self::Exactly(n) | Self::AtLeast(n) | Self::Between(n, _) => *n,
            Self::AtMost(_) | Self::AnyNumber => 0,
        }
    }

    fn upper_bound(&self) -> Option<usize> {
        match self {
            Self::Exactly(n) | Self::AtMost(n) | Self::Between(_, n) => Some(*n),
            Self::AtLeast(_) | Self::AnyNumber => None,
        }
    }

    /// Check if `count` calls reach the lower bound.
    pub fn is_satisfied_by(&self, count: usize) -> bool {
        count >= self.lower_bound()
    }

    /// Check if `count` calls reach the upper bound, meaning that no more call is accepted.
    pub fn is_saturated_by(&self, count: usize) -> bool {
        self.upper_bound().is_some_and(|max| count >= max)
    }
}

impl Default for Times {
    fn default() -> Self {
        Self::once()
    }
}

impl From<usize> for Times {
    fn from(count: usize) -> Self {
        Self::Exactly(count)
    }
}

impl From<RangeInclusive<usize>> for Times {
    fn from(range: RangeInclusive<usize>) -> Self {
        Self::between(*range.start(), *range.end())
    }
}

fn plural(count: usize) -> &'static str {
    if count == 1 { "time" } else { "times" }
}

impl Display for Times {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exactly(0) => write!(f, "never"),
            Self::Exactly(1) => write!(f, "exactly once"),
            Self::Exactly(n) => write!(f, "exactly {n} times"),
            Self::AtLeast(n) => write!(f, "at least {n} {}", plural(*n)),
            Self::AtMost(n) => write!(f, "at most {n} {}", plural(*n)),
            Self::Between(min, max) => write!(f, "between {min} and {max} times"),
            Self::AnyNumber => write!(f, "any number of times"),
        }
    }
}
