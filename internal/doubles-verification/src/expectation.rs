use std::any::Any;
use std::fmt::{Display, Formatter};

use crate::args::{ArgsMatcher, TypedArgsMatcher};
use crate::{ArgsPredicate, Sequence, Times};

type ReturnValueFactory = Box<dyn Fn() -> Box<dyn Any + Send> + Send + Sync>;

/// An expected call declared on a [CallLedger][crate::CallLedger].
///
/// Unless configured otherwise an expectation accepts any arguments and expects exactly one
/// call.
pub struct Expectation {
    method: &'static str,
    args: Option<Box<dyn ArgsMatcher>>,
    times: Times,
    sequences: Vec<Sequence>,
    return_value: Option<ReturnValueFactory>,
    call_count: usize,
    retired: bool,
}

impl Expectation {
    pub(crate) fn new(method: &'static str) -> Self {
        Self {
            method,
            args: None,
            times: Times::default(),
            sequences: vec![],
            return_value: None,
            call_count: 0,
            retired: false,
        }
    }

    /// Restrict this expectation to calls whose arguments, recorded as `Args`, satisfy the given
    /// predicates.
    ///
    /// ```
    /// use doubles_verification::CallLedger;
    /// use mockall::predicate::{eq, gt};
    ///
    /// let mut ledger = CallLedger::new();
    /// ledger.expect("go").with::<(i32, i32), _>((eq(10), gt(15)));
    ///
    /// ledger.record("go", (10, 20));
    /// ledger.verify().unwrap();
    /// ```
    pub fn with<Args, P>(&mut self, predicates: P) -> &mut Self
    where
        Args: 'static,
        P: ArgsPredicate<Args> + 'static,
    {
        self.args = Some(Box::new(TypedArgsMatcher::<Args, P>::new(predicates)));
        self
    }

    /// Set the number of calls this expectation accepts.
    ///
    /// Panics if given a [Times::Between] range whose minimum is greater than its maximum.
    pub fn times<T: Into<Times>>(&mut self, times: T) -> &mut Self {
        self.times = times.into().checked();
        self
    }

    /// Expect exactly one call.
    pub fn once(&mut self) -> &mut Self {
        self.times(Times::once())
    }

    /// Expect no call at all.
    pub fn never(&mut self) -> &mut Self {
        self.times(Times::never())
    }

    /// Add this expectation at the end of the given sequence.
    ///
    /// Can be called several times to add the expectation to several sequences.
    pub fn in_sequence(&mut self, sequence: &Sequence) -> &mut Self {
        if !self.sequences.contains(sequence) {
            self.sequences.push(sequence.clone());
        }
        self
    }

    /// Value returned to the mock each time this expectation matches a call.
    pub fn returning<R: Clone + Send + Sync + 'static>(&mut self, value: R) -> &mut Self {
        self.return_value = Some(Box::new(move || Box::new(value.clone())));
        self
    }

    /// Name of the expected method.
    pub fn method(&self) -> &'static str {
        self.method
    }

    /// Number of calls that matched this expectation so far.
    pub fn call_count(&self) -> usize {
        self.call_count
    }

    /// Number of calls this expectation accepts.
    pub fn cardinality(&self) -> Times {
        self.times
    }

    /// Check if enough calls matched this expectation.
    pub fn is_satisfied(&self) -> bool {
        self.times.is_satisfied_by(self.call_count)
    }

    pub(crate) fn is_saturated(&self) -> bool {
        self.times.is_saturated_by(self.call_count)
    }

    pub(crate) fn is_retired(&self) -> bool {
        self.retired
    }

    pub(crate) fn retire(&mut self) {
        self.retired = true;
    }

    pub(crate) fn matches(&self, method: &str, args: &dyn Any) -> bool {
        self.method == method && self.args.as_ref().is_none_or(|matcher| matcher.matches(args))
    }

    pub(crate) fn shares_a_sequence_with(&self, other: &Expectation) -> bool {
        self.sequences.iter().any(|sequence| other.sequences.contains(sequence))
    }

    pub(crate) fn sequences(&self) -> &[Sequence] {
        &self.sequences
    }

    pub(crate) fn register_call(&mut self) -> Option<Box<dyn Any + Send>> {
        self.call_count += 1;
        self.return_value.as_ref().map(|factory| factory())
    }

    /// Signature of the expected call, ie: `go(var == 10, var > 15)`.
    pub fn signature(&self) -> String {
        let args = match &self.args {
            Some(matcher) => matcher.description(),
            None => "_".to_string(),
        };
        format!("{}({args})", self.method)
    }
}

impl Display for Expectation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "`{}` expected {}, called {} {}",
            self.signature(),
            self.times,
            self.call_count,
            if self.call_count == 1 { "time" } else { "times" }
        )
    }
}

#[cfg(test)]
mod tests {
    use mockall::predicate::{eq, gt};

    use super::*;

    type GoArgs = (i32, i32);

    #[test]
    fn default_expectation_accept_any_arguments_exactly_once() {
        let expectation = Expectation::new("go");

        assert_eq!(Times::once(), expectation.cardinality());
        assert!(expectation.matches("go", &(1, 2)));
        assert!(expectation.matches("go", &()));
        assert!(!expectation.matches("stop", &()));
    }

    #[test]
    fn expectation_with_arguments_reject_other_arguments() {
        let mut expectation = Expectation::new("go");
        expectation.with::<GoArgs, _>((eq(10), eq(20)));

        assert!(expectation.matches("go", &(10, 20)));
        assert!(!expectation.matches("go", &(10, 21)));
    }

    #[test]
    fn registering_calls_update_satisfaction_and_saturation() {
        let mut expectation = Expectation::new("go");
        expectation.times(2);

        expectation.register_call();
        assert!(!expectation.is_satisfied());
        assert!(!expectation.is_saturated());

        expectation.register_call();
        assert!(expectation.is_satisfied());
        assert!(expectation.is_saturated());
    }

    #[test]
    fn registering_a_call_produce_the_configured_return_value() {
        let mut expectation = Expectation::new("add_times");
        expectation.returning(42_i32);

        let value = expectation.register_call().unwrap();

        assert_eq!(Some(&42), value.downcast_ref::<i32>());
    }

    #[test]
    fn adding_twice_the_same_sequence_is_ignored() {
        let sequence = Sequence::new();
        let mut expectation = Expectation::new("first");
        expectation.in_sequence(&sequence).in_sequence(&sequence);

        assert_eq!(1, expectation.sequences().len());
    }

    #[test]
    fn display_describe_signature_and_counts() {
        let mut expectation = Expectation::new("go");
        expectation.with::<GoArgs, _>((gt(10), eq(20))).times(4);
        expectation.register_call();

        assert_eq!(
            "`go(var > 10, var == 20)` expected exactly 4 times, called 1 time",
            expectation.to_string()
        );
    }

    #[test]
    fn expectation_with_arguments_of_another_type_reject_the_call() {
        let mut expectation = Expectation::new("go");
        expectation.with::<GoArgs, _>((eq(10), eq(20)));

        assert!(!expectation.matches("go", &(10_u8, 20_u8)));
        assert!(!expectation.matches("go", &()));
    }

    #[test]
    #[should_panic(expected = "invalid call count range: min (5) is greater than max (2)")]
    fn inverted_between_range_is_rejected() {
        let mut expectation = Expectation::new("go");

        expectation.times(Times::Between(5, 2));
    }
}
