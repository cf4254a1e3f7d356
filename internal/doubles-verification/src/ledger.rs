use std::any::Any;
use std::fmt::{Debug, Display, Formatter};
use std::sync::{Mutex, MutexGuard, PoisonError};

use slog::{Logger, warn};

use crate::{Expectation, Sequence, VerificationError};

/// A call received by a [CallLedger].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    /// Name of the called method
    pub method: &'static str,

    /// `Debug` rendering of the arguments tuple
    pub arguments: String,
}

impl Display for RecordedCall {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        // one element tuples are rendered `(x,)`
        match self.arguments.strip_suffix(",)") {
            Some(head) => write!(f, "{}{head})", self.method),
            None => write!(f, "{}{}", self.method, self.arguments),
        }
    }
}

enum Resolution {
    Uninteresting,
    Matched(Option<Box<dyn Any + Send>>),
}

#[derive(Default)]
struct LedgerState {
    expectations: Vec<Expectation>,
    calls: Vec<RecordedCall>,
    verified: bool,
}

impl LedgerState {
    fn resolve(
        &mut self,
        call: &RecordedCall,
        args: &dyn Any,
    ) -> Result<Resolution, VerificationError> {
        if !self.expectations.iter().any(|e| e.method() == call.method) {
            return Ok(Resolution::Uninteresting);
        }

        let candidates: Vec<usize> = (0..self.expectations.len())
            .filter(|&index| self.expectations[index].matches(call.method, args))
            .collect();
        let active: Vec<usize> = candidates
            .iter()
            .copied()
            .filter(|&index| !self.expectations[index].is_retired())
            .collect();

        if candidates.is_empty() {
            return Err(VerificationError::UnexpectedCall {
                call: call.to_string(),
                expectations: self
                    .expectations
                    .iter()
                    .filter(|e| e.method() == call.method)
                    .map(|e| e.to_string())
                    .collect(),
            });
        }
        if active.is_empty() {
            let retired = candidates[candidates.len() - 1];
            return Err(VerificationError::OutOfOrder {
                call: call.to_string(),
                detail: format!(
                    "{} was retired by a later call of its sequence",
                    self.expectations[retired]
                ),
            });
        }

        let unsaturated: Vec<usize> = active
            .iter()
            .copied()
            .filter(|&index| !self.expectations[index].is_saturated())
            .collect();
        let Some(&first_unsaturated) = unsaturated.first() else {
            let saturated = active[active.len() - 1];
            return Err(VerificationError::OverSaturated {
                call: call.to_string(),
                expectation: self.expectations[saturated].to_string(),
            });
        };

        let eligible = unsaturated
            .iter()
            .copied()
            .find(|&index| self.first_unsatisfied_prerequisite(index).is_none());

        match eligible {
            Some(index) => {
                self.retire_predecessors(index);
                Ok(Resolution::Matched(self.expectations[index].register_call()))
            }
            None => {
                let blocking = self
                    .first_unsatisfied_prerequisite(first_unsaturated)
                    .map(|index| self.expectations[index].to_string())
                    .unwrap_or_default();
                Err(VerificationError::OutOfOrder {
                    call: call.to_string(),
                    detail: format!("{blocking} must be satisfied first"),
                })
            }
        }
    }

    /// First earlier expectation, sharing a sequence with the one at `index`, that is still
    /// waiting for calls.
    fn first_unsatisfied_prerequisite(&self, index: usize) -> Option<usize> {
        let expectation = &self.expectations[index];
        self.expectations[..index].iter().position(|other| {
            !other.is_retired()
                && !other.is_satisfied()
                && other.shares_a_sequence_with(expectation)
        })
    }

    fn retire_predecessors(&mut self, index: usize) {
        let (predecessors, rest) = self.expectations.split_at_mut(index);
        let expectation = &rest[0];
        for other in predecessors
            .iter_mut()
            .filter(|other| other.shares_a_sequence_with(expectation))
        {
            other.retire();
        }
    }

    fn check_satisfied(&self) -> Result<(), VerificationError> {
        let unsatisfied: Vec<String> = self
            .expectations
            .iter()
            .filter(|e| !e.is_satisfied())
            .map(|e| e.to_string())
            .collect();

        if unsatisfied.is_empty() {
            Ok(())
        } else {
            Err(VerificationError::Unsatisfied {
                expectations: unsatisfied,
            })
        }
    }
}

/// Record of the calls received by a mock, checked against declared expectations.
///
/// Calls to a method without any expectation are *uninteresting*: they are accepted and only
/// logged. Calls breaking an expectation are reported as soon as they happen, expectations
/// lacking calls are reported by [verify][Self::verify] or when the ledger is dropped.
pub struct CallLedger {
    state: Mutex<LedgerState>,
    declaration_order: Option<Sequence>,
    logger: Logger,
}

impl CallLedger {
    /// Create a ledger discarding its logs.
    pub fn new() -> Self {
        Self::with_logger(Logger::root(slog::Discard, slog::o!()))
    }

    /// Create a ledger writing its warnings to the given logger.
    pub fn with_logger(logger: Logger) -> Self {
        Self {
            state: Mutex::new(LedgerState::default()),
            declaration_order: None,
            logger,
        }
    }

    fn lock(&self) -> MutexGuard<'_, LedgerState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Declare a new expectation on the given method.
    pub fn expect(&mut self, method: &'static str) -> &mut Expectation {
        let declaration_order = self.declaration_order.clone();
        let state = self.state.get_mut().unwrap_or_else(PoisonError::into_inner);
        state.verified = false;
        state.expectations.push(Expectation::new(method));

        let index = state.expectations.len() - 1;
        let expectation = &mut state.expectations[index];
        if let Some(sequence) = declaration_order {
            expectation.in_sequence(&sequence);
        }
        expectation
    }

    /// All expectations declared from now on must be satisfied in their declaration order.
    pub fn enforce_declaration_order(&mut self) {
        if self.declaration_order.is_none() {
            self.declaration_order = Some(Sequence::new());
        }
    }

    /// Record a call and match it against the declared expectations.
    ///
    /// Return the value configured on the matched expectation, if any.
    pub fn try_record<A: Debug + Send + 'static>(
        &self,
        method: &'static str,
        args: A,
    ) -> Result<Option<Box<dyn Any + Send>>, VerificationError> {
        let call = RecordedCall {
            method,
            arguments: format!("{args:?}"),
        };
        let mut state = self.lock();
        state.calls.push(call.clone());

        match state.resolve(&call, &args)? {
            Resolution::Uninteresting => {
                warn!(
                    self.logger,
                    "Uninteresting call `{call}`: no expectation declared for `{method}`"
                );
                Ok(None)
            }
            Resolution::Matched(value) => Ok(value),
        }
    }

    /// Record a call, panicking if it breaks an expectation.
    pub fn record<A: Debug + Send + 'static>(&self, method: &'static str, args: A) {
        if let Err(error) = self.try_record(method, args) {
            panic!("{error}");
        }
    }

    /// Record a call, panicking if it breaks an expectation, and return the value configured on
    /// the matched expectation or `R::default()`.
    pub fn record_returning<A, R>(&self, method: &'static str, args: A) -> R
    where
        A: Debug + Send + 'static,
        R: Default + 'static,
    {
        match self.try_record(method, args) {
            Ok(Some(value)) => match value.downcast::<R>() {
                Ok(value) => *value,
                Err(_) => panic!(
                    "Value configured for `{method}` is not a `{}`",
                    std::any::type_name::<R>()
                ),
            },
            Ok(None) => R::default(),
            Err(error) => panic!("{error}"),
        }
    }

    /// Check that every expectation received enough calls.
    ///
    /// Once verified the ledger does not check again its expectations when dropped.
    pub fn verify(&self) -> Result<(), VerificationError> {
        let mut state = self.lock();
        state.verified = true;
        state.check_satisfied()
    }

    /// Every call recorded so far, in order, including the ones that broke an expectation.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.lock().calls.clone()
    }

    /// Number of calls of the given method recorded so far.
    pub fn call_count(&self, method: &str) -> usize {
        self.lock().calls.iter().filter(|call| call.method == method).count()
    }
}

impl Default for CallLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for CallLedger {
    fn drop(&mut self) {
        if std::thread::panicking() {
            return;
        }

        let state = self.state.get_mut().unwrap_or_else(PoisonError::into_inner);
        if state.verified {
            return;
        }
        if let Err(error) = state.check_satisfied() {
            panic!("{error}");
        }
    }
}
