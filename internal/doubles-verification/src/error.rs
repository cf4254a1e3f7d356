use thiserror::Error;

/// Failures reported by a [CallLedger][crate::CallLedger].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VerificationError {
    /// The method has expectations but none of them accept the call arguments.
    #[error("Unexpected call `{call}`, the arguments match none of:\n{}", .expectations.join("\n"))]
    UnexpectedCall {
        /// The offending call
        call: String,
        /// Expectations declared for the called method
        expectations: Vec<String>,
    },

    /// Every expectation accepting the call already reached its upper bound.
    #[error("Call `{call}` exceeds the expected number of calls: {expectation}")]
    OverSaturated {
        /// The offending call
        call: String,
        /// The saturated expectation
        expectation: String,
    },

    /// The call breaks the order declared by a sequence.
    #[error("Call `{call}` is out of order: {detail}")]
    OutOfOrder {
        /// The offending call
        call: String,
        /// Which expectation of the sequence blocks the call
        detail: String,
    },

    /// Some expectations did not receive enough calls.
    #[error("Unsatisfied expectations:\n{}", .expectations.join("\n"))]
    Unsatisfied {
        /// The unsatisfied expectations
        expectations: Vec<String>,
    },
}
