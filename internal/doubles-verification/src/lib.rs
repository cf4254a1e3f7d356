#![warn(missing_docs)]

//! Behavior verification for hand-written mocks.
//!
//! A mock owns a [CallLedger] and forwards every invocation of its methods to it. Tests declare
//! [expectations][Expectation] on the ledger beforehand: which method, which
//! [arguments][ArgsPredicate], how many [times][Times] and in which [order][Sequence]. Arguments
//! are checked with the [predicates][mockall::predicate] used by mockall. Calls that break the
//! declared order, exceed a count or match no expectation are reported immediately; unmet counts
//! are reported when the ledger is [verified][CallLedger::verify] or dropped.
//!
//! ```
//! use doubles_verification::CallLedger;
//! use mockall::predicate::{eq, gt};
//!
//! trait Walker {
//!     fn go(&self, x: i32, y: i32);
//! }
//!
//! struct MockWalker {
//!     ledger: CallLedger,
//! }
//!
//! impl Walker for MockWalker {
//!     fn go(&self, x: i32, y: i32) {
//!         self.ledger.record("go", (x, y));
//!     }
//! }
//!
//! let mut mock = MockWalker { ledger: CallLedger::new() };
//! mock.ledger
//!     .expect("go")
//!     .with::<(i32, i32), _>((eq(10), gt(15)))
//!     .times(2);
//!
//! mock.go(10, 20);
//! mock.go(10, 16);
//!
//! mock.ledger.verify().unwrap();
//! ```

mod args;
mod error;
mod expectation;
mod ledger;
mod sequence;
mod times;

pub use args::ArgsPredicate;
pub use error::VerificationError;
pub use expectation::Expectation;
pub use ledger::{CallLedger, RecordedCall};
pub use sequence::Sequence;
pub use times::Times;
