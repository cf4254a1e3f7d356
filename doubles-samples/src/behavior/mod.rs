//! Routines verified by their behavior rather than by their state.
//!
//! Those routines return nothing observable: the only way to test them is to check the calls
//! they make on their collaborator. Tests use recording mocks backed by a call ledger
//! (checking call counts, arguments and call order) and `mockall` mocks.

mod calculator;
mod pipeline;
mod walker;

pub use calculator::{Calculator, CalculatorUser, Element, SimpleCalculator};
pub use pipeline::{Pipeline, run_in_order, run_interleaved};
pub use walker::{Walker, walk_diagonal, walk_four_times, walk_twice};
