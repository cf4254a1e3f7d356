#![warn(missing_docs)]

//! Shared datatypes and helpers used by the test doubles crates.
//!
//! Provide:
//! - The [StdResult] alias used to propagate errors with `anyhow`.
//! - [Logger extensions][logging::LoggerExtensions] to name `slog` child loggers.
//! - Test tools: [temporary directories][test::TempDir], a
//!   [mock builder][test::mock_extensions::MockBuilder] and, with the `test_tools` feature, a
//!   test logger.

pub mod logging;
pub mod test;

/// Generic error type
pub type StdError = anyhow::Error;

/// Generic result type
pub type StdResult<T> = anyhow::Result<T, StdError>;
