//! Test tools shared by the test doubles crates.


pub use temp_dir::TempDir;
#[cfg(any(test, feature = "test_tools"))]
pub use test_logger::TestLogger;
