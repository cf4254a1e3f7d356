//! Logging utilities for the test doubles crates.

use slog::Logger;

/// Extension trait for `slog::Logger`
pub trait LoggerExtensions {
    /// Create a new child logger with a `src` key containing the component name.
    fn new_with_component_name<T>(&self) -> Self;

    /// Create a new child logger with a `src` key containing the provided name.
    fn new_with_name(&self, name: &str) -> Self;
}

impl LoggerExtensions for Logger {
    fn new_with_component_name<T>(&self) -> Self {
        self.new_with_name(component_name::<T>())
    }

    fn new_with_name(&self, name: &str) -> Self {
        self.new(slog::o!("src" => name.to_owned()))
    }
}

/// Short name of a type: module path and generic parameters are stripped.
fn component_name<T>() -> &'static str {
    let complete_name = std::any::type_name::<T>();
    let without_generic = complete_name.split('<').next().unwrap_or(complete_name);

    without_generic.rsplit("::").next().unwrap_or(complete_name)
}

#[cfg(test)]
mod tests {
    use slog::info;

    use crate::test::{TempDir, TestLogger};

    use super::*;

    struct Validator;
    struct Store<T> {
        _phantom: std::marker::PhantomData<T>,
    }

    mod nested {
        pub struct NestedManager;
    }

    #[test]
    fn component_name_strip_module_path() {
        assert_eq!("Validator", component_name::<Validator>());
        assert_eq!("NestedManager", component_name::<nested::NestedManager>());
    }

    #[test]
    fn component_name_strip_generic_parameters() {
        assert_eq!("Store", component_name::<Store<String>>());
        assert_eq!("Store", component_name::<Store<nested::NestedManager>>());
        assert_eq!("Store", component_name::<Store<&str>>());
    }

    #[test]
    fn child_logger_with_component_name_write_src_key() {
        let log_path = TempDir::create("common_logging", "child_logger_with_component_name")
            .join("test.log");
        {
            let root_logger = TestLogger::file(&log_path);
            let child_logger = root_logger.new_with_component_name::<Validator>();
            info!(child_logger, "Validating");
        }

        let logs = std::fs::read_to_string(&log_path).unwrap();
        assert!(
            logs.contains("src") && logs.contains("Validator"),
            "log should contain a `src` key with the `Validator` component name, logs:\n{logs}"
        );
    }

    #[test]
    fn child_logger_with_name_write_src_key() {
        let log_path =
            TempDir::create("common_logging", "child_logger_with_name").join("test.log");
        {
            let root_logger = TestLogger::file(&log_path);
            let child_logger = root_logger.new_with_name("user store");
            info!(child_logger, "Saving");
        }

        let logs = std::fs::read_to_string(&log_path).unwrap();
        assert!(
            logs.contains("src") && logs.contains("user store"),
            "log should contain a `src` key with the `user store` name, logs:\n{logs}"
        );
    }
}
