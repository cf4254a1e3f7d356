use slog::{Logger, debug};

use doubles_common::logging::LoggerExtensions;

/// An element to add, all elements are equal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Element;

/// Add elements.
pub trait Calculator: Send + Sync {
    /// Add a single element.
    fn add(&self, _element: Element) -> i32 {
        1
    }

    /// Add the element the given number of times.
    fn add_times(&self, times: i32, element: Element) -> i32;
}

/// A [Calculator] counting the added elements.
#[derive(Debug, Default)]
pub struct SimpleCalculator;

impl Calculator for SimpleCalculator {
    fn add_times(&self, times: i32, _element: Element) -> i32 {
        times
    }
}

/// Add a fixed batch of elements with a [Calculator].
pub struct CalculatorUser {
    logger: Logger,
}

impl CalculatorUser {
    /// CalculatorUser factory
    pub fn new(logger: Logger) -> Self {
        Self {
            logger: logger.new_with_component_name::<Self>(),
        }
    }

    /// Add 210 then 10 elements, return the sum of the calculator results.
    pub fn add(&self, calculator: &dyn Calculator) -> i32 {
        let total = calculator.add_times(210, Element) + calculator.add_times(10, Element);
        debug!(self.logger, "Elements added"; "total" => total);

        total
    }
}
