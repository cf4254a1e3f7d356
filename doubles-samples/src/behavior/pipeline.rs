/// A four steps process.
#[cfg_attr(test, mockall::automock)]
pub trait Pipeline: Send + Sync {
    /// First step
    fn first(&self);

    /// Second step
    fn second(&self);

    /// Third step
    fn third(&self);

    /// Fourth step
    fn fourth(&self);
}

/// Run the steps in their natural order.
pub fn run_in_order(pipeline: &dyn Pipeline) {
    pipeline.first();
    pipeline.second();
    pipeline.third();
    pipeline.fourth();
}

/// Run the third step before the second one.
///
/// Valid as long as the second and third steps only depend on the first one.
pub fn run_interleaved(pipeline: &dyn Pipeline) {
    pipeline.first();
    pipeline.third();
    pipeline.second();
    pipeline.fourth();
}

#[cfg(test)]
mod tests {
    use mockall::Sequence as MockallSequence;

    use doubles_verification::{CallLedger, Sequence};

    use super::*;

    #[derive(Default)]
    struct RecordingPipeline {
        ledger: CallLedger,
    }

    impl Pipeline for RecordingPipeline {
        fn first(&self) {
            self.ledger.record("first", ());
        }

        fn second(&self) {
            self.ledger.record("second", ());
        }

        fn third(&self) {
            self.ledger.record("third", ());
        }

        fn fourth(&self) {
            self.ledger.record("fourth", ());
        }
    }

    fn strictly_ordered_pipeline() -> RecordingPipeline {
        let mut pipeline = RecordingPipeline::default();
        pipeline.ledger.enforce_declaration_order();
        pipeline.ledger.expect("first");
        pipeline.ledger.expect("second");
        pipeline.ledger.expect("third");
        pipeline.ledger.expect("fourth");
        pipeline
    }

    /// `first` -> `second` -> `fourth` and `first` -> `third`.
    fn partially_ordered_pipeline() -> RecordingPipeline {
        let mut pipeline = RecordingPipeline::default();
        let (seq1, seq2) = (Sequence::new(), Sequence::new());
        pipeline.ledger.expect("first").in_sequence(&seq1).in_sequence(&seq2);
        pipeline.ledger.expect("second").in_sequence(&seq1);
        pipeline.ledger.expect("third").in_sequence(&seq2);
        pipeline.ledger.expect("fourth").in_sequence(&seq1);
        pipeline
    }

    #[test]
    fn run_in_order_follow_the_strict_order() {
        let pipeline = strictly_ordered_pipeline();

        run_in_order(&pipeline);

        pipeline.ledger.verify().unwrap();
    }

    #[test]
    #[should_panic(expected = "Call `third()` is out of order")]
    fn run_interleaved_break_the_strict_order() {
        let pipeline = strictly_ordered_pipeline();

        run_interleaved(&pipeline);
    }

    #[test]
    fn run_interleaved_follow_the_partial_order() {
        let pipeline = partially_ordered_pipeline();

        run_interleaved(&pipeline);

        pipeline.ledger.verify().unwrap();
    }

    #[test]
    fn run_in_order_also_follow_the_partial_order() {
        let pipeline = partially_ordered_pipeline();

        run_in_order(&pipeline);

        pipeline.ledger.verify().unwrap();
    }

    #[test]
    fn fourth_before_second_break_the_partial_order() {
        let pipeline = partially_ordered_pipeline();

        pipeline.first();
        pipeline.third();
        let error = pipeline.ledger.try_record("fourth", ()).unwrap_err();

        assert!(
            error.to_string().contains("`second(_)` expected exactly once"),
            "the blocking step should be reported, got: {error}"
        );
        pipeline.ledger.verify().unwrap_err();
    }

    #[test]
    fn run_in_order_with_mockall_sequence() {
        let mut pipeline = MockPipeline::new();
        let mut seq = MockallSequence::new();
        pipeline.expect_first().once().in_sequence(&mut seq).return_const(());
        pipeline.expect_second().once().in_sequence(&mut seq).return_const(());
        pipeline.expect_third().once().in_sequence(&mut seq).return_const(());
        pipeline.expect_fourth().once().in_sequence(&mut seq).return_const(());

        run_in_order(&pipeline);
    }
}
