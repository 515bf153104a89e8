//! SLA evaluator.

mod evaluator;

pub use evaluator::{
    CriticalEscalation, SlaEvaluation, SlaEvaluator, SlaWarning, WARNING_THRESHOLD,
};
