// ============================================================================
// Engine Module
// Value extraction and field-wise arithmetic over operable models
// ============================================================================

mod arithmetic;
mod extractor;

pub use arithmetic::{
    combine, matches, negate, scale, sum, Arithmetic, CombineOp, Operand, ScaleOp,
};
pub use extractor::operable_values;
