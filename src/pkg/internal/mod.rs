pub mod adaptors;
pub mod evaluator;
pub mod mcq;
