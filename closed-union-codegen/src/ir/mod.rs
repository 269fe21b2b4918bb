//! Intermediate representation of an annotated union.

pub mod generics;
pub mod model;

pub use model::{ArgSummary, CaseArg, CaseSummary, CaseType, ModelBuilder, ModelSummary, UnionModel};
