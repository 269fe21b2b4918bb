//! Front half of the pipeline: marker arguments and member classification.

pub mod attributes;
pub mod scanner;

pub use attributes::{find_union_attr, is_union_attr, UnionArgs};
pub use scanner::{DeclarationScanner, Eligibility, Member, ScannedModule};
