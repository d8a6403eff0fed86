//! Core data models for match analysis.

mod analysis;
mod grade;
mod match_record;
mod rank;
mod sample;
mod summary;

pub use analysis::*;
pub use grade::*;
pub use match_record::*;
pub use rank::*;
pub use sample::*;
pub use summary::*;
