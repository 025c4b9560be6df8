//! Core data models for the coach.

mod advice;
mod analysis;
mod assessment;
mod rank;
mod stat;

pub use advice::*;
pub use analysis::*;
pub use assessment::*;
pub use rank::*;
pub use stat::*;
