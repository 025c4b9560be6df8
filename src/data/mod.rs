//! Static reference data: rank benchmarks and the advice catalog.
//!
//! Both tables are built once at start-up and shared read-only.

mod advice;
mod benchmarks;

pub use advice::AdviceCatalog;
pub use benchmarks::{BenchmarkTable, StatLine};

use thiserror::Error;

use crate::models::Rank;

/// Errors raised while building reference tables.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("Benchmark table has no ranks")]
    EmptyTable,

    #[error("Rank listed more than once: {0}")]
    DuplicateRank(Rank),

    #[error("Stat listed more than once for rank {0}")]
    DuplicateStat(Rank),

    #[error("Stat set for rank {0} differs from the other ranks")]
    InconsistentStats(Rank),
}
