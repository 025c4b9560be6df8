pub mod analysis;
pub mod benchmarks;
pub mod health;
