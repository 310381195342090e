//! Score-weighted distribution of a fixed discount kitty across sales agents.
//!
//! Raw metrics are normalized, reduced to one weighted score per agent and fed through a
//! sequential waterfall allocator that honors a per-agent floor and ceiling while conserving
//! the kitty exactly. Each allocation carries a short justification naming the metrics that
//! drove the agent's score.

mod allocator;
pub mod domain;
mod engine;
mod justification;
mod normalizer;
pub mod report;
pub mod request;
mod scoring;

pub use allocator::allocate;
pub use domain::{
    AllocationEntry, AllocationError, AllocationResult, Metric, NormalizedAgent, RawAgent,
    ScoredAgent, Weights,
};
pub use engine::{AllocationEngine, EngineError};
pub use justification::{justify, rank_contributions};
pub use normalizer::normalize;
pub use report::{summarize, AllocationReport, AllocationView, Summary};
pub use request::{
    validate_weights, AllocationBounds, AllocationRequest, InputError, WeightsConfig,
};
pub use scoring::score;
