use super::allocator::allocate;
use super::domain::{AllocationError, Weights};
use super::justification::justify;
use super::normalizer::normalize;
use super::report::{summarize, AllocationReport, AllocationView};
use super::request::{validate_weights, AllocationRequest, InputError};
use super::scoring::score;
use tracing::debug;

/// Runs normalization, scoring, allocation and justification for one request.
pub struct AllocationEngine {
    weights: Weights,
}

impl AllocationEngine {
    pub fn new(weights: Weights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &Weights {
        &self.weights
    }

    pub fn run(&self, request: &AllocationRequest) -> Result<AllocationReport, EngineError> {
        validate_weights(&self.weights)?;
        request.validate()?;

        let bounds = request.bounds();
        debug!(
            agents = request.sales_agents.len(),
            site_kitty = request.site_kitty,
            min_per_agent = bounds.min_per_agent,
            max_per_agent = bounds.max_per_agent,
            "allocating kitty"
        );

        let normalized = normalize(&request.sales_agents);
        let scored = score(&normalized, &self.weights);
        let result = allocate(
            &scored,
            request.site_kitty,
            bounds.min_per_agent,
            bounds.max_per_agent,
        )?;

        let summary = summarize(
            request.site_kitty,
            result.total_allocated,
            result.total_discount_remaining,
            &result.discounts(),
        )?;

        let allocations = result
            .entries
            .into_iter()
            .zip(&normalized)
            .map(|(entry, agent)| AllocationView {
                id: entry.id,
                assigned_discount: entry.discount,
                justification: justify(agent, &self.weights),
            })
            .collect();

        debug!(
            total_allocated = summary.total_allocated,
            max_discount = summary.max_discount,
            min_discount = summary.min_discount,
            "allocation complete"
        );

        Ok(AllocationReport {
            allocations,
            summary,
        })
    }
}

/// Error raised by the allocation engine.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Allocation(#[from] AllocationError),
}
