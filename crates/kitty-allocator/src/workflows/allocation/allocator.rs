use super::domain::{AllocationEntry, AllocationError, AllocationResult, ScoredAgent};

/// Distributes `total_kitty` across `agents` with a sequential waterfall.
///
/// Every agent starts at `min_per_agent`. The remainder is then walked in input order: each
/// agent takes its rounded proportional share of what is still unallocated, measured against
/// the scores of the agents not yet visited, capped at `max_per_agent`. Whatever rounding or
/// capping leaves behind lands on the last agent, which may therefore fall outside
/// `[min_per_agent, max_per_agent]`.
///
/// The result depends on the order of `agents`; permuting the input changes the split.
///
/// Both bounds must be non-negative.
pub fn allocate(
    agents: &[ScoredAgent],
    total_kitty: i64,
    min_per_agent: i64,
    max_per_agent: i64,
) -> Result<AllocationResult, AllocationError> {
    if min_per_agent < 0 || max_per_agent < 0 {
        return Err(AllocationError::NegativeBounds {
            min_per_agent,
            max_per_agent,
        });
    }

    let floor_total = min_per_agent
        .checked_mul(agents.len() as i64)
        .filter(|floor_total| total_kitty >= *floor_total)
        .ok_or(AllocationError::Infeasible {
            total_kitty,
            min_per_agent,
            agents: agents.len(),
        })?;

    if max_per_agent < min_per_agent {
        return Err(AllocationError::InvertedBounds {
            min_per_agent,
            max_per_agent,
        });
    }
    if agents.is_empty() {
        return Err(AllocationError::NoAgents);
    }

    let mut entries: Vec<AllocationEntry> = agents
        .iter()
        .map(|agent| AllocationEntry {
            id: agent.id.clone(),
            discount: min_per_agent,
        })
        .collect();

    let mut total_allocated = floor_total;
    let mut remaining = total_kitty - floor_total;
    let mut score_remaining: f64 = agents.iter().map(|agent| agent.score).sum();

    for (agent, entry) in agents.iter().zip(entries.iter_mut()) {
        let share = proportional_share(agent.score, score_remaining, remaining);
        let max_allowed = max_per_agent - entry.discount;
        let allocatable = share.min(max_allowed);

        entry.discount += allocatable;
        total_allocated += allocatable;
        remaining -= allocatable;
        score_remaining -= agent.score;
    }

    if remaining != 0 {
        if let Some(last) = entries.last_mut() {
            last.discount += remaining;
            total_allocated += remaining;
            remaining = 0;
        }
    }

    Ok(AllocationResult {
        entries,
        total_allocated,
        total_discount_remaining: remaining,
    })
}

// An exhausted score pool yields no share rather than NaN or infinity.
fn proportional_share(score: f64, score_remaining: f64, remaining: i64) -> i64 {
    if score_remaining <= 0.0 {
        return 0;
    }
    let share = (score / score_remaining) * remaining as f64;
    if share.is_finite() {
        share.round() as i64
    } else {
        0
    }
}
