use super::domain::{Metric, NormalizedAgent, Weights};
use std::cmp::Ordering;

/// Names the two metrics that contributed most to the agent's score.
pub fn justify(agent: &NormalizedAgent, weights: &Weights) -> String {
    describe(&rank_contributions(agent, weights))
}

/// Metrics ordered by descending contribution. Ties keep declaration order.
pub fn rank_contributions(agent: &NormalizedAgent, weights: &Weights) -> Vec<Metric> {
    let mut contributions: Vec<(Metric, f64)> = Metric::ordered()
        .into_iter()
        .map(|metric| (metric, weights.contribution(agent, metric)))
        .collect();

    // sort_by is stable
    contributions.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    contributions.into_iter().map(|(metric, _)| metric).collect()
}

pub(crate) fn describe(ranked: &[Metric]) -> String {
    match ranked {
        [top, second, ..] => format!("Consistently {} and {}", top.phrase(), second.phrase()),
        [top] => format!("Consistently {}", top.phrase()),
        [] => "Balanced contribution".to_string(),
    }
}
