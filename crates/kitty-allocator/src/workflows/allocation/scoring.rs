use super::domain::{Metric, NormalizedAgent, ScoredAgent, Weights};

pub fn score(agents: &[NormalizedAgent], weights: &Weights) -> Vec<ScoredAgent> {
    agents
        .iter()
        .map(|agent| ScoredAgent {
            id: agent.id.clone(),
            score: round_cents(weighted_sum(agent, weights)),
        })
        .collect()
}

fn weighted_sum(agent: &NormalizedAgent, weights: &Weights) -> f64 {
    Metric::ordered()
        .into_iter()
        .map(|metric| weights.contribution(agent, metric))
        .sum()
}

// f64::round rounds half away from zero.
fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
