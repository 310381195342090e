use super::domain::{NormalizedAgent, RawAgent};

/// Rescales raw metrics. Seniority and clients are divided by the largest value in the
/// batch; percentages are divided by 100 and left unclamped.
pub fn normalize(agents: &[RawAgent]) -> Vec<NormalizedAgent> {
    let max_seniority = batch_max(agents, |agent| agent.seniority_months);
    let max_clients = batch_max(agents, |agent| agent.active_clients);

    agents
        .iter()
        .map(|agent| NormalizedAgent {
            id: agent.id.clone(),
            performance_score: agent.performance_score / 100.0,
            seniority_months: agent.seniority_months / max_seniority,
            target_achieved_percent: agent.target_achieved_percent / 100.0,
            active_clients: agent.active_clients / max_clients,
        })
        .collect()
}

// A zero maximum becomes 1 so an all-zero metric normalizes to 0.
fn batch_max(agents: &[RawAgent], metric: impl Fn(&RawAgent) -> f64) -> f64 {
    let max = agents.iter().map(metric).fold(0.0_f64, f64::max);
    if max == 0.0 {
        1.0
    } else {
        max
    }
}
