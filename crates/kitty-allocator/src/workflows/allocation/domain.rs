use serde::{Deserialize, Serialize};

/// Raw per-agent metrics as supplied by the input loader.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawAgent {
    pub id: String,
    pub performance_score: f64,
    pub seniority_months: f64,
    pub target_achieved_percent: f64,
    pub active_clients: f64,
}

/// Agent metrics rescaled onto comparable ranges by the normalizer.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedAgent {
    pub id: String,
    pub performance_score: f64,
    pub seniority_months: f64,
    pub target_achieved_percent: f64,
    pub active_clients: f64,
}

impl NormalizedAgent {
    pub fn metric(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Performance => self.performance_score,
            Metric::Seniority => self.seniority_months,
            Metric::Target => self.target_achieved_percent,
            Metric::Clients => self.active_clients,
        }
    }
}

/// Relative emphasis per metric. The values need not sum to one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Weights {
    pub performance: f64,
    pub seniority: f64,
    pub target: f64,
    pub clients: f64,
}

impl Weights {
    pub fn weight(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Performance => self.performance,
            Metric::Seniority => self.seniority,
            Metric::Target => self.target,
            Metric::Clients => self.clients,
        }
    }

    /// Weighted contribution of one metric for the given agent.
    pub fn contribution(&self, agent: &NormalizedAgent, metric: Metric) -> f64 {
        self.weight(metric) * agent.metric(metric)
    }
}

/// The fixed set of scoring metrics, in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Performance,
    Seniority,
    Target,
    Clients,
}

impl Metric {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::Performance,
            Self::Seniority,
            Self::Target,
            Self::Clients,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Performance => "performance",
            Self::Seniority => "seniority",
            Self::Target => "target",
            Self::Clients => "clients",
        }
    }

    /// Phrase used when this metric drives an agent's justification.
    pub const fn phrase(self) -> &'static str {
        match self {
            Self::Performance => "high performance",
            Self::Seniority => "long-term contribution",
            Self::Target => "strong target achievement",
            Self::Clients => "solid client base",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredAgent {
    pub id: String,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationEntry {
    pub id: String,
    pub discount: i64,
}

/// Outcome of a single allocator call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationResult {
    pub entries: Vec<AllocationEntry>,
    pub total_allocated: i64,
    pub total_discount_remaining: i64,
}

impl AllocationResult {
    pub fn discounts(&self) -> Vec<i64> {
        self.entries.iter().map(|entry| entry.discount).collect()
    }
}

/// Failures raised by the allocation core.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AllocationError {
    #[error(
        "kitty of {total_kitty} cannot cover the minimum of {min_per_agent} for {agents} agent(s)"
    )]
    Infeasible {
        total_kitty: i64,
        min_per_agent: i64,
        agents: usize,
    },
    #[error("maxPerAgent ({max_per_agent}) is below minPerAgent ({min_per_agent})")]
    InvertedBounds {
        min_per_agent: i64,
        max_per_agent: i64,
    },
    #[error("per-agent bounds must not be negative (min {min_per_agent}, max {max_per_agent})")]
    NegativeBounds {
        min_per_agent: i64,
        max_per_agent: i64,
    },
    #[error("no agents to allocate across")]
    NoAgents,
}
