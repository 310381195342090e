use super::domain::{Metric, RawAgent, Weights};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

/// Input document describing one allocation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationRequest {
    pub site_kitty: i64,
    pub sales_agents: Vec<RawAgent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_per_agent: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_per_agent: Option<i64>,
}

/// Per-agent floor and ceiling after defaults are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationBounds {
    pub min_per_agent: i64,
    pub max_per_agent: i64,
}

impl AllocationRequest {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, InputError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, InputError> {
        let request: Self = serde_json::from_reader(reader)?;
        request.validate()?;
        Ok(request)
    }

    pub fn validate(&self) -> Result<(), InputError> {
        if self.site_kitty <= 0 {
            return Err(InputError::Validation(
                "siteKitty must be a positive amount".to_string(),
            ));
        }
        if self.sales_agents.is_empty() {
            return Err(InputError::Validation(
                "salesAgents must contain at least one agent".to_string(),
            ));
        }
        if let Some(min) = self.min_per_agent.filter(|min| *min < 0) {
            return Err(InputError::Validation(format!(
                "minPerAgent must not be negative (got {min})"
            )));
        }
        if let Some(max) = self.max_per_agent.filter(|max| *max < 0) {
            return Err(InputError::Validation(format!(
                "maxPerAgent must not be negative (got {max})"
            )));
        }

        validate_agents(&self.sales_agents)
    }

    /// Explicit values win, including zero. Otherwise the floor is a tenth of an even split
    /// and the ceiling is half the kitty.
    pub fn bounds(&self) -> AllocationBounds {
        let agents = self.sales_agents.len().max(1) as i64;
        AllocationBounds {
            min_per_agent: self
                .min_per_agent
                .unwrap_or(self.site_kitty / (agents * 10)),
            max_per_agent: self.max_per_agent.unwrap_or(self.site_kitty / 2),
        }
    }
}

pub(crate) fn validate_agents(agents: &[RawAgent]) -> Result<(), InputError> {
    let mut seen = HashSet::new();
    for agent in agents {
        if agent.id.trim().is_empty() {
            return Err(InputError::Validation(
                "every sales agent needs a non-empty id".to_string(),
            ));
        }
        if !seen.insert(agent.id.as_str()) {
            return Err(InputError::Validation(format!(
                "duplicate sales agent id '{}'",
                agent.id
            )));
        }

        let metrics = [
            ("performanceScore", agent.performance_score),
            ("seniorityMonths", agent.seniority_months),
            ("targetAchievedPercent", agent.target_achieved_percent),
            ("activeClients", agent.active_clients),
        ];
        if let Some((name, _)) = metrics.iter().find(|(_, value)| !value.is_finite()) {
            return Err(InputError::Validation(format!(
                "agent '{}' has a non-numeric {name}",
                agent.id
            )));
        }
        if let Some((name, value)) = metrics.iter().find(|(_, value)| *value < 0.0) {
            return Err(InputError::Validation(format!(
                "agent '{}' has a negative {name} ({value})",
                agent.id
            )));
        }
    }
    Ok(())
}

/// Configuration document carrying the scoring weights.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightsConfig {
    pub weights: Weights,
}

impl WeightsConfig {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, InputError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, InputError> {
        let config: Self = serde_json::from_reader(reader)?;
        validate_weights(&config.weights)?;
        Ok(config)
    }
}

pub fn validate_weights(weights: &Weights) -> Result<(), InputError> {
    for metric in Metric::ordered() {
        let value = weights.weight(metric);
        if !value.is_finite() || value < 0.0 {
            return Err(InputError::Validation(format!(
                "weight '{}' must be a non-negative number (got {value})",
                metric.label()
            )));
        }
    }
    Ok(())
}

/// Failures while loading or validating allocation input.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid JSON document: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid CSV roster: {0}")]
    Csv(#[from] csv::Error),
    #[error("{0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    const INPUT: &str = r#"{
        "siteKitty": 10000,
        "salesAgents": [
            { "id": "A1", "performanceScore": 90, "seniorityMonths": 18, "targetAchievedPercent": 85, "activeClients": 12 },
            { "id": "A2", "performanceScore": 70, "seniorityMonths": 6, "targetAchievedPercent": 60, "activeClients": 8 }
        ]
    }"#;

    #[test]
    fn parses_camel_case_input_and_applies_default_bounds() {
        let request = AllocationRequest::from_reader(INPUT.as_bytes()).expect("input parses");

        assert_eq!(request.site_kitty, 10000);
        assert_eq!(request.sales_agents[1].seniority_months, 6.0);
        assert_eq!(
            request.bounds(),
            AllocationBounds {
                min_per_agent: 500,
                max_per_agent: 5000,
            }
        );
    }

    #[test]
    fn explicit_zero_minimum_is_honored() {
        let mut request = AllocationRequest::from_reader(INPUT.as_bytes()).expect("input parses");
        request.min_per_agent = Some(0);
        request.max_per_agent = Some(7000);

        let bounds = request.bounds();

        assert_eq!(bounds.min_per_agent, 0);
        assert_eq!(bounds.max_per_agent, 7000);
    }

    #[test]
    fn rejects_missing_kitty() {
        let err = AllocationRequest::from_reader(r#"{ "salesAgents": [] }"#.as_bytes())
            .expect_err("siteKitty required");

        assert!(matches!(err, InputError::Json(_)));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let mut request = AllocationRequest::from_reader(INPUT.as_bytes()).expect("input parses");
        request.sales_agents[1].id = "A1".to_string();

        let err = request.validate().expect_err("duplicate id");

        assert!(err.to_string().contains("duplicate sales agent id 'A1'"));
    }

    #[test]
    fn rejects_negative_metrics() {
        let mut request = AllocationRequest::from_reader(INPUT.as_bytes()).expect("input parses");
        request.sales_agents[0].performance_score = -50.0;

        let err = request.validate().expect_err("negative performance");
        assert!(matches!(err, InputError::Validation(_)));
        assert!(err.to_string().contains("negative performanceScore"));

        request.sales_agents[0].performance_score = 90.0;
        request.sales_agents[1].active_clients = -1.0;
        let err = request.validate().expect_err("negative clients");
        assert!(err.to_string().contains("negative activeClients"));
    }

    #[test]
    fn percentages_above_one_hundred_are_accepted() {
        let mut request = AllocationRequest::from_reader(INPUT.as_bytes()).expect("input parses");
        request.sales_agents[0].target_achieved_percent = 140.0;

        assert!(request.validate().is_ok());
    }

    #[test]
    fn rejects_empty_roster_and_negative_bounds() {
        let mut request = AllocationRequest::from_reader(INPUT.as_bytes()).expect("input parses");
        request.max_per_agent = Some(-1);
        assert!(request.validate().is_err());

        request.max_per_agent = None;
        request.sales_agents.clear();
        assert!(request.validate().is_err());
    }

    #[test]
    fn weights_config_requires_non_negative_weights() {
        let config = WeightsConfig::from_reader(
            r#"{ "weights": { "performance": 0.4, "seniority": 0.3, "target": 0.2, "clients": 0.1 } }"#
                .as_bytes(),
        )
        .expect("weights parse");
        assert_eq!(config.weights.seniority, 0.3);

        let err = WeightsConfig::from_reader(
            r#"{ "weights": { "performance": -0.4, "seniority": 0.3, "target": 0.2, "clients": 0.1 } }"#
                .as_bytes(),
        )
        .expect_err("negative weight rejected");
        assert!(err.to_string().contains("performance"));
    }

    #[test]
    fn weights_config_requires_weights_object() {
        let err = WeightsConfig::from_reader(r#"{ "other": {} }"#.as_bytes())
            .expect_err("weights required");

        assert!(matches!(err, InputError::Json(_)));
    }
}
