use super::normalizer::clean_id;
use crate::workflows::allocation::RawAgent;
use serde::Deserialize;
use std::io::Read;

pub(crate) fn parse_agents<R: Read>(reader: R) -> Result<Vec<RawAgent>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut agents = Vec::new();

    for record in csv_reader.deserialize::<RosterRow>() {
        let row = record?;
        agents.push(row.into_agent());
    }

    Ok(agents)
}

#[derive(Debug, Deserialize)]
struct RosterRow {
    id: String,
    #[serde(rename = "performanceScore", alias = "performance_score")]
    performance_score: f64,
    #[serde(rename = "seniorityMonths", alias = "seniority_months")]
    seniority_months: f64,
    #[serde(rename = "targetAchievedPercent", alias = "target_achieved_percent")]
    target_achieved_percent: f64,
    #[serde(rename = "activeClients", alias = "active_clients")]
    active_clients: f64,
}

impl RosterRow {
    fn into_agent(self) -> RawAgent {
        RawAgent {
            id: clean_id(&self.id),
            performance_score: self.performance_score,
            seniority_months: self.seniority_months,
            target_achieved_percent: self.target_achieved_percent,
            active_clients: self.active_clients,
        }
    }
}
