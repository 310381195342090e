//! CSV import of sales agent metrics.

mod normalizer;
mod parser;

use crate::workflows::allocation::request::validate_agents;
use crate::workflows::allocation::{InputError, RawAgent};
use std::io::Read;
use std::path::Path;

pub struct RosterImporter;

impl RosterImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<RawAgent>, InputError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<RawAgent>, InputError> {
        let agents = parser::parse_agents(reader)?;
        if agents.is_empty() {
            return Err(InputError::Validation(
                "roster contains no sales agents".to_string(),
            ));
        }
        validate_agents(&agents)?;
        Ok(agents)
    }
}
