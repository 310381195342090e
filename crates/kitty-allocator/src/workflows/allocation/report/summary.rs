use super::super::domain::AllocationError;
use serde::{Deserialize, Serialize};

/// Descriptive statistics over the final discount list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total_kitty: i64,
    pub total_allocated: i64,
    pub remaining_kitty: i64,
    pub average_discount: i64,
    pub max_discount: i64,
    pub min_discount: i64,
}

pub fn summarize(
    total_kitty: i64,
    total_allocated: i64,
    remaining_kitty: i64,
    discounts: &[i64],
) -> Result<Summary, AllocationError> {
    let (Some(&max_discount), Some(&min_discount)) =
        (discounts.iter().max(), discounts.iter().min())
    else {
        return Err(AllocationError::NoAgents);
    };

    let average_discount = (total_allocated as f64 / discounts.len() as f64).round() as i64;

    Ok(Summary {
        total_kitty,
        total_allocated,
        remaining_kitty,
        average_discount,
        max_discount,
        min_discount,
    })
}
