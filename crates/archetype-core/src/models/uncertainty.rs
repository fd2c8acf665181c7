//! Uncertainty parameters and the exported payload.

use serde::{Deserialize, Serialize};

/// Empirical distribution parameters for an archetype CF.
///
/// `amount` is the CF's own deterministic value and is kept apart from
/// `loc`, the mean of the aggregated descendants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UncertaintyParams {
    /// Distribution-family code.
    #[serde(rename = "uncertainty type")]
    pub uncertainty_type: i64,
    pub amount: f64,
    pub loc: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<f64>,
    pub minimum: f64,
    pub maximum: f64,
}

/// What the persistence collaborator receives for one flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CfPayload {
    /// Bare deterministic value.
    Deterministic(f64),
    /// Full parameter mapping; `amount` doubles as the deterministic fallback.
    Uncertain(UncertaintyParams),
}

impl CfPayload {
    /// The deterministic figure carried by either form.
    pub fn amount(&self) -> f64 {
        match self {
            Self::Deterministic(value) => *value,
            Self::Uncertain(params) => params.amount,
        }
    }

    pub fn is_deterministic(&self) -> bool {
        matches!(self, Self::Deterministic(_))
    }
}
