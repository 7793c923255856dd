//! Return-on-investment estimate for fixing a batch of reports early.

use serde::{Deserialize, Serialize};

use crate::traits::{Report, Severity};

/// Repair cost assumed for reports without a quote.
pub const DEFAULT_REPAIR_COST: f64 = 500.0;

/// Damage avoided per unit of repair spend when fixing early.
pub const PREVENTED_COST_FACTOR: f64 = 1.5;

/// Liability avoided per severe report.
pub const LAWSUIT_PREVENTION_PER_SEVERE: f64 = 10_000.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoiEstimate {
    pub repair_cost: f64,
    pub prevented_cost: f64,
    pub lawsuit_prevention: f64,
    pub total_savings: f64,
    /// Savings over repair cost, in whole percent. Zero when nothing is spent.
    pub roi_percent: i64,
}

pub fn estimate_roi<R: Report>(reports: &[R]) -> RoiEstimate {
    let repair_cost: f64 = reports
        .iter()
        .map(|report| match report.estimated_cost() {
            Some(cost) if cost.is_finite() && cost > 0.0 => cost,
            _ => DEFAULT_REPAIR_COST,
        })
        .sum();
    let prevented_cost = repair_cost * PREVENTED_COST_FACTOR;
    let severe = reports
        .iter()
        .filter(|report| report.severity() == Some(Severity::Severe))
        .count();
    let lawsuit_prevention = severe as f64 * LAWSUIT_PREVENTION_PER_SEVERE;
    let total_savings = prevented_cost + lawsuit_prevention - repair_cost;

    let roi_percent = if repair_cost > 0.0 {
        (total_savings / repair_cost * 100.0).round() as i64
    } else {
        0
    };

    RoiEstimate {
        repair_cost,
        prevented_cost,
        lawsuit_prevention,
        total_savings,
        roi_percent,
    }
}
