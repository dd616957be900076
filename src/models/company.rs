//! Company profile model.
//!
//! The company profile is an immutable input to every rule evaluation,
//! created once per calculation request.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Region classification driving region-dependent amounts.
///
/// Several programs pay a different rate, or apply stricter sub-tests,
/// depending on whether the company sits inside the capital region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Region {
    /// Seoul metropolitan area.
    Capital,
    /// Everywhere outside the capital region.
    NonCapital,
}

/// Represents the employer requesting a subsidy calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyProfile {
    /// Registered legal name of the company.
    pub legal_name: String,
    /// Business registration number.
    pub registration_number: String,
    /// Region the company operates in.
    pub region: Region,
    /// Whether the company qualifies as a small business.
    pub is_small_business: bool,
    /// The date the business opened.
    pub opening_date: NaiveDate,
    /// Standard industry classification code.
    pub industry_code: String,
}

impl CompanyProfile {
    /// Returns true if the company is outside the capital region.
    pub fn is_non_capital(&self) -> bool {
        self.region == Region::NonCapital
    }
}
