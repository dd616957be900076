//! Employee model and related types.
//!
//! Derived facts (age, tenure, youth/senior flags) are recomputed from the
//! supplied as-of date on every evaluation and never stored, so a roster
//! snapshot stays valid regardless of when it is re-evaluated.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents the type of employment arrangement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WorkType {
    /// Full-time employment.
    FullTime,
    /// Part-time employment.
    PartTime,
    /// Fixed-term contract employment.
    Contract,
}

/// Social-insurance enrollment flags for an employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsuranceStatus {
    /// Enrolled in employment insurance.
    pub employment: bool,
    /// Enrolled in the national pension.
    pub pension: bool,
    /// Enrolled in national health insurance.
    pub health: bool,
    /// Date insurance enrollment took effect, when known.
    #[serde(default)]
    pub enrolled_on: Option<NaiveDate>,
}

/// Represents an employee on the roster under evaluation.
///
/// A `monthly_salary` of zero means the salary is unknown or unspecified:
/// wage tests treat it as passed but the overall result is flagged for
/// review. A missing `hire_date` is handled the same way — the employee
/// is never silently excluded over a missing datum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier within the roster.
    pub id: String,
    /// The employee's date of birth.
    pub birth_date: NaiveDate,
    /// The date the employee was hired, when known.
    #[serde(default)]
    pub hire_date: Option<NaiveDate>,
    /// Monthly salary in whole KRW; zero means unknown.
    pub monthly_salary: Decimal,
    /// The type of employment arrangement.
    pub work_type: WorkType,
    /// Social-insurance enrollment status.
    pub insurance: InsuranceStatus,
}

impl Employee {
    /// The employee's age in completed years as of the given date.
    ///
    /// # Examples
    ///
    /// ```
    /// use subsidy_engine::models::{Employee, InsuranceStatus, WorkType};
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// let employee = Employee {
    ///     id: "emp_001".to_string(),
    ///     birth_date: NaiveDate::from_ymd_opt(2003, 6, 15).unwrap(),
    ///     hire_date: Some(NaiveDate::from_ymd_opt(2025, 1, 2).unwrap()),
    ///     monthly_salary: Decimal::from(2_200_000),
    ///     work_type: WorkType::FullTime,
    ///     insurance: InsuranceStatus {
    ///         employment: true,
    ///         pension: true,
    ///         health: true,
    ///         enrolled_on: None,
    ///     },
    /// };
    /// let as_of = NaiveDate::from_ymd_opt(2025, 6, 14).unwrap();
    /// assert_eq!(employee.age_on(as_of), 21);
    /// ```
    pub fn age_on(&self, as_of: NaiveDate) -> i32 {
        let mut age = as_of.year() - self.birth_date.year();
        if (as_of.month(), as_of.day()) < (self.birth_date.month(), self.birth_date.day()) {
            age -= 1;
        }
        age
    }

    /// Completed months of employment as of the given date.
    ///
    /// Returns `None` when the hire date is unknown; callers fail open
    /// into a review flag rather than excluding the employee.
    pub fn tenure_months_on(&self, as_of: NaiveDate) -> Option<u32> {
        let hire = self.hire_date?;
        if as_of < hire {
            return Some(0);
        }
        let mut months =
            (as_of.year() - hire.year()) * 12 + as_of.month() as i32 - hire.month() as i32;
        if as_of.day() < hire.day() {
            months -= 1;
        }
        Some(months.max(0) as u32)
    }

    /// Whether the employee falls in the youth age band (15-34 inclusive).
    pub fn is_youth(&self, as_of: NaiveDate) -> bool {
        let age = self.age_on(as_of);
        (15..=34).contains(&age)
    }

    /// Whether the employee is a senior worker (age 60 or above).
    pub fn is_senior(&self, as_of: NaiveDate) -> bool {
        self.age_on(as_of) >= 60
    }

    /// Whether a usable salary figure was supplied.
    pub fn has_known_salary(&self) -> bool {
        self.monthly_salary > Decimal::ZERO
    }
}
