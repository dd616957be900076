//! Core data models for the subsidy calculation engine.
//!
//! This module contains all the domain models used throughout the engine.

mod company;
mod employee;
mod program;
mod report;
mod result;

pub use company::{CompanyProfile, Region};
pub use employee::{Employee, InsuranceStatus, WorkType};
pub use program::{DocumentKind, Program};
pub use report::{EmployeeProgramMatrix, MatrixCell, MatrixRow, ReportAggregate};
pub use result::{Eligibility, EligibilityResult, ExclusionRecord, ReasonCode, Requirement};
