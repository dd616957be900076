//! Program catalog: the versioned table of subsidy parameters.
//!
//! The catalog resolves date-dependent wage thresholds, per-program
//! amounts, durations, and required-document checklists. It can be built
//! from the shipped defaults or loaded from a YAML file.
//!
//! # Example
//!
//! ```
//! use subsidy_engine::catalog::default_catalog;
//!
//! let catalog = default_catalog().unwrap();
//! println!("Catalog version: {}", catalog.metadata().version);
//! ```

mod defaults;
mod loader;
mod types;

pub use defaults::default_catalog;
pub use loader::CatalogLoader;
pub use types::{
    CatalogMetadata, EmploymentPromotionParams, EmploymentRetentionParams, ExclusivePair,
    ParentalEmploymentStabilityParams, ProgramCatalog, ProgramParameters, ProgramTable,
    RegularConversionParams, SeniorContinuedEmploymentParams, SeniorEmploymentSupportParams,
    WageThreshold, YouthJobLeapParams,
};
