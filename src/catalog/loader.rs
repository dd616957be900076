//! Catalog loading functionality.
//!
//! This module provides the [`CatalogLoader`] type for loading a program
//! catalog from a YAML file, so deployment tooling can swap fiscal-year
//! figures without touching evaluator logic.

use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::info;

use crate::error::{EngineError, EngineResult};

use super::types::{CatalogMetadata, ExclusivePair, ProgramCatalog, ProgramTable, WageThreshold};

/// On-disk catalog file structure.
#[derive(Debug, Clone, Deserialize)]
struct CatalogFile {
    metadata: CatalogMetadata,
    minimum_wage: Vec<WageThreshold>,
    programs: ProgramTable,
    #[serde(default)]
    exclusions: Vec<ExclusivePair>,
}

/// Loads a program catalog from a YAML file.
///
/// # File Structure
///
/// ```text
/// config/catalog/
/// └── 2025.yaml   # Parameters announced for fiscal year 2025
/// ```
///
/// # Example
///
/// ```no_run
/// use subsidy_engine::catalog::CatalogLoader;
///
/// let catalog = CatalogLoader::load("./config/catalog/2025.yaml").unwrap();
/// println!("Catalog version: {}", catalog.metadata().version);
/// ```
#[derive(Debug)]
pub struct CatalogLoader;

impl CatalogLoader {
    /// Loads and validates a catalog from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns the validated [`ProgramCatalog`] on success, or an error if:
    /// - The file is missing (`CatalogNotFound`)
    /// - The file contains invalid YAML (`CatalogParseError`)
    /// - The parsed data fails validation (`CatalogInvalid`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<ProgramCatalog> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::CatalogNotFound {
            path: path_str.clone(),
        })?;

        let file: CatalogFile =
            serde_yaml::from_str(&content).map_err(|e| EngineError::CatalogParseError {
                path: path_str.clone(),
                message: e.to_string(),
            })?;

        let catalog = ProgramCatalog::new(
            file.metadata,
            file.minimum_wage,
            file.programs,
            file.exclusions,
        )?;

        info!(
            path = %path_str,
            version = %catalog.metadata().version,
            "Loaded program catalog"
        );

        Ok(catalog)
    }
}
