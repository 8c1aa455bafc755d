//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading statutory
//! tax-table sets from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{TableSetMetadata, TaxTables};

/// Loads and provides access to the statutory table sets.
///
/// The `ConfigLoader` reads YAML configuration files from a directory and
/// provides methods to select the table set applicable to a calendar year.
///
/// # Directory Structure
///
/// ```text
/// config/clt/
/// ├── metadata.yaml   # Table set metadata
/// └── tables/
///     ├── 2024.yaml   # Statutory values effective for 2024
///     └── 2025.yaml   # Statutory values effective for 2025
/// ```
///
/// # Example
///
/// ```no_run
/// use clt_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/clt").unwrap();
///
/// let tables = loader.for_year(2024).unwrap();
/// println!("Minimum wage: R$ {}", tables.minimum_wage);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    metadata: TableSetMetadata,
    /// Table sets sorted by effective year, oldest first.
    tables: Vec<TaxTables>,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/clt")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - Any table violates a structural invariant (see [`TaxTables::validate`])
    ///
    /// # Example
    ///
    /// ```no_run
    /// use clt_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/clt")?;
    /// # Ok::<(), clt_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata_path = path.join("metadata.yaml");
        let metadata = Self::load_yaml::<TableSetMetadata>(&metadata_path)?;

        let tables_dir = path.join("tables");
        let mut tables = Self::load_tables(&tables_dir)?;
        tables.sort_by_key(|t| t.effective_year);

        Ok(Self { metadata, tables })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads and validates all table sets from the tables directory.
    fn load_tables(tables_dir: &Path) -> EngineResult<Vec<TaxTables>> {
        let tables_dir_str = tables_dir.display().to_string();

        if !tables_dir.exists() {
            return Err(EngineError::ConfigNotFound {
                path: tables_dir_str,
            });
        }

        let entries = fs::read_dir(tables_dir).map_err(|_| EngineError::ConfigNotFound {
            path: tables_dir_str.clone(),
        })?;

        let mut tables = Vec::new();

        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: tables_dir_str.clone(),
            })?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                let table_set = Self::load_yaml::<TaxTables>(&path)?;
                table_set.validate()?;
                tables.push(table_set);
            }
        }

        if tables.is_empty() {
            return Err(EngineError::ConfigNotFound {
                path: format!("{} (no table files found)", tables_dir_str),
            });
        }

        Ok(tables)
    }

    /// Returns the table set metadata.
    pub fn metadata(&self) -> &TableSetMetadata {
        &self.metadata
    }

    /// Returns all loaded table sets, oldest first.
    pub fn tables(&self) -> &[TaxTables] {
        &self.tables
    }

    /// Returns the table set applicable to the given calendar year.
    ///
    /// The most recent table set whose effective year is on or before the
    /// requested year is selected, so a year without its own revision
    /// falls back to the latest published values.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use clt_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/clt")?;
    /// let tables = loader.for_year(2024)?;
    /// assert_eq!(tables.effective_year, 2024);
    /// # Ok::<(), clt_engine::error::EngineError>(())
    /// ```
    pub fn for_year(&self, year: i32) -> EngineResult<&TaxTables> {
        self.tables
            .iter()
            .rfind(|t| t.effective_year <= year)
            .ok_or(EngineError::TablesNotFound { year })
    }

    /// Returns the most recent table set.
    pub fn latest(&self) -> &TaxTables {
        // load() guarantees at least one table set
        self.tables
            .last()
            .expect("ConfigLoader always holds at least one table set")
    }
}
