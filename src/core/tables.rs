//! Traceability lookup tables
//!
//! Tables are configuration data: a default set is embedded in the binary and
//! any lab can supply its own YAML file. Shape is validated once, when the
//! tables are loaded, so resolution never has to re-check it.

use log::info;
use miette::Diagnostic;
use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::yaml::{parse_yaml, YamlError};

#[derive(Embed)]
#[folder = "tables/"]
struct EmbeddedTables;

/// File name of the embedded default tables
pub const BUILTIN_TABLES_FILE: &str = "traceability.yaml";

/// Index of the lab used when a record names none (the 5th entry)
pub const DEFAULT_LAB_INDEX: usize = 4;

/// An accredited calibration laboratory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalibrationLab {
    /// Stable lookup key stored in records
    pub value: String,

    /// Accreditation number quoted in the statement
    pub accreditation_no: String,

    /// Mutual recognition arrangement the lab's body is signatory to
    pub signatory: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// The four lookup tables behind traceability statements
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceabilityTables {
    /// Fixed statements keyed by type code (`"1"`, `"2"`)
    #[serde(default)]
    pub map: BTreeMap<String, String>,

    #[serde(default)]
    pub countries: Vec<String>,

    #[serde(default)]
    pub accreditation_bodies: Vec<String>,

    #[serde(default)]
    pub calibration_labs: Vec<CalibrationLab>,
}

/// Errors loading or validating lookup tables
#[derive(Debug, Error, Diagnostic)]
pub enum TablesError {
    #[error("Failed to read lookup tables from {path}: {source}")]
    #[diagnostic(code(calcert::tables::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Yaml(#[from] YamlError),

    #[error("Built-in lookup tables are missing from this build")]
    #[diagnostic(code(calcert::tables::builtin))]
    MissingBuiltin,

    #[error("Lookup table '{table}' must have at least one entry")]
    #[diagnostic(
        code(calcert::tables::empty),
        help("its first entry is the default for composed statements")
    )]
    EmptyTable { table: &'static str },

    #[error("Traceability map key '{0}' is not a fixed statement type")]
    #[diagnostic(code(calcert::tables::map_key), help("only \"1\" and \"2\" are fixed statements"))]
    UnknownMapKey(String),

    #[error("Calibration lab #{0} has an empty value key")]
    #[diagnostic(code(calcert::tables::lab_key))]
    EmptyLabKey(usize),

    #[error("Duplicate calibration lab key: {0}")]
    #[diagnostic(code(calcert::tables::lab_key))]
    DuplicateLabKey(String),
}

impl TraceabilityTables {
    /// The default tables embedded in the binary
    pub fn builtin() -> Result<Self, TablesError> {
        let file = EmbeddedTables::get(BUILTIN_TABLES_FILE).ok_or(TablesError::MissingBuiltin)?;
        let content = std::str::from_utf8(&file.data).map_err(|_| TablesError::MissingBuiltin)?;
        Self::from_yaml(content, BUILTIN_TABLES_FILE)
    }

    /// Parse and validate tables from YAML text
    pub fn from_yaml(content: &str, filename: &str) -> Result<Self, TablesError> {
        let tables: Self = parse_yaml(content, filename)?;
        tables.validate()?;
        Ok(tables)
    }

    /// Load and validate tables from a file
    pub fn load(path: &Path) -> Result<Self, TablesError> {
        let content = std::fs::read_to_string(path).map_err(|source| TablesError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let tables = Self::from_yaml(&content, &path.display().to_string())?;
        info!(
            "loaded traceability tables from {} ({} labs)",
            path.display(),
            tables.calibration_labs.len()
        );
        Ok(tables)
    }

    /// Check the table shape the resolver relies on
    pub fn validate(&self) -> Result<(), TablesError> {
        if self.countries.is_empty() {
            return Err(TablesError::EmptyTable { table: "countries" });
        }
        if self.accreditation_bodies.is_empty() {
            return Err(TablesError::EmptyTable {
                table: "accreditation_bodies",
            });
        }
        if let Some(key) = self.map.keys().find(|k| !matches!(k.as_str(), "1" | "2")) {
            return Err(TablesError::UnknownMapKey(key.clone()));
        }

        let mut seen = HashSet::new();
        for (idx, lab) in self.calibration_labs.iter().enumerate() {
            if lab.value.trim().is_empty() {
                return Err(TablesError::EmptyLabKey(idx + 1));
            }
            if !seen.insert(lab.value.as_str()) {
                return Err(TablesError::DuplicateLabKey(lab.value.clone()));
            }
        }
        Ok(())
    }

    /// Look up a lab by its key
    pub fn lab(&self, key: &str) -> Option<&CalibrationLab> {
        self.calibration_labs.iter().find(|lab| lab.value == key)
    }

    pub fn default_country(&self) -> Option<&str> {
        self.countries.first().map(String::as_str)
    }

    pub fn default_accreditation_body(&self) -> Option<&str> {
        self.accreditation_bodies.first().map(String::as_str)
    }

    /// Lab used when a record selects none
    pub fn default_lab(&self) -> Option<&CalibrationLab> {
        self.calibration_labs.get(DEFAULT_LAB_INDEX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal() -> TraceabilityTables {
        TraceabilityTables {
            countries: vec!["Malaysia".to_string()],
            accreditation_bodies: vec!["Standards Malaysia".to_string()],
            ..Default::default()
        }
    }

    fn lab(value: &str) -> CalibrationLab {
        CalibrationLab {
            value: value.to_string(),
            accreditation_no: "001".to_string(),
            signatory: "APAC MRA".to_string(),
            label: None,
        }
    }

    #[test]
    fn test_builtin_tables_are_valid() {
        let tables = TraceabilityTables::builtin().unwrap();
        assert!(tables.map.contains_key("1"));
        assert!(tables.map.contains_key("2"));
        assert_eq!(tables.default_country(), Some("Malaysia"));
        assert!(tables.calibration_labs.len() > DEFAULT_LAB_INDEX);
        assert_eq!(tables.default_lab().map(|l| l.value.as_str()), Some("lab-e"));
    }

    #[test]
    fn test_lab_lookup() {
        let mut tables = minimal();
        tables.calibration_labs = vec![lab("a"), lab("b")];
        assert_eq!(tables.lab("b").map(|l| l.value.as_str()), Some("b"));
        assert!(tables.lab("zzz").is_none());
        assert!(tables.default_lab().is_none());
    }

    #[test]
    fn test_validate_rejects_empty_defaults() {
        let mut tables = minimal();
        tables.countries.clear();
        assert!(matches!(
            tables.validate(),
            Err(TablesError::EmptyTable { table: "countries" })
        ));

        let mut tables = minimal();
        tables.accreditation_bodies.clear();
        assert!(matches!(
            tables.validate(),
            Err(TablesError::EmptyTable { table: "accreditation_bodies" })
        ));
    }

    #[test]
    fn test_validate_rejects_bad_map_key() {
        let mut tables = minimal();
        tables.map.insert("3".to_string(), "composed".to_string());
        assert!(matches!(tables.validate(), Err(TablesError::UnknownMapKey(k)) if k == "3"));
    }

    #[test]
    fn test_validate_rejects_bad_lab_keys() {
        let mut tables = minimal();
        tables.calibration_labs = vec![lab("a"), lab("  ")];
        assert!(matches!(tables.validate(), Err(TablesError::EmptyLabKey(2))));

        tables.calibration_labs = vec![lab("a"), lab("a")];
        assert!(matches!(tables.validate(), Err(TablesError::DuplicateLabKey(k)) if k == "a"));
    }

    #[test]
    fn test_from_yaml_reports_shape_errors() {
        let result = TraceabilityTables::from_yaml("countries: 12", "bad.yaml");
        assert!(matches!(result, Err(TablesError::Yaml(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let result = TraceabilityTables::load(Path::new("/nonexistent/tables.yaml"));
        assert!(matches!(result, Err(TablesError::Io { .. })));
    }
}
