//! YAML parsing with error handling
//!
//! JSON exports from the document store are valid YAML, so record files in
//! either format go through the same parser.

use serde::de::DeserializeOwned;
use std::path::Path;

use crate::yaml::diagnostics::{YamlError, YamlSyntaxError};

/// Parse YAML content into a typed value with source-annotated errors
pub fn parse_yaml<T: DeserializeOwned>(content: &str, filename: &str) -> Result<T, YamlError> {
    serde_yml::from_str(content).map_err(|e| {
        YamlError::Syntax(YamlSyntaxError::from_serde_error(&e, content, filename))
    })
}

/// Parse a YAML or JSON file
pub fn parse_yaml_file<T: DeserializeOwned>(path: &Path) -> Result<T, YamlError> {
    let content = std::fs::read_to_string(path)?;
    let filename = path.display().to_string();
    parse_yaml(&content, &filename)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Lab {
        value: String,
        accreditation_no: String,
    }

    #[test]
    fn test_parse_yaml() {
        let yaml = "value: lab-a\naccreditation_no: \"001\"";
        let lab: Lab = parse_yaml(yaml, "lab.yaml").unwrap();
        assert_eq!(lab.value, "lab-a");
        assert_eq!(lab.accreditation_no, "001");
    }

    #[test]
    fn test_parse_json_as_yaml() {
        let json = r#"{"value": "lab-b", "accreditation_no": "002"}"#;
        let lab: Lab = parse_yaml(json, "lab.json").unwrap();
        assert_eq!(lab.value, "lab-b");
    }

    #[test]
    fn test_shape_error_is_syntax_error() {
        let result: Result<Lab, _> = parse_yaml("value: [1, 2]", "lab.yaml");
        assert!(matches!(result, Err(YamlError::Syntax(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result: Result<Lab, _> = parse_yaml_file(Path::new("/nonexistent/lab.yaml"));
        assert!(matches!(result, Err(YamlError::Io(_))));
    }
}
