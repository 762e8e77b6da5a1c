//! Template file import/export
//!
//! Templates serialize to YAML documents so parameter layouts can be
//! shared between consoles. Import re-runs full validation; the caller
//! decides whether to accept a document that parses but fails it.

use crate::state::TemplateForm;
use crate::validate::{validate_form, ValidationReport};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// A parsed template document plus its validation verdict
#[derive(Debug, Clone)]
pub struct TemplateImport {
    pub form: TemplateForm,
    pub report: ValidationReport,
}

/// Write a template form to a YAML file
pub fn save_template(path: &Path, form: &TemplateForm) -> Result<()> {
    let yaml = serde_yaml::to_string(form)
        .with_context(|| format!("Failed to serialize template '{}'", form.basics.name))?;
    fs::write(path, yaml)
        .with_context(|| format!("Failed to write template file {}", path.display()))?;
    info!("Saved template '{}' to {}", form.basics.name, path.display());
    Ok(())
}

/// Read a template form from a YAML file and validate it
///
/// Fails on unreadable or malformed documents; a document that parses
/// but fails validation is returned with its report so the console can
/// show the errors.
pub fn load_template(path: &Path) -> Result<TemplateImport> {
    let yaml = fs::read_to_string(path)
        .with_context(|| format!("Failed to read template file {}", path.display()))?;
    let form: TemplateForm = serde_yaml::from_str(&yaml)
        .with_context(|| format!("Malformed template document {}", path.display()))?;

    let report = validate_form(&form);
    if !report.is_valid {
        warn!(
            "Imported template '{}' has {} validation errors",
            form.basics.name,
            report.error_count()
        );
    }

    Ok(TemplateImport { form, report })
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable
mod tests {
    use super::*;
    use crate::state::{LayoutDraft, TemplateBasics};
    use modcon_layout::{FunctionCode, ParameterConfig, RegisterRange};

    fn template() -> TemplateForm {
        let mut layout = LayoutDraft::default();
        layout.ranges.push(RegisterRange {
            range_name: "Main".to_string(),
            start_register: 0,
            length: 4,
            function_code: FunctionCode::InputRegisters,
        });
        let mut p = ParameterConfig::new("Power", "FLOAT32", "Main");
        p.set_buffer_index(0);
        layout.parameters.push(p);

        TemplateForm {
            basics: TemplateBasics {
                name: "PV meter".to_string(),
                device_type: "meter".to_string(),
                description: None,
            },
            connection: None,
            layout,
        }
    }

    #[test]
    fn test_yaml_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pv_meter.yaml");

        let original = template();
        save_template(&path, &original).unwrap();
        let imported = load_template(&path).unwrap();

        assert_eq!(imported.form, original);
        assert!(imported.report.is_valid);
    }

    #[test]
    fn test_invalid_template_carries_its_report() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.yaml");

        let mut broken = template();
        broken.layout.parameters[0].register_range = "Nowhere".to_string();
        save_template(&path, &broken).unwrap();

        let imported = load_template(&path).unwrap();
        assert!(!imported.report.is_valid);
        assert!(!imported.report.parameters.is_empty());
    }

    #[test]
    fn test_malformed_document_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("garbage.yaml");
        fs::write(&path, ": not : a : template").unwrap();

        assert!(load_template(&path).is_err());
        assert!(load_template(&dir.path().join("missing.yaml")).is_err());
    }
}
