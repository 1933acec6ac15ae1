//! # Export Subcommand
//!
//! Writes the whole catalog, scoped by the resolved cube context, as JSON or
//! YAML for documentation generators.

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Args;

use coso_core::{Catalog, CatalogExport, CubeContext};

use crate::config::{resolve_context, ScopeArgs, ScopeConfig};
use crate::output::{emit, render_structured, OutputFormat};

/// Arguments for the `coso export` subcommand.
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Output format (json or yaml).
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Write to this file instead of stdout.
    #[arg(long, short, value_name = "PATH")]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub scope: ScopeArgs,
}

/// Execute the export subcommand.
pub fn run_export(args: &ExportArgs, file_scope: &ScopeConfig) -> Result<u8> {
    let context = resolve_context(file_scope, &args.scope);
    let rendered = render_export(context, args.format)?;
    emit(&rendered, args.output.as_deref())?;
    Ok(0)
}

/// Render the catalog export.
pub fn render_export(context: CubeContext, format: OutputFormat) -> Result<String> {
    if format == OutputFormat::Text {
        bail!("export supports --format json or --format yaml");
    }
    let export = CatalogExport::from_catalog(&Catalog::new(context));
    match format {
        OutputFormat::Json => {
            let mut json = export.to_json()?;
            json.push('\n');
            Ok(json)
        }
        _ => render_structured(&export, format),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_export_is_scoped() {
        let ctx = CubeContext::new(Some(vec!["Reporting".into()]), Some(vec![]));
        let out = render_export(ctx, OutputFormat::Json).unwrap();
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json["objectives"], serde_json::json!(["Reporting"]));
        assert_eq!(json["levels"], serde_json::json!([]));
        assert_eq!(
            json["components"][0]["description"],
            "Control Environment applies to objectives [Reporting] across organizational levels []."
        );
    }

    #[test]
    fn yaml_export_lists_components() {
        let out = render_export(CubeContext::default(), OutputFormat::Yaml).unwrap();
        assert!(out.contains("name: Control Environment"));
        assert!(out.contains("name: Monitoring Activities"));
        assert!(out.contains("kind: information_and_communication"));
    }

    #[test]
    fn text_export_is_rejected() {
        assert!(render_export(CubeContext::default(), OutputFormat::Text).is_err());
    }

    #[test]
    fn export_writes_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        let args = ExportArgs {
            format: OutputFormat::Json,
            output: Some(path.clone()),
            scope: ScopeArgs::default(),
        };
        assert_eq!(run_export(&args, &ScopeConfig::default()).unwrap(), 0);
        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written["components"].as_array().unwrap().len(), 5);
    }
}
