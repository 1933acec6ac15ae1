//! # Output Rendering
//!
//! Shared `--format` handling. Text output is produced by each subcommand;
//! JSON and YAML are straight serde renderings of the same rows.

use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::ValueEnum;
use serde::Serialize;

/// Output format for listing and export subcommands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
    /// YAML.
    Yaml,
}

/// Serialize `value` as JSON or YAML.
///
/// `Text` has no generic rendering; each subcommand formats its own text
/// and passing `Text` here is an error.
pub fn render_structured<T: Serialize>(value: &T, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => bail!("text output has no structured rendering"),
        OutputFormat::Yaml => serde_yaml::to_string(value).context("failed to render YAML"),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(value).context("failed to render JSON")?;
            json.push('\n');
            Ok(json)
        }
    }
}

/// Print `rendered` to stdout, or write it to `path` when given.
pub fn emit(rendered: &str, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, rendered)
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), bytes = rendered.len(), "wrote output");
        }
        None => print!("{rendered}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Row {
        number: u8,
        label: &'static str,
    }

    #[test]
    fn json_is_pretty_and_newline_terminated() {
        let out = render_structured(&Row { number: 8, label: "fraud" }, OutputFormat::Json).unwrap();
        assert!(out.ends_with("}\n"));
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["number"], 8);
    }

    #[test]
    fn yaml_renders_fields() {
        let out = render_structured(&Row { number: 8, label: "fraud" }, OutputFormat::Yaml).unwrap();
        assert!(out.contains("number: 8"));
        assert!(out.contains("label: fraud"));
    }

    #[test]
    fn text_is_not_a_structured_format() {
        let err = render_structured(&Row { number: 8, label: "fraud" }, OutputFormat::Text)
            .unwrap_err();
        assert!(err.to_string().contains("no structured rendering"));
    }

    #[test]
    fn emit_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        emit("hello\n", Some(&path)).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "hello\n");
    }
}
