//! # Principle Subcommands
//!
//! `coso principles` lists principles, optionally for one component.
//! `coso principle <N>` shows a single principle with its owning component.

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use coso_core::{Catalog, ComponentKind, Principle, PrincipleNumber};

use crate::output::{render_structured, OutputFormat};

/// Arguments for the `coso principles` subcommand.
#[derive(Args, Debug)]
pub struct PrinciplesArgs {
    /// Only list principles owned by this component.
    #[arg(long, value_name = "COMPONENT")]
    pub component: Option<ComponentKind>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Arguments for the `coso principle` subcommand.
#[derive(Args, Debug)]
pub struct PrincipleArgs {
    /// Principle number, 1 through 17.
    #[arg(value_name = "N")]
    pub number: String,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// A principle row with its component's display name.
#[derive(Debug, Serialize)]
struct PrincipleRow {
    number: u8,
    component: ComponentKind,
    component_name: &'static str,
    statement: &'static str,
}

impl From<&Principle> for PrincipleRow {
    fn from(p: &Principle) -> Self {
        Self {
            number: p.number().get(),
            component: p.component(),
            component_name: p.component().label(),
            statement: p.statement(),
        }
    }
}

/// Execute the principles subcommand.
pub fn run_principles(args: &PrinciplesArgs) -> Result<u8> {
    print!("{}", render_principles(args.component, args.format)?);
    Ok(0)
}

/// Execute the principle subcommand.
pub fn run_principle(args: &PrincipleArgs) -> Result<u8> {
    let number: PrincipleNumber = args.number.parse()?;
    print!("{}", render_principle(number, args.format)?);
    Ok(0)
}

/// Render the principle listing.
///
/// Text output groups principles under a heading per component.
pub fn render_principles(component: Option<ComponentKind>, format: OutputFormat) -> Result<String> {
    let catalog = Catalog::default();
    let selected: Vec<&Principle> = catalog
        .principles()
        .filter(|p| component.map_or(true, |kind| p.component() == kind))
        .collect();
    tracing::debug!(count = selected.len(), "selected principles");

    if format != OutputFormat::Text {
        let rows: Vec<PrincipleRow> = selected.into_iter().map(PrincipleRow::from).collect();
        return render_structured(&rows, format);
    }

    let mut out = String::new();
    let mut current: Option<ComponentKind> = None;
    for p in selected {
        let kind = p.component();
        if current != Some(kind) {
            if current.is_some() {
                out.push('\n');
            }
            out.push_str(&format!("{}. {}\n", kind.ordinal(), kind));
            current = Some(kind);
        }
        out.push_str(&format!("  {:>2}. {}\n", p.number(), p.statement()));
    }
    Ok(out)
}

/// Render a single principle.
pub fn render_principle(number: PrincipleNumber, format: OutputFormat) -> Result<String> {
    let catalog = Catalog::default();
    let principle = catalog
        .principle(number)
        .with_context(|| format!("principle {number} is not in the catalog"))?;
    match format {
        OutputFormat::Text => Ok(format!(
            "Principle {} ({})\n{}\n",
            principle.number(),
            principle.component(),
            principle.statement()
        )),
        _ => render_structured(&PrincipleRow::from(principle), format),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_listing_groups_by_component() {
        let out = render_principles(None, OutputFormat::Text).unwrap();
        assert!(out.starts_with("1. Control Environment\n   1. The organization demonstrates"));
        assert!(out.contains("\n5. Monitoring Activities\n  16. "));
        let numbered = out.lines().filter(|l| l.starts_with("  ")).count();
        assert_eq!(numbered, 17);
    }

    #[test]
    fn component_filter_narrows_listing() {
        let out = render_principles(Some(ComponentKind::RiskAssessment), OutputFormat::Json).unwrap();
        let rows: serde_json::Value = serde_json::from_str(&out).unwrap();
        let numbers: Vec<u64> = rows
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["number"].as_u64().unwrap())
            .collect();
        assert_eq!(numbers, vec![6, 7, 8, 9]);
        assert_eq!(rows[0]["component"], "risk_assessment");
        assert_eq!(rows[0]["component_name"], "Risk Assessment");
    }

    #[test]
    fn single_principle_text() {
        let n = PrincipleNumber::new(13).unwrap();
        let out = render_principle(n, OutputFormat::Text).unwrap();
        assert!(out.starts_with("Principle 13 (Information & Communication)\n"));
        assert!(out.contains("relevant, quality information"));
    }

    #[test]
    fn principle_handler_rejects_out_of_range_number() {
        for raw in ["18", "0", "seventeen"] {
            let args = PrincipleArgs {
                number: raw.to_string(),
                format: OutputFormat::Text,
            };
            assert!(run_principle(&args).is_err(), "{raw} should be rejected");
        }
    }

    #[test]
    fn principle_handler_accepts_last_principle() {
        let args = PrincipleArgs {
            number: "17".to_string(),
            format: OutputFormat::Json,
        };
        assert_eq!(run_principle(&args).unwrap(), 0);
    }

    #[test]
    fn single_principle_yaml() {
        let n = PrincipleNumber::new(2).unwrap();
        let out = render_principle(n, OutputFormat::Yaml).unwrap();
        assert!(out.contains("number: 2"));
        assert!(out.contains("component: control_environment"));
    }
}
