//! # Components Subcommand
//!
//! Lists the five COSO components with their catalog position, principle
//! range, and definition.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use coso_core::ComponentKind;

use crate::output::{render_structured, OutputFormat};

/// Arguments for the `coso components` subcommand.
#[derive(Args, Debug)]
pub struct ComponentsArgs {
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Debug, Serialize)]
struct ComponentRow {
    ordinal: usize,
    kind: ComponentKind,
    name: &'static str,
    principles: String,
    summary: &'static str,
}

impl From<ComponentKind> for ComponentRow {
    fn from(kind: ComponentKind) -> Self {
        let range = kind.principle_range();
        Self {
            ordinal: kind.ordinal(),
            kind,
            name: kind.label(),
            principles: format!("{}-{}", range.start(), range.end()),
            summary: kind.summary(),
        }
    }
}

/// Execute the components subcommand.
pub fn run_components(args: &ComponentsArgs) -> Result<u8> {
    print!("{}", render_components(args.format)?);
    Ok(0)
}

/// Render the component listing.
pub fn render_components(format: OutputFormat) -> Result<String> {
    let rows: Vec<ComponentRow> = ComponentKind::all()
        .iter()
        .copied()
        .map(ComponentRow::from)
        .collect();

    if format != OutputFormat::Text {
        return render_structured(&rows, format);
    }

    let mut out = String::new();
    for row in &rows {
        out.push_str(&format!(
            "{}. {} (principles {})\n   {}\n",
            row.ordinal, row.name, row.principles, row.summary
        ));
    }
    Ok(out)
}
