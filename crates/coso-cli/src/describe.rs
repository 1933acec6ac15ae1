//! # Describe Subcommand
//!
//! Prints the scope sentence for one component, or for all five in catalog
//! order.

use anyhow::Result;
use clap::Args;

use coso_core::{Catalog, ComponentKind, CubeContext};

use crate::config::{resolve_context, ScopeArgs, ScopeConfig};

/// Arguments for the `coso describe` subcommand.
#[derive(Args, Debug)]
pub struct DescribeArgs {
    /// Component to describe, by name or slug (e.g. "risk-assessment").
    /// Describes every component when omitted.
    #[arg(value_name = "COMPONENT")]
    pub component: Option<ComponentKind>,

    #[command(flatten)]
    pub scope: ScopeArgs,
}

/// Execute the describe subcommand.
pub fn run_describe(args: &DescribeArgs, file_scope: &ScopeConfig) -> Result<u8> {
    let context = resolve_context(file_scope, &args.scope);
    print!("{}", render_describe(args.component, context));
    Ok(0)
}

/// Render one description line per selected component.
pub fn render_describe(component: Option<ComponentKind>, context: CubeContext) -> String {
    let catalog = Catalog::new(context);
    let lines = match component {
        Some(kind) => vec![catalog.component(kind).describe()],
        None => catalog.describe_all(),
    };
    let mut out = lines.join("\n");
    out.push('\n');
    out
}
