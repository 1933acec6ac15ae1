//! # Scope Configuration
//!
//! Loads the optional YAML scope file passed with `--config` and layers it
//! with command-line scope flags into a [`CubeContext`].
//!
//! Precedence, highest first: command-line flags, scope file, default
//! COSO enumerations. Each layer replaces a dimension wholesale; lists are
//! never merged across layers.
//!
//! ```yaml
//! objectives:
//!   - Reporting
//! levels: []
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;
use serde::Deserialize;

use coso_core::CubeContext;

/// Contents of a scope file. Absent keys keep the default enumeration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScopeConfig {
    /// Objectives override.
    #[serde(default)]
    pub objectives: Option<Vec<String>>,
    /// Organizational levels override.
    #[serde(default)]
    pub levels: Option<Vec<String>>,
}

/// Load a scope file.
pub fn load_scope_file(path: &Path) -> Result<ScopeConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read scope file {}", path.display()))?;
    // An empty file is an empty mapping, not an error.
    if content.trim().is_empty() {
        return Ok(ScopeConfig::default());
    }
    let config: ScopeConfig = serde_yaml::from_str(&content)
        .with_context(|| format!("failed to parse scope file {}", path.display()))?;
    tracing::info!(
        path = %path.display(),
        objectives = ?config.objectives,
        levels = ?config.levels,
        "loaded scope file"
    );
    Ok(config)
}

/// Command-line scope overrides shared by `describe` and `export`.
#[derive(Args, Debug, Clone, Default)]
pub struct ScopeArgs {
    /// Objective to describe against. Repeat to list several; replaces the
    /// default objectives.
    #[arg(long = "objective", value_name = "OBJECTIVE")]
    pub objectives: Vec<String>,

    /// Organizational level to describe against. Repeat to list several;
    /// replaces the default levels.
    #[arg(long = "level", value_name = "LEVEL")]
    pub levels: Vec<String>,

    /// Describe against an empty objective list.
    #[arg(long, conflicts_with = "objectives")]
    pub no_objectives: bool,

    /// Describe against an empty level list.
    #[arg(long, conflicts_with = "levels")]
    pub no_levels: bool,
}

impl ScopeArgs {
    fn objectives_override(&self) -> Option<Vec<String>> {
        flag_override(&self.objectives, self.no_objectives)
    }

    fn levels_override(&self) -> Option<Vec<String>> {
        flag_override(&self.levels, self.no_levels)
    }
}

fn flag_override(values: &[String], clear: bool) -> Option<Vec<String>> {
    if clear {
        Some(Vec::new())
    } else if values.is_empty() {
        None
    } else {
        Some(values.to_vec())
    }
}

/// Resolve the effective cube context from the scope file and flags.
pub fn resolve_context(file: &ScopeConfig, flags: &ScopeArgs) -> CubeContext {
    let objectives = flags
        .objectives_override()
        .or_else(|| file.objectives.clone());
    let levels = flags.levels_override().or_else(|| file.levels.clone());
    let context = CubeContext::new(objectives, levels);
    tracing::debug!(
        objectives = ?context.objectives,
        levels = ?context.levels,
        "resolved cube context"
    );
    context
}
