//! # coso-cli: COSO Catalog Command-Line Interface
//!
//! Provides the `coso` command for documentation work against the COSO
//! Internal Control catalog.
//!
//! ## Subcommands
//!
//! - `coso describe`: Scope sentence for one or all components.
//! - `coso components`: The five components with principle ranges.
//! - `coso principles`: Principle listing, optionally per component.
//! - `coso principle`: A single principle by number.
//! - `coso export`: Whole-catalog JSON or YAML export.
//!
//! ```bash
//! coso describe risk-assessment --objective Reporting --no-levels
//! coso principles --component "Control Activities" --format json
//! coso --config scope.yaml export --format yaml -o catalog.yaml
//! ```
//!
//! ## Crate Policy
//!
//! - CLI construction (argument parsing) is separated from rendering.
//! - Handlers delegate to `coso-core`; no catalog data lives here.
//! - Each `render_*` function returns the exact text a handler prints.

pub mod components;
pub mod config;
pub mod describe;
pub mod export;
pub mod output;
pub mod principles;
