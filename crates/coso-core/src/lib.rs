//! # coso-core: COSO Internal Control Catalog
//!
//! Encodes the COSO 2013 Internal Control framework as static, read-only
//! data: the three faces of the COSO cube (objectives, organizational
//! levels, components) and the 17 principles grouped under the five
//! components.
//!
//! ## Key Design Principles
//!
//! 1. **Closed enumerations.** `Objective`, `OrganizationalLevel`, and
//!    `ComponentKind` are defined once. Exhaustive `match` means adding a
//!    component forces every consumer to handle it.
//!
//! 2. **One component type.** `ControlComponent` is a single data type
//!    instantiated per component. Variants differ in data only; the
//!    scope sentence comes from one function, [`describe`].
//!
//! 3. **One principle table.** `PRINCIPLES` holds all 17 statements.
//!    Component maps and catalog lookups read from it, so numbering and
//!    ownership cannot drift apart.
//!
//! 4. **Permissive scope.** Objectives and levels are free text. A supplied
//!    list replaces the default wholesale and is never validated.
//!
//! ## Example
//!
//! ```
//! use coso_core::ControlComponent;
//!
//! let ra = ControlComponent::risk_assessment(Some(vec!["Reporting".into()]), Some(vec![]));
//! assert_eq!(
//!     ra.describe(),
//!     "Risk Assessment applies to objectives [Reporting] across organizational levels []."
//! );
//! ```
//!
//! ## Crate Policy
//!
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug` and `Clone` and implement `Serialize`.

pub mod catalog;
pub mod component;
pub mod context;
pub mod dimension;
pub mod error;
pub mod principle;

// Re-export primary types for ergonomic imports.
pub use catalog::{Catalog, CatalogExport, ComponentExport, FRAMEWORK_EDITION};
pub use component::{describe, ControlComponent};
pub use context::CubeContext;
pub use dimension::{
    ComponentKind, Objective, OrganizationalLevel, COMPONENT_COUNT, COSO_COMPONENTS, COSO_LEVELS,
    COSO_OBJECTIVES, LEVEL_COUNT, OBJECTIVE_COUNT,
};
pub use error::CosoError;
pub use principle::{Principle, PrincipleNumber, PRINCIPLES, PRINCIPLE_COUNT};
