//! # Framework Catalog
//!
//! The five control components in catalog order, all scoped to one
//! [`CubeContext`], plus cross-component principle lookups.
//!
//! A catalog is immutable once built. Lookups by principle number go
//! through the static principle table, so they agree with every
//! component's own map.

use serde::Serialize;

use crate::component::ControlComponent;
use crate::context::CubeContext;
use crate::dimension::{ComponentKind, COMPONENT_COUNT};
use crate::error::CosoError;
use crate::principle::{self, Principle, PrincipleNumber, PRINCIPLES};

/// The complete COSO component catalog for a given scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Catalog {
    context: CubeContext,
    components: Vec<ControlComponent>,
}

impl Catalog {
    /// Build all five components against `context`.
    pub fn new(context: CubeContext) -> Self {
        let components: Vec<ControlComponent> = ComponentKind::all()
            .iter()
            .map(|kind| ControlComponent::with_context(*kind, context.clone()))
            .collect();
        debug_assert_eq!(components.len(), COMPONENT_COUNT);
        tracing::debug!(default_scope = context.is_default(), "built COSO catalog");
        Self {
            context,
            components,
        }
    }

    /// The scope shared by every component.
    pub fn context(&self) -> &CubeContext {
        &self.context
    }

    /// All components in catalog order.
    pub fn components(&self) -> &[ControlComponent] {
        &self.components
    }

    /// The component of the given kind.
    pub fn component(&self, kind: ComponentKind) -> &ControlComponent {
        // Built from ComponentKind::all(), so ordinal indexes directly.
        &self.components[kind.ordinal() - 1]
    }

    /// The principle with the given number.
    pub fn principle(&self, number: PrincipleNumber) -> Option<&'static Principle> {
        principle::lookup(number)
    }

    /// Parse `raw` as a principle number and look it up.
    pub fn find_principle(&self, raw: &str) -> Result<&'static Principle, CosoError> {
        let number: PrincipleNumber = raw.parse()?;
        self.principle(number)
            .ok_or(CosoError::PrincipleOutOfRange(u64::from(number.get())))
    }

    /// The component that owns principle `number`.
    pub fn owner_of(&self, number: PrincipleNumber) -> Option<ComponentKind> {
        principle::lookup(number).map(Principle::component)
    }

    /// All 17 principles in ascending number order.
    pub fn principles(&self) -> impl Iterator<Item = &'static Principle> {
        PRINCIPLES.iter()
    }

    /// One description line per component, in catalog order.
    pub fn describe_all(&self) -> Vec<String> {
        self.components.iter().map(ControlComponent::describe).collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(CubeContext::default())
    }
}

/// A serializable snapshot of a catalog for documentation generators.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogExport {
    /// Framework edition the principle text is taken from.
    pub framework: &'static str,
    /// Objectives in scope.
    pub objectives: Vec<String>,
    /// Organizational levels in scope.
    pub levels: Vec<String>,
    /// Components in catalog order.
    pub components: Vec<ComponentExport>,
}

/// One component entry in a [`CatalogExport`].
#[derive(Debug, Clone, Serialize)]
pub struct ComponentExport {
    /// One-based catalog position.
    pub ordinal: usize,
    /// The component with its principle map and scope.
    #[serde(flatten)]
    pub component: ControlComponent,
    /// COSO definition of the component.
    pub summary: &'static str,
    /// Rendered scope description.
    pub description: String,
}

/// Framework edition label carried in exports.
pub const FRAMEWORK_EDITION: &str = "COSO Internal Control - Integrated Framework (2013)";

impl CatalogExport {
    /// Snapshot `catalog`.
    pub fn from_catalog(catalog: &Catalog) -> Self {
        Self {
            framework: FRAMEWORK_EDITION,
            objectives: catalog.context.objectives.clone(),
            levels: catalog.context.levels.clone(),
            components: catalog
                .components
                .iter()
                .map(|c| ComponentExport {
                    ordinal: c.kind.ordinal(),
                    component: c.clone(),
                    summary: c.kind.summary(),
                    description: c.describe(),
                })
                .collect(),
        }
    }

    /// Pretty-printed JSON rendering.
    pub fn to_json(&self) -> Result<String, CosoError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
