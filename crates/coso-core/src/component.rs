//! # Control Components
//!
//! One data type, [`ControlComponent`], instantiated for each of the five
//! COSO components. The variants differ only in their fixed name and
//! principle map; the scope description is produced by a single function,
//! [`describe`], shared by all of them.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::context::CubeContext;
use crate::dimension::ComponentKind;
use crate::principle::{principles_of, PrincipleNumber};

/// A COSO component scoped to a set of objectives and organizational
/// levels.
///
/// The name and principle map are fixed by `kind` at construction. The
/// scope is whatever the caller supplied, or the full cube by default.
///
/// Deserialization reads only `kind`, `objectives`, and `levels`; `name`
/// and `principles` in the input are ignored and rebuilt from `kind`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ComponentScope")]
pub struct ControlComponent {
    /// Which of the five components this is.
    pub kind: ComponentKind,
    /// Display name, always `kind.label()`.
    pub name: String,
    /// Principle number to principle statement, ascending.
    pub principles: BTreeMap<PrincipleNumber, String>,
    /// Objectives the component is described against.
    pub objectives: Vec<String>,
    /// Organizational levels the component is described against.
    pub levels: Vec<String>,
}

impl ControlComponent {
    /// Construct a component with optional scope overrides.
    ///
    /// An absent list falls back to the default enumeration; a supplied
    /// list, even an empty one, is used as given.
    pub fn new(
        kind: ComponentKind,
        objectives: Option<Vec<String>>,
        levels: Option<Vec<String>>,
    ) -> Self {
        Self::with_context(kind, CubeContext::new(objectives, levels))
    }

    /// Construct a component scoped to `context`.
    pub fn with_context(kind: ComponentKind, context: CubeContext) -> Self {
        let principles = principles_of(kind)
            .map(|p| (p.number(), p.statement().to_string()))
            .collect();
        tracing::debug!(
            component = kind.as_str(),
            objectives = context.objectives.len(),
            levels = context.levels.len(),
            "constructed control component"
        );
        Self {
            kind,
            name: kind.label().to_string(),
            principles,
            objectives: context.objectives,
            levels: context.levels,
        }
    }

    /// Component 1: Control Environment (principles 1–5).
    pub fn control_environment(
        objectives: Option<Vec<String>>,
        levels: Option<Vec<String>>,
    ) -> Self {
        Self::new(ComponentKind::ControlEnvironment, objectives, levels)
    }

    /// Component 2: Risk Assessment (principles 6–9).
    pub fn risk_assessment(objectives: Option<Vec<String>>, levels: Option<Vec<String>>) -> Self {
        Self::new(ComponentKind::RiskAssessment, objectives, levels)
    }

    /// Component 3: Control Activities (principles 10–12).
    pub fn control_activities(
        objectives: Option<Vec<String>>,
        levels: Option<Vec<String>>,
    ) -> Self {
        Self::new(ComponentKind::ControlActivities, objectives, levels)
    }

    /// Component 4: Information & Communication (principles 13–15).
    pub fn information_and_communication(
        objectives: Option<Vec<String>>,
        levels: Option<Vec<String>>,
    ) -> Self {
        Self::new(ComponentKind::InformationAndCommunication, objectives, levels)
    }

    /// Component 5: Monitoring Activities (principles 16–17).
    pub fn monitoring_activities(
        objectives: Option<Vec<String>>,
        levels: Option<Vec<String>>,
    ) -> Self {
        Self::new(ComponentKind::MonitoringActivities, objectives, levels)
    }

    /// The scope this component was constructed with.
    pub fn context(&self) -> CubeContext {
        CubeContext {
            objectives: self.objectives.clone(),
            levels: self.levels.clone(),
        }
    }

    /// Statement of principle `number`, if this component owns it.
    pub fn principle(&self, number: PrincipleNumber) -> Option<&str> {
        self.principles.get(&number).map(String::as_str)
    }

    /// Describe the component's applicability. See [`describe`].
    pub fn describe(&self) -> String {
        describe(self)
    }
}

/// Wire form accepted when deserializing a [`ControlComponent`].
#[derive(Deserialize)]
struct ComponentScope {
    kind: ComponentKind,
    #[serde(default)]
    objectives: Option<Vec<String>>,
    #[serde(default)]
    levels: Option<Vec<String>>,
}

impl From<ComponentScope> for ControlComponent {
    fn from(scope: ComponentScope) -> Self {
        Self::new(scope.kind, scope.objectives, scope.levels)
    }
}

impl std::fmt::Display for ControlComponent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&describe(self))
    }
}

/// Render how a component's applicability spans the cube.
///
/// Produces `"<name> applies to objectives [<objectives>] across
/// organizational levels [<levels>]."` with each list joined by `", "` in
/// stored order. Empty lists render as `[]`.
pub fn describe(component: &ControlComponent) -> String {
    format!(
        "{} applies to objectives [{}] across organizational levels [{}].",
        component.name,
        component.objectives.join(", "),
        component.levels.join(", "),
    )
}
