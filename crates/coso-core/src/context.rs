//! # Cube Context
//!
//! The pair of scopes (objectives, organizational levels) a control
//! component is described against.
//!
//! Scope entries are free text. A caller may narrow the scope to a subset
//! of the COSO labels, supply its own labels, or pass empty lists; nothing
//! is validated. A supplied list always replaces the default wholesale.

use serde::{Deserialize, Serialize};

use crate::dimension::{Objective, OrganizationalLevel, COSO_LEVELS, COSO_OBJECTIVES};

/// Objectives and organizational levels a component applies to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CubeContext {
    /// Objectives, in the order they should be rendered.
    pub objectives: Vec<String>,
    /// Organizational levels, in the order they should be rendered.
    pub levels: Vec<String>,
}

impl CubeContext {
    /// Build a context from optional overrides.
    ///
    /// `None` selects the full default enumeration. `Some(list)` is used as
    /// given, so `Some(vec![])` yields an empty scope.
    pub fn new(objectives: Option<Vec<String>>, levels: Option<Vec<String>>) -> Self {
        Self {
            objectives: objectives.unwrap_or_else(default_objectives),
            levels: levels.unwrap_or_else(default_levels),
        }
    }

    /// Build a context from typed dimension values.
    pub fn from_dimensions(objectives: &[Objective], levels: &[OrganizationalLevel]) -> Self {
        Self {
            objectives: objectives.iter().map(|o| o.label().to_string()).collect(),
            levels: levels.iter().map(|l| l.label().to_string()).collect(),
        }
    }

    /// Replace the objectives.
    pub fn with_objectives<I, S>(mut self, objectives: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.objectives = objectives.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the organizational levels.
    pub fn with_levels<I, S>(mut self, levels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.levels = levels.into_iter().map(Into::into).collect();
        self
    }

    /// Whether this context spans the whole default cube face for both
    /// dimensions, in canonical order.
    pub fn is_default(&self) -> bool {
        self.objectives.iter().map(String::as_str).eq(COSO_OBJECTIVES)
            && self.levels.iter().map(String::as_str).eq(COSO_LEVELS)
    }
}

impl Default for CubeContext {
    fn default() -> Self {
        Self::new(None, None)
    }
}

fn default_objectives() -> Vec<String> {
    COSO_OBJECTIVES.iter().map(|s| s.to_string()).collect()
}

fn default_levels() -> Vec<String> {
    COSO_LEVELS.iter().map(|s| s.to_string()).collect()
}
