//! # Cube Dimensions: Single Source of Truth
//!
//! The COSO cube has three faces: the objectives an organization's controls
//! serve, the organizational levels at which controls apply, and the five
//! components of internal control. Each face is a closed enumeration defined
//! exactly once here. Every `match` on these enums is exhaustive, so a
//! consumer cannot silently skip a component.
//!
//! The plain label arrays (`COSO_OBJECTIVES`, `COSO_LEVELS`,
//! `COSO_COMPONENTS`) carry the same labels in the same order for callers
//! that work with free-text scopes.

use std::ops::RangeInclusive;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CosoError;

/// Objective labels in canonical order.
pub const COSO_OBJECTIVES: [&str; OBJECTIVE_COUNT] = ["Operations", "Reporting", "Compliance"];

/// Organizational level labels in canonical order.
pub const COSO_LEVELS: [&str; LEVEL_COUNT] =
    ["Entity Level", "Division", "Operating Unit", "Function"];

/// Component labels in catalog order.
pub const COSO_COMPONENTS: [&str; COMPONENT_COUNT] = [
    "Control Environment",
    "Risk Assessment",
    "Control Activities",
    "Information & Communication",
    "Monitoring Activities",
];

/// Number of COSO objectives.
pub const OBJECTIVE_COUNT: usize = 3;

/// Number of organizational levels.
pub const LEVEL_COUNT: usize = 4;

/// Number of COSO components.
pub const COMPONENT_COUNT: usize = 5;

/// Normalize a user-supplied label or slug for lenient matching.
///
/// `"Information & Communication"`, `"information-and-communication"` and
/// `"information_and_communication"` all normalize to the same key.
fn normalize(s: &str) -> String {
    s.trim()
        .to_ascii_lowercase()
        .replace('&', "and")
        .split(|c: char| c == ' ' || c == '-' || c == '_')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("_")
}

/// The three categories of objectives internal control serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Objective {
    /// Effectiveness and efficiency of operations.
    Operations,
    /// Internal and external, financial and non-financial reporting.
    Reporting,
    /// Adherence to applicable laws and regulations.
    Compliance,
}

impl Objective {
    /// Returns all objectives in canonical order.
    pub fn all() -> &'static [Objective] {
        &[Self::Operations, Self::Reporting, Self::Compliance]
    }

    /// Returns the snake_case identifier, matching the serde format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Operations => "operations",
            Self::Reporting => "reporting",
            Self::Compliance => "compliance",
        }
    }

    /// Returns the display label used in scope descriptions.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Operations => COSO_OBJECTIVES[0],
            Self::Reporting => COSO_OBJECTIVES[1],
            Self::Compliance => COSO_OBJECTIVES[2],
        }
    }
}

impl std::fmt::Display for Objective {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Objective {
    type Err = CosoError;

    /// Parse an objective from its label or snake_case identifier.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "operations" => Ok(Self::Operations),
            "reporting" => Ok(Self::Reporting),
            "compliance" => Ok(Self::Compliance),
            _ => Err(CosoError::UnknownObjective(s.to_string())),
        }
    }
}

/// The organizational levels at which controls may be applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrganizationalLevel {
    /// The entity as a whole.
    EntityLevel,
    /// A division of the entity.
    Division,
    /// An operating unit within a division.
    OperatingUnit,
    /// A function such as finance, procurement, or IT.
    Function,
}

impl OrganizationalLevel {
    /// Returns all organizational levels in canonical order.
    pub fn all() -> &'static [OrganizationalLevel] {
        &[
            Self::EntityLevel,
            Self::Division,
            Self::OperatingUnit,
            Self::Function,
        ]
    }

    /// Returns the snake_case identifier, matching the serde format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EntityLevel => "entity_level",
            Self::Division => "division",
            Self::OperatingUnit => "operating_unit",
            Self::Function => "function",
        }
    }

    /// Returns the display label used in scope descriptions.
    pub fn label(&self) -> &'static str {
        match self {
            Self::EntityLevel => COSO_LEVELS[0],
            Self::Division => COSO_LEVELS[1],
            Self::OperatingUnit => COSO_LEVELS[2],
            Self::Function => COSO_LEVELS[3],
        }
    }
}

impl std::fmt::Display for OrganizationalLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for OrganizationalLevel {
    type Err = CosoError;

    /// Parse an organizational level from its label or snake_case identifier.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "entity_level" => Ok(Self::EntityLevel),
            "division" => Ok(Self::Division),
            "operating_unit" => Ok(Self::OperatingUnit),
            "function" => Ok(Self::Function),
            _ => Err(CosoError::UnknownLevel(s.to_string())),
        }
    }
}

/// The five components of internal control.
///
/// | # | Component | Principles |
/// |---|-----------|------------|
/// | 1 | Control Environment | 1–5 |
/// | 2 | Risk Assessment | 6–9 |
/// | 3 | Control Activities | 10–12 |
/// | 4 | Information & Communication | 13–15 |
/// | 5 | Monitoring Activities | 16–17 |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentKind {
    /// Standards, processes, and structures underpinning internal control.
    ControlEnvironment,
    /// Identification and assessment of risks to objectives.
    RiskAssessment,
    /// Policies and procedures that carry out risk responses.
    ControlActivities,
    /// Providing, sharing, and obtaining necessary information.
    InformationAndCommunication,
    /// Evaluations of whether the components are present and functioning.
    MonitoringActivities,
}

impl ComponentKind {
    /// Returns all five components in catalog order.
    pub fn all() -> &'static [ComponentKind] {
        &[
            Self::ControlEnvironment,
            Self::RiskAssessment,
            Self::ControlActivities,
            Self::InformationAndCommunication,
            Self::MonitoringActivities,
        ]
    }

    /// Returns the snake_case identifier, matching the serde format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ControlEnvironment => "control_environment",
            Self::RiskAssessment => "risk_assessment",
            Self::ControlActivities => "control_activities",
            Self::InformationAndCommunication => "information_and_communication",
            Self::MonitoringActivities => "monitoring_activities",
        }
    }

    /// Returns the fixed display name of the component.
    pub fn label(&self) -> &'static str {
        COSO_COMPONENTS[self.ordinal() - 1]
    }

    /// One-based position in catalog order.
    pub fn ordinal(&self) -> usize {
        match self {
            Self::ControlEnvironment => 1,
            Self::RiskAssessment => 2,
            Self::ControlActivities => 3,
            Self::InformationAndCommunication => 4,
            Self::MonitoringActivities => 5,
        }
    }

    /// The contiguous block of principle numbers owned by this component.
    pub fn principle_range(&self) -> RangeInclusive<u8> {
        match self {
            Self::ControlEnvironment => 1..=5,
            Self::RiskAssessment => 6..=9,
            Self::ControlActivities => 10..=12,
            Self::InformationAndCommunication => 13..=15,
            Self::MonitoringActivities => 16..=17,
        }
    }

    /// One-sentence COSO definition of the component.
    pub fn summary(&self) -> &'static str {
        match self {
            Self::ControlEnvironment => {
                "The set of standards, processes, and structures that provide the basis for carrying out internal control."
            }
            Self::RiskAssessment => {
                "A dynamic and iterative process for identifying and assessing risks to the achievement of objectives."
            }
            Self::ControlActivities => {
                "Actions established through policies and procedures to help ensure that management’s directives to mitigate risks are carried out."
            }
            Self::InformationAndCommunication => {
                "The continual, iterative process of providing, sharing, and obtaining necessary information."
            }
            Self::MonitoringActivities => {
                "Ongoing evaluations, separate evaluations, or some combination of the two used to ascertain whether each of the five components of internal control is present and functioning."
            }
        }
    }
}

impl std::fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ComponentKind {
    type Err = CosoError;

    /// Parse a component from its label, snake_case identifier, or
    /// kebab-case slug.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "control_environment" => Ok(Self::ControlEnvironment),
            "risk_assessment" => Ok(Self::RiskAssessment),
            "control_activities" => Ok(Self::ControlActivities),
            "information_and_communication" => Ok(Self::InformationAndCommunication),
            "monitoring_activities" => Ok(Self::MonitoringActivities),
            _ => Err(CosoError::UnknownComponent(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_match_label_arrays() {
        assert_eq!(Objective::all().len(), OBJECTIVE_COUNT);
        assert_eq!(OrganizationalLevel::all().len(), LEVEL_COUNT);
        assert_eq!(ComponentKind::all().len(), COMPONENT_COUNT);
    }

    #[test]
    fn test_labels_follow_canonical_order() {
        let objectives: Vec<&str> = Objective::all().iter().map(|o| o.label()).collect();
        assert_eq!(objectives, COSO_OBJECTIVES);

        let levels: Vec<&str> = OrganizationalLevel::all().iter().map(|l| l.label()).collect();
        assert_eq!(levels, COSO_LEVELS);

        let components: Vec<&str> = ComponentKind::all().iter().map(|c| c.label()).collect();
        assert_eq!(components, COSO_COMPONENTS);
    }

    #[test]
    fn test_component_ordinals_are_one_based_and_sequential() {
        for (i, kind) in ComponentKind::all().iter().enumerate() {
            assert_eq!(kind.ordinal(), i + 1);
        }
    }

    #[test]
    fn test_principle_ranges_partition_one_to_seventeen() {
        let mut expected_start = 1u8;
        for kind in ComponentKind::all() {
            let range = kind.principle_range();
            assert_eq!(*range.start(), expected_start, "gap before {kind}");
            expected_start = range.end() + 1;
        }
        assert_eq!(expected_start, 18);
    }

    #[test]
    fn test_component_parses_label_and_slugs() {
        for kind in ComponentKind::all() {
            assert_eq!(kind.label().parse::<ComponentKind>().unwrap(), *kind);
            assert_eq!(kind.as_str().parse::<ComponentKind>().unwrap(), *kind);
            let kebab = kind.as_str().replace('_', "-");
            assert_eq!(kebab.parse::<ComponentKind>().unwrap(), *kind);
        }
        assert_eq!(
            "  information & communication ".parse::<ComponentKind>().unwrap(),
            ComponentKind::InformationAndCommunication
        );
    }

    #[test]
    fn test_dimension_parses_labels() {
        for objective in Objective::all() {
            assert_eq!(objective.label().parse::<Objective>().unwrap(), *objective);
        }
        for level in OrganizationalLevel::all() {
            assert_eq!(level.label().parse::<OrganizationalLevel>().unwrap(), *level);
        }
    }

    #[test]
    fn test_from_str_invalid() {
        assert!(matches!(
            "Governance".parse::<ComponentKind>(),
            Err(CosoError::UnknownComponent(_))
        ));
        assert!(matches!(
            "Strategy".parse::<Objective>(),
            Err(CosoError::UnknownObjective(_))
        ));
        assert!(matches!(
            "Team".parse::<OrganizationalLevel>(),
            Err(CosoError::UnknownLevel(_))
        ));
        assert!("".parse::<ComponentKind>().is_err());
    }

    #[test]
    fn test_serde_format_matches_as_str() {
        for kind in ComponentKind::all() {
            let json = serde_json::to_string(kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.as_str()));
        }
        for level in OrganizationalLevel::all() {
            let json = serde_json::to_string(level).unwrap();
            assert_eq!(json, format!("\"{}\"", level.as_str()));
        }
    }

    #[test]
    fn test_display_matches_label() {
        for kind in ComponentKind::all() {
            assert_eq!(kind.to_string(), kind.label());
        }
        assert_eq!(OrganizationalLevel::OperatingUnit.to_string(), "Operating Unit");
    }

    #[test]
    fn test_control_activities_summary_keeps_published_apostrophe() {
        let summary = ComponentKind::ControlActivities.summary();
        assert!(summary.contains("management\u{2019}s directives"));
        assert!(!summary.contains('\''));
    }

    #[test]
    fn test_summaries_are_non_empty() {
        for kind in ComponentKind::all() {
            assert!(kind.summary().ends_with('.'));
        }
    }
}
