//! # Principles
//!
//! The 17 COSO 2013 principles, reproduced verbatim. The static
//! [`PRINCIPLES`] table is the only place principle text lives; component
//! principle maps are built from it, so the numbering and ownership
//! invariants hold by construction.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::dimension::ComponentKind;
use crate::error::CosoError;

/// Total number of COSO principles.
pub const PRINCIPLE_COUNT: usize = 17;

/// A principle number in the range `1..=17`.
///
/// Serialized as a bare integer. Deserialization rejects out-of-range
/// values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PrincipleNumber(u8);

impl PrincipleNumber {
    /// Smallest valid principle number.
    pub const MIN: u8 = 1;
    /// Largest valid principle number.
    pub const MAX: u8 = PRINCIPLE_COUNT as u8;

    /// Create a validated principle number.
    pub fn new(n: u8) -> Result<Self, CosoError> {
        if (Self::MIN..=Self::MAX).contains(&n) {
            Ok(Self(n))
        } else {
            Err(CosoError::PrincipleOutOfRange(u64::from(n)))
        }
    }

    /// Access the inner number.
    pub fn get(&self) -> u8 {
        self.0
    }

    /// All seventeen principle numbers in ascending order.
    pub fn all() -> impl Iterator<Item = PrincipleNumber> {
        (Self::MIN..=Self::MAX).map(PrincipleNumber)
    }
}

impl TryFrom<u8> for PrincipleNumber {
    type Error = CosoError;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        Self::new(n)
    }
}

impl From<PrincipleNumber> for u8 {
    fn from(n: PrincipleNumber) -> Self {
        n.0
    }
}

impl std::fmt::Display for PrincipleNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for PrincipleNumber {
    type Err = CosoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let n: u64 = s
            .trim()
            .parse()
            .map_err(|_| CosoError::InvalidPrincipleNumber(s.to_string()))?;
        let n = u8::try_from(n).map_err(|_| CosoError::PrincipleOutOfRange(n))?;
        Self::new(n)
    }
}

/// A single COSO principle and the component that owns it.
///
/// Only the static [`PRINCIPLES`] table builds these, so every number is
/// in range and every statement is the published text.
///
/// ```compile_fail
/// use coso_core::{ComponentKind, Principle};
///
/// let forged = Principle {
///     number: 0,
///     component: ComponentKind::ControlEnvironment,
///     statement: "not a COSO principle",
/// };
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Principle {
    number: PrincipleNumber,
    component: ComponentKind,
    statement: &'static str,
}

impl Principle {
    /// The principle number.
    pub fn number(&self) -> PrincipleNumber {
        self.number
    }

    /// The owning component.
    pub fn component(&self) -> ComponentKind {
        self.component
    }

    /// The principle statement.
    pub fn statement(&self) -> &'static str {
        self.statement
    }
}

const fn principle(number: u8, component: ComponentKind, statement: &'static str) -> Principle {
    // Evaluated while initializing PRINCIPLES; a bad entry fails the build.
    assert!(number >= PrincipleNumber::MIN && number <= PrincipleNumber::MAX);
    Principle {
        number: PrincipleNumber(number),
        component,
        statement,
    }
}

/// All 17 principles in ascending number order.
pub static PRINCIPLES: [Principle; PRINCIPLE_COUNT] = [
    principle(
        1,
        ComponentKind::ControlEnvironment,
        "The organization demonstrates a commitment to integrity and ethical values.",
    ),
    principle(
        2,
        ComponentKind::ControlEnvironment,
        "The board of directors demonstrates independence from management and exercises oversight of the development and performance of internal control.",
    ),
    principle(
        3,
        ComponentKind::ControlEnvironment,
        "Management establishes, with board oversight, structures, reporting lines, and appropriate authorities and responsibilities in the pursuit of objectives.",
    ),
    principle(
        4,
        ComponentKind::ControlEnvironment,
        "The organization demonstrates a commitment to attract, develop, and retain competent individuals in alignment with objectives.",
    ),
    principle(
        5,
        ComponentKind::ControlEnvironment,
        "The organization holds individuals accountable for their internal control responsibilities in the pursuit of objectives.",
    ),
    principle(
        6,
        ComponentKind::RiskAssessment,
        "The organization specifies objectives with sufficient clarity to enable the identification and assessment of risks relating to objectives.",
    ),
    principle(
        7,
        ComponentKind::RiskAssessment,
        "The organization identifies risks to the achievement of its objectives across the entity and analyzes risks as a basis for determining how the risks should be managed.",
    ),
    principle(
        8,
        ComponentKind::RiskAssessment,
        "The organization considers the potential for fraud in assessing risks to the achievement of objectives.",
    ),
    principle(
        9,
        ComponentKind::RiskAssessment,
        "The organization identifies and assesses changes that could significantly impact the system of internal control.",
    ),
    principle(
        10,
        ComponentKind::ControlActivities,
        "The organization selects and develops control activities that contribute to the mitigation of risks to the achievement of objectives to acceptable levels.",
    ),
    principle(
        11,
        ComponentKind::ControlActivities,
        "The organization selects and develops general control activities over technology to support the achievement of objectives.",
    ),
    principle(
        12,
        ComponentKind::ControlActivities,
        "The organization deploys control activities through policies that establish what is expected and procedures that put policies into action.",
    ),
    principle(
        13,
        ComponentKind::InformationAndCommunication,
        "The organization obtains or generates and uses relevant, quality information to support the functioning of internal control.",
    ),
    principle(
        14,
        ComponentKind::InformationAndCommunication,
        "The organization internally communicates information, including objectives and responsibilities for internal control, necessary to support the functioning of internal control.",
    ),
    principle(
        15,
        ComponentKind::InformationAndCommunication,
        "The organization communicates with external parties regarding matters affecting the functioning of internal control.",
    ),
    principle(
        16,
        ComponentKind::MonitoringActivities,
        "The organization selects, develops, and performs ongoing and/or separate evaluations to ascertain whether the components of internal control are present and functioning.",
    ),
    principle(
        17,
        ComponentKind::MonitoringActivities,
        "The organization evaluates and communicates internal control deficiencies in a timely manner to those parties responsible for taking corrective action, including senior management and the board of directors, as appropriate.",
    ),
];

/// Look up a principle by number.
pub fn lookup(number: PrincipleNumber) -> Option<&'static Principle> {
    let index = number.get().checked_sub(PrincipleNumber::MIN)?;
    PRINCIPLES.get(usize::from(index))
}

/// Principles owned by `kind`, in ascending number order.
pub fn principles_of(kind: ComponentKind) -> impl Iterator<Item = &'static Principle> {
    PRINCIPLES.iter().filter(move |p| p.component() == kind)
}
