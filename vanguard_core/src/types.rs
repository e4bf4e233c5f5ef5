//! Core enumerations shared by the grade tables, the catalog and the UI

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Qualitative stat rank, ordered weakest to strongest
///
/// `O` is the special tier above SSS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum StatGrade {
    D,
    C,
    B,
    A,
    S,
    Ss,
    Sss,
    O,
}

/// Returned when a grade symbol is not part of the table
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown stat grade: {0:?}")]
pub struct UnknownGrade(pub String);

impl StatGrade {
    /// All grades, weakest first
    pub fn all() -> &'static [StatGrade] {
        &[
            StatGrade::D,
            StatGrade::C,
            StatGrade::B,
            StatGrade::A,
            StatGrade::S,
            StatGrade::Ss,
            StatGrade::Sss,
            StatGrade::O,
        ]
    }

    /// Position in [`StatGrade::all`]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn symbol(self) -> &'static str {
        match self {
            StatGrade::D => "D",
            StatGrade::C => "C",
            StatGrade::B => "B",
            StatGrade::A => "A",
            StatGrade::S => "S",
            StatGrade::Ss => "SS",
            StatGrade::Sss => "SSS",
            StatGrade::O => "O",
        }
    }

    /// Next stronger grade, saturating at the top tier
    pub fn stronger(self) -> StatGrade {
        let all = Self::all();
        all[(self.index() + 1).min(all.len() - 1)]
    }

    /// Next weaker grade, saturating at D
    pub fn weaker(self) -> StatGrade {
        Self::all()[self.index().saturating_sub(1)]
    }
}

impl fmt::Display for StatGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for StatGrade {
    type Err = UnknownGrade;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbol = s.trim().to_ascii_uppercase();
        StatGrade::all()
            .iter()
            .copied()
            .find(|g| g.symbol() == symbol)
            .ok_or_else(|| UnknownGrade(s.to_string()))
    }
}

impl TryFrom<String> for StatGrade {
    type Error = UnknownGrade;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<StatGrade> for String {
    fn from(grade: StatGrade) -> Self {
        grade.symbol().to_string()
    }
}

/// The three graded combat stats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatKind {
    Damage,
    /// Seconds per attack; bonuses reduce it
    Spa,
    Range,
}

impl StatKind {
    pub fn all() -> &'static [StatKind] {
        &[StatKind::Damage, StatKind::Spa, StatKind::Range]
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn label(self) -> &'static str {
        match self {
            StatKind::Damage => "Damage",
            StatKind::Spa => "SPA",
            StatKind::Range => "Range",
        }
    }
}

/// Placement on the community tier list, strongest first in [`Tier::all`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tier {
    #[serde(rename = "S+")]
    SPlus,
    S,
    A,
    B,
    C,
    D,
}

impl Tier {
    pub fn all() -> &'static [Tier] {
        &[Tier::SPlus, Tier::S, Tier::A, Tier::B, Tier::C, Tier::D]
    }

    pub fn label(self) -> &'static str {
        match self {
            Tier::SPlus => "S+",
            Tier::S => "S",
            Tier::A => "A",
            Tier::B => "B",
            Tier::C => "C",
            Tier::D => "D",
        }
    }
}

/// Unit element. Anything the catalog does not know becomes `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Element {
    Fire,
    Water,
    Nature,
    Spark,
    Holy,
    Curse,
    Passion,
    Blast,
    Unbound,
    Unknown,
}

impl Element {
    pub fn all() -> &'static [Element] {
        &[
            Element::Fire,
            Element::Water,
            Element::Nature,
            Element::Spark,
            Element::Holy,
            Element::Curse,
            Element::Passion,
            Element::Blast,
            Element::Unbound,
            Element::Unknown,
        ]
    }

    pub fn label(self) -> &'static str {
        match self {
            Element::Fire => "Fire",
            Element::Water => "Water",
            Element::Nature => "Nature",
            Element::Spark => "Spark",
            Element::Holy => "Holy",
            Element::Curse => "Curse",
            Element::Passion => "Passion",
            Element::Blast => "Blast",
            Element::Unbound => "Unbound",
            Element::Unknown => "Unknown",
        }
    }
}

impl From<String> for Element {
    fn from(value: String) -> Self {
        let wanted = value.trim();
        Element::all()
            .iter()
            .copied()
            .find(|e| e.label().eq_ignore_ascii_case(wanted))
            .unwrap_or(Element::Unknown)
    }
}

impl From<Element> for String {
    fn from(element: Element) -> Self {
        element.label().to_string()
    }
}

/// Summon rarity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rarity {
    Rare,
    Epic,
    Legendary,
    Mythic,
    Secret,
    Exclusive,
}

impl Rarity {
    pub fn label(self) -> &'static str {
        match self {
            Rarity::Rare => "Rare",
            Rarity::Epic => "Epic",
            Rarity::Legendary => "Legendary",
            Rarity::Mythic => "Mythic",
            Rarity::Secret => "Secret",
            Rarity::Exclusive => "Exclusive",
        }
    }
}
