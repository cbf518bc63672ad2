use crate::error::IntakeError;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An insertion-ordered map. Filler targets and recipe precedence depend on
/// first-seen order, so every order-sensitive table in the crate uses this.
pub type OrderedMap<K, V> = IndexMap<K, V, ahash::RandomState>;

/// The two independent flower size classes. Each has its own designs and stock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SizeClass {
    Large,
    Small,
}

impl SizeClass {
    pub const ALL: [SizeClass; 2] = [SizeClass::Large, SizeClass::Small];

    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'L' => Some(SizeClass::Large),
            'S' => Some(SizeClass::Small),
            _ => None,
        }
    }

    pub fn code(self) -> char {
        match self {
            SizeClass::Large => 'L',
            SizeClass::Small => 'S',
        }
    }
}

impl fmt::Display for SizeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A single flower read from the stream, e.g. `aS` is a small flower of type `a`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Flower {
    pub kind: char,
    pub size: SizeClass,
}

impl Flower {
    pub fn new(kind: char, size: SizeClass) -> Self {
        Self { kind, size }
    }
}

impl fmt::Display for Flower {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.kind, self.size)
    }
}

impl FromStr for Flower {
    type Err = IntakeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(kind), Some(size), None) if kind.is_ascii_lowercase() => {
                SizeClass::from_code(size)
                    .map(|size| Flower { kind, size })
                    .ok_or_else(|| IntakeError::InvalidFlower(s.to_string()))
            }
            _ => Err(IntakeError::InvalidFlower(s.to_string())),
        }
    }
}

/// A compiled bouquet design.
///
/// `required` keeps the order in which flower types appear in the design.
/// Any flowers beyond the named ones (see [`Recipe::filler`]) may be of any type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: char,
    pub size: SizeClass,
    pub required: OrderedMap<char, u32>,
    pub total_flowers: u32,
    /// Emitted verbatim whenever this recipe completes.
    pub display_code: String,
}

impl Recipe {
    /// Sum of all named-flower requirements, saturating at `u32::MAX`.
    pub fn required_sum(&self) -> u32 {
        self.required
            .values()
            .fold(0u32, |sum, &quantity| sum.saturating_add(quantity))
    }

    /// Number of flowers of any type needed on top of the named ones.
    pub fn filler(&self) -> u32 {
        self.total_flowers.saturating_sub(self.required_sum())
    }
}
