//! Response record and its two classification scales.

#[cfg(test)]
#[path = "response_test.rs"]
mod response_test;

use serde::{Deserialize, Serialize};

/// Six-point ordinal interest scale, from hard refusal to enthusiastic desire.
///
/// Serialized as its ordinal (`0..=5`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum InterestLevel {
    HardLimit = 0,
    NoInterest = 1,
    Neutral = 2,
    Curious = 3,
    Interested = 4,
    Enthusiastic = 5,
}

impl InterestLevel {
    /// All levels in ascending order.
    pub const ALL: [Self; 6] = [
        Self::HardLimit,
        Self::NoInterest,
        Self::Neutral,
        Self::Curious,
        Self::Interested,
        Self::Enthusiastic,
    ];

    #[must_use]
    pub fn ordinal(self) -> u8 {
        self as u8
    }
}

impl From<InterestLevel> for u8 {
    fn from(level: InterestLevel) -> Self {
        level.ordinal()
    }
}

impl TryFrom<u8> for InterestLevel {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(usize::from(value))
            .copied()
            .ok_or_else(|| format!("interest level out of range: {value}"))
    }
}

/// Whether a response is framed as providing, receiving, both, or neither.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RolePreference {
    /// Not applicable; the item was skipped.
    #[serde(rename = "none")]
    None,
    /// Providing.
    #[serde(rename = "dom")]
    Dominant,
    /// Receiving.
    #[serde(rename = "sub")]
    Submissive,
    /// Both directions.
    #[serde(rename = "switch")]
    Switch,
}

/// Highest rating a tried item can carry.
pub const MAX_RATING: u8 = 5;

/// The classification a user assigns to one item.
///
/// `rating` is only meaningful when `tried` is true.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    pub tried: bool,
    pub rating: u8,
    pub interest: Option<InterestLevel>,
    pub role: Option<RolePreference>,
}

impl Default for Response {
    fn default() -> Self {
        Self::unanswered()
    }
}

impl Response {
    /// The placeholder every item holds before it is first answered.
    #[must_use]
    pub const fn unanswered() -> Self {
        Self { tried: false, rating: 0, interest: None, role: None }
    }

    #[must_use]
    pub fn is_unanswered(&self) -> bool {
        *self == Self::unanswered()
    }

    /// Rating to display, or `None` when the item was never tried.
    #[must_use]
    pub fn shown_rating(&self) -> Option<u8> {
        self.tried.then_some(self.rating.min(MAX_RATING))
    }
}
