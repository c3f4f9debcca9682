//! Angular regions of the radial selector.
//!
//! Angles are in degrees, clockwise from 12 o'clock, in SVG view-box space
//! (y grows downward). Each region owns the half-open span
//! `[start_deg, end_deg)`; the fixed [`REGIONS`] set tiles the full circle so
//! every angle inside the annulus maps to exactly one region. Drawn slices
//! are inset by [`SECTOR_GAP_DEG`] for visual separation, but hit-testing
//! always uses the full span.

#[cfg(test)]
#[path = "region_test.rs"]
mod region_test;

use crate::consts::{
    ANGLE_EPSILON, CENTER, FULL_TURN_DEG, INNER_PADDING, RADIUS_INNER, RADIUS_OUTER, SECTOR_GAP_DEG,
};
use crate::response::{InterestLevel, Response, RolePreference};

/// A position in view-box coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn distance_to(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Centre of the dial.
pub const DIAL_CENTER: Point = Point::new(CENTER, CENTER);

/// Explicit interest/rating/tried payload for a directional choice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stance {
    pub interest: InterestLevel,
    pub rating: u8,
    pub tried: bool,
}

impl Stance {
    #[must_use]
    pub const fn new(interest: InterestLevel, rating: u8, tried: bool) -> Self {
        Self { interest, rating, tried }
    }
}

/// What selecting a region means, one variant per role category.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegionChoice {
    /// Both directions; always enthusiastic, tried, top rating.
    Switch,
    /// Not applicable; always no interest, not tried.
    Skip,
    Dominant(Stance),
    Submissive(Stance),
}

impl RegionChoice {
    #[must_use]
    pub fn role(self) -> RolePreference {
        match self {
            Self::Switch => RolePreference::Switch,
            Self::Skip => RolePreference::None,
            Self::Dominant(_) => RolePreference::Dominant,
            Self::Submissive(_) => RolePreference::Submissive,
        }
    }

    /// The full response this choice produces.
    #[must_use]
    pub fn to_response(self) -> Response {
        let role = Some(self.role());
        match self {
            Self::Switch => Response {
                tried: true,
                rating: 5,
                interest: Some(InterestLevel::Enthusiastic),
                role,
            },
            Self::Skip => Response {
                tried: false,
                rating: 0,
                interest: Some(InterestLevel::NoInterest),
                role,
            },
            Self::Dominant(stance) | Self::Submissive(stance) => Response {
                tried: stance.tried,
                rating: stance.rating,
                interest: Some(stance.interest),
                role,
            },
        }
    }
}

/// Stable identifier for each region.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RegionKey {
    Switch,
    SubLove,
    SubOk,
    SubWant,
    SubNo,
    Skip,
    DomNo,
    DomWant,
    DomOk,
    DomLove,
}

impl RegionKey {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Switch => "switch",
            Self::SubLove => "sub-love",
            Self::SubOk => "sub-ok",
            Self::SubWant => "sub-want",
            Self::SubNo => "sub-no",
            Self::Skip => "skip",
            Self::DomNo => "dom-no",
            Self::DomWant => "dom-want",
            Self::DomOk => "dom-ok",
            Self::DomLove => "dom-love",
        }
    }
}

/// One angular slice of the selector bound to one choice.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Region {
    pub key: RegionKey,
    pub start_deg: f64,
    pub end_deg: f64,
    pub choice: RegionChoice,
    pub label: &'static str,
    pub sub_label: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
}

const LOVE: Stance = Stance::new(InterestLevel::Enthusiastic, 5, true);
const OK: Stance = Stance::new(InterestLevel::Neutral, 3, true);
const WANT: Stance = Stance::new(InterestLevel::Interested, 0, false);
const NO: Stance = Stance::new(InterestLevel::HardLimit, 0, false);

/// The fixed region set, clockwise from the top.
pub static REGIONS: [Region; 10] = [
    Region {
        key: RegionKey::Switch,
        start_deg: -18.0,
        end_deg: 18.0,
        choice: RegionChoice::Switch,
        label: "Switch",
        sub_label: "双向",
        icon: "⇄",
        color: "#8b5cf6",
    },
    Region {
        key: RegionKey::SubLove,
        start_deg: 18.0,
        end_deg: 54.0,
        choice: RegionChoice::Submissive(LOVE),
        label: "爱死了",
        sub_label: "接受",
        icon: "♥",
        color: "#3b82f6",
    },
    Region {
        key: RegionKey::SubOk,
        start_deg: 54.0,
        end_deg: 90.0,
        choice: RegionChoice::Submissive(OK),
        label: "还可以",
        sub_label: "接受",
        icon: "✓",
        color: "#0ea5e9",
    },
    Region {
        key: RegionKey::SubWant,
        start_deg: 90.0,
        end_deg: 126.0,
        choice: RegionChoice::Submissive(WANT),
        label: "想尝试",
        sub_label: "接受",
        icon: "?",
        color: "#f59e0b",
    },
    Region {
        key: RegionKey::SubNo,
        start_deg: 126.0,
        end_deg: 162.0,
        choice: RegionChoice::Submissive(NO),
        label: "不行",
        sub_label: "接受",
        icon: "✕",
        color: "#f43f5e",
    },
    Region {
        key: RegionKey::Skip,
        start_deg: 162.0,
        end_deg: 198.0,
        choice: RegionChoice::Skip,
        label: "跳过",
        sub_label: "N/A",
        icon: "⊘",
        color: "#94a3b8",
    },
    Region {
        key: RegionKey::DomNo,
        start_deg: 198.0,
        end_deg: 234.0,
        choice: RegionChoice::Dominant(NO),
        label: "不行",
        sub_label: "提供",
        icon: "⛨",
        color: "#dc2626",
    },
    Region {
        key: RegionKey::DomWant,
        start_deg: 234.0,
        end_deg: 270.0,
        choice: RegionChoice::Dominant(WANT),
        label: "想尝试",
        sub_label: "提供",
        icon: "→",
        color: "#ea580c",
    },
    Region {
        key: RegionKey::DomOk,
        start_deg: 270.0,
        end_deg: 306.0,
        choice: RegionChoice::Dominant(OK),
        label: "还可以",
        sub_label: "提供",
        icon: "✓",
        color: "#059669",
    },
    Region {
        key: RegionKey::DomLove,
        start_deg: 306.0,
        end_deg: 342.0,
        choice: RegionChoice::Dominant(LOVE),
        label: "爽翻了",
        sub_label: "提供",
        icon: "⚡",
        color: "#7c3aed",
    },
];

impl Region {
    /// Look up a region of the fixed set by key.
    #[must_use]
    pub fn by_key(key: RegionKey) -> &'static Region {
        match key {
            RegionKey::Switch => &REGIONS[0],
            RegionKey::SubLove => &REGIONS[1],
            RegionKey::SubOk => &REGIONS[2],
            RegionKey::SubWant => &REGIONS[3],
            RegionKey::SubNo => &REGIONS[4],
            RegionKey::Skip => &REGIONS[5],
            RegionKey::DomNo => &REGIONS[6],
            RegionKey::DomWant => &REGIONS[7],
            RegionKey::DomOk => &REGIONS[8],
            RegionKey::DomLove => &REGIONS[9],
        }
    }

    #[must_use]
    pub fn span_deg(&self) -> f64 {
        self.end_deg - self.start_deg
    }

    #[must_use]
    pub fn mid_deg(&self) -> f64 {
        (self.start_deg + self.end_deg) / 2.0
    }

    /// Whether `deg` falls in this region's half-open span, wrapping at 360.
    #[must_use]
    pub fn contains_angle(&self, deg: f64) -> bool {
        let offset = normalize_degrees_360(deg - self.start_deg);
        offset < self.span_deg()
    }

    /// The drawn span: the tiling span trimmed by the visual gap on both sides.
    #[must_use]
    pub fn visual_span(&self) -> (f64, f64) {
        let gap = SECTOR_GAP_DEG.min(self.span_deg() / 4.0);
        (self.start_deg + gap, self.end_deg - gap)
    }

    /// SVG path for the drawn slice.
    #[must_use]
    pub fn sector_path(&self) -> String {
        let (start, end) = self.visual_span();
        describe_sector(DIAL_CENTER, RADIUS_INNER + INNER_PADDING, RADIUS_OUTER, start, end)
    }

    /// Where the icon and label sit: mid-angle, mid-radius.
    #[must_use]
    pub fn label_anchor(&self) -> Point {
        polar_to_cartesian(DIAL_CENTER, (RADIUS_INNER + RADIUS_OUTER) / 2.0, self.mid_deg())
    }
}

/// Error returned by [`validate_tiling`].
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum TilingError {
    #[error("region set is empty")]
    Empty,
    #[error("region {key} has a non-positive span")]
    NonPositiveSpan { key: &'static str },
    #[error("gap of {degrees:.3}° between {after} and {before}")]
    Gap { after: &'static str, before: &'static str, degrees: f64 },
    #[error("overlap of {degrees:.3}° between {after} and {before}")]
    Overlap { after: &'static str, before: &'static str, degrees: f64 },
    #[error("regions span {total:.3}° instead of 360°")]
    TotalSpan { total: f64 },
}

/// Check that `regions` cover the circle exactly once.
///
/// # Errors
///
/// Returns the first defect found: an empty set, a non-positive span, a gap
/// or overlap between neighbours, or a total span other than 360°.
pub fn validate_tiling(regions: &[Region]) -> Result<(), TilingError> {
    if regions.is_empty() {
        return Err(TilingError::Empty);
    }
    if let Some(bad) = regions.iter().find(|r| r.span_deg() <= 0.0) {
        return Err(TilingError::NonPositiveSpan { key: bad.key.as_str() });
    }

    let mut ordered: Vec<&Region> = regions.iter().collect();
    ordered.sort_by(|a, b| normalize_degrees_360(a.start_deg).total_cmp(&normalize_degrees_360(b.start_deg)));

    for (i, current) in ordered.iter().enumerate() {
        let next = ordered[(i + 1) % ordered.len()];
        let delta = signed_angle_delta_deg(next.start_deg, current.end_deg);
        if delta > ANGLE_EPSILON {
            return Err(TilingError::Gap { after: current.key.as_str(), before: next.key.as_str(), degrees: delta });
        }
        if delta < -ANGLE_EPSILON {
            return Err(TilingError::Overlap {
                after: current.key.as_str(),
                before: next.key.as_str(),
                degrees: -delta,
            });
        }
    }

    let total: f64 = regions.iter().map(Region::span_deg).sum();
    if (total - FULL_TURN_DEG).abs() > ANGLE_EPSILON {
        return Err(TilingError::TotalSpan { total });
    }
    Ok(())
}

/// The region under `point`, if it lies within the annulus.
#[must_use]
pub fn region_at(regions: &[Region], point: Point) -> Option<&Region> {
    let radius = point.distance_to(DIAL_CENTER);
    if !(RADIUS_INNER..=RADIUS_OUTER).contains(&radius) {
        return None;
    }
    let angle = pointer_angle(DIAL_CENTER, point);
    regions.iter().find(|r| r.contains_angle(angle))
}

/// Clockwise angle from 12 o'clock of `point` around `center`, in `[0, 360)`.
#[must_use]
pub fn pointer_angle(center: Point, point: Point) -> f64 {
    let dx = point.x - center.x;
    let dy = point.y - center.y;
    normalize_degrees_360(dx.atan2(-dy).to_degrees())
}

#[must_use]
pub fn polar_to_cartesian(center: Point, radius: f64, angle_deg: f64) -> Point {
    let rad = (angle_deg - 90.0).to_radians();
    Point::new(center.x + radius * rad.cos(), center.y + radius * rad.sin())
}

/// Four-sided donut-slice path: outer arc end→start, line inward, inner arc
/// start→end, close.
#[must_use]
pub fn describe_sector(center: Point, inner: f64, outer: f64, start_deg: f64, end_deg: f64) -> String {
    let outer_from = polar_to_cartesian(center, outer, end_deg);
    let outer_to = polar_to_cartesian(center, outer, start_deg);
    let inner_from = polar_to_cartesian(center, inner, start_deg);
    let inner_to = polar_to_cartesian(center, inner, end_deg);
    let large_arc = u8::from(end_deg - start_deg > 180.0);

    format!(
        "M {:.3} {:.3} A {outer} {outer} 0 {large_arc} 0 {:.3} {:.3} L {:.3} {:.3} A {inner} {inner} 0 {large_arc} 1 {:.3} {:.3} Z",
        outer_from.x, outer_from.y, outer_to.x, outer_to.y, inner_from.x, inner_from.y, inner_to.x, inner_to.y,
    )
}

#[must_use]
pub fn normalize_degrees_360(deg: f64) -> f64 {
    deg.rem_euclid(FULL_TURN_DEG)
}

/// Shortest signed rotation from `start` to `current`, in `(-180, 180]`.
#[must_use]
pub fn signed_angle_delta_deg(current: f64, start: f64) -> f64 {
    let delta = current - start;
    if !delta.is_finite() {
        return 0.0;
    }
    let mut wrapped = delta.rem_euclid(FULL_TURN_DEG);
    if wrapped > 180.0 {
        wrapped -= FULL_TURN_DEG;
    }
    wrapped
}
