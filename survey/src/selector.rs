//! Hover/commit state machine for the radial selector.
//!
//! States run `Idle → Hovered → Committing`. At most one key is hovered at a
//! time, and once a commit is captured every further pointer event is
//! ignored until the owner calls [`RadialSelector::reset`] for the next item.
//! The selector never re-arms itself.

#[cfg(test)]
#[path = "selector_test.rs"]
mod selector_test;

use tracing::debug;

use crate::consts::{CHOSEN_SCALE, DIMMED_OPACITY, HOVER_SCALE};
use crate::region::{Point, REGIONS, Region, RegionKey, region_at};
use crate::response::Response;

/// Interaction state of the selector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SelectorState {
    /// No region active.
    #[default]
    Idle,
    /// The pointer is over this region.
    Hovered(RegionKey),
    /// This region was chosen; input is frozen until reset.
    Committing(RegionKey),
}

/// A captured selection and the response it resolves to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Commit {
    pub key: RegionKey,
    pub response: Response,
}

/// Cosmetic state of one region.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SectorVisual {
    Normal,
    Hovered,
    /// The committed region, fading out.
    Chosen,
    /// Any other region while a commit is in flight.
    Dimmed,
}

impl SectorVisual {
    #[must_use]
    pub fn scale(self) -> f64 {
        match self {
            Self::Normal | Self::Dimmed => 1.0,
            Self::Hovered => HOVER_SCALE,
            Self::Chosen => CHOSEN_SCALE,
        }
    }

    #[must_use]
    pub fn opacity(self) -> f64 {
        match self {
            Self::Normal | Self::Hovered => 1.0,
            Self::Chosen => 0.0,
            Self::Dimmed => DIMMED_OPACITY,
        }
    }

    /// Whether the slice is drawn in its own color rather than neutral glass.
    #[must_use]
    pub fn is_filled(self) -> bool {
        matches!(self, Self::Hovered | Self::Chosen)
    }
}

#[derive(Clone, Debug, Default)]
pub struct RadialSelector {
    state: SelectorState,
}

impl RadialSelector {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> SelectorState {
        self.state
    }

    #[must_use]
    pub fn hovered(&self) -> Option<RegionKey> {
        match self.state {
            SelectorState::Hovered(key) => Some(key),
            _ => None,
        }
    }

    #[must_use]
    pub fn committed(&self) -> Option<RegionKey> {
        match self.state {
            SelectorState::Committing(key) => Some(key),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_committing(&self) -> bool {
        matches!(self.state, SelectorState::Committing(_))
    }

    /// Pointer entered `key`. Returns whether the state changed.
    pub fn hover(&mut self, key: RegionKey) -> bool {
        match self.state {
            SelectorState::Committing(_) => false,
            SelectorState::Hovered(current) if current == key => false,
            _ => {
                self.state = SelectorState::Hovered(key);
                true
            }
        }
    }

    /// Pointer left `key`. A leave for a region that is no longer hovered is
    /// stale and ignored.
    pub fn unhover(&mut self, key: RegionKey) -> bool {
        if self.state == SelectorState::Hovered(key) {
            self.state = SelectorState::Idle;
            return true;
        }
        false
    }

    /// Pointer left the dial entirely.
    pub fn pointer_exit(&mut self) -> bool {
        if let SelectorState::Hovered(_) = self.state {
            self.state = SelectorState::Idle;
            return true;
        }
        false
    }

    /// Track a pointer position in view-box coordinates.
    pub fn pointer_move(&mut self, point: Point) -> bool {
        match region_at(&REGIONS, point) {
            Some(region) => self.hover(region.key),
            None => self.pointer_exit(),
        }
    }

    /// Capture `key` and freeze input. Returns `None` while another commit is
    /// in flight.
    pub fn commit(&mut self, key: RegionKey) -> Option<Commit> {
        if self.is_committing() {
            return None;
        }
        self.state = SelectorState::Committing(key);
        let response = Region::by_key(key).choice.to_response();
        debug!(region = key.as_str(), "selector committed");
        Some(Commit { key, response })
    }

    /// Confirm at a view-box position; misses outside the annulus are ignored.
    pub fn confirm_at(&mut self, point: Point) -> Option<Commit> {
        if self.is_committing() {
            return None;
        }
        let key = region_at(&REGIONS, point)?.key;
        self.commit(key)
    }

    /// Return to `Idle` for the next item.
    pub fn reset(&mut self) {
        self.state = SelectorState::Idle;
    }

    #[must_use]
    pub fn visual(&self, key: RegionKey) -> SectorVisual {
        match self.state {
            SelectorState::Committing(chosen) if chosen == key => SectorVisual::Chosen,
            SelectorState::Committing(_) => SectorVisual::Dimmed,
            SelectorState::Hovered(hovered) if hovered == key => SectorVisual::Hovered,
            _ => SectorVisual::Normal,
        }
    }
}
