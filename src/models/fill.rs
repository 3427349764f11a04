use std::fmt;

use crate::error::{Result, TrackerError};

/// Discrete fill step of a container, advanced one click at a time.
///
/// Only five levels exist, so an out-of-range level cannot be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub enum FillLevel {
    #[default]
    Empty,
    Quarter,
    Half,
    ThreeQuarters,
    Full,
}

impl FillLevel {
    /// All levels in click order.
    pub const ALL: [FillLevel; 5] = [
        FillLevel::Empty,
        FillLevel::Quarter,
        FillLevel::Half,
        FillLevel::ThreeQuarters,
        FillLevel::Full,
    ];

    /// The level reached by one more click. `Full` wraps back to `Empty`.
    pub fn next(self) -> Self {
        match self {
            FillLevel::Empty => FillLevel::Quarter,
            FillLevel::Quarter => FillLevel::Half,
            FillLevel::Half => FillLevel::ThreeQuarters,
            FillLevel::ThreeQuarters => FillLevel::Full,
            FillLevel::Full => FillLevel::Empty,
        }
    }

    /// Level reached from `Empty` after `clicks` clicks.
    pub fn after_clicks(clicks: u32) -> Self {
        (0..clicks % 5).fold(FillLevel::Empty, |level, _| level.next())
    }

    /// Proportion of the container that is full.
    #[inline]
    pub fn fraction(self) -> f64 {
        match self {
            FillLevel::Empty => 0.0,
            FillLevel::Quarter => 0.25,
            FillLevel::Half => 0.5,
            FillLevel::ThreeQuarters => 0.75,
            FillLevel::Full => 1.0,
        }
    }

    /// Zero-based step number (0..=4).
    pub fn index(self) -> u8 {
        match self {
            FillLevel::Empty => 0,
            FillLevel::Quarter => 1,
            FillLevel::Half => 2,
            FillLevel::ThreeQuarters => 3,
            FillLevel::Full => 4,
        }
    }

    /// Whole-number percentage, for display.
    pub fn percent(self) -> u8 {
        self.index() * 25
    }
}

impl TryFrom<u8> for FillLevel {
    type Error = TrackerError;

    fn try_from(value: u8) -> Result<Self> {
        FillLevel::ALL
            .get(value as usize)
            .copied()
            .ok_or_else(|| TrackerError::InvalidInput(format!("fill level {} is not in 0..=4", value)))
    }
}

impl fmt::Display for FillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.percent())
    }
}
