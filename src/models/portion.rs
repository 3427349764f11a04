use std::num::NonZeroU32;

use crate::models::{Container, FillContainer, FillLevel};

/// How much of a food was eaten: a filled container or a count of pieces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Portion {
    Filled {
        container: FillContainer,
        level: FillLevel,
    },
    Pieces(NonZeroU32),
}

impl Portion {
    /// Number of reference servings this portion represents.
    pub fn servings(&self) -> f64 {
        match self {
            Portion::Filled { container, level } => container.serving_multiplier() * level.fraction(),
            Portion::Pieces(n) => n.get() as f64,
        }
    }

    /// Total calories given the calories of one reference serving.
    pub fn total_kcal(&self, base_kcal: f64) -> f64 {
        base_kcal * self.servings()
    }

    pub fn container(&self) -> Container {
        match self {
            Portion::Filled { container, .. } => Container::Filled(*container),
            Portion::Pieces(_) => Container::PieceOrSlice,
        }
    }
}
