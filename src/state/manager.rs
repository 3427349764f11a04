use std::collections::HashMap;

use log::debug;

use crate::models::{FillContainer, FillLevel};

/// Fraction of a container filled at `level`.
pub fn fraction_of(level: FillLevel) -> f64 {
    level.fraction()
}

/// Holds the fill level of each fill-capable container for one session.
///
/// Containers start `Empty` the first time they are referenced and only
/// change through [`FillStateManager::advance`].
#[derive(Debug, Clone, Default)]
pub struct FillStateManager {
    levels: HashMap<FillContainer, FillLevel>,
}

impl FillStateManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance one container to its next fill level, wrapping after full.
    pub fn advance(&mut self, container: FillContainer) {
        let level = self.levels.entry(container).or_default();
        *level = level.next();
        debug!("{} fill advanced to {}", container, level);
    }

    /// Current level of a container (`Empty` if never advanced).
    pub fn current_level(&self, container: FillContainer) -> FillLevel {
        self.levels.get(&container).copied().unwrap_or_default()
    }

    /// Current fill fraction of a container.
    pub fn fraction(&self, container: FillContainer) -> f64 {
        fraction_of(self.current_level(container))
    }

    /// Level of every fill-capable container, in display order.
    pub fn snapshot(&self) -> Vec<(FillContainer, FillLevel)> {
        FillContainer::ALL
            .iter()
            .map(|&c| (c, self.current_level(c)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_empty() {
        let manager = FillStateManager::new();
        assert_eq!(manager.current_level(FillContainer::Glass), FillLevel::Empty);
        assert_eq!(manager.fraction(FillContainer::Glass), 0.0);
    }

    #[test]
    fn test_advance_is_independent_per_container() {
        let mut manager = FillStateManager::new();
        manager.advance(FillContainer::Plate);
        manager.advance(FillContainer::Plate);
        manager.advance(FillContainer::Glass);

        assert_eq!(manager.current_level(FillContainer::Plate), FillLevel::Half);
        assert_eq!(manager.current_level(FillContainer::Bowl), FillLevel::Empty);
        assert_eq!(manager.current_level(FillContainer::Glass), FillLevel::Quarter);
    }

    #[test]
    fn test_five_advances_return_to_start() {
        let mut manager = FillStateManager::new();
        manager.advance(FillContainer::Bowl);
        let start = manager.current_level(FillContainer::Bowl);

        for _ in 0..5 {
            manager.advance(FillContainer::Bowl);
        }
        assert_eq!(manager.current_level(FillContainer::Bowl), start);
    }

    #[test]
    fn test_snapshot_order() {
        let mut manager = FillStateManager::new();
        manager.advance(FillContainer::Glass);
        let snapshot = manager.snapshot();
        assert_eq!(
            snapshot,
            vec![
                (FillContainer::Plate, FillLevel::Empty),
                (FillContainer::Bowl, FillLevel::Empty),
                (FillContainer::Glass, FillLevel::Quarter),
            ]
        );
    }
}
