use std::fmt;

/// Serving multipliers: USDA reference servings held by a full container.
pub const PLATE_SERVINGS: f64 = 2.5;
pub const BOWL_SERVINGS: f64 = 1.75;
pub const GLASS_SERVINGS: f64 = 1.0;

/// Outline used to draw a fill-capable container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerShape {
    Circle,
    Cup,
}

/// A container that tracks a fill level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FillContainer {
    Plate,
    Bowl,
    Glass,
}

impl FillContainer {
    pub const ALL: [FillContainer; 3] = [FillContainer::Plate, FillContainer::Bowl, FillContainer::Glass];

    /// Reference servings when the container is full.
    pub fn serving_multiplier(self) -> f64 {
        match self {
            FillContainer::Plate => PLATE_SERVINGS,
            FillContainer::Bowl => BOWL_SERVINGS,
            FillContainer::Glass => GLASS_SERVINGS,
        }
    }

    pub fn shape(self) -> ContainerShape {
        match self {
            FillContainer::Plate | FillContainer::Bowl => ContainerShape::Circle,
            FillContainer::Glass => ContainerShape::Cup,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FillContainer::Plate => "Plate",
            FillContainer::Bowl => "Bowl",
            FillContainer::Glass => "Glass",
        }
    }

    /// Lowercase key used for file names.
    pub fn key(self) -> &'static str {
        match self {
            FillContainer::Plate => "plate",
            FillContainer::Bowl => "bowl",
            FillContainer::Glass => "glass",
        }
    }
}

impl fmt::Display for FillContainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Portion container chosen by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Container {
    Filled(FillContainer),
    PieceOrSlice,
}

impl Container {
    pub const ALL: [Container; 4] = [
        Container::Filled(FillContainer::Plate),
        Container::Filled(FillContainer::Bowl),
        Container::Filled(FillContainer::Glass),
        Container::PieceOrSlice,
    ];

    /// The fill-capable container, if this one has a fill level.
    pub fn fill_container(self) -> Option<FillContainer> {
        match self {
            Container::Filled(c) => Some(c),
            Container::PieceOrSlice => None,
        }
    }
}

impl Default for Container {
    fn default() -> Self {
        Container::Filled(FillContainer::Plate)
    }
}

impl fmt::Display for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Container::Filled(c) => c.fmt(f),
            Container::PieceOrSlice => f.write_str("Piece / Slice"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serving_multipliers() {
        assert_eq!(FillContainer::Plate.serving_multiplier(), 2.5);
        assert_eq!(FillContainer::Bowl.serving_multiplier(), 1.75);
        assert_eq!(FillContainer::Glass.serving_multiplier(), 1.0);
    }

    #[test]
    fn test_shapes() {
        assert_eq!(FillContainer::Plate.shape(), ContainerShape::Circle);
        assert_eq!(FillContainer::Bowl.shape(), ContainerShape::Circle);
        assert_eq!(FillContainer::Glass.shape(), ContainerShape::Cup);
    }

    #[test]
    fn test_pieces_have_no_fill() {
        assert_eq!(Container::PieceOrSlice.fill_container(), None);
        assert_eq!(
            Container::Filled(FillContainer::Bowl).fill_container(),
            Some(FillContainer::Bowl)
        );
    }
}
