mod container;
mod fill;
mod food;
mod portion;

pub use container::{
    BOWL_SERVINGS, Container, ContainerShape, FillContainer, GLASS_SERVINGS, PLATE_SERVINGS,
};
pub use fill::FillLevel;
pub use food::{ENERGY_NUTRIENT, FoodRecord, KCAL_UNIT, Nutrient};
pub use portion::Portion;
