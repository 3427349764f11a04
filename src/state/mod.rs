mod manager;

pub use manager::{FillStateManager, fraction_of};
