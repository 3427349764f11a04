pub mod cli;
pub mod error;
pub mod geometry;
pub mod interface;
pub mod lookup;
pub mod models;
pub mod session;
pub mod state;

pub use error::{Result, TrackerError};
pub use lookup::{FoodLookup, UsdaClient, UsdaConfig};
pub use models::{Container, FillContainer, FillLevel, FoodRecord, Portion};
pub use session::{Event, Outcome, Session, estimate};
pub use state::FillStateManager;
