mod usda;

pub use usda::{DEFAULT_BASE_URL, DEMO_API_KEY, UsdaClient, UsdaConfig, parse_foods};

use crate::models::FoodRecord;

/// Source of food search results, best match first.
///
/// Implementations never fail: transport or service errors are reported as
/// an empty result list.
pub trait FoodLookup {
    fn search(&self, query: &str) -> Vec<FoodRecord>;
}

impl<T: FoodLookup + ?Sized> FoodLookup for &T {
    fn search(&self, query: &str) -> Vec<FoodRecord> {
        (**self).search(query)
    }
}
