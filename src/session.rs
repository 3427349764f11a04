use std::fmt;
use std::num::NonZeroU32;

use log::{debug, info};

use crate::lookup::FoodLookup;
use crate::models::{Container, FillContainer, FillLevel, Portion};
use crate::state::FillStateManager;

/// Result of a search, shown to the user as a single line.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Estimate { description: String, total_kcal: f64 },
    EmptyFoodName,
    NoResults,
    NoCalorieData { description: String },
}

impl Outcome {
    /// Total rounded half away from zero.
    pub fn rounded_kcal(&self) -> Option<i64> {
        match self {
            Outcome::Estimate { total_kcal, .. } => Some(total_kcal.round() as i64),
            _ => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Estimate { description, total_kcal } => {
                write!(f, "{}: {} kcal", description, total_kcal.round() as i64)
            }
            Outcome::EmptyFoodName => f.write_str("Please enter a food name"),
            Outcome::NoResults => f.write_str("No results found"),
            Outcome::NoCalorieData { .. } => f.write_str("Calorie data not available"),
        }
    }
}

/// Look up `food_name` and scale its calories by `portion`.
///
/// Blank names are rejected before any lookup happens. Only the first result
/// is considered.
pub fn estimate(lookup: &dyn FoodLookup, food_name: &str, portion: Portion) -> Outcome {
    let query = food_name.trim();
    if query.is_empty() {
        return Outcome::EmptyFoodName;
    }

    let results = lookup.search(query);
    let Some(first) = results.into_iter().next() else {
        info!("No results for '{}'", query);
        return Outcome::NoResults;
    };

    match first.energy_kcal() {
        Some(base_kcal) => {
            let total_kcal = portion.total_kcal(base_kcal);
            debug!(
                "{}: {} kcal per serving x {:.3} servings = {:.2} kcal",
                first.description,
                base_kcal,
                portion.servings(),
                total_kcal
            );
            Outcome::Estimate {
                description: first.description,
                total_kcal,
            }
        }
        None => {
            info!("'{}' has no Energy/KCAL nutrient", first.description);
            Outcome::NoCalorieData {
                description: first.description,
            }
        }
    }
}

/// A discrete user action.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    SetFoodName(String),
    SelectContainer(Container),
    /// Advance the selected container by one fill step.
    ClickFill,
    SetPieces(u32),
    Search,
}

/// State of one interactive session.
///
/// Each event is handled once, in order; nothing is retriggered.
#[derive(Debug, Clone)]
pub struct Session {
    fills: FillStateManager,
    container: Container,
    pieces: NonZeroU32,
    food_name: String,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            fills: FillStateManager::new(),
            container: Container::default(),
            pieces: NonZeroU32::MIN,
            food_name: String::new(),
        }
    }
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fills(&self) -> &FillStateManager {
        &self.fills
    }

    pub fn container(&self) -> Container {
        self.container
    }

    pub fn pieces(&self) -> NonZeroU32 {
        self.pieces
    }

    pub fn food_name(&self) -> &str {
        &self.food_name
    }

    /// Fill level of the selected container, if it has one.
    pub fn selected_level(&self) -> Option<(FillContainer, FillLevel)> {
        self.container
            .fill_container()
            .map(|c| (c, self.fills.current_level(c)))
    }

    /// Portion implied by the current selection.
    pub fn portion(&self) -> Portion {
        match self.container {
            Container::Filled(container) => Portion::Filled {
                container,
                level: self.fills.current_level(container),
            },
            Container::PieceOrSlice => Portion::Pieces(self.pieces),
        }
    }

    /// Apply one event. Only `Search` produces an outcome.
    pub fn handle(&mut self, event: Event, lookup: &dyn FoodLookup) -> Option<Outcome> {
        debug!("Handling {:?}", event);
        match event {
            Event::SetFoodName(name) => {
                self.food_name = name;
                None
            }
            Event::SelectContainer(container) => {
                self.container = container;
                None
            }
            Event::ClickFill => {
                if let Some(container) = self.container.fill_container() {
                    self.fills.advance(container);
                }
                None
            }
            Event::SetPieces(n) => {
                self.pieces = NonZeroU32::new(n).unwrap_or(NonZeroU32::MIN);
                None
            }
            Event::Search => Some(estimate(lookup, &self.food_name, self.portion())),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::models::{FoodRecord, Nutrient};

    struct CountingLookup {
        records: Vec<FoodRecord>,
        calls: Cell<usize>,
    }

    impl CountingLookup {
        fn new(records: Vec<FoodRecord>) -> Self {
            Self {
                records,
                calls: Cell::new(0),
            }
        }
    }

    impl FoodLookup for CountingLookup {
        fn search(&self, _query: &str) -> Vec<FoodRecord> {
            self.calls.set(self.calls.get() + 1);
            self.records.clone()
        }
    }

    #[test]
    fn test_blank_name_skips_lookup() {
        let lookup = CountingLookup::new(vec![]);
        let mut session = Session::new();
        session.handle(Event::SetFoodName("   ".to_string()), &lookup);

        let outcome = session.handle(Event::Search, &lookup);
        assert_eq!(outcome, Some(Outcome::EmptyFoodName));
        assert_eq!(lookup.calls.get(), 0);
    }

    #[test]
    fn test_click_on_pieces_is_ignored() {
        let lookup = CountingLookup::new(vec![]);
        let mut session = Session::new();
        session.handle(Event::SelectContainer(Container::PieceOrSlice), &lookup);
        session.handle(Event::ClickFill, &lookup);

        assert_eq!(session.selected_level(), None);
        assert_eq!(session.fills().snapshot().iter().filter(|(_, l)| *l != FillLevel::Empty).count(), 0);
    }

    #[test]
    fn test_zero_pieces_clamped_to_one() {
        let lookup = CountingLookup::new(vec![]);
        let mut session = Session::new();
        session.handle(Event::SetPieces(0), &lookup);
        assert_eq!(session.pieces().get(), 1);
    }

    #[test]
    fn test_switching_containers_keeps_levels() {
        let lookup = CountingLookup::new(vec![]);
        let mut session = Session::new();
        session.handle(Event::ClickFill, &lookup);
        session.handle(Event::SelectContainer(Container::Filled(FillContainer::Glass)), &lookup);
        session.handle(Event::ClickFill, &lookup);
        session.handle(Event::ClickFill, &lookup);
        session.handle(Event::SelectContainer(Container::Filled(FillContainer::Plate)), &lookup);

        assert_eq!(session.selected_level(), Some((FillContainer::Plate, FillLevel::Quarter)));
        assert_eq!(session.fills().current_level(FillContainer::Glass), FillLevel::Half);
    }

    #[test]
    fn test_outcome_rounds_half_up() {
        let outcome = Outcome::Estimate {
            description: "Apple".to_string(),
            total_kcal: 32.5,
        };
        assert_eq!(outcome.to_string(), "Apple: 33 kcal");
        assert_eq!(outcome.rounded_kcal(), Some(33));
    }

    #[test]
    fn test_only_first_result_is_used() {
        let lookup = CountingLookup::new(vec![
            FoodRecord::new("Plain", vec![]),
            FoodRecord::new("Rich", vec![Nutrient::new("Energy", "KCAL", 500.0)]),
        ]);
        let outcome = estimate(&lookup, "x", Portion::Pieces(NonZeroU32::MIN));
        assert_eq!(
            outcome,
            Outcome::NoCalorieData {
                description: "Plain".to_string()
            }
        );
    }
}
