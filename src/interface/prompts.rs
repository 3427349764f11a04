use dialoguer::{Input, Select};

use crate::error::{Result, TrackerError};
use crate::models::Container;
use crate::session::Session;

/// Actions offered by the interactive menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    EnterFood,
    ChooseContainer,
    ClickFill,
    SetPieces,
    Search,
    Quit,
}

/// Menu entries valid for the current selection.
pub fn available_actions(session: &Session) -> Vec<(Action, String)> {
    let mut actions = vec![
        (Action::EnterFood, "Enter food name".to_string()),
        (Action::ChooseContainer, "Select portion type".to_string()),
    ];

    match session.container() {
        Container::Filled(c) => actions.push((
            Action::ClickFill,
            format!("Click to fill {}", c.label().to_lowercase()),
        )),
        Container::PieceOrSlice => {
            actions.push((Action::SetPieces, "Set number of pieces / slices".to_string()))
        }
    }

    actions.push((Action::Search, "Search".to_string()));
    actions.push((Action::Quit, "Quit".to_string()));
    actions
}

/// Prompt for the next menu action.
pub fn prompt_action(session: &Session) -> Result<Action> {
    let actions = available_actions(session);
    let labels: Vec<&str> = actions.iter().map(|(_, label)| label.as_str()).collect();

    let selection = Select::new()
        .with_prompt("What next?")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(actions[selection].0)
}

/// Prompt for a food name. Blank input is allowed and handled at search time.
pub fn prompt_food_name(current: &str) -> Result<String> {
    let input: String = Input::new()
        .with_prompt("Enter food name")
        .with_initial_text(current)
        .allow_empty(true)
        .interact_text()?;

    Ok(input)
}

/// Prompt for the portion container.
pub fn prompt_container(current: Container) -> Result<Container> {
    let options: Vec<String> = Container::ALL.iter().map(|c| c.to_string()).collect();
    let default = Container::ALL.iter().position(|c| *c == current).unwrap_or(0);

    let selection = Select::new()
        .with_prompt("Select portion type")
        .items(&options)
        .default(default)
        .interact()?;

    Ok(Container::ALL[selection])
}

/// Parse a piece count; must be a whole number of at least 1.
pub fn parse_pieces(input: &str) -> Result<u32> {
    let pieces: u32 = input
        .trim()
        .parse()
        .map_err(|_| TrackerError::InvalidInput("Invalid number".to_string()))?;

    if pieces == 0 {
        return Err(TrackerError::InvalidInput(
            "Number of pieces must be at least 1".to_string(),
        ));
    }

    Ok(pieces)
}

/// Prompt for the number of pieces or slices.
pub fn prompt_pieces(current: u32) -> Result<u32> {
    let input: String = Input::new()
        .with_prompt("Number of pieces / slices")
        .default(current.to_string())
        .interact_text()?;

    parse_pieces(&input)
}
