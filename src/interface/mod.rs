pub mod gallery;
pub mod prompts;
pub mod render;

pub use gallery::{GALLERY_INDEX, GalleryEntry, write_gallery};
pub use prompts::{
    Action, available_actions, parse_pieces, prompt_action, prompt_container, prompt_food_name,
    prompt_pieces,
};
pub use render::{
    display_container, display_outcome, display_session, fill_gauge, write_container_svg,
};
