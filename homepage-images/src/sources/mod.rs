pub mod headshots;
pub mod lists;
pub mod teasers;

pub use headshots::{get_author_annotations, get_headshot};
pub use lists::{concept_items, get_list, CONCEPT_LIST_LIMIT};
pub use teasers::get_teaser;
