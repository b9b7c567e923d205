pub mod card;
pub mod list;
