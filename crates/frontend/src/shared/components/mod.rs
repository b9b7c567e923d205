pub mod card_animated;
pub mod loading;
pub mod table;
pub mod ui;
