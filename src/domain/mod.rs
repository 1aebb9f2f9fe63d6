pub mod listing;
pub mod logic;
