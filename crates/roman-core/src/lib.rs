pub mod numeral;
pub mod settings;
pub mod store;
