pub mod catalog;
pub mod format;
