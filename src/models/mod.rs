pub mod catalog;
pub mod lenient;
pub mod portfolio;
