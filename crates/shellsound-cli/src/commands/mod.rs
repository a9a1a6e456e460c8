//! CLI command implementations

pub mod check;
pub mod generate;
pub mod inspect;
pub mod list;

mod reporting;
