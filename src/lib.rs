#![warn(clippy::print_stderr)]
#![warn(clippy::print_stdout)]

pub mod error;
pub mod export;
pub mod script;
pub mod template;

pub use crate::error::Error;
pub use crate::export::{AlgoliaExport, ExportRecord};
pub use crate::script::render_config_script;
pub use next_config_model as model;

#[cfg(test)]
mod fixtures;
