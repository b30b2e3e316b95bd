//! Configuration model for readmegen.
//!
//! A project may drop a `.readmegen.yaml` next to its sources to change the
//! trigger phrase, the output file, the template, or how overlapping triggers
//! are handled. Without one, the defaults reproduce the stock behaviour.

mod model;
mod operations;
pub mod types;


pub use model::Config;
pub use types::{CONFIG_FILE_NAME, InFlightPolicy};
