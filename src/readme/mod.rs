//! README generation.
//!
//! - **Title**: display title from the project directory name
//! - **Template**: the built-in scaffold and `{variable}` substitution
//! - **Generator**: resolve remote, render, persist; reports instead of erroring

mod generator;
mod template;
mod title;

pub use generator::{Failure, FailureKind, GenerationReport, ReadmeGenerator};
pub use template::{DEFAULT_TEMPLATE, TemplateError, readme_variables, render_template};
pub use title::display_title;
