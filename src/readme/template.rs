//! README template and `{variable}` substitution.
//!
//! # Syntax
//!
//! - `{name}` - Substitutes the value of variable `name`
//! - `{{` - Renders as literal `{`
//! - `}}` - Renders as literal `}`
//!
//! Undefined variables are an error rather than an empty substitution, so a
//! custom template with a typo fails loudly instead of producing a README with
//! holes in it.

use crate::github::GithubRemote;
use std::collections::HashMap;
use std::fmt;

/// Built-in README scaffold.
///
/// Variables: `title`, `github_url`, `repo_path`, `repo_name`.
///
/// Ends with a single newline after the closing "Generated with README
/// Generator Plugin" line, so the written file is newline-terminated.
pub const DEFAULT_TEMPLATE: &str = include_str!("default_template.md");

/// Error type for template rendering failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// A variable was referenced but not provided.
    UndefinedVariable { name: String, position: usize },
    /// A `{` was found without a matching `}`.
    UnmatchedBrace { position: usize },
    /// An empty variable name was found (e.g., `{}`).
    EmptyVariableName { position: usize },
}

impl fmt::Display for TemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateError::UndefinedVariable { name, position } => {
                write!(
                    f,
                    "undefined variable '{}' at position {} in template",
                    name, position
                )
            }
            TemplateError::UnmatchedBrace { position } => {
                write!(f, "unmatched '{{' at position {} in template", position)
            }
            TemplateError::EmptyVariableName { position } => {
                write!(
                    f,
                    "empty variable name '{{}}' at position {} in template",
                    position
                )
            }
        }
    }
}

impl std::error::Error for TemplateError {}

/// The variables a README template can reference.
pub fn readme_variables(title: &str, remote: &GithubRemote) -> HashMap<String, String> {
    HashMap::from([
        ("title".to_string(), title.to_string()),
        ("github_url".to_string(), remote.url()),
        ("repo_path".to_string(), remote.path()),
        ("repo_name".to_string(), remote.repo_name().to_string()),
    ])
}

/// Render a template string by substituting variables.
///
/// Positions in errors are byte offsets of the opening `{`.
pub fn render_template(
    template: &str,
    variables: &HashMap<String, String>,
) -> Result<String, TemplateError> {
    let mut result = String::with_capacity(template.len() + 256);
    let mut chars = template.char_indices().peekable();

    while let Some((pos, ch)) = chars.next() {
        match ch {
            '{' => {
                if let Some((_, '{')) = chars.peek() {
                    chars.next();
                    result.push('{');
                    continue;
                }

                let mut name = String::new();
                loop {
                    match chars.next() {
                        Some((_, '}')) => break,
                        Some((_, c)) => name.push(c),
                        None => return Err(TemplateError::UnmatchedBrace { position: pos }),
                    }
                }

                let name = name.trim();
                if name.is_empty() {
                    return Err(TemplateError::EmptyVariableName { position: pos });
                }

                let value = variables
                    .get(name)
                    .ok_or_else(|| TemplateError::UndefinedVariable {
                        name: name.to_string(),
                        position: pos,
                    })?;
                result.push_str(value);
            }
            '}' => {
                // `}}` collapses to one brace; a lone `}` passes through.
                if let Some((_, '}')) = chars.peek() {
                    chars.next();
                }
                result.push('}');
            }
            _ => result.push(ch),
        }
    }

    Ok(result)
}
