//! Minimal element selectors.
//!
//! Supports one compound selector made of `#id`, `.class` and `[attr]`
//! parts, e.g. `.counter`, `#skills-next` or `.counter[data-cp-color]`.
//! Combinators (whitespace, `>`, `+`, `~`) and selector lists are rejected.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use super::document::Element;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    #[error("selector is empty")]
    Empty,
    #[error("unsupported selector syntax `{found}` at offset {offset} in `{selector}`")]
    Unsupported {
        selector: String,
        found: char,
        offset: usize,
    },
    #[error("expected a name after `{prefix}` in `{selector}`")]
    MissingName { selector: String, prefix: char },
    #[error("unterminated attribute selector in `{0}`")]
    UnterminatedAttribute(String),
}

/// One simple selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimpleSelector {
    Id(String),
    Class(String),
    Attribute(String),
}

/// Compound selector: an element matches when every part matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    parts: Vec<SimpleSelector>,
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

impl Selector {
    pub fn parse(input: &str) -> Result<Self, SelectorError> {
        let selector = input.trim();
        if selector.is_empty() {
            return Err(SelectorError::Empty);
        }

        let mut parts = Vec::new();
        let mut chars = selector.char_indices().peekable();
        while let Some((offset, c)) = chars.next() {
            match c {
                '#' | '.' => {
                    let mut name = String::new();
                    while let Some(&(_, next)) = chars.peek() {
                        if !is_name_char(next) {
                            break;
                        }
                        name.push(next);
                        chars.next();
                    }
                    if name.is_empty() {
                        return Err(SelectorError::MissingName {
                            selector: selector.to_string(),
                            prefix: c,
                        });
                    }
                    parts.push(if c == '#' {
                        SimpleSelector::Id(name)
                    } else {
                        SimpleSelector::Class(name)
                    });
                }
                '[' => {
                    let mut name = String::new();
                    let mut closed = false;
                    for (inner_offset, next) in chars.by_ref() {
                        if next == ']' {
                            closed = true;
                            break;
                        }
                        if !is_name_char(next) {
                            return Err(SelectorError::Unsupported {
                                selector: selector.to_string(),
                                found: next,
                                offset: inner_offset,
                            });
                        }
                        name.push(next);
                    }
                    if !closed {
                        return Err(SelectorError::UnterminatedAttribute(selector.to_string()));
                    }
                    if name.is_empty() {
                        return Err(SelectorError::MissingName {
                            selector: selector.to_string(),
                            prefix: '[',
                        });
                    }
                    parts.push(SimpleSelector::Attribute(name));
                }
                other => {
                    return Err(SelectorError::Unsupported {
                        selector: selector.to_string(),
                        found: other,
                        offset,
                    })
                }
            }
        }

        Ok(Self { parts })
    }

    pub fn parts(&self) -> &[SimpleSelector] {
        &self.parts
    }

    pub fn matches<E: Element + ?Sized>(&self, element: &E) -> bool {
        self.parts.iter().all(|part| match part {
            SimpleSelector::Id(id) => element.id().as_deref() == Some(id.as_str()),
            SimpleSelector::Class(class) => element.has_class(class),
            SimpleSelector::Attribute(name) => element.attribute(name).is_some(),
        })
    }
}

impl FromStr for Selector {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for part in &self.parts {
            match part {
                SimpleSelector::Id(id) => write!(f, "#{id}")?,
                SimpleSelector::Class(class) => write!(f, ".{class}")?,
                SimpleSelector::Attribute(name) => write!(f, "[{name}]")?,
            }
        }
        Ok(())
    }
}
