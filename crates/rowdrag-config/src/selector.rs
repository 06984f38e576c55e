//! Minimal CSS-like selectors for drag handles.
//!
//! A selector is a comma-separated list of compound selectors. Each
//! compound is an optional tag (or `*`) followed by any number of `#id`,
//! `.class`, `:first-child` and `:last-child` parts. Combinators are not
//! supported.

use regex::Regex;
use rowdrag_common::{ConfigError, ElementInfo};
use std::fmt;
use std::sync::LazyLock;

/// Regex for one compound selector.
static COMPOUND_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\*|[A-Za-z][A-Za-z0-9-]*)?((?:[.#][A-Za-z_][\w-]*|:first-child|:last-child)*)$")
        .unwrap()
});

/// Regex for the parts following the tag.
static PART_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([.#])([A-Za-z_][\w-]*)|:(first-child|last-child)").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pseudo {
    FirstChild,
    LastChild,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Compound {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    pseudos: Vec<Pseudo>,
}

impl Compound {
    fn parse(src: &str) -> Option<Self> {
        let caps = COMPOUND_RE.captures(src)?;
        let mut compound = Compound {
            tag: caps
                .get(1)
                .map(|m| m.as_str())
                .filter(|t| *t != "*")
                .map(str::to_ascii_lowercase),
            ..Self::default()
        };

        let rest = caps.get(2).map_or("", |m| m.as_str());
        for part in PART_RE.captures_iter(rest) {
            match (part.get(1).map(|m| m.as_str()), part.get(2), part.get(3)) {
                (Some("#"), Some(name), _) => compound.id = Some(name.as_str().to_string()),
                (Some(_), Some(name), _) => compound.classes.push(name.as_str().to_string()),
                (_, _, Some(pseudo)) if pseudo.as_str() == "first-child" => {
                    compound.pseudos.push(Pseudo::FirstChild)
                }
                (_, _, Some(_)) => compound.pseudos.push(Pseudo::LastChild),
                _ => return None,
            }
        }
        Some(compound)
    }

    fn matches(&self, el: &ElementInfo) -> bool {
        if let Some(tag) = &self.tag {
            if !el.tag.eq_ignore_ascii_case(tag) {
                return false;
            }
        }
        if let Some(id) = &self.id {
            if el.id.as_deref() != Some(id.as_str()) {
                return false;
            }
        }
        if !self.classes.iter().all(|c| el.has_class(c)) {
            return false;
        }
        self.pseudos.iter().all(|p| match p {
            Pseudo::FirstChild => el.index == 0,
            Pseudo::LastChild => el.index + 1 == el.siblings,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    source: String,
    alternatives: Vec<Compound>,
}

impl Selector {
    pub fn parse(src: &str) -> Result<Self, ConfigError> {
        let alternatives = src
            .split(',')
            .map(str::trim)
            .map(|part| {
                if part.is_empty() {
                    return Err(ConfigError::ValidationError(format!(
                        "empty selector in '{src}'"
                    )));
                }
                Compound::parse(part).ok_or_else(|| {
                    ConfigError::ValidationError(format!("unsupported selector '{part}'"))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            source: src.to_string(),
            alternatives,
        })
    }

    pub fn matches(&self, el: &ElementInfo) -> bool {
        self.alternatives.iter().any(|c| c.matches(el))
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}
