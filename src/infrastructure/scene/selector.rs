// SPDX-License-Identifier: MPL-2.0
//! Minimal CSS selector parser.
//!
//! Supported grammar:
//!
//! ```text
//! selector-list := complex ( "," complex )*
//! complex       := compound ( whitespace compound )*      (descendant combinator)
//! compound      := [tag] ( "#" id | "." class | "[" attr "]" )*
//! attr          := name | name "=" value | name "^=" value  (value optionally quoted)
//! ```

/// A parsed selector list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorList {
    pub(super) alternatives: Vec<Complex>,
}

/// Compounds joined by descendant combinators, subject last.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct Complex {
    pub(super) compounds: Vec<Compound>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(super) struct Compound {
    pub(super) tag: Option<String>,
    pub(super) id: Option<String>,
    pub(super) classes: Vec<String>,
    pub(super) attributes: Vec<AttributeMatch>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum AttributeMatch {
    Exists(String),
    Equals(String, String),
    Prefix(String, String),
}

impl AttributeMatch {
    pub(super) fn matches(&self, value: Option<&str>) -> bool {
        match (self, value) {
            (AttributeMatch::Exists(_), Some(_)) => true,
            (AttributeMatch::Equals(_, expected), Some(actual)) => actual == expected,
            (AttributeMatch::Prefix(_, prefix), Some(actual)) => {
                actual.starts_with(prefix.as_str())
            }
            (_, None) => false,
        }
    }

    pub(super) fn name(&self) -> &str {
        match self {
            AttributeMatch::Exists(name)
            | AttributeMatch::Equals(name, _)
            | AttributeMatch::Prefix(name, _) => name,
        }
    }
}

impl SelectorList {
    /// Parses a selector list, returning `None` on anything outside the
    /// supported grammar.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let alternatives = input
            .split(',')
            .map(parse_complex)
            .collect::<Option<Vec<_>>>()?;
        Some(Self { alternatives })
    }
}

fn parse_complex(input: &str) -> Option<Complex> {
    let compounds = split_compounds(input)?
        .into_iter()
        .map(parse_compound)
        .collect::<Option<Vec<_>>>()?;
    if compounds.is_empty() {
        return None;
    }
    Some(Complex { compounds })
}

/// Splits on whitespace outside of `[...]`.
fn split_compounds(input: &str) -> Option<Vec<&str>> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = None;
    for (i, c) in input.char_indices() {
        match c {
            '[' => {
                depth += 1;
                start.get_or_insert(i);
            }
            ']' => {
                depth = depth.checked_sub(1)?;
            }
            c if c.is_whitespace() && depth == 0 => {
                if let Some(s) = start.take() {
                    parts.push(&input[s..i]);
                }
            }
            _ => {
                start.get_or_insert(i);
            }
        }
    }
    if depth != 0 {
        return None;
    }
    if let Some(s) = start {
        parts.push(&input[s..]);
    }
    Some(parts)
}

fn parse_compound(input: &str) -> Option<Compound> {
    let mut compound = Compound::default();
    let mut rest = input;

    let tag_len = rest.find(['#', '.', '[']).unwrap_or(rest.len());
    if tag_len > 0 {
        let tag = &rest[..tag_len];
        if !is_ident(tag) && tag != "*" {
            return None;
        }
        if tag != "*" {
            compound.tag = Some(tag.to_ascii_lowercase());
        }
        rest = &rest[tag_len..];
    }

    while let Some(marker) = rest.chars().next() {
        rest = &rest[1..];
        match marker {
            '#' | '.' => {
                let len = rest.find(['#', '.', '[']).unwrap_or(rest.len());
                let name = &rest[..len];
                if !is_ident(name) {
                    return None;
                }
                if marker == '#' {
                    compound.id = Some(name.to_string());
                } else {
                    compound.classes.push(name.to_string());
                }
                rest = &rest[len..];
            }
            '[' => {
                let end = rest.find(']')?;
                compound.attributes.push(parse_attribute(&rest[..end])?);
                rest = &rest[end + 1..];
            }
            _ => return None,
        }
    }

    Some(compound)
}

fn parse_attribute(input: &str) -> Option<AttributeMatch> {
    if let Some((name, value)) = input.split_once("^=") {
        return Some(AttributeMatch::Prefix(ident(name)?, unquote(value)?));
    }
    if let Some((name, value)) = input.split_once('=') {
        return Some(AttributeMatch::Equals(ident(name)?, unquote(value)?));
    }
    Some(AttributeMatch::Exists(ident(input)?))
}

fn ident(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    is_ident(trimmed).then(|| trimmed.to_string())
}

fn unquote(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    let unquoted = ['"', '\'']
        .iter()
        .find_map(|q| {
            trimmed
                .strip_prefix(*q)
                .and_then(|inner| inner.strip_suffix(*q))
        })
        .unwrap_or(trimmed);
    Some(unquoted.to_string())
}

fn is_ident(s: &str) -> bool {
    !s.is_empty()
        && s
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
