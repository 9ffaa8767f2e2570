// Copyright (c) 2026 The mktsec Authors
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Input normalization.
//!
//! Text is trimmed, lowercased and has whitespace runs collapsed. An input
//! containing `=` is a structured list of `key=value` items separated by `;`,
//! `,`, `&` or newlines. Anything else is a single positional value.

const ITEM_SEPARATORS: [char; 4] = [';', ',', '&', '\n'];

/// One normalized input field. Positional values carry an empty key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Field {
    pub key: String,
    pub value: String,
}

impl Field {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn positional(value: impl Into<String>) -> Self {
        Self::new(String::new(), value)
    }

    pub fn is_positional(&self) -> bool {
        self.key.is_empty()
    }
}

/// Normalizes one fingerprint input into fields sorted by (key, value).
///
/// ```
/// use mktsec_fingerprint::{Field, normalize_input};
///
/// assert_eq!(
///     normalize_input(" Device = PhoneA ; session=1001 "),
///     vec![Field::new("device", "phonea"), Field::new("session", "1001")]
/// );
/// assert_eq!(normalize_input("  Ubuntu   22.04 "), vec![Field::positional("ubuntu 22.04")]);
/// assert!(normalize_input("   ").is_empty());
/// ```
pub fn normalize_input(input: &str) -> Vec<Field> {
    let mut fields = if input.contains('=') {
        input.split(ITEM_SEPARATORS).filter_map(parse_item).collect()
    } else {
        let value = normalize_text(input);
        if value.is_empty() {
            Vec::new()
        } else {
            vec![Field::positional(value)]
        }
    };

    fields.sort_unstable();
    fields
}

fn parse_item(item: &str) -> Option<Field> {
    let field = match item.split_once('=') {
        Some((key, value)) => Field::new(normalize_text(key), normalize_text(value)),
        None => Field::positional(normalize_text(item)),
    };

    if field.key.is_empty() && field.value.is_empty() {
        None
    } else {
        Some(field)
    }
}

pub(crate) fn normalize_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for word in text.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.extend(word.chars().flat_map(char::to_lowercase));
    }
    out
}
