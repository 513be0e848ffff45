// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{BRANCH, COLOR_SEPARATOR, GEAR, LOCK, POWER, REVERSE_COLOR_SEPARATOR,
            REVERSE_SEPARATOR, SEPARATOR};
use std::{collections::HashMap, fmt::Debug};

/// Expands named glyph entities (eg: `&Branch;`) into the characters they stand for.
pub trait DecodeEntities: Debug {
    fn decode_entities(&self, input: &str) -> String;
}

/// Table backed [`DecodeEntities`]. Recognizes:
/// - `&Name;` for every name in the table,
/// - `&#N;` and `&#xH;` numeric code points.
///
/// Anything else (including a lone `&`) is passed through as is.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntityTable {
    entries: HashMap<String, String>,
}

impl Default for EntityTable {
    #[rustfmt::skip]
    fn default() -> Self {
        let mut it = Self { entries: HashMap::new() };
        it.insert("ColorSeparator",        COLOR_SEPARATOR);
        it.insert("ReverseColorSeparator", REVERSE_COLOR_SEPARATOR);
        it.insert("Separator",             SEPARATOR);
        it.insert("ReverseSeparator",      REVERSE_SEPARATOR);
        it.insert("Branch",                BRANCH);
        it.insert("Lock",                  LOCK);
        it.insert("Gear",                  GEAR);
        it.insert("Power",                 POWER);
        it.insert("amp",                   "&");
        it.insert("lt",                    "<");
        it.insert("gt",                    ">");
        it.insert("quot",                  "\"");
        it
    }
}

impl EntityTable {
    /// Add or replace an entry. `name` is given without the `&` and `;`.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(name.into(), value.into());
    }

    fn lookup(&self, name: &str) -> Option<String> {
        if let Some(number) = name.strip_prefix('#') {
            let code_point = match number.strip_prefix(['x', 'X']) {
                Some(hex) => u32::from_str_radix(hex, 16).ok(),
                None => number.parse::<u32>().ok(),
            };
            return code_point
                .and_then(char::from_u32)
                .map(|it| it.to_string());
        }
        self.entries.get(name).cloned()
    }
}

impl DecodeEntities for EntityTable {
    fn decode_entities(&self, input: &str) -> String {
        if !input.contains('&') {
            return input.to_string();
        }

        let mut acc = String::with_capacity(input.len());
        let mut rest = input;

        while let Some(amp) = rest.find('&') {
            acc.push_str(&rest[..amp]);
            let after = &rest[amp + 1..];
            let replacement = after.find(';').and_then(|semi| {
                self.lookup(&after[..semi]).map(|value| (value, semi))
            });
            match replacement {
                Some((value, semi)) => {
                    acc.push_str(&value);
                    rest = &after[semi + 1..];
                }
                None => {
                    acc.push('&');
                    rest = after;
                }
            }
        }

        acc.push_str(rest);
        acc
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;
    use test_case::test_case;

    #[test_case("plain", "plain")]
    #[test_case("&Branch; main", "\u{e0a0} main")]
    #[test_case("&ColorSeparator;&ReverseColorSeparator;", "\u{258c}\u{2590}")]
    #[test_case("a &amp; b", "a & b")]
    #[test_case("&#x26a1;&#65;", "\u{26a1}A")]
    #[test_case("&Nope; & &;", "&Nope; & &;")]
    #[test_case("tail &Lock", "tail &Lock")]
    fn decode(input: &str, expected: &str) {
        assert_eq2!(EntityTable::default().decode_entities(input), expected);
    }

    #[test]
    fn custom_entry() {
        let mut table = EntityTable::default();
        table.insert("Snake", "🐍");
        assert_eq2!(table.decode_entities("&Snake;"), "🐍");
    }
}
