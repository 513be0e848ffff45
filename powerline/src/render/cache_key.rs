// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::Display;

/// Opaque token that decides whether a segment's resolved content may be reused. Two
/// keys match when their strings are equal. Callers typically use one key per prompt
/// request (eg: the history id of the command that just ran), so a second render for
/// the same request does not run content producers again.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CacheKey(String);

impl CacheKey {
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self { Self(key.into()) }

    #[must_use]
    pub fn as_str(&self) -> &str { &self.0 }
}

impl From<&str> for CacheKey {
    fn from(key: &str) -> Self { Self::new(key) }
}

impl From<String> for CacheKey {
    fn from(key: String) -> Self { Self(key) }
}

impl From<u64> for CacheKey {
    fn from(key: u64) -> Self { Self(key.to_string()) }
}

impl Display for CacheKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
