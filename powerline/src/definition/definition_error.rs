// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Everything that can go wrong turning a loosely typed definition into a prompt.
/// Construction is all or nothing, the first error aborts it.
#[derive(thiserror::Error, Debug, miette::Diagnostic, PartialEq, Eq)]
pub enum DefinitionError {
    #[error("Unknown key '{key}'. Allowed keys are {allowed}")]
    #[diagnostic(code(r3bl_powerline::definition::unknown_key))]
    UnknownKey {
        key: String,
        /// Shown as the diagnostic's help text.
        #[help]
        allowed: String,
    },

    #[error("Invalid color '{value}'")]
    #[diagnostic(
        code(r3bl_powerline::definition::invalid_color),
        help("Use #RRGGBB, #RGB, ansi:N, 0..=255, or a name like DarkBlue")
    )]
    InvalidColor { value: String },

    #[error("Invalid value for '{key}', expected {expected}")]
    #[diagnostic(code(r3bl_powerline::definition::invalid_value))]
    InvalidValue { key: String, expected: String },

    #[error("Invalid glyph pair {value}")]
    #[diagnostic(
        code(r3bl_powerline::definition::invalid_glyph),
        help("Use a string like \"◄►\" or an array of two strings")
    )]
    InvalidGlyph { value: String },
}

impl DefinitionError {
    pub fn invalid_value(key: impl Into<String>, expected: impl Into<String>) -> Self {
        DefinitionError::InvalidValue {
            key: key.into(),
            expected: expected.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn messages() {
        let error = DefinitionError::UnknownKey {
            key: "colour".into(),
            allowed: "fg, bg".into(),
        };
        assert_eq2!(error.to_string(), "Unknown key 'colour'. Allowed keys are fg, bg");

        let error = DefinitionError::invalid_value("cap", "a string");
        assert_eq2!(error.to_string(), "Invalid value for 'cap', expected a string");
    }

    #[test]
    fn converts_into_report() {
        let report: miette::Report = DefinitionError::InvalidColor {
            value: "#zz".into(),
        }
        .into();
        assert!(matches!(
            report.downcast_ref::<DefinitionError>(),
            Some(DefinitionError::InvalidColor { .. })
        ));
    }
}
