//! Variant axes and their style tables.

use serde::{Deserialize, Deserializer};
use thiserror::Error;

/// A closed enumeration of visual choices with one style-table entry per value.
///
/// Implementors are plain `Copy` enums whose [`VariantAxis::classes`] is an
/// exhaustive `match`, so every value has exactly one table entry and adding a
/// value without styling it fails to compile. [`Default`] is the axis default
/// used when a caller does not pick a value.
pub trait VariantAxis: Copy + Default + PartialEq + 'static {
    /// Axis name used in error messages (`"badge tone"`).
    const AXIS: &'static str;

    /// Every value of the axis, in declaration order.
    const ALL: &'static [Self];

    /// Stable lowercase name of the value (`"danger"`).
    fn token(self) -> &'static str;

    /// Atomic style rules for the value.
    fn classes(self) -> &'static str;

    /// Parses a value from its token.
    ///
    /// Matching is exact; an unknown token is an error and never falls back to
    /// the default.
    fn parse(raw: &str) -> Result<Self, VariantError> {
        Self::ALL
            .iter()
            .copied()
            .find(|value| value.token() == raw)
            .ok_or_else(|| VariantError::Unknown {
                axis: Self::AXIS,
                value: raw.to_string(),
                expected: Self::ALL
                    .iter()
                    .map(|value| value.token())
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }
}

/// Error produced when a variant is selected by name at a string boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VariantError {
    /// The token does not name any value of the axis.
    #[error("unknown {axis} `{value}`; expected one of: {expected}")]
    Unknown {
        /// Axis that rejected the token.
        axis: &'static str,
        /// Token as supplied by the caller.
        value: String,
        /// Comma-separated list of valid tokens.
        expected: String,
    },
}

/// Serde adapter for variant fields, for use with `#[serde(deserialize_with)]`.
///
/// Unknown tokens fail deserialization with the [`VariantError`] message.
pub fn deserialize_variant<'de, D, A>(deserializer: D) -> Result<A, D::Error>
where
    D: Deserializer<'de>,
    A: VariantAxis,
{
    let raw = String::deserialize(deserializer)?;
    A::parse(&raw).map_err(serde::de::Error::custom)
}

/// Iterates an axis's full style table as `(value, classes)` pairs.
pub fn style_table<A: VariantAxis>() -> impl Iterator<Item = (A, &'static str)> {
    A::ALL.iter().map(|value| (*value, value.classes()))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    enum Tone {
        Calm,
        #[default]
        Loud,
    }

    impl VariantAxis for Tone {
        const AXIS: &'static str = "tone";
        const ALL: &'static [Self] = &[Self::Calm, Self::Loud];

        fn token(self) -> &'static str {
            match self {
                Self::Calm => "calm",
                Self::Loud => "loud",
            }
        }

        fn classes(self) -> &'static str {
            match self {
                Self::Calm => "bg-white text-black",
                Self::Loud => "bg-red-500 text-white",
            }
        }
    }

    #[derive(Debug, Deserialize)]
    struct Fixture {
        #[serde(deserialize_with = "deserialize_variant")]
        tone: Tone,
    }

    #[test]
    fn parses_known_tokens() {
        assert_eq!(Tone::parse("calm"), Ok(Tone::Calm));
        assert_eq!(Tone::parse("loud"), Ok(Tone::Loud));
    }

    #[test]
    fn rejects_unknown_token_without_defaulting() {
        let err = Tone::parse("urgent").expect_err("unknown tone");
        assert_eq!(
            err.to_string(),
            "unknown tone `urgent`; expected one of: calm, loud"
        );
    }

    #[test]
    fn parse_is_case_sensitive() {
        assert!(Tone::parse("Calm").is_err());
    }

    #[test]
    fn serde_adapter_rejects_unknown_tokens() {
        let ok: Fixture = serde_json::from_str(r#"{ "tone": "calm" }"#).expect("fixture");
        assert_eq!(ok.tone, Tone::Calm);

        let err = serde_json::from_str::<Fixture>(r#"{ "tone": "urgent" }"#)
            .expect_err("unknown tone");
        assert!(err.to_string().contains("unknown tone `urgent`"));
    }

    #[test]
    fn style_table_covers_every_value() {
        let table: Vec<_> = style_table::<Tone>().collect();
        assert_eq!(
            table,
            vec![
                (Tone::Calm, "bg-white text-black"),
                (Tone::Loud, "bg-red-500 text-white"),
            ]
        );
    }
}
