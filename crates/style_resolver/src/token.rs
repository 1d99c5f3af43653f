//! Utility class token parsing.

use crate::family::{classify, StyleFamily};

/// A single utility class split into its modifier scope and base utility.
///
/// `focus-visible:!ring-mw-blue` parses into the modifier list
/// `["focus-visible"]`, the important flag, and the utility `ring-mw-blue`.
/// Colons inside `[...]` arbitrary values never split modifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassToken<'a> {
    raw: &'a str,
    modifiers: Vec<&'a str>,
    important: bool,
    negative: bool,
    utility: &'a str,
    classified: Option<(StyleFamily, &'a str)>,
}

impl<'a> ClassToken<'a> {
    /// Parses one whitespace-free class token.
    pub fn parse(raw: &'a str) -> Self {
        let mut modifiers = Vec::new();
        let mut depth = 0usize;
        let mut start = 0usize;

        for (idx, ch) in raw.char_indices() {
            match ch {
                '[' => depth += 1,
                ']' => depth = depth.saturating_sub(1),
                ':' if depth == 0 => {
                    modifiers.push(&raw[start..idx]);
                    start = idx + 1;
                }
                _ => {}
            }
        }

        let mut utility = &raw[start..];
        let mut important = false;
        if let Some(rest) = utility.strip_prefix('!') {
            utility = rest;
            important = true;
        } else if let Some(rest) = utility.strip_suffix('!') {
            utility = rest;
            important = true;
        }

        let mut negative = false;
        if utility.len() > 1 {
            if let Some(rest) = utility.strip_prefix('-') {
                utility = rest;
                negative = true;
            }
        }

        Self {
            raw,
            modifiers,
            important,
            negative,
            utility,
            classified: classify(utility),
        }
    }

    /// Returns the token exactly as written.
    pub fn raw(&self) -> &'a str {
        self.raw
    }

    /// Returns the utility without modifiers, `!` or a leading `-`.
    pub fn utility(&self) -> &'a str {
        self.utility
    }

    /// Returns the modifier prefixes in written order.
    pub fn modifiers(&self) -> &[&'a str] {
        &self.modifiers
    }

    /// Whether the token carries an `!important` marker.
    pub fn is_important(&self) -> bool {
        self.important
    }

    /// Whether the utility value is negated (`-mt-2`).
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Property family written by the utility, if it is a recognized utility.
    pub fn family(&self) -> Option<StyleFamily> {
        self.classified.map(|(family, _)| family)
    }

    /// Value portion of the utility (`mw-blue/15` for `bg-mw-blue/15`).
    ///
    /// Empty for bare keyword utilities such as `flex` or `rounded`.
    pub fn value(&self) -> Option<&'a str> {
        self.classified.map(|(_, value)| value)
    }

    /// Order-insensitive modifier scope used for conflict detection.
    ///
    /// Arbitrary variants (`[&>svg]:`) are order sensitive, so scopes containing
    /// one keep the written order.
    pub(crate) fn scope_key(&self) -> String {
        let mut modifiers = self.modifiers.clone();
        if !modifiers.iter().any(|modifier| modifier.starts_with('[')) {
            modifiers.sort_unstable();
        }
        modifiers.join(":")
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::family::Side;

    #[test]
    fn splits_modifiers_outside_brackets() {
        let token = ClassToken::parse("md:hover:bg-[color:var(--brand)]");
        assert_eq!(token.modifiers(), &["md", "hover"]);
        assert_eq!(token.utility(), "bg-[color:var(--brand)]");
        assert_eq!(token.family(), Some(StyleFamily::BgColor));
    }

    #[test]
    fn strips_important_and_negative_markers() {
        let token = ClassToken::parse("!-mt-2");
        assert!(token.is_important());
        assert!(token.is_negative());
        assert_eq!(token.utility(), "mt-2");
        assert_eq!(token.family(), Some(StyleFamily::Margin(Side::Top)));

        let trailing = ClassToken::parse("p-4!");
        assert!(trailing.is_important());
        assert_eq!(trailing.utility(), "p-4");
    }

    #[test]
    fn scope_key_ignores_modifier_order() {
        let left = ClassToken::parse("hover:focus:bg-white");
        let right = ClassToken::parse("focus:hover:bg-white");
        assert_eq!(left.scope_key(), right.scope_key());
    }

    #[test]
    fn arbitrary_variant_keeps_written_order() {
        let left = ClassToken::parse("[&>svg]:hover:text-white");
        let right = ClassToken::parse("hover:[&>svg]:text-white");
        assert_ne!(left.scope_key(), right.scope_key());
    }

    #[test]
    fn exposes_color_value() {
        let token = ClassToken::parse("disabled:bg-mw-light-grey/40");
        assert_eq!(token.value(), Some("mw-light-grey/40"));
    }

    #[test]
    fn unknown_classes_have_no_family() {
        let token = ClassToken::parse("mw-card");
        assert_eq!(token.family(), None);
        assert_eq!(token.value(), None);
    }
}
