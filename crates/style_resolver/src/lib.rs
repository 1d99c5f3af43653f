//! Variant-to-class resolution and utility-class override merging.
//!
//! Every `mw_ui` component builds its final `class` attribute the same way:
//! always-applied base rules, one style-table lookup per variant axis, then an
//! optional caller override. [`ClassList`] collects those groups in order and
//! [`ClassList::resolve`] merges them so that, per CSS property family and
//! modifier scope, only the last rule survives.
//!
//! The crate has no UI dependency and performs no I/O; resolution is a pure
//! function of its inputs.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use std::collections::HashSet;

mod family;
mod token;
mod variant;

pub use family::{classify, Corner, Side, StyleFamily};
pub use token::ClassToken;
pub use variant::{deserialize_variant, style_table, VariantAxis, VariantError};

/// Ordered style-rule groups for one render call.
///
/// Precedence is positional: base < earlier variant axis < later variant axis
/// < override.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList<'a> {
    groups: Vec<&'a str>,
}

impl<'a> ClassList<'a> {
    /// Starts a list with the component's always-applied rules.
    pub fn new(base: &'a str) -> Self {
        Self { groups: vec![base] }
    }

    /// Appends the style-table entry for a selected variant.
    pub fn variant<A: VariantAxis>(mut self, value: A) -> Self {
        self.groups.push(value.classes());
        self
    }

    /// Appends a group only when `condition` holds.
    pub fn when(mut self, condition: bool, classes: &'a str) -> Self {
        if condition {
            self.groups.push(classes);
        }
        self
    }

    /// Appends the caller override, which takes precedence over everything before it.
    pub fn class_override(mut self, class_override: Option<&'a str>) -> Self {
        if let Some(class_override) = class_override {
            self.groups.push(class_override);
        }
        self
    }

    /// Returns the groups collected so far.
    pub fn groups(&self) -> &[&'a str] {
        &self.groups
    }

    /// Merges the groups into the final class string.
    pub fn resolve(&self) -> String {
        merge_classes(self.groups.iter().copied())
    }
}

/// Resolves base rules, pre-looked-up variant rules and an override in one call.
pub fn resolve(base: &str, variants: &[&str], class_override: Option<&str>) -> String {
    merge_classes(
        std::iter::once(base)
            .chain(variants.iter().copied())
            .chain(class_override),
    )
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct ConflictKey {
    scope: String,
    important: bool,
    family: StyleFamily,
}

/// Merges class groups, keeping the last rule per property family and scope.
///
/// Unrecognized classes are kept; exact duplicates collapse onto their last
/// occurrence. Survivors keep their written relative order.
pub fn merge_classes<'a, I>(groups: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let tokens: Vec<ClassToken<'a>> = groups
        .into_iter()
        .flat_map(str::split_whitespace)
        .map(ClassToken::parse)
        .collect();

    let mut seen = HashSet::new();
    let mut claimed = HashSet::new();
    let mut survivors = Vec::with_capacity(tokens.len());

    for token in tokens.iter().rev() {
        if !seen.insert(token.raw()) {
            continue;
        }

        if let Some(family) = token.family() {
            let scope = token.scope_key();
            let important = token.is_important();
            let key = ConflictKey {
                scope: scope.clone(),
                important,
                family,
            };
            if !claimed.insert(key) {
                continue;
            }
            for narrower in family.subsumes() {
                claimed.insert(ConflictKey {
                    scope: scope.clone(),
                    important,
                    family: narrower,
                });
            }
        }

        survivors.push(token.raw());
    }

    survivors.reverse();
    survivors.join(" ")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn later_rule_wins_within_family() {
        assert_eq!(merge_classes(["bg-white text-sm", "bg-black"]), "text-sm bg-black");
    }

    #[test]
    fn non_conflicting_rules_are_preserved_in_order() {
        assert_eq!(
            merge_classes(["inline-flex items-center", "px-4 py-2", "shadow-sm"]),
            "inline-flex items-center px-4 py-2 shadow-sm"
        );
    }

    #[test]
    fn exact_duplicates_collapse_onto_last_occurrence() {
        assert_eq!(merge_classes(["mw-card p-2 m-1", "mw-card"]), "p-2 m-1 mw-card");
    }

    #[test]
    fn modifiers_scope_conflicts() {
        assert_eq!(
            merge_classes(["bg-white hover:bg-mw-blue/10", "bg-mw-red"]),
            "hover:bg-mw-blue/10 bg-mw-red"
        );
        assert_eq!(
            merge_classes(["hover:focus:bg-white", "focus:hover:bg-black"]),
            "focus:hover:bg-black"
        );
    }

    #[test]
    fn arbitrary_numbers_keep_their_own_family() {
        assert_eq!(
            merge_classes(["stroke-[1.5]", "stroke-mw-blue"]),
            "stroke-[1.5] stroke-mw-blue"
        );
        assert_eq!(merge_classes(["font-[600]", "font-sans"]), "font-[600] font-sans");
        assert_eq!(merge_classes(["stroke-2", "stroke-[1.5]"]), "stroke-[1.5]");
    }

    #[test]
    fn legacy_flex_names_conflict_with_grow_and_shrink() {
        assert_eq!(merge_classes(["flex-grow", "grow-0"]), "grow-0");
        assert_eq!(merge_classes(["shrink-0", "flex-shrink"]), "flex-shrink");
        assert_eq!(merge_classes(["flex-1", "flex-grow-0"]), "flex-1 flex-grow-0");
    }

    #[test]
    fn important_rules_do_not_conflict_with_plain_rules() {
        assert_eq!(merge_classes(["!p-2", "p-4"]), "!p-2 p-4");
    }

    #[test]
    fn broad_rule_removes_earlier_narrow_rules() {
        assert_eq!(merge_classes(["px-3 py-2 pl-4", "p-6"]), "p-6");
        assert_eq!(merge_classes(["rounded-t-lg rounded-bl", "rounded-none"]), "rounded-none");
        assert_eq!(merge_classes(["text-sm leading-6", "text-lg"]), "text-lg");
    }

    #[test]
    fn narrow_rule_keeps_earlier_broad_rule() {
        assert_eq!(merge_classes(["px-3", "pl-10"]), "px-3 pl-10");
        assert_eq!(merge_classes(["p-6", "pt-4"]), "p-6 pt-4");
    }

    #[test]
    fn font_size_and_text_color_do_not_conflict() {
        assert_eq!(
            merge_classes(["text-mw-light-grey", "text-base"]),
            "text-mw-light-grey text-base"
        );
    }

    #[test]
    fn negative_values_share_family_with_positive() {
        assert_eq!(merge_classes(["-translate-y-1/2", "translate-y-0"]), "translate-y-0");
    }

    #[test]
    fn resolve_applies_override_last() {
        let resolved = resolve(
            "inline-flex rounded-full px-3",
            &["bg-mw-red/20 text-mw-dark-red"],
            Some("rounded-none"),
        );
        assert_eq!(
            resolved,
            "inline-flex px-3 bg-mw-red/20 text-mw-dark-red rounded-none"
        );
    }

    #[test]
    fn missing_or_blank_override_is_a_no_op() {
        let base = resolve("flex gap-2", &["text-sm"], None);
        assert_eq!(base, "flex gap-2 text-sm");
        assert_eq!(resolve("flex gap-2", &["text-sm"], Some("   ")), base);
    }

    #[test]
    fn class_list_conditional_groups() {
        let classes = ClassList::new("block px-3")
            .when(true, "pl-10")
            .when(false, "pr-10")
            .class_override(Some("mt-1"));
        assert_eq!(classes.groups(), &["block px-3", "pl-10", "mt-1"]);
        assert_eq!(classes.resolve(), "block px-3 pl-10 mt-1");
    }

    #[test]
    fn resolution_is_idempotent() {
        let groups = ["rounded-lg px-4 py-2", "bg-mw-blue text-white", "w-full justify-start"];
        let first = merge_classes(groups);
        let second = merge_classes(groups);
        assert_eq!(first, second);
        assert_eq!(merge_classes([first.as_str()]), first);
    }
}
