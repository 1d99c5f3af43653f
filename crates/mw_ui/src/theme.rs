//! Brand theme tokens generated from `theme.toml` at build time.
//!
//! Style tables reference colors by token name (`bg-mw-blue/15` uses
//! `mw-blue`). [`ThemeStyle`] publishes every token as a `:root` custom
//! property, and [`tailwind_config_js`] maps the token-backed utilities
//! (`bg-mw-*`, `text-validation-*`, `font-heading`, `rounded-lg`, the
//! `text-<size>` scale) onto those properties. A value edited in `theme.toml`
//! therefore restyles every component without regenerating utility CSS.

use std::sync::OnceLock;

use leptos::*;
use serde::Deserialize;

include!(concat!(env!("OUT_DIR"), "/theme_tokens_generated.rs"));

/// A named color token (`mw-blue` → `#00A8B5`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ColorToken {
    /// `<namespace>-<name>` token name.
    pub name: String,
    /// CSS color literal.
    pub value: String,
    /// Space-separated `r g b` channels, for alpha-modified utilities.
    pub channels: String,
}

/// A named font-family stack.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FontFamilyToken {
    /// Family token name (`heading`).
    pub name: String,
    /// Ordered font stack.
    pub stack: Vec<String>,
}

/// A named font size (`sm` → `0.875rem`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FontSizeToken {
    /// Size step used by `text-<name>`.
    pub name: String,
    /// CSS length.
    pub size: String,
}

/// Parsed theme token catalog.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ThemeTokens {
    /// Base corner radius.
    pub radius: String,
    /// Color tokens sorted by name.
    pub colors: Vec<ColorToken>,
    /// Font-family tokens sorted by name.
    pub font_families: Vec<FontFamilyToken>,
    /// Font-size scale sorted by name.
    pub font_sizes: Vec<FontSizeToken>,
}

impl ThemeTokens {
    /// Looks up a color token by `<namespace>-<name>`.
    pub fn color(&self, name: &str) -> Option<&str> {
        self.colors
            .iter()
            .find(|token| token.name == name)
            .map(|token| token.value.as_str())
    }

    /// Looks up a font stack by family name.
    pub fn font_family(&self, name: &str) -> Option<&[String]> {
        self.font_families
            .iter()
            .find(|token| token.name == name)
            .map(|token| token.stack.as_slice())
    }

    /// Renders the catalog as a `:root` block of CSS custom properties.
    pub fn css_variables(&self) -> String {
        let mut lines = vec![":root {".to_string(), format!("  --radius: {};", self.radius)];
        for token in &self.colors {
            lines.push(format!("  --color-{}: {};", token.name, token.value));
            lines.push(format!("  --color-{}-rgb: {};", token.name, token.channels));
        }
        for family in &self.font_families {
            let stack = family
                .stack
                .iter()
                .map(|font| {
                    if font.contains(' ') {
                        format!("\"{font}\"")
                    } else {
                        font.clone()
                    }
                })
                .collect::<Vec<_>>()
                .join(", ");
            lines.push(format!("  --font-{}: {};", family.name, stack));
        }
        for size in &self.font_sizes {
            lines.push(format!("  --font-size-{}: {};", size.name, size.size));
        }
        lines.push("}".to_string());
        lines.join("\n")
    }

    /// Renders the Tailwind config that backs token utilities with the
    /// `:root` properties from [`ThemeTokens::css_variables`].
    pub fn tailwind_config_js(&self) -> String {
        let mut out = String::from(TAILWIND_CONFIG_HEAD);
        out.push_str("      colors: {\n");
        for token in &self.colors {
            out.push_str(&format!(
                "        '{}': 'rgb(var(--color-{}-rgb) / <alpha-value>)',\n",
                token.name, token.name
            ));
        }
        out.push_str("      },\n      fontFamily: {\n");
        for family in &self.font_families {
            out.push_str(&format!(
                "        '{}': 'var(--font-{})',\n",
                family.name, family.name
            ));
        }
        out.push_str("      },\n      fontSize: {\n");
        for size in &self.font_sizes {
            out.push_str(&format!(
                "        '{}': 'var(--font-size-{})',\n",
                size.name, size.name
            ));
        }
        out.push_str("      },\n");
        out.push_str(TAILWIND_CONFIG_TAIL);
        out
    }
}

const TAILWIND_CONFIG_HEAD: &str = "\
// Generated from crates/mw_ui/theme.toml by `cargo xtask theme-config`. Do not edit.
/** @type {import('tailwindcss').Config} */
module.exports = {
  content: ['./index.html', './src/**/*.rs', '../mw_ui/src/**/*.rs', '../apps/*/src/**/*.rs'],
  theme: {
    extend: {
";

const TAILWIND_CONFIG_TAIL: &str = "      borderRadius: {
        lg: 'var(--radius)',
        md: 'calc(var(--radius) - 2px)',
        sm: 'calc(var(--radius) - 4px)',
      },
    },
  },
};
";

/// Returns the generated theme catalog JSON payload.
pub fn theme_token_catalog_json() -> &'static str {
    THEME_TOKEN_CATALOG_JSON
}

/// Returns the parsed theme catalog.
pub fn tokens() -> &'static ThemeTokens {
    static TOKENS: OnceLock<ThemeTokens> = OnceLock::new();
    TOKENS.get_or_init(|| {
        serde_json::from_str(THEME_TOKEN_CATALOG_JSON)
            .expect("generated theme token catalog should parse")
    })
}

/// Looks up a color token value in the generated catalog.
pub fn color(name: &str) -> Option<&'static str> {
    tokens().color(name)
}

/// Component-layer rules for classes that are not utilities.
const COMPONENT_CSS: &str = "\
.mw-card {
  background-color: var(--color-mw-white);
  border: 1px solid rgb(var(--color-mw-light-grey-rgb) / 0.4);
  border-radius: var(--radius);
  box-shadow: 0 1px 2px rgb(var(--color-mw-black-rgb) / 0.06);
}";

/// Tailwind config generated from the bundled catalog.
pub fn tailwind_config_js() -> String {
    tokens().tailwind_config_js()
}

/// Full stylesheet emitted by [`ThemeStyle`].
pub fn theme_stylesheet() -> String {
    format!("{}\n{COMPONENT_CSS}", tokens().css_variables())
}

#[component]
/// Publishes the theme tokens as `:root` CSS custom properties, plus the
/// `.mw-card` surface rule.
pub fn ThemeStyle() -> impl IntoView {
    view! {
        <style data-ui-kind="theme-tokens">{theme_stylesheet()}</style>
    }
}
