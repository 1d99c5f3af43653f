use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

const REQUIRED_COLOR_TOKENS: &[&str] = &["validation-error", "validation-warning", "validation-info"];

#[derive(Debug, Clone, Deserialize)]
struct ThemeConfig {
    schema_version: u32,
    radius: String,
    colors: BTreeMap<String, BTreeMap<String, String>>,
    #[serde(default)]
    font_families: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    font_sizes: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Serialize)]
struct ColorToken {
    name: String,
    value: String,
    channels: String,
}

#[derive(Debug, Clone, Serialize)]
struct FontFamilyToken {
    name: String,
    stack: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
struct FontSizeToken {
    name: String,
    size: String,
}

#[derive(Debug, Clone, Serialize)]
struct ThemeCatalog {
    radius: String,
    colors: Vec<ColorToken>,
    font_families: Vec<FontFamilyToken>,
    font_sizes: Vec<FontSizeToken>,
}

fn is_token_segment(raw: &str) -> bool {
    !raw.is_empty()
        && raw.as_bytes()[0].is_ascii_lowercase()
        && raw
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
        && !raw.ends_with('-')
}

fn is_size_segment(raw: &str) -> bool {
    !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_lowercase() || b.is_ascii_digit())
}

/// Space-separated `r g b` channels of a hex or `rgb()` literal. Alpha is dropped.
fn color_channels(raw: &str) -> Option<String> {
    if let Some(hex) = raw.strip_prefix('#') {
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let expanded: String = match hex.len() {
            3 | 4 => hex.chars().take(3).flat_map(|ch| [ch, ch]).collect(),
            6 | 8 => hex[..6].to_string(),
            _ => return None,
        };
        let channel = |idx: usize| u8::from_str_radix(&expanded[idx..idx + 2], 16).ok();
        return Some(format!("{} {} {}", channel(0)?, channel(2)?, channel(4)?));
    }

    let body = raw
        .strip_prefix("rgba(")
        .or_else(|| raw.strip_prefix("rgb("))?
        .strip_suffix(')')?;
    let body = body.split('/').next()?;
    let parts = body
        .split(|ch: char| ch == ',' || ch.is_whitespace())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>();
    if !matches!(parts.len(), 3 | 4) {
        return None;
    }
    let channels = parts[..3]
        .iter()
        .map(|part| part.parse::<u8>().ok().map(|value| value.to_string()))
        .collect::<Option<Vec<_>>>()?;
    Some(channels.join(" "))
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let path = crate_root.join("theme.toml");
    println!("cargo:rerun-if-changed={}", path.display());

    let raw = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    let config: ThemeConfig = toml::from_str(&raw)
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));
    if config.schema_version != 1 {
        panic!(
            "theme schema mismatch in {}: expected 1 found {}",
            path.display(),
            config.schema_version
        );
    }

    let mut colors = Vec::new();
    for (namespace, entries) in &config.colors {
        if !is_token_segment(namespace) {
            panic!("invalid color namespace `{namespace}` in {}", path.display());
        }
        for (name, value) in entries {
            if !is_token_segment(name) {
                panic!(
                    "invalid color name `{namespace}.{name}` in {}",
                    path.display()
                );
            }
            let channels = color_channels(value).unwrap_or_else(|| {
                panic!(
                    "color `{namespace}.{name}` in {} is not a hex/rgb literal: {value}",
                    path.display()
                )
            });
            colors.push(ColorToken {
                name: format!("{namespace}-{name}"),
                value: value.clone(),
                channels,
            });
        }
    }

    for required in REQUIRED_COLOR_TOKENS {
        if !colors.iter().any(|token| token.name == *required) {
            panic!("missing required color token `{required}` in {}", path.display());
        }
    }

    let font_families = config
        .font_families
        .into_iter()
        .map(|(name, stack)| {
            if stack.is_empty() {
                panic!("font family `{name}` in {} has an empty stack", path.display());
            }
            FontFamilyToken { name, stack }
        })
        .collect();

    let font_sizes = config
        .font_sizes
        .into_iter()
        .map(|(name, size)| {
            if !is_size_segment(&name) {
                panic!("invalid font size name `{name}` in {}", path.display());
            }
            FontSizeToken { name, size }
        })
        .collect();

    let catalog = ThemeCatalog {
        radius: config.radius,
        colors,
        font_families,
        font_sizes,
    };
    let json = serde_json::to_string_pretty(&catalog).expect("serialize theme token catalog");
    let generated = format!(
        "/// Build-time generated theme token catalog JSON.\n\
pub const THEME_TOKEN_CATALOG_JSON: &str = r##\"{}\"##;\n",
        json
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("theme_tokens_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
