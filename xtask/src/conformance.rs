use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Component, Path, PathBuf};

use serde::Deserialize;

const THEME_PATH: &str = "crates/mw_ui/theme.toml";
pub(crate) const TAILWIND_CONFIG_PATH: &str = "crates/site/tailwind.config.js";
const APP_SOURCE_DIRS: &[&str] = &["crates/apps"];
const PRIMITIVE_SOURCE_DIRS: &[&str] = &["crates/mw_ui/src"];
const COLOR_SCAN_DIRS: &[&str] = &["crates/apps", "crates/mw_ui/src"];
const RAW_CONTROL_TAGS: &[(&str, &str)] = &[
    ("<button", "Button"),
    ("<input", "Input"),
    ("<textarea", "Textarea"),
    ("<label", "Label"),
];
const COLOR_UTILITY_PREFIXES: &[&str] = &[
    "bg-",
    "text-",
    "border-",
    "ring-offset-",
    "ring-",
    "outline-",
    "fill-",
    "stroke-",
    "shadow-",
];
const THEME_NAMESPACES: &[&str] = &["mw-", "validation-"];

#[derive(Clone, Debug)]
struct Problem {
    check: String,
    path: String,
    message: String,
    line: Option<usize>,
}

impl Problem {
    fn new(
        check: &str,
        path: impl Into<String>,
        message: impl Into<String>,
        line: Option<usize>,
    ) -> Self {
        Self {
            check: check.to_string(),
            path: path.into(),
            message: message.into(),
            line,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ThemeConfig {
    colors: BTreeMap<String, BTreeMap<String, String>>,
}

pub(crate) fn run(root: &Path) -> Result<(), String> {
    let mut problems = Vec::new();
    let colors = match load_theme_colors(root) {
        Ok(colors) => Some(colors),
        Err(problem) => {
            problems.push(problem);
            None
        }
    };

    problems.extend(validate_raw_controls(root));
    problems.extend(validate_primitive_markup(root));
    if let Some(colors) = colors {
        problems.extend(validate_color_references(root, &colors));
    }
    problems.extend(validate_tailwind_config(root));

    fail_if_problems(problems)
}

fn load_theme_colors(root: &Path) -> Result<BTreeSet<String>, Problem> {
    let text = fs::read_to_string(root.join(THEME_PATH)).map_err(|err| {
        Problem::new(
            "theme",
            THEME_PATH,
            format!("failed to read theme config: {err}"),
            None,
        )
    })?;
    parse_theme_colors(&text).map_err(|err| {
        Problem::new(
            "theme",
            THEME_PATH,
            format!("invalid theme config: {err}"),
            None,
        )
    })
}

fn parse_theme_colors(text: &str) -> Result<BTreeSet<String>, toml::de::Error> {
    let config: ThemeConfig = toml::from_str(text)?;
    Ok(config
        .colors
        .into_iter()
        .flat_map(|(namespace, names)| {
            names
                .into_keys()
                .map(move |name| format!("{namespace}-{name}"))
        })
        .collect())
}

fn validate_raw_controls(root: &Path) -> Vec<Problem> {
    let mut problems = Vec::new();
    for_each_source_line(
        root,
        APP_SOURCE_DIRS,
        "ui-conformance",
        &mut problems,
        |rel_path, line_no, line, problems| {
            for (tag, primitive) in RAW_CONTROL_TAGS {
                if contains_tag(line, tag) {
                    problems.push(Problem::new(
                        "ui-conformance",
                        rel_path,
                        format!("raw `{tag}>` markup in app crate; use `mw_ui::{primitive}`"),
                        Some(line_no),
                    ));
                }
            }
        },
    );
    problems
}

/// Each native control is written once inside `mw_ui`, by the primitive that
/// owns it; composite components reuse that primitive.
fn validate_primitive_markup(root: &Path) -> Vec<Problem> {
    let mut problems = Vec::new();
    let mut sites = Vec::new();
    for_each_source_line(
        root,
        PRIMITIVE_SOURCE_DIRS,
        "primitive-markup",
        &mut problems,
        |rel_path, line_no, line, _| {
            for (tag, _) in RAW_CONTROL_TAGS {
                if contains_tag(line, tag) {
                    sites.push((*tag, rel_path.to_string(), line_no));
                }
            }
        },
    );
    problems.extend(duplicate_control_markup(&sites));
    problems
}

fn duplicate_control_markup(sites: &[(&str, String, usize)]) -> Vec<Problem> {
    let mut seen = BTreeSet::new();
    sites
        .iter()
        .filter(|(tag, _, _)| !seen.insert(*tag))
        .map(|(tag, rel_path, line_no)| {
            let primitive = RAW_CONTROL_TAGS
                .iter()
                .find(|(raw, _)| raw == tag)
                .map_or("the owning primitive", |(_, primitive)| *primitive);
            Problem::new(
                "primitive-markup",
                rel_path.as_str(),
                format!("second raw `{tag}>` in mw_ui; compose `{primitive}` instead"),
                Some(*line_no),
            )
        })
        .collect()
}

fn validate_color_references(root: &Path, colors: &BTreeSet<String>) -> Vec<Problem> {
    let mut problems = Vec::new();
    for_each_source_line(
        root,
        COLOR_SCAN_DIRS,
        "theme-colors",
        &mut problems,
        |rel_path, line_no, line, problems| {
            for name in theme_color_references(line) {
                if !colors.contains(name) {
                    problems.push(Problem::new(
                        "theme-colors",
                        rel_path,
                        format!("color `{name}` is not declared in {THEME_PATH}"),
                        Some(line_no),
                    ));
                }
            }
        },
    );
    problems
}

fn validate_tailwind_config(root: &Path) -> Vec<Problem> {
    let expected = mw_ui::theme::tailwind_config_js();
    match fs::read_to_string(root.join(TAILWIND_CONFIG_PATH)) {
        Ok(committed) if committed == expected => Vec::new(),
        Ok(_) => vec![Problem::new(
            "tailwind-config",
            TAILWIND_CONFIG_PATH,
            "out of date with theme.toml; run `cargo xtask theme-config`",
            None,
        )],
        Err(err) => vec![Problem::new(
            "tailwind-config",
            TAILWIND_CONFIG_PATH,
            format!("failed to read generated config: {err}"),
            None,
        )],
    }
}

/// Writes the site Tailwind config generated from the theme catalog.
pub(crate) fn write_tailwind_config(root: &Path) -> Result<(), String> {
    let path = root.join(TAILWIND_CONFIG_PATH);
    let generated = mw_ui::theme::tailwind_config_js();
    if fs::read_to_string(&path).is_ok_and(|current| current == generated) {
        println!("{TAILWIND_CONFIG_PATH} is up to date");
        return Ok(());
    }
    fs::write(&path, generated)
        .map_err(|err| format!("failed to write {}: {err}", path.display()))?;
    println!("wrote {TAILWIND_CONFIG_PATH}");
    Ok(())
}

fn for_each_source_line<F>(
    root: &Path,
    dirs: &[&str],
    check: &str,
    problems: &mut Vec<Problem>,
    mut visit: F,
) where
    F: FnMut(&str, usize, &str, &mut Vec<Problem>),
{
    for rel_dir in dirs {
        let mut files = match collect_files_with_suffix(&root.join(rel_dir), ".rs") {
            Ok(files) => files,
            Err(err) => {
                problems.push(Problem::new(check, *rel_dir, err, None));
                continue;
            }
        };
        files.sort();

        for path in files {
            let rel_path = rel_posix(root, &path);
            let text = match fs::read_to_string(&path) {
                Ok(text) => text,
                Err(err) => {
                    problems.push(Problem::new(
                        check,
                        rel_path,
                        format!("failed to read file: {err}"),
                        None,
                    ));
                    continue;
                }
            };

            for (idx, line) in text.lines().enumerate() {
                if line.trim_start().starts_with("//") {
                    continue;
                }
                visit(&rel_path, idx + 1, line, problems);
            }
        }
    }
}

fn contains_tag(line: &str, tag: &str) -> bool {
    line.match_indices(tag).any(|(idx, _)| {
        line[idx + tag.len()..]
            .chars()
            .next()
            .map_or(true, |next| next.is_whitespace() || next == '>' || next == '/')
    })
}

/// Theme color names referenced by utility classes on one source line.
fn theme_color_references(line: &str) -> Vec<&str> {
    line.split(|ch: char| ch.is_whitespace() || matches!(ch, '"' | '\'' | '`' | ',' | '(' | ')'))
        .filter_map(|word| {
            let utility = word.rsplit(':').next().unwrap_or(word);
            let utility = utility.trim_start_matches(['!', '-']);
            let value = COLOR_UTILITY_PREFIXES
                .iter()
                .find_map(|prefix| utility.strip_prefix(prefix))?;
            let name = value.split('/').next().unwrap_or(value);
            THEME_NAMESPACES
                .iter()
                .any(|namespace| name.starts_with(namespace))
                .then_some(name)
        })
        .collect()
}

fn collect_files_with_suffix(root: &Path, suffix: &str) -> Result<Vec<PathBuf>, String> {
    let mut out = Vec::new();
    if !root.exists() {
        return Ok(out);
    }
    collect_files_with_suffix_inner(root, suffix, &mut out)?;
    Ok(out)
}

fn collect_files_with_suffix_inner(
    root: &Path,
    suffix: &str,
    out: &mut Vec<PathBuf>,
) -> Result<(), String> {
    let mut entries: Vec<_> = fs::read_dir(root)
        .map_err(|err| format!("failed to read {}: {err}", root.display()))?
        .collect::<Result<Vec<_>, _>>()
        .map_err(|err| format!("failed to read {}: {err}", root.display()))?;
    entries.sort_by_key(|e| e.path());

    for entry in entries {
        let path = entry.path();
        if path.is_dir() {
            collect_files_with_suffix_inner(&path, suffix, out)?;
        } else if path.is_file() && path.to_string_lossy().ends_with(suffix) {
            out.push(path);
        }
    }

    Ok(())
}

fn fail_if_problems(mut problems: Vec<Problem>) -> Result<(), String> {
    if problems.is_empty() {
        println!("OK");
        return Ok(());
    }
    problems.sort_by(|a, b| {
        (&a.check, &a.path, a.line.unwrap_or(0), &a.message).cmp(&(
            &b.check,
            &b.path,
            b.line.unwrap_or(0),
            &b.message,
        ))
    });
    print_problems(&problems);
    println!("\nFAILED: {} issue(s)", problems.len());
    Err("ui conformance failed".to_string())
}

fn print_problems(problems: &[Problem]) {
    for p in problems {
        let loc = match p.line {
            Some(line) => format!("{}:{line}", p.path),
            None => p.path.clone(),
        };
        println!("[{}] {} - {}", p.check, loc, p.message);
    }
}

fn rel_posix(root: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    rel.components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            Component::CurDir => Some(".".to_string()),
            Component::ParentDir => Some("..".to_string()),
            Component::RootDir | Component::Prefix(_) => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn workspace_root() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR"))
            .parent()
            .expect("workspace root")
            .to_path_buf()
    }

    #[test]
    fn raw_tags_are_detected_without_matching_components() {
        assert!(contains_tag("<button type=\"button\">", "<button"));
        assert!(contains_tag("            <input", "<input"));
        assert!(contains_tag("<label/>", "<label"));
        assert!(!contains_tag("<Button variant=x>", "<button"));
        assert!(!contains_tag("<input-group>", "<input"));
    }

    #[test]
    fn color_references_strip_modifiers_and_opacity() {
        assert_eq!(
            theme_color_references(
                "\"bg-white hover:bg-mw-blue/10 focus-visible:ring-mw-blue text-validation-error\""
            ),
            vec!["mw-blue", "mw-blue", "validation-error"]
        );
        assert_eq!(
            theme_color_references("class=\"text-sm text-[#999] mw-card\""),
            Vec::<&str>::new()
        );
    }

    #[test]
    fn theme_colors_are_namespaced() {
        let theme = concat!(
            "schema_version = 1\n",
            "radius = \"0.5rem\"\n",
            "[colors.mw]\n",
            "blue = \"#00A8B5\"\n",
            "[colors.validation]\n",
            "error = \"#f22000\"\n",
        );
        let colors = parse_theme_colors(theme).expect("theme");
        assert!(colors.contains("mw-blue"));
        assert!(colors.contains("validation-error"));
        assert!(!colors.contains("blue"));
    }

    #[test]
    fn second_raw_control_in_primitives_is_flagged() {
        let sites = vec![
            ("<label", "crates/mw_ui/src/primitives/controls.rs".to_string(), 300),
            ("<input", "crates/mw_ui/src/primitives/controls.rs".to_string(), 190),
            ("<label", "crates/mw_ui/src/primitives/controls.rs".to_string(), 411),
        ];
        let problems = duplicate_control_markup(&sites);
        assert_eq!(problems.len(), 1);
        assert_eq!(problems[0].line, Some(411));
        assert!(problems[0].message.contains("compose `Label`"));
    }

    #[test]
    fn bundled_primitives_write_each_control_once() {
        let problems = validate_primitive_markup(&workspace_root());
        assert!(
            problems.is_empty(),
            "{:?}",
            problems.iter().map(|p| &p.message).collect::<Vec<_>>()
        );
    }

    #[test]
    fn bundled_tailwind_config_is_current() {
        assert!(validate_tailwind_config(&workspace_root()).is_empty());
    }

    #[test]
    fn bundled_theme_parses() {
        let colors = load_theme_colors(&workspace_root()).expect("bundled theme");
        assert!(colors.contains("mw-panel-grey"));
    }
}
