//! Workspace maintenance commands (`cargo xtask`).
//!
//! `ui-conformance` is a source-level check that app crates compose `mw_ui`
//! primitives, reference theme colors that exist, and ship a Tailwind config
//! in sync with the theme. `theme-config` regenerates that config; the site's
//! Trunk pre-build hook runs it.

use std::env;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

mod conformance;

fn main() -> ExitCode {
    let root = workspace_root();
    let mut args = env::args().skip(1);

    let Some(cmd) = args.next() else {
        print_usage();
        return ExitCode::from(2);
    };

    let rest: Vec<String> = args.collect();

    let result = match cmd.as_str() {
        "ui-conformance" => {
            if rest.is_empty() {
                conformance::run(&root)
            } else {
                Err("`ui-conformance` does not accept extra arguments".to_string())
            }
        }
        "theme-config" => {
            if rest.is_empty() {
                conformance::write_tailwind_config(&root)
            } else {
                Err("`theme-config` does not accept extra arguments".to_string())
            }
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => Err(format!("unknown xtask command: {other}")),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(1)
        }
    }
}

fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("xtask lives under workspace root")
        .to_path_buf()
}

fn print_usage() {
    eprintln!(
        "Usage: cargo xtask <command>\n\
         \n\
         Commands:\n\
           ui-conformance      Check app markup uses mw_ui primitives and theme colors exist\n\
           theme-config        Regenerate crates/site/tailwind.config.js from the theme\n"
    );
}
