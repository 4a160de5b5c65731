use camino::{Utf8Path, Utf8PathBuf};
use miette::Diagnostic;
use rayon::prelude::*;
use std::fs;
use svgicon::host::base_name_of;

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: cargo xtask <command>");
        eprintln!("Commands:");
        eprintln!("  bless    Regenerate the .tsx/.err expectations in tests/fixtures");
        eprintln!("  check    Report fixtures whose expectations are stale");
        std::process::exit(1);
    }

    let fixtures_dir = Utf8Path::new(env!("CARGO_MANIFEST_DIR")).join("../tests/fixtures");
    let outcome = match args[1].as_str() {
        "bless" => run(&fixtures_dir, true),
        "check" => run(&fixtures_dir, false),
        _ => {
            eprintln!("Unknown command: {}", args[1]);
            std::process::exit(1);
        }
    };

    match outcome {
        Ok(0) => {}
        Ok(stale) => {
            eprintln!("{stale} fixture(s) out of date");
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

/// What a fixture is expected to produce.
enum Expectation {
    /// Generated source, stored as `.tsx`
    Source(String),
    /// Diagnostic code, stored as `.err`
    Rejected(String),
}

impl Expectation {
    fn of(path: &Utf8Path) -> std::io::Result<Self> {
        let raw = fs::read_to_string(path)?;
        Ok(match svgicon::convert(&raw, base_name_of(path.as_str())) {
            Ok(conversion) => Expectation::Source(conversion.source),
            Err(err) => Expectation::Rejected(format!(
                "{}\n",
                err.code().map(|c| c.to_string()).unwrap_or_default()
            )),
        })
    }

    fn file(&self, path: &Utf8Path) -> (Utf8PathBuf, &str) {
        match self {
            Expectation::Source(source) => (path.with_extension("tsx"), source),
            Expectation::Rejected(code) => (path.with_extension("err"), code),
        }
    }

    /// The expectation file this fixture must not have.
    fn other_file(&self, path: &Utf8Path) -> Utf8PathBuf {
        match self {
            Expectation::Source(_) => path.with_extension("err"),
            Expectation::Rejected(_) => path.with_extension("tsx"),
        }
    }
}

/// Compare (and with `write`, rewrite) every fixture's expectation.
/// Returns how many were stale.
fn run(dir: &Utf8Path, write: bool) -> std::io::Result<usize> {
    let mut fixtures: Vec<Utf8PathBuf> = dir
        .read_dir_utf8()?
        .filter_map(|e| e.ok())
        .map(|e| e.into_path())
        .filter(|p| p.extension() == Some("svg"))
        .collect();
    fixtures.sort();

    let results: Vec<std::io::Result<bool>> = fixtures
        .par_iter()
        .map(|path| -> std::io::Result<bool> {
            let expectation = Expectation::of(path)?;
            let (target, contents) = expectation.file(path);
            let stale_other = expectation.other_file(path);

            let current = fs::read_to_string(&target).ok();
            let stale = current.as_deref() != Some(contents) || stale_other.exists();
            if stale {
                eprintln!("{} {}", if write { "blessing" } else { "stale" }, target);
                if write {
                    fs::write(&target, contents)?;
                    if stale_other.exists() {
                        fs::remove_file(&stale_other)?;
                    }
                }
            }
            Ok(stale)
        })
        .collect();

    let mut stale = 0;
    for result in results {
        if result? {
            stale += 1;
        }
    }
    eprintln!("{} fixtures, {} {}", fixtures.len(), stale, if write { "blessed" } else { "stale" });
    Ok(if write { 0 } else { stale })
}
