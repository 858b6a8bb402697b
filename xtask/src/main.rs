//! Workspace tasks: `cargo xtask web` and `cargo xtask markup <file.html>`.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use folio::page::markup::{CLASSES, IDS, OPTIONS_ID};

const WASM_TARGET: &str = "wasm32-unknown-unknown";

#[derive(Parser)]
#[command(name = "xtask", about = "Build and audit tasks for folio")]
struct Cli {
    #[command(subcommand)]
    command: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Build the browser bundle with wasm-bindgen.
    Web {
        /// Directory for the generated JS and wasm.
        #[arg(long, default_value = "pkg")]
        out_dir: PathBuf,
        /// Build without optimizations.
        #[arg(long)]
        debug: bool,
    },
    /// Report which element ids and hook classes a page provides.
    Markup {
        /// HTML file to audit.
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    match Cli::parse().command {
        Task::Web { out_dir, debug } => build_web(&out_dir, debug),
        Task::Markup { file } => audit_markup(&file),
    }
}

fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .map_or_else(|| PathBuf::from("."), Path::to_path_buf)
}

fn run(command: &mut Command) -> Result<()> {
    let status = command
        .status()
        .with_context(|| format!("failed to spawn {command:?}"))?;
    if !status.success() {
        bail!("{command:?} exited with {status}");
    }
    Ok(())
}

fn build_web(out_dir: &Path, debug: bool) -> Result<()> {
    let root = workspace_root();
    let cargo = std::env::var("CARGO").unwrap_or_else(|_| "cargo".to_owned());

    let mut build = Command::new(cargo);
    let _ = build
        .current_dir(&root)
        .args(["rustc", "--lib", "--package", "folio", "--features", "web"])
        .args(["--target", WASM_TARGET, "--crate-type", "cdylib"]);
    if !debug {
        let _ = build.arg("--release");
    }
    run(&mut build)?;

    let profile = if debug { "debug" } else { "release" };
    let wasm = root
        .join("target")
        .join(WASM_TARGET)
        .join(profile)
        .join("folio.wasm");
    run(Command::new("wasm-bindgen")
        .arg(&wasm)
        .args(["--target", "web", "--out-dir"])
        .arg(root.join(out_dir)))
    .context("is wasm-bindgen-cli installed?")?;

    println!("bundle written to {}", root.join(out_dir).display());
    Ok(())
}

fn audit_markup(file: &Path) -> Result<()> {
    let html = std::fs::read_to_string(file)
        .with_context(|| format!("reading {}", file.display()))?;

    let ids: BTreeSet<&str> = attribute_values(&html, "id").collect();
    let classes: BTreeSet<&str> = attribute_values(&html, "class")
        .flat_map(str::split_whitespace)
        .collect();

    println!("ids:");
    for id in IDS {
        report(id, ids.contains(id), id == OPTIONS_ID);
    }
    println!("classes:");
    for class in CLASSES {
        report(class, classes.contains(class), false);
    }
    Ok(())
}

fn report(name: &str, present: bool, optional: bool) {
    let mark = match (present, optional) {
        (true, _) => "ok",
        (false, true) => "--",
        (false, false) => "missing",
    };
    println!("  {mark:>7}  {name}");
}

/// Values of every `name="..."` (or single-quoted) attribute in `html`.
fn attribute_values<'a>(html: &'a str, name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
    html.match_indices(name).filter_map(move |(at, _)| {
        let before = html[..at].chars().next_back()?;
        if !before.is_whitespace() {
            return None;
        }
        let rest = html[at + name.len()..].trim_start();
        let rest = rest.strip_prefix('=')?.trim_start();
        let quote = rest.chars().next().filter(|c| *c == '"' || *c == '\'')?;
        let body = &rest[1..];
        body.find(quote).map(|end| &body[..end])
    })
}
