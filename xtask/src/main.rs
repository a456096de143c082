// Copyright (C) 2024-2025 Fred Clausen and the ratatui project contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! # xtask - milkrun workspace automation
//!
//! `cargo xtask ci` runs the same gate as CI: formatting, clippy, docs,
//! the test suite, and a smoke run of the `milkrun` binary against a
//! pinned clock so the cutoff rules are checked end to end.

#![deny(
    clippy::pedantic,
    //clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

use std::{fmt::Debug, io, process::Output, vec};

use cargo_metadata::MetadataCommand;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::{
    Result,
    eyre::{Context, ensure},
};
use duct::cmd;
use tracing::level_filters::LevelFilter;
use tracing_log::AsTrace;

/// Local time every smoke case is evaluated at: Thursday 2026-06-04, 09:30.
const SMOKE_NOW: &str = "2026-06-04T09:30:00";

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.log_level())
        .without_time()
        .init();

    match args.run() {
        Ok(()) => (),
        Err(err) => {
            tracing::error!("{err}");
            std::process::exit(1);
        }
    }
    Ok(())
}

#[derive(Debug, Parser)]
#[command(bin_name = "cargo xtask", styles = clap_cargo::style::CLAP_STYLING)]
struct Args {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

impl Args {
    fn run(self) -> Result<()> {
        self.command.run()
    }

    fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }
}

#[derive(Clone, Debug, Subcommand)]
enum Command {
    /// Run CI checks (lint, build, test, smoke)
    CI,

    /// Build the workspace
    #[command(visible_alias = "b")]
    Build,

    /// Generate code coverage report
    #[command(visible_alias = "cov")]
    Coverage,

    /// Lint formatting, clippy, and docs
    #[command(visible_alias = "l")]
    Lint,

    /// Run clippy on the workspace
    #[command(visible_alias = "cl")]
    LintClippy,

    /// Check documentation for errors and warnings
    #[command(visible_alias = "d")]
    LintDocs,

    /// Check for formatting issues
    #[command(visible_alias = "lf")]
    LintFormatting,

    /// Fix formatting issues
    #[command(visible_alias = "fmt")]
    FixFormatting,

    /// Run the `milkrun` binary against a pinned clock
    #[command(visible_alias = "s")]
    Smoke,

    /// Run lib and doc tests
    #[command(visible_alias = "t")]
    Test,
}

impl Command {
    fn run(self) -> Result<()> {
        match self {
            Self::CI => ci(),
            Self::Build => build(),
            Self::Coverage => coverage(),
            Self::Lint => lint(),
            Self::LintClippy => lint_clippy(),
            Self::LintDocs => lint_docs(),
            Self::LintFormatting => lint_format(),
            Self::FixFormatting => fix_format(),
            Self::Smoke => smoke(),
            Self::Test => test(),
        }
    }
}

fn ci() -> Result<()> {
    lint()?;
    build()?;
    test()?;
    smoke()?;
    Ok(())
}

fn build() -> Result<()> {
    run_cargo(vec!["build", "--all-targets", "--all-features"])
}

fn coverage() -> Result<()> {
    run_cargo(vec![
        "llvm-cov",
        "--workspace",
        "--lcov",
        "--output-path",
        "target/lcov.info",
    ])
}

fn lint() -> Result<()> {
    lint_format()?;
    lint_clippy()?;
    lint_docs()?;
    Ok(())
}

fn lint_clippy() -> Result<()> {
    run_cargo(vec![
        "clippy",
        "--all-targets",
        "--all-features",
        "--",
        "-D",
        "warnings",
    ])
}

/// Build docs for every default member with warnings denied
fn lint_docs() -> Result<()> {
    let meta = MetadataCommand::new()
        .exec()
        .wrap_err("failed to get cargo metadata")?;

    for package in meta.workspace_default_packages() {
        cmd("cargo", ["doc", "--no-deps", "--package", &package.name])
        .env("RUSTDOCFLAGS", "-D warnings")
        .run_with_trace()?;
    }

    Ok(())
}

fn lint_format() -> Result<()> {
    run_cargo(vec!["fmt", "--all", "--check"])
}

fn fix_format() -> Result<()> {
    run_cargo(vec!["fmt", "--all"])
}

fn test() -> Result<()> {
    run_cargo(vec!["test", "--workspace", "--all-targets"])?;
    run_cargo(vec!["test", "--workspace", "--doc"])
}

/// One invocation of the `milkrun` binary and a fragment its stdout must contain.
struct SmokeCase {
    args: &'static [&'static str],
    expect: &'static str,
}

const SMOKE_CASES: &[SmokeCase] = &[
    SmokeCase {
        args: &["next-delivery", "--cutoff", "10:00:00"],
        expect: "\"isoDate\": \"2026-06-05\"",
    },
    SmokeCase {
        args: &["next-delivery", "--cutoff", "09:30:00"],
        expect: "\"isoDate\": \"2026-06-06\"",
    },
    SmokeCase {
        args: &["next-delivery"],
        expect: "\"deliveryDate\": \"Not specified\"",
    },
    SmokeCase {
        args: &[
            "editable",
            "--cutoff",
            "10:00:00",
            "--delivery-date",
            "Friday, June 5",
        ],
        expect: "\"editable\": true",
    },
    SmokeCase {
        args: &[
            "editable",
            "--status",
            "delivered",
            "--delivery-date",
            "2026-06-20",
        ],
        expect: "\"editable\": false",
    },
    SmokeCase {
        args: &["pause", "--from", "2026-06-05", "--to", "2026-06-12"],
        expect: "\"valid\": true",
    },
];

/// Run each smoke case through `cargo run` with the clock pinned to [`SMOKE_NOW`]
fn smoke() -> Result<()> {
    for case in SMOKE_CASES {
        let mut args: Vec<&str> = vec![
            "run",
            "--quiet",
            "--package",
            "milkrun-cli",
            "--",
            "--now",
            SMOKE_NOW,
        ];
        args.extend_from_slice(case.args);

        let expression: duct::Expression = cmd("cargo", args).env("RUST_LOG", "warn");
        tracing::info!("running command: {:?}", expression);
        let stdout: String = expression
            .read()
            .wrap_err_with(|| format!("milkrun {} failed", case.args.join(" ")))?;
        ensure!(
            stdout.contains(case.expect),
            "milkrun {} printed {stdout}, expected {}",
            case.args.join(" "),
            case.expect
        );
    }
    tracing::info!("{} smoke cases passed", SMOKE_CASES.len());
    Ok(())
}

/// Run a cargo subcommand with the default toolchain
fn run_cargo(args: Vec<&str>) -> Result<()> {
    cmd("cargo", args).run_with_trace()?;
    Ok(())
}

/// An extension trait for `duct::Expression` that logs the command being run
/// before running it.
trait ExpressionExt {
    /// Run the command and log the command being run
    fn run_with_trace(&self) -> io::Result<Output>;
}

impl ExpressionExt for duct::Expression {
    fn run_with_trace(&self) -> io::Result<Output> {
        tracing::info!("running command: {:?}", self);
        self.run().inspect_err(|_| {
            // The command that was run may have scrolled off the screen, so repeat it here
            tracing::error!("failed to run command: {:?}", self);
        })
    }
}
