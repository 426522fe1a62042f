//! CLI entry point for hostguard.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, and
//! exit codes. All business logic lives in the `hostguard-app` crate.
//!
//! Exit codes: 0 = compliant, 2 = compliance failure, 1 = configuration or
//! runtime error.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use hostguard_app::{
    run_check, runtime_error_report, serialize_report, to_renderable, verdict_exit_code,
    CheckInput,
};
use hostguard_render::{render_markdown, render_text};
use hostguard_types::HostguardReport;

#[derive(Parser, Debug)]
#[command(
    name = "hostguard",
    version,
    about = "Security baseline compliance checks for host configuration facts"
)]
struct Cli {
    /// Path to the policy document.
    #[arg(long, default_value = "policies.json")]
    policy: Utf8PathBuf,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate observed facts against the policy and print a report.
    Check {
        /// Path to the observed-facts document.
        #[arg(long, default_value = "facts.json")]
        facts: Utf8PathBuf,

        /// Report format for stdout (text|markdown).
        #[arg(long, default_value = "text")]
        format: String,

        /// Also write the JSON report envelope to this path.
        #[arg(long)]
        report_out: Option<Utf8PathBuf>,
    },

    /// Write starter policy and facts templates into a directory.
    Init {
        /// Target directory for `policies.json` and `facts.json`.
        #[arg(long, default_value = ".")]
        dir: Utf8PathBuf,

        /// Overwrite existing files.
        #[arg(long)]
        force: bool,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    Text,
    Markdown,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.cmd {
        Commands::Check {
            ref facts,
            ref format,
            ref report_out,
        } => cmd_check(&cli.policy, facts, format, report_out.as_deref()),
        Commands::Init { ref dir, force } => cmd_init(dir, force),
    }
}

fn cmd_check(
    policy_path: &Utf8Path,
    facts_path: &Utf8Path,
    format: &str,
    report_out: Option<&Utf8Path>,
) -> anyhow::Result<()> {
    let format = parse_format(format)?;

    let result = (|| -> anyhow::Result<i32> {
        let policy_text = std::fs::read_to_string(policy_path)
            .with_context(|| format!("read policy: {}", policy_path))?;
        let facts_text = std::fs::read_to_string(facts_path)
            .with_context(|| format!("read facts: {}", facts_path))?;

        let output = run_check(CheckInput {
            policy_text: &policy_text,
            facts_text: &facts_text,
        })?;

        if let Some(path) = report_out {
            write_report_file(path, &output.report).context("write report json")?;
        }

        let renderable = to_renderable(&output.baseline);
        let rendered = match format {
            Format::Text => render_text(&renderable),
            Format::Markdown => render_markdown(&renderable),
        };
        print!("{rendered}");

        Ok(verdict_exit_code(output.report.verdict))
    })();

    match result {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
            Ok(())
        }
        Err(err) => {
            if let Some(path) = report_out {
                let report = runtime_error_report(&format!("{err:#}"));
                let _ = write_report_file(path, &report);
            }
            eprintln!("hostguard error: {err:#}");
            std::process::exit(1);
        }
    }
}

fn cmd_init(dir: &Utf8Path, force: bool) -> anyhow::Result<()> {
    std::fs::create_dir_all(dir).with_context(|| format!("create directory: {}", dir))?;

    let policy_path = dir.join("policies.json");
    let facts_path = dir.join("facts.json");

    write_template(&policy_path, hostguard_policy::starter_policy_json(), force)?;
    write_template(&facts_path, hostguard_facts::starter_facts_json(), force)?;

    println!("wrote {}", policy_path);
    println!("wrote {}", facts_path);
    Ok(())
}

fn write_template(path: &Utf8Path, contents: &str, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        anyhow::bail!("refusing to overwrite {} (use --force)", path);
    }
    std::fs::write(path, contents).with_context(|| format!("write template: {}", path))
}

fn parse_format(v: &str) -> anyhow::Result<Format> {
    match v {
        "text" => Ok(Format::Text),
        "markdown" | "md" => Ok(Format::Markdown),
        other => anyhow::bail!("unknown format: {other} (expected text or markdown)"),
    }
}

fn write_report_file(path: &Utf8Path, report: &HostguardReport) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {}", parent))?;
    }
    let data = serialize_report(report).context("serialize report")?;
    std::fs::write(path, data).with_context(|| format!("write report: {}", path))?;
    Ok(())
}
