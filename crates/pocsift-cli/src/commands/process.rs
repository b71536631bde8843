use crate::commands::{print_json, Context};
use crate::error::invalid_input;
use anyhow::{Context as _, Result};
use clap::Args;
use pocsift_core::{run_pipeline, RunReport, SortPolicy};
use pocsift_io::{read_contact_rows, write_contacts};
use serde::Serialize;
use std::path::PathBuf;
use tracing::{debug, warn};

#[derive(Debug, Args)]
pub struct ProcessArgs {
    #[arg(long, help = "Opportunity table to read (overrides input_path)")]
    pub input: Option<PathBuf>,
    #[arg(long, help = "Directory table to write (overrides output_path)")]
    pub output: Option<PathBuf>,
    #[arg(
        long,
        help = "Ordering: name, city, department or opportunity; anything else keeps input order"
    )]
    pub sort_by: Option<String>,
    #[arg(long, help = "Aggregate and report without writing the output table")]
    pub dry_run: bool,
}

#[derive(Debug, Serialize)]
struct ProcessReport {
    #[serde(flatten)]
    run: RunReport,
    sort_by: SortPolicy,
    input_path: String,
    output_path: String,
    dry_run: bool,
}

pub fn process(ctx: &Context<'_>, args: ProcessArgs) -> Result<()> {
    let input_path =
        flag_path("--input", args.input)?.unwrap_or_else(|| ctx.config.input_path.clone());
    let output_path =
        flag_path("--output", args.output)?.unwrap_or_else(|| ctx.config.output_path.clone());
    let label = args.sort_by.unwrap_or_else(|| ctx.config.sort_by.clone());
    let policy = resolve_sort_policy(&label);

    let rows = read_contact_rows(&input_path, &ctx.config.missing_values)
        .with_context(|| format!("read input table {}", input_path.display()))?;

    let output = run_pipeline(rows, policy);
    debug!(
        rows = output.report.input_rows,
        contacts = output.report.contacts,
        skipped = output.report.skipped_slots,
        sort_by = %policy,
        "contacts aggregated"
    );

    if !args.dry_run {
        write_contacts(&output_path, &output.rows)
            .with_context(|| format!("write output table {}", output_path.display()))?;
    }

    if ctx.json {
        let report = ProcessReport {
            run: output.report,
            sort_by: policy,
            input_path: input_path.display().to_string(),
            output_path: output_path.display().to_string(),
            dry_run: args.dry_run,
        };
        return print_json(&report);
    }

    if args.dry_run {
        println!(
            "Dry-run: {} contact(s) from {} row(s); nothing written.",
            output.report.contacts, output.report.input_rows
        );
        return Ok(());
    }

    println!("Processed contacts saved to {}", output_path.display());
    Ok(())
}

fn flag_path(flag: &str, value: Option<PathBuf>) -> Result<Option<PathBuf>> {
    match value {
        Some(path) if path.as_os_str().is_empty() => {
            Err(invalid_input(format!("{flag} cannot be empty")))
        }
        other => Ok(other),
    }
}

fn resolve_sort_policy(label: &str) -> SortPolicy {
    match label.parse() {
        Ok(policy) => policy,
        Err(err) => {
            warn!(error = %err, "keeping input order");
            SortPolicy::Unsorted
        }
    }
}
