//! This module is in charge of outputting the final cut-flow to the
//! standard output and to a results file

use crate::{config::Configuration, cutflow::CutFlow, numeric::Float};

use anyhow::{Context, Result};

use std::{
    fs::File,
    io::Write,
    time::Duration,
};

use time::{format_description, OffsetDateTime};

/// Name of the results file written next to the scanned data
const COUNTS_FILE: &str = "selection.counts";

/// Output the cut-flow to the console and to disk
pub fn dump_results(
    cfg: &Configuration,
    flow: &CutFlow,
    elapsed_time: Duration,
) -> Result<()> {
    // Print the cut flow on stdout first
    print_cut_flow(flow);

    // Compute a timestamp of when the scan ended
    let format = format_description::parse(
        "[day]-[month repr:short]-[year repr:last_two]   [hour]:[minute]:[second]",
    )?;
    let timestamp = OffsetDateTime::now_utc()
        .format(&format)
        .context("Failed to format the scan timestamp")?;

    // Write the same numbers to the results file, with enough context to
    // re-read them without the configuration at hand
    let mut counts_file =
        File::create(COUNTS_FILE).with_context(|| format!("Could not create {COUNTS_FILE}"))?;
    let counts_file = &mut counts_file;

    writeln_kv(counts_file, "Scan ended", &timestamp)?;
    writeln!(counts_file, " ---------------------------------------------")?;
    writeln_kv(counts_file, "Candidate file", &cfg.candidates_file)?;
    writeln_kv(counts_file, "eT preselection        (MeV)", cfg.et_min)?;
    writeln!(counts_file, " ---------------------------------------------")?;
    writeln_kv(counts_file, "Candidates read", flow.total)?;
    writeln_kv(counts_file, "... after preselection", flow.preselected)?;
    writeln_kv(counts_file, "... robust loose", flow.loose)?;
    writeln_kv(counts_file, "... robust medium", flow.medium)?;
    writeln_kv(counts_file, "... robuster tight", flow.robuster_tight)?;
    writeln_kv(counts_file, "Legacy robust tight", flow.legacy_tight)?;
    writeln!(counts_file, " ---------------------------------------------")?;
    let eff = flow.efficiency(flow.robuster_tight);
    writeln_kv(counts_file, "Robuster tight efficiency", eff)?;
    let legacy_eff = flow.efficiency(flow.legacy_tight);
    writeln_kv(counts_file, "Legacy tight efficiency", legacy_eff)?;
    writeln_kv(
        counts_file,
        "Scan time                 (s)",
        elapsed_time.as_secs_f64() as Float,
    )?;

    // ...and we're done
    Ok(())
}

/// Print the per-working-point totals, one line per counter
fn print_cut_flow(flow: &CutFlow) {
    println!("candidates      total={:6}", flow.total);
    println!(
        "preselected     total={:6}  loose={:6}  medium={:6}  robuster_tight={:6}",
        flow.preselected, flow.loose, flow.medium, flow.robuster_tight,
    );
    println!(
        "legacy_tight    total={:6}  (robuster_tight - legacy_tight = {:+})",
        flow.legacy_tight,
        flow.robuster_tight as i64 - flow.legacy_tight as i64,
    );
}

/// Key-value output that uses fixed-size columns for better readability
fn writeln_kv(file: &mut File, key: &str, value: impl std::fmt::Display) -> Result<()> {
    writeln!(file, " {key:<31}: {value}")?;
    Ok(())
}
