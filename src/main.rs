//! isem-scan: run the robust electron selection over a candidate list
//!
//! Reads a whitespace-separated candidate file (one candidate per line:
//! isEM mask, expected-B-layer flag, cluster eta, eT in MeV, Reta, weta2),
//! classifies each candidate at every robust working point, and dumps the
//! resulting cut flow to the console and to a results file.
//!
//! The mask column accepts decimal or 0x-prefixed hexadecimal, matching the
//! two ways the reconstruction dumps it. Lines starting with `#` and blank
//! lines are skipped.

use anyhow::{bail, Context, Result};

use robust_isem::{
    candidate::Candidate,
    config::Configuration,
    cutflow::CutFlow,
    isem::IsEm,
    numeric::Float,
    report,
};

use std::{fs, time::Instant};

/// This will act as our main function, with suitable error handling
fn main() -> Result<()> {
    // ### CONFIGURATION READOUT ###

    let cfg = Configuration::load("scan.conf").context("Failed to load the configuration")?;

    // ### SCAN EXECUTION ###

    // Start the clock after configuration I/O, to keep the reported timing
    // about the scan itself
    let saved_time = Instant::now();

    let candidates_str = fs::read_to_string(&cfg.candidates_file)
        .with_context(|| format!("Could not read candidate file {}", cfg.candidates_file))?;

    let mut flow = CutFlow::new();
    for (line_idx, line) in candidates_str.lines().enumerate() {
        let Some(cand) = parse_candidate(line)
            .with_context(|| format!("Malformed candidate on line {}", line_idx + 1))?
        else {
            continue;
        };

        let selected = flow.tally(&cand, cfg.et_min);
        if selected && cfg.list_passing {
            println!(
                "robuster tight: mask=0x{:x} eta={:+.3} eT={:.0} MeV",
                cand.is_em.bits(),
                cand.eta,
                cand.et,
            );
        }
    }

    // ### RESULTS DISPLAY AND STORAGE ###

    let elapsed_time = saved_time.elapsed();

    // Send the results to the standard output and to disk and we're done
    report::dump_results(&cfg, &flow, elapsed_time).context("Failed to output the results")?;
    Ok(())
}

/// Decode one line of the candidate file, `None` for blanks and comments
fn parse_candidate(line: &str) -> Result<Option<Candidate>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let mut fields = line.split_whitespace();
    let mut next_field = |name: &'static str| -> Result<&str> {
        fields
            .next()
            .with_context(|| format!("Missing {name} field"))
    };

    let mask_text = next_field("isEM mask")?;
    let mask_bits = match mask_text.strip_prefix("0x") {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => mask_text.parse::<u32>(),
    }
    .with_context(|| format!("Could not parse isEM mask {mask_text:?}"))?;

    let cand = Candidate {
        // Reserved bits must ride along untouched, so no truncation here
        is_em: IsEm::from_bits_retain(mask_bits),
        expect_b_layer: next_field("expect_b_layer")?
            .parse::<bool>()
            .context("Could not parse the expected-B-layer flag")?,
        eta: parse_float(next_field("eta")?, "eta")?,
        et: parse_float(next_field("eT")?, "eT")?,
        reta: parse_float(next_field("Reta")?, "Reta")?,
        w2: parse_float(next_field("weta2")?, "weta2")?,
    };

    if let Some(extra) = fields.next() {
        bail!("Trailing field {extra:?} on candidate line");
    }
    Ok(Some(cand))
}

/// Parse one kinematic field, tagged with its name for error reporting
fn parse_float(text: &str, name: &'static str) -> Result<Float> {
    text.parse::<Float>()
        .with_context(|| format!("Could not parse {name} value {text:?}"))
}
