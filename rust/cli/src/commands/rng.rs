//! Random number generator verification command.
//!
//! The `rng` command verifies the properties of the seeded secret drawer the
//! engine uses. It samples draws for a seed and range and reports the spread.
//!
//! ## Purpose
//!
//! This command is primarily used for:
//! - Verifying drawer determinism (same seed produces same sequence)
//! - Checking that both range endpoints are reachable
//! - Eyeballing the distribution via the sample mean

use crate::config;
use crate::error::CliError;
use crate::ui;
use hilo_engine::draw::SecretDrawer;
use hilo_engine::rules::validate_range;
use std::io::Write;

/// Handle the rng command - sample the secret drawer and report its spread.
///
/// Draws `samples` secrets from a [`SecretDrawer`] seeded with `seed` (or a
/// random seed if not provided) and prints the first few draws, the observed
/// extremes with their hit counts, and the mean.
///
/// # Arguments
///
/// * `seed` - Optional seed value for the drawer (uses random seed if None)
/// * `samples` - Number of draws to sample (must be >= 1)
/// * `min` - Lower bound of the range (default: configuration)
/// * `max` - Upper bound of the range (default: configuration)
/// * `out` - Output stream for the sample report
/// * `err` - Error stream for validation messages
///
/// # Returns
///
/// * `Ok(())` on success
/// * `Err(CliError)` on invalid arguments or write failure
///
/// # Example
///
/// ```ignore
/// # use hilo_cli::commands::handle_rng_command;
/// # use std::io;
/// let mut out = io::stdout();
/// let mut err = io::stderr();
/// handle_rng_command(Some(12345), 1000, None, None, &mut out, &mut err)
///     .expect("rng command failed");
/// ```
pub fn handle_rng_command(
    seed: Option<u64>,
    samples: u64,
    min: Option<i64>,
    max: Option<i64>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    if samples == 0 {
        ui::write_error(err, "samples must be >= 1")?;
        return Err(CliError::InvalidInput("samples must be >= 1".to_string()));
    }

    let cfg = config::load().map_err(|e| CliError::Config(e.to_string()))?;
    let min = min.unwrap_or(cfg.min_number);
    let max = max.unwrap_or(cfg.max_number);
    validate_range(min, max).map_err(|e| CliError::Engine(e.to_string()))?;

    let s = seed.unwrap_or_else(rand::random);
    let mut drawer = SecretDrawer::new_with_seed(s);

    writeln!(
        out,
        "rng: seed={} samples={} range=[{}, {}]",
        s, samples, min, max
    )?;

    let mut first = Vec::new();
    let mut observed_min = i64::MAX;
    let mut observed_max = i64::MIN;
    let mut min_hits = 0u64;
    let mut max_hits = 0u64;
    let mut sum = 0i128;

    for i in 0..samples {
        let v = drawer.draw(min, max);
        if i < 5 {
            first.push(v);
        }
        observed_min = observed_min.min(v);
        observed_max = observed_max.max(v);
        if v == min {
            min_hits += 1;
        }
        if v == max {
            max_hits += 1;
        }
        sum += v as i128;
    }

    writeln!(out, "First draws: {:?}", first)?;
    writeln!(out, "Observed min: {} ({} hit(s))", observed_min, min_hits)?;
    writeln!(out, "Observed max: {} ({} hit(s))", observed_max, max_hits)?;
    writeln!(out, "Mean: {:.3}", sum as f64 / samples as f64)?;
    Ok(())
}
