//! Terminal and JSON rendering of search results and model state.

use anyhow::{Context, Result};
use colored::Colorize;
use serde_json::json;
use synthesis::solver::{Candidate, Selection};
use synthesis::{SearchOutcome, Snapshot};

pub fn print_outcome(target_hz: f64, outcome: &SearchOutcome) {
    let verdict = if outcome.tolerance_met {
        "✓ within tolerance".green().bold()
    } else {
        "✗ tolerance not met, best approximation applied".yellow().bold()
    };
    println!();
    println!(
        "  {} {:.4} Hz → divisor {} step {} = {:.4} Hz ({})",
        "target".cyan(),
        target_hz,
        outcome.divisor.to_string().bold(),
        outcome.step.to_string().bold(),
        outcome.frequency,
        outcome.policy.as_str(),
    );
    println!(
        "  {} {:.4} Hz ({:.3} permille)",
        "error ".cyan(),
        outcome.error,
        outcome.error / target_hz.abs() * 1000.0,
    );
    println!("  {verdict}");
}

pub fn print_snapshot(snapshot: &Snapshot) {
    println!();
    println!("{}", "  Model state".cyan().bold());
    for line in snapshot.to_string().lines() {
        println!("    {line}");
    }
    println!();
}

pub fn print_table(target_hz: f64, table: &[Candidate], selection: &Selection) {
    println!();
    println!(
        "  {}",
        format!("{:>3} {:>7} {:>16} {:>14} {:>10}", "D", "S", "f / Hz", "|Δf| / Hz", "permille")
            .cyan()
            .bold()
    );
    for c in table {
        let mut row = format!(
            "{:>3} {:>7} {:>16.4} {:>14.4} {:>10.3}",
            c.divisor,
            c.step,
            c.frequency,
            c.error,
            c.relative_error(target_hz) * 1000.0,
        );
        let tolerant = selection.tolerant.is_some_and(|t| t.divisor == c.divisor);
        let best = selection.best.divisor == c.divisor;
        if tolerant {
            row.push_str("  ◀ optimal");
        }
        if best {
            row.push_str("  ◀ best");
        }
        if tolerant || best {
            println!("  {}", row.green());
        } else {
            println!("  {row}");
        }
    }
    println!();
}

pub fn print_json(value: &serde_json::Value) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{text}");
    Ok(())
}

pub fn outcome_json(target_hz: f64, outcome: &SearchOutcome, snapshot: &Snapshot) -> serde_json::Value {
    json!({
        "target_hz": target_hz,
        "outcome": outcome,
        "state": snapshot,
    })
}

pub fn table_json(table: &[Candidate], selection: &Selection) -> serde_json::Value {
    json!({
        "candidates": table,
        "best": selection.best.divisor,
        "optimal": selection.tolerant.map(|c| c.divisor),
    })
}

#[cfg(test)]
#[allow(clippy::indexing_slicing)]
mod tests {
    use super::*;
    use platform::TolerancePermille;
    use synthesis::solver::{candidates, select};

    #[test]
    fn test_table_json_marks_both_winners() {
        let table = candidates(132.5, 1000.0);
        let selection = select(&table, 1000.0, TolerancePermille::new(10));
        let value = table_json(&table, &selection);

        assert_eq!(value["candidates"].as_array().map(Vec::len), Some(8));
        assert_eq!(value["optimal"], json!(1));
        assert_eq!(value["candidates"][1]["step"], json!(15));
    }

    #[test]
    fn test_outcome_json_carries_state() {
        let table = candidates(132.5, 1000.0);
        let outcome = select(&table, 1000.0, TolerancePermille::new(10))
            .resolve(synthesis::MatchPolicy::WithinTolerance);
        let model = synthesis::FrequencySynthesisModel::new(132.5, platform::MockToneGenerator::new());
        let value = outcome_json(1000.0, &outcome, &model.snapshot());

        assert_eq!(value["outcome"]["tolerance_met"], json!(true));
        assert_eq!(value["outcome"]["policy"], json!("WithinTolerance"));
        assert_eq!(value["state"]["tolerance"], json!(10));
    }
}
