//! Teardown command - run every cleanup step and report.

use crate::cli::output;
use crate::core::report::{Report, Status, Step};
use crate::core::runner::{self, Teardown};
use crate::error::Result;

/// Affected entries listed under a step before the rest are summarized.
const MAX_LISTED: usize = 10;

/// Run the teardown in the current directory.
pub fn execute(json: bool) -> Result<()> {
    if json {
        let report = runner::run_cleanup()?;
        println!("{}", report.to_json()?);
        return Ok(());
    }

    let teardown = Teardown::current()?;

    output::header("Tearing down demo session");

    let mut report = Report::default();
    for step in Step::ALL {
        output::progress(step.label());
        let outcome = teardown.run_step(step);
        output::progress_done(outcome.status);

        if outcome.status != Status::Skipped {
            output::detail(&outcome.detail);
        }
        for item in outcome.affected.iter().take(MAX_LISTED) {
            output::list_item(item);
        }
        if outcome.affected.len() > MAX_LISTED {
            output::detail(&format!("and {} more", outcome.affected.len() - MAX_LISTED));
        }

        report.steps.push(outcome);
    }

    if !report.is_clean() {
        let failed = report
            .steps
            .iter()
            .filter(|s| s.status == Status::Failed)
            .count();
        output::warn(&format!(
            "{} step{} failed",
            failed,
            if failed == 1 { "" } else { "s" }
        ));
        output::hint("rerun with --verbose for details");
    }

    output::success("teardown complete");
    Ok(())
}
