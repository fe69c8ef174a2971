use anyhow::Result;
use p360_core::validate_catalog;

use crate::state::SessionState;
use crate::ui::{format_options, set_status, StatusLevel};

/// `options`: segment and brand choices from the registry
pub fn handle_options(state: &SessionState) {
    let registry = &state.config.registry;
    println!("{}", format_options("Segment", &registry.all_segments()));
    println!();
    println!("{}", format_options("Brand", &registry.all_brands()));
}

/// Numbered data-quality report, or `None` if nothing was found
pub fn check_report(state: &SessionState) -> Option<String> {
    let catalog = state.catalog();
    match validate_catalog(&catalog, &state.config.registry) {
        Ok(()) => None,
        Err(issues) => Some(
            issues
                .iter()
                .enumerate()
                .map(|(idx, issue)| format!("{:>3}. {}", idx + 1, issue))
                .collect::<Vec<_>>()
                .join("\n"),
        ),
    }
}

/// `check`: report data-quality issues in the loaded catalog
pub fn handle_check(state: &SessionState) -> Result<()> {
    let count = state.catalog().len();
    match check_report(state) {
        None => set_status(format!("{} items checked, no issues found", count), StatusLevel::Success),
        Some(report) => {
            println!("{}", report);
            set_status(
                format!("{} items checked, {} issue(s) found", count, report.lines().count()),
                StatusLevel::Warning,
            );
        }
    }
    Ok(())
}
