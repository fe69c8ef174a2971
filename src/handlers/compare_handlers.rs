use anyhow::Result;

use crate::cli::CompareArgs;
use crate::state::SessionState;
use crate::ui::format_comparison;

/// `compare`: side-by-side tables for 2 to 4 products
pub fn handle_compare(state: &SessionState, args: &CompareArgs) -> Result<()> {
    let result = state.compare_names(&args.names)?;
    println!("{}", format_comparison(&result));
    Ok(())
}
