//! Titled list subcommand handler.

use anyhow::Result;

use tpanel::cli::ListArgs;
use tpanel::TitledList;

#[cfg(not(tarpaulin_include))]
pub fn handle_list(args: &ListArgs) -> Result<()> {
    println!(
        "{}",
        TitledList::new(&args.items, &args.title, &args.separator)
    );
    Ok(())
}
