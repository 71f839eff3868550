//! Remove command handler.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Delete the named contact. Returns whether a record was removed.
pub async fn execute(ctx: &CliContext, name: &str) -> Result<bool> {
    let committed = ctx.contacts.delete(name).await.map_err(CliError::from)?;

    if committed.value {
        println!("{}", committed.feedback);
    } else {
        println!("No contact named '{name}'.");
        println!("Use 'kontak list' to see available contacts.");
    }
    Ok(committed.value)
}
