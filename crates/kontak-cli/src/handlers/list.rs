//! List command handler.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::contact_table;

/// Print every contact, as a table or as JSON.
pub async fn execute(ctx: &CliContext, json: bool) -> Result<()> {
    let contacts = ctx.contacts.list().await.map_err(CliError::from)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&contacts)?);
        return Ok(());
    }

    if contacts.is_empty() {
        println!("No contacts yet.");
        println!("Use 'kontak add' or the web form to add one.");
        return Ok(());
    }

    println!("Found {} contact(s):\n", contacts.len());
    print!("{}", contact_table(&contacts));
    Ok(())
}
