//! Show command handler.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::error::CliError;

pub async fn execute(ctx: &CliContext, name: &str) -> Result<()> {
    let contact = ctx.contacts.find_by_name(name).await.map_err(CliError::from)?;

    println!("ID:    {}", contact.id);
    println!("Name:  {}", contact.name);
    println!("Email: {}", contact.email.as_deref().unwrap_or("--"));
    println!("Phone: {}", contact.phone);
    Ok(())
}
