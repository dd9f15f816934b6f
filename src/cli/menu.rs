//! Interactive menu loop.
//!
//! A failed action is reported and the menu is shown again; only `3` or end of
//! input leaves the loop.

use anyhow::Result;
use owo_colors::OwoColorize;
use std::io::{BufRead, Write};
use tracing::warn;

use super::output::write_table;
use super::session::InventoryAction;
use crate::cloud::ServiceKind;

/// A parsed menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Service(ServiceKind),
    Exit,
    Invalid,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Self {
        match input.trim() {
            "1" => MenuChoice::Service(ServiceKind::Ec2),
            "2" => MenuChoice::Service(ServiceKind::S3),
            "3" => MenuChoice::Exit,
            _ => MenuChoice::Invalid,
        }
    }
}

fn write_menu<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "{}", "Please select an option:".cyan())?;
    writeln!(out, "{}", "1. Manage EC2 Instances".cyan())?;
    writeln!(out, "{}", "2. Manage S3 Buckets".cyan())?;
    writeln!(out, "{}", "3. Exit".cyan())?;
    write!(out, "Enter your choice: ")?;
    out.flush()?;
    Ok(())
}

fn write_action_heading<W: Write>(out: &mut W, kind: ServiceKind) -> Result<()> {
    match kind {
        ServiceKind::Ec2 => writeln!(out, "{}", "Describing EC2 instances...".green())?,
        ServiceKind::S3 => writeln!(out, "{}", "Listing S3 buckets...".blue())?,
    }
    Ok(())
}

/// Run the menu until the operator exits or input ends.
pub async fn run_menu<R, W, A>(mut input: R, out: &mut W, action: &A) -> Result<()>
where
    R: BufRead,
    W: Write,
    A: InventoryAction + ?Sized,
{
    writeln!(out, "{}", "Welcome to EC2 and S3 CLI Manager".cyan())?;

    let mut line = String::new();
    loop {
        write_menu(out)?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            writeln!(out, "{}", "Exiting the program. Goodbye!".yellow())?;
            return Ok(());
        }

        match MenuChoice::parse(&line) {
            MenuChoice::Service(kind) => {
                write_action_heading(out, kind)?;
                match action.inventory(kind).await {
                    Ok(inventory) => write_table(out, &inventory)?,
                    Err(e) => {
                        warn!(service = %kind, error = %e, error_kind = %e.kind(), "Action failed");
                        writeln!(out, "{}", format!("{} action failed: {}", kind, e).red())?;
                        writeln!(out, "{}", format!("Hint: {}", e.remediation()).red())?;
                    }
                }
            }
            MenuChoice::Exit => {
                writeln!(out, "{}", "Exiting the program. Goodbye!".yellow())?;
                return Ok(());
            }
            MenuChoice::Invalid => {
                writeln!(out, "{}", "Invalid option. Please try again.".red())?;
            }
        }
    }
}
