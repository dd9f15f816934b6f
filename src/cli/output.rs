//! Output formatting for listing results
//!
//! Table output reproduces the colored line format of the interactive menu;
//! JSON and YAML are for scripting.

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use std::io::Write;

use crate::cloud::Inventory;

/// Output format options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Yaml,
}

/// Write `inventory` in the given format.
pub fn write_inventory<W: Write>(
    out: &mut W,
    inventory: &Inventory,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Table => write_table(out, inventory),
        OutputFormat::Json => {
            let json =
                serde_json::to_string_pretty(inventory).context("Failed to serialize to JSON")?;
            writeln!(out, "{}", json)?;
            Ok(())
        }
        OutputFormat::Yaml => {
            let yaml = serde_yaml::to_string(inventory).context("Failed to serialize to YAML")?;
            write!(out, "{}", yaml)?;
            Ok(())
        }
    }
}

/// Colored line-per-field listing.
pub fn write_table<W: Write>(out: &mut W, inventory: &Inventory) -> Result<()> {
    match inventory {
        Inventory::Instances(instances) => {
            if instances.is_empty() {
                writeln!(out, "{}", "No EC2 instances found.".green())?;
            }
            for instance in instances {
                writeln!(out, "{}", format!("Instance ID: {}", instance.instance_id).green())?;
                writeln!(out, "{}", format!("Instance State: {}", instance.state).green())?;
                writeln!(out, "{}", format!("Instance Type: {}", instance.instance_type).green())?;
            }
        }
        Inventory::Buckets(buckets) => {
            if buckets.is_empty() {
                writeln!(out, "{}", "No S3 buckets found.".blue())?;
            }
            for bucket in buckets {
                writeln!(out, "{}", format!("Bucket Name: {}", bucket.name).blue())?;
            }
        }
    }
    Ok(())
}
