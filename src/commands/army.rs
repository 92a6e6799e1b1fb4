use clap::{Args, Subcommand};
use minitrack_core::{compute, Army, Collection, CollectionError, DocumentStore, UnitStatus};
use serde::Serialize;

use super::stats::render_stats;
use super::{capitalize, OutputFormat};

#[derive(Args)]
pub struct ArmyCommand {
    #[command(subcommand)]
    pub command: ArmySubcommand,
}

#[derive(Subcommand)]
pub enum ArmySubcommand {
    /// List all armies
    List {
        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Create a new, empty army
    Create {
        /// Name of the army
        name: String,
    },

    /// Show an army's units and statistics
    Show {
        /// Name of the army
        name: String,

        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },
}

#[derive(Serialize)]
struct ArmyView<'a> {
    name: &'a str,
    units: &'a Army,
    stats: minitrack_core::ArmyStats,
}

impl ArmyCommand {
    pub fn run<S: DocumentStore>(
        &self,
        collection: &Collection<S>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        match &self.command {
            ArmySubcommand::List { format } => {
                let armies = collection.list_armies();

                match format {
                    OutputFormat::Json => {
                        println!("{}", serde_json::to_string_pretty(&armies)?);
                    }
                    OutputFormat::Text => {
                        if armies.is_empty() {
                            println!("No armies yet. Create one with 'minis army create <NAME>'.");
                            return Ok(());
                        }
                        for name in &armies {
                            println!("{}", name);
                        }
                        println!("\nTotal: {} army(ies)", armies.len());
                    }
                }
                Ok(())
            }

            ArmySubcommand::Create { name } => {
                collection.create_army(name)?;
                println!("Army '{}' created.", name.trim());
                Ok(())
            }

            ArmySubcommand::Show { name, format } => {
                let army = collection
                    .select_army(name)
                    .ok_or_else(|| CollectionError::ArmyNotFound(name.clone()))?;
                let stats = compute(&army);

                match format {
                    OutputFormat::Json => {
                        let view = ArmyView {
                            name,
                            units: &army,
                            stats,
                        };
                        println!("{}", serde_json::to_string_pretty(&view)?);
                    }
                    OutputFormat::Text => {
                        print!("{}", render_army(name, &army));
                        println!("{}", "-".repeat(40));
                        print!("{}", render_stats(&stats));
                    }
                }
                Ok(())
            }
        }
    }
}

fn status_label(status: &UnitStatus) -> String {
    match status {
        UnitStatus::Known(s) => capitalize(s.as_str()),
        UnitStatus::Unrecognized(raw) => format!("{} (unrecognized)", raw),
    }
}

fn render_army(name: &str, army: &Army) -> String {
    let mut out = format!("Army: {}\n{}\n", name, "=".repeat(40));

    if army.is_empty() {
        out.push_str("No units in this army yet.\n");
        return out;
    }

    for (unit_name, unit) in army.iter() {
        out.push_str(&format!("{} ({})\n", unit_name, status_label(&unit.status)));
        for line in unit.to_string().lines() {
            out.push_str(&format!("  {}\n", line));
        }
    }
    for unit_name in army.unreadable() {
        out.push_str(&format!("{} (unreadable, left as-is)\n", unit_name));
    }
    out
}
