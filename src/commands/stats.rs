use clap::Args;
use minitrack_core::{ArmyStats, Collection, DocumentStore};

use super::{capitalize, OutputFormat};

#[derive(Args)]
pub struct StatsCommand {
    /// Army name
    pub army: String,

    /// Output format
    #[arg(long, short, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

impl StatsCommand {
    pub fn run<S: DocumentStore>(
        &self,
        collection: &Collection<S>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let stats = collection.stats(&self.army)?;

        match self.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&stats)?),
            OutputFormat::Text => print!("{}", render_stats(&stats)),
        }
        Ok(())
    }
}

/// Statistics block shared by `stats` and `army show`.
pub(crate) fn render_stats(stats: &ArmyStats) -> String {
    let mut out = format!("Total miniatures: {}\n", stats.total);
    for (status, count) in stats.by_status.iter() {
        out.push_str(&format!("{}: {}\n", capitalize(status.as_str()), count));
    }
    if stats.unclassified > 0 {
        out.push_str(&format!("Unclassified: {}\n", stats.unclassified));
    }
    out
}
