use clap::ValueEnum;

mod army;
mod config_cmd;
mod stats;
mod unit;

pub use army::ArmyCommand;
pub use config_cmd::ConfigCommand;
pub use stats::StatsCommand;
pub use unit::UnitCommand;

#[derive(Clone, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Uppercases the first character: "painted" -> "Painted".
pub(crate) fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}
