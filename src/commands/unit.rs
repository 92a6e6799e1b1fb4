use clap::{Args, Subcommand};
use minitrack_core::{
    Collection, DocumentStore, Status, StatusChange, StatusOnUpdate, UnitForm, UpsertOutcome,
};

use super::capitalize;

#[derive(Args)]
pub struct UnitCommand {
    #[command(subcommand)]
    pub command: UnitSubcommand,
}

#[derive(Subcommand)]
pub enum UnitSubcommand {
    /// Add a unit group, or update it if the group name already exists
    Set {
        /// Army the unit belongs to
        army: String,

        /// Group name (unique within the army)
        group: String,

        /// Miniatures type
        #[arg(long = "type", short = 't', value_name = "TYPE")]
        miniatures_type: String,

        /// Number of miniatures in the group
        #[arg(long, short, value_name = "N", allow_hyphen_values = true)]
        number: String,

        /// Mark the group as rare
        #[arg(long)]
        rare: bool,

        /// Note or reminder
        #[arg(long, default_value = "")]
        note: String,
    },

    /// Change the painting status of a unit group
    Status {
        /// Army the unit belongs to
        army: String,

        /// Group name
        group: String,

        /// New status (built, work, painted)
        status: String,
    },

    /// Delete a unit group
    Delete {
        /// Army the unit belongs to
        army: String,

        /// Group name
        group: String,
    },
}

impl UnitCommand {
    pub fn run<S: DocumentStore>(
        &self,
        collection: &Collection<S>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        match &self.command {
            UnitSubcommand::Set {
                army,
                group,
                miniatures_type,
                number,
                rare,
                note,
            } => {
                let form = UnitForm::new(group, miniatures_type, number)
                    .with_rare(*rare)
                    .with_note(note);

                match collection.upsert_unit(army, &form)? {
                    UpsertOutcome::Created => {
                        println!("{}", upsert_message("saved", group, army));
                    }
                    UpsertOutcome::Updated { previous_status } => {
                        println!("{}", upsert_message("updated", group, army));
                        if collection.status_on_update() == StatusOnUpdate::ResetToBuilt
                            && !previous_status.is(Status::Built)
                        {
                            println!("Status reset from '{}' to 'built'.", previous_status);
                        }
                    }
                }
                Ok(())
            }

            UnitSubcommand::Status {
                army,
                group,
                status,
            } => {
                match collection.update_status(army, group, status)? {
                    StatusChange::Changed { from, to } => {
                        println!(
                            "Status for '{}' updated from {} to {}.",
                            group,
                            capitalize(&from.to_string()),
                            capitalize(to.as_str())
                        );
                    }
                    StatusChange::Unchanged => {
                        println!("Status for '{}' unchanged.", group);
                    }
                }
                Ok(())
            }

            UnitSubcommand::Delete { army, group } => {
                let removed = collection.delete_unit(army, group)?;
                println!(
                    "Unit '{}' deleted ({} x {}).",
                    group, removed.miniatures_number, removed.miniatures_type
                );
                Ok(())
            }
        }
    }
}

fn upsert_message(verb: &str, group: &str, army: &str) -> String {
    format!("Unit '{}' {} in army '{}'.", group.trim(), verb, army.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upsert_message_uses_stored_names() {
        assert_eq!(
            upsert_message("saved", "  Boyz ", "  Orcs  "),
            "Unit 'Boyz' saved in army 'Orcs'."
        );
        assert_eq!(
            upsert_message("updated", "Boyz", "Orcs\t"),
            "Unit 'Boyz' updated in army 'Orcs'."
        );
    }
}
