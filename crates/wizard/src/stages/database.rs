use super::ask_choosable;
use crate::error::Result;
use crate::interaction::{Interaction, NoticeLevel};
use crate::model::Database;

pub fn collect_database(ui: &mut dyn Interaction) -> Result<Database> {
    ui.notify(NoticeLevel::Section, "Database");
    ask_choosable(ui, "Select database:")
}
