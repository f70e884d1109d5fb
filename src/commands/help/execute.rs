use std::error::Error;

use serde::Serialize;

use super::{HelpCmd, COMMANDS};
use crate::commands::Execute;
use crate::db::DatabaseBackend;

#[derive(Debug, Clone, Serialize)]
pub struct HelpEntry {
    pub command: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Default, Serialize)]
pub struct HelpResult {
    pub commands: Vec<HelpEntry>,
}

impl Execute for HelpCmd {
    type Output = HelpResult;

    // Static listing; the database is never touched.
    fn execute(self, _db: &mut dyn DatabaseBackend) -> Result<Self::Output, Box<dyn Error>> {
        Ok(HelpResult {
            commands: COMMANDS
                .iter()
                .map(|&(command, description)| HelpEntry {
                    command,
                    description,
                })
                .collect(),
        })
    }
}
