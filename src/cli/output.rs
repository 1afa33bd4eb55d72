//! Rendering categories for the terminal.

use color_eyre::Result;
use serde::Serialize;

use crate::collection::Identifiable;
use crate::models::Categorized;

use super::App;

impl App {
    /// Prints categories sorted by identifier, as JSON or one per line.
    pub(super) fn print_categories<T>(&self, mut items: Vec<&T>) -> Result<()>
    where
        T: Identifiable + Categorized + Serialize,
    {
        items.sort_by_key(|item| item.identifier());

        if self.json {
            println!("{}", serde_json::to_string_pretty(&items)?);
            return Ok(());
        }

        for item in items {
            match item.title() {
                Some(title) => println!("{}  ({})", item.identifier(), title),
                None => println!("{}", item.identifier()),
            }
        }
        Ok(())
    }

    /// Prints any serializable value, falling back to `Display` for text output.
    pub(super) fn print_value<T>(&self, value: &T) -> Result<()>
    where
        T: Serialize + std::fmt::Display,
    {
        if self.json {
            println!("{}", serde_json::to_string_pretty(value)?);
        } else {
            println!("{}", value);
        }
        Ok(())
    }
}
