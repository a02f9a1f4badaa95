use crate::core::resolver::NameResolver;
use crate::core::selection::{ClickOutcome, SelectionError, SelectionMachine};
use crate::domain::model::{Role, SearchType};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Debug, Clone, Parser)]
#[command(name = "globaldrive")]
#[command(about = "Check driving-license requirements between two countries")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List selectable countries in dropdown order
    Countries,

    /// Reconcile map-dataset country names with the country list
    Resolve {
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// Replay selection events, e.g. `map:France role:origin destination:Japan`
    Simulate {
        #[arg(required = true)]
        events: Vec<SelectionEvent>,
    },

    /// List the popular preset checks
    Presets,

    /// Ask for the requirements between two countries
    Query {
        /// Country the license was issued in
        #[arg(long)]
        origin: String,

        /// Country to drive in
        #[arg(long)]
        destination: String,

        #[arg(long, value_enum, default_value_t = SearchType::Tourist)]
        category: SearchType,
    },

    /// Run a preset check by its number from `presets`
    Preset { number: usize },

    /// Show the disclaimer and record its acceptance
    AcceptTerms,
}

/// One user interaction with the selectors or the map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionEvent {
    /// Click on a map feature carrying this raw name.
    Map(String),
    /// Explicit role toggle.
    Role(Role),
    /// Dropdown choice for a role.
    Dropdown(Role, String),
}

impl FromStr for SelectionEvent {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, value) = s
            .split_once(':')
            .ok_or_else(|| format!("expected <kind>:<value>, got '{}'", s))?;
        let value = value.trim();
        if value.is_empty() {
            return Err(format!("missing value in '{}'", s));
        }

        match kind.trim().to_ascii_lowercase().as_str() {
            "map" => Ok(SelectionEvent::Map(value.to_string())),
            "role" | "mode" => value.parse().map(SelectionEvent::Role),
            "origin" => Ok(SelectionEvent::Dropdown(Role::Origin, value.to_string())),
            "destination" | "dest" => Ok(SelectionEvent::Dropdown(Role::Destination, value.to_string())),
            other => Err(format!(
                "unknown event kind '{}' (use map, role, origin or destination)",
                other
            )),
        }
    }
}

/// What happened when an event was applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventOutcome {
    Applied,
    Ignored,
    Rejected(SelectionError),
    /// Dropdown input that names no single country.
    Unresolved(String),
}

impl SelectionEvent {
    pub fn apply(&self, machine: &mut SelectionMachine, resolver: &NameResolver<'_>) -> EventOutcome {
        let result = match self {
            SelectionEvent::Map(feature) => match machine.click_feature(resolver, feature) {
                Ok(ClickOutcome::Ignored) => return EventOutcome::Ignored,
                Ok(ClickOutcome::Selected { .. }) => Ok(()),
                Err(e) => Err(e),
            },
            SelectionEvent::Role(role) => {
                machine.set_active_role(*role);
                Ok(())
            }
            SelectionEvent::Dropdown(role, input) => match resolver.lookup(input) {
                Ok(country) => machine.select_via_dropdown(*role, &country.name),
                Err(e) => return EventOutcome::Unresolved(e.to_string()),
            },
        };

        match result {
            Ok(()) => EventOutcome::Applied,
            Err(e) => EventOutcome::Rejected(e),
        }
    }
}
