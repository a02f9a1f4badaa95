pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::AppConfig;

pub use adapters::{FilePreferences, GeminiClient, MemoryPreferences};
pub use core::registry::CountryRegistry;
pub use core::resolver::{AliasTable, NameResolver};
pub use core::selection::{ClickOutcome, SelectionError, SelectionMachine, SelectionState};
pub use core::session::{Session, TermsGate};
pub use domain::model::{Country, GroundingSource, RegulationQuery, RegulationReport, Role, SearchType};
pub use utils::error::{GlobalDriveError, Result};
