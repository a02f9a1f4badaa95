pub mod presets;
pub mod prompt;
pub mod registry;
pub mod resolver;
pub mod selection;
pub mod session;

pub use crate::domain::model::{Country, RegulationQuery, RegulationReport, Role, SearchType};
pub use crate::domain::ports::{PreferenceStore, RegulationService};
pub use crate::utils::error::Result;
