// Adapters layer: concrete implementations of the domain ports.

pub mod gemini;
pub mod preferences;

pub use gemini::GeminiClient;
pub use preferences::{FilePreferences, MemoryPreferences};
