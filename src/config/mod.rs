mod preferences;

pub use preferences::{Preferences, PreferencesError};
