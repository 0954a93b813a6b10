mod preferences;
mod session;

pub use preferences::PREFERENCES_FILE;
pub use preferences::Preferences;
pub use session::SessionManager;
pub use session::TOKEN_KEY;
