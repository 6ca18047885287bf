use std::env;
use std::path::PathBuf;

/// Durable client-side storage locations.
///
/// The session survives process restarts by living in a small file under the
/// user's configuration directory, overridable with `COLLEGIATE_SESSION_FILE`.
#[derive(Clone, Debug)]
pub struct StorageConfig {
    /// Where the persisted session document lives.
    pub session_path: PathBuf,
}

impl StorageConfig {
    pub fn from_env() -> Self {
        Self::from_vars(env::var("COLLEGIATE_SESSION_FILE").ok())
    }

    fn from_vars(session_file: Option<String>) -> Self {
        let session_path = session_file.map(PathBuf::from).unwrap_or_else(|| {
            dirs::config_dir()
                .unwrap_or_else(env::temp_dir)
                .join("collegiate")
                .join("session.json")
        });
        Self { session_path }
    }
}
