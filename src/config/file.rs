//! Locating and persisting the session configuration file.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::{Config, ConfigError};

/// File name of the session store inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.ini";

/// Where per-user configuration lives on this platform.
///
/// Path construction is a pure function of this value, so tests can point it
/// at a temporary directory instead of the real home.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformEnv {
    /// Per-user configuration root, e.g. `~/.config` or roaming `AppData`.
    pub config_home: PathBuf,
    /// Directory name of the application under `config_home`.
    pub app_dir: String,
}

impl PlatformEnv {
    pub fn new(config_home: impl Into<PathBuf>, app_dir: impl Into<String>) -> Self {
        Self {
            config_home: config_home.into(),
            app_dir: app_dir.into(),
        }
    }

    /// Uses the platform's conventional configuration root.
    ///
    /// Returns `None` when no home directory can be determined.
    pub fn detect(app_dir: impl Into<String>) -> Option<Self> {
        dirs::config_dir().map(|home| Self::new(home, app_dir))
    }

    /// The application's configuration directory.
    pub fn config_directory(&self) -> PathBuf {
        self.config_home.join(&self.app_dir)
    }

    /// Full path of the session config file.
    pub fn config_path(&self) -> PathBuf {
        self.config_directory().join(CONFIG_FILE_NAME)
    }

    /// Creates the configuration directory if needed and returns the config
    /// file path.
    ///
    /// A failure to create the directory is logged, not returned; the read or
    /// write that follows reports the real outcome.
    pub fn ensure_config_path(&self) -> PathBuf {
        let dir = self.config_directory();
        if let Err(e) = std::fs::create_dir_all(&dir) {
            warn!(path = %dir.display(), error = %e, "failed to create config directory");
        }
        dir.join(CONFIG_FILE_NAME)
    }
}

impl Config {
    /// Loads the session store from the platform config file.
    ///
    /// Returns `false` if the file is missing, unreadable or malformed.
    pub fn load(&mut self, env: &PlatformEnv) -> bool {
        let path = env.ensure_config_path();
        report("load", &path, self.load_from(&path))
    }

    /// Writes the session store to the platform config file.
    ///
    /// Returns `false` if the file could not be written. The in-memory store
    /// is unaffected either way.
    pub fn save(&self, env: &PlatformEnv) -> bool {
        let path = env.ensure_config_path();
        report("save", &path, self.save_to(&path))
    }

    /// Merges the file at `path` into the session store.
    pub fn load_from(&mut self, path: &Path) -> Result<(), ConfigError> {
        self.session.read(path)
    }

    /// Writes the session store to `path`.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        self.session.write(path)
    }
}

fn report(op: &str, path: &Path, result: Result<(), ConfigError>) -> bool {
    match result {
        Ok(()) => {
            debug!(path = %path.display(), "config {op} succeeded");
            true
        }
        Err(ConfigError::FileNotFound(_)) => {
            debug!(path = %path.display(), "no config file to {op}");
            false
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "config {op} failed");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn temp_env() -> (TempDir, PlatformEnv) {
        let dir = TempDir::new().unwrap();
        let env = PlatformEnv::new(dir.path().join(".config"), "mgba");
        (dir, env)
    }

    #[test]
    fn test_path_construction_is_pure() {
        let env = PlatformEnv::new("/home/player/.config", "mgba");

        assert_eq!(env.config_directory(), PathBuf::from("/home/player/.config/mgba"));
        assert_eq!(
            env.config_path(),
            PathBuf::from("/home/player/.config/mgba/config.ini")
        );
    }

    #[test]
    fn test_save_creates_directory() {
        let (_dir, env) = temp_env();
        assert!(!env.config_directory().exists());

        let mut config = Config::new(None);
        config.set_value("volume", "50");

        assert!(config.save(&env));
        assert!(env.config_directory().is_dir());
        assert!(env.config_path().is_file());
    }

    #[test]
    fn test_load_missing_file() {
        let (_dir, env) = temp_env();
        let mut config = Config::new(None);

        assert!(!config.load(&env));
        assert!(config.session().is_empty());
    }

    #[test]
    fn test_load_malformed_file() {
        let (_dir, env) = temp_env();
        let path = env.ensure_config_path();
        std::fs::write(&path, "[unterminated").unwrap();

        let mut config = Config::new(None);
        assert!(!config.load(&env));
    }

    #[test]
    fn test_load_existing_ini_file() {
        let (_dir, env) = temp_env();
        let path = env.ensure_config_path();
        std::fs::write(
            &path,
            "[ports.qt]\nbios=/roms/gba_bios.bin\nidleOptimization=detect\nvolume=50\n",
        )
        .unwrap();

        let mut config = Config::new(Some("qt"));
        assert!(config.load(&env));
        assert_eq!(config.get_int("volume").unwrap(), 50);
        assert_eq!(config.get_string("bios").unwrap(), "/roms/gba_bios.bin");
        assert_eq!(config.get_value("idleOptimization"), Some("detect"));
    }

    #[test]
    fn test_save_then_load() {
        let (_dir, env) = temp_env();

        let mut config = Config::new(Some("gba"));
        config.set_value("bios", "/roms/gba_bios.bin");
        config.set_int("frameskip", 2);
        config.set_float("fpsTarget", 59.73);
        config.set_bool("mute", true);
        config.session.set(None, "volume", "64");
        config.set_default_int("width", 480);
        assert!(config.save(&env));

        let mut fresh = Config::new(Some("gba"));
        assert!(fresh.load(&env));

        for key in ["bios", "frameskip", "fpsTarget", "mute", "volume"] {
            assert_eq!(fresh.get_value(key), config.get_value(key), "key {key}");
        }
        assert_eq!(fresh.session(), config.session());
        // defaults are not persisted
        assert_eq!(fresh.get_value("width"), None);
    }

    #[test]
    fn test_save_failure_keeps_store() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();
        // config_home is a regular file, so the directory cannot be created
        let env = PlatformEnv::new(&blocker, "mgba");

        let mut config = Config::new(None);
        config.set_value("volume", "50");

        assert!(!config.save(&env));
        assert_eq!(config.get_value("volume"), Some("50"));
    }
}
