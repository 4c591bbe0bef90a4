use std::path::{Path, PathBuf};

use super::{Config, ConfigError, Options};

/// Builder for a [`Config`] with its scope and factory defaults in place.
///
/// ## Example
///
/// ```no_run
/// use gba_config::{Config, Options, PlatformEnv};
///
/// let factory = Options::default();
/// let mut config = Config::builder()
///     .with_scope("qt")
///     .with_defaults(&factory)
///     .build()?;
///
/// if let Some(env) = PlatformEnv::detect("mgba") {
///     config.load(&env);
/// }
///
/// let mut options = factory.clone();
/// config.map_into(&mut options);
/// # Ok::<(), gba_config::ConfigError>(())
/// ```
#[derive(Debug, Default)]
#[must_use = "builders do nothing until .build() is called"]
pub struct ConfigBuilder {
    scope: Option<String>,
    defaults: Option<Options>,
    files: Vec<(PathBuf, bool)>,
}

impl Config {
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

impl ConfigBuilder {
    /// Sets the scope whose `ports.<scope>` section takes lookup priority.
    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }

    /// Seeds the defaults store from `options`.
    pub fn with_defaults(mut self, options: &Options) -> Self {
        self.defaults = Some(options.clone());
        self
    }

    /// Merges a session file at build time.
    ///
    /// If `required` is `true`, the build fails when the file doesn't exist.
    /// Files are applied in registration order, so later files win.
    pub fn with_file(mut self, path: impl AsRef<Path>, required: bool) -> Self {
        self.files.push((path.as_ref().to_path_buf(), required));
        self
    }

    pub fn build(self) -> Result<Config, ConfigError> {
        let mut config = Config::new(self.scope.as_deref());

        if let Some(defaults) = &self.defaults {
            config.export_defaults(defaults);
        }

        for (path, required) in &self.files {
            match config.load_from(path) {
                Ok(()) => {}
                Err(ConfigError::FileNotFound(_)) if !required => {}
                Err(e) => return Err(e),
            }
        }

        Ok(config)
    }
}
