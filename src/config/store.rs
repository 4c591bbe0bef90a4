//! Section-scoped string store with file persistence.
//!
//! A [`Store`] maps `(section, key)` pairs to string values. The section is
//! either the unnamed global section (`None`) or a named one. On disk a store
//! is an INI file: `key=value` lines for the global section at the top,
//! then one `[section]` header per named section.

use std::collections::BTreeMap;
use std::path::Path;

use ini::{EscapePolicy, Ini, ParseOption, WriteOption};

use super::ConfigError;

type Section = BTreeMap<String, String>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Store {
    global: Section,
    sections: BTreeMap<String, Section>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value stored under `key` in `section`, if any.
    pub fn get(&self, section: Option<&str>, key: &str) -> Option<&str> {
        let section = match section {
            None => &self.global,
            Some(name) => self.sections.get(name)?,
        };
        section.get(key).map(String::as_str)
    }

    pub fn set(&mut self, section: Option<&str>, key: impl Into<String>, value: impl Into<String>) {
        self.section_mut(section).insert(key.into(), value.into());
    }

    pub fn set_int(&mut self, section: Option<&str>, key: impl Into<String>, value: i32) {
        self.set(section, key, value.to_string());
    }

    pub fn set_uint(&mut self, section: Option<&str>, key: impl Into<String>, value: u32) {
        self.set(section, key, value.to_string());
    }

    /// Stores a float using its shortest round-tripping form. The decimal
    /// separator is always `.`.
    pub fn set_float(&mut self, section: Option<&str>, key: impl Into<String>, value: f32) {
        self.set(section, key, value.to_string());
    }

    /// Booleans are persisted as the integers `0` and `1`.
    pub fn set_bool(&mut self, section: Option<&str>, key: impl Into<String>, value: bool) {
        self.set_int(section, key, i32::from(value));
    }

    /// Removes a value. A named section left empty is dropped.
    pub fn remove(&mut self, section: Option<&str>, key: &str) -> Option<String> {
        match section {
            None => self.global.remove(key),
            Some(name) => {
                let values = self.sections.get_mut(name)?;
                let removed = values.remove(key);
                if values.is_empty() {
                    self.sections.remove(name);
                }
                removed
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.global.is_empty() && self.sections.is_empty()
    }

    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }

    /// Reads `path` and merges its contents into the store.
    ///
    /// Existing values are overwritten by those in the file; values the file
    /// does not mention are kept. Values are taken verbatim: no quote or
    /// backslash processing, so Windows paths survive.
    pub fn read(&mut self, path: &Path) -> Result<(), ConfigError> {
        let ini = Ini::load_from_file_opt(path, read_options()).map_err(|e| match e {
            ini::Error::Io(e) if e.kind() == std::io::ErrorKind::NotFound => {
                ConfigError::FileNotFound(path.to_path_buf())
            }
            ini::Error::Io(e) => ConfigError::ReadError {
                path: path.to_path_buf(),
                source: e,
            },
            ini::Error::Parse(e) => ConfigError::ParseError {
                path: path.to_path_buf(),
                source: e,
            },
        })?;

        for (section, properties) in ini.iter() {
            for (key, value) in properties.iter() {
                self.set(section, key, value);
            }
        }
        Ok(())
    }

    /// Serializes the whole store to `path`, replacing the file.
    ///
    /// Global keys come first, without a header, followed by one
    /// `[section]` block per named section.
    pub fn write(&self, path: &Path) -> Result<(), ConfigError> {
        let mut ini = Ini::new();
        for (key, value) in &self.global {
            ini.with_general_section().set(key.as_str(), value.as_str());
        }
        for (name, values) in &self.sections {
            for (key, value) in values {
                ini.with_section(Some(name.as_str()))
                    .set(key.as_str(), value.as_str());
            }
        }

        ini.write_to_file_opt(path, write_options())
            .map_err(|e| ConfigError::WriteError {
                path: path.to_path_buf(),
                source: e,
            })
    }

    fn section_mut(&mut self, section: Option<&str>) -> &mut Section {
        match section {
            None => &mut self.global,
            Some(name) => self.sections.entry(name.to_string()).or_default(),
        }
    }
}

fn read_options() -> ParseOption {
    ParseOption {
        enabled_quote: false,
        enabled_escape: false,
        ..ParseOption::default()
    }
}

fn write_options() -> WriteOption {
    WriteOption {
        escape_policy: EscapePolicy::Nothing,
        ..WriteOption::default()
    }
}
