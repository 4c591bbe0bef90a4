//! Typed accessors over resolved string values.
//!
//! Every parse must consume the whole string: `"10abc"` is rejected rather
//! than read as `10`. Floats always use `.` as the decimal separator.

use std::str::FromStr;

use super::{Config, LookupError};

/// Parses `value` as `T`, rejecting empty input and trailing characters.
fn parse_strict<T: FromStr>(key: &str, value: &str, expected: &'static str) -> Result<T, LookupError> {
    value.parse::<T>().map_err(|_| LookupError::Invalid {
        key: key.to_string(),
        value: value.to_string(),
        expected,
    })
}

impl Config {
    fn lookup(&self, key: &str) -> Result<&str, LookupError> {
        self.get_value(key).ok_or_else(|| LookupError::not_found(key))
    }

    /// Returns an owned copy of the resolved value.
    pub fn get_string(&self, key: &str) -> Result<String, LookupError> {
        self.lookup(key).map(str::to_string)
    }

    /// Base-10 signed integer.
    pub fn get_int(&self, key: &str) -> Result<i32, LookupError> {
        parse_strict(key, self.lookup(key)?, "integer")
    }

    /// Base-10 unsigned integer. Negative values are rejected.
    pub fn get_uint(&self, key: &str) -> Result<u32, LookupError> {
        parse_strict(key, self.lookup(key)?, "unsigned integer")
    }

    /// Decimal or exponential float, independent of the host locale.
    pub fn get_float(&self, key: &str) -> Result<f32, LookupError> {
        parse_strict(key, self.lookup(key)?, "float")
    }

    /// Booleans are stored as integers; any nonzero value is `true`.
    pub fn get_bool(&self, key: &str) -> Result<bool, LookupError> {
        let value: i32 = parse_strict(key, self.lookup(key)?, "boolean integer")?;
        Ok(value != 0)
    }

    pub fn set_int(&mut self, key: &str, value: i32) {
        self.set_value(key, value.to_string());
    }

    pub fn set_uint(&mut self, key: &str, value: u32) {
        self.set_value(key, value.to_string());
    }

    pub fn set_float(&mut self, key: &str, value: f32) {
        self.set_value(key, value.to_string());
    }

    pub fn set_bool(&mut self, key: &str, value: bool) {
        self.set_int(key, i32::from(value));
    }

    pub fn set_default_int(&mut self, key: &str, value: i32) {
        self.set_default_value(key, value.to_string());
    }

    pub fn set_default_uint(&mut self, key: &str, value: u32) {
        self.set_default_value(key, value.to_string());
    }

    pub fn set_default_float(&mut self, key: &str, value: f32) {
        self.set_default_value(key, value.to_string());
    }

    pub fn set_default_bool(&mut self, key: &str, value: bool) {
        self.set_default_int(key, i32::from(value));
    }
}
