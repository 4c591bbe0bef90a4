//! Declarative mapping between config keys and [`Options`] fields.
//!
//! [`BINDINGS`] is the compatibility contract for the persisted file: external
//! tools and hand edits rely on these exact key names and token spellings.
//! [`Config::map_into`] and [`Config::export_defaults`] walk the table in
//! opposite directions.

use std::fmt;

use tracing::trace;

use super::{Config, IdleOptimization, LookupError, Options, Store};

/// Read and write access to one field of [`Options`].
pub struct Accessor<T> {
    pub get: fn(&Options) -> &T,
    pub get_mut: fn(&mut Options) -> &mut T,
}

impl<T> Clone for Accessor<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Accessor<T> {}

/// The field a binding targets, tagged with its value type.
#[derive(Clone, Copy)]
pub enum Field {
    Str(Accessor<Option<String>>),
    Int(Accessor<i32>),
    UInt(Accessor<u32>),
    Float(Accessor<f32>),
    /// Persisted as `0`/`1`.
    Bool(Accessor<bool>),
    /// Persisted as a lowercase token, matched case-insensitively.
    Idle(Accessor<IdleOptimization>),
}

impl Field {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Str(_) => "string",
            Self::Int(_) => "integer",
            Self::UInt(_) => "unsigned integer",
            Self::Float(_) => "float",
            Self::Bool(_) => "boolean",
            Self::Idle(_) => "idle optimization",
        }
    }
}

/// One config key and the options field it maps to.
#[derive(Clone, Copy)]
pub struct Binding {
    pub key: &'static str,
    pub field: Field,
}

impl fmt::Debug for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Binding")
            .field("key", &self.key)
            .field("kind", &self.field.kind())
            .finish()
    }
}

macro_rules! bind {
    ($key:literal, $kind:ident, $field:ident) => {
        Binding {
            key: $key,
            field: Field::$kind(Accessor {
                get: |o| &o.$field,
                get_mut: |o| &mut o.$field,
            }),
        }
    };
}

pub static BINDINGS: &[Binding] = &[
    bind!("bios", Str, bios),
    bind!("logLevel", Int, log_level),
    bind!("frameskip", Int, frameskip),
    bind!("volume", Int, volume),
    bind!("rewindBufferCapacity", Int, rewind_buffer_capacity),
    bind!("rewindBufferInterval", Int, rewind_buffer_interval),
    bind!("fpsTarget", Float, fps_target),
    bind!("audioBuffers", UInt, audio_buffers),
    bind!("useBios", Bool, use_bios),
    bind!("audioSync", Bool, audio_sync),
    bind!("videoSync", Bool, video_sync),
    bind!("lockAspectRatio", Bool, lock_aspect_ratio),
    bind!("resampleVideo", Bool, resample_video),
    bind!("suspendScreensaver", Bool, suspend_screensaver),
    bind!("mute", Bool, mute),
    bind!("skipBios", Bool, skip_bios),
    bind!("rewindEnable", Bool, rewind_enable),
    bind!("fullscreen", Bool, fullscreen),
    bind!("width", Int, width),
    bind!("height", Int, height),
    bind!("idleOptimization", Idle, idle_optimization),
];

impl Binding {
    /// Copies the resolved value for this key into `options`.
    ///
    /// On any error the field is left as it was.
    pub fn apply(&self, config: &Config, options: &mut Options) -> Result<(), LookupError> {
        let key = self.key;
        match &self.field {
            Field::Str(a) => *(a.get_mut)(options) = Some(config.get_string(key)?),
            Field::Int(a) => *(a.get_mut)(options) = config.get_int(key)?,
            Field::UInt(a) => *(a.get_mut)(options) = config.get_uint(key)?,
            Field::Float(a) => *(a.get_mut)(options) = config.get_float(key)?,
            Field::Bool(a) => *(a.get_mut)(options) = config.get_bool(key)?,
            Field::Idle(a) => {
                let raw = config.get_value(key).ok_or_else(|| LookupError::not_found(key))?;
                let value: IdleOptimization = raw.parse().map_err(|_| LookupError::Invalid {
                    key: key.to_string(),
                    value: raw.to_string(),
                    expected: self.field.kind(),
                })?;
                *(a.get_mut)(options) = value;
            }
        }
        Ok(())
    }

    /// Writes the field's serialized value into the global section of `store`.
    ///
    /// An unset string field removes the key.
    pub fn export(&self, options: &Options, store: &mut Store) {
        let key = self.key;
        match &self.field {
            Field::Str(a) => match (a.get)(options) {
                Some(value) => store.set(None, key, value.as_str()),
                None => {
                    store.remove(None, key);
                }
            },
            Field::Int(a) => store.set_int(None, key, *(a.get)(options)),
            Field::UInt(a) => store.set_uint(None, key, *(a.get)(options)),
            Field::Float(a) => store.set_float(None, key, *(a.get)(options)),
            Field::Bool(a) => store.set_bool(None, key, *(a.get)(options)),
            Field::Idle(a) => store.set(None, key, (a.get)(options).as_token()),
        }
    }
}

impl Config {
    /// Overwrites each field of `options` whose key resolves to a valid value.
    ///
    /// Missing and malformed values are skipped; the field keeps whatever it
    /// held before. Use the typed accessors to tell the two apart.
    pub fn map_into(&self, options: &mut Options) {
        for binding in BINDINGS {
            match binding.apply(self, options) {
                Ok(()) => {}
                Err(e) if e.is_not_found() => {}
                Err(e) => trace!(key = binding.key, error = %e, "ignoring config value"),
            }
        }
    }

    /// Seeds the global defaults section from `options`, replacing every
    /// bound key.
    pub fn export_defaults(&mut self, options: &Options) {
        for binding in BINDINGS {
            binding.export(options, &mut self.defaults);
        }
    }
}
