//! Layered lookup across the session and defaults stores.

use super::Store;

/// Prefix that turns a scope identifier into its section name.
pub const SCOPE_PREFIX: &str = "ports.";

/// Which of the two stores a layer reads from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Session,
    Defaults,
}

/// One candidate in the resolution chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layer<'a> {
    pub tier: Tier,
    pub section: Option<&'a str>,
}

/// Layered configuration: a persisted session store over a defaults store,
/// each with an optional scoped section above the global one.
///
/// Lookups walk the chain returned by [`Config::resolution_chain`]:
///
/// 1. session, scoped section (only when a scope is set)
/// 2. session, global section
/// 3. defaults, scoped section (only when a scope is set)
/// 4. defaults, global section
///
/// Any session value outranks any default; within a tier the scope wins.
///
/// Not internally synchronized. Wrap the whole `Config` in a lock to share it.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub(super) session: Store,
    pub(super) defaults: Store,
    scope: Option<String>,
    scope_section: Option<String>,
}

impl Config {
    /// Creates an empty configuration. `scope` selects the `ports.<scope>`
    /// section as the highest-priority lookup target.
    pub fn new(scope: Option<&str>) -> Self {
        Self {
            session: Store::new(),
            defaults: Store::new(),
            scope: scope.map(str::to_string),
            scope_section: scope.map(|s| format!("{SCOPE_PREFIX}{s}")),
        }
    }

    pub fn scope(&self) -> Option<&str> {
        self.scope.as_deref()
    }

    /// Section name derived from the scope, e.g. `ports.gba`.
    pub fn scope_section(&self) -> Option<&str> {
        self.scope_section.as_deref()
    }

    /// The ordered layers consulted by [`get_value`](Self::get_value).
    ///
    /// Without a scope only the two global layers are listed.
    pub fn resolution_chain(&self) -> impl Iterator<Item = Layer<'_>> + '_ {
        let scoped = self.scope_section();
        [Tier::Session, Tier::Defaults]
            .into_iter()
            .flat_map(move |tier| {
                let scoped = scoped.map(|section| Layer {
                    tier,
                    section: Some(section),
                });
                scoped.into_iter().chain([Layer {
                    tier,
                    section: None,
                }])
            })
    }

    /// Returns the first value present along the resolution chain.
    ///
    /// The result borrows from the store that holds it; typed accessors such
    /// as [`get_string`](Self::get_string) return owned copies instead.
    pub fn get_value(&self, key: &str) -> Option<&str> {
        self.resolution_chain()
            .find_map(|layer| self.store(layer.tier).get(layer.section, key))
    }

    /// Sets a session value in the scoped section, or the global one when
    /// unscoped.
    pub fn set_value(&mut self, key: &str, value: impl Into<String>) {
        let section = self.scope_section.as_deref();
        self.session.set(section, key, value);
    }

    /// Sets a default value in the scoped section, or the global one when
    /// unscoped.
    pub fn set_default_value(&mut self, key: &str, value: impl Into<String>) {
        let section = self.scope_section.as_deref();
        self.defaults.set(section, key, value);
    }

    pub fn store(&self, tier: Tier) -> &Store {
        match tier {
            Tier::Session => &self.session,
            Tier::Defaults => &self.defaults,
        }
    }

    pub fn store_mut(&mut self, tier: Tier) -> &mut Store {
        match tier {
            Tier::Session => &mut self.session,
            Tier::Defaults => &mut self.defaults,
        }
    }

    pub fn session(&self) -> &Store {
        &self.session
    }

    pub fn defaults(&self) -> &Store {
        &self.defaults
    }

    /// Store used by the input-binding subsystem.
    pub fn input_store_mut(&mut self) -> &mut Store {
        &mut self.session
    }

    /// Store used for per-game overrides.
    pub fn overrides_store_mut(&mut self) -> &mut Store {
        &mut self.session
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCOPED: Option<&str> = Some("ports.gba");

    fn fully_layered() -> Config {
        let mut config = Config::new(Some("gba"));
        config.session.set(SCOPED, "volume", "1");
        config.session.set(None, "volume", "2");
        config.defaults.set(SCOPED, "volume", "3");
        config.defaults.set(None, "volume", "4");
        config
    }

    #[test]
    fn test_scope_section_name() {
        let config = Config::new(Some("gba"));
        assert_eq!(config.scope(), Some("gba"));
        assert_eq!(config.scope_section(), Some("ports.gba"));

        let config = Config::new(None);
        assert_eq!(config.scope(), None);
        assert_eq!(config.scope_section(), None);
    }

    #[test]
    fn test_chain_order() {
        let config = Config::new(Some("gba"));
        let chain: Vec<_> = config
            .resolution_chain()
            .map(|l| (l.tier, l.section))
            .collect();

        assert_eq!(
            chain,
            vec![
                (Tier::Session, SCOPED),
                (Tier::Session, None),
                (Tier::Defaults, SCOPED),
                (Tier::Defaults, None),
            ]
        );
    }

    #[test]
    fn test_chain_without_scope() {
        let config = Config::new(None);
        let chain: Vec<_> = config
            .resolution_chain()
            .map(|l| (l.tier, l.section))
            .collect();

        assert_eq!(chain, vec![(Tier::Session, None), (Tier::Defaults, None)]);
    }

    #[test]
    fn test_chain_is_lazy() {
        let config = Config::new(Some("gba"));
        let mut chain = config.resolution_chain();

        assert_eq!(
            chain.next(),
            Some(Layer {
                tier: Tier::Session,
                section: SCOPED,
            })
        );
        assert_eq!(chain.count(), 3);
    }

    #[test]
    fn test_scoped_session_wins() {
        let config = fully_layered();
        assert_eq!(config.get_value("volume"), Some("1"));
    }

    #[test]
    fn test_fallback_through_each_layer() {
        let mut config = fully_layered();

        config.session.remove(SCOPED, "volume");
        assert_eq!(config.get_value("volume"), Some("2"));

        config.session.remove(None, "volume");
        assert_eq!(config.get_value("volume"), Some("3"));

        config.defaults.remove(SCOPED, "volume");
        assert_eq!(config.get_value("volume"), Some("4"));

        config.defaults.remove(None, "volume");
        assert_eq!(config.get_value("volume"), None);
    }

    #[test]
    fn test_global_session_outranks_scoped_defaults() {
        let mut config = Config::new(Some("gba"));
        config.defaults.set(SCOPED, "frameskip", "3");
        config.session.set(None, "frameskip", "1");

        assert_eq!(config.get_value("frameskip"), Some("1"));
    }

    #[test]
    fn test_unscoped_ignores_scoped_sections() {
        let mut config = Config::new(None);
        config.session.set(SCOPED, "mute", "1");
        config.defaults.set(SCOPED, "mute", "1");
        assert_eq!(config.get_value("mute"), None);

        config.defaults.set(None, "mute", "0");
        assert_eq!(config.get_value("mute"), Some("0"));
    }

    #[test]
    fn test_setters_follow_scope() {
        let mut scoped = Config::new(Some("gba"));
        scoped.set_value("width", "480");
        scoped.set_default_value("height", "320");
        assert_eq!(scoped.session().get(SCOPED, "width"), Some("480"));
        assert_eq!(scoped.defaults().get(SCOPED, "height"), Some("320"));

        let mut global = Config::new(None);
        global.set_value("width", "480");
        assert_eq!(global.session().get(None, "width"), Some("480"));
    }

    #[test]
    fn test_input_and_override_stores_are_session() {
        let mut config = Config::new(None);
        config.input_store_mut().set(Some("gba.input.SDLB"), "keyA", "15");
        config.overrides_store_mut().set(Some("AGB-AXVE"), "savetype", "SRAM");

        assert_eq!(config.session().get(Some("gba.input.SDLB"), "keyA"), Some("15"));
        assert_eq!(config.store(Tier::Session).get(Some("AGB-AXVE"), "savetype"), Some("SRAM"));
    }
}
