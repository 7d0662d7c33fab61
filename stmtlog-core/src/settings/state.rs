use crate::settings::{
    FilterConfig, LogFormat, LogLevel, SettingsError, StatementMatcher, TargetStatements,
};
use arc_swap::ArcSwap;
use once_cell::sync::Lazy;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

static GLOBAL: Lazy<Arc<FilterSettings>> = Lazy::new(|| Arc::new(FilterSettings::default()));

/// Immutable view of the filter configuration together with its compiled
/// statement matcher.
///
/// Safe to read from the event hot path. Replaced as a whole whenever any
/// setting changes.
#[derive(Debug, Clone)]
pub struct FilterSnapshot {
    config: FilterConfig,
    matcher: StatementMatcher,
}

impl FilterSnapshot {
    pub fn build(config: FilterConfig) -> Result<Self, SettingsError> {
        let matcher = StatementMatcher::compile(config.target_statements.as_slice())?;
        Ok(Self { config, matcher })
    }

    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    pub fn matcher(&self) -> &StatementMatcher {
        &self.matcher
    }
}

impl Default for FilterSnapshot {
    fn default() -> Self {
        Self::build(FilterConfig::default()).expect("default target statements must compile")
    }
}

/// Live filter configuration.
///
/// Reads never block: each event loads the current snapshot and keeps it for
/// the whole decision. Writers serialize on a mutex, derive the next snapshot
/// from the current one and swap it in.
#[derive(Debug)]
pub struct FilterSettings {
    current: ArcSwap<FilterSnapshot>,
    write_lock: Mutex<()>,
}

impl Default for FilterSettings {
    fn default() -> Self {
        Self::from_snapshot(FilterSnapshot::default())
    }
}

impl FilterSettings {
    pub fn new(config: FilterConfig) -> Result<Self, SettingsError> {
        Ok(Self::from_snapshot(FilterSnapshot::build(config)?))
    }

    fn from_snapshot(snapshot: FilterSnapshot) -> Self {
        Self {
            current: ArcSwap::from_pointee(snapshot),
            write_lock: Mutex::new(()),
        }
    }

    /// Process-wide settings, created with defaults on first use.
    pub fn global() -> Arc<FilterSettings> {
        Arc::clone(&GLOBAL)
    }

    pub fn snapshot(&self) -> Arc<FilterSnapshot> {
        self.current.load_full()
    }

    //-------------------------------------------------------------------------
    // Getters
    //-------------------------------------------------------------------------

    pub fn disabled(&self) -> bool {
        self.current.load().config.disabled
    }

    pub fn log_level(&self) -> LogLevel {
        self.current.load().config.log_level
    }

    pub fn log_format(&self) -> LogFormat {
        self.current.load().config.log_format.clone()
    }

    pub fn target_statements(&self) -> Vec<String> {
        self.current.load().config.target_statements.to_vec()
    }

    //-------------------------------------------------------------------------
    // Setters
    //-------------------------------------------------------------------------

    pub fn set_disabled(&self, disabled: bool) {
        self.update(|cfg| cfg.disabled = disabled);
    }

    pub fn set_log_level(&self, level: LogLevel) {
        self.update(|cfg| cfg.log_level = level);
    }

    pub fn set_log_format(&self, format: LogFormat) {
        self.update(|cfg| cfg.log_format = format);
    }

    /// Replaces the keyword list and recompiles the matcher.
    ///
    /// On error the previous keywords stay in effect.
    pub fn set_target_statements<I, S>(&self, statements: I) -> Result<(), SettingsError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let statements: TargetStatements = statements.into_iter().map(Into::into).collect();
        let matcher = StatementMatcher::compile(statements.as_slice())?;

        let _guard = self.lock();
        let mut config = self.current.load().config.clone();
        config.target_statements = statements;
        self.current.store(Arc::new(FilterSnapshot { config, matcher }));

        Ok(())
    }

    /// Swaps in a complete configuration at once.
    pub fn replace(&self, config: FilterConfig) -> Result<(), SettingsError> {
        let snapshot = FilterSnapshot::build(config)?;

        let _guard = self.lock();
        self.current.store(Arc::new(snapshot));

        Ok(())
    }

    /// Restores every setting to its default.
    pub fn reset(&self) {
        let _guard = self.lock();
        self.current.store(Arc::new(FilterSnapshot::default()));
    }

    fn update(&self, apply: impl FnOnce(&mut FilterConfig)) {
        let _guard = self.lock();

        let current = self.current.load();
        let mut config = current.config.clone();
        apply(&mut config);

        self.current.store(Arc::new(FilterSnapshot {
            config,
            matcher: current.matcher.clone(),
        }));
    }

    fn lock(&self) -> MutexGuard<'_, ()> {
        self.write_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
