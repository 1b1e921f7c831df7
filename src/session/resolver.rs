//! Session resolution context
//!
//! Owns the stores, the timezone, the clock and the shared-configuration
//! cache. One resolver is built per process and handed to every command.

use crate::consts::{
    ACTIVE_SESSION_KEY, DEFAULT_FUTURE_SESSIONS, DEFAULT_PAST_SESSIONS, MAX_START_YEAR,
    MIN_START_YEAR, SHARED_CONFIG_KEY,
};
use crate::error::AppError;
use crate::store::{BoxedDeviceStore, BoxedSettingsStore};
use crate::utils::{Clock, Timezone, debug_enabled};

use super::cache::ConfigCache;
use super::clamp::{ClampRequest, ClampedRange, clamp_to_session};
use super::control::{DateControl, apply_default_range};
use super::label::{SessionYears, parse_label};
use super::range::SessionRange;
use super::shared::SessionConfig;

/// How many sessions before and after the current one to synthesize when no
/// shared list is configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SessionWindow {
    pub(crate) past: u32,
    pub(crate) future: u32,
}

impl Default for SessionWindow {
    fn default() -> Self {
        Self {
            past: DEFAULT_PAST_SESSIONS,
            future: DEFAULT_FUTURE_SESSIONS,
        }
    }
}

pub(crate) struct SessionResolver {
    settings: BoxedSettingsStore,
    device: BoxedDeviceStore,
    timezone: Timezone,
    clock: Clock,
    window: SessionWindow,
    cache: ConfigCache,
}

impl SessionResolver {
    pub(crate) fn new(
        settings: BoxedSettingsStore,
        device: BoxedDeviceStore,
        timezone: Timezone,
        clock: Clock,
    ) -> Self {
        Self {
            settings,
            device,
            timezone,
            clock,
            window: SessionWindow::default(),
            cache: ConfigCache::default(),
        }
    }

    pub(crate) fn with_window(mut self, window: SessionWindow) -> Self {
        self.window = window;
        self
    }

    pub(crate) fn window(&self) -> SessionWindow {
        self.window
    }

    fn current_years(&self) -> SessionYears {
        SessionYears::containing(self.clock.today(self.timezone))
    }

    /// Label of the academic year containing today.
    pub(crate) fn current_label(&self) -> String {
        self.current_years().label()
    }

    /// Parse `label`, substituting the current session when it is malformed.
    /// The flag is set when the substitution happened.
    pub(crate) fn parse_label(&self, label: &str) -> (SessionYears, bool) {
        match parse_label(label) {
            Some(years) => (years, false),
            None => (self.current_years(), true),
        }
    }

    pub(crate) fn session_range(&self, label: &str) -> SessionRange {
        let (years, fallback) = self.parse_label(label);
        if !fallback {
            return SessionRange::new(label.trim().to_string(), years, self.timezone, false);
        }
        if debug_enabled() {
            eprintln!(
                "[DEBUG] Unrecognised session label {:?}, using {}",
                label,
                years.label()
            );
        }
        SessionRange::new(years.label(), years, self.timezone, true)
    }

    /// Sessions offered for selection. A loaded shared list wins; otherwise
    /// a contiguous run around the current session is synthesized, stopping
    /// at the first and last four-digit start years.
    pub(crate) fn list_labels(&self, window: SessionWindow) -> Vec<String> {
        if let Some(config) = self.cache.peek()
            && !config.sessions.is_empty()
        {
            return config.sessions;
        }
        let current = self.current_years();
        let past = i32::try_from(window.past)
            .unwrap_or(i32::MAX)
            .min(current.start_year - MIN_START_YEAR);
        let future = i32::try_from(window.future)
            .unwrap_or(i32::MAX)
            .min(MAX_START_YEAR - current.start_year);
        (-past..=future)
            .map(|n| current.offset(n).label())
            .collect()
    }

    /// Read the shared configuration once per process. Read failures and
    /// malformed values leave it unset.
    pub(crate) fn load_shared_config(&self) -> Option<SessionConfig> {
        self.cache.get_or_load(|| {
            let value = match self.settings.read(SHARED_CONFIG_KEY) {
                Ok(Some(value)) => value,
                Ok(None) => return None,
                Err(e) => {
                    if debug_enabled() {
                        eprintln!(
                            "[DEBUG] Failed to read shared sessions from {}: {}",
                            self.settings.name(),
                            e
                        );
                    }
                    return None;
                }
            };
            match serde_json::from_value::<SessionConfig>(value) {
                Ok(config) => Some(config.sanitize()),
                Err(e) => {
                    if debug_enabled() {
                        eprintln!("[DEBUG] Ignoring malformed shared sessions: {e}");
                    }
                    None
                }
            }
        })
    }

    /// Validate, normalize and overwrite the shared configuration. The cache
    /// only changes once the write has succeeded.
    pub(crate) fn save_shared_config<I, S>(
        &self,
        sessions: I,
        default: Option<&str>,
    ) -> Result<SessionConfig, AppError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let config = SessionConfig::normalize(sessions, default)?;
        let value = serde_json::to_value(&config)?;
        self.settings.write(SHARED_CONFIG_KEY, &value)?;
        self.cache.store(config.clone());
        Ok(config)
    }

    /// Device selection if it is a known session, else the shared default,
    /// else the current session.
    pub(crate) fn active_label(&self) -> String {
        let config = self.load_shared_config();

        if let Some(selected) = self.device.get(ACTIVE_SESSION_KEY) {
            if self.list_labels(self.window).contains(&selected) {
                return selected;
            }
            if debug_enabled() {
                eprintln!("[DEBUG] Device session {selected:?} is not a known session");
            }
        }

        if let Some(default) = config.as_ref().and_then(SessionConfig::default_label) {
            return default.to_string();
        }

        self.current_label()
    }

    /// Remember `label` for this device. Stored as given.
    pub(crate) fn set_active_label(&self, label: &str) {
        self.device.set(ACTIVE_SESSION_KEY, label);
    }

    fn requested_range(&self, label: Option<&str>) -> SessionRange {
        match label {
            Some(label) => self.session_range(label),
            None => self.session_range(&self.active_label()),
        }
    }

    pub(crate) fn clamp(&self, request: &ClampRequest) -> ClampedRange {
        let range = self.requested_range(request.session_label.as_deref());
        clamp_to_session(&range, &request.from, &request.to, self.timezone)
    }

    /// Fill two date controls with the session boundaries.
    pub(crate) fn apply_default_range(
        &self,
        from: &mut dyn DateControl,
        to: &mut dyn DateControl,
        label: Option<&str>,
        force: bool,
    ) {
        let range = self.requested_range(label);
        apply_default_range(from, to, &range, force);
    }
}
