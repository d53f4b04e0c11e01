//! Page-level UI configuration.
//!
//! Every knob has a compiled-in default. A page may override any of them with
//! `data-ui-*` attributes on `<body>`; [`UiConfig::from_attributes`] takes the
//! attribute lookup as a closure so parsing stays testable off-browser.

use crate::error::UiError;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_AUTOSAVE_ATTRIBUTE: &str = "data-autosave";
pub const DEFAULT_DRAFT_PREFIX: &str = "form_";
pub const DEFAULT_REMINDER_MS: u32 = 5000;
pub const DEFAULT_NOTIFICATION_MS: u32 = 3000;
pub const DEFAULT_SUBMIT_REENABLE_MS: u32 = 5000;

pub const ATTR_AUTOSAVE_ATTRIBUTE: &str = "data-ui-autosave-attribute";
pub const ATTR_DRAFT_PREFIX: &str = "data-ui-draft-prefix";
pub const ATTR_REMINDER_MS: &str = "data-ui-reminder-ms";
pub const ATTR_NOTIFICATION_MS: &str = "data-ui-notification-ms";
pub const ATTR_SUBMIT_REENABLE_MS: &str = "data-ui-submit-reenable-ms";
pub const ATTR_LOG_LEVEL: &str = "data-ui-log-level";

/// Fire-once timer durations, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiTimeouts {
    pub reminder_ms: u32,
    pub notification_ms: u32,
    pub submit_reenable_ms: u32,
}

impl Default for UiTimeouts {
    fn default() -> Self {
        Self {
            reminder_ms: DEFAULT_REMINDER_MS,
            notification_ms: DEFAULT_NOTIFICATION_MS,
            submit_reenable_ms: DEFAULT_SUBMIT_REENABLE_MS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiConfig {
    /// Marker attribute that opts a form into draft autosave.
    pub autosave_attribute: String,
    /// Prefix prepended to the form identifier to build the storage key.
    pub draft_prefix: String,
    pub timeouts: UiTimeouts,
    pub log_level: log::Level,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            autosave_attribute: DEFAULT_AUTOSAVE_ATTRIBUTE.to_owned(),
            draft_prefix: DEFAULT_DRAFT_PREFIX.to_owned(),
            timeouts: UiTimeouts::default(),
            log_level: log::Level::Info,
        }
    }
}

impl UiConfig {
    /// Build config from attribute overrides.
    ///
    /// `lookup` returns the raw attribute value for a name, or `None` when the
    /// attribute is absent. Absent attributes keep their default.
    pub fn from_attributes<F>(lookup: F) -> Result<Self, UiError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let autosave_attribute =
            parse_non_empty(ATTR_AUTOSAVE_ATTRIBUTE, lookup(ATTR_AUTOSAVE_ATTRIBUTE), &defaults.autosave_attribute)?;
        let draft_prefix = parse_non_empty(ATTR_DRAFT_PREFIX, lookup(ATTR_DRAFT_PREFIX), &defaults.draft_prefix)?;
        let timeouts = UiTimeouts {
            reminder_ms: parse_ms(ATTR_REMINDER_MS, lookup(ATTR_REMINDER_MS), defaults.timeouts.reminder_ms)?,
            notification_ms: parse_ms(
                ATTR_NOTIFICATION_MS,
                lookup(ATTR_NOTIFICATION_MS),
                defaults.timeouts.notification_ms,
            )?,
            submit_reenable_ms: parse_ms(
                ATTR_SUBMIT_REENABLE_MS,
                lookup(ATTR_SUBMIT_REENABLE_MS),
                defaults.timeouts.submit_reenable_ms,
            )?,
        };
        let log_level = parse_log_level(lookup(ATTR_LOG_LEVEL).as_deref(), defaults.log_level)?;

        Ok(Self { autosave_attribute, draft_prefix, timeouts, log_level })
    }
}

fn parse_non_empty(attr: &str, raw: Option<String>, default: &str) -> Result<String, UiError> {
    match raw {
        None => Ok(default.to_owned()),
        Some(value) => {
            let trimmed = value.trim();
            if trimmed.is_empty() {
                Err(UiError::Config(format!("{attr} must not be empty")))
            } else {
                Ok(trimmed.to_owned())
            }
        }
    }
}

fn parse_ms(attr: &str, raw: Option<String>, default: u32) -> Result<u32, UiError> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse::<u32>()
            .map_err(|_| UiError::Config(format!("{attr}: expected milliseconds, got '{value}'"))),
    }
}

fn parse_log_level(raw: Option<&str>, default: log::Level) -> Result<log::Level, UiError> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse::<log::Level>()
            .map_err(|_| UiError::Config(format!("unknown {ATTR_LOG_LEVEL}: {value}"))),
    }
}
