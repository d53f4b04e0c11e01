//! Attendance marking form behavior: row highlighting, bulk marking,
//! submission gating, notifications, and date limits.
//!
//! DESIGN
//! ======
//! Decisions live here as plain functions over strings and counts. The
//! hydrate-only `dom::attendance` module applies them to the page.

use std::fmt;
use std::str::FromStr;

#[cfg(test)]
#[path = "attendance_test.rs"]
mod attendance_test;

/// Selector for the attendance marking form.
pub const MARKING_FORM_SELECTOR: &str = "form[action*=\"mark_attendance\"]";

/// Every row class an attendance status can apply.
pub const ROW_STATUS_CLASSES: [&str; 3] = ["table-success", "table-danger", "table-warning"];

/// Class that marks a date input as an attendance date.
pub const ATTENDANCE_DATE_CLASS: &str = "attendance-date";

/// Button label shown while a submission is in flight.
pub const SUBMIT_BUSY_LABEL: &str = "<i class=\"bi bi-hourglass-split\"></i> Saving...";

pub const SAVE_REMINDER_ID: &str = "save-reminder";

pub const SAVE_REMINDER_HTML: &str = "<i class=\"bi bi-exclamation-triangle\"></i> Don't forget to save your changes!\n\
     <button type=\"button\" class=\"btn-close\" onclick=\"this.parentElement.remove()\"></button>";

pub const NOTHING_MARKED_MESSAGE: &str = "Please mark attendance for at least one student";

/// `window` functions the marking page's bulk buttons call from `onclick`.
pub const BULK_MARK_GLOBALS: [(&str, AttendanceStatus); 2] = [
    ("markAllPresent", AttendanceStatus::Present),
    ("markAllAbsent", AttendanceStatus::Absent),
];

/// Status value posted by a marking radio button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttendanceStatus {
    Present,
    Absent,
    Late,
}

impl AttendanceStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Present => "Present",
            Self::Absent => "Absent",
            Self::Late => "Late",
        }
    }

    /// Bootstrap table-row class highlighting this status.
    pub fn row_class(self) -> &'static str {
        match self {
            Self::Present => "table-success",
            Self::Absent => "table-danger",
            Self::Late => "table-warning",
        }
    }

    /// Notification shown after marking every student with this status.
    pub fn bulk_notification(self) -> Notification {
        let kind = match self {
            Self::Present => NotificationKind::Success,
            Self::Absent | Self::Late => NotificationKind::Warning,
        };
        Notification { message: format!("All students marked as {}", self.as_str()), kind }
    }

    /// Selector for the marking radios carrying this status.
    pub fn radio_selector(self) -> String {
        format!("input[type=\"radio\"][value=\"{}\"]", self.as_str())
    }
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Values are matched exactly, as the marking form posts them.
impl FromStr for AttendanceStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Present" => Ok(Self::Present),
            "Absent" => Ok(Self::Absent),
            "Late" => Ok(Self::Late),
            other => Err(format!("unknown attendance status: {other}")),
        }
    }
}

/// Row class for a raw radio value; unknown values clear highlighting.
pub fn row_class_for(value: &str) -> Option<&'static str> {
    match value.parse::<AttendanceStatus>() {
        Ok(status) => Some(status.row_class()),
        Err(_) => None,
    }
}

/// Whether a marking form may be submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitGate {
    /// Nothing marked: block and tell the user.
    Reject(Notification),
    /// Some students unmarked: ask before submitting.
    Confirm { prompt: String },
    Proceed,
}

impl SubmitGate {
    /// Decide from the number of checked radios and the number of students
    /// (one `Present` radio per student).
    pub fn evaluate(marked: usize, total: usize) -> Self {
        if marked == 0 {
            return Self::Reject(Notification::new(NOTHING_MARKED_MESSAGE, NotificationKind::Error));
        }
        if marked < total {
            return Self::Confirm {
                prompt: format!(
                    "You have only marked attendance for {marked} out of {total} students. Continue?"
                ),
            };
        }
        Self::Proceed
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationKind {
    Success,
    Warning,
    Error,
    #[default]
    Info,
}

impl NotificationKind {
    /// Bootstrap alert variant; errors render as `danger`.
    pub fn alert_variant(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "danger",
            Self::Info => "info",
        }
    }
}

/// Transient banner shown at the top of the page container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
}

impl Notification {
    pub fn new(message: &str, kind: NotificationKind) -> Self {
        Self { message: message.to_owned(), kind }
    }

    /// Class list of the alert element.
    pub fn alert_class(&self) -> String {
        format!("alert alert-{} alert-dismissible fade show", self.kind.alert_variant())
    }

    /// Inner HTML of the alert element.
    pub fn inner_html(&self) -> String {
        format!(
            "{}<button type=\"button\" class=\"btn-close\" data-bs-dismiss=\"alert\"></button>",
            self.message
        )
    }
}

/// Whether a date input holds an attendance date (and must not be in the future).
pub fn is_attendance_date_input(name: &str, has_attendance_class: bool) -> bool {
    name == "date" || has_attendance_class
}

/// `YYYY-MM-DD` part of an ISO-8601 timestamp.
pub fn iso_date(timestamp: &str) -> &str {
    timestamp.split('T').next().unwrap_or(timestamp)
}
