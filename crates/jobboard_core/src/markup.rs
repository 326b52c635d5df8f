//! The class, attribute, and label vocabulary shared between the widget and
//! the markup it is mounted on. The app builds its page with these names and
//! the controller locates page pieces through them.

/// Container holding the job cards.
pub const JOB_LIST_CLASS: &str = "job-list";
/// One job card.
pub const JOB_CARD_CLASS: &str = "job-card";
/// Bar wrapping the filter tab controls.
pub const TAB_BAR_CLASS: &str = "tabs";
/// Highlight class carried by exactly one tab control at a time.
pub const TAB_ACTIVE_CLASS: &str = "active";
/// Trash glyph inside the delete control.
pub const TRASH_ICON_CLASS: &str = "icon-trash";
/// The circular delete control wrapping the trash glyph.
pub const DELETE_CONTROL_CLASS: &str = "delete-btn";
/// Badge styling for a job tagged Interview.
pub const BADGE_SUCCESS_CLASS: &str = "badge-success";
/// Badge styling for a job tagged Rejected.
pub const BADGE_DANGER_CLASS: &str = "badge-danger";
/// Attribute mirroring a card's status for external styling hooks.
pub const STATUS_ATTR: &str = "data-status";

/// Dashboard section, its summary cards, and their count value elements.
pub const DASHBOARD_CLASS: &str = "dashboard";
pub const SUMMARY_CARD_CLASS: &str = "summary-card";
pub const COUNT_VALUE_CLASS: &str = "count";
/// Summary-card heading the total count is keyed by.
pub const TOTAL_HEADING: &str = "Total";
/// Used both as a summary-card heading and as a tab label.
pub const INTERVIEW_LABEL: &str = "Interview";
pub const REJECTED_LABEL: &str = "Rejected";
/// Label of the tab showing the untouched subset.
pub const ALL_TAB_LABEL: &str = "All";

/// Label showing the number of currently visible jobs.
pub const JOBS_COUNT_CLASS: &str = "jobs-count";
/// The lazily-built fallback block shown when no job is visible.
pub const EMPTY_STATE_CLASS: &str = "empty-state";
pub const EMPTY_STATE_TEXT: &str = "No jobs to show here.";

/// Tag of interactive controls (tab and status buttons).
pub const CONTROL_TAG: &str = "button";
