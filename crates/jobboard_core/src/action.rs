use jobboard_dom::ElementId;

use crate::state::{Filter, JobStatus};

/// Closed classification of a click, resolved before any mutation runs.
///
/// The two delegated handlers turn a raw click target into one of these and
/// only then apply it; nothing downstream re-probes the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Delete the job owning `entry`.
    Delete { entry: ElementId },
    /// Tag the job owning `entry` with `status`.
    SetStatus { entry: ElementId, status: JobStatus },
    /// Switch the visible subset to the clicked tab's filter.
    SelectTab { tab: ElementId, filter: Filter },
    /// Click landed on nothing actionable.
    Ignored,
}
