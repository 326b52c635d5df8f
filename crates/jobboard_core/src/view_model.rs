use jobboard_dom::ElementId;

use crate::state::{Filter, JobBoard, JobRecord, JobStatus};

/// Dashboard totals, derived from the record collection by a full pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DashboardCounts {
    pub total: usize,
    pub interview: usize,
    pub rejected: usize,
}

impl DashboardCounts {
    pub fn tally(jobs: &[JobRecord]) -> Self {
        let mut counts = Self {
            total: jobs.len(),
            ..Self::default()
        };
        for record in jobs {
            match record.status {
                JobStatus::Interview => counts.interview += 1,
                JobStatus::Rejected => counts.rejected += 1,
                JobStatus::None => {}
            }
        }
        counts
    }
}

/// Snapshot of one card as currently presented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobCardView {
    pub entry: ElementId,
    pub status: JobStatus,
    pub visible: bool,
    /// Current badge text, when the card has a badge at all.
    pub badge_label: Option<String>,
}

/// Derived presentation state of the whole widget. Nothing here is cached;
/// every call reads the collection and the document afresh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardViewModel {
    pub filter: Filter,
    pub counts: DashboardCounts,
    pub visible_count: usize,
    pub jobs: Vec<JobCardView>,
    pub empty_state_shown: bool,
}

impl JobBoard {
    pub fn view(&self) -> BoardViewModel {
        let jobs: Vec<JobCardView> = self
            .jobs
            .iter()
            .map(|record| JobCardView {
                entry: record.entry,
                status: record.status,
                visible: !self.document.is_hidden(record.entry),
                badge_label: record.badge.map(|badge| self.document.label_text(badge)),
            })
            .collect();
        let visible_count = jobs.iter().filter(|job| job.visible).count();

        BoardViewModel {
            filter: self.filter,
            counts: DashboardCounts::tally(&self.jobs),
            visible_count,
            jobs,
            empty_state_shown: self
                .empty_state
                .is_some_and(|empty| !self.document.is_hidden(empty)),
        }
    }
}
