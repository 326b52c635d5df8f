use board_logging::{board_debug, board_info, board_warn};
use jobboard_dom::ElementId;

use crate::markup;
use crate::state::{Filter, JobBoard, JobStatus};
use crate::Action;

impl JobBoard {
    /// Applies a classified action.
    ///
    /// The record index is resolved by card identity here, immediately before
    /// the mutation, so earlier deletions can never redirect an action to the
    /// wrong record.
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Delete { entry } => match self.index_of_entry(entry) {
                Some(index) => self.delete_job(index),
                None => board_debug!("delete click on stale card {entry:?} ignored"),
            },
            Action::SetStatus { entry, status } => match self.index_of_entry(entry) {
                Some(index) => self.update_job_status(index, status),
                None => board_debug!("status click on stale card {entry:?} ignored"),
            },
            Action::SelectTab { tab, filter } => self.select_tab(tab, filter),
            Action::Ignored => {}
        }
    }

    /// Tags the job at `index` with `status` and brings the card, its badge,
    /// the visible subset, and the dashboard in line in one step.
    ///
    /// Re-applying the current status is a harmless repeat. A card without a
    /// badge still gets its record and status tag updated; only the badge
    /// label is skipped.
    pub fn update_job_status(&mut self, index: usize, status: JobStatus) {
        let Some(record) = self.jobs.get_mut(index) else {
            board_warn!("status update for out-of-range job index {index} ignored");
            return;
        };
        record.status = status;
        let entry = record.entry;
        let badge = record.badge;

        self.document
            .set_attr(entry, markup::STATUS_ATTR, status.as_tag());
        if let Some(badge) = badge {
            self.document.set_text(badge, status.badge_label());
            self.document.remove_class(badge, markup::BADGE_SUCCESS_CLASS);
            self.document.remove_class(badge, markup::BADGE_DANGER_CLASS);
            match status {
                JobStatus::Interview => self.document.add_class(badge, markup::BADGE_SUCCESS_CLASS),
                JobStatus::Rejected => self.document.add_class(badge, markup::BADGE_DANGER_CLASS),
                JobStatus::None => {}
            }
        }
        board_info!("job {index} tagged {}", status.as_tag());

        self.render_jobs();
        self.refresh_dashboard();
    }

    /// Removes the job at `index` from the collection and detaches its card.
    /// Later records shift down by one; callers must re-resolve indices
    /// afterwards rather than cache them.
    pub fn delete_job(&mut self, index: usize) {
        if index >= self.jobs.len() {
            board_warn!("delete for out-of-range job index {index} ignored");
            return;
        }
        let record = self.jobs.remove(index);
        self.document.detach(record.entry);
        board_info!("job {index} deleted, {} remaining", self.jobs.len());

        self.render_jobs();
        self.refresh_dashboard();
    }

    /// Moves the selection highlight to `tab` and re-renders the list under
    /// `filter`. Dashboard counts are untouched: a tab change mutates no job
    /// data, so the totals cannot have moved.
    pub(crate) fn select_tab(&mut self, tab: ElementId, filter: Filter) {
        if let Some(tab_bar) = self.refs.tab_bar {
            let controls: Vec<ElementId> = self
                .document
                .descendants(tab_bar)
                .into_iter()
                .filter(|&id| self.document.tag(id) == markup::CONTROL_TAG)
                .collect();
            for control in controls {
                self.document.remove_class(control, markup::TAB_ACTIVE_CLASS);
            }
        }
        self.document.add_class(tab, markup::TAB_ACTIVE_CLASS);
        self.filter = filter;
        board_info!("filter switched to {filter:?}");
        self.render_jobs();
    }
}
