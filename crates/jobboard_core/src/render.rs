use jobboard_dom::ElementId;

use crate::markup;
use crate::state::JobBoard;
use crate::view_model::DashboardCounts;

impl JobBoard {
    /// Recomputes visibility for every card under the current filter,
    /// refreshes the visible-count label, and toggles the empty state.
    ///
    /// Runs after every state change; visibility is always derived from the
    /// full collection, never patched.
    pub fn render_jobs(&mut self) {
        let cards: Vec<(ElementId, bool)> = self
            .jobs
            .iter()
            .map(|record| (record.entry, self.filter.admits(record.status)))
            .collect();

        let mut visible = 0usize;
        for (entry, show) in cards {
            self.document.set_hidden(entry, !show);
            if show {
                visible += 1;
            }
        }

        if let Some(label) = self.refs.jobs_count {
            self.document.set_text(label, format!("{visible} jobs"));
        }

        if visible == 0 {
            if let Some(empty) = self.ensure_empty_state() {
                self.document.set_hidden(empty, false);
            }
        } else if let Some(empty) = self.empty_state {
            self.document.set_hidden(empty, true);
        }
    }

    /// Builds the empty-state element on first use; later renders only toggle
    /// its visibility. Without a container there is nowhere to put it, and
    /// the fallback is skipped.
    fn ensure_empty_state(&mut self) -> Option<ElementId> {
        if self.empty_state.is_none() {
            let container = self.refs.container?;
            let empty = self
                .document
                .element("div")
                .class(markup::EMPTY_STATE_CLASS)
                .text(markup::EMPTY_STATE_TEXT)
                .child_of(container);
            self.empty_state = Some(empty);
        }
        self.empty_state
    }

    /// Full-pass dashboard tally, written to whichever summary values the
    /// page has. Counts are recomputed from scratch on every data mutation so
    /// they cannot drift.
    pub fn refresh_dashboard(&mut self) {
        let counts = DashboardCounts::tally(&self.jobs);
        let writes = [
            (self.refs.total_value, counts.total),
            (self.refs.interview_value, counts.interview),
            (self.refs.rejected_value, counts.rejected),
        ];
        for (slot, value) in writes {
            if let Some(slot) = slot {
                self.document.set_text(slot, value.to_string());
            }
        }
    }
}
