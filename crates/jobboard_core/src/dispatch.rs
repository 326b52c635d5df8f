use board_logging::board_debug;
use jobboard_dom::{Document, ElementId};

use crate::markup;
use crate::state::{Filter, JobBoard, JobStatus};
use crate::Action;

impl JobBoard {
    /// Delegated click handler for the job container.
    pub fn on_list_click(&mut self, target: ElementId) {
        let action = self.classify_list_click(target);
        self.apply(action);
    }

    /// Delegated click handler for the tab bar.
    pub fn on_tab_click(&mut self, target: ElementId) {
        let action = self.classify_tab_click(target);
        self.apply(action);
    }

    /// Resolves a click inside the job container into an [`Action`].
    ///
    /// Delete affordances win over status buttons; a click outside any
    /// tracked card is ignored.
    pub fn classify_list_click(&self, target: ElementId) -> Action {
        let document = &self.document;
        let Some(entry) =
            document.closest(target, |d, id| d.has_class(id, markup::JOB_CARD_CLASS))
        else {
            return Action::Ignored;
        };
        if self.index_of_entry(entry).is_none() {
            board_debug!("click on untracked job-shaped element {entry:?} ignored");
            return Action::Ignored;
        }

        let path = path_to_entry(document, target, entry);
        if path.iter().any(|&id| {
            document.has_class(id, markup::TRASH_ICON_CLASS)
                || document.has_class(id, markup::DELETE_CONTROL_CLASS)
        }) {
            return Action::Delete { entry };
        }

        if let Some(&control) = path
            .iter()
            .find(|&&id| document.tag(id) == markup::CONTROL_TAG)
        {
            let label = document.label_text(control);
            let label = label.trim();
            if label.eq_ignore_ascii_case(markup::INTERVIEW_LABEL) {
                return Action::SetStatus {
                    entry,
                    status: JobStatus::Interview,
                };
            }
            if label.eq_ignore_ascii_case(markup::REJECTED_LABEL) {
                return Action::SetStatus {
                    entry,
                    status: JobStatus::Rejected,
                };
            }
        }
        Action::Ignored
    }

    /// Resolves a click inside the tab bar into an [`Action`]. Only clicks
    /// landing on an interactive control count.
    pub fn classify_tab_click(&self, target: ElementId) -> Action {
        let document = &self.document;
        let Some(tab_bar) = self.refs.tab_bar else {
            return Action::Ignored;
        };
        let Some(control) = document.closest(target, |d, id| d.tag(id) == markup::CONTROL_TAG)
        else {
            return Action::Ignored;
        };
        if document.closest(control, |_, id| id == tab_bar).is_none() {
            return Action::Ignored;
        }
        let label = document.label_text(control);
        match Filter::from_label(label.trim()) {
            Some(filter) => Action::SelectTab {
                tab: control,
                filter,
            },
            None => {
                board_debug!("tab control with unrecognized label {:?} ignored", label.trim());
                Action::Ignored
            }
        }
    }
}

/// Elements from `target` up to (and including) `entry`. `entry` is known to
/// be an ancestor-or-self of `target`.
fn path_to_entry(document: &Document, target: ElementId, entry: ElementId) -> Vec<ElementId> {
    let mut path = Vec::new();
    let mut cursor = Some(target);
    while let Some(id) = cursor {
        path.push(id);
        if id == entry {
            break;
        }
        cursor = document.parent(id);
    }
    path
}
