mod common;

use jobboard_core::{markup, Filter, JobStatus};
use pretty_assertions::assert_eq;

fn visible_entries(board: &jobboard_core::JobBoard) -> Vec<usize> {
    board
        .view()
        .jobs
        .iter()
        .enumerate()
        .filter(|(_, job)| job.visible)
        .map(|(index, _)| index)
        .collect()
}

// The All tab intentionally shows only untouched jobs, not every job. That
// is how the page always behaved, and the behavior is asserted here rather
// than corrected.
#[test]
fn all_tab_shows_only_untouched_jobs() {
    let (mut board, handles) = common::mounted(&["A", "B", "C", "D"]);

    board.on_list_click(handles.cards[1].interview_button);
    board.on_list_click(handles.cards[2].rejected_button);

    assert_eq!(board.filter(), Filter::All);
    assert_eq!(visible_entries(&board), vec![0, 3]);
    assert_eq!(board.document().text(handles.jobs_count), Some("2 jobs"));
}

#[test]
fn status_tabs_show_exactly_their_subset() {
    let (mut board, handles) = common::mounted(&["A", "B", "C", "D"]);
    board.on_list_click(handles.cards[1].interview_button);
    board.on_list_click(handles.cards[2].rejected_button);

    board.on_tab_click(handles.tab_interview);
    assert_eq!(board.filter(), Filter::Interview);
    assert_eq!(visible_entries(&board), vec![1]);
    assert_eq!(board.document().text(handles.jobs_count), Some("1 jobs"));

    board.on_tab_click(handles.tab_rejected);
    assert_eq!(visible_entries(&board), vec![2]);
}

#[test]
fn tab_highlight_is_mutually_exclusive() {
    let (mut board, handles) = common::mounted(&["A"]);

    board.on_tab_click(handles.tab_interview);

    let doc = board.document();
    assert!(doc.has_class(handles.tab_interview, markup::TAB_ACTIVE_CLASS));
    assert!(!doc.has_class(handles.tab_all, markup::TAB_ACTIVE_CLASS));
    assert!(!doc.has_class(handles.tab_rejected, markup::TAB_ACTIVE_CLASS));
}

#[test]
fn tab_switch_leaves_the_dashboard_alone() {
    let (mut board, handles) = common::mounted(&["A", "B"]);
    board.on_list_click(handles.cards[0].interview_button);

    board.on_tab_click(handles.tab_rejected);

    // No data mutated, so the totals must read exactly as before the switch.
    let doc = board.document();
    assert_eq!(doc.text(handles.total_value), Some("2"));
    assert_eq!(doc.text(handles.interview_value), Some("1"));
    assert_eq!(doc.text(handles.rejected_value), Some("0"));
}

#[test]
fn empty_state_is_built_once_and_then_only_toggled() {
    let (mut board, handles) = common::mounted(&["A"]);

    let empty_states = |board: &jobboard_core::JobBoard| {
        board
            .document()
            .descendants(handles.container)
            .into_iter()
            .filter(|&id| board.document().has_class(id, markup::EMPTY_STATE_CLASS))
            .count()
    };

    assert!(!board.view().empty_state_shown);
    assert_eq!(empty_states(&board), 0);

    // Tagging the only card empties the All subset.
    board.on_list_click(handles.cards[0].interview_button);
    assert!(board.view().empty_state_shown);
    assert_eq!(empty_states(&board), 1);

    board.on_tab_click(handles.tab_interview);
    assert!(!board.view().empty_state_shown);
    assert_eq!(empty_states(&board), 1);

    // Repeated zero-visible renders toggle the same element, never rebuild.
    board.on_tab_click(handles.tab_rejected);
    assert!(board.view().empty_state_shown);
    board.on_tab_click(handles.tab_interview);
    assert!(!board.view().empty_state_shown);
    assert_eq!(empty_states(&board), 1);
}

#[test]
fn three_job_walkthrough() {
    let (mut board, handles) = common::mounted(&["A", "B", "C"]);

    board.on_list_click(handles.cards[1].interview_button);

    let view = board.view();
    assert_eq!(view.counts.total, 3);
    assert_eq!(view.counts.interview, 1);
    assert_eq!(view.counts.rejected, 0);
    // Under All, the two still-untouched jobs remain visible.
    assert_eq!(visible_entries(&board), vec![0, 2]);

    board.on_tab_click(handles.tab_interview);
    assert_eq!(visible_entries(&board), vec![1]);
    assert_eq!(board.view().jobs[1].status, JobStatus::Interview);
}
