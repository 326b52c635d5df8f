mod common;

use jobboard_core::{markup, JobBoard, JobStatus};
use jobboard_dom::Document;
use pretty_assertions::assert_eq;

#[test]
fn interview_click_updates_record_tag_badge_and_dashboard() {
    let (mut board, handles) = common::mounted(&["Backend Engineer", "Data Analyst", "SRE"]);

    board.on_list_click(handles.cards[1].interview_button);

    assert_eq!(board.jobs()[1].status, JobStatus::Interview);
    let doc = board.document();
    assert_eq!(
        doc.attr(handles.cards[1].card, markup::STATUS_ATTR),
        Some("interview")
    );
    assert_eq!(doc.text(handles.cards[1].badge), Some("Interview"));
    assert!(doc.has_class(handles.cards[1].badge, markup::BADGE_SUCCESS_CLASS));
    assert_eq!(doc.text(handles.total_value), Some("3"));
    assert_eq!(doc.text(handles.interview_value), Some("1"));
    assert_eq!(doc.text(handles.rejected_value), Some("0"));
}

#[test]
fn retagging_moves_the_count_between_statuses() {
    let (mut board, handles) = common::mounted(&["Backend Engineer"]);

    board.on_list_click(handles.cards[0].interview_button);
    assert_eq!(board.document().text(handles.interview_value), Some("1"));

    board.on_list_click(handles.cards[0].rejected_button);

    let doc = board.document();
    assert_eq!(board.jobs()[0].status, JobStatus::Rejected);
    assert_eq!(doc.text(handles.interview_value), Some("0"));
    assert_eq!(doc.text(handles.rejected_value), Some("1"));
    assert_eq!(doc.text(handles.cards[0].badge), Some("Rejected"));
    assert!(doc.has_class(handles.cards[0].badge, markup::BADGE_DANGER_CLASS));
    assert!(!doc.has_class(handles.cards[0].badge, markup::BADGE_SUCCESS_CLASS));

    // And back again: any status is re-assignable at any time.
    board.on_list_click(handles.cards[0].interview_button);
    assert_eq!(board.jobs()[0].status, JobStatus::Interview);
    assert_eq!(board.document().text(handles.rejected_value), Some("0"));
}

#[test]
fn reapplying_the_same_status_is_idempotent() {
    let (mut board, handles) = common::mounted(&["Backend Engineer", "Data Analyst"]);

    board.on_list_click(handles.cards[0].interview_button);
    let after_first = board.view();

    board.on_list_click(handles.cards[0].interview_button);
    let after_second = board.view();

    assert_eq!(after_first, after_second);
    assert_eq!(
        board.document().text(handles.interview_value),
        Some("1")
    );
}

#[test]
fn card_without_badge_still_updates_the_data_model() {
    common::init_logging();
    let mut doc = Document::new();
    let handles = common::build_page(&mut doc, &[]);
    // A malformed card with no third child: info and actions only.
    let card = doc
        .element("div")
        .class(markup::JOB_CARD_CLASS)
        .child_of(handles.container);
    doc.element("div").class("job-info").child_of(card);
    let actions = doc.element("div").class("actions").child_of(card);
    let interview_button = doc
        .element("button")
        .text(markup::INTERVIEW_LABEL)
        .child_of(actions);

    let mut board = JobBoard::mount(doc);
    assert_eq!(board.jobs()[0].badge, None);

    board.on_list_click(interview_button);

    assert_eq!(board.jobs()[0].status, JobStatus::Interview);
    assert_eq!(
        board.document().attr(card, markup::STATUS_ATTR),
        Some("interview")
    );
    assert_eq!(board.document().text(handles.interview_value), Some("1"));
}

#[test]
fn out_of_range_index_is_ignored() {
    let (mut board, _handles) = common::mounted(&["Backend Engineer"]);
    let before = board.view();

    board.update_job_status(5, JobStatus::Rejected);

    assert_eq!(board.view(), before);
}
