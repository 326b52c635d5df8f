//! Shared page fixture for the widget tests.
#![allow(dead_code)]

use std::sync::Once;

use jobboard_core::{markup, JobBoard};
use jobboard_dom::{Document, ElementId};

pub fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(board_logging::initialize_for_tests);
}

/// Elements of one built card the tests click on.
pub struct CardHandles {
    pub card: ElementId,
    pub info: ElementId,
    pub interview_button: ElementId,
    pub rejected_button: ElementId,
    pub delete_control: ElementId,
    pub trash_icon: ElementId,
    pub badge: ElementId,
}

pub struct PageHandles {
    pub container: ElementId,
    pub tab_bar: ElementId,
    pub tab_all: ElementId,
    pub tab_interview: ElementId,
    pub tab_rejected: ElementId,
    pub jobs_count: ElementId,
    pub total_value: ElementId,
    pub interview_value: ElementId,
    pub rejected_value: ElementId,
    pub cards: Vec<CardHandles>,
}

/// Builds the page shape the widget expects: dashboard, tab bar, count
/// label, and one card per title.
pub fn build_page(doc: &mut Document, titles: &[&str]) -> PageHandles {
    let root = doc.root();

    let dashboard = doc
        .element("section")
        .class(markup::DASHBOARD_CLASS)
        .child_of(root);
    let mut values = Vec::new();
    for heading in [
        markup::TOTAL_HEADING,
        markup::INTERVIEW_LABEL,
        markup::REJECTED_LABEL,
    ] {
        let summary = doc
            .element("div")
            .class(markup::SUMMARY_CARD_CLASS)
            .child_of(dashboard);
        doc.element("h3").text(heading).child_of(summary);
        values.push(
            doc.element("p")
                .class(markup::COUNT_VALUE_CLASS)
                .text("0")
                .child_of(summary),
        );
    }

    let tab_bar = doc
        .element("nav")
        .class(markup::TAB_BAR_CLASS)
        .child_of(root);
    let tab_all = doc
        .element("button")
        .class(markup::TAB_ACTIVE_CLASS)
        .text(markup::ALL_TAB_LABEL)
        .child_of(tab_bar);
    let tab_interview = doc
        .element("button")
        .text(markup::INTERVIEW_LABEL)
        .child_of(tab_bar);
    let tab_rejected = doc
        .element("button")
        .text(markup::REJECTED_LABEL)
        .child_of(tab_bar);

    let jobs_count = doc
        .element("p")
        .class(markup::JOBS_COUNT_CLASS)
        .child_of(root);
    let container = doc
        .element("div")
        .class(markup::JOB_LIST_CLASS)
        .child_of(root);

    let cards = titles
        .iter()
        .map(|title| build_card(doc, container, title))
        .collect();

    PageHandles {
        container,
        tab_bar,
        tab_all,
        tab_interview,
        tab_rejected,
        jobs_count,
        total_value: values[0],
        interview_value: values[1],
        rejected_value: values[2],
        cards,
    }
}

/// One card: info block, actions block, status badge (third child).
pub fn build_card(doc: &mut Document, container: ElementId, title: &str) -> CardHandles {
    let card = doc
        .element("div")
        .class(markup::JOB_CARD_CLASS)
        .child_of(container);

    let info = doc.element("div").class("job-info").child_of(card);
    doc.element("h4").text(title).child_of(info);
    doc.element("p").class("company").text("Acme Corp").child_of(info);

    let actions = doc.element("div").class("actions").child_of(card);
    let interview_button = doc
        .element("button")
        .text(markup::INTERVIEW_LABEL)
        .child_of(actions);
    let rejected_button = doc
        .element("button")
        .text(markup::REJECTED_LABEL)
        .child_of(actions);
    let delete_control = doc
        .element("span")
        .class(markup::DELETE_CONTROL_CLASS)
        .child_of(actions);
    let trash_icon = doc
        .element("i")
        .class(markup::TRASH_ICON_CLASS)
        .child_of(delete_control);

    let badge = doc.element("span").class("status-badge").child_of(card);

    CardHandles {
        card,
        info,
        interview_button,
        rejected_button,
        delete_control,
        trash_icon,
        badge,
    }
}

/// Builds and mounts a page with one card per title.
pub fn mounted(titles: &[&str]) -> (JobBoard, PageHandles) {
    init_logging();
    let mut doc = Document::new();
    let handles = build_page(&mut doc, titles);
    (JobBoard::mount(doc), handles)
}
