//! Seed page construction: the markup the widget gets mounted on.

use anyhow::Context;
use jobboard_core::markup;
use jobboard_dom::{Document, ElementId};
use serde::Deserialize;

/// One job from the embedded listing data.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedJob {
    pub title: String,
    pub company: String,
}

/// Parses the embedded seed listing.
pub fn seed_jobs() -> anyhow::Result<Vec<SeedJob>> {
    serde_json::from_str(include_str!("seed_jobs.json")).context("parse embedded seed jobs")
}

/// Builds the full page: dashboard, tab bar, count label, and one card per
/// seed job.
pub fn build_page(jobs: &[SeedJob]) -> Document {
    let mut doc = Document::new();
    let root = doc.root();

    let dashboard = doc
        .element("section")
        .class(markup::DASHBOARD_CLASS)
        .child_of(root);
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
        doc.element("p")
            .class(markup::COUNT_VALUE_CLASS)
            .text("0")
            .child_of(summary);
    }

    let tab_bar = doc
        .element("nav")
        .class(markup::TAB_BAR_CLASS)
        .child_of(root);
    doc.element("button")
        .class(markup::TAB_ACTIVE_CLASS)
        .text(markup::ALL_TAB_LABEL)
        .child_of(tab_bar);
    doc.element("button")
        .text(markup::INTERVIEW_LABEL)
        .child_of(tab_bar);
    doc.element("button")
        .text(markup::REJECTED_LABEL)
        .child_of(tab_bar);

    doc.element("p")
        .class(markup::JOBS_COUNT_CLASS)
        .child_of(root);

    let container = doc
        .element("div")
        .class(markup::JOB_LIST_CLASS)
        .child_of(root);
    for job in jobs {
        build_card(&mut doc, container, job);
    }

    doc
}

/// One card: info block, actions block, status badge as the third child.
fn build_card(doc: &mut Document, container: ElementId, job: &SeedJob) {
    let card = doc
        .element("div")
        .class(markup::JOB_CARD_CLASS)
        .child_of(container);

    let info = doc.element("div").class("job-info").child_of(card);
    doc.element("h4").text(&job.title).child_of(info);
    doc.element("p")
        .class("company")
        .text(&job.company)
        .child_of(info);

    let actions = doc.element("div").class("actions").child_of(card);
    doc.element("button")
        .text(markup::INTERVIEW_LABEL)
        .child_of(actions);
    doc.element("button")
        .text(markup::REJECTED_LABEL)
        .child_of(actions);
    let delete_control = doc
        .element("span")
        .class(markup::DELETE_CONTROL_CLASS)
        .child_of(actions);
    doc.element("i")
        .class(markup::TRASH_ICON_CLASS)
        .child_of(delete_control);

    doc.element("span").class("status-badge").child_of(card);
}
