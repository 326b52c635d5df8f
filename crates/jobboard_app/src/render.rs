//! Text rendering of the page for the terminal session.

use std::fmt::Write as _;

use jobboard_core::{markup, JobBoard};

/// Renders the current page state: dashboard, tabs, the visible cards, and
/// the empty-state fallback when nothing matches the filter.
pub fn render_page(board: &JobBoard) -> String {
    let view = board.view();
    let doc = board.document();
    let mut out = String::new();

    let _ = writeln!(
        out,
        "Total: {} | Interview: {} | Rejected: {}",
        view.counts.total, view.counts.interview, view.counts.rejected
    );

    let _ = writeln!(out, "{}", tab_line(board));

    let mut shown = 0usize;
    for job in view.jobs.iter().filter(|job| job.visible) {
        shown += 1;
        let title = doc
            .find_descendant(job.entry, |d, id| d.tag(id) == "h4")
            .map(|id| doc.label_text(id))
            .unwrap_or_else(|| "(untitled)".to_string());
        let company = doc
            .find_descendant(job.entry, |d, id| d.has_class(id, "company"))
            .map(|id| doc.label_text(id));

        let mut line = match company {
            Some(company) => format!("  {shown}. {title} — {company}"),
            None => format!("  {shown}. {title}"),
        };
        if let Some(badge) = job.badge_label.as_deref().filter(|label| !label.is_empty()) {
            let _ = write!(line, " [{badge}]");
        }
        let _ = writeln!(out, "{line}");
    }

    if view.empty_state_shown {
        let _ = writeln!(out, "  {}", markup::EMPTY_STATE_TEXT);
    }
    let _ = writeln!(out, "{} jobs", view.visible_count);

    out
}

/// One line of tab labels with the selected one bracketed.
fn tab_line(board: &JobBoard) -> String {
    let doc = board.document();
    let mut line = String::from("Tabs:");
    let Some(tab_bar) = doc.find_descendant(doc.root(), |d, id| {
        d.has_class(id, markup::TAB_BAR_CLASS)
    }) else {
        return line;
    };
    for control in doc.descendants(tab_bar) {
        if doc.tag(control) != markup::CONTROL_TAG {
            continue;
        }
        let label = doc.label_text(control);
        let label = label.trim();
        if doc.has_class(control, markup::TAB_ACTIVE_CLASS) {
            let _ = write!(line, " [{label}]");
        } else {
            let _ = write!(line, "  {label} ");
        }
    }
    line
}
