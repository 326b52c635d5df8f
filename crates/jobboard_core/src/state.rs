use board_logging::board_debug;
use jobboard_dom::{Document, ElementId};

use crate::markup;

/// Classification of one job card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JobStatus {
    /// Untouched card; the state every card starts in.
    #[default]
    None,
    Interview,
    Rejected,
}

impl JobStatus {
    /// Value mirrored onto the card's status attribute.
    pub fn as_tag(self) -> &'static str {
        match self {
            JobStatus::None => "none",
            JobStatus::Interview => "interview",
            JobStatus::Rejected => "rejected",
        }
    }

    /// Label shown on the card's status badge.
    pub fn badge_label(self) -> &'static str {
        match self {
            JobStatus::None => "",
            JobStatus::Interview => markup::INTERVIEW_LABEL,
            JobStatus::Rejected => markup::REJECTED_LABEL,
        }
    }
}

/// The currently selected tab subset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Interview,
    Rejected,
}

impl Filter {
    /// Parses a tab control's trimmed label. Unknown labels yield `None`.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            markup::ALL_TAB_LABEL => Some(Filter::All),
            markup::INTERVIEW_LABEL => Some(Filter::Interview),
            markup::REJECTED_LABEL => Some(Filter::Rejected),
            _ => None,
        }
    }

    /// The visibility rule, kept exactly as the page always behaved: the All
    /// tab admits only untouched jobs, not every job.
    pub fn admits(self, status: JobStatus) -> bool {
        match self {
            Filter::All => status == JobStatus::None,
            Filter::Interview => status == JobStatus::Interview,
            Filter::Rejected => status == JobStatus::Rejected,
        }
    }
}

/// One tracked job card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JobRecord {
    /// The card element, exclusively associated with this record for its
    /// lifetime.
    pub entry: ElementId,
    /// The status badge, resolved once at mount as the card's third
    /// immediate child. Cards without one degrade badge updates silently.
    pub badge: Option<ElementId>,
    pub status: JobStatus,
}

/// References into the page, looked up once at mount. Every field is
/// optional: a page missing a piece degrades the matching update to a no-op.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct PageRefs {
    pub container: Option<ElementId>,
    pub tab_bar: Option<ElementId>,
    pub jobs_count: Option<ElementId>,
    pub total_value: Option<ElementId>,
    pub interview_value: Option<ElementId>,
    pub rejected_value: Option<ElementId>,
}

/// The job list controller.
///
/// Owns the document, the ordered record collection, and the filter
/// selection; all interaction goes through the two delegated click handlers
/// ([`JobBoard::on_list_click`], [`JobBoard::on_tab_click`]). Records and
/// attached card elements move together on every mutation path.
#[derive(Debug, Clone)]
pub struct JobBoard {
    pub(crate) document: Document,
    pub(crate) jobs: Vec<JobRecord>,
    pub(crate) filter: Filter,
    pub(crate) refs: PageRefs,
    pub(crate) empty_state: Option<ElementId>,
}

impl JobBoard {
    /// Scans the page and takes ownership of it.
    ///
    /// Every job-shaped card attached to the container at this moment gets a
    /// record with status `None`, a `"none"` status tag, and its badge
    /// reference resolved. Taking the document by value makes the scan run
    /// exactly once, before any handler can exist. An empty container yields
    /// an empty collection, not a fault.
    pub fn mount(mut document: Document) -> Self {
        let refs = resolve_page_refs(&document);
        let mut jobs = Vec::new();
        if let Some(container) = refs.container {
            let cards: Vec<ElementId> = document
                .children(container)
                .into_iter()
                .filter(|&child| document.has_class(child, markup::JOB_CARD_CLASS))
                .collect();
            for card in cards {
                document.set_attr(card, markup::STATUS_ATTR, JobStatus::None.as_tag());
                let badge = document.children(card).get(2).copied();
                jobs.push(JobRecord {
                    entry: card,
                    badge,
                    status: JobStatus::None,
                });
            }
        }
        board_debug!("mounted job board with {} cards", jobs.len());

        let mut board = Self {
            document,
            jobs,
            filter: Filter::All,
            refs,
            empty_state: None,
        };
        board.render_jobs();
        board.refresh_dashboard();
        board
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn jobs(&self) -> &[JobRecord] {
        &self.jobs
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    /// Index of the record owning `entry`, resolved by element identity.
    /// Re-run at every dispatch because deletions shift indices.
    pub(crate) fn index_of_entry(&self, entry: ElementId) -> Option<usize> {
        self.jobs.iter().position(|record| record.entry == entry)
    }
}

fn resolve_page_refs(document: &Document) -> PageRefs {
    let root = document.root();
    let by_class =
        |class: &'static str| document.find_descendant(root, move |d, id| d.has_class(id, class));

    let mut refs = PageRefs {
        container: by_class(markup::JOB_LIST_CLASS),
        tab_bar: by_class(markup::TAB_BAR_CLASS),
        jobs_count: by_class(markup::JOBS_COUNT_CLASS),
        ..PageRefs::default()
    };

    // Summary cards are keyed by their heading text; cards with unknown
    // headings or without a value element simply stay unwired.
    let Some(dashboard) = by_class(markup::DASHBOARD_CLASS) else {
        return refs;
    };
    for card in document.descendants(dashboard) {
        if !document.has_class(card, markup::SUMMARY_CARD_CLASS) {
            continue;
        }
        let Some(heading) = document.find_descendant(card, |d, id| d.tag(id) == "h3") else {
            continue;
        };
        let value =
            document.find_descendant(card, |d, id| d.has_class(id, markup::COUNT_VALUE_CLASS));
        match document.label_text(heading).trim() {
            markup::TOTAL_HEADING => refs.total_value = value,
            markup::INTERVIEW_LABEL => refs.interview_value = value,
            markup::REJECTED_LABEL => refs.rejected_value = value,
            _ => {}
        }
    }
    refs
}
