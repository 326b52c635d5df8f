//! Job board core: the widget's state, click dispatch, and rendering.
mod action;
mod dispatch;
pub mod markup;
mod render;
mod state;
mod update;
mod view_model;

pub use action::Action;
pub use state::{Filter, JobBoard, JobRecord, JobStatus};
pub use view_model::{BoardViewModel, DashboardCounts, JobCardView};
