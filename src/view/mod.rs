//! Page state that the frontend drives but does not need to compute itself:
//! navigation config, the loading animation, and the case page with its
//! detail overlay.

mod case_view;
mod config;
mod loading;

pub use case_view::{CaseView, ViewError};
pub use config::{
    CaseViewConfig, EntryForm, ViewConfigError, CASE_PATH, LOADING_DURATION_DB_MS, LOADING_DURATION_MS,
};
pub use loading::{LoadingProgress, StepState, ANIMATION_MS, LOADING_STEPS};
