use std::sync::Arc;

use crate::db::SubmissionStore;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub store: Arc<dyn SubmissionStore>,
}
