pub mod connection;
pub mod submissions;

use async_trait::async_trait;

use crate::error::AppError;
use crate::models::{StoredSubmission, Submission};

pub use connection::ConnectionManager;
pub use submissions::MongoSubmissionStore;

/// Persistence seam for the form endpoint.
#[async_trait]
pub trait SubmissionStore: Send + Sync {
    /// Write one submission and return it with its assigned identifier.
    async fn insert(&self, submission: Submission) -> Result<StoredSubmission, AppError>;
}
