use std::sync::Arc;

use async_trait::async_trait;

use crate::db::{ConnectionManager, SubmissionStore};
use crate::error::AppError;
use crate::models::{StoredSubmission, Submission};

/// Writes submissions into a MongoDB collection.
pub struct MongoSubmissionStore {
    connection: Arc<ConnectionManager>,
    collection: String,
}

impl MongoSubmissionStore {
    pub fn new(connection: Arc<ConnectionManager>, collection: impl Into<String>) -> Self {
        Self {
            connection,
            collection: collection.into(),
        }
    }
}

#[async_trait]
impl SubmissionStore for MongoSubmissionStore {
    async fn insert(&self, submission: Submission) -> Result<StoredSubmission, AppError> {
        let collection = self
            .connection
            .database()?
            .collection::<Submission>(&self.collection);

        let result = collection.insert_one(&submission).await?;

        let id = match submission.id {
            Some(id) => id,
            None => result.inserted_id.as_object_id().ok_or_else(|| {
                AppError::Internal(format!(
                    "inserted id is not an ObjectId: {}",
                    result.inserted_id
                ))
            })?,
        };

        tracing::debug!("Stored submission {id} in '{}'", self.collection);

        Ok(submission.into_stored(id))
    }
}
