pub mod submission;

pub use submission::{StoredSubmission, Submission, TextField};
