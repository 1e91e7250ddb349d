use mongodb::bson::oid::ObjectId;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

/// A text field as posted: `None` when the key was absent, `Some(None)` for
/// an explicit `null`.
pub type TextField = Option<Option<String>>;

/// A form submission as it is written to the store. Fields other than `name`
/// and `email` are kept in `extra` and written alongside them.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Submission {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: TextField,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: TextField,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A submission the store has acknowledged, with its identifier rendered as
/// hex for clients.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoredSubmission {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: TextField,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: TextField,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
    #[serde(rename = "_id", serialize_with = "object_id_as_hex")]
    pub id: ObjectId,
}

impl Submission {
    pub fn into_stored(self, id: ObjectId) -> StoredSubmission {
        StoredSubmission {
            name: self.name,
            email: self.email,
            extra: self.extra,
            id,
        }
    }
}

fn object_id_as_hex<S: Serializer>(id: &ObjectId, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&id.to_hex())
}
