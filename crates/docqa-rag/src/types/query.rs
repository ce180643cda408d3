//! Question request types

use serde::{Deserialize, Serialize};

/// Form body for POST /ask
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskRequest {
    /// Id of the document to answer from
    pub doc_id: i64,
    /// The user's question
    pub question: String,
}
