use serde::{Deserialize, Serialize};

/// Reference to externally stored data, e.g. an image in a GCS bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileData {
    #[serde(rename = "fileUri")]
    pub file_uri: String,
    #[serde(rename = "mimeType")]
    pub mime_type: String,
}
