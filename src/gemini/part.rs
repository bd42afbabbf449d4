use crate::gemini::FileData;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Part {
    Text {
        text: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        thought: Option<bool>,
    },
    FileData {
        #[serde(rename = "fileData")]
        file_data: FileData,
    },
    // Minimal shape; inline data and function call variants not needed here
}

impl Part {
    pub fn text(text: impl Into<String>) -> Self {
        Part::Text { text: text.into(), thought: None }
    }

    pub fn from_uri(file_uri: impl Into<String>, mime_type: impl Into<String>) -> Self {
        Part::FileData {
            file_data: FileData { file_uri: file_uri.into(), mime_type: mime_type.into() },
        }
    }
}
