use crate::gemini::{Content, Part, Usage};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreamChunk {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[serde(rename = "usageMetadata")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage_metadata: Option<Usage>,
    #[serde(rename = "modelVersion")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_version: Option<String>,
    #[serde(rename = "responseId")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    // Absent in heartbeat / metadata-only frames
    pub content: Option<Content>,
    #[serde(rename = "finishReason")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<FinishReason>,
    pub index: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FinishReason {
    #[serde(rename = "FINISH_REASON_UNSPECIFIED")]
    FinishReasonUnspecified,
    #[serde(rename = "STOP")]
    Stop,
    #[serde(rename = "MAX_TOKENS")]
    MaxTokens,
    #[serde(rename = "SAFETY")]
    Safety,
    #[serde(rename = "RECITATION")]
    Recitation,
    #[serde(rename = "BLOCKLIST")]
    Blocklist,
    #[serde(rename = "PROHIBITED_CONTENT")]
    ProhibitedContent,
    #[serde(rename = "OTHER")]
    Other,
}

impl StreamChunk {
    /// Visible text of the first candidate, excluding thought parts.
    /// `None` when the frame carries no usable content (no candidates,
    /// no content container, or an empty parts list).
    pub fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        if content.parts.is_empty() {
            return None;
        }
        let text: String = content
            .parts
            .iter()
            .filter_map(|part| match part {
                Part::Text { text, thought } if *thought != Some(true) => Some(text.as_str()),
                _ => None,
            })
            .collect();
        Some(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_chunk_json() {
        let text = "{\"candidates\": [{\"content\": {\"role\": \"model\",\"parts\": [{\"text\": \"Trail Bliss.\"}]},\"index\": 0}],\"usageMetadata\": {\"promptTokenCount\": 165,\"candidatesTokenCount\": 49,\"totalTokenCount\": 562,\"thoughtsTokenCount\": 348},\"modelVersion\": \"gemini-2.5-flash\",\"responseId\": \"iJDOaOzkBM70jMcPxJmmyAw\"}";
        let chunk: StreamChunk = serde_json::from_str(text).expect("chunk should parse");
        assert_eq!(chunk.text().as_deref(), Some("Trail Bliss."));
        assert_eq!(chunk.model_version.as_deref(), Some("gemini-2.5-flash"));
    }

    #[test]
    fn test_text_absent_without_candidates() {
        let chunk: StreamChunk =
            serde_json::from_str("{\"usageMetadata\": {\"promptTokenCount\": 1,\"candidatesTokenCount\": 0,\"totalTokenCount\": 1}}")
                .expect("metadata-only frame should parse");
        assert!(chunk.candidates.is_empty());
        assert_eq!(chunk.text(), None);
    }

    #[test]
    fn test_text_absent_without_content() {
        let chunk: StreamChunk =
            serde_json::from_str("{\"candidates\": [{\"finishReason\": \"STOP\", \"index\": 0}]}")
                .expect("contentless candidate should parse");
        assert_eq!(chunk.text(), None);
    }

    #[test]
    fn test_text_absent_with_empty_parts() {
        let chunk: StreamChunk = serde_json::from_str(
            "{\"candidates\": [{\"content\": {\"role\": \"model\", \"parts\": []}, \"index\": 0}]}",
        )
        .expect("empty parts should parse");
        assert_eq!(chunk.text(), None);
    }

    #[test]
    fn test_text_skips_thought_parts() {
        let chunk: StreamChunk = serde_json::from_str(
            "{\"candidates\": [{\"content\": {\"role\": \"model\", \"parts\": [{\"text\": \"pondering\", \"thought\": true}, {\"text\": \"Adventure Awaits.\"}]}}]}",
        )
        .expect("mixed parts should parse");
        assert_eq!(chunk.text().as_deref(), Some("Adventure Awaits."));
    }
}
