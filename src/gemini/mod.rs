pub mod content;
pub mod file_data;
pub mod generation_config;
pub mod part;
pub mod request;
pub mod safety;
pub mod stream_chunk;
pub mod thinking_config;
pub mod tool;
pub mod usage;

pub use content::Content;
pub use file_data::FileData;
pub use generation_config::GenerationConfig;
pub use part::Part;
pub use request::GenerateRequest;
pub use safety::{HarmBlockThreshold, HarmCategory, SafetySetting};
pub use stream_chunk::{Candidate, FinishReason, StreamChunk};
pub use thinking_config::ThinkingConfig;
pub use tool::{GoogleSearch, Tool};
pub use usage::Usage;
