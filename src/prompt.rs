//! The scripted ad-copy conversation and its fixed sampling settings.
//!
//! Nothing here varies at runtime: the dialogue replays two earlier
//! exchanges about a product image and ends with a refined instruction,
//! and the sampling settings are literals. Changing the campaign means
//! editing this file.

use crate::gemini::{
    Content, GenerateRequest, GenerationConfig, HarmBlockThreshold, HarmCategory, Part,
    SafetySetting, ThinkingConfig, Tool,
};

const PRODUCT_IMAGE_URI: &str =
    "gs://qwiklabs-gcp-02-60f4749fd21b-bucket/cymbal-product-image.png";

/// The five scripted turns: the opening brief with the product image, two
/// pre-recorded model turns (reasoning summary plus answer), a user
/// refinement, and the final instruction.
pub fn scripted_conversation() -> Vec<Content> {
    let brief = Part::text(
        "Short, descriptive text inspired by the image.\n\
         Catchy phrases suitable for advertisements.\n\
         A poetic description for a nature-focused campaign.",
    );

    let first_reply_thinking = Part::text(
        "**Examining Image Details**\n\nI'm currently focused on the image itself. My goal is to extract the key visual elements to inform the three description types requested. I've started noting down prominent features that will be crucial for the descriptive text, catchphrases, and the poetic nature-based campaign.\n\n\n**Crafting Descriptive Elements**\n\nI'm now prioritizing the construction of the three description types. I'm leveraging the identified image elements – the trail, wildflowers, gear, and mountain backdrop – to form the short descriptive text, generate advertising catchphrases, and compose the poetic campaign content. I'm focusing on concise, impactful wording for each.",
    );

    let first_reply = Part::text(
        "Here are some descriptions inspired by the image:\n\n\
         **Short, descriptive text inspired by the image:**\n\
         A vibrant mountain trail winds through a lush meadow bursting with colorful wildflowers. A blue hiking backpack rests beside the path, a map spread open nearby, inviting exploration of the serene natural landscape.\n\n\
         **Catchy phrases suitable for advertisements:**\n\
         *   Discover Your Next Adventure.\n\
         *   Where Wildflowers Meet Wild Trails.\n\
         *   Explore More. Worry Less.\n\
         *   Your Path to Natural Beauty.\n\
         *   Unfold Your Journey.\n\n\
         **A poetic description for a nature-focused campaign:**\n\
         Amidst the emerald slopes where whispers of wind play,\n\
         A painter's palette of blossoms lights the way.\n\
         Bluebells dance with daffodils, a crimson fiery grace,\n\
         Along a winding ribbon, through nature's soft embrace.\n\
         Here lies a journey's promise, a map to guide your stride,\n\
         With sturdy pack beside you, where wonders softly hide.\n\
         Breathe deep the mountain's magic, let spirit take its flight,\n\
         In this sun-drenched sanctuary, bathed in golden light.",
    );

    let second_reply_thinking = Part::text(
        "**Analyzing Advertisement Phrases**\n\nI'm now zeroing in on brevity. The goal is to craft punchy phrases. I'm prioritizing positive language to draw people in, making sure the message is not just brief but also appealing, like a well-crafted hook.",
    );

    let second_reply = Part::text(
        "Here are some revised catchy phrases, focusing on being bright and short:\n\n\
         **Catchy phrases suitable for advertisements:**\n\
         *   Trail Bliss.\n\
         *   Nature's Canvas.\n\
         *   Adventure Awaits.\n\
         *   Bloom & Explore.\n\
         *   Find Your Path.",
    );

    let final_instruction = Part::text(
        "Short, descriptive text inspired by the image.\n\
         Catchy phrases suitable for advertisements,catchy phrases should be bright and short.\n\
         A poetic description for a nature-focused campaign.Must contain the word \"egor\" ! ",
    );

    vec![
        Content::user(vec![Part::from_uri(PRODUCT_IMAGE_URI, "image/png"), brief]),
        Content::model(vec![first_reply_thinking, first_reply]),
        Content::user(vec![Part::text("catchy phrases should be bright and short")]),
        Content::model(vec![second_reply_thinking, second_reply]),
        Content::user(vec![final_instruction]),
    ]
}

pub fn generation_config() -> GenerationConfig {
    GenerationConfig {
        temperature: Some(0.2),
        top_p: Some(0.48),
        max_output_tokens: Some(779),
        // Let the model size its own reasoning budget
        thinking_config: Some(ThinkingConfig { thinking_budget: Some(-1) }),
        ..Default::default()
    }
}

pub fn safety_settings() -> Vec<SafetySetting> {
    [
        HarmCategory::HateSpeech,
        HarmCategory::DangerousContent,
        HarmCategory::SexuallyExplicit,
        HarmCategory::Harassment,
    ]
    .into_iter()
    .map(|category| SafetySetting { category, threshold: HarmBlockThreshold::Off })
    .collect()
}

pub fn tools() -> Vec<Tool> {
    vec![Tool::google_search()]
}

/// The complete request body for one run.
pub fn scripted_request() -> GenerateRequest {
    GenerateRequest {
        contents: scripted_conversation(),
        tools: Some(tools()),
        generation_config: Some(generation_config()),
        safety_settings: Some(safety_settings()),
    }
}
