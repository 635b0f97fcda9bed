// src/models.rs
use serde::{Deserialize, Serialize};

/// Brand metadata submitted by the wizard as the `brandData` multipart field.
/// Lives only for the duration of one request.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandContext {
    pub brand_name: String,
    pub colors: Vec<String>,
    pub mood: String,
}

/// What the user ultimately wants. Video submissions are serviced from a
/// client-extracted still frame, so both arms produce a single image; the
/// distinction only changes the assembled prompt text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputType {
    Image,
    Video,
}

impl OutputType {
    pub fn from_field(value: &str) -> Self {
        if value == "video" {
            OutputType::Video
        } else {
            OutputType::Image
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AspectRatio {
    Landscape,
    Portrait,
}

impl AspectRatio {
    pub fn from_field(value: &str) -> Self {
        if value == "portrait" {
            AspectRatio::Portrait
        } else {
            AspectRatio::Landscape
        }
    }

    /// Output canvas requested from the generation model. Exactly two
    /// buckets, no intermediate sizes.
    pub fn image_size(&self) -> &'static str {
        match self {
            AspectRatio::Landscape => "1792x1024",
            AspectRatio::Portrait => "1024x1792",
        }
    }
}

/// One fully assembled generation instruction, paired with the display name
/// of the style that produced it. Pure function of its inputs.
#[derive(Debug, Clone)]
pub struct GenerationPrompt {
    pub text: String,
    pub style_name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct GeneratedVariant {
    pub id: String,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    pub prompt: String,
    pub style: String,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub results: Vec<GeneratedVariant>,
}
