// src/prompts.rs
use crate::models::{AspectRatio, BrandContext, GenerationPrompt, OutputType};
use crate::styles::StyleKey;

/// Mood phrase used whenever the submitted mood key is not in the lexicon.
pub const DEFAULT_MOOD_PHRASE: &str = "sophisticated and premium";

/// Description text is cut to this many characters before template
/// interpolation.
pub const DESCRIPTION_LIMIT: usize = 400;

/// At most this many palette entries make it into a template.
pub const PALETTE_LIMIT: usize = 5;

/// Fixed mood lexicon. Feeds both the vision-analysis user message and the
/// closing sentence of every assembled prompt.
pub fn mood_phrase(mood: &str) -> &'static str {
    match mood {
        "luxury" => "sophisticated, premium, exclusive, refined elegance",
        "energetic" => "dynamic, powerful, vibrant, full of energy and movement",
        "minimal" => "clean, simple, elegant, uncluttered with focus on essentials",
        "warm" => "cozy, welcoming, inviting, comfortable and approachable",
        "bold" => "strong, distinctive, daring, makes a powerful statement",
        "natural" => "organic, earthy, authentic, connected to nature",
        _ => DEFAULT_MOOD_PHRASE,
    }
}

/// Truncate to at most `max` characters without splitting a code point.
pub fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((index, _)) => &text[..index],
        None => text,
    }
}

/// System instruction for the vision-analysis call: the five facets the
/// model is asked to cover.
pub fn vision_system_instruction() -> &'static str {
    "You are an expert in marketing and visual analysis. Analyze the image and describe in English:\n\
    1. Main subject and composition\n\
    2. Key visual elements and objects\n\
    3. Colors and contrasts\n\
    4. What makes this image compelling\n\
    5. Core essence that should be preserved in a creative transformation\n\n\
    Be concise but capture the essential visual elements. Focus on what can be transformed into advertising imagery."
}

/// User message accompanying the image in the vision-analysis call.
pub fn vision_user_text(brand: &BrandContext) -> String {
    format!(
        "Analyze this image for the brand \"{}\". \n\
        The brand mood is: {}\n\
        Brand colors: {}\n\n\
        Describe the visual essence that should be captured when transforming this into advertising material.",
        brand.brand_name,
        mood_phrase(&brand.mood),
        brand.colors.join(", ")
    )
}

/// Assemble one generation prompt per selected style, in selection order.
/// Identical inputs always yield identical text.
pub fn assemble_prompts(
    brand: &BrandContext,
    description: &str,
    output_type: OutputType,
    aspect_ratio: AspectRatio,
    styles: &[StyleKey],
) -> Vec<GenerationPrompt> {
    let color_palette = brand
        .colors
        .iter()
        .take(PALETTE_LIMIT)
        .cloned()
        .collect::<Vec<_>>()
        .join(", ");
    let description_short = truncate_chars(description, DESCRIPTION_LIMIT);
    let mood = mood_phrase(&brand.mood);

    styles
        .iter()
        .map(|style| {
            let mut text = style.render(description_short, &color_palette, aspect_ratio);

            text.push_str(&format!(
                "\n\nThe overall feeling should be {}. This is for {}.",
                mood, brand.brand_name
            ));

            if output_type == OutputType::Video {
                text.push_str(
                    "\n\nThis will be animated - design with subtle motion potential (floating particles, flowing liquid, etc).",
                );
            }

            GenerationPrompt {
                text,
                style_name: style.display_name().to_string(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::styles::ALL_STYLES;

    fn brand(mood: &str, colors: &[&str]) -> BrandContext {
        BrandContext {
            brand_name: "Acme".to_string(),
            colors: colors.iter().map(|c| c.to_string()).collect(),
            mood: mood.to_string(),
        }
    }

    #[test]
    fn video_prompts_end_with_motion_hint() {
        let brand = brand("bold", &["#112233"]);
        let prompts = assemble_prompts(
            &brand,
            "desc",
            OutputType::Video,
            AspectRatio::Landscape,
            &ALL_STYLES,
        );
        for prompt in prompts {
            assert!(prompt.text.ends_with(
                "This will be animated - design with subtle motion potential (floating particles, flowing liquid, etc)."
            ));
        }
    }

    #[test]
    fn image_prompts_never_carry_motion_hint() {
        let brand = brand("bold", &["#112233"]);
        let prompts = assemble_prompts(
            &brand,
            "desc",
            OutputType::Image,
            AspectRatio::Landscape,
            &ALL_STYLES,
        );
        for prompt in prompts {
            assert!(!prompt.text.contains("This will be animated"));
        }
    }

    #[test]
    fn truncation_is_idempotent_at_the_limit() {
        let brand = brand("minimal", &["#112233"]);
        let base: String = "x".repeat(DESCRIPTION_LIMIT);
        let padded = format!("{}{}", base, "y".repeat(50));

        let from_base = assemble_prompts(
            &brand,
            &base,
            OutputType::Image,
            AspectRatio::Portrait,
            &[StyleKey::IceCube],
        );
        let from_padded = assemble_prompts(
            &brand,
            &padded,
            OutputType::Image,
            AspectRatio::Portrait,
            &[StyleKey::IceCube],
        );
        assert_eq!(from_base[0].text, from_padded[0].text);
    }

    #[test]
    fn truncate_chars_respects_multibyte_boundaries() {
        let text = "åäöåäö";
        assert_eq!(truncate_chars(text, 3), "åäö");
        assert_eq!(truncate_chars(text, 99), text);
    }

    #[test]
    fn only_first_five_colors_are_rendered() {
        let brand = brand(
            "warm",
            &["#one", "#two", "#three", "#four", "#five", "#six", "#seven"],
        );
        let prompts = assemble_prompts(
            &brand,
            "desc",
            OutputType::Image,
            AspectRatio::Landscape,
            &[StyleKey::LiquidMetal],
        );
        let text = &prompts[0].text;
        assert!(text.contains("#one, #two, #three, #four, #five"));
        assert!(!text.contains("#six"));
        assert!(!text.contains("#seven"));
    }

    #[test]
    fn unknown_mood_falls_back_everywhere() {
        let brand = brand("spacey", &["#112233"]);
        assert!(vision_user_text(&brand).contains(DEFAULT_MOOD_PHRASE));

        let prompts = assemble_prompts(
            &brand,
            "desc",
            OutputType::Image,
            AspectRatio::Landscape,
            &[StyleKey::NeonGlow],
        );
        assert!(prompts[0]
            .text
            .contains("The overall feeling should be sophisticated and premium. This is for Acme."));
    }

    #[test]
    fn bold_mood_phrase_reaches_the_prompt_suffix() {
        let brand = brand("bold", &["#112233", "#445566"]);
        let prompts = assemble_prompts(
            &brand,
            "desc",
            OutputType::Image,
            AspectRatio::Landscape,
            &[StyleKey::IceCube, StyleKey::LiquidMetal],
        );
        assert_eq!(prompts.len(), 2);
        for prompt in &prompts {
            assert!(prompt.text.contains("strong, distinctive"));
            assert!(prompt.text.contains("This is for Acme."));
        }
        assert_eq!(prompts[0].style_name, "Frozen in Ice");
        assert_eq!(prompts[1].style_name, "Liquid Metal");
    }

    #[test]
    fn empty_description_degrades_gracefully() {
        let brand = brand("natural", &["#112233"]);
        let prompts = assemble_prompts(
            &brand,
            "",
            OutputType::Image,
            AspectRatio::Landscape,
            &[StyleKey::UnderwaterDream],
        );
        assert!(prompts[0].text.contains("CONCEPT TO SUBMERGE: \n"));
    }

    #[test]
    fn vision_user_text_embeds_brand_details() {
        let brand = brand("luxury", &["#112233", "#445566"]);
        let text = vision_user_text(&brand);
        assert!(text.contains("for the brand \"Acme\""));
        assert!(text.contains("sophisticated, premium, exclusive, refined elegance"));
        assert!(text.contains("#112233, #445566"));
    }
}
