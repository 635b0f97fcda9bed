// src/pipeline.rs
use futures_util::future::try_join_all;
use log::info;

use crate::errors::AssetGenError;
use crate::models::{AspectRatio, BrandContext, GeneratedVariant, OutputType};
use crate::prompts::{assemble_prompts, truncate_chars};
use crate::services::ModelApi;
use crate::styles::StyleKey;

/// Hard input limit of the generation model. Applied here rather than in the
/// assembler because the limit belongs to the model, not to the prompt.
pub const MAX_GENERATION_PROMPT_CHARS: usize = 3800;

/// Drive the full pipeline for one request: describe the upload, assemble
/// one prompt per selected style, then fan the generation calls out in
/// parallel. Fail-fast: the first error discards every other result and the
/// whole request fails. Output order is selection order, not completion
/// order.
pub async fn run(
    model: &dyn ModelApi,
    image_data_uri: &str,
    brand: &BrandContext,
    output_type: OutputType,
    aspect_ratio: AspectRatio,
    styles: &[StyleKey],
) -> Result<Vec<GeneratedVariant>, AssetGenError> {
    let description = model.describe_image(image_data_uri, brand).await?;
    info!(
        "Image analysis complete ({} chars): {}",
        description.chars().count(),
        truncate_chars(&description, 100)
    );

    let prompts = assemble_prompts(brand, &description, output_type, aspect_ratio, styles);
    let size = aspect_ratio.image_size();

    let generations = prompts.into_iter().enumerate().map(|(index, prompt)| {
        let style_name = prompt.style_name;
        let truncated = truncate_chars(&prompt.text, MAX_GENERATION_PROMPT_CHARS).to_string();
        async move {
            info!("Generating image {} ({})...", index + 1, style_name);
            let image_url = model.generate_image(&truncated, size).await?;
            Ok::<_, AssetGenError>(GeneratedVariant {
                id: format!("variant-{}", index + 1),
                image_url,
                prompt: truncated,
                style: style_name,
            })
        }
    });

    let variants = try_join_all(generations).await?;
    info!("All {} images generated", variants.len());
    Ok(variants)
}
