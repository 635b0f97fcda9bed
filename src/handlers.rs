// src/handlers.rs
use actix_multipart::Multipart;
use actix_web::{HttpResponse, web};
use base64::{Engine as _, engine::general_purpose};
use futures_util::TryStreamExt;
use log::info;
use uuid::Uuid;

use crate::AppState;
use crate::errors::AssetGenError;
use crate::models::{AspectRatio, BrandContext, GenerateResponse, OutputType};
use crate::pipeline;
use crate::styles::StyleKey;

struct UploadedFile {
    filename: String,
    mime: String,
    data: Vec<u8>,
}

/// POST /api/v1/generate — multipart submission from the wizard. Validates,
/// drives the describe/assemble/generate pipeline, and returns the ordered
/// variant list.
pub async fn generate_assets(
    mut payload: Multipart,
    data: web::Data<AppState>,
) -> Result<HttpResponse, AssetGenError> {
    let request_id = Uuid::new_v4();
    info!("[{}] generate request received", request_id);

    // Credential check comes before any other work.
    if !data.model.is_configured() {
        return Err(AssetGenError::MissingApiKey);
    }

    let mut file: Option<UploadedFile> = None;
    let mut email: Option<String> = None;
    let mut output_type_raw: Option<String> = None;
    let mut aspect_ratio_raw: Option<String> = None;
    let mut styles_raw: Option<String> = None;
    let mut brand_data_raw: Option<String> = None;

    while let Some(mut field) = payload
        .try_next()
        .await
        .map_err(|e| AssetGenError::Validation(format!("Multipart error: {}", e)))?
    {
        let content_disposition = field.content_disposition();
        let Some(name) = content_disposition.get_name().map(|n| n.to_string()) else {
            continue;
        };

        if name == "file" {
            let filename = content_disposition
                .get_filename()
                .unwrap_or("upload")
                .to_string();
            let mime = field
                .content_type()
                .map(|ct| ct.to_string())
                .unwrap_or_default();

            let mut bytes = Vec::new();
            while let Some(chunk) = field
                .try_next()
                .await
                .map_err(|e| AssetGenError::Validation(format!("Upload read error: {}", e)))?
            {
                bytes.extend_from_slice(&chunk);
            }
            file = Some(UploadedFile {
                filename,
                mime,
                data: bytes,
            });
            continue;
        }

        let mut bytes = Vec::new();
        while let Some(chunk) = field
            .try_next()
            .await
            .map_err(|e| AssetGenError::Validation(format!("Field read error: {}", e)))?
        {
            bytes.extend_from_slice(&chunk);
        }
        let value = String::from_utf8(bytes)
            .map_err(|_| AssetGenError::Validation(format!("Field '{}' is not UTF-8", name)))?;

        match name.as_str() {
            "email" => email = Some(value),
            "outputType" => output_type_raw = Some(value),
            "aspectRatio" => aspect_ratio_raw = Some(value),
            "styles" => styles_raw = Some(value),
            "brandData" => brand_data_raw = Some(value),
            _ => {}
        }
    }

    let (Some(file), Some(email), Some(brand_data_raw)) = (file, email, brand_data_raw) else {
        return Err(AssetGenError::Validation(
            "Fil, e-post och varumärkesdata krävs".to_string(),
        ));
    };

    // We analyze a still image even when the logical submission is a video;
    // frame extraction happened client-side.
    if !data.image_processor.is_supported_mime(&file.mime) {
        let shown = if file.mime.is_empty() {
            "unknown"
        } else {
            file.mime.as_str()
        };
        return Err(AssetGenError::Validation(format!(
            "Unsupported upload format ({}). Please upload a PNG, JPEG, GIF, or WEBP image. \
            If you're generating a video, upload a video and we'll extract a frame (client-side) — if this persists, re-upload.",
            shown
        )));
    }

    let brand: BrandContext = serde_json::from_str(&brand_data_raw)
        .map_err(|e| AssetGenError::Validation(format!("Invalid brandData JSON: {}", e)))?;

    let styles: Vec<StyleKey> = match styles_raw {
        Some(raw) => serde_json::from_str(&raw)
            .map_err(|e| AssetGenError::Validation(format!("Invalid styles JSON: {}", e)))?,
        None => StyleKey::DEFAULT_SELECTION.to_vec(),
    };

    let output_type = OutputType::from_field(output_type_raw.as_deref().unwrap_or("image"));
    let aspect_ratio = AspectRatio::from_field(aspect_ratio_raw.as_deref().unwrap_or("landscape"));

    info!(
        "[{}] file: {} ({} bytes, {}), brand: {}, styles: {:?}, output: {:?}, aspect: {:?}",
        request_id,
        file.filename,
        file.data.len(),
        file.mime,
        brand.brand_name,
        styles,
        output_type,
        aspect_ratio
    );

    let prepared = data
        .image_processor
        .prepare_for_vision(&file.data, &file.mime)?;
    let data_uri = format!(
        "data:{};base64,{}",
        prepared.mime,
        general_purpose::STANDARD.encode(&prepared.data)
    );

    let results = pipeline::run(
        data.model.as_ref(),
        &data_uri,
        &brand,
        output_type,
        aspect_ratio,
        &styles,
    )
    .await?;

    // No delivery mechanism exists; the address is only logged.
    info!("[{}] results would be sent to: {}", request_id, email);

    Ok(HttpResponse::Ok().json(GenerateResponse { results }))
}

pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "assetgen",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
