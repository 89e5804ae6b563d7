//! Bounds the size of any image entering a record so serialized
//! snapshots stay small enough for the transport.
//!
//! Normalization is best-effort: any input that cannot be decoded is
//! passed through unchanged rather than failing the attach-photo action.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::GenericImageView;
use log::debug;

/// Neither image dimension may exceed this after normalization.
pub const MAX_DIMENSION: u32 = 1200;

/// JPEG re-encode quality factor.
pub const JPEG_QUALITY: u8 = 60;

/// Normalizes an encoded (data-URL) image: scales so neither dimension
/// exceeds [`MAX_DIMENSION`] and re-encodes as JPEG at [`JPEG_QUALITY`].
///
/// Non-image inputs and anything that fails to decode are returned
/// unchanged. Decoding runs on the blocking pool; callers must await the
/// result before appending it to a photo list (see the session layer).
pub async fn normalize_image(encoded: String) -> String {
    if !encoded.starts_with("data:image") {
        return encoded;
    }

    let input = encoded.clone();
    match tokio::task::spawn_blocking(move || {
        let _span = tracing::info_span!("normalize.image").entered();
        match try_normalize(&input) {
            Ok(normalized) => normalized,
            Err(reason) => {
                debug!("Image normalization skipped: {}", reason);
                input
            }
        }
    })
    .await
    {
        Ok(result) => result,
        Err(e) => {
            debug!("Image normalization task failed: {}", e);
            encoded
        }
    }
}

fn try_normalize(encoded: &str) -> Result<String, String> {
    let (_, payload) = encoded
        .split_once(";base64,")
        .ok_or_else(|| "not a base64 data URL".to_string())?;

    let bytes = BASE64
        .decode(payload)
        .map_err(|e| format!("base64 decode failed: {}", e))?;

    let img = image::load_from_memory(&bytes)
        .map_err(|e| format!("image decode failed: {}", e))?;

    let (width, height) = img.dimensions();
    let img = if width.max(height) > MAX_DIMENSION {
        // resize preserves aspect ratio within the bounding box
        img.resize(MAX_DIMENSION, MAX_DIMENSION, FilterType::Triangle)
    } else {
        img
    };

    // JPEG has no alpha channel
    let rgb = img.to_rgb8();
    let mut jpeg = Vec::new();
    let encoder = JpegEncoder::new_with_quality(&mut jpeg, JPEG_QUALITY);
    rgb.write_with_encoder(encoder)
        .map_err(|e| format!("jpeg encode failed: {}", e))?;

    Ok(format!("data:image/jpeg;base64,{}", BASE64.encode(&jpeg)))
}
