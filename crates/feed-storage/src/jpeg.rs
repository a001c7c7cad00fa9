//! JPEG normalisation of uploaded images

use image::codecs::jpeg::JpegEncoder;

use crate::error::{StorageError, StorageResult};

/// JPEG quality used for every stored image
pub const JPEG_QUALITY: u8 = 85;

/// Decode any supported image format and re-encode it as an RGB JPEG.
///
/// CPU bound; run it on the blocking pool.
pub fn normalize_to_jpeg(bytes: &[u8]) -> StorageResult<Vec<u8>> {
    let decoded = image::load_from_memory(bytes).map_err(|_| StorageError::InvalidImage)?;
    let rgb = decoded.to_rgb8();

    let mut out = Vec::new();
    rgb.write_with_encoder(JpegEncoder::new_with_quality(&mut out, JPEG_QUALITY))
        .map_err(|e| StorageError::Encode(e.to_string()))?;

    Ok(out)
}
