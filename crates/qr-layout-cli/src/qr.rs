use anyhow::{Context, Result};
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use image::{GrayImage, ImageBuffer, Luma};
use qr_layout::ImagePayload;
use qrcode::QrCode;
use std::io::Cursor;
use std::path::Path;

/// Modules of light border around the code
const QUIET_ZONE: u32 = 4;

/// Encode `text` as a QR code PNG and wrap it as a base64 payload
pub fn encode_payload(text: &str, size: u32) -> Result<ImagePayload> {
    let png = generate_png(text, size)?;
    Ok(ImagePayload::png_base64(BASE64.encode(png)))
}

/// Read an already base64-encoded PNG from disk
pub async fn read_payload(path: &Path) -> Result<ImagePayload> {
    let data = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read payload {}", path.display()))?;
    Ok(ImagePayload::png_base64(data.trim()))
}

fn generate_png(text: &str, size: u32) -> Result<Vec<u8>> {
    let code = QrCode::new(text.as_bytes()).context("QR encoding failed")?;

    let modules = code.to_colors();
    let module_count = code.width() as u32;

    // Fit whole modules into the requested size
    let total_modules = module_count + QUIET_ZONE * 2;
    let module_size = (size / total_modules).max(1);
    let actual_size = total_modules * module_size;

    let mut img: GrayImage = ImageBuffer::from_pixel(actual_size, actual_size, Luma([255]));
    for (y, row) in modules.chunks(module_count as usize).enumerate() {
        for (x, &module) in row.iter().enumerate() {
            if module != qrcode::Color::Dark {
                continue;
            }
            let px = (x as u32 + QUIET_ZONE) * module_size;
            let py = (y as u32 + QUIET_ZONE) * module_size;
            for dy in 0..module_size {
                for dx in 0..module_size {
                    img.put_pixel(px + dx, py + dy, Luma([0]));
                }
            }
        }
    }

    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, image::ImageFormat::Png)
        .context("PNG encoding failed")?;
    Ok(buf.into_inner())
}
