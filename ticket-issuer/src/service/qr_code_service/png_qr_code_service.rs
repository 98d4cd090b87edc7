use super::QrCodeService;
use crate::error::Error;
use anyhow::anyhow;
use base64::{engine::general_purpose::STANDARD, Engine};
use image::{ImageFormat, Luma};
use qrcode::QrCode;
use std::io::Cursor;

const MIN_DIMENSION: u32 = 256;

#[derive(Default)]
pub struct PngQrCodeService;

impl PngQrCodeService {
    pub fn new() -> Self {
        Self
    }
}

impl QrCodeService for PngQrCodeService {
    fn render_data_url(&self, content: &str) -> Result<String, Error> {
        let code = QrCode::new(content.as_bytes())
            .map_err(|err| anyhow!("failed to encode QR code: {err}"))?;

        let image = code
            .render::<Luma<u8>>()
            .min_dimensions(MIN_DIMENSION, MIN_DIMENSION)
            .build();

        let mut png = Cursor::new(Vec::new());
        image
            .write_to(&mut png, ImageFormat::Png)
            .map_err(|err| anyhow!("failed to write QR code PNG: {err}"))?;
        tracing::trace!(len = png.get_ref().len(), "rendered QR code");

        Ok(format!(
            "data:image/png;base64,{}",
            STANDARD.encode(png.into_inner())
        ))
    }
}
