//! QR rendering to PNG data URLs.

use std::io::Cursor;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use image::{GrayImage, ImageFormat, Luma};
use qrcode::{Color, QrCode};
use serde::{Deserialize, Serialize};

use crate::error::{TicketError, TicketResult};
use crate::payload::TicketPayload;

const DARK: Luma<u8> = Luma([0]);
const LIGHT: Luma<u8> = Luma([255]);

/// Rendering options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QrOptions {
    /// Side of the square image in pixels.
    pub width: u32,
    /// Quiet zone around the symbol, in modules.
    pub margin: u32,
}

impl Default for QrOptions {
    fn default() -> Self {
        Self {
            width: 400,
            margin: 1,
        }
    }
}

/// Renders `data` as a square grayscale PNG.
///
/// The image is exactly `options.width` pixels wide unless the symbol plus
/// margin needs more, in which case each module gets one pixel.
pub fn render_png(data: &[u8], options: &QrOptions) -> TicketResult<Vec<u8>> {
    let code = QrCode::new(data).map_err(|e| TicketError::Encoding(e.to_string()))?;
    let modules = code.width();
    let colors = code.to_colors();
    let margin = options.margin as usize;
    let span = modules + 2 * margin;
    let size = options.width.max(span as u32);

    let image = GrayImage::from_fn(size, size, |x, y| {
        let column = x as usize * span / size as usize;
        let row = y as usize * span / size as usize;
        if column < margin || row < margin {
            return LIGHT;
        }
        let (column, row) = (column - margin, row - margin);
        if column >= modules || row >= modules {
            return LIGHT;
        }
        match colors[row * modules + column] {
            Color::Dark => DARK,
            Color::Light => LIGHT,
        }
    });

    let mut png = Cursor::new(Vec::new());
    image
        .write_to(&mut png, ImageFormat::Png)
        .map_err(|e| TicketError::Encoding(e.to_string()))?;
    Ok(png.into_inner())
}

/// Renders `data` as a `data:image/png;base64,...` URL.
pub fn data_url(data: &[u8], options: &QrOptions) -> TicketResult<String> {
    let png = render_png(data, options)?;
    Ok(format!("data:image/png;base64,{}", STANDARD.encode(png)))
}

/// Encodes a ticket payload's JSON text as a QR data URL.
pub fn encode_data_url(payload: &TicketPayload, options: &QrOptions) -> TicketResult<String> {
    let text = payload.to_json()?;
    data_url(text.as_bytes(), options)
}
