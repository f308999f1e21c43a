use crate::errors::{AppError, AppResult};
use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use serde::Serialize;
use std::path::PathBuf;

/// Largest edge an ICO entry can hold.
pub const ICON_SIZE: u32 = 256;

const TRANSPARENT_WHITE: Rgba<u8> = Rgba([255, 255, 255, 0]);

#[derive(Debug, Clone)]
pub struct IconOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    pub strip_background: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct IconReport {
    pub output: PathBuf,
    pub width: u32,
    pub height: u32,
    pub cleared_pixels: usize,
}

/// White, or the light grey square of a baked-in transparency checkerboard.
pub fn is_background_pixel(pixel: Rgba<u8>) -> bool {
    let [r, g, b, _] = pixel.0;
    if r > 240 && g > 240 && b > 240 {
        return true;
    }
    r > 200 && g > 200 && b > 200 && r.abs_diff(g) < 10
}

pub fn strip_background(image: &mut RgbaImage) -> usize {
    let mut cleared = 0usize;
    for pixel in image.pixels_mut() {
        if is_background_pixel(*pixel) {
            *pixel = TRANSPARENT_WHITE;
            cleared += 1;
        }
    }
    cleared
}

/// Shrinks to fit `ICON_SIZE` keeping the aspect ratio. Smaller images are left alone.
fn fit_icon(image: DynamicImage) -> DynamicImage {
    if image.width() <= ICON_SIZE && image.height() <= ICON_SIZE {
        return image;
    }
    image.thumbnail(ICON_SIZE, ICON_SIZE)
}

pub fn convert_to_ico(options: &IconOptions) -> AppResult<IconReport> {
    if !options.input.is_file() {
        return Err(AppError::NotFound(format!(
            "icon source {} not found",
            options.input.display()
        )));
    }

    let mut rgba = image::open(&options.input)?.to_rgba8();
    let cleared_pixels = if options.strip_background {
        strip_background(&mut rgba)
    } else {
        0
    };

    let icon = fit_icon(DynamicImage::ImageRgba8(rgba));
    icon.save_with_format(&options.output, ImageFormat::Ico)?;

    tracing::info!(
        input = %options.input.display(),
        output = %options.output.display(),
        width = icon.width(),
        height = icon.height(),
        cleared_pixels,
        "icon written"
    );

    Ok(IconReport {
        output: options.output.clone(),
        width: icon.width(),
        height: icon.height(),
        cleared_pixels,
    })
}
