//! Logo overlay onto generated posters.

use super::calculations::{logo_dimensions, overlay_layout, padded_layout, Placement};
use crate::error::AppError;
use crate::output::write_poster;
use crate::pipeline::Compositor;
use crate::types::{Anchor, CompositedPoster, HexColor, RasterBytes, ScaleRatio};
use image::imageops::{self, FilterType};
use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use std::io::Cursor;
use std::path::PathBuf;

/// How the logo is sized and placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogoPlacement {
    pub anchor: Anchor,
    pub scale_ratio: ScaleRatio,
    pub margin: u32,
    /// Paste into an added strip instead of over generated content.
    pub non_overlapping: bool,
    pub strip_color: HexColor,
}

impl Default for LogoPlacement {
    fn default() -> Self {
        Self {
            anchor: Anchor::default(),
            scale_ratio: ScaleRatio::default(),
            margin: crate::constants::DEFAULT_LOGO_MARGIN,
            non_overlapping: false,
            strip_color: HexColor::WHITE,
        }
    }
}

/// Composites a logo file from disk and writes the result to `output_path`.
#[derive(Debug, Clone)]
pub struct LogoCompositor {
    logo_path: PathBuf,
    output_path: PathBuf,
    placement: LogoPlacement,
}

impl LogoCompositor {
    pub fn new(
        logo_path: impl Into<PathBuf>,
        output_path: impl Into<PathBuf>,
        placement: LogoPlacement,
    ) -> Self {
        Self {
            logo_path: logo_path.into(),
            output_path: output_path.into(),
            placement,
        }
    }

    fn persist(
        &self,
        bytes: RasterBytes,
        logo_applied: bool,
    ) -> Result<CompositedPoster, AppError> {
        write_poster(&self.output_path, bytes.as_bytes())?;
        Ok(CompositedPoster::new(bytes, self.output_path.clone(), logo_applied))
    }
}

impl Compositor for LogoCompositor {
    fn logo_available(&self) -> bool {
        self.logo_path.is_file()
    }

    fn overlay(&self, image: RasterBytes) -> Result<CompositedPoster, AppError> {
        if !self.logo_available() {
            log::warn!(
                "Logo asset not found at {}; skipping compositing",
                self.logo_path.display()
            );
            return self.persist(image, false);
        }

        let logo = image::open(&self.logo_path)?;
        let composed = compose(image.as_bytes(), &logo, &self.placement)?;
        log::info!(
            "Composited logo at {} (1/{} width{})",
            self.placement.anchor,
            self.placement.scale_ratio.get(),
            if self.placement.non_overlapping { ", padded" } else { "" }
        );
        self.persist(composed, true)
    }
}

/// Decodes `poster`, pastes `logo` per `placement` and re-encodes as PNG.
///
/// The logo's alpha channel is the paste mask; the output is flattened into
/// a single RGBA raster.
pub fn compose(
    poster: &[u8],
    logo: &DynamicImage,
    placement: &LogoPlacement,
) -> Result<RasterBytes, AppError> {
    let poster = image::load_from_memory(poster)?.to_rgba8();
    let (logo_w, logo_h) = logo_dimensions(
        poster.width(),
        (logo.width(), logo.height()),
        placement.scale_ratio.get(),
    );
    let logo = logo.resize_exact(logo_w, logo_h, FilterType::Lanczos3).to_rgba8();

    let layout = if placement.non_overlapping {
        padded_layout(placement.anchor, poster.dimensions(), logo.dimensions(), placement.margin)
    } else {
        overlay_layout(placement.anchor, poster.dimensions(), logo.dimensions(), placement.margin)
    };

    let canvas = paint(&poster, &logo, &layout, placement.strip_color);
    encode_png(canvas)
}

fn paint(poster: &RgbaImage, logo: &RgbaImage, layout: &Placement, strip: HexColor) -> RgbaImage {
    let mut canvas = if layout.canvas == poster.dimensions() {
        poster.clone()
    } else {
        let (w, h) = layout.canvas;
        let mut padded = RgbaImage::from_pixel(w, h, Rgba(strip.to_rgba()));
        let (x, y) = layout.image_offset;
        imageops::replace(&mut padded, poster, i64::from(x), i64::from(y));
        padded
    };
    let (x, y) = layout.logo_offset;
    imageops::overlay(&mut canvas, logo, i64::from(x), i64::from(y));
    canvas
}

fn encode_png(canvas: RgbaImage) -> Result<RasterBytes, AppError> {
    let mut buffer = Cursor::new(Vec::new());
    DynamicImage::ImageRgba8(canvas).write_to(&mut buffer, ImageFormat::Png)?;
    Ok(RasterBytes::new(buffer.into_inner()))
}
