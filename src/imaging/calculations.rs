//! Pure placement arithmetic for the logo overlay.
//!
//! All functions here are pure and testable without any I/O or images.

use crate::types::Anchor;

/// Where everything lands on the output canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Output canvas dimensions (width, height).
    pub canvas: (u32, u32),
    /// Top-left corner of the generated image on the canvas.
    pub image_offset: (u32, u32),
    /// Top-left corner of the resized logo on the canvas.
    pub logo_offset: (u32, u32),
}

/// Calculate the resized logo dimensions for a poster of width `poster_width`.
///
/// Width is `floor(poster_width / ratio)`; height is scaled by the same factor
/// so the aspect ratio is kept. Neither edge drops below one pixel.
///
/// # Examples
/// ```
/// # use newsposter::imaging::logo_dimensions;
/// // 1024px poster, 400x200 logo, ratio 4 → 256x128
/// assert_eq!(logo_dimensions(1024, (400, 200), 4), (256, 128));
/// ```
pub fn logo_dimensions(poster_width: u32, logo: (u32, u32), ratio: u32) -> (u32, u32) {
    let (logo_w, logo_h) = logo;
    let new_w = (poster_width / ratio.max(1)).max(1);
    let scaled = u64::from(logo_h) * u64::from(new_w) / u64::from(logo_w.max(1));
    let new_h = u32::try_from(scaled).unwrap_or(u32::MAX);
    (new_w, new_h.max(1))
}

/// Calculate the logo's top-left offset inside `canvas` for an anchor.
///
/// Right anchors keep `margin` from the right edge, center anchors are
/// horizontally centered; top anchors keep `margin` from the top edge and
/// bottom anchors from the bottom edge. Offsets saturate at zero.
pub fn logo_offset(
    anchor: Anchor,
    canvas: (u32, u32),
    logo: (u32, u32),
    margin: u32,
) -> (u32, u32) {
    let (canvas_w, canvas_h) = canvas;
    let (logo_w, logo_h) = logo;

    let x = if anchor.is_centered() {
        canvas_w.saturating_sub(logo_w) / 2
    } else {
        canvas_w.saturating_sub(logo_w).saturating_sub(margin)
    };
    let y = if anchor.is_top() {
        margin
    } else {
        canvas_h.saturating_sub(logo_h).saturating_sub(margin)
    };
    (x, y)
}

/// Layout for pasting the logo over the generated content.
pub fn overlay_layout(
    anchor: Anchor,
    image: (u32, u32),
    logo: (u32, u32),
    margin: u32,
) -> Placement {
    Placement {
        canvas: image,
        image_offset: (0, 0),
        logo_offset: logo_offset(anchor, image, logo, margin),
    }
}

/// Height of the padding strip that holds the logo in non-overlapping mode.
///
/// Saturates at `u32::MAX`.
pub fn strip_height(logo_height: u32, margin: u32) -> u32 {
    logo_height.saturating_add(margin.saturating_mul(2))
}

/// Layout that adds a strip on the anchor's side and places the logo in it.
///
/// The generated image is never covered: for top anchors it is pushed down
/// by the strip height, for bottom anchors the strip is appended below it.
pub fn padded_layout(
    anchor: Anchor,
    image: (u32, u32),
    logo: (u32, u32),
    margin: u32,
) -> Placement {
    let (image_w, image_h) = image;
    let strip = strip_height(logo.1, margin);
    let canvas = (image_w, image_h.saturating_add(strip));
    let image_offset = if anchor.is_top() { (0, strip) } else { (0, 0) };

    Placement {
        canvas,
        image_offset,
        logo_offset: logo_offset(anchor, canvas, logo, margin),
    }
}
