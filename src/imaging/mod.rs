//! Brand compositing for generated posters.
//!
//! | Step | Implementation |
//! |------|----------------|
//! | Decode | `image::load_from_memory`, converted to RGBA8 |
//! | Resize logo | `resize_exact` with `Lanczos3`, width = poster width / ratio |
//! | Place | pure arithmetic in [`calculations`] |
//! | Paste | `imageops::overlay`, the logo's alpha is the mask |
//! | Encode | PNG, written by [`crate::output::write_poster`] |

pub mod calculations;
mod compositor;

pub use calculations::{
    logo_dimensions, logo_offset, overlay_layout, padded_layout, strip_height, Placement,
};
pub use compositor::{compose, LogoCompositor, LogoPlacement};
