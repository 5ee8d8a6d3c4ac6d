//! Rendering abstraction layer.
//!
//! *The core never touches a pixel buffer directly.*  The column renderer
//! emits exactly two drawing primitives — a rectangle fill and a one-texel-
//! wide texture-column blit — against anything that implements [`Surface`].
//! The software back-end lives in [`software`]; another back-end only has
//! to provide the same two primitives.

pub mod color;
pub mod column;
pub mod portal;
pub mod raycast;
pub mod software;

use crate::world::Texture;
use color::Rgb;

/// Destination for the renderer's drawing primitives.
///
/// Implementations clip to their own bounds; zero or negative extents are
/// no-ops, never errors.
pub trait Surface {
    fn width(&self) -> usize;
    fn height(&self) -> usize;

    /// Fill the axis-aligned rectangle at `(x, y)` sized `w × h`.
    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Rgb);

    /// Stretch column `src_col` of `tex` onto the vertical span
    /// `top .. top + height` at screen column `dst_x`, darkening every
    /// texel by `shade` (see [`color::darken`]).
    fn blit_column(&mut self, tex: &Texture, src_col: usize, dst_x: i32, top: i32, height: i32, shade: f32);
}
