//! CPU frame-buffer back-end for the [`Surface`](crate::renderer::Surface)
//! abstraction. Owns one contiguous `Vec<u32>` per frame and loans it out
//! via `end_frame`, ready for `minifb::Window::update_with_buffer`.

use crate::renderer::Surface;
use crate::renderer::color::{Rgb, darken};
use crate::world::Texture;

const CLEAR_COLOR: Rgb = 0x20_20_20;

#[derive(Default)]
pub struct Framebuffer {
    scratch: Vec<Rgb>,
    width: usize,
    height: usize,
}

impl Framebuffer {
    /// (Re)allocate for the requested resolution and clear.
    pub fn begin_frame(&mut self, width: usize, height: usize) {
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.scratch.resize(width * height, 0);
        }
        self.scratch.fill(CLEAR_COLOR);
    }

    /// Finish the frame and **loan** the finished buffer to `submit`.
    ///
    /// The caller typically forwards it straight to its window:
    /// `fb.end_frame(|px, w, h| window.update_with_buffer(px, w, h))`.
    pub fn end_frame<F, T>(&mut self, submit: F) -> T
    where
        F: FnOnce(&[Rgb], usize, usize) -> T,
    {
        submit(&self.scratch, self.width, self.height)
    }
}

impl Surface for Framebuffer {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Rgb) {
        if w <= 0 || h <= 0 {
            return;
        }
        let x0 = x.clamp(0, self.width as i32) as usize;
        let y0 = y.clamp(0, self.height as i32) as usize;
        let x1 = (x + w).clamp(0, self.width as i32) as usize;
        let y1 = (y + h).clamp(0, self.height as i32) as usize;
        if x0 >= x1 {
            return;
        }

        for row in y0..y1 {
            self.scratch[row * self.width + x0..row * self.width + x1].fill(color);
        }
    }

    fn blit_column(
        &mut self,
        tex: &Texture,
        src_col: usize,
        dst_x: i32,
        top: i32,
        height: i32,
        shade: f32,
    ) {
        if height <= 0 || dst_x < 0 || dst_x >= self.width as i32 {
            return;
        }
        let x = dst_x as usize;
        let y0 = top.max(0);
        let y1 = (top + height).min(self.height as i32);

        for y in y0..y1 {
            // nearest-texel vertical stretch of the source column
            let v = ((y - top) as usize * tex.h) / height as usize;
            let texel = tex.texel(src_col, v);
            self.scratch[y as usize * self.width + x] = darken(texel, shade);
        }
    }
}

/*====================================================================*/
/*                                Tests                               */
/*====================================================================*/
