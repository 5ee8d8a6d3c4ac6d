// Repository of wall tiles. The renderer and map data interact through
// `TextureId` only; tiles are generated procedurally at startup.

use std::collections::HashMap;

use crate::renderer::color::{Rgb, darken, rgb};

/// Runtime handle for a texture in this bank.
///
/// *Guaranteed* to remain stable for the lifetime of the bank.
pub type TextureId = u16;

/// `TextureId` whose pixels are the checkerboard fallback.
/// Always = 0 because `TextureBank::new()` inserts it first.
pub const NO_TEXTURE: TextureId = 0;

/// Side length of the square tiles produced by the built-in generators.
pub const TILE_SIZE: usize = 64;

/// CPU-side storage: packed 0x00RRGGBB in row-major order.
#[derive(Clone, Debug, PartialEq)]
pub struct Texture {
    pub name: String,
    pub w: usize,
    pub h: usize,
    pub pixels: Vec<Rgb>,
}

impl Texture {
    /// Sample one texel with no filtering. Out-of-range coordinates wrap,
    /// so callers may tile freely.
    #[inline]
    pub fn texel(&self, x: usize, y: usize) -> Rgb {
        self.pixels[(y % self.h) * self.w + (x % self.w)]
    }

    pub fn checker(light: Rgb, dark: Rgb) -> Self {
        let mut pixels = vec![0; TILE_SIZE * TILE_SIZE];
        for y in 0..TILE_SIZE {
            for x in 0..TILE_SIZE {
                pixels[y * TILE_SIZE + x] = if ((x / 8) ^ (y / 8)) & 1 == 0 {
                    light
                } else {
                    dark
                };
            }
        }
        Texture {
            name: "CHECKER".to_string(),
            w: TILE_SIZE,
            h: TILE_SIZE,
            pixels,
        }
    }

    /// Staggered courses with darker mortar lines.
    pub fn brick(face: Rgb, mortar: Rgb) -> Self {
        const COURSE: usize = 16;
        let mut pixels = vec![0; TILE_SIZE * TILE_SIZE];
        for y in 0..TILE_SIZE {
            let course = y / COURSE;
            let stagger = if course & 1 == 0 { 0 } else { TILE_SIZE / 2 };
            for x in 0..TILE_SIZE {
                let in_mortar = y % COURSE >= COURSE - 2 || (x + stagger) % (TILE_SIZE / 2) < 2;
                let base = if in_mortar { mortar } else { face };
                // slight per-course tint so repeats read as masonry
                pixels[y * TILE_SIZE + x] = darken(base, (course % 3) as f32 * 4.0);
            }
        }
        Texture {
            name: "BRICK".to_string(),
            w: TILE_SIZE,
            h: TILE_SIZE,
            pixels,
        }
    }

    /// Vertical metal panels with a bright seam every quarter tile.
    pub fn panel(face: Rgb) -> Self {
        let mut pixels = vec![0; TILE_SIZE * TILE_SIZE];
        for y in 0..TILE_SIZE {
            for x in 0..TILE_SIZE {
                let seam = x % (TILE_SIZE / 4) == 0;
                let shade = (x % (TILE_SIZE / 4)) as f32 * 1.5;
                pixels[y * TILE_SIZE + x] = if seam {
                    rgb(0xE0, 0xE0, 0xE8)
                } else {
                    darken(face, shade)
                };
            }
        }
        Texture {
            name: "PANEL".to_string(),
            w: TILE_SIZE,
            h: TILE_SIZE,
            pixels,
        }
    }
}

/// Convenience checkerboard (grey) used as the missing-texture fallback.
impl Default for Texture {
    fn default() -> Self {
        Texture::checker(rgb(0xB0, 0xB0, 0xB0), rgb(0x50, 0x50, 0x50))
    }
}

/// Things that can go wrong when using the bank.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TextureError {
    /// Attempted to insert a second texture with an existing name.
    #[error("texture name `{0}` already present in bank")]
    Duplicate(String),

    /// Requested ID is outside `0 .. bank.len()`.
    #[error("texture id {0} out of range")]
    BadId(TextureId),
}

/// A cache of tiles addressed by stable ids.
///
/// * Stores exactly one copy of every name.
/// * ID **0** is always the "missing" checkerboard.
pub struct TextureBank {
    by_name: HashMap<String, TextureId>,
    data: Vec<Texture>,
}

impl TextureBank {
    /// Create an empty bank with a mandatory *missing* texture used as
    /// fallback.  The texture is inserted under the fixed name `"MISSING"`
    /// and obtains the handle **0**.
    pub fn new(missing_tex: Texture) -> Self {
        let mut by_name = HashMap::new();
        by_name.insert("MISSING".into(), NO_TEXTURE);
        Self {
            by_name,
            data: vec![missing_tex],
        }
    }

    pub fn default_with_checker() -> Self {
        Self::new(Texture::default())
    }

    /// Number of textures stored (including the "missing" one).
    pub fn len(&self) -> usize {
        self.data.len()
    }
    pub fn is_empty(&self) -> bool {
        self.data.len() == 1
    } // only checker

    /// Obtain the id for a *loaded* texture by name.
    /// Returns `None` if the name is unknown.
    pub fn id(&self, name: &str) -> Option<TextureId> {
        self.by_name.get(name).copied()
    }

    /// Fallback-safe query: unknown names resolve to the checkerboard id.
    pub fn id_or_missing(&self, name: &str) -> TextureId {
        self.id(name).unwrap_or(NO_TEXTURE)
    }

    /// Borrow a texture by id, with bounds-checking.
    pub fn texture(&self, id: TextureId) -> Result<&Texture, TextureError> {
        self.data.get(id as usize).ok_or(TextureError::BadId(id))
    }

    /// Insert a texture under `name`.
    ///
    /// * Returns the newly assigned `TextureId`.
    /// * Fails if the name already exists (`Duplicate`).
    pub fn insert<S: Into<String>>(
        &mut self,
        name: S,
        tex: Texture,
    ) -> Result<TextureId, TextureError> {
        let name = name.into();
        if self.by_name.contains_key(&name) {
            return Err(TextureError::Duplicate(name));
        }
        let id = self.data.len() as TextureId;
        self.data.push(tex);
        self.by_name.insert(name, id);
        Ok(id)
    }
}

/*======================================================================*/
/*                               Tests                                  */
/*======================================================================*/
#[cfg(test)]
mod tests {
    use super::*;

    fn dummy_tex(color: Rgb) -> Texture {
        Texture {
            name: "Dummy".to_string(),
            w: 2,
            h: 2,
            pixels: vec![color; 4],
        }
    }

    #[test]
    fn insert_and_lookup() {
        let mut bank = TextureBank::default_with_checker();
        let red = bank.insert("RED", dummy_tex(0xFF0000)).unwrap();
        let blue = bank.insert("BLUE", dummy_tex(0x0000FF)).unwrap();

        assert_ne!(red, NO_TEXTURE);
        assert_ne!(blue, red);
        assert_eq!(bank.id("RED"), Some(red));
        assert_eq!(bank.id("BLUE"), Some(blue));
        assert_eq!(bank.id("NOPE"), None);
        assert_eq!(bank.id_or_missing("NOPE"), NO_TEXTURE);

        assert_eq!(bank.texture(red).unwrap().pixels[0], 0xFF0000);
        assert_eq!(bank.texture(blue).unwrap().pixels[0], 0x0000FF);
    }

    #[test]
    fn duplicate_name_rejected() {
        let mut bank = TextureBank::default_with_checker();
        bank.insert("WOOD", dummy_tex(1)).unwrap();
        let err = bank.insert("WOOD", dummy_tex(2)).unwrap_err();
        assert_eq!(err, TextureError::Duplicate("WOOD".into()));
        // texture count still 2 (checker + first WOOD)
        assert_eq!(bank.len(), 2);
    }

    #[test]
    fn bad_id_guard() {
        let bank = TextureBank::default_with_checker();
        let bad = TextureId::MAX;
        assert_eq!(bank.texture(bad).unwrap_err(), TextureError::BadId(bad));
    }

    #[test]
    fn texel_wraps_both_axes() {
        let tile = Texture::checker(0xFFFFFF, 0x000000);
        assert_eq!(tile.texel(0, 0), tile.texel(TILE_SIZE, TILE_SIZE));
        assert_eq!(tile.texel(3, 5), tile.texel(3 + TILE_SIZE * 2, 5));
    }
}
