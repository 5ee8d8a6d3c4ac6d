mod camera;
pub mod demo;
mod geometry;
pub mod helpers;
mod texture;

pub use geometry::{Map, MapError, Portal, Sector, SectorId, Wall, WallId};

pub use camera::Camera;

pub use texture::{NO_TEXTURE, TILE_SIZE, Texture, TextureBank, TextureError, TextureId};
