//! Portal-sector raycasting engine.
//!
//! A 2D map of convex [`world::Sector`]s joined by portals is rendered in
//! first person by casting one ray per screen column
//! ([`renderer::column::render_view`]) and walked with collision-clipped
//! movement ([`sim::try_move`]). The host owns the frame loop, the window
//! and the key events; the engine consumes a per-frame
//! [`sim::InputState`] snapshot plus elapsed milliseconds and draws
//! through the two-primitive [`renderer::Surface`] abstraction.

pub mod renderer;
pub mod sim;
pub mod world;
