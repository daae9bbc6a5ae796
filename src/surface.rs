use glam::Vec2;

use crate::handle::Handle;

/// Render target for [`Animation::render`](crate::animation::Animation::render).
///
/// Mirrors what an immediate-mode 2D canvas offers: a global alpha and a
/// scaled blit of a texture region. Backends implement this over SDL, a web
/// canvas, or a recording stub in tests.
pub trait Surface {
    /// Set the global alpha applied to subsequent draws.
    fn set_alpha(&mut self, alpha: f32);

    /// Draw `src_size` pixels of `texture` starting at `src_pos`, scaled to
    /// `dst_size` at `dst_pos`.
    fn draw_region(
        &mut self,
        texture: &Handle,
        src_pos: Vec2,
        src_size: Vec2,
        dst_pos: Vec2,
        dst_size: Vec2,
    );
}
