//! Drives a four frame walk cycle against a surface that logs every draw
//! call instead of blitting pixels.
//!
//! ```sh
//! RUST_LOG=info cargo run --example walk
//! ```

use std::sync::Arc;

use flipbook::prelude::*;

struct LogSurface;

impl Surface for LogSurface {
    fn set_alpha(&mut self, alpha: f32) {
        log::debug!("alpha = {alpha}");
    }

    fn draw_region(
        &mut self,
        texture: &Handle,
        src_pos: Vec2,
        src_size: Vec2,
        dst_pos: Vec2,
        dst_size: Vec2,
    ) {
        log::info!(
            "blit texture {} src {src_pos}x{src_size} -> dst {dst_pos}x{dst_size}",
            texture.id()
        );
    }
}

struct Footstep;

impl Sound for Footstep {
    fn play(&self) {
        log::info!("footstep");
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let config = SheetConfig::from_json(
        r#"{
            "width": 32,
            "height": 32,
            "cols": 4,
            "sprites": [
                {"name": "stand"},
                {"name": "walk_1", "y": 1},
                {"name": "walk_2", "y": 1},
                {"name": "walk_3"}
            ]
        }"#,
    )?;
    let sheet = Arc::new(SpriteSheet::new(Handle::alloc(), config)?);

    let config = AnimationConfig::from_json(
        r#"{
            "animation": [
                {"spriteName": "stand", "length": 0.2},
                {"spriteName": "walk_1", "length": 0.2},
                {"spriteName": "walk_2", "length": 0.2},
                {"spriteName": "walk_3", "length": 0.2}
            ],
            "repeat": true,
            "loopFrame": 1
        }"#,
    )?;
    let mut walk = Animation::new(sheet, config)?.with_sound_trigger(1, Arc::new(Footstep));

    let mut surface = LogSurface;
    for tick in 0..20 {
        walk.update(0.1);
        walk.render(&mut surface, Vec2::new(tick as f32 * 4.0, 100.0), 2.0, 1.0)?;
    }
    Ok(())
}
