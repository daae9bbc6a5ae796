pub use crate::animation::{Animation, AnimationConfig, DrawCommand, Frame, Playback};
pub use crate::audio::Sound;
pub use crate::errors::Error;
pub use crate::handle::{Handle, HandleId};
pub use crate::sheet::{SheetConfig, SpriteDef, SpriteRegion, SpriteSheet};
pub use crate::surface::Surface;
pub use anyhow::{self, Result};
pub use glam::{self, Vec2};
