use core::fmt;
use std::{fmt::Debug, sync::Arc};

use glam::Vec2;
use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::{audio::Sound, errors::Error, handle::Handle, sheet::SpriteSheet, surface::Surface};

/// One animation step: which sprite to show and for how long.
///
/// `length` shares its unit with the `delta` passed to [`Animation::update`];
/// the crate never interprets the unit itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Frame {
    pub sprite_name: String,
    pub length: f32,
}

/// Serializable part of an animation. The sheet reference and sound
/// triggers are attached on [`Animation::new`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimationConfig {
    #[serde(default)]
    pub animation: Vec<Frame>,
    #[serde(default)]
    pub repeat: bool,
    #[serde(default)]
    pub key_frame: usize,
    #[serde(default)]
    pub loop_frame: Option<usize>,
}

impl AnimationConfig {
    /// Parse an animation description from JSON.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).map_err(Into::into)
    }
}

/// Complete playback state of an animator.
///
/// [`Playback::advance`] is a pure transition; rendering and audio effects
/// live elsewhere, so timing behavior is testable without a surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Playback {
    pub index: usize,
    pub elapsed: f32,
    pub speed: f32,
}

impl Playback {
    /// State at the start of playback: key frame, no accumulated time,
    /// speed 1.
    pub fn start(key_frame: usize) -> Self {
        Self {
            index: key_frame,
            elapsed: 0.0,
            speed: 1.0,
        }
    }

    /// One tick. At most one frame boundary is crossed per call, and the
    /// wraparound bound is `frames.len() * (1 / speed)`: raising the speed
    /// shrinks the effective sequence length, it does not scale `delta`.
    ///
    /// Speeds below 1 widen the bound past the frame list; the next call
    /// then panics on the out-of-range index rather than masking it.
    pub fn advance(
        mut self,
        delta: f32,
        frames: &[Frame],
        repeat: bool,
        key_frame: usize,
        loop_frame: Option<usize>,
    ) -> Self {
        self.elapsed += delta;

        let length = frames[self.index].length;
        if self.elapsed >= length {
            self.index += 1;
            self.elapsed = (self.elapsed - length).max(0.0);
        }

        if self.index as f32 >= frames.len() as f32 * (1.0 / self.speed) {
            if repeat {
                self.index = loop_frame.unwrap_or(key_frame);
            } else {
                self.index = self.index.saturating_sub(1);
            }
        }

        self
    }
}

/// Frame sequencer over a shared [`SpriteSheet`].
///
/// Driven by an external loop: [`Animation::update`] once per tick, then
/// [`Animation::render`]. Each animator owns its playback state; the sheet
/// is shared read-only.
#[derive(Clone)]
pub struct Animation {
    sheet: Arc<SpriteSheet>,
    frames: Vec<Frame>,
    repeat: bool,
    key_frame: usize,
    loop_frame: Option<usize>,
    sound_triggers: HashMap<usize, Arc<dyn Sound>>,
    state: Playback,
}

/// Resolved draw for the current frame, plus the sound trigger due with it.
#[derive(Clone)]
pub struct DrawCommand {
    pub texture: Handle,
    pub src_pos: Vec2,
    pub src_size: Vec2,
    pub dst_pos: Vec2,
    pub dst_size: Vec2,
    pub alpha: f32,
    pub sound: Option<Arc<dyn Sound>>,
}

impl Debug for DrawCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DrawCommand")
            .field("texture", &self.texture)
            .field("src_pos", &self.src_pos)
            .field("src_size", &self.src_size)
            .field("dst_pos", &self.dst_pos)
            .field("dst_size", &self.dst_size)
            .field("alpha", &self.alpha)
            .field("sound", &self.sound.is_some())
            .finish()
    }
}

impl Animation {
    pub fn new(sheet: Arc<SpriteSheet>, config: AnimationConfig) -> Result<Self, Error> {
        let AnimationConfig {
            animation: frames,
            repeat,
            key_frame,
            loop_frame,
        } = config;
        if frames.is_empty() {
            return Err(Error::EmptyAnimation);
        }
        if key_frame >= frames.len() {
            return Err(Error::FrameOutOfRange {
                what: "key",
                index: key_frame,
                len: frames.len(),
            });
        }
        if let Some(index) = loop_frame {
            if index >= frames.len() {
                return Err(Error::FrameOutOfRange {
                    what: "loop",
                    index,
                    len: frames.len(),
                });
            }
        }
        Ok(Self {
            sheet,
            frames,
            repeat,
            key_frame,
            loop_frame,
            sound_triggers: HashMap::new(),
            state: Playback::start(key_frame),
        })
    }

    /// Register a sound to fire whenever `index` is the rendered frame.
    pub fn with_sound_trigger(mut self, index: usize, sound: Arc<dyn Sound>) -> Self {
        self.set_sound_trigger(index, sound);
        self
    }

    pub fn set_sound_trigger(&mut self, index: usize, sound: Arc<dyn Sound>) {
        self.sound_triggers.insert(index, sound);
    }

    /// Restart playback at the key frame.
    pub fn reset(&mut self) {
        self.state = Playback::start(self.key_frame);
    }

    /// Advance playback by `delta`, in the same unit as the frame lengths.
    pub fn update(&mut self, delta: f32) {
        self.state = self.state.advance(
            delta,
            &self.frames,
            self.repeat,
            self.key_frame,
            self.loop_frame,
        );
    }

    /// Current frame pointer.
    pub fn index(&self) -> usize {
        self.state.index
    }

    pub fn playback(&self) -> Playback {
        self.state
    }

    /// Playback rate multiplier used in the wraparound bound. Not
    /// validated; zero or negative values degenerate the bound.
    pub fn set_speed(&mut self, speed: f32) {
        self.state.speed = speed;
    }

    pub fn current_frame(&self) -> &Frame {
        &self.frames[self.state.index]
    }

    /// Resolve the current frame into a draw command without touching the
    /// surface or the audio backend.
    pub fn draw_command(
        &self,
        dst_pos: Vec2,
        scale: f32,
        visibility: f32,
    ) -> Result<DrawCommand, Error> {
        let frame = self.current_frame();
        let region =
            self.sheet
                .get_offset(&frame.sprite_name)
                .ok_or_else(|| Error::SpriteNotFound {
                    name: frame.sprite_name.clone(),
                })?;
        Ok(DrawCommand {
            texture: region.image,
            src_pos: region.pos,
            src_size: region.size,
            dst_pos,
            dst_size: region.size * scale,
            alpha: visibility,
            sound: self.sound_triggers.get(&self.state.index).cloned(),
        })
    }

    /// Draw the current frame at `dst_pos`, scaled by `scale`, with
    /// `visibility` as alpha for this draw only, then fire the sound
    /// trigger registered for the current index, if any.
    pub fn render(
        &self,
        surface: &mut dyn Surface,
        dst_pos: Vec2,
        scale: f32,
        visibility: f32,
    ) -> Result<(), Error> {
        let cmd = self.draw_command(dst_pos, scale, visibility)?;
        surface.set_alpha(cmd.alpha);
        surface.draw_region(
            &cmd.texture,
            cmd.src_pos,
            cmd.src_size,
            cmd.dst_pos,
            cmd.dst_size,
        );
        surface.set_alpha(1.0);
        if let Some(sound) = cmd.sound {
            sound.play();
        }
        Ok(())
    }
}
