use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("sprite not found: {name}")]
    SpriteNotFound { name: String },
    #[error("animation has no frames")]
    EmptyAnimation,
    #[error("invalid sheet: {0}")]
    InvalidSheet(&'static str),
    #[error("{what} frame {index} out of range, animation has {len} frames")]
    FrameOutOfRange {
        what: &'static str,
        index: usize,
        len: usize,
    },
}
