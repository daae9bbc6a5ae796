use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::{errors::Error, handle::Handle};

/// One named cell in a sheet, with an optional pixel nudge inside the cell.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpriteDef {
    pub name: String,
    #[serde(default)]
    pub x: f32,
    #[serde(default)]
    pub y: f32,
}

fn default_cols() -> usize {
    200
}

fn default_rows() -> usize {
    1
}

/// Grid geometry and sprite catalog of a sheet.
///
/// The pixel source is not part of the description; it is attached as a
/// [`Handle`] when the sheet is built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetConfig {
    /// Cell width in pixels
    pub width: u32,
    /// Cell height in pixels
    pub height: u32,
    /// Insertion order defines grid position
    pub sprites: Vec<SpriteDef>,
    #[serde(default = "default_cols")]
    pub cols: usize,
    /// Informational only, the lookup math never reads it
    #[serde(default = "default_rows")]
    pub rows: usize,
}

impl SheetConfig {
    /// Parse a sheet description from JSON.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).map_err(Into::into)
    }
}

/// Resolved pixel rectangle of one sprite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteRegion {
    pub image: Handle,
    pub pos: Vec2,
    pub size: Vec2,
}

/// Maps sprite names to pixel rectangles within a shared source image.
///
/// Read-only after [`SpriteSheet::load`], so one sheet behind an `Arc` can
/// back any number of animators.
#[derive(Debug, Clone)]
pub struct SpriteSheet {
    image: Handle,
    cell_size: Vec2,
    cols: usize,
    rows: usize,
    sprites: Vec<SpriteDef>,
}

impl SpriteSheet {
    pub fn new(image: Handle, config: SheetConfig) -> Result<Self, Error> {
        let mut sheet = Self {
            image,
            cell_size: Vec2::ZERO,
            cols: 0,
            rows: 0,
            sprites: Vec::new(),
        };
        sheet.load(image, config)?;
        Ok(sheet)
    }

    /// Replace the whole sheet state. A reload, not a merge.
    pub fn load(&mut self, image: Handle, config: SheetConfig) -> Result<(), Error> {
        if config.width == 0 || config.height == 0 {
            return Err(Error::InvalidSheet("cell size must be non-zero"));
        }
        if config.cols == 0 {
            return Err(Error::InvalidSheet("column count must be non-zero"));
        }
        if config.sprites.len() > config.cols * config.rows {
            log::warn!(
                "sheet declares {} sprites but only {}x{} cells",
                config.sprites.len(),
                config.cols,
                config.rows
            );
        }
        self.image = image;
        self.cell_size = Vec2::new(config.width as f32, config.height as f32);
        self.cols = config.cols;
        self.rows = config.rows;
        self.sprites = config.sprites;
        Ok(())
    }

    /// Pixel rectangle of the first sprite named `name`, or `None` for an
    /// unknown name.
    ///
    /// Linear scan, first match wins. The rectangle is not checked against
    /// the actual image bounds.
    pub fn get_offset(&self, name: &str) -> Option<SpriteRegion> {
        let i = self.sprites.iter().position(|s| s.name == name)?;
        let sprite = &self.sprites[i];
        Some(SpriteRegion {
            image: self.image,
            pos: Vec2::new(
                (i % self.cols) as f32 * self.cell_size.x + sprite.x,
                (i / self.cols) as f32 * self.cell_size.y + sprite.y,
            ),
            size: self.cell_size,
        })
    }

    pub fn image(&self) -> Handle {
        self.image
    }

    pub fn cell_size(&self) -> Vec2 {
        self.cell_size
    }
}
