use std::path::Path;

/// Decoded RGBA pixel grid for one level.
///
/// Levels are authored as tiny PNG images, one pixel per tile column/row.
/// The bitmap is retained for the whole session: every respawn re-decodes
/// the same pixels, which is what makes death resets exact.
#[derive(Debug, Clone)]
pub struct LevelBitmap {
    width: u32,
    height: u32,
    /// Tightly packed RGBA rows, top row first.
    data: Vec<u8>,
}

impl LevelBitmap {
    /// Wrap raw RGBA bytes (4 per pixel, row-major from the top-left).
    ///
    /// Panics if `data` does not hold exactly `width * height` pixels; that
    /// is a caller bug, not a recoverable condition.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Self {
        assert_eq!(
            data.len(),
            (width * height * 4) as usize,
            "rgba byte length must match bitmap dimensions"
        );
        Self {
            width,
            height,
            data,
        }
    }

    /// Decode a PNG from an in-memory byte slice.
    pub fn from_png_bytes(bytes: &[u8]) -> Result<Self, image::ImageError> {
        let rgba = image::load_from_memory(bytes)?.to_rgba8();
        let (width, height) = rgba.dimensions();
        Ok(Self::from_raw(width, height, rgba.into_raw()))
    }

    /// Load and decode a PNG file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, image::ImageError> {
        let rgba = image::open(path)?.to_rgba8();
        let (width, height) = rgba.dimensions();
        Ok(Self::from_raw(width, height, rgba.into_raw()))
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// RGBA channels of the pixel at `(x, y)`, with `y = 0` the top row.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        debug_assert!(x < self.width && y < self.height);
        let i = ((y * self.width + x) * 4) as usize;
        [
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ]
    }
}
