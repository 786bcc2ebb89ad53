use crate::color::ColorFormat;
use crate::error::{Error, Result};

/// Largest line, in pixels, the driver can stream in one transfer.
/// Also the upper bound on either panel dimension.
pub const MAX_LINE_PIXELS: u16 = 320;

/// Definition: Panel geometry and controller variant parameters
///
/// The visible area of most ST7735 panels does not start at RAM address 0;
/// the offsets must match the panel exactly or output is shifted.
/// Sizes and offsets are given for the portrait axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelConfig {
    /// Native width in pixels
    pub width: u16,
    /// Native height in pixels
    pub height: u16,
    /// RAM column of the first visible pixel
    pub column_offset: u16,
    /// RAM row of the first visible pixel
    pub row_offset: u16,
    /// Interface colour coding
    pub color_format: ColorFormat,
}

impl PanelConfig {
    /// 1.8" 128x160 panel
    pub const fn new() -> Self {
        Self {
            width: 128,
            height: 160,
            column_offset: 2,
            row_offset: 1,
            color_format: ColorFormat::Rgb565,
        }
    }

    /// Set the native size
    pub const fn with_size(mut self, width: u16, height: u16) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the RAM offsets of the visible area
    pub const fn with_offsets(mut self, column: u16, row: u16) -> Self {
        self.column_offset = column;
        self.row_offset = row;
        self
    }

    /// Set the colour coding
    pub const fn with_color_format(mut self, format: ColorFormat) -> Self {
        self.color_format = format;
        self
    }

    /// Reject geometry the driver cannot address
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::InvalidArgument);
        }
        if self.width > MAX_LINE_PIXELS || self.height > MAX_LINE_PIXELS {
            return Err(Error::InvalidArgument);
        }
        if self.color_format != ColorFormat::Rgb565 {
            return Err(Error::InvalidArgument);
        }
        // Window ends are sent as 16-bit addresses
        let max_col = u32::from(self.column_offset) + u32::from(self.width.max(self.height));
        let max_row = u32::from(self.row_offset) + u32::from(self.width.max(self.height));
        if max_col > u32::from(u16::MAX) || max_row > u32::from(u16::MAX) {
            return Err(Error::InvalidArgument);
        }
        Ok(())
    }
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self::new()
    }
}
