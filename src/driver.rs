//! The capability interface the facade dispatches through

use crate::color::{ColorFormat, Rgb565};
use crate::error::{Error, Result};
use crate::glyph::{FontSize, GlyphMode};
use crate::interface::BusIo;
use crate::orientation::Orientation;
use crate::st7735::St7735;

/// Device: A display controller driver as seen by [Lcd](struct.Lcd.html)
///
/// Only bring-up and the panel size are mandatory. Every other primitive
/// defaults to `Err(UnsupportedFeature)`; a controller variant overrides the
/// ones it has.
#[allow(missing_docs, unused_variables)]
pub trait LcdDriver {
    fn init(&mut self, color_format: ColorFormat, orientation: Orientation) -> Result<()>;
    fn width(&self) -> u16;
    fn height(&self) -> u16;

    fn deinit(&mut self) -> Result<()> { Err(Error::UnsupportedFeature) }
    fn read_id(&mut self) -> Result<u8> { Err(Error::UnsupportedFeature) }
    fn display_on(&mut self) -> Result<()> { Err(Error::UnsupportedFeature) }
    fn display_off(&mut self) -> Result<()> { Err(Error::UnsupportedFeature) }
    fn set_brightness(&mut self, brightness: u8) -> Result<()> { Err(Error::UnsupportedFeature) }
    fn get_brightness(&mut self) -> Result<u8> { Err(Error::UnsupportedFeature) }
    fn set_orientation(&mut self, orientation: Orientation) -> Result<()> { Err(Error::UnsupportedFeature) }
    fn get_orientation(&self) -> Result<Orientation> { Err(Error::UnsupportedFeature) }

    fn set_cursor(&mut self, x0: u16, y0: u16, x1: u16, y1: u16) -> Result<()> {
        Err(Error::UnsupportedFeature)
    }
    fn draw_bitmap(&mut self, x: u16, y: u16, width: u16, height: u16, bitmap: &[u8]) -> Result<()> {
        Err(Error::UnsupportedFeature)
    }
    fn fill_rgb_rect(&mut self, x: u16, y: u16, data: &[u8], width: u16, height: u16) -> Result<()> {
        Err(Error::UnsupportedFeature)
    }
    fn draw_hline(&mut self, x: u16, y: u16, length: u16, color: Rgb565) -> Result<()> {
        Err(Error::UnsupportedFeature)
    }
    fn draw_vline(&mut self, x: u16, y: u16, length: u16, color: Rgb565) -> Result<()> {
        Err(Error::UnsupportedFeature)
    }
    fn fill_rect(&mut self, x: u16, y: u16, width: u16, height: u16, color: Rgb565) -> Result<()> {
        Err(Error::UnsupportedFeature)
    }
    fn get_pixel(&mut self, x: u16, y: u16) -> Result<Rgb565> {
        Err(Error::UnsupportedFeature)
    }
    fn set_pixel(&mut self, x: u16, y: u16, color: Rgb565) -> Result<()> {
        Err(Error::UnsupportedFeature)
    }
    #[allow(clippy::too_many_arguments)]
    fn draw_char(
        &mut self,
        x: u16,
        y: u16,
        code: u8,
        size: FontSize,
        fg: Rgb565,
        bg: Rgb565,
        mode: GlyphMode,
    ) -> Result<()> {
        Err(Error::UnsupportedFeature)
    }
    fn draw_string(&mut self, x: u16, y: u16, text: &str, size: FontSize, fg: Rgb565, bg: Rgb565) -> Result<()> {
        Err(Error::UnsupportedFeature)
    }
}

// Brightness is not controllable on the ST7735; those two stay unbound.
impl<B: BusIo> LcdDriver for St7735<B> {
    fn init(&mut self, color_format: ColorFormat, orientation: Orientation) -> Result<()> {
        St7735::init(self, color_format, orientation)
    }
    fn width(&self) -> u16 { St7735::width(self) }
    fn height(&self) -> u16 { St7735::height(self) }

    fn deinit(&mut self) -> Result<()> { St7735::deinit(self) }
    fn read_id(&mut self) -> Result<u8> { St7735::read_id(self) }
    fn display_on(&mut self) -> Result<()> { St7735::display_on(self) }
    fn display_off(&mut self) -> Result<()> { St7735::display_off(self) }
    fn set_orientation(&mut self, orientation: Orientation) -> Result<()> {
        St7735::set_orientation(self, orientation)
    }
    fn get_orientation(&self) -> Result<Orientation> { Ok(self.orientation()) }

    fn set_cursor(&mut self, x0: u16, y0: u16, x1: u16, y1: u16) -> Result<()> {
        St7735::set_cursor(self, x0, y0, x1, y1)
    }
    fn draw_bitmap(&mut self, x: u16, y: u16, width: u16, height: u16, bitmap: &[u8]) -> Result<()> {
        St7735::draw_bitmap(self, x, y, width, height, bitmap)
    }
    fn fill_rgb_rect(&mut self, x: u16, y: u16, data: &[u8], width: u16, height: u16) -> Result<()> {
        St7735::fill_rgb_rect(self, x, y, data, width, height)
    }
    fn draw_hline(&mut self, x: u16, y: u16, length: u16, color: Rgb565) -> Result<()> {
        St7735::draw_hline(self, x, y, length, color)
    }
    fn draw_vline(&mut self, x: u16, y: u16, length: u16, color: Rgb565) -> Result<()> {
        St7735::draw_vline(self, x, y, length, color)
    }
    fn fill_rect(&mut self, x: u16, y: u16, width: u16, height: u16, color: Rgb565) -> Result<()> {
        St7735::fill_rect(self, x, y, width, height, color)
    }
    fn get_pixel(&mut self, x: u16, y: u16) -> Result<Rgb565> {
        St7735::get_pixel(self, x, y)
    }
    fn set_pixel(&mut self, x: u16, y: u16, color: Rgb565) -> Result<()> {
        St7735::set_pixel(self, x, y, color)
    }
    fn draw_char(
        &mut self,
        x: u16,
        y: u16,
        code: u8,
        size: FontSize,
        fg: Rgb565,
        bg: Rgb565,
        mode: GlyphMode,
    ) -> Result<()> {
        St7735::draw_char(self, x, y, code, size, fg, bg, mode)
    }
    fn draw_string(&mut self, x: u16, y: u16, text: &str, size: FontSize, fg: Rgb565, bg: Rgb565) -> Result<()> {
        St7735::draw_string(self, x, y, text, size, fg, bg)
    }
}
