//! Text rendering on top of the pixel primitives

use log::trace;

use crate::color::Rgb565;
use crate::error::{Error, Result};
use crate::font;
use crate::interface::BusIo;
use crate::st7735::St7735;

/// Option: Glyph height in pixels. Glyphs are half as wide as they are high.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum FontSize {
    /// 6x12
    Size12 = 12,
    /// 8x16
    Size16 = 16,
    /// 12x24
    Size24 = 24,
    /// 16x32
    Size32 = 32,
}

impl FontSize {
    /// Cell height
    pub const fn height(self) -> u16 {
        self as u16
    }

    /// Cell width, which is also the string advance
    pub const fn width(self) -> u16 {
        self as u16 / 2
    }

    const fn column_bytes(self) -> usize {
        (self as usize + 7) / 8
    }
}

impl TryFrom<u8> for FontSize {
    type Error = Error;

    fn try_from(v: u8) -> Result<Self> {
        match v {
            12 => Ok(FontSize::Size12),
            16 => Ok(FontSize::Size16),
            24 => Ok(FontSize::Size24),
            32 => Ok(FontSize::Size32),
            _ => Err(Error::InvalidArgument),
        }
    }
}

/// Option: What clear glyph bits do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlyphMode {
    /// Leave the pixel under a clear bit untouched
    Overlay,
    /// Paint clear bits with the background colour
    NonOverlay,
}

/// # Text
impl<B: BusIo> St7735<B> {
    /// Render one printable ASCII character with its top left corner at (x, y).
    ///
    /// Pixels are written column by column. The first position outside the
    /// display aborts with `InvalidArgument`; pixels drawn up to that point stay.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_char(
        &mut self,
        x: u16,
        y: u16,
        code: u8,
        size: FontSize,
        fg: Rgb565,
        bg: Rgb565,
        mode: GlyphMode,
    ) -> Result<()> {
        let bitmap = font::glyph(size, code).ok_or(Error::InvalidArgument)?;
        let column_bytes = size.column_bytes();

        for (c, column) in bitmap.chunks_exact(column_bytes).enumerate() {
            for r in 0..usize::from(size.height()) {
                let px = u32::from(x) + c as u32;
                let py = u32::from(y) + r as u32;
                if px >= u32::from(self.width()) || py >= u32::from(self.height()) {
                    return Err(Error::InvalidArgument);
                }
                let set = column[r / 8] & (0x80 >> (r % 8)) != 0;
                match (set, mode) {
                    (true, _) => self.set_pixel(px as u16, py as u16, fg)?,
                    (false, GlyphMode::NonOverlay) => self.set_pixel(px as u16, py as u16, bg)?,
                    (false, GlyphMode::Overlay) => {}
                }
            }
        }
        Ok(())
    }

    /// Render `text` left to right, wrapping back to `x` one line lower when
    /// a glyph would cross the right edge.
    ///
    /// Runs out of vertical space with `InvalidArgument`. Characters outside
    /// printable ASCII are skipped and take no room.
    pub fn draw_string(&mut self, x: u16, y: u16, text: &str, size: FontSize, fg: Rgb565, bg: Rgb565) -> Result<()> {
        let (mut cx, mut cy) = (u32::from(x), u32::from(y));
        let cell = u32::from(size.height());

        for ch in text.chars() {
            let code = match u8::try_from(ch) {
                Ok(code) if (font::FIRST_GLYPH..=font::LAST_GLYPH).contains(&code) => code,
                _ => {
                    trace!("st7735: skipping {:?}", ch);
                    continue;
                }
            };
            if cx + cell > u32::from(self.width()) {
                cx = u32::from(x);
                cy += cell;
            }
            if cy + cell > u32::from(self.height()) {
                return Err(Error::InvalidArgument);
            }
            self.draw_char(cx as u16, cy as u16, code, size, fg, bg, GlyphMode::NonOverlay)?;
            cx += u32::from(size.width());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::Command;
    use crate::testing::{portrait_driver, Transaction};
    use std::collections::BTreeSet;
    use std::vec;
    use std::vec::Vec;

    const CASET: u8 = Command::ColumnAddressSet as u8;
    const RASET: u8 = Command::RowAddressSet as u8;
    const RAMWR: u8 = Command::WriteRAM as u8;

    #[test]
    fn sizes_from_integers() {
        assert_eq!(FontSize::try_from(24), Ok(FontSize::Size24));
        assert_eq!(FontSize::try_from(8), Err(Error::InvalidArgument));
        assert_eq!((FontSize::Size12.width(), FontSize::Size12.height()), (6, 12));
    }

    /// Column-major cell positions of the set bits of `code`, offset by (x, y)
    fn glyph_bits(size: FontSize, code: u8, x: u16, y: u16) -> BTreeSet<(u16, u16)> {
        let bytes = font::glyph(size, code).unwrap();
        let column_bytes = size.column_bytes();
        let mut set = BTreeSet::new();
        for c in 0..size.width() {
            for r in 0..size.height() {
                let (c, r) = (usize::from(c), usize::from(r));
                if bytes[c * column_bytes + r / 8] & (0x80 >> (r % 8)) != 0 {
                    set.insert((x + c as u16, y + r as u16));
                }
            }
        }
        set
    }

    /// Decode the cursor/RAMWR/data quadruples back into positioned colours
    fn pixel_writes(log: &[Transaction]) -> Vec<((u16, u16), Vec<u8>)> {
        log.chunks(4)
            .map(|t| match t {
                [Transaction::WriteRegister(CASET, cols), Transaction::WriteRegister(RASET, rows), Transaction::WriteRegister(RAMWR, _), Transaction::SendData(color)] => {
                    assert_eq!(cols[..2], cols[2..]);
                    assert_eq!(rows[..2], rows[2..]);
                    let x = u16::from_be_bytes([cols[0], cols[1]]) - 2;
                    let y = u16::from_be_bytes([rows[0], rows[1]]) - 1;
                    ((x, y), color.clone())
                }
                other => panic!("not a pixel write: {:?}", other),
            })
            .collect()
    }

    #[test]
    fn overlay_draws_exactly_the_set_bits() {
        let mut lcd = portrait_driver();
        lcd.draw_char(3, 5, b'!', FontSize::Size16, Rgb565::RED, Rgb565::BLUE, GlyphMode::Overlay)
            .unwrap();
        let writes = pixel_writes(&lcd.bus().log);
        assert_eq!(writes.len(), 24);
        assert!(writes.iter().all(|(_, c)| *c == Rgb565::RED.to_wire()));

        let drawn: BTreeSet<_> = writes.iter().map(|(p, _)| *p).collect();
        assert_eq!(drawn, glyph_bits(FontSize::Size16, b'!', 3, 5));
    }

    #[test]
    fn non_overlay_paints_clear_bits_with_background() {
        let mut lcd = portrait_driver();
        lcd.draw_char(3, 5, b'!', FontSize::Size16, Rgb565::RED, Rgb565::BLUE, GlyphMode::NonOverlay)
            .unwrap();
        let writes = pixel_writes(&lcd.bus().log);
        assert_eq!(writes.len(), 8 * 16);

        let bits = glyph_bits(FontSize::Size16, b'!', 3, 5);
        for (i, (pos, color)) in writes.iter().enumerate() {
            // column by column, top to bottom
            assert_eq!(*pos, (3 + (i / 16) as u16, 5 + (i % 16) as u16));
            let expected = if bits.contains(pos) { Rgb565::RED } else { Rgb565::BLUE };
            assert_eq!(*color, expected.to_wire());
        }
    }

    #[test]
    fn first_pixel_is_top_left_of_the_cell() {
        let mut lcd = portrait_driver();
        lcd.draw_char(10, 20, b' ', FontSize::Size12, Rgb565::RED, Rgb565::BLUE, GlyphMode::NonOverlay)
            .unwrap();
        assert_eq!(lcd.bus().log[0], Transaction::WriteRegister(CASET, vec![0x00, 12, 0x00, 12]));
        assert_eq!(lcd.bus().register_writes(RAMWR), 6 * 12);
    }

    #[test]
    fn clipped_glyph_keeps_drawn_columns() {
        let mut lcd = portrait_driver();
        let res = lcd.draw_char(124, 0, b'#', FontSize::Size16, Rgb565::RED, Rgb565::BLUE, GlyphMode::NonOverlay);
        assert_eq!(res, Err(Error::InvalidArgument));
        assert_eq!(lcd.bus().register_writes(RAMWR), 4 * 16);
    }

    #[test]
    fn unprintable_codes_are_rejected() {
        let mut lcd = portrait_driver();
        for code in [0x00, 0x1F, 0x7F, 0xC3] {
            assert_eq!(
                lcd.draw_char(0, 0, code, FontSize::Size16, Rgb565::RED, Rgb565::BLUE, GlyphMode::Overlay),
                Err(Error::InvalidArgument)
            );
        }
        assert!(lcd.bus().log.is_empty());
    }

    #[test]
    fn string_wraps_to_the_next_line() {
        let mut lcd = portrait_driver();
        lcd.draw_string(0, 0, "                ", FontSize::Size16, Rgb565::RED, Rgb565::BLACK)
            .unwrap();
        // 15 cells fit on the first line; each cell is 128 four-transaction pixels
        let log = &lcd.bus().log;
        assert_eq!(log.len(), 16 * 128 * 4);
        let first_of_last = 15 * 128 * 4;
        assert_eq!(log[first_of_last], Transaction::WriteRegister(CASET, vec![0x00, 0x02, 0x00, 0x02]));
        assert_eq!(log[first_of_last + 1], Transaction::WriteRegister(RASET, vec![0x00, 17, 0x00, 17]));
    }

    #[test]
    fn string_without_vertical_room_draws_nothing() {
        let mut lcd = portrait_driver();
        assert_eq!(
            lcd.draw_string(0, 150, "hi", FontSize::Size16, Rgb565::RED, Rgb565::BLACK),
            Err(Error::InvalidArgument)
        );
        assert!(lcd.bus().log.is_empty());
    }

    #[test]
    fn non_ascii_is_skipped_without_advancing() {
        let mut lcd = portrait_driver();
        lcd.draw_string(0, 0, "\u{e9}\n ", FontSize::Size12, Rgb565::RED, Rgb565::BLACK)
            .unwrap();
        assert_eq!(lcd.bus().register_writes(RAMWR), 6 * 12);
        assert_eq!(lcd.bus().log[0], Transaction::WriteRegister(CASET, vec![0x00, 0x02, 0x00, 0x02]));
    }
}
