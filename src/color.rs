/// Definition: A 16-bit RGB565 colour value (5 bits red, 6 green, 5 blue)
///
/// The controller expects the high byte on the wire first. Relative to the
/// little-endian in-memory layout of the value this is a byte swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb565(pub u16);

#[allow(missing_docs)]
impl Rgb565 {
    pub const BLUE: Self = Self(0x001F);
    pub const GREEN: Self = Self(0x07E0);
    pub const RED: Self = Self(0xF800);
    pub const CYAN: Self = Self(0x07FF);
    pub const MAGENTA: Self = Self(0xF81F);
    pub const YELLOW: Self = Self(0xFFE0);
    pub const LIGHT_BLUE: Self = Self(0x841F);
    pub const LIGHT_GREEN: Self = Self(0x87F0);
    pub const LIGHT_RED: Self = Self(0xFC10);
    pub const LIGHT_CYAN: Self = Self(0x87FF);
    pub const LIGHT_MAGENTA: Self = Self(0xFC1F);
    pub const LIGHT_YELLOW: Self = Self(0xFFF0);
    pub const DARK_BLUE: Self = Self(0x0010);
    pub const DARK_GREEN: Self = Self(0x0400);
    pub const DARK_RED: Self = Self(0x8000);
    pub const DARK_CYAN: Self = Self(0x0410);
    pub const DARK_MAGENTA: Self = Self(0x8010);
    pub const DARK_YELLOW: Self = Self(0x8400);
    pub const WHITE: Self = Self(0xFFFF);
    pub const LIGHT_GRAY: Self = Self(0xD69A);
    pub const GRAY: Self = Self(0x8410);
    pub const DARK_GRAY: Self = Self(0x4208);
    pub const BLACK: Self = Self(0x0000);
    pub const BROWN: Self = Self(0xA145);
    pub const ORANGE: Self = Self(0xFD20);
}

impl Rgb565 {
    /// Pack 8-bit channels, dropping the low bits
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self((((r as u16) & 0xF8) << 8) | (((g as u16) & 0xFC) << 3) | ((b as u16) >> 3))
    }

    /// The two bytes in controller order
    pub const fn to_wire(self) -> [u8; 2] {
        self.0.to_be_bytes()
    }

    /// Read one pixel of a little-endian image buffer
    pub const fn from_le_bytes(bytes: [u8; 2]) -> Self {
        Self(u16::from_le_bytes(bytes))
    }
}

impl From<u16> for Rgb565 {
    fn from(v: u16) -> Self {
        Self(v)
    }
}

impl From<Rgb565> for u16 {
    fn from(c: Rgb565) -> Self {
        c.0
    }
}

/// Option: Controller interface colour coding (COLMOD parameter)
///
/// Only RGB565 is accepted by the driver; the other codings exist so that a
/// caller passing them gets a clear rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ColorFormat {
    /// 12 bits per pixel
    Rgb444 = 0x03,
    /// 16 bits per pixel
    Rgb565 = 0x05,
    /// 18 bits per pixel
    Rgb666 = 0x06,
}

/// Option: Pixel format reported by the facade
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum PixelFormat {
    Argb8888 = 0,
    Rgb888 = 1,
    Rgb565 = 2,
    Argb1555 = 3,
    Argb4444 = 4,
    L8 = 5,
    Al44 = 6,
    Al88 = 7,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_order_is_high_byte_first() {
        assert_eq!(Rgb565(0xABCD).to_wire(), [0xAB, 0xCD]);
        assert_eq!(Rgb565::from_le_bytes([0xCD, 0xAB]), Rgb565(0xABCD));
    }

    #[test]
    fn channel_packing() {
        assert_eq!(Rgb565::from_rgb(0xFF, 0xFF, 0xFF), Rgb565::WHITE);
        assert_eq!(Rgb565::from_rgb(0xFF, 0, 0), Rgb565::RED);
        assert_eq!(Rgb565::from_rgb(0, 0xFF, 0), Rgb565::GREEN);
        assert_eq!(Rgb565::from_rgb(0, 0, 0xFF), Rgb565::BLUE);
    }
}
