use bool_enum::bool_enum;

use crate::error::Error;

/// Option: Display orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Orientation {
    /// Native orientation, connector at the bottom
    Portrait = 0,
    /// Portrait rotated by 180°
    PortraitFlipped = 1,
    /// Rotated by 90°, width and height exchanged
    Landscape = 2,
    /// Landscape rotated by 180°
    LandscapeFlipped = 3,
}

/// (window swap byte, MADCTL byte) per orientation.
/// The first column is the access mode for bottom-up image data.
const ORIENTATION_TABLE: [[u8; 2]; 4] = [
    [0x40, 0xC0],
    [0x80, 0x00],
    [0x20, 0x60],
    [0xE0, 0xA0],
];

impl Orientation {
    /// True for the two orientations that exchange the panel axes
    pub const fn is_landscape(self) -> bool {
        matches!(self, Orientation::Landscape | Orientation::LandscapeFlipped)
    }

    /// MADCTL byte written by `set_orientation`
    pub const fn madctl(self) -> u8 {
        ORIENTATION_TABLE[self as usize][1]
    }

    /// MADCTL byte for streaming bottom-up (BMP-style) image data
    pub const fn window_swap(self) -> u8 {
        ORIENTATION_TABLE[self as usize][0]
    }

    /// The MADCTL byte decoded into its toggles
    pub fn mem_access(self) -> MemAccess {
        MemAccess::from_byte(self.madctl())
    }
}

impl TryFrom<u8> for Orientation {
    type Error = Error;

    fn try_from(v: u8) -> Result<Self, Error> {
        match v {
            0 => Ok(Orientation::Portrait),
            1 => Ok(Orientation::PortraitFlipped),
            2 => Ok(Orientation::Landscape),
            3 => Ok(Orientation::LandscapeFlipped),
            _ => Err(Error::InvalidArgument),
        }
    }
}

impl TryFrom<u32> for Orientation {
    type Error = Error;

    fn try_from(v: u32) -> Result<Self, Error> {
        u8::try_from(v)
            .map_err(|_| Error::InvalidArgument)
            .and_then(Orientation::try_from)
    }
}

#[bool_enum]
/** Toogler: Row address order (MY) */
pub enum RowAddressOrder{TopToBottom=0, BottomToTop=1}
#[bool_enum]
/** Toogler: Column address order (MX) */
pub enum ColumnAddressOrder{LeftToRight=0, RightToLeft=1}
#[bool_enum]
/** Toogler: Row/column exchange (MV) */
pub enum RowColumnExchange{Normal=0, Exchanged=1}
#[bool_enum]
/** Toogler: Vertical refresh order (ML) */
pub enum LineRefreshOrder{TopDown=0, BottomUp=1}
#[bool_enum]
/** Toogler: Colour filter order */
pub enum ColourOrder{RGB=0, BGR=1}
#[bool_enum]
/** Toogler: Horizontal refresh order (MH) */
pub enum DataLatchOrder{LeftToRight=0, RightToLeft=1}

/// Definition: Memory access parameters (the MADCTL register)
#[allow(missing_docs)]
pub struct MemAccess(
    pub RowAddressOrder,
    pub ColumnAddressOrder,
    pub RowColumnExchange,
    pub LineRefreshOrder,
    pub ColourOrder,
    pub DataLatchOrder,
);

trait Bit { fn bit(self, bit: u8) -> bool; }
impl Bit for u8 {fn bit(self, bit: u8) -> bool {self & (1<<bit) != 0}}

impl MemAccess {
    /// Decode a MADCTL byte
    pub fn from_byte(mode: u8) -> Self {
        MemAccess(
            mode.bit(7).into(),
            mode.bit(6).into(),
            mode.bit(5).into(),
            mode.bit(4).into(),
            mode.bit(3).into(),
            mode.bit(2).into(),
        )
    }

    /// Encode into a MADCTL byte
    pub fn to_byte(self) -> u8 {
        ((self.0 as u8) << 7)
            | ((self.1 as u8) << 6)
            | ((self.2 as u8) << 5)
            | ((self.3 as u8) << 4)
            | ((self.4 as u8) << 3)
            | ((self.5 as u8) << 2)
    }
}
