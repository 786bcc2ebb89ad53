//! Register opcodes and the fixed bring-up parameters of the ST7735

#[allow(dead_code)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Command {
    Nop = 0x00,
    SoftwareReset = 0x01,

    ReadDisplayMemAccessControl = 0x0B,

    SleepOut = 0x11,
    /** No partial, no scroll */
    NormalModeOn = 0x13,

    InversionOff = 0x20,
    InversionOn = 0x21,

    DisplayOff = 0x28,
    DisplayOn = 0x29,

    ColumnAddressSet = 0x2A,
    RowAddressSet = 0x2B,
    WriteRAM = 0x2C,
    ReadRAM = 0x2E,

    MemAccessControl = 0x36,
    InterfacePixelFormat = 0x3A,

    FrameRateControlNormal = 0xB1,
    FrameRateControlIdle = 0xB2,
    FrameRateControlPartial = 0xB3,
    DisplayInversionControl = 0xB4,

    PowerControl1 = 0xC0,
    PowerControl2 = 0xC1,
    PowerControl3 = 0xC2,
    PowerControl4 = 0xC3,
    PowerControl5 = 0xC4,
    VCOMControl1 = 0xC5,

    ReadID1 = 0xDA,

    PositiveGammaCorrection = 0xE0,
    NegativeGammaCorrection = 0xE1,

    /// Enables the extension (test) command set
    ExtensionControl = 0xF0,
    /// Bit 0 clear: RAM power save off
    PowerSaveControl = 0xF6,
}

/// Rate = fosc / (1x2 + 40) * (LINE + 2C + 2D)
pub(crate) const FRAME_RATE: [u8; 3] = [0x01, 0x2C, 0x2D];
/// Dot inversion for the first triple, line inversion for the second
pub(crate) const FRAME_RATE_PARTIAL: [u8; 6] = [0x01, 0x2C, 0x2D, 0x01, 0x2C, 0x2D];
pub(crate) const INVERSION_CONTROL: [u8; 1] = [0x07];

/// -4.6V, AUTO mode
pub(crate) const POWER_CONTROL1: [u8; 3] = [0xA2, 0x02, 0x84];
/// VGH25 = 2.4C, VGSEL = -10, VGH = 3 * AVDD
pub(crate) const POWER_CONTROL2: [u8; 1] = [0xC5];
/// Opamp current small, boost frequency
pub(crate) const POWER_CONTROL3: [u8; 2] = [0x0A, 0x00];
/// BCLK/2, opamp current small & medium low
pub(crate) const POWER_CONTROL4: [u8; 2] = [0x8A, 0x2A];
pub(crate) const POWER_CONTROL5: [u8; 2] = [0x8A, 0xEE];
pub(crate) const VCOM_CONTROL1: [u8; 1] = [0x0E];

pub(crate) const GAMMA_POSITIVE: [u8; 16] = [
    0x0F, 0x1A, 0x0F, 0x18, 0x2F, 0x28, 0x20, 0x22,
    0x1F, 0x1B, 0x23, 0x37, 0x00, 0x07, 0x02, 0x10,
];
pub(crate) const GAMMA_NEGATIVE: [u8; 16] = [
    0x0F, 0x1B, 0x0F, 0x17, 0x33, 0x2C, 0x29, 0x2E,
    0x30, 0x30, 0x39, 0x3F, 0x00, 0x07, 0x03, 0x10,
];

pub(crate) const EXTENSION_ENABLE: [u8; 1] = [0x01];
pub(crate) const POWER_SAVE_DISABLE: [u8; 1] = [0x00];

/// Settling time after leaving sleep mode
pub(crate) const SLEEP_OUT_DELAY_MS: u32 = 120;
/// Settling time around display on/off
pub(crate) const DISPLAY_SWITCH_DELAY_MS: u32 = 10;
