//! The ST7735 protocol engine: controller state, register sequencing and
//! pixel-level drawing primitives over a `BusIo`.

use log::{debug, trace, warn};

use crate::color::{ColorFormat, Rgb565};
use crate::command::*;
use crate::config::{PanelConfig, MAX_LINE_PIXELS};
use crate::error::{Error, Result};
use crate::interface::BusIo;
use crate::orientation::{MemAccess, Orientation};

/// Widest rectangle [fill_rgb_rect](struct.St7735.html#method.fill_rgb_rect) accepts
pub const MAX_RGB_RECT_WIDTH: u16 = MAX_LINE_PIXELS;

const SCRATCH_LEN: usize = 2 * MAX_LINE_PIXELS as usize;

/// Definition: An inclusive column/row range in logical coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    /// First column
    pub x0: u16,
    /// First row
    pub y0: u16,
    /// Last column
    pub x1: u16,
    /// Last row
    pub y1: u16,
}

/// Definition: The controller state the driver keeps in sync with the chip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControllerContext {
    /// Logical width for the current orientation
    pub width: u16,
    /// Logical height for the current orientation
    pub height: u16,
    /// Last orientation written to MADCTL
    pub orientation: Orientation,
    /// Interface colour coding
    pub color_format: ColorFormat,
    /// Last addressing window sent to the controller
    pub address_window: Option<Window>,
}

/// Driver: The type-safe interface to the ST7735 controller
///
/// One value per physical display. The driver does no locking: callers that
/// share a display between tasks must serialize whole sessions, since a
/// cursor/data pair interleaved with another cursor write lands in the
/// wrong place.
pub struct St7735<B: BusIo> {
    bus: B,
    config: PanelConfig,
    ctx: ControllerContext,
}

/// # ST7735 registration and bring-up
impl<B: BusIo> St7735<B> {
    /// Bind a bus to a new controller instance and run the bus init hook
    pub fn register(mut bus: B, config: PanelConfig) -> Result<Self> {
        config.validate()?;
        bus.init().map_err(|e| {
            warn!("st7735: bus init failed: {:?}", e);
            Error::TransportFailure
        })?;
        debug!("st7735: registered {}x{} panel", config.width, config.height);
        Ok(Self {
            bus,
            ctx: ControllerContext {
                width: config.width,
                height: config.height,
                orientation: Orientation::Portrait,
                color_format: config.color_format,
                address_window: None,
            },
            config,
        })
    }

    /// Run the power-on register sequence, then apply `orientation`.
    ///
    /// Registers already written stay written if a later step fails; treat
    /// an error as fatal for the session.
    pub fn init(&mut self, color_format: ColorFormat, orientation: Orientation) -> Result<()> {
        if color_format != ColorFormat::Rgb565 {
            return Err(Error::InvalidArgument);
        }
        let started = self.bus.tick();

        self.write_reg(Command::SleepOut, &[])?;
        self.bus.delay_ms(SLEEP_OUT_DELAY_MS);

        self.write_reg(Command::FrameRateControlNormal, &FRAME_RATE)?;
        self.write_reg(Command::FrameRateControlIdle, &FRAME_RATE)?;
        self.write_reg(Command::FrameRateControlPartial, &FRAME_RATE_PARTIAL)?;
        self.write_reg(Command::DisplayInversionControl, &INVERSION_CONTROL)?;

        self.write_reg(Command::PowerControl1, &POWER_CONTROL1)?;
        self.write_reg(Command::PowerControl2, &POWER_CONTROL2)?;
        self.write_reg(Command::PowerControl3, &POWER_CONTROL3)?;
        self.write_reg(Command::PowerControl4, &POWER_CONTROL4)?;
        self.write_reg(Command::PowerControl5, &POWER_CONTROL5)?;
        self.write_reg(Command::VCOMControl1, &VCOM_CONTROL1)?;

        self.write_reg(Command::InversionOff, &[])?;
        self.write_reg(Command::InterfacePixelFormat, &[color_format as u8])?;

        self.write_reg(Command::PositiveGammaCorrection, &GAMMA_POSITIVE)?;
        self.write_reg(Command::NegativeGammaCorrection, &GAMMA_NEGATIVE)?;

        self.write_reg(Command::ExtensionControl, &EXTENSION_ENABLE)?;
        self.write_reg(Command::PowerSaveControl, &POWER_SAVE_DISABLE)?;
        self.write_reg(Command::DisplayOn, &[])?;

        self.set_orientation(orientation)?;
        self.ctx.color_format = color_format;

        if let (Some(start), Some(end)) = (started, self.bus.tick()) {
            debug!("st7735: bring-up took {} ms", end.wrapping_sub(start));
        }
        Ok(())
    }

    /// Run the bus deinit hook. The controller itself is left as it is.
    pub fn deinit(&mut self) -> Result<()> {
        self.bus.deinit().map_err(|e| {
            warn!("st7735: bus deinit failed: {:?}", e);
            Error::TransportFailure
        })
    }

    /// Give the bus back
    pub fn release(self) -> B {
        self.bus
    }
}

/// # Controller state
impl<B: BusIo> St7735<B> {
    /// Logical width for the current orientation
    pub fn width(&self) -> u16 { self.ctx.width }
    /// Logical height for the current orientation
    pub fn height(&self) -> u16 { self.ctx.height }
    /// Current orientation
    pub fn orientation(&self) -> Orientation { self.ctx.orientation }
    /// The complete tracked state
    pub fn context(&self) -> &ControllerContext { &self.ctx }
    /// Panel parameters given at registration
    pub fn config(&self) -> &PanelConfig { &self.config }

    /// Access the bus, e.g. for pins the driver does not manage
    pub fn bus(&self) -> &B { &self.bus }
    /// Access the bus mutably
    pub fn bus_mut(&mut self) -> &mut B { &mut self.bus }

    /// RAM offsets for the axes of `orientation`
    fn offsets(&self, orientation: Orientation) -> (u16, u16) {
        if orientation.is_landscape() {
            (self.config.row_offset, self.config.column_offset)
        } else {
            (self.config.column_offset, self.config.row_offset)
        }
    }
}

/// # Orientation and power
impl<B: BusIo> St7735<B> {
    /// Switch orientation: reset the display window to the full area, write
    /// MADCTL and swap the logical axes if needed.
    ///
    /// On a bus failure the tracked size and orientation keep their old values.
    pub fn set_orientation(&mut self, orientation: Orientation) -> Result<()> {
        let (width, height) = if orientation.is_landscape() {
            (self.config.height, self.config.width)
        } else {
            (self.config.width, self.config.height)
        };
        self.set_display_window(orientation, Window { x0: 0, y0: 0, x1: width - 1, y1: height - 1 })?;
        self.write_reg(Command::MemAccessControl, &[orientation.madctl()])?;

        // Size and orientation change together, and only once MADCTL is out
        self.ctx.width = width;
        self.ctx.height = height;
        self.ctx.orientation = orientation;
        debug!("st7735: orientation {:?}, {}x{}", orientation, width, height);
        Ok(())
    }

    /// Leave normal mode off, enable the panel output
    pub fn display_on(&mut self) -> Result<()> {
        self.switch_display(Command::DisplayOn)
    }

    /// Blank the panel output; RAM content is kept
    pub fn display_off(&mut self) -> Result<()> {
        self.switch_display(Command::DisplayOff)
    }

    fn switch_display(&mut self, cmd: Command) -> Result<()> {
        self.write_reg(Command::NormalModeOn, &[])?;
        self.bus.delay_ms(DISPLAY_SWITCH_DELAY_MS);
        self.write_reg(cmd, &[])?;
        self.bus.delay_ms(DISPLAY_SWITCH_DELAY_MS);
        self.write_reg(Command::MemAccessControl, &[self.ctx.orientation.madctl()])?;
        debug!("st7735: {:?}", cmd);
        Ok(())
    }
}

/// # Identification
impl<B: BusIo> St7735<B> {
    /// Read the manufacturer ID byte
    pub fn read_id(&mut self) -> Result<u8> {
        self.write_reg(Command::ReadID1, &[])?;
        let mut id = [0u8; 1];
        self.recv(&mut id)?;
        Ok(id[0])
    }

    /// Read back the memory access mode.
    /// The first byte after the read command is a dummy.
    pub fn read_mem_access(&mut self) -> Result<MemAccess> {
        self.write_reg(Command::ReadDisplayMemAccessControl, &[])?;
        let mut buf = [0u8; 2];
        self.recv(&mut buf)?;
        Ok(MemAccess::from_byte(buf[1]))
    }
}

/// # Addressing window
impl<B: BusIo> St7735<B> {
    /// Define the RAM area the next data stream fills, then start a RAM write.
    ///
    /// Ends are inclusive and may reach the logical width/height. Every
    /// pixel write must be preceded by this, since the controller otherwise
    /// continues wherever the previous stream stopped.
    pub fn set_cursor(&mut self, x0: u16, y0: u16, x1: u16, y1: u16) -> Result<()> {
        if x0 > x1 || y0 > y1 || x1 > self.ctx.width || y1 > self.ctx.height {
            return Err(Error::InvalidArgument);
        }
        let orientation = self.ctx.orientation;
        self.set_display_window(orientation, Window { x0, y0, x1, y1 })?;
        self.write_reg(Command::WriteRAM, &[])
    }

    fn set_display_window(&mut self, orientation: Orientation, w: Window) -> Result<()> {
        let (col, row) = self.offsets(orientation);
        self.write_reg(Command::ColumnAddressSet, &address_range(w.x0, w.x1, col))?;
        self.write_reg(Command::RowAddressSet, &address_range(w.y0, w.y1, row))?;
        self.ctx.address_window = Some(w);
        trace!("st7735: window ({}, {})..=({}, {})", w.x0, w.y0, w.x1, w.y1);
        Ok(())
    }
}

/// Start and end address, each as a big-endian 16-bit value
fn address_range(start: u16, end: u16, offset: u16) -> [u8; 4] {
    let s = (start + offset).to_be_bytes();
    let e = (end + offset).to_be_bytes();
    [s[0], s[1], e[0], e[1]]
}

/// `start + len <= limit` without overflow
fn fits(start: u16, len: u16, limit: u16) -> bool {
    u32::from(start) + u32::from(len) <= u32::from(limit)
}

/// # Pixel primitives
impl<B: BusIo> St7735<B> {
    /// Write one pixel
    pub fn set_pixel(&mut self, x: u16, y: u16, color: Rgb565) -> Result<()> {
        if x >= self.ctx.width || y >= self.ctx.height {
            return Err(Error::InvalidArgument);
        }
        self.set_cursor(x, y, x, y)?;
        self.send(&color.to_wire())
    }

    /// Read one pixel from display RAM.
    ///
    /// No read window is set: the controller returns whatever its address
    /// counter points at, which is (x, y) only if the last write window
    /// started there.
    pub fn get_pixel(&mut self, x: u16, y: u16) -> Result<Rgb565> {
        if x >= self.ctx.width || y >= self.ctx.height {
            return Err(Error::InvalidArgument);
        }
        warn!("st7735: pixel readback at ({}, {}) without a read window", x, y);
        self.write_reg(Command::ReadRAM, &[])?;
        let mut dummy = [0u8; 1];
        self.recv(&mut dummy)?;
        let mut px = [0u8; 2];
        self.recv(&mut px)?;
        Ok(Rgb565::from_le_bytes(px))
    }

    /// Horizontal line in one bulk transfer
    pub fn draw_hline(&mut self, x: u16, y: u16, length: u16, color: Rgb565) -> Result<()> {
        if !fits(x, length, self.ctx.width) || y >= self.ctx.height {
            return Err(Error::InvalidArgument);
        }
        if length == 0 {
            return Ok(());
        }
        self.set_cursor(x, y, x + length, y + 1)?;

        let mut line = [0u8; SCRATCH_LEN];
        let bytes = 2 * usize::from(length);
        for px in line[..bytes].chunks_exact_mut(2) {
            px.copy_from_slice(&color.to_wire());
        }
        self.send(&line[..bytes])
    }

    /// Vertical line, one pixel write per row
    pub fn draw_vline(&mut self, x: u16, y: u16, length: u16, color: Rgb565) -> Result<()> {
        if x >= self.ctx.width || !fits(y, length, self.ctx.height) {
            return Err(Error::InvalidArgument);
        }
        for row in y..y + length {
            self.set_pixel(x, row, color)?;
        }
        Ok(())
    }

    /// Solid rectangle, drawn as one horizontal line per row
    pub fn fill_rect(&mut self, x: u16, y: u16, width: u16, height: u16, color: Rgb565) -> Result<()> {
        if !fits(x, width, self.ctx.width) || !fits(y, height, self.ctx.height) {
            return Err(Error::InvalidArgument);
        }
        if width == 0 {
            return Ok(());
        }
        for row in y..y + height {
            self.draw_hline(x, row, width, color)?;
        }
        Ok(())
    }

    /// Rectangle from a little-endian RGB565 buffer of `width * height` pixels.
    ///
    /// `width` may not exceed [MAX_RGB_RECT_WIDTH](constant.MAX_RGB_RECT_WIDTH.html).
    /// The cursor is re-set for every pixel, followed by the rest of the row.
    pub fn fill_rgb_rect(&mut self, x: u16, y: u16, data: &[u8], width: u16, height: u16) -> Result<()> {
        if width > MAX_RGB_RECT_WIDTH
            || !fits(x, width, self.ctx.width)
            || !fits(y, height, self.ctx.height)
            || data.len() < 2 * usize::from(width) * usize::from(height)
        {
            return Err(Error::InvalidArgument);
        }
        let row_bytes = 2 * usize::from(width);
        let mut scratch = [0u8; SCRATCH_LEN];

        for j in 0..height {
            let src = &data[usize::from(j) * row_bytes..][..row_bytes];
            for (dst, px) in scratch[..row_bytes].chunks_exact_mut(2).zip(src.chunks_exact(2)) {
                dst[0] = px[1];
                dst[1] = px[0];
            }
            for i in 0..width {
                self.set_cursor(x + i, y + j, x + i + 1, y + j + 1)?;
                self.send(&scratch[2 * usize::from(i)..row_bytes])?;
            }
        }
        Ok(())
    }

    /// Blit a little-endian RGB565 bitmap through a single window
    pub fn draw_bitmap(&mut self, x: u16, y: u16, width: u16, height: u16, bitmap: &[u8]) -> Result<()> {
        if !fits(x, width, self.ctx.width)
            || !fits(y, height, self.ctx.height)
            || bitmap.len() < 2 * usize::from(width) * usize::from(height)
        {
            return Err(Error::InvalidArgument);
        }
        if width == 0 || height == 0 {
            return Ok(());
        }
        self.set_cursor(x, y, x + width - 1, y + height - 1)?;

        let pixels = usize::from(width) * usize::from(height);
        for px in bitmap[..2 * pixels].chunks_exact(2) {
            self.send(&[px[1], px[0]])?;
        }
        Ok(())
    }
}

/// # Bus access
impl<B: BusIo> St7735<B> {
    fn write_reg(&mut self, cmd: Command, data: &[u8]) -> Result<()> {
        self.bus.write_register(cmd as u8, data).map_err(|e| {
            warn!("st7735: write {:?} failed: {:?}", cmd, e);
            Error::TransportFailure
        })
    }

    fn send(&mut self, data: &[u8]) -> Result<()> {
        self.bus.send_data(data).map_err(|e| {
            warn!("st7735: data transfer of {} bytes failed: {:?}", data.len(), e);
            Error::TransportFailure
        })
    }

    fn recv(&mut self, buf: &mut [u8]) -> Result<()> {
        self.bus.receive_data(buf).map_err(|e| {
            warn!("st7735: read of {} bytes failed: {:?}", buf.len(), e);
            Error::TransportFailure
        })
    }
}
