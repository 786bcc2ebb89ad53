//! The instance-indexed display facade

use log::{debug, warn};

use crate::color::{ColorFormat, PixelFormat, Rgb565};
use crate::driver::LcdDriver;
use crate::error::{Error, Result};
use crate::glyph::{FontSize, GlyphMode};
use crate::orientation::Orientation;

/// Highest value [set_brightness](struct.Lcd.html#method.set_brightness) accepts
pub const MAX_BRIGHTNESS: u8 = 100;

/// Definition: What the facade remembers about one display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LcdContext {
    /// Width reported after the last `init`
    pub x_size: u16,
    /// Height reported after the last `init`
    pub y_size: u16,
    /// Always RGB565
    pub pixel_format: PixelFormat,
}

impl Default for LcdContext {
    fn default() -> Self {
        Self { x_size: 0, y_size: 0, pixel_format: PixelFormat::Rgb565 }
    }
}

/// Bus failures inside a driver surface as `ComponentFailure`
fn component<T>(res: Result<T>) -> Result<T> {
    res.map_err(|e| match e {
        Error::TransportFailure => {
            warn!("lcd: driver call failed: {}", e);
            Error::ComponentFailure
        }
        other => other,
    })
}

/// Facade: `N` displays addressed by instance index
///
/// Every call checks the index first, so a bad index never reaches a bus.
/// A bus failure inside the driver reads as `ComponentFailure`; rejected
/// arguments and missing capabilities are passed on unchanged. Bring-up
/// reports any failure other than a rejected argument as `ComponentFailure`.
pub struct Lcd<D: LcdDriver, const N: usize = 1> {
    drivers: [D; N],
    ctx: [LcdContext; N],
}

impl<D: LcdDriver> Lcd<D, 1> {
    /// Facade over a single display
    pub fn single(driver: D) -> Self {
        Self::new([driver])
    }
}

impl<D: LcdDriver, const N: usize> Lcd<D, N> {
    /// Take ownership of the drivers; instance `i` is `drivers[i]`
    pub fn new(drivers: [D; N]) -> Self {
        Self { drivers, ctx: [LcdContext::default(); N] }
    }

    /// Hand the drivers back
    pub fn release(self) -> [D; N] {
        self.drivers
    }

    /// Driver of `instance`
    pub fn driver(&self, instance: usize) -> Result<&D> {
        self.drivers.get(instance).ok_or(Error::InvalidArgument)
    }

    /// Driver of `instance`, mutably
    pub fn driver_mut(&mut self, instance: usize) -> Result<&mut D> {
        self.drivers.get_mut(instance).ok_or(Error::InvalidArgument)
    }

    /// Facade state of `instance`
    pub fn context(&self, instance: usize) -> Result<&LcdContext> {
        self.ctx.get(instance).ok_or(Error::InvalidArgument)
    }
}

/// # Lifecycle
impl<D: LcdDriver, const N: usize> Lcd<D, N> {
    /// Bring the controller up in `orientation` and clear the screen to white
    pub fn init(&mut self, instance: usize, orientation: Orientation) -> Result<()> {
        let drv = self.drivers.get_mut(instance).ok_or(Error::InvalidArgument)?;
        drv.init(ColorFormat::Rgb565, orientation).map_err(|e| match e {
            Error::InvalidArgument => e,
            _ => {
                warn!("lcd{}: controller bring-up failed: {}", instance, e);
                Error::ComponentFailure
            }
        })?;

        let (x_size, y_size) = (drv.width(), drv.height());
        self.ctx[instance] = LcdContext { x_size, y_size, pixel_format: PixelFormat::Rgb565 };
        debug!("lcd{}: {}x{} ready", instance, x_size, y_size);

        component(drv.fill_rect(0, 0, x_size, y_size, Rgb565::WHITE))
    }

    /// Release the controller's bus
    pub fn deinit(&mut self, instance: usize) -> Result<()> {
        component(self.driver_mut(instance)?.deinit())
    }

    /// Controller ID byte
    pub fn read_id(&mut self, instance: usize) -> Result<u8> {
        component(self.driver_mut(instance)?.read_id())
    }
}

/// # Display power
impl<D: LcdDriver, const N: usize> Lcd<D, N> {
    #[allow(missing_docs)]
    pub fn display_on(&mut self, instance: usize) -> Result<()> {
        component(self.driver_mut(instance)?.display_on())
    }

    #[allow(missing_docs)]
    pub fn display_off(&mut self, instance: usize) -> Result<()> {
        component(self.driver_mut(instance)?.display_off())
    }

    /// Backlight level in percent, 0..=100
    pub fn set_brightness(&mut self, instance: usize, brightness: u8) -> Result<()> {
        let drv = self.driver_mut(instance)?;
        if brightness > MAX_BRIGHTNESS {
            return Err(Error::InvalidArgument);
        }
        component(drv.set_brightness(brightness))
    }

    #[allow(missing_docs)]
    pub fn get_brightness(&mut self, instance: usize) -> Result<u8> {
        component(self.driver_mut(instance)?.get_brightness())
    }
}

/// # Geometry
impl<D: LcdDriver, const N: usize> Lcd<D, N> {
    /// Rotate the display. The stored sizes follow the driver.
    pub fn set_orientation(&mut self, instance: usize, orientation: Orientation) -> Result<()> {
        let drv = self.drivers.get_mut(instance).ok_or(Error::InvalidArgument)?;
        component(drv.set_orientation(orientation))?;
        self.ctx[instance].x_size = drv.width();
        self.ctx[instance].y_size = drv.height();
        Ok(())
    }

    #[allow(missing_docs)]
    pub fn get_orientation(&self, instance: usize) -> Result<Orientation> {
        self.driver(instance)?.get_orientation()
    }

    /// Current width in pixels
    pub fn get_x_size(&self, instance: usize) -> Result<u16> {
        Ok(self.driver(instance)?.width())
    }

    /// Current height in pixels
    pub fn get_y_size(&self, instance: usize) -> Result<u16> {
        Ok(self.driver(instance)?.height())
    }

    /// Always RGB565
    pub fn get_pixel_format(&self, instance: usize) -> Result<PixelFormat> {
        Ok(self.context(instance)?.pixel_format)
    }
}

/// # Drawing
impl<D: LcdDriver, const N: usize> Lcd<D, N> {
    #[allow(missing_docs)]
    pub fn set_pixel(&mut self, instance: usize, x: u16, y: u16, color: Rgb565) -> Result<()> {
        component(self.driver_mut(instance)?.set_pixel(x, y, color))
    }

    /// Not offered: the controller's readback position cannot be trusted.
    /// Use [St7735::get_pixel](struct.St7735.html#method.get_pixel) directly
    /// to try anyway.
    pub fn get_pixel(&mut self, instance: usize, _x: u16, _y: u16) -> Result<Rgb565> {
        self.driver_mut(instance)?;
        Err(Error::UnsupportedFeature)
    }

    #[allow(missing_docs)]
    pub fn draw_hline(&mut self, instance: usize, x: u16, y: u16, length: u16, color: Rgb565) -> Result<()> {
        component(self.driver_mut(instance)?.draw_hline(x, y, length, color))
    }

    #[allow(missing_docs)]
    pub fn draw_vline(&mut self, instance: usize, x: u16, y: u16, length: u16, color: Rgb565) -> Result<()> {
        component(self.driver_mut(instance)?.draw_vline(x, y, length, color))
    }

    #[allow(missing_docs)]
    pub fn fill_rect(&mut self, instance: usize, x: u16, y: u16, width: u16, height: u16, color: Rgb565) -> Result<()> {
        component(self.driver_mut(instance)?.fill_rect(x, y, width, height, color))
    }

    /// `data` holds `width * height` little-endian RGB565 pixels
    pub fn fill_rgb_rect(&mut self, instance: usize, x: u16, y: u16, data: &[u8], width: u16, height: u16) -> Result<()> {
        component(self.driver_mut(instance)?.fill_rgb_rect(x, y, data, width, height))
    }

    /// `bitmap` holds `width * height` little-endian RGB565 pixels
    pub fn draw_bitmap(&mut self, instance: usize, x: u16, y: u16, width: u16, height: u16, bitmap: &[u8]) -> Result<()> {
        component(self.driver_mut(instance)?.draw_bitmap(x, y, width, height, bitmap))
    }

    /// `size` is the glyph height: 12, 16, 24 or 32
    #[allow(clippy::too_many_arguments)]
    pub fn draw_char(
        &mut self,
        instance: usize,
        x: u16,
        y: u16,
        code: u8,
        size: u8,
        fg: Rgb565,
        bg: Rgb565,
        mode: GlyphMode,
    ) -> Result<()> {
        let drv = self.driver_mut(instance)?;
        component(drv.draw_char(x, y, code, FontSize::try_from(size)?, fg, bg, mode))
    }

    /// `size` is the glyph height: 12, 16, 24 or 32
    #[allow(clippy::too_many_arguments)]
    pub fn draw_string(
        &mut self,
        instance: usize,
        x: u16,
        y: u16,
        text: &str,
        size: u8,
        fg: Rgb565,
        bg: Rgb565,
    ) -> Result<()> {
        let drv = self.driver_mut(instance)?;
        component(drv.draw_string(x, y, text, FontSize::try_from(size)?, fg, bg))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::Command;
    use crate::config::PanelConfig;
    use crate::st7735::St7735;
    use crate::testing::{portrait_driver, RecordingBus, Transaction};

    type TestLcd = Lcd<St7735<RecordingBus>>;

    fn facade() -> TestLcd {
        Lcd::single(portrait_driver())
    }

    fn log(lcd: &TestLcd) -> &[Transaction] {
        &lcd.driver(0).unwrap().bus().log
    }

    /// A controller with nothing but bring-up
    struct Bare {
        fail: Option<Error>,
    }

    impl LcdDriver for Bare {
        fn init(&mut self, _: ColorFormat, _: Orientation) -> Result<()> {
            self.fail.map_or(Ok(()), Err)
        }
        fn width(&self) -> u16 { 8 }
        fn height(&self) -> u16 { 4 }
    }

    #[test]
    fn init_clears_to_white() {
        let mut lcd = facade();
        lcd.init(0, Orientation::Portrait).unwrap();
        assert_eq!((lcd.get_x_size(0), lcd.get_y_size(0)), (Ok(128), Ok(160)));
        assert_eq!(lcd.context(0).map(|c| (c.x_size, c.y_size)), Ok((128, 160)));

        let bus = lcd.driver(0).unwrap().bus();
        let sends = bus.sends();
        // the one-byte COLMOD parameter goes through write_register, so every
        // data transfer after bring-up is a fill row
        assert_eq!(sends.len(), 160);
        assert!(sends.iter().all(|s| s.len() == 256 && s.iter().all(|b| *b == 0xFF)));
    }

    #[test]
    fn end_to_end_fill_is_one_window_and_send_per_row() {
        let mut lcd = facade();
        lcd.init(0, Orientation::Portrait).unwrap();
        lcd.driver_mut(0).unwrap().bus_mut().clear();

        lcd.fill_rect(0, 0, 0, 128, 160, Rgb565::WHITE).unwrap();
        let log = log(&lcd);
        assert_eq!(log.len(), 160 * 4);
        for (row, chunk) in log.chunks(4).enumerate() {
            assert!(matches!(&chunk[0], Transaction::WriteRegister(0x2A, _)));
            let y = row as u8 + 1;
            assert_eq!(chunk[1], Transaction::WriteRegister(0x2B, std::vec![0, y, 0, y + 1]));
            assert_eq!(chunk[2], Transaction::WriteRegister(Command::WriteRAM as u8, std::vec![]));
            assert_eq!(chunk[3], Transaction::SendData(std::vec![0xFF; 256]));
        }
    }

    #[test]
    fn brightness_is_unsupported_without_traffic() {
        let mut lcd = facade();
        assert_eq!(lcd.set_brightness(0, 50), Err(Error::UnsupportedFeature));
        assert_eq!(lcd.set_brightness(0, 101), Err(Error::InvalidArgument));
        assert_eq!(lcd.get_brightness(0), Err(Error::UnsupportedFeature));
        assert!(log(&lcd).is_empty());
    }

    #[test]
    fn pixel_readback_is_gated() {
        let mut lcd = facade();
        assert_eq!(lcd.get_pixel(0, 1, 1), Err(Error::UnsupportedFeature));
        assert_eq!(lcd.get_pixel(1, 1, 1), Err(Error::InvalidArgument));
        assert!(log(&lcd).is_empty());
    }

    #[test]
    fn bad_instance_is_rejected_everywhere() {
        let mut lcd = facade();
        assert_eq!(lcd.init(1, Orientation::Portrait), Err(Error::InvalidArgument));
        assert_eq!(lcd.set_pixel(1, 0, 0, Rgb565::RED), Err(Error::InvalidArgument));
        assert_eq!(lcd.fill_rect(1, 0, 0, 1, 1, Rgb565::RED), Err(Error::InvalidArgument));
        assert_eq!(lcd.get_x_size(1), Err(Error::InvalidArgument));
        assert_eq!(lcd.get_pixel_format(1), Err(Error::InvalidArgument));
        assert_eq!(lcd.display_on(7), Err(Error::InvalidArgument));
        assert!(log(&lcd).is_empty());
    }

    #[test]
    fn bring_up_failure_is_a_component_failure() {
        let mut lcd = Lcd::single(St7735::register(RecordingBus::new(), PanelConfig::default()).unwrap());
        lcd.driver_mut(0).unwrap().bus_mut().fail_at = Some(1);
        assert_eq!(lcd.init(0, Orientation::Portrait), Err(Error::ComponentFailure));

        let mut bare = Lcd::single(Bare { fail: Some(Error::InvalidArgument) });
        assert_eq!(bare.init(0, Orientation::Portrait), Err(Error::InvalidArgument));
    }

    #[test]
    fn unbound_primitives_report_unsupported() {
        let mut lcd = Lcd::single(Bare { fail: None });
        // init clears through fill_rect, which Bare lacks
        assert_eq!(lcd.init(0, Orientation::Portrait), Err(Error::UnsupportedFeature));
        assert_eq!(lcd.context(0).map(|c| c.x_size), Ok(8));
        assert_eq!(lcd.display_on(0), Err(Error::UnsupportedFeature));
        assert_eq!(lcd.draw_hline(0, 0, 0, 1, Rgb565::RED), Err(Error::UnsupportedFeature));
        assert_eq!(lcd.get_orientation(0), Err(Error::UnsupportedFeature));
        assert_eq!(
            lcd.draw_string(0, 0, 0, "x", 16, Rgb565::RED, Rgb565::BLACK),
            Err(Error::UnsupportedFeature)
        );
        assert_eq!(lcd.get_pixel_format(0), Ok(PixelFormat::Rgb565));
        assert_eq!(PixelFormat::Rgb565 as u32, 2);
    }

    #[test]
    fn glyph_size_is_validated() {
        let mut lcd = facade();
        assert_eq!(
            lcd.draw_char(0, 0, 0, b'A', 20, Rgb565::RED, Rgb565::BLACK, GlyphMode::Overlay),
            Err(Error::InvalidArgument)
        );
        lcd.draw_string(0, 0, 0, "ok", 12, Rgb565::RED, Rgb565::BLACK).unwrap();
        assert_eq!(log(&lcd).len(), 2 * 6 * 12 * 4);
    }

    #[test]
    fn orientation_updates_stored_sizes() {
        let mut lcd = facade();
        lcd.set_orientation(0, Orientation::LandscapeFlipped).unwrap();
        assert_eq!(lcd.get_orientation(0), Ok(Orientation::LandscapeFlipped));
        assert_eq!(lcd.context(0).map(|c| (c.x_size, c.y_size)), Ok((160, 128)));
    }

    #[test]
    fn driver_bus_failures_read_as_component_failures() {
        let mut lcd = facade();
        // row 0 goes out, the CASET of row 1 fails
        lcd.driver_mut(0).unwrap().bus_mut().fail_at = Some(4);
        assert_eq!(lcd.fill_rect(0, 0, 0, 10, 10, Rgb565::RED), Err(Error::ComponentFailure));
        assert_eq!(log(&lcd).len(), 5);

        assert_eq!(lcd.fill_rect(0, 0, 0, 200, 1, Rgb565::RED), Err(Error::InvalidArgument));
        assert_eq!(lcd.get_brightness(0), Err(Error::UnsupportedFeature));
        assert_eq!(log(&lcd).len(), 5);
    }

    #[test]
    fn failed_white_clear_is_a_component_failure() {
        let mut lcd = facade();
        // SLPOUT, delay and 20 more register writes, then the first fill row
        lcd.driver_mut(0).unwrap().bus_mut().fail_at = Some(25);
        assert_eq!(lcd.init(0, Orientation::Portrait), Err(Error::ComponentFailure));
        assert_eq!(log(&lcd)[25], Transaction::SendData(std::vec![0xFF; 256]));
        assert_eq!(log(&lcd).len(), 26);
    }

    #[test]
    fn failed_orientation_change_keeps_stored_sizes() {
        let mut lcd = facade();
        lcd.set_orientation(0, Orientation::Portrait).unwrap();
        lcd.driver_mut(0).unwrap().bus_mut().fail_at = Some(4);
        assert_eq!(lcd.set_orientation(0, Orientation::Landscape), Err(Error::ComponentFailure));
        assert_eq!(lcd.get_orientation(0), Ok(Orientation::Portrait));
        assert_eq!(lcd.context(0).map(|c| (c.x_size, c.y_size)), Ok((128, 160)));
        assert_eq!((lcd.get_x_size(0), lcd.get_y_size(0)), (Ok(128), Ok(160)));
    }

    #[test]
    fn several_instances() {
        let mut lcd: Lcd<St7735<RecordingBus>, 2> = Lcd::new([portrait_driver(), portrait_driver()]);
        lcd.set_pixel(1, 0, 0, Rgb565::RED).unwrap();
        assert!(lcd.driver(0).unwrap().bus().log.is_empty());
        assert_eq!(lcd.driver(1).unwrap().bus().sends().len(), 1);
        let [_, second] = lcd.release();
        assert_eq!(second.bus().register_writes(Command::WriteRAM as u8), 1);
    }
}
