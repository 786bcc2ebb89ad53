//! `BusIo` over an embedded-hal SPI device

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiDevice;

use crate::interface::BusIo;

/// Settle time after releasing the reset line
const RESET_DELAY_MS: u32 = 100;

/// Failure of the SPI bus or one of the control pins
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterfaceError<S, P> {
    /// SPI transfer failed
    Spi(S),
    /// D/C or reset pin could not be driven
    Pin(P),
}

/// Device: 4-wire serial connection (SCL, SDA, CS through the `SpiDevice`, D/C as a GPIO)
pub struct SpiInterface<SPI, DC, RST, D> {
    spi: SPI,
    dc: DC,
    rst: Option<RST>,
    delay: D,
}

impl<SPI, DC, RST, D> SpiInterface<SPI, DC, RST, D>
where
    SPI: SpiDevice,
    DC: OutputPin,
    RST: OutputPin<Error = DC::Error>,
    D: DelayNs,
{
    /// `rst` may be `None` when the reset line is tied high
    pub fn new(spi: SPI, dc: DC, rst: Option<RST>, delay: D) -> Self {
        Self { spi, dc, rst, delay }
    }

    /// Give the peripherals back
    pub fn release(self) -> (SPI, DC, Option<RST>, D) {
        (self.spi, self.dc, self.rst, self.delay)
    }

    fn data_mode(&mut self) -> Result<(), InterfaceError<SPI::Error, DC::Error>> {
        self.dc.set_high().map_err(InterfaceError::Pin)
    }
}

impl<SPI, DC, RST, D> BusIo for SpiInterface<SPI, DC, RST, D>
where
    SPI: SpiDevice,
    DC: OutputPin,
    RST: OutputPin<Error = DC::Error>,
    D: DelayNs,
{
    type Error = InterfaceError<SPI::Error, DC::Error>;

    fn write_register(&mut self, reg: u8, data: &[u8]) -> Result<(), Self::Error> {
        self.dc.set_low().map_err(InterfaceError::Pin)?;
        self.spi.write(&[reg]).map_err(InterfaceError::Spi)?;
        if !data.is_empty() {
            self.data_mode()?;
            self.spi.write(data).map_err(InterfaceError::Spi)?;
        }
        Ok(())
    }

    fn send_data(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.data_mode()?;
        self.spi.write(data).map_err(InterfaceError::Spi)
    }

    fn receive_data(&mut self, buf: &mut [u8]) -> Result<(), Self::Error> {
        self.data_mode()?;
        self.spi.read(buf).map_err(InterfaceError::Spi)
    }

    fn delay_ms(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
    }

    fn init(&mut self) -> Result<(), Self::Error> {
        if let Some(rst) = self.rst.as_mut() {
            rst.set_high().map_err(InterfaceError::Pin)?;
            self.delay.delay_ms(RESET_DELAY_MS);
        }
        Ok(())
    }
}
