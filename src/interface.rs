use core::fmt::Debug;
use core::marker::PhantomData;

/// Device: The descriptor for the ST7735 bus to be implemented
///
/// The trait supplies the four transaction primitives the driver is built on.
/// The functions' content is related to the physical protocol (bit-banged
/// serial, hardware SPI, 8080 parallel).
///
/// Every call blocks until the transfer completes.
pub trait BusIo {
    /// The transport's own failure description
    type Error: Debug;

    /// Send the register opcode followed by its parameters.
    ///
    /// For Serial interface: one write with D/C = 0, then `data` with D/C = 1
    fn write_register(&mut self, reg: u8, data: &[u8]) -> Result<(), Self::Error>;

    /// Send raw data bytes (D/C = 1)
    fn send_data(&mut self, data: &[u8]) -> Result<(), Self::Error>;

    /// Fill `buf` with data bytes clocked out of the controller (D/C = 1)
    fn receive_data(&mut self, buf: &mut [u8]) -> Result<(), Self::Error>;

    /// Block the calling thread for `ms` milliseconds
    fn delay_ms(&mut self, ms: u32);

    /// Bring the bus up. Called once at registration.
    fn init(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Release the bus
    fn deinit(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Free-running millisecond counter, if the platform has one
    fn tick(&mut self) -> Option<u32> {
        None
    }
}

impl<T: BusIo + ?Sized> BusIo for &mut T {
    type Error = T::Error;

    fn write_register(&mut self, reg: u8, data: &[u8]) -> Result<(), Self::Error> {
        T::write_register(self, reg, data)
    }
    fn send_data(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        T::send_data(self, data)
    }
    fn receive_data(&mut self, buf: &mut [u8]) -> Result<(), Self::Error> {
        T::receive_data(self, buf)
    }
    fn delay_ms(&mut self, ms: u32) {
        T::delay_ms(self, ms)
    }
    fn init(&mut self) -> Result<(), Self::Error> {
        T::init(self)
    }
    fn deinit(&mut self) -> Result<(), Self::Error> {
        T::deinit(self)
    }
    fn tick(&mut self) -> Option<u32> {
        T::tick(self)
    }
}

/// Device: The context-free version of [BusIo](trait.BusIo.html)
///
/// For buses reached through global pin state, where no handle needs to be
/// carried around. Wrap the implementor into [StaticWrap](struct.StaticWrap.html)
/// to hand it to the driver.
#[allow(missing_docs)]
pub trait StaticBusIo {
    type Error: Debug;

    fn write_register(reg: u8, data: &[u8]) -> Result<(), Self::Error>;
    fn send_data(data: &[u8]) -> Result<(), Self::Error>;
    fn receive_data(buf: &mut [u8]) -> Result<(), Self::Error>;
    fn delay_ms(ms: u32);

    fn init() -> Result<(), Self::Error> {
        Ok(())
    }
    fn deinit() -> Result<(), Self::Error> {
        Ok(())
    }
    fn tick() -> Option<u32> {
        None
    }
}

/// Helper: turns a [StaticBusIo](trait.StaticBusIo.html) into a [BusIo](trait.BusIo.html)
pub struct StaticWrap<T: StaticBusIo>(PhantomData<T>);

impl<T: StaticBusIo> StaticWrap<T> {
    /// Create the wrapper
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T: StaticBusIo> Default for StaticWrap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: StaticBusIo> BusIo for StaticWrap<T> {
    type Error = T::Error;

    fn write_register(&mut self, reg: u8, data: &[u8]) -> Result<(), Self::Error> {
        T::write_register(reg, data)
    }
    fn send_data(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        T::send_data(data)
    }
    fn receive_data(&mut self, buf: &mut [u8]) -> Result<(), Self::Error> {
        T::receive_data(buf)
    }
    fn delay_ms(&mut self, ms: u32) {
        T::delay_ms(ms)
    }
    fn init(&mut self) -> Result<(), Self::Error> {
        T::init()
    }
    fn deinit(&mut self) -> Result<(), Self::Error> {
        T::deinit()
    }
    fn tick(&mut self) -> Option<u32> {
        T::tick()
    }
}
