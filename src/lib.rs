/*!

The middleware for type-safe access to ST7735-based LCD displays.

The library wraps around a user-provided low-level bus descriptor and turns
drawing requests into the register writes and pixel streams the controller
expects, keeping the addressing and orientation state in sync.

# Usage steps
1. Create a custom type for the bus, or use [SpiInterface](struct.SpiInterface.html)
for an embedded-hal SPI device
2. Implement [BusIo](trait.BusIo.html) or [StaticBusIo](trait.StaticBusIo.html)
for the custom type
3. Register the bus with [St7735::register](struct.St7735.html#method.register)
4. Run [init](struct.St7735.html#method.init) and draw; or hand the driver to
the [Lcd](struct.Lcd.html) facade for instance-indexed, capability-checked access

# Example

```
use st7735_driver::{BusIo, ColorFormat, FontSize, Orientation, PanelConfig, Rgb565, St7735};

// A bus that discards everything
struct NullBus;
impl BusIo for NullBus {
    type Error = ();
    fn write_register(&mut self, _reg: u8, _data: &[u8]) -> Result<(), ()> { Ok(()) }
    fn send_data(&mut self, _data: &[u8]) -> Result<(), ()> { Ok(()) }
    fn receive_data(&mut self, buf: &mut [u8]) -> Result<(), ()> { buf.fill(0); Ok(()) }
    fn delay_ms(&mut self, _ms: u32) {}
}

let mut lcd = St7735::register(NullBus, PanelConfig::default())?;
lcd.init(ColorFormat::Rgb565, Orientation::Landscape)?;
assert_eq!((lcd.width(), lcd.height()), (160, 128));

lcd.fill_rect(0, 0, lcd.width(), lcd.height(), Rgb565::BLACK)?;
lcd.draw_string(4, 4, "Hello", FontSize::Size16, Rgb565::WHITE, Rgb565::BLACK)?;
# Ok::<(), st7735_driver::Error>(())
```

All calls block until the bus is done. Nothing is locked internally:
share a display between tasks only under an external lock held for the
whole session.
*/

#![no_std]
#![warn(missing_docs)]

#[cfg(test)]
extern crate std;

mod color;
mod command;
mod config;
mod driver;
mod error;
mod font;
mod glyph;
mod interface;
mod lcd;
mod orientation;
mod spi;
mod st7735;

#[cfg(test)]
mod testing;

pub use color::{ColorFormat, PixelFormat, Rgb565};
pub use config::{PanelConfig, MAX_LINE_PIXELS};
pub use driver::LcdDriver;
pub use error::{Error, Result};
pub use glyph::{FontSize, GlyphMode};
pub use interface::{BusIo, StaticBusIo, StaticWrap};
pub use lcd::{Lcd, LcdContext, MAX_BRIGHTNESS};
pub use orientation::{
    ColourOrder, ColumnAddressOrder, DataLatchOrder, LineRefreshOrder, MemAccess, Orientation,
    RowAddressOrder, RowColumnExchange,
};
pub use spi::{InterfaceError, SpiInterface};
pub use st7735::{ControllerContext, St7735, Window, MAX_RGB_RECT_WIDTH};
