//! SSD1306 OLED frame sink over I2C.
//!
//! The panel sits upside-down in the case, so the driver is configured with
//! 180 degree rotation. Rendering happens into the driver's internal buffer
//! (a [`DrawTarget`] handed out by [`Oled::frame`]); [`Oled::flush`] pushes
//! the buffer to the hardware.
//!
//! [`DrawTarget`]: embedded_graphics::draw_target::DrawTarget

use anyhow::{Context, Result, anyhow};
use linux_embedded_hal::I2cdev;
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::{I2CDisplayInterface, Ssd1306};

use crate::config::I2C_BUS;

/// The concrete buffered driver for the 128x32 panel.
pub type FrameBuffer = Ssd1306<I2CInterface<I2cdev>, DisplaySize128x32, BufferedGraphicsMode<DisplaySize128x32>>;

/// Process-wide handle to the physical display.
pub struct Oled {
    display: FrameBuffer,
}

impl Oled {
    /// Open the I2C bus, initialise the controller, and start from a blank
    /// panel.
    pub fn open() -> Result<Self> {
        let i2c = I2cdev::new(I2C_BUS).with_context(|| format!("opening I2C bus {I2C_BUS}"))?;
        let interface = I2CDisplayInterface::new(i2c);

        let mut display = Ssd1306::new(interface, DisplaySize128x32, DisplayRotation::Rotate180)
            .into_buffered_graphics_mode();
        display
            .init()
            .map_err(|e| anyhow!("initialising SSD1306: {e:?}"))?;
        display.clear_buffer();
        display
            .flush()
            .map_err(|e| anyhow!("clearing SSD1306: {e:?}"))?;

        Ok(Self { display })
    }

    /// The draw target the renderer composes into.
    pub fn frame(&mut self) -> &mut FrameBuffer {
        &mut self.display
    }

    /// Push the composed frame to the hardware.
    pub fn flush(&mut self) -> Result<()> {
        self.display
            .flush()
            .map_err(|e| anyhow!("pushing frame to SSD1306: {e:?}"))
    }

    /// Blank the panel and switch the controller off.
    ///
    /// Best-effort: this runs on every exit path, where there is nothing
    /// sensible left to do about an I/O error.
    pub fn power_off(&mut self) {
        self.display.clear_buffer();
        if self.display.flush().is_err() {
            return;
        }
        let _ = self.display.set_display_on(false);
    }
}
