//! Push-button input over the sysfs GPIO interface.
//!
//! The button shorts the line to ground; a pull-up keeps it high otherwise
//! (active-low). The raw level is normalised to a pressed/not-pressed bool
//! here so the rest of the code never sees the polarity. Debouncing is left
//! to the sampling rate of the control loop.

use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use linux_embedded_hal::sysfs_gpio::{Direction, Pin};

/// Process-wide handle to the button GPIO.
pub struct Button {
    pin: Pin,
}

impl Button {
    /// Export the GPIO and configure it as an input.
    pub fn open(gpio: u64) -> Result<Self> {
        let pin = Pin::new(gpio);
        pin.export().with_context(|| format!("exporting GPIO {gpio}"))?;

        // udev needs a moment to fix up permissions on the new sysfs node
        thread::sleep(Duration::from_millis(100));

        pin.set_direction(Direction::In)
            .with_context(|| format!("configuring GPIO {gpio} as input"))?;

        Ok(Self { pin })
    }

    /// Sample the button level right now. True means pressed.
    pub fn is_pressed(&self) -> Result<bool> {
        let level = self.pin.get_value().context("reading button GPIO")?;
        Ok(level == 0)
    }

    /// Unexport the GPIO. Best-effort; runs on every exit path.
    pub fn release(&self) {
        let _ = self.pin.unexport();
    }
}
