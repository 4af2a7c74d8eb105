//! Full-screen textual overlays: hold menus and transient banners.
//!
//! Overlays supersede the info-screen content entirely. The hold menu is
//! drawn by the renderer while a press is being classified; banners are used
//! by the composition root outside the normal tick cycle (splash, farewell,
//! action confirmation).

use embedded_graphics::{draw_target::DrawTarget, pixelcolor::BinaryColor, prelude::*, text::Text};

use crate::config::{CENTER_X, ROW_Y, SCREEN_HEIGHT};
use crate::styles::{CENTERED, FONT_HEIGHT, TEXT};

/// Draw the three-line hold menu: action name, release prompt, destination.
///
/// Shown while the button is held past a threshold, as feedback that a
/// release will now trigger `title`.
pub fn hold_menu<D>(
    display: &mut D,
    title: &str,
    destination: &str,
) where
    D: DrawTarget<Color = BinaryColor>,
{
    let lines = [title, "Release Button", destination];
    for (text, y) in lines.into_iter().zip(ROW_Y) {
        Text::with_text_style(text, Point::new(CENTER_X, y), TEXT, CENTERED)
            .draw(display)
            .ok();
    }
}

/// Draw a single centered message on a cleared frame.
///
/// Used for the startup splash, the farewell on interrupt, and the
/// confirmation flashed right before a power action fires.
pub fn banner<D>(
    display: &mut D,
    message: &str,
) where
    D: DrawTarget<Color = BinaryColor>,
{
    display.clear(BinaryColor::Off).ok();

    let y = (SCREEN_HEIGHT as i32 - FONT_HEIGHT) / 2;
    Text::with_text_style(message, Point::new(CENTER_X, y), TEXT, CENTERED)
        .draw(display)
        .ok();
}
