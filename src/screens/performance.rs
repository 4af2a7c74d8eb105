//! Performance screen: CPU / RAM / DISK utilisation, one decimal place.

use core::fmt::Write;

use embedded_graphics::{draw_target::DrawTarget, pixelcolor::BinaryColor, prelude::*, text::Text};
use heapless::String;

use crate::config::ROW_Y;
use crate::state::Performance;
use crate::styles::{LEFT, TEXT};

pub fn draw<D>(
    display: &mut D,
    perf: &Performance,
) where
    D: DrawTarget<Color = BinaryColor>,
{
    let rows = [
        ("CPU :", perf.cpu_pct),
        ("RAM :", perf.mem_pct),
        ("DISK:", perf.disk_pct),
    ];

    for ((label, value), y) in rows.iter().zip(ROW_Y) {
        let mut line: String<24> = String::new();
        let _ = write!(line, "{label} {value:.1}%");
        Text::with_text_style(line.as_str(), Point::new(0, y), TEXT, LEFT)
            .draw(display)
            .ok();
    }
}
