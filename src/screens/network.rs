//! Network identity screen: hostname, IP address, separator rule.

use core::fmt::Write;

use embedded_graphics::{
    draw_target::DrawTarget,
    pixelcolor::BinaryColor,
    prelude::*,
    primitives::Line,
    text::Text,
};
use heapless::String;

use crate::config::{ROW_Y, RULE_Y, SCREEN_WIDTH};
use crate::screens::clip;
use crate::state::NetworkInfo;
use crate::styles::{LEFT, RULE, TEXT};

/// Columns left for the value once the 6-column label prefix is drawn.
const VALUE_COLS: usize = 15;

pub fn draw<D>(
    display: &mut D,
    net: &NetworkInfo,
) where
    D: DrawTarget<Color = BinaryColor>,
{
    let mut line: String<64> = String::new();

    let _ = write!(line, "HOST: {}", clip(&net.hostname, VALUE_COLS));
    Text::with_text_style(line.as_str(), Point::new(0, ROW_Y[0]), TEXT, LEFT)
        .draw(display)
        .ok();

    line.clear();
    let _ = write!(line, "IP  : {}", clip(&net.ip, VALUE_COLS));
    Text::with_text_style(line.as_str(), Point::new(0, ROW_Y[1]), TEXT, LEFT)
        .draw(display)
        .ok();

    Line::new(Point::new(0, RULE_Y), Point::new(SCREEN_WIDTH as i32 - 1, RULE_Y))
        .into_styled(RULE)
        .draw(display)
        .ok();
}
