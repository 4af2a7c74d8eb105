//! Pre-computed text and primitive styles.
//!
//! `MonoTextStyle`, `TextStyleBuilder`, and `PrimitiveStyle::with_stroke` are
//! all const-constructible in embedded-graphics 0.8, so every style lives in
//! the binary's read-only section instead of being rebuilt each tick.

use embedded_graphics::{
    mono_font::MonoTextStyle,
    pixelcolor::BinaryColor,
    primitives::PrimitiveStyle,
    text::{Alignment, Baseline, TextStyle, TextStyleBuilder},
};
use profont::PROFONT_7_POINT;

/// Glyph height of the panel font, for vertical centering.
pub const FONT_HEIGHT: i32 = PROFONT_7_POINT.character_size.height as i32;

/// The single character style used everywhere: small ProFont, pixels on.
pub const TEXT: MonoTextStyle<'static, BinaryColor> = MonoTextStyle::new(&PROFONT_7_POINT, BinaryColor::On);

/// Left-aligned, top-anchored rows for the info screens.
pub const LEFT: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Left)
    .baseline(Baseline::Top)
    .build();

/// Centered, top-anchored rows for overlays and banners.
pub const CENTERED: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Center)
    .baseline(Baseline::Top)
    .build();

/// 1px stroke for the separator rule on the network screen.
pub const RULE: PrimitiveStyle<BinaryColor> = PrimitiveStyle::with_stroke(BinaryColor::On, 1);
