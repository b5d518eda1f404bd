//! Pure helpers behind the components: style lookup, card visuals, glyph
//! data, and image fallback.

pub mod activity_style;
pub mod card_style;
pub mod glyph;
pub mod image_fallback;
