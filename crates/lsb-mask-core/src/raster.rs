//! Renders text into a [`MaskImage`].
//!
//! The rendered mask is what travels hidden in the carrier, the message is
//! read back by looking at the unveiled image, not by parsing text.

use font8x8::{UnicodeFonts, BASIC_FONTS};
use log::debug;

use crate::media::image::MaskImage;

/// column count the text is wrapped at
pub const DEFAULT_WRAP_WIDTH: usize = 60;
/// distance of the first glyph from the top and left edge in pixel
pub const DEFAULT_MARGIN: u32 = 10;
/// vertical advance per line in pixel
pub const DEFAULT_LINE_SPACING: u32 = 10;

const GLYPH_WIDTH: u32 = 8;

/// Something that turns text into a mask of a given size
pub trait TextRasterizer {
    /// The returned mask has exactly `width` x `height` pixel,
    /// ink is pure white and everything else pure black.
    fn render(&self, text: &str, width: u32, height: u32) -> MaskImage;
}

/// Draws text with the 8x8 pixel basic latin bitmap font, never anti aliased.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct BitmapFontRasterizer {
    pub wrap_width: usize,
    pub margin: u32,
    pub line_spacing: u32,
}

impl Default for BitmapFontRasterizer {
    fn default() -> Self {
        Self {
            wrap_width: DEFAULT_WRAP_WIDTH,
            margin: DEFAULT_MARGIN,
            line_spacing: DEFAULT_LINE_SPACING,
        }
    }
}

impl BitmapFontRasterizer {
    /// the lines `text` is drawn as
    pub fn wrap(&self, text: &str) -> Vec<String> {
        textwrap::wrap(text, self.wrap_width.max(1))
            .into_iter()
            .map(|line| line.into_owned())
            .collect()
    }

    fn draw_glyph(&self, mask: &mut MaskImage, c: char, left: u64, top: u64) {
        let Some(glyph) = BASIC_FONTS.get(c) else {
            return;
        };
        for (dy, row) in glyph.iter().enumerate() {
            for dx in 0..GLYPH_WIDTH {
                if row & (1u8 << dx) == 0 {
                    continue;
                }
                let (x, y) = (left + u64::from(dx), top + dy as u64);
                if let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y)) {
                    mask.put_ink(x, y);
                }
            }
        }
    }
}

impl TextRasterizer for BitmapFontRasterizer {
    fn render(&self, text: &str, width: u32, height: u32) -> MaskImage {
        let mut mask = MaskImage::new(width, height);
        let lines = self.wrap(text);
        debug!("rendering {} line(s) into a {width}x{height} mask", lines.len());

        for (line_no, line) in lines.iter().enumerate() {
            let top = u64::from(self.margin) + line_no as u64 * u64::from(self.line_spacing);
            if top >= u64::from(height) {
                break;
            }
            for (column, c) in line.chars().enumerate() {
                let left = u64::from(self.margin) + column as u64 * u64::from(GLYPH_WIDTH);
                if left >= u64::from(width) {
                    break;
                }
                self.draw_glyph(&mut mask, c, left, top);
            }
        }

        mask
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::image::{BACKGROUND, FOREGROUND};

    #[test]
    fn should_render_in_the_requested_dimensions() {
        let mask = BitmapFontRasterizer::default().render("Hello World", 123, 45);
        assert_eq!(mask.dimensions(), (123, 45));
    }

    #[test]
    fn should_only_use_pure_black_and_white() {
        let mask = BitmapFontRasterizer::default().render("'SOFTDES IS AWESOME'", 200, 40);

        assert!(mask
            .as_image()
            .pixels()
            .all(|p| *p == FOREGROUND || *p == BACKGROUND));
        assert!(mask.ink_count() > 0);
    }

    #[test]
    fn should_leave_an_empty_text_without_ink() {
        let mask = BitmapFontRasterizer::default().render("", 50, 50);
        assert_eq!(mask.ink_count(), 0);
    }

    #[test]
    fn should_keep_the_margin_free() {
        let mask = BitmapFontRasterizer::default().render("HHHH", 100, 40);

        for y in 0..40 {
            for x in 0..DEFAULT_MARGIN {
                assert!(!mask.pixel(x, y).bit(), "ink at ({x}, {y})");
            }
        }
        for x in 0..100 {
            for y in 0..DEFAULT_MARGIN {
                assert!(!mask.pixel(x, y).bit(), "ink at ({x}, {y})");
            }
        }
    }

    #[test]
    fn should_wrap_at_60_columns() {
        let rasterizer = BitmapFontRasterizer::default();
        let text = "lorem ipsum dolor sit amet ".repeat(5);

        let lines = rasterizer.wrap(&text);

        assert!(lines.len() > 1);
        assert!(lines.iter().all(|l| l.chars().count() <= DEFAULT_WRAP_WIDTH));
    }

    #[test]
    fn should_draw_wrapped_lines_below_each_other() {
        let rasterizer = BitmapFontRasterizer::default();
        let text = format!("{} {}", "A".repeat(30), "B".repeat(30));
        let mask = rasterizer.render(&text, 600, 40);

        let ink_in_rows = |from: u32, to: u32| {
            (from..to).any(|y| (0..600).any(|x| mask.pixel(x, y).bit()))
        };
        assert!(ink_in_rows(10, 18), "first line is missing");
        assert!(ink_in_rows(20, 28), "second line is missing");
        assert!(!ink_in_rows(30, 40), "there is no third line");
    }

    #[test]
    fn should_clip_text_at_the_image_border() {
        let mask = BitmapFontRasterizer::default().render(&"W".repeat(60), 30, 15);
        assert_eq!(mask.dimensions(), (30, 15));
        assert!(mask.ink_count() > 0);
    }

    #[test]
    fn should_skip_characters_without_glyph() {
        let rasterizer = BitmapFontRasterizer::default();
        let plain = rasterizer.render("A B", 80, 30);
        let unknown = rasterizer.render("A\u{4e2d}B", 80, 30);

        assert_eq!(plain, unknown);
    }
}
