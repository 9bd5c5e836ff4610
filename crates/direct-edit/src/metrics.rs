//! Text measurement for sizing the surface.
//!
//! The surface never lays out glyphs itself. Whenever it needs the natural
//! size of its content (auto-sized dimensions, autosize passes) it asks a
//! [`TextMeasure`] implementation, which hosts with a real text layout engine
//! can provide. [`FixedMetrics`] is the built-in approximation.

use unicode_segmentation::UnicodeSegmentation;

use crate::style::Style;

/// Measures text rendered with a given style.
pub trait TextMeasure: Send + Sync {
    /// Height of one rendered line, in pixels.
    fn line_height(&self, style: &Style) -> f32;

    /// Advance width of a single line of text, in pixels.
    fn text_width(&self, text: &str, style: &Style) -> f32;

    /// Number of rows `line` occupies when wrapped at `max_width`.
    ///
    /// The default wraps at grapheme boundaries. An empty line is one row.
    fn wrapped_rows(&self, line: &str, max_width: Option<f32>, style: &Style) -> usize {
        let Some(max_width) = max_width.filter(|w| *w > 0.0) else {
            return 1;
        };

        let mut rows = 1;
        let mut row_width = 0.0;
        for grapheme in line.graphemes(true) {
            let advance = self.text_width(grapheme, style);
            if row_width > 0.0 && row_width + advance > max_width {
                rows += 1;
                row_width = 0.0;
            }
            row_width += advance;
        }
        rows
    }
}

/// Fixed-advance text metrics.
///
/// Every grapheme advances `font_size * advance_ratio`; a line is
/// `font_size * line_height` tall.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedMetrics {
    /// Grapheme advance as a fraction of the font size.
    pub advance_ratio: f32,
}

impl Default for FixedMetrics {
    fn default() -> Self {
        Self { advance_ratio: 0.6 }
    }
}

impl TextMeasure for FixedMetrics {
    fn line_height(&self, style: &Style) -> f32 {
        style.font_size() * style.line_height()
    }

    fn text_width(&self, text: &str, style: &Style) -> f32 {
        text.graphemes(true).count() as f32 * style.font_size() * self.advance_ratio
    }
}

/// Natural height of `blocks` rendered in a content box.
///
/// `width` is the outer width of the content box (padding included); `None`
/// means the box grows to fit and nothing wraps.
pub fn content_height(
    measure: &dyn TextMeasure,
    blocks: &[String],
    width: Option<f32>,
    style: &Style,
) -> f32 {
    let inner_width = width.map(|w| (w - style.padding_left() - style.padding_right()).max(0.0));
    let rows: usize = if blocks.is_empty() {
        1
    } else {
        blocks
            .iter()
            .map(|block| measure.wrapped_rows(block, inner_width, style))
            .sum()
    };
    rows as f32 * measure.line_height(style) + style.padding_top() + style.padding_bottom()
}

/// Natural width of `blocks`: the widest block plus horizontal padding.
pub fn content_width(measure: &dyn TextMeasure, blocks: &[String], style: &Style) -> f32 {
    let widest = blocks
        .iter()
        .map(|block| measure.text_width(block, style))
        .fold(0.0_f32, f32::max);
    widest + style.padding_left() + style.padding_right()
}
