//! SVG output for frames.
//!
//! [`SvgEncoder`] is a small vector builder; [`frame_to_svg`] lays a
//! [`FrameView`] out on it using the frame's own bar widths and gaps.

use std::fmt::Write as FmtWrite;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::color::Rgba;
use crate::error::Result;
use crate::render::{FrameView, LabelSize};

/// SVG encoder for vector output.
#[derive(Debug, Clone)]
pub struct SvgEncoder {
    width: u32,
    height: u32,
    /// Background color (None for transparent)
    background: Option<Rgba>,
    elements: Vec<SvgElement>,
}

/// An SVG element.
///
/// Field names match SVG attribute names.
#[derive(Debug, Clone)]
#[allow(missing_docs)]
pub enum SvgElement {
    /// Rectangle, optionally rounded
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        rx: f32,
        fill: Rgba,
    },
    /// Text
    Text {
        x: f32,
        y: f32,
        text: String,
        font_size: f32,
        fill: Rgba,
        anchor: TextAnchor,
    },
}

/// Text anchor position for SVG text alignment.
#[derive(Debug, Clone, Copy, Default)]
pub enum TextAnchor {
    /// Align text start at position
    #[default]
    Start,
    /// Center text at position
    Middle,
    /// Align text end at position
    End,
}

impl Default for SvgEncoder {
    fn default() -> Self {
        Self::new(800, 600)
    }
}

impl SvgEncoder {
    /// Create a new SVG encoder with given dimensions.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            background: Some(Rgba::WHITE),
            elements: Vec::new(),
        }
    }

    /// Set background color (None for transparent).
    #[must_use]
    pub fn background(mut self, color: Option<Rgba>) -> Self {
        self.background = color;
        self
    }

    /// Add a rectangle with corner radius `rx`.
    #[must_use]
    pub fn rect(mut self, x: f32, y: f32, width: f32, height: f32, rx: f32, fill: Rgba) -> Self {
        self.elements.push(SvgElement::Rect {
            x,
            y,
            width,
            height,
            rx,
            fill,
        });
        self
    }

    /// Add text with anchor.
    #[must_use]
    pub fn text(
        mut self,
        x: f32,
        y: f32,
        text: &str,
        font_size: f32,
        fill: Rgba,
        anchor: TextAnchor,
    ) -> Self {
        self.elements.push(SvgElement::Text {
            x,
            y,
            text: text.to_string(),
            font_size,
            fill,
            anchor,
        });
        self
    }

    /// Number of elements added so far.
    #[must_use]
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Render to SVG string.
    #[must_use]
    pub fn render(&self) -> String {
        let mut svg = String::with_capacity(4096);

        let _ = writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
            self.width, self.height, self.width, self.height
        );

        if let Some(bg) = self.background {
            let _ = writeln!(
                svg,
                r#"  <rect width="100%" height="100%" fill="{}"/>"#,
                rgba_to_css(bg)
            );
        }

        for element in &self.elements {
            let _ = writeln!(svg, "  {}", element_to_svg(element));
        }

        svg.push_str("</svg>\n");
        svg
    }

    /// Write to a file.
    ///
    /// # Errors
    ///
    /// Returns an error if file writing fails.
    pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(self.render().as_bytes())?;
        Ok(())
    }
}

const CAPTION_HEIGHT: f32 = 28.0;
const LABEL_ROW: f32 = 18.0;

/// Lay out `frame` as an SVG whose bar area is `chart_height` px tall.
///
/// Bars are bottom-aligned; indices, badges and the insertion key sit
/// underneath in that order.
#[must_use]
pub fn frame_to_svg(frame: &FrameView, chart_height: u32) -> SvgEncoder {
    let bar_width = frame.dimensions.width as f32;
    let gap = frame.dimensions.gap as f32;
    let n = frame.len().max(1) as f32;
    let width = (n * bar_width + (n - 1.0) * gap).ceil() as u32;
    let chart = chart_height as f32;
    let height = (CAPTION_HEIGHT + chart + 3.0 * LABEL_ROW).ceil() as u32;

    let label = frame.theme.index_label();
    let mut svg = SvgEncoder::new(width, height)
        .background(Some(frame.theme.background()))
        .text(
            width as f32 / 2.0,
            CAPTION_HEIGHT - 10.0,
            &frame.caption,
            14.0,
            label,
            TextAnchor::Middle,
        );

    let baseline = CAPTION_HEIGHT + chart;
    for bar in &frame.bars {
        let x = bar.index as f32 * (bar_width + gap);
        let h = (bar.height_percent as f32 / 100.0 * chart).max(1.0);
        let center = x + bar_width / 2.0;
        let font = match bar.label_size {
            LabelSize::Small => 10.0,
            LabelSize::Regular => 12.0,
        };

        svg = svg
            .rect(x, baseline - h, bar_width, h, 4.0, bar.color.rgba())
            .text(
                center,
                baseline - h + font + 2.0,
                &bar.value.to_string(),
                font,
                bar.color.rgba().contrasting_text(),
                TextAnchor::Middle,
            )
            .text(
                center,
                baseline + LABEL_ROW - 4.0,
                &bar.index.to_string(),
                font,
                label,
                TextAnchor::Middle,
            );

        // stacked badges share the row, left to right
        let slot = bar_width / bar.badges.len().max(1) as f32;
        for (k, badge) in bar.badges.iter().enumerate() {
            let bx = x + k as f32 * slot;
            svg = svg
                .rect(bx, baseline + LABEL_ROW, slot - 1.0, LABEL_ROW - 2.0, 3.0, badge.color.rgba())
                .text(
                    bx + slot / 2.0,
                    baseline + 2.0 * LABEL_ROW - 6.0,
                    badge.label,
                    10.0,
                    badge.color.rgba().contrasting_text(),
                    TextAnchor::Middle,
                );
        }
    }

    if let Some(key) = frame.key {
        svg = svg.text(
            0.0,
            baseline + 3.0 * LABEL_ROW - 4.0,
            &format!("Key: {key}"),
            12.0,
            label,
            TextAnchor::Start,
        );
    }

    svg
}

/// Convert RGBA to CSS color string.
fn rgba_to_css(color: Rgba) -> String {
    if color.a == 255 {
        format!("rgb({},{},{})", color.r, color.g, color.b)
    } else {
        format!(
            "rgba({},{},{},{:.3})",
            color.r,
            color.g,
            color.b,
            f32::from(color.a) / 255.0
        )
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn element_to_svg(element: &SvgElement) -> String {
    match element {
        SvgElement::Rect {
            x,
            y,
            width,
            height,
            rx,
            fill,
        } => format!(
            r#"<rect x="{x}" y="{y}" width="{width}" height="{height}" rx="{rx}" fill="{}"/>"#,
            rgba_to_css(*fill)
        ),
        SvgElement::Text {
            x,
            y,
            text,
            font_size,
            fill,
            anchor,
        } => {
            let anchor_str = match anchor {
                TextAnchor::Start => "start",
                TextAnchor::Middle => "middle",
                TextAnchor::End => "end",
            };
            format!(
                r#"<text x="{x}" y="{y}" font-size="{font_size}" fill="{}" text-anchor="{anchor_str}">{}</text>"#,
                rgba_to_css(*fill),
                escape(text)
            )
        }
    }
}
