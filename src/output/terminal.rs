//! Terminal output for frames (plain text or ANSI 24-bit color).
//!
//! Renders a [`FrameView`] as vertical bars, one column group per element,
//! followed by value, index and badge rows. Plain mode marks each bar with a
//! glyph per color token so highlights stay distinguishable without color.

use std::fmt::Write as FmtWrite;

use crate::color::ColorToken;
use crate::render::FrameView;

/// Terminal rendering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TerminalMode {
    /// Glyphs only (widest compatibility).
    Plain,
    /// Background-colored cells with ANSI 24-bit color.
    #[default]
    AnsiTrueColor,
}

/// Terminal renderer configuration.
#[derive(Debug, Clone)]
pub struct TerminalRenderer {
    mode: TerminalMode,
    rows: u32,
    cell_width: usize,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    /// Create a renderer with default settings (ANSI, 12 rows).
    #[must_use]
    pub fn new() -> Self {
        Self {
            mode: TerminalMode::default(),
            rows: 12,
            cell_width: 3,
        }
    }

    /// Set the rendering mode.
    #[must_use]
    pub fn mode(mut self, mode: TerminalMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the number of rows a 100% tall bar occupies.
    #[must_use]
    pub fn rows(mut self, rows: u32) -> Self {
        self.rows = rows.max(1);
        self
    }

    /// Set the minimum column width of each bar.
    #[must_use]
    pub fn cell_width(mut self, width: usize) -> Self {
        self.cell_width = width.max(1);
        self
    }

    /// Glyph standing in for a color in plain mode.
    fn glyph(token: ColorToken) -> char {
        match token {
            ColorToken::Green500 => '=',
            ColorToken::Green300 => '~',
            ColorToken::Blue500 | ColorToken::Blue600 => '#',
            ColorToken::Blue400 => '+',
            ColorToken::Yellow400 | ColorToken::Yellow500 => '?',
            ColorToken::Red600 | ColorToken::Red500 | ColorToken::Rose500 => '!',
            ColorToken::Amber500 | ColorToken::Amber600 => 'k',
            ColorToken::Sky500 => 'j',
            ColorToken::Purple400 | ColorToken::Purple500 => 'P',
            ColorToken::Slate400 | ColorToken::Slate200 => '.',
        }
    }

    /// Render a frame to a string.
    #[must_use]
    pub fn render(&self, frame: &FrameView) -> String {
        let widest = frame
            .bars
            .iter()
            .map(|b| b.value.to_string().len().max(b.index.to_string().len()))
            .max()
            .unwrap_or(0);
        let cell = self.cell_width.max(widest);

        let mut output = String::new();
        let _ = writeln!(output, "{}", frame.caption);

        let heights: Vec<u32> = frame
            .bars
            .iter()
            .map(|b| ((b.height_percent / 100.0 * f64::from(self.rows)).round() as u32).max(1))
            .collect();

        for row in (1..=self.rows).rev() {
            for (bar, &height) in frame.bars.iter().zip(&heights) {
                if height >= row {
                    self.push_cell(&mut output, bar.color, cell);
                } else {
                    output.push_str(&" ".repeat(cell));
                }
                output.push(' ');
            }
            output.push('\n');
        }

        let line = |text: &mut String, cells: Vec<String>| {
            for c in cells {
                let _ = write!(text, "{c:^cell$} ");
            }
            text.push('\n');
        };
        line(&mut output, frame.bars.iter().map(|b| b.value.to_string()).collect());
        line(&mut output, frame.bars.iter().map(|b| b.index.to_string()).collect());

        if frame.bars.iter().any(|b| !b.badges.is_empty()) {
            let badges: Vec<String> = frame
                .bars
                .iter()
                .map(|b| {
                    let labels: Vec<_> = b.badges.iter().map(|badge| badge.label).collect();
                    let joined = labels.join(",");
                    joined.chars().take(cell).collect::<String>()
                })
                .collect();
            line(&mut output, badges);
        }

        if let Some(key) = frame.key {
            let _ = writeln!(output, "Key: {key}");
        }

        output
    }

    fn push_cell(&self, output: &mut String, token: ColorToken, cell: usize) {
        match self.mode {
            TerminalMode::Plain => {
                output.push_str(&Self::glyph(token).to_string().repeat(cell));
            }
            TerminalMode::AnsiTrueColor => {
                let c = token.rgba();
                let _ = write!(
                    output,
                    "\x1b[48;2;{};{};{}m{}\x1b[0m",
                    c.r,
                    c.g,
                    c.b,
                    " ".repeat(cell)
                );
            }
        }
    }

    /// Write output directly to stdout.
    pub fn print(&self, frame: &FrameView) {
        print!("{}", self.render(frame));
    }
}
