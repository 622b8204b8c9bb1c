//! Color types and the enumerated palette used by the decorators.
//!
//! Decorators never produce raw pixels. They return a [`ColorToken`], a closed
//! set of palette entries named after the utility classes of the web front end
//! (`bg-green-500` and friends). Each token also carries its sRGB value so that
//! non-browser outputs (terminal, SVG) can paint it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// RGBA color with 8-bit components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(C)]
pub struct Rgba {
    /// Red component (0-255).
    pub r: u8,
    /// Green component (0-255).
    pub g: u8,
    /// Blue component (0-255).
    pub b: u8,
    /// Alpha component (0-255, 255 = fully opaque).
    pub a: u8,
}

impl Rgba {
    /// Opaque black.
    pub const BLACK: Self = Self::new(0, 0, 0, 255);
    /// Opaque white.
    pub const WHITE: Self = Self::new(255, 255, 255, 255);

    /// Create a new RGBA color.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque RGB color (alpha = 255).
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Create an opaque color from a packed `0xRRGGBB` value.
    #[must_use]
    pub const fn from_hex(hex: u32) -> Self {
        Self::rgb((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
    }

    /// Format as `#rrggbb`, ignoring alpha.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Relative luminance approximation (0.0-1.0).
    #[must_use]
    pub fn luma(self) -> f32 {
        (0.299 * f32::from(self.r) + 0.587 * f32::from(self.g) + 0.114 * f32::from(self.b))
            / 255.0
    }

    /// Black or white, whichever reads better on top of `self`.
    #[must_use]
    pub fn contrasting_text(self) -> Self {
        if self.luma() > 0.6 {
            Self::BLACK
        } else {
            Self::WHITE
        }
    }
}

/// Enumerated color token returned by the decorators.
///
/// Serialized as the front end's class name so a state rendered in the
/// browser and one rendered natively agree on the same token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorToken {
    /// Final / sorted position.
    #[serde(rename = "bg-green-500")]
    Green500,
    /// Bubble sort early-stop wash.
    #[serde(rename = "bg-green-300")]
    Green300,
    /// Bubble default and selection's outer index.
    #[serde(rename = "bg-blue-500")]
    Blue500,
    /// Quick sort active subrange.
    #[serde(rename = "bg-blue-400")]
    Blue400,
    /// `i` badge.
    #[serde(rename = "bg-blue-600")]
    Blue600,
    /// Comparison highlight.
    #[serde(rename = "bg-yellow-400")]
    Yellow400,
    /// Selection sort minimum.
    #[serde(rename = "bg-yellow-500")]
    Yellow500,
    /// Bubble sort swap.
    #[serde(rename = "bg-red-600")]
    Red600,
    /// Selection sort swap.
    #[serde(rename = "bg-red-500")]
    Red500,
    /// Shift / swap highlight for insertion and quick sort.
    #[serde(rename = "bg-rose-500")]
    Rose500,
    /// Insertion sort key position.
    #[serde(rename = "bg-amber-500")]
    Amber500,
    /// `j` badge.
    #[serde(rename = "bg-amber-600")]
    Amber600,
    /// Insertion sort comparison element.
    #[serde(rename = "bg-sky-500")]
    Sky500,
    /// `min` badge.
    #[serde(rename = "bg-purple-400")]
    Purple400,
    /// Pivot bar and pivot badge.
    #[serde(rename = "bg-purple-500")]
    Purple500,
    /// Unsorted bar on the dark theme.
    #[serde(rename = "bg-slate-400")]
    Slate400,
    /// Unsorted bar on the light theme.
    #[serde(rename = "bg-slate-200")]
    Slate200,
}

impl ColorToken {
    /// Every token, in declaration order.
    pub const ALL: [Self; 17] = [
        Self::Green500,
        Self::Green300,
        Self::Blue500,
        Self::Blue400,
        Self::Blue600,
        Self::Yellow400,
        Self::Yellow500,
        Self::Red600,
        Self::Red500,
        Self::Rose500,
        Self::Amber500,
        Self::Amber600,
        Self::Sky500,
        Self::Purple400,
        Self::Purple500,
        Self::Slate400,
        Self::Slate200,
    ];

    /// The front end class name for this token.
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Green500 => "bg-green-500",
            Self::Green300 => "bg-green-300",
            Self::Blue500 => "bg-blue-500",
            Self::Blue400 => "bg-blue-400",
            Self::Blue600 => "bg-blue-600",
            Self::Yellow400 => "bg-yellow-400",
            Self::Yellow500 => "bg-yellow-500",
            Self::Red600 => "bg-red-600",
            Self::Red500 => "bg-red-500",
            Self::Rose500 => "bg-rose-500",
            Self::Amber500 => "bg-amber-500",
            Self::Amber600 => "bg-amber-600",
            Self::Sky500 => "bg-sky-500",
            Self::Purple400 => "bg-purple-400",
            Self::Purple500 => "bg-purple-500",
            Self::Slate400 => "bg-slate-400",
            Self::Slate200 => "bg-slate-200",
        }
    }

    /// The sRGB value of this token.
    #[must_use]
    pub const fn rgba(self) -> Rgba {
        match self {
            Self::Green500 => Rgba::from_hex(0x22_c5_5e),
            Self::Green300 => Rgba::from_hex(0x86_ef_ac),
            Self::Blue500 => Rgba::from_hex(0x3b_82_f6),
            Self::Blue400 => Rgba::from_hex(0x60_a5_fa),
            Self::Blue600 => Rgba::from_hex(0x25_63_eb),
            Self::Yellow400 => Rgba::from_hex(0xfa_cc_15),
            Self::Yellow500 => Rgba::from_hex(0xea_b3_08),
            Self::Red600 => Rgba::from_hex(0xdc_26_26),
            Self::Red500 => Rgba::from_hex(0xef_44_44),
            Self::Rose500 => Rgba::from_hex(0xf4_3f_5e),
            Self::Amber500 => Rgba::from_hex(0xf5_9e_0b),
            Self::Amber600 => Rgba::from_hex(0xd9_77_06),
            Self::Sky500 => Rgba::from_hex(0x0e_a5_e9),
            Self::Purple400 => Rgba::from_hex(0xc0_84_fc),
            Self::Purple500 => Rgba::from_hex(0xa8_55_f7),
            Self::Slate400 => Rgba::from_hex(0x94_a3_b8),
            Self::Slate200 => Rgba::from_hex(0xe2_e8_f0),
        }
    }
}

impl fmt::Display for ColorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css_class())
    }
}

impl From<ColorToken> for Rgba {
    fn from(token: ColorToken) -> Self {
        token.rgba()
    }
}
