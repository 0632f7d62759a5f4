/// Fixed geometry and text placement for the preview card

use image::Rgb;

use crate::fonts::FontRole;

pub const WIDTH: u32 = 1200;
pub const HEIGHT: u32 = 630;

/// Build an RGB color from a `0xRRGGBB` literal.
pub const fn hex_color(rgb: u32) -> Rgb<u8> {
    Rgb([(rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8])
}

pub const BASE_COLOR: Rgb<u8> = hex_color(0x0D1A16);
pub const ACCENT_COLOR: Rgb<u8> = hex_color(0x38FF9C);
pub const SHIELD_COLOR: Rgb<u8> = hex_color(0x0A0F0D);
pub const SUBTITLE_COLOR: Rgb<u8> = hex_color(0xFFFFFF);
pub const DESCRIPTION_COLOR: Rgb<u8> = hex_color(0xCCCCCC);

/// Top-of-card color and the amount each channel grows towards the bottom
const GRADIENT_START: [f64; 3] = [10.0, 15.0, 13.0];
const GRADIENT_DELTA: [f64; 3] = [3.0, 11.0, 9.0];

const BADGE_CENTER: Point = Point { x: 280, y: 315 };
const BADGE_RADIUS: i32 = 100;

/// Shield outline relative to the badge center, clockwise from the top
const SHIELD_OFFSETS: [(i32, i32); 8] = [
    (0, -60),
    (40, -45),
    (40, 20),
    (30, 45),
    (0, 60),
    (-30, 45),
    (-40, 20),
    (-40, -45),
];

pub const TEXT_X: i32 = 420;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    /// Inclusive on all four edges.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x
            && p.y >= self.y
            && p.x <= self.x + self.width as i32
            && p.y <= self.y + self.height as i32
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Circle {
    pub center: Point,
    pub radius: i32,
}

impl Circle {
    pub fn bounding_box(&self) -> Rect {
        let diameter = (self.radius * 2) as u32;
        Rect {
            x: self.center.x - self.radius,
            y: self.center.y - self.radius,
            width: diameter,
            height: diameter,
        }
    }
}

/// One line of the text block: where it goes, which face it uses and its color.
#[derive(Debug, Clone, PartialEq)]
pub struct TextLine {
    pub origin: Point,
    pub role: FontRole,
    pub color: Rgb<u8>,
    pub text: &'static str,
}

/// Color of row `y` in a background of `height` rows.
///
/// Each channel is `start + (y / height) * delta`, truncated and clamped
/// to the u8 range.
pub fn gradient_row_color(y: u32, height: u32) -> Rgb<u8> {
    let t = y as f64 / height as f64;
    let mut out = [0u8; 3];
    for (i, channel) in out.iter_mut().enumerate() {
        let v = GRADIENT_START[i] + t * GRADIENT_DELTA[i];
        *channel = v.trunc().clamp(0.0, 255.0) as u8;
    }
    Rgb(out)
}

pub fn badge() -> Circle {
    Circle {
        center: BADGE_CENTER,
        radius: BADGE_RADIUS,
    }
}

/// The 8-point shield glyph placed around `center`.
pub fn shield_path(center: Point) -> [Point; 8] {
    SHIELD_OFFSETS.map(|(dx, dy)| Point {
        x: center.x + dx,
        y: center.y + dy,
    })
}

/// The text block, in drawing order.
pub fn text_lines() -> [TextLine; 4] {
    [
        TextLine {
            origin: Point { x: TEXT_X, y: 210 },
            role: FontRole::Title,
            color: ACCENT_COLOR,
            text: "CBRN",
        },
        TextLine {
            origin: Point { x: TEXT_X, y: 295 },
            role: FontRole::Subtitle,
            color: SUBTITLE_COLOR,
            text: "Tactical Command System",
        },
        TextLine {
            origin: Point { x: TEXT_X, y: 370 },
            role: FontRole::Description,
            color: DESCRIPTION_COLOR,
            text: "Chemical, Biological,",
        },
        TextLine {
            origin: Point { x: TEXT_X, y: 415 },
            role: FontRole::Description,
            color: DESCRIPTION_COLOR,
            text: "Radiological, Nuclear Response",
        },
    ]
}
