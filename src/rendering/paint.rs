/// Paint command list for the preview card, back to front

use image::Rgb;

use super::layout::{
    self, Circle, Point, TextLine, ACCENT_COLOR, BASE_COLOR, HEIGHT, SHIELD_COLOR, WIDTH,
};

#[derive(Debug, Clone, PartialEq)]
pub enum PaintCommand {
    /// Flood the whole canvas with one color
    Fill(Rgb<u8>),
    /// One solid horizontal line per row, see `layout::gradient_row_color`
    Gradient { height: u32 },
    FillCircle { circle: Circle, color: Rgb<u8> },
    FillPolygon { points: Vec<Point>, color: Rgb<u8> },
    Text(TextLine),
}

/// Every drawing step of the card. Later commands paint over earlier ones.
pub fn card_commands() -> Vec<PaintCommand> {
    let badge = layout::badge();
    let mut cmds = vec![
        PaintCommand::Fill(BASE_COLOR),
        PaintCommand::Gradient { height: HEIGHT },
        PaintCommand::FillCircle {
            circle: badge,
            color: ACCENT_COLOR,
        },
        PaintCommand::FillPolygon {
            points: layout::shield_path(badge.center).to_vec(),
            color: SHIELD_COLOR,
        },
    ];
    cmds.extend(layout::text_lines().into_iter().map(PaintCommand::Text));
    cmds
}

/// Canvas size the command list is laid out for.
pub fn canvas_size() -> (u32, u32) {
    (WIDTH, HEIGHT)
}
