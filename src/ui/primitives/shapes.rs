//! Status glyph primitives (checkmark and exclamation mark)
//!
//! Glyphs are described as polylines inside a bounding rectangle so they can be
//! drawn partially, stroke by stroke, while their draw-on animation runs.

use iced::widget::canvas::{Frame, Geometry, LineCap, LineJoin, Path, Program, Stroke};
use iced::{Color, Point, Rectangle, Renderer, Theme, mouse};

/// Default horizontal position of the checkmark's lower vertex
pub const CHECKMARK_BEND_X: f32 = 0.35;
/// Default vertical position of the checkmark's lower vertex
pub const CHECKMARK_BEND_Y: f32 = 0.75;
/// Default share of the drawable height taken by the exclamation bar
pub const EXCLAMATION_BAR_RATIO: f32 = 0.65;

/// A polyline: consecutive points joined by straight segments
pub type Polyline = Vec<Point>;

/// Glyphs shown inside a finished progress ring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Checkmark,
    Exclamation,
}

impl Glyph {
    /// Outline of the glyph with its default proportions
    pub fn strokes(self, bounds: Rectangle, stroke_width: f32) -> Vec<Polyline> {
        match self {
            Glyph::Checkmark => {
                checkmark(bounds, stroke_width, CHECKMARK_BEND_X, CHECKMARK_BEND_Y)
            }
            Glyph::Exclamation => exclamation(bounds, stroke_width, EXCLAMATION_BAR_RATIO),
        }
    }
}

/// Shrink `bounds` so a stroke of `stroke_width` centred on the outline stays inside
fn drawable(bounds: Rectangle, stroke_width: f32) -> Rectangle {
    let inset = (stroke_width.max(0.0) / 2.0)
        .min(bounds.width / 2.0)
        .min(bounds.height / 2.0);

    Rectangle {
        x: bounds.x + inset,
        y: bounds.y + inset,
        width: bounds.width - inset * 2.0,
        height: bounds.height - inset * 2.0,
    }
}

/// Checkmark outline
///
/// Starts at the middle of the left edge, dips to the vertex placed at
/// (`bend_x`, `bend_y`) relative to the drawable area, then rises to the top
/// right corner.
pub fn checkmark(bounds: Rectangle, stroke_width: f32, bend_x: f32, bend_y: f32) -> Vec<Polyline> {
    let area = drawable(bounds, stroke_width);

    vec![vec![
        Point::new(area.x, area.y + area.height * 0.5),
        Point::new(
            area.x + area.width * bend_x,
            area.y + area.height * bend_y,
        ),
        Point::new(area.x + area.width, area.y),
    ]]
}

/// Exclamation mark outline: a vertical bar and a dot below it
pub fn exclamation(bounds: Rectangle, stroke_width: f32, bar_ratio: f32) -> Vec<Polyline> {
    let area = drawable(bounds, stroke_width);
    let center_x = area.x + area.width / 2.0;
    let bottom = area.y + area.height;
    // Near zero-length segment, rendered as a dot by the round cap
    let dot_length = (area.height * 0.02).max(0.5).min(area.height);

    vec![
        vec![
            Point::new(center_x, area.y),
            Point::new(center_x, area.y + area.height * bar_ratio),
        ],
        vec![
            Point::new(center_x, bottom - dot_length),
            Point::new(center_x, bottom),
        ],
    ]
}

fn polyline_length(line: &[Point]) -> f32 {
    line.windows(2).map(|pair| pair[0].distance(pair[1])).sum()
}

/// Total length of every stroke
pub fn total_length(strokes: &[Polyline]) -> f32 {
    strokes.iter().map(|line| polyline_length(line)).sum()
}

/// Keep the first `fraction` of the strokes' combined length
///
/// Strokes are consumed in order, so a glyph trimmed from 0 to 1 draws itself
/// one stroke after another.
pub fn trim(strokes: &[Polyline], fraction: f32) -> Vec<Polyline> {
    let fraction = fraction.clamp(0.0, 1.0);
    if fraction >= 1.0 {
        return strokes.to_vec();
    }

    let mut remaining = total_length(strokes) * fraction;
    let mut trimmed = Vec::new();

    for line in strokes {
        if remaining <= 0.0 {
            break;
        }
        let Some(&first) = line.first() else {
            continue;
        };

        let mut partial = vec![first];
        for pair in line.windows(2) {
            let segment = pair[0].distance(pair[1]);
            if segment <= remaining {
                partial.push(pair[1]);
                remaining -= segment;
            } else {
                let t = remaining / segment;
                partial.push(Point::new(
                    pair[0].x + (pair[1].x - pair[0].x) * t,
                    pair[0].y + (pair[1].y - pair[0].y) * t,
                ));
                remaining = 0.0;
                break;
            }
        }

        if partial.len() > 1 {
            trimmed.push(partial);
        }
    }

    trimmed
}

/// Canvas program drawing a glyph trimmed to its animation progress
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphCanvas {
    pub glyph: Glyph,
    pub color: Color,
    pub stroke_width: f32,
    /// Drawn share of the outline (0.0 - 1.0)
    pub trim: f32,
}

impl<Message> Program<Message> for GlyphCanvas {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let local = Rectangle::with_size(bounds.size());
        let strokes = trim(&self.glyph.strokes(local, self.stroke_width), self.trim);

        let stroke = Stroke {
            line_cap: LineCap::Round,
            line_join: LineJoin::Round,
            ..Stroke::default()
        }
        .with_width(self.stroke_width.max(0.0))
        .with_color(self.color);

        for line in &strokes {
            let path = Path::new(|builder| {
                if let Some((first, rest)) = line.split_first() {
                    builder.move_to(*first);
                    for point in rest {
                        builder.line_to(*point);
                    }
                }
            });
            frame.stroke(&path, stroke);
        }

        vec![frame.into_geometry()]
    }
}
