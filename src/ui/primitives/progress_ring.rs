//! Circular progress ring primitive
//!
//! Draws the two ring layers of a progress view using iced's Canvas: a full
//! background circle and a foreground arc trimmed to a range of the perimeter.
//!
//! # Design
//!
//! This is a primitive component that implements `canvas::Program` trait.
//! It uses generic Message types and does not depend on application-specific types.

use std::f32::consts::{FRAC_PI_2, TAU};
use std::ops::RangeInclusive;

use iced::widget::canvas::{self, Frame, Geometry, LineCap, Path, Program, Stroke};
use iced::{Color, Point, Radians, Rectangle, Renderer, Size, Theme, mouse};

/// Opacity multiplier of the background ring relative to the progress color
pub const BACKGROUND_OPACITY: f32 = 0.5;

/// Layout of a ring inside a box
///
/// The box is inset by half the stroke on every side, so the outer edge of the
/// stroke touches the box and never clips.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingGeometry {
    pub center: Point,
    /// Radius of the stroke's center line
    pub radius: f32,
    /// Side of the largest square inscribed in the ring's inner edge
    pub content_side: f32,
}

impl RingGeometry {
    pub fn new(size: Size, stroke_width: f32) -> Self {
        let stroke = stroke_width.max(0.0);
        let inset_min = (size.width.min(size.height) - stroke).max(0.0);
        let inner_diameter = (inset_min - stroke).max(0.0);

        Self {
            center: Point::new(size.width / 2.0, size.height / 2.0),
            radius: inset_min / 2.0,
            content_side: (inner_diameter * inner_diameter / 2.0).sqrt(),
        }
    }

    /// Square available to inner content, centered in the ring
    pub fn content_bounds(&self) -> Rectangle {
        let half = self.content_side / 2.0;
        Rectangle {
            x: self.center.x - half,
            y: self.center.y - half,
            width: self.content_side,
            height: self.content_side,
        }
    }
}

/// Start and end angles of a trimmed arc
///
/// Fractions are clamped into `[0, 1]`; the arc starts at the top, is offset by
/// `rotation` and sweeps clockwise. Returns `None` when nothing is traced.
pub fn arc_angles(range: &RangeInclusive<f32>, rotation: Radians) -> Option<(Radians, Radians)> {
    let start = range.start().clamp(0.0, 1.0);
    let end = range.end().clamp(0.0, 1.0);
    if end <= start {
        return None;
    }

    let origin = -FRAC_PI_2 + rotation.0;
    Some((
        Radians(origin + start * TAU),
        Radians(origin + end * TAU),
    ))
}

/// Ring layers of a progress view
#[derive(Debug, Clone)]
pub struct ProgressRing {
    /// Traced share of the perimeter
    pub range: RangeInclusive<f32>,
    pub stroke_width: f32,
    pub color: Color,
    /// Offset of the arc's starting point, clockwise from the top
    pub rotation: Radians,
}

impl ProgressRing {
    pub fn new(range: RangeInclusive<f32>, stroke_width: f32, color: Color) -> Self {
        Self {
            range,
            stroke_width,
            color,
            rotation: Radians(0.0),
        }
    }

    pub fn rotation(mut self, rotation: Radians) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn background_color(&self) -> Color {
        Color {
            a: self.color.a * BACKGROUND_OPACITY,
            ..self.color
        }
    }
}

impl<Message> Program<Message> for ProgressRing {
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

        // Zero or negative strokes leave the ring invisible
        if self.stroke_width <= 0.0 {
            return vec![frame.into_geometry()];
        }

        let geometry = RingGeometry::new(bounds.size(), self.stroke_width);

        let background_circle = Path::circle(geometry.center, geometry.radius);
        frame.stroke(
            &background_circle,
            Stroke::default()
                .with_width(self.stroke_width)
                .with_color(self.background_color()),
        );

        if let Some((start_angle, end_angle)) = arc_angles(&self.range, self.rotation) {
            let progress_arc = Path::new(|builder| {
                builder.arc(canvas::path::Arc {
                    center: geometry.center,
                    radius: geometry.radius,
                    start_angle,
                    end_angle,
                });
            });

            frame.stroke(
                &progress_arc,
                Stroke {
                    line_cap: LineCap::Round,
                    ..Stroke::default()
                }
                .with_width(self.stroke_width)
                .with_color(self.color),
            );
        }

        vec![frame.into_geometry()]
    }
}
