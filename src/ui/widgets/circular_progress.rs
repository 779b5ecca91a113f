//! Circular progress view
//!
//! Three layers stacked in the same box: a half-opacity background ring, the
//! arc trimmed to the traced range, and optional inner content sized to the
//! square inscribed in the ring.

use std::ops::RangeInclusive;

use iced::widget::{Canvas, Stack, container};
use iced::{Color, Element, Length, Radians};

use crate::state::ProgressState;
use crate::ui::primitives::{Inscribed, ProgressRing};
use crate::ui::styles::{Configuration, Style};
use crate::ui::theme;

/// Circular progress indicator over any [`ProgressState`]
pub struct CircularProgress<'a, S, Message> {
    stroke_width: f32,
    state: S,
    range: Option<RangeInclusive<f32>>,
    color: Box<dyn Fn(&S) -> Color + 'a>,
    content: Option<Box<dyn Fn(&S) -> Element<'a, Message> + 'a>>,
    rotation: Radians,
    width: Length,
    height: Length,
}

impl<'a, S, Message> CircularProgress<'a, S, Message>
where
    S: ProgressState + 'a,
    Message: 'a,
{
    /// Creates a progress view tracing `[0, state.fraction()]` in the accent color
    pub fn new(stroke_width: f32, state: S) -> Self {
        Self {
            stroke_width,
            state,
            range: None,
            color: Box::new(|_| theme::ACCENT),
            content: None,
            rotation: Radians(0.0),
            width: Length::Fill,
            height: Length::Fill,
        }
    }

    /// Sets the traced share of the ring, overriding the state's fraction
    pub fn range(mut self, range: RangeInclusive<f32>) -> Self {
        self.range = Some(range);
        self
    }

    /// Sets the ring color as a function of the state
    pub fn color(mut self, color: impl Fn(&S) -> Color + 'a) -> Self {
        self.color = Box::new(color);
        self
    }

    /// Sets the content drawn inside the ring
    pub fn content<E>(mut self, content: impl Fn(&S) -> E + 'a) -> Self
    where
        E: Into<Element<'a, Message>>,
    {
        self.content = Some(Box::new(move |state| content(state).into()));
        self
    }

    /// Rotates the traced arc clockwise
    pub fn rotation(mut self, rotation: Radians) -> Self {
        self.rotation = rotation;
        self
    }

    /// Sets the width
    pub fn width(mut self, width: impl Into<Length>) -> Self {
        self.width = width.into();
        self
    }

    /// Sets the height
    pub fn height(mut self, height: impl Into<Length>) -> Self {
        self.height = height.into();
        self
    }

    /// Replaces this view with the one built by `style`
    ///
    /// The style receives the current stroke width and state; the view's
    /// size is carried over.
    pub fn style(self, style: impl Style<S>) -> Self {
        let Self {
            stroke_width,
            state,
            width,
            height,
            ..
        } = self;

        style
            .make(Configuration {
                stroke_width,
                state,
            })
            .width(width)
            .height(height)
    }

    pub fn stroke_width(&self) -> f32 {
        self.stroke_width
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    /// Traced share of the ring, `[0, state.fraction()]` unless overridden
    pub fn trim_range(&self) -> RangeInclusive<f32> {
        self.range
            .clone()
            .unwrap_or_else(|| 0.0..=self.state.fraction())
    }

    /// Ring color for the current state
    pub fn ring_color(&self) -> Color {
        (self.color)(&self.state)
    }

    pub fn has_content(&self) -> bool {
        self.content.is_some()
    }

    pub fn rotation_angle(&self) -> Radians {
        self.rotation
    }

    fn ring(&self) -> ProgressRing {
        ProgressRing::new(self.trim_range(), self.stroke_width, self.ring_color())
            .rotation(self.rotation)
    }
}

impl<'a, S, Message> From<CircularProgress<'a, S, Message>> for Element<'a, Message>
where
    S: ProgressState + 'a,
    Message: 'a,
{
    fn from(progress: CircularProgress<'a, S, Message>) -> Self {
        let ring: Element<'a, Message> = Canvas::new(progress.ring())
            .width(Length::Fill)
            .height(Length::Fill)
            .into();

        let mut layers = Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(ring);

        if let Some(content) = &progress.content {
            layers = layers.push(Inscribed::new(
                content(&progress.state),
                progress.stroke_width,
            ));
        }

        container(layers)
            .width(progress.width)
            .height(progress.height)
            .into()
    }
}
