//! Inner content holder of a progress ring
//!
//! A low-level widget that lays out a single child inside the largest square
//! that fits within a ring's inner edge, centered in the available space.

use iced::advanced::layout::{self, Layout};
use iced::advanced::renderer;
use iced::advanced::widget::{self, Operation, Widget};
use iced::advanced::{Clipboard, Shell, overlay};
use iced::event::Event;
use iced::{Element, Length, Point, Rectangle, Size, Vector, mouse};

use super::progress_ring::RingGeometry;

/// Widget wrapper that sizes its child to the square inscribed in a ring
pub struct Inscribed<'a, Message, Theme = iced::Theme, Renderer = iced::Renderer> {
    content: Element<'a, Message, Theme, Renderer>,
    stroke_width: f32,
}

impl<'a, Message, Theme, Renderer> Inscribed<'a, Message, Theme, Renderer> {
    pub fn new(
        content: impl Into<Element<'a, Message, Theme, Renderer>>,
        stroke_width: f32,
    ) -> Self {
        Self {
            content: content.into(),
            stroke_width,
        }
    }
}

impl<'a, Message, Theme, Renderer> Widget<Message, Theme, Renderer>
    for Inscribed<'a, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    fn size(&self) -> Size<Length> {
        Size::new(Length::Fill, Length::Fill)
    }

    fn layout(
        &mut self,
        tree: &mut widget::Tree,
        renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        let size = limits.resolve(Length::Fill, Length::Fill, Size::ZERO);
        let square = RingGeometry::new(size, self.stroke_width).content_bounds();

        let child_limits = layout::Limits::new(Size::ZERO, square.size());
        let child_node =
            self.content
                .as_widget_mut()
                .layout(&mut tree.children[0], renderer, &child_limits);

        // Center whatever the child settled on inside the square
        let child_size = child_node.size();
        let child_node = child_node.move_to(Point::new(
            square.x + (square.width - child_size.width) / 2.0,
            square.y + (square.height - child_size.height) / 2.0,
        ));

        layout::Node::with_children(size, vec![child_node])
    }

    fn update(
        &mut self,
        tree: &mut widget::Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        renderer: &Renderer,
        clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        viewport: &Rectangle,
    ) {
        if let Some(child_layout) = layout.children().next() {
            self.content.as_widget_mut().update(
                &mut tree.children[0],
                event,
                child_layout,
                cursor,
                renderer,
                clipboard,
                shell,
                viewport,
            );
        }
    }

    fn draw(
        &self,
        tree: &widget::Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        style: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
    ) {
        if let Some(child_layout) = layout.children().next() {
            self.content.as_widget().draw(
                &tree.children[0],
                renderer,
                theme,
                style,
                child_layout,
                cursor,
                viewport,
            );
        }
    }

    fn mouse_interaction(
        &self,
        tree: &widget::Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
        renderer: &Renderer,
    ) -> mouse::Interaction {
        layout
            .children()
            .next()
            .map(|child_layout| {
                self.content.as_widget().mouse_interaction(
                    &tree.children[0],
                    child_layout,
                    cursor,
                    viewport,
                    renderer,
                )
            })
            .unwrap_or_default()
    }

    fn operate(
        &mut self,
        tree: &mut widget::Tree,
        layout: Layout<'_>,
        renderer: &Renderer,
        operation: &mut dyn Operation,
    ) {
        if let Some(child_layout) = layout.children().next() {
            self.content.as_widget_mut().operate(
                &mut tree.children[0],
                child_layout,
                renderer,
                operation,
            );
        }
    }

    fn overlay<'b>(
        &'b mut self,
        tree: &'b mut widget::Tree,
        layout: Layout<'b>,
        renderer: &Renderer,
        viewport: &Rectangle,
        translation: Vector,
    ) -> Option<overlay::Element<'b, Message, Theme, Renderer>> {
        let child_layout = layout.children().next()?;
        self.content.as_widget_mut().overlay(
            &mut tree.children[0],
            child_layout,
            renderer,
            viewport,
            translation,
        )
    }

    fn children(&self) -> Vec<widget::Tree> {
        vec![widget::Tree::new(&self.content)]
    }

    fn diff(&self, tree: &mut widget::Tree) {
        tree.diff_children(std::slice::from_ref(&self.content));
    }
}

impl<'a, Message, Theme, Renderer> From<Inscribed<'a, Message, Theme, Renderer>>
    for Element<'a, Message, Theme, Renderer>
where
    Message: 'a,
    Theme: 'a,
    Renderer: renderer::Renderer + 'a,
{
    fn from(widget: Inscribed<'a, Message, Theme, Renderer>) -> Self {
        Element::new(widget)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use iced::Theme;
    use iced::advanced::widget::operation::focusable;

    use super::*;

    /// Leaf widget that records which calls reached it
    #[derive(Default, Clone)]
    struct Recorder {
        operated: Rc<Cell<bool>>,
        overlaid: Rc<Cell<bool>>,
    }

    impl Widget<(), Theme, ()> for Recorder {
        fn size(&self) -> Size<Length> {
            Size::new(Length::Shrink, Length::Shrink)
        }

        fn layout(
            &mut self,
            _tree: &mut widget::Tree,
            _renderer: &(),
            _limits: &layout::Limits,
        ) -> layout::Node {
            layout::Node::new(Size::new(10.0, 10.0))
        }

        fn draw(
            &self,
            _tree: &widget::Tree,
            _renderer: &mut (),
            _theme: &Theme,
            _style: &renderer::Style,
            _layout: Layout<'_>,
            _cursor: mouse::Cursor,
            _viewport: &Rectangle,
        ) {
        }

        fn operate(
            &mut self,
            _tree: &mut widget::Tree,
            _layout: Layout<'_>,
            _renderer: &(),
            _operation: &mut dyn Operation,
        ) {
            self.operated.set(true);
        }

        fn overlay<'b>(
            &'b mut self,
            _tree: &'b mut widget::Tree,
            _layout: Layout<'b>,
            _renderer: &(),
            _viewport: &Rectangle,
            _translation: Vector,
        ) -> Option<overlay::Element<'b, (), Theme, ()>> {
            self.overlaid.set(true);
            None
        }
    }

    fn inscribed(recorder: &Recorder) -> Element<'static, (), Theme, ()> {
        Inscribed::new(Element::new(recorder.clone()), 10.0).into()
    }

    fn node() -> layout::Node {
        layout::Node::with_children(
            Size::new(100.0, 100.0),
            vec![layout::Node::new(Size::new(10.0, 10.0))],
        )
    }

    #[test]
    fn test_child_tree_is_tracked() {
        let recorder = Recorder::default();
        let element = inscribed(&recorder);
        let tree = widget::Tree::new(&element);
        assert_eq!(tree.children.len(), 1);
    }

    #[test]
    fn test_layout_centers_child_in_content_square() {
        let recorder = Recorder::default();
        let mut element = inscribed(&recorder);
        let mut tree = widget::Tree::new(&element);
        let limits = layout::Limits::new(Size::ZERO, Size::new(100.0, 100.0));

        let node = element.as_widget_mut().layout(&mut tree, &(), &limits);
        let child = node.children()[0].bounds();
        let square = RingGeometry::new(Size::new(100.0, 100.0), 10.0).content_bounds();

        assert!((child.center_x() - square.center_x()).abs() < 1e-4);
        assert!((child.center_y() - square.center_y()).abs() < 1e-4);
    }

    #[test]
    fn test_operations_reach_the_child() {
        let recorder = Recorder::default();
        let mut element = inscribed(&recorder);
        let mut tree = widget::Tree::new(&element);
        let node = node();
        let mut operation = focusable::unfocus::<()>();

        element
            .as_widget_mut()
            .operate(&mut tree, Layout::new(&node), &(), &mut operation);

        assert!(recorder.operated.get());
    }

    #[test]
    fn test_overlay_is_requested_from_the_child() {
        let recorder = Recorder::default();
        let mut element = inscribed(&recorder);
        let mut tree = widget::Tree::new(&element);
        let node = node();
        let viewport = Rectangle::with_size(Size::new(100.0, 100.0));

        let overlay = element.as_widget_mut().overlay(
            &mut tree,
            Layout::new(&node),
            &(),
            &viewport,
            Vector::ZERO,
        );

        assert!(overlay.is_none());
        assert!(recorder.overlaid.get());
    }
}
