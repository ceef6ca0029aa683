//! The overlay listing the items that did not fit in the row.
use iced_core::keyboard;
use iced_core::keyboard::key;
use iced_core::layout;
use iced_core::mouse;
use iced_core::overlay;
use iced_core::renderer;
use iced_core::touch;
use iced_core::widget::{Operation, Tree};
use iced_core::{Clipboard, Element, Event, Layout, Padding, Point, Rectangle, Shell, Size};

use crate::style::Catalog;
use crate::trigger::Status;

/// A dropdown holding the collapsed items of a responsive list.
///
/// It borrows the items and their widget trees from the list, so the same
/// state is kept whether an item sits in the row or in the menu.
pub(crate) struct Menu<'a, 'b, Message, Theme, Renderer>
where
    Theme: Catalog,
{
    pub is_open: &'b mut bool,
    pub items: &'b mut [Element<'a, Message, Theme, Renderer>],
    pub trees: &'b mut [Tree],
    /// The bounds of the menu button, in window coordinates.
    pub trigger: Rectangle,
    pub padding: Padding,
    pub spacing: f32,
    pub z_index: f32,
    pub close_on_content_click: bool,
    pub on_close: Option<&'b Message>,
    pub class: &'b <Theme as Catalog>::Class<'a>,
}

impl<'a, 'b, Message, Theme, Renderer> Menu<'a, 'b, Message, Theme, Renderer>
where
    Message: Clone + 'a,
    Theme: Catalog + 'a,
    Renderer: renderer::Renderer + 'a,
{
    fn close(&mut self, shell: &mut Shell<'_, Message>) {
        if !*self.is_open {
            return;
        }

        *self.is_open = false;

        if let Some(on_close) = self.on_close {
            shell.publish(on_close.clone());
        }

        shell.request_redraw();
    }
}

impl<'a, Message, Theme, Renderer> overlay::Overlay<Message, Theme, Renderer>
    for Menu<'a, '_, Message, Theme, Renderer>
where
    Message: Clone + 'a,
    Theme: Catalog + 'a,
    Renderer: renderer::Renderer + 'a,
{
    fn layout(&mut self, renderer: &Renderer, bounds: Size) -> layout::Node {
        let padding = self.padding;
        let spacing = self.spacing;
        let limits = layout::Limits::new(
            Size::ZERO,
            Size::new(
                (bounds.width - padding.left - padding.right).max(0.0),
                f32::INFINITY,
            ),
        );

        let mut y = padding.top;
        let mut content_width: f32 = 0.0;

        let nodes: Vec<layout::Node> = self
            .items
            .iter_mut()
            .zip(self.trees.iter_mut())
            .enumerate()
            .map(|(index, (item, tree))| {
                if index > 0 {
                    y += spacing;
                }

                let node = item
                    .as_widget_mut()
                    .layout(tree, renderer, &limits)
                    .move_to(Point::new(padding.left, y));

                let size = node.size();
                y += size.height;
                content_width = content_width.max(size.width);

                node
            })
            .collect();

        let size = Size::new(
            content_width + padding.left + padding.right,
            y + padding.bottom,
        );

        layout::Node::with_children(size, nodes).move_to(position(self.trigger, size, bounds))
    }

    fn draw(
        &self,
        renderer: &mut Renderer,
        theme: &Theme,
        style: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
    ) {
        let bounds = layout.bounds();
        let appearance = Catalog::style(theme, self.class, Status::Opened);

        renderer.fill_quad(
            renderer::Quad {
                bounds,
                border: appearance.menu_border,
                shadow: appearance.menu_shadow,
                ..renderer::Quad::default()
            },
            appearance.menu_background,
        );

        for ((item, tree), layout) in self
            .items
            .iter()
            .zip(self.trees.iter())
            .zip(layout.children())
        {
            item.as_widget()
                .draw(tree, renderer, theme, style, layout, cursor, &bounds);
        }
    }

    fn operate(
        &mut self,
        layout: Layout<'_>,
        renderer: &Renderer,
        operation: &mut dyn Operation,
    ) {
        operation.container(None, layout.bounds());
        operation.traverse(&mut |operation| {
            for ((item, tree), layout) in self
                .items
                .iter_mut()
                .zip(self.trees.iter_mut())
                .zip(layout.children())
            {
                item.as_widget_mut()
                    .operate(tree, layout, renderer, operation);
            }
        });
    }

    fn update(
        &mut self,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        renderer: &Renderer,
        clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
    ) {
        let bounds = layout.bounds();

        for ((item, tree), layout) in self
            .items
            .iter_mut()
            .zip(self.trees.iter_mut())
            .zip(layout.children())
        {
            item.as_widget_mut().update(
                tree, event, layout, cursor, renderer, clipboard, shell, &bounds,
            );
        }

        match event {
            Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(key::Named::Escape),
                ..
            }) => {
                self.close(shell);
                shell.capture_event();
            }
            Event::Mouse(mouse::Event::ButtonPressed(_))
            | Event::Touch(touch::Event::FingerPressed { .. }) => {
                // Presses on the menu button land here too, so it can't
                // reopen the menu right after closing it
                if !cursor.is_over(bounds) {
                    self.close(shell);
                }

                shell.capture_event();
            }
            Event::Mouse(mouse::Event::ButtonReleased(_))
            | Event::Touch(touch::Event::FingerLifted { .. }) => {
                if self.close_on_content_click && cursor.is_over(bounds) {
                    self.close(shell);
                }
            }
            _ => {}
        }
    }

    fn mouse_interaction(
        &self,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        renderer: &Renderer,
    ) -> mouse::Interaction {
        let bounds = layout.bounds();

        let interaction = self
            .items
            .iter()
            .zip(self.trees.iter())
            .zip(layout.children())
            .map(|((item, tree), layout)| {
                item.as_widget()
                    .mouse_interaction(tree, layout, cursor, &bounds, renderer)
            })
            .max()
            .unwrap_or_default();

        if cursor.is_over(bounds) {
            interaction.max(mouse::Interaction::Idle)
        } else {
            interaction
        }
    }

    fn index(&self) -> f32 {
        self.z_index
    }
}

/// Places a menu of `size` under the `trigger`, right aligned with it.
///
/// The menu flips above the trigger when it does not fit below, and is
/// kept inside `bounds` horizontally.
fn position(trigger: Rectangle, size: Size, bounds: Size) -> Point {
    let below = trigger.y + trigger.height;
    let fits_below = below + size.height <= bounds.height;
    let fits_above = trigger.y - size.height >= 0.0;

    let y = if fits_below || !fits_above {
        below
    } else {
        trigger.y - size.height
    };

    let x = (trigger.x + trigger.width - size.width)
        .clamp(0.0, (bounds.width - size.width).max(0.0));

    Point::new(x, y)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trigger(x: f32, y: f32) -> Rectangle {
        Rectangle::new(Point::new(x, y), Size::new(32.0, 32.0))
    }

    #[test]
    fn test_opens_below_right_aligned() {
        let point = position(
            trigger(200.0, 10.0),
            Size::new(100.0, 80.0),
            Size::new(800.0, 600.0),
        );

        assert_eq!(point, Point::new(132.0, 42.0));
    }

    #[test]
    fn test_flips_above_when_no_room_below() {
        let point = position(
            trigger(200.0, 550.0),
            Size::new(100.0, 80.0),
            Size::new(800.0, 600.0),
        );

        assert_eq!(point.y, 470.0);
    }

    #[test]
    fn test_stays_below_when_no_room_anywhere() {
        let point = position(
            trigger(200.0, 50.0),
            Size::new(100.0, 700.0),
            Size::new(800.0, 600.0),
        );

        assert_eq!(point.y, 82.0);
    }

    #[test]
    fn test_clamped_horizontally() {
        let point = position(
            trigger(10.0, 0.0),
            Size::new(150.0, 40.0),
            Size::new(800.0, 600.0),
        );
        assert_eq!(point.x, 0.0);

        let point = position(
            trigger(10.0, 0.0),
            Size::new(900.0, 40.0),
            Size::new(800.0, 600.0),
        );
        assert_eq!(point.x, 0.0);
    }
}
