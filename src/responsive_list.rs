//! Responsive lists lay items out in a row and collapse the ones that do not
//! fit into a "more actions" menu.
//!
//! # Example
//! ```no_run
//! # pub type Element<'a, Message> = iced::Element<'a, Message>;
//! use iced::widget::button;
//! use icy_responsive_list::ResponsiveList;
//!
//! #[derive(Debug, Clone)]
//! enum Message {
//!     Bold,
//!     Italic,
//!     Underline,
//! }
//!
//! fn view<'a>() -> Element<'a, Message> {
//!     ResponsiveList::new()
//!         .push(button("Bold").on_press(Message::Bold))
//!         .push(button("Italic").on_press(Message::Italic))
//!         .push(button("Underline").on_press(Message::Underline))
//!         .spacing(4.0)
//!         .into()
//! }
//! ```
use iced_core::alignment;
use iced_core::layout;
use iced_core::mouse;
use iced_core::overlay;
use iced_core::renderer;
use iced_core::time::{Duration, Instant};
use iced_core::touch;
use iced_core::widget::tree::{self, Tree};
use iced_core::widget::{Id, Operation};
use iced_core::window;
use iced_core::{
    Clipboard, Element, Event, Layout, Length, Padding, Pixels, Point, Rectangle, Shell, Size,
    Vector, Widget,
};

use crate::debounce::Debounce;
use crate::menu::Menu;
use crate::overflow::{self, Partition};
use crate::settings::Settings;
use crate::style::{Catalog, Style, StyleFn};
use crate::trigger::{self, ButtonSize, Icon, Status};

/// The test id of a responsive list without an explicit one.
pub const DEFAULT_TEST_ID: &str = "responsive-list";

/// A row of items that moves the items it cannot fit into a menu.
///
/// Every item is measured at its intrinsic width. Items are kept in the row
/// until the running width, plus the room reserved for the menu button,
/// exceeds the available width. The remaining items are shown in a menu
/// opened by the menu button placed right after the last visible item.
///
/// Items should not fill horizontally: they are measured against an
/// unbounded width.
pub struct ResponsiveList<'a, Message, Theme, Renderer>
where
    Theme: Catalog,
{
    id: Option<&'static str>,
    test_id: Option<String>,
    items: Vec<Element<'a, Message, Theme, Renderer>>,
    /// Stand-ins measured in place of their item, kept parallel to `items`.
    placeholders: Vec<Option<Element<'a, Message, Theme, Renderer>>>,
    width: Length,
    spacing: f32,
    padding_size: f32,
    align_y: alignment::Vertical,
    menu_button_size: ButtonSize,
    menu_button_icon: Icon,
    menu_button_label: String,
    dialog_z_index: f32,
    menu_padding: Padding,
    menu_spacing: f32,
    resize_debounce: Duration,
    close_on_content_click: bool,
    on_open: Option<Message>,
    on_close: Option<Message>,
    class: <Theme as Catalog>::Class<'a>,
    last_status: Option<Status>,
}

impl<'a, Message, Theme, Renderer> ResponsiveList<'a, Message, Theme, Renderer>
where
    Theme: Catalog,
    Renderer: renderer::Renderer,
{
    /// Creates an empty [`ResponsiveList`].
    pub fn new() -> Self {
        Self::with_children(Vec::new())
    }

    /// Creates a [`ResponsiveList`] with the given items.
    pub fn with_children(
        items: impl IntoIterator<Item = Element<'a, Message, Theme, Renderer>>,
    ) -> Self {
        let settings = Settings::default();
        let resize_debounce = settings.resize_debounce();
        let items: Vec<_> = items.into_iter().collect();

        Self {
            id: None,
            test_id: None,
            placeholders: items.iter().map(|_| None).collect(),
            items,
            width: Length::Fill,
            spacing: settings.spacing,
            padding_size: settings.padding_size,
            align_y: alignment::Vertical::Center,
            menu_button_size: settings.menu_button_size,
            menu_button_icon: settings.menu_button_icon,
            menu_button_label: settings.menu_button_label,
            dialog_z_index: settings.dialog_z_index,
            menu_padding: Padding::new(settings.menu_padding),
            menu_spacing: settings.menu_spacing,
            resize_debounce,
            close_on_content_click: settings.close_on_content_click,
            on_open: None,
            on_close: None,
            class: <Theme as Catalog>::default(),
            last_status: None,
        }
    }

    /// Applies every prop held by the given [`Settings`].
    pub fn with_settings(self, settings: &Settings) -> Self {
        self.padding_size(settings.padding_size)
            .spacing(settings.spacing)
            .menu_button_size(settings.menu_button_size)
            .menu_button_icon(settings.menu_button_icon)
            .menu_button_label(settings.menu_button_label.clone())
            .dialog_z_index(settings.dialog_z_index)
            .menu_padding(settings.menu_padding)
            .menu_spacing(settings.menu_spacing)
            .resize_debounce(settings.resize_debounce())
            .close_on_content_click(settings.close_on_content_click)
    }

    /// Adds an item to the [`ResponsiveList`].
    pub fn push(mut self, item: impl Into<Element<'a, Message, Theme, Renderer>>) -> Self {
        self.items.push(item.into());
        self.placeholders.push(None);
        self
    }

    /// Adds an item whose width is taken from `placeholder` when deciding
    /// which items fit.
    ///
    /// The placeholder is laid out but never drawn. The item itself is what
    /// the row and the menu show.
    pub fn push_with_placeholder(
        mut self,
        item: impl Into<Element<'a, Message, Theme, Renderer>>,
        placeholder: impl Into<Element<'a, Message, Theme, Renderer>>,
    ) -> Self {
        self.items.push(item.into());
        self.placeholders.push(Some(placeholder.into()));
        self
    }

    /// Extends the [`ResponsiveList`] with the given items.
    pub fn extend(
        mut self,
        items: impl IntoIterator<Item = Element<'a, Message, Theme, Renderer>>,
    ) -> Self {
        self.items.extend(items);
        self.placeholders.resize_with(self.items.len(), || None);
        self
    }

    /// Sets the id of the [`ResponsiveList`].
    ///
    /// It names the widget for operations and derives its test id.
    pub fn id(mut self, id: &'static str) -> Self {
        self.id = Some(id);
        self
    }

    /// Overrides the test id of the [`ResponsiveList`].
    pub fn test_id(mut self, test_id: impl Into<String>) -> Self {
        self.test_id = Some(test_id.into());
        self
    }

    /// Sets the width of the [`ResponsiveList`].
    pub fn width(mut self, width: impl Into<Length>) -> Self {
        self.width = width.into();
        self
    }

    /// Sets the horizontal space between items.
    pub fn spacing(mut self, spacing: impl Into<Pixels>) -> Self {
        self.spacing = spacing.into().0;
        self
    }

    /// Sets the room kept free for the menu button when deciding which
    /// items fit.
    pub fn padding_size(mut self, padding_size: impl Into<Pixels>) -> Self {
        self.padding_size = padding_size.into().0;
        self
    }

    /// Sets the vertical alignment of the items in the row.
    pub fn align_y(mut self, align: impl Into<alignment::Vertical>) -> Self {
        self.align_y = align.into();
        self
    }

    /// Sets the [`ButtonSize`] of the menu button.
    pub fn menu_button_size(mut self, size: ButtonSize) -> Self {
        self.menu_button_size = size;
        self
    }

    /// Sets the [`Icon`] of the menu button.
    pub fn menu_button_icon(mut self, icon: Icon) -> Self {
        self.menu_button_icon = icon;
        self
    }

    /// Sets the accessible label of the menu button.
    pub fn menu_button_label(mut self, label: impl Into<String>) -> Self {
        self.menu_button_label = label.into();
        self
    }

    /// Sets the z-index of the menu.
    pub fn dialog_z_index(mut self, z_index: f32) -> Self {
        self.dialog_z_index = z_index;
        self
    }

    /// Sets the [`Padding`] inside the menu.
    pub fn menu_padding(mut self, padding: impl Into<Padding>) -> Self {
        self.menu_padding = padding.into();
        self
    }

    /// Sets the vertical space between items of the menu.
    pub fn menu_spacing(mut self, spacing: impl Into<Pixels>) -> Self {
        self.menu_spacing = spacing.into().0;
        self
    }

    /// Sets how long the available width must stay unchanged before items
    /// are redistributed between the row and the menu.
    ///
    /// A zero duration, the default, redistributes on every layout.
    pub fn resize_debounce(mut self, delay: Duration) -> Self {
        self.resize_debounce = delay;
        self
    }

    /// Sets whether a press inside the menu closes it.
    pub fn close_on_content_click(mut self, close: bool) -> Self {
        self.close_on_content_click = close;
        self
    }

    /// Sets the message produced when the menu opens.
    pub fn on_open(mut self, on_open: Message) -> Self {
        self.on_open = Some(on_open);
        self
    }

    /// Sets the message produced when the menu closes.
    pub fn on_close(mut self, on_close: Message) -> Self {
        self.on_close = Some(on_close);
        self
    }

    /// Sets the style of the [`ResponsiveList`].
    #[must_use]
    pub fn style(mut self, style: impl Fn(&Theme, Status) -> Style + 'a) -> Self
    where
        <Theme as Catalog>::Class<'a>: From<StyleFn<'a, Theme>>,
    {
        self.class = (Box::new(style) as StyleFn<'a, Theme>).into();
        self
    }

    /// Sets the style class of the [`ResponsiveList`].
    #[must_use]
    pub fn class(mut self, class: impl Into<<Theme as Catalog>::Class<'a>>) -> Self {
        self.class = class.into();
        self
    }

    /// The test id of the [`ResponsiveList`].
    ///
    /// An explicit test id wins; otherwise it is derived from the id.
    pub fn get_test_id(&self) -> String {
        match (&self.test_id, self.id) {
            (Some(test_id), _) => test_id.clone(),
            (None, Some(id)) => format!("{DEFAULT_TEST_ID}_{id}"),
            (None, None) => DEFAULT_TEST_ID.to_owned(),
        }
    }

    /// The items followed by the placeholders, in tree order.
    fn widgets(&self) -> impl Iterator<Item = &Element<'a, Message, Theme, Renderer>> {
        self.items.iter().chain(self.placeholders.iter().flatten())
    }

    /// The number of items of the [`ResponsiveList`].
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns whether the [`ResponsiveList`] has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<Message, Theme, Renderer> Default for ResponsiveList<'_, Message, Theme, Renderer>
where
    Theme: Catalog,
    Renderer: renderer::Renderer,
{
    fn default() -> Self {
        Self::new()
    }
}

/// The local state of a [`ResponsiveList`].
#[derive(Debug, Default)]
struct State {
    is_open: bool,
    /// The inputs of the last overflow computation.
    measured: Option<Measurement>,
    index: Option<usize>,
    partition: Partition,
    debounce: Debounce,
}

#[derive(Debug, Clone, PartialEq)]
struct Measurement {
    available: f32,
    widths: Vec<f32>,
    spacing: f32,
    padding_size: f32,
}

impl State {
    /// Updates the overflow index for the given measurement, unless a
    /// resize is still settling.
    fn measure(&mut self, measurement: Measurement, now: Instant) {
        let Some(last) = &self.measured else {
            self.recompute(measurement);
            return;
        };

        let resized = last.available != measurement.available;
        let content_changed = last.widths != measurement.widths
            || last.spacing != measurement.spacing
            || last.padding_size != measurement.padding_size;

        if content_changed || self.debounce.is_immediate() {
            self.recompute(measurement);
        } else if resized {
            let deadline = self.debounce.schedule(now);
            log::trace!("responsive list resized, redistributing at {deadline:?}");

            let settling = Measurement {
                available: measurement.available,
                ..last.clone()
            };

            self.measured = Some(settling);
        } else if self.debounce.poll(now) {
            self.recompute(measurement);
        }
    }

    fn recompute(&mut self, measurement: Measurement) {
        let index = overflow::overflowing_index(
            &measurement.widths,
            measurement.available,
            measurement.spacing,
            measurement.padding_size,
        );

        if index != self.index {
            log::debug!(
                "responsive list overflow index changed from {:?} to {index:?}",
                self.index
            );
        }

        self.index = index;
        self.partition = Partition::new(measurement.widths.len(), index);
        self.measured = Some(measurement);
        self.debounce.cancel();

        if !self.partition.has_menu() {
            self.is_open = false;
        }
    }
}

impl<'a, Message, Theme, Renderer> Widget<Message, Theme, Renderer>
    for ResponsiveList<'a, Message, Theme, Renderer>
where
    Message: Clone + 'a,
    Theme: Catalog + 'a,
    Renderer: renderer::Renderer + 'a,
{
    fn tag(&self) -> tree::Tag {
        tree::Tag::of::<State>()
    }

    fn state(&self) -> tree::State {
        tree::State::new(State::default())
    }

    fn children(&self) -> Vec<Tree> {
        self.widgets().map(Tree::new).collect()
    }

    fn diff(&self, tree: &mut Tree) {
        tree.diff_children(&self.widgets().collect::<Vec<_>>());
    }

    fn size(&self) -> Size<Length> {
        Size {
            width: self.width,
            height: Length::Shrink,
        }
    }

    fn layout(
        &mut self,
        tree: &mut Tree,
        renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        if tree.children.len() != self.widgets().count() {
            log::warn!("ResponsiveList: tree children out of sync in layout(), reinitializing");
            tree.children = self.children();
        }

        let limits = limits.width(self.width);
        let max = limits.max();

        // Every item is measured, including the ones that end up in the menu.
        // Items with a placeholder are measured by the placeholder's width.
        let measure_limits =
            layout::Limits::new(Size::ZERO, Size::new(f32::INFINITY, max.height));

        let (item_trees, placeholder_trees) = tree.children.split_at_mut(self.items.len());
        let mut placeholder_trees = placeholder_trees.iter_mut();

        let mut widths = Vec::with_capacity(self.items.len());
        let mut nodes: Vec<layout::Node> = self
            .items
            .iter_mut()
            .zip(self.placeholders.iter_mut())
            .zip(item_trees)
            .map(|((item, placeholder), tree)| {
                let node = item.as_widget_mut().layout(tree, renderer, &measure_limits);

                let width = match placeholder {
                    Some(placeholder) => {
                        placeholder_trees.next().map_or(node.size().width, |tree| {
                            placeholder
                                .as_widget_mut()
                                .layout(tree, renderer, &measure_limits)
                                .size()
                                .width
                        })
                    }
                    None => node.size().width,
                };

                widths.push(width);
                node
            })
            .collect();

        let state = tree.state.downcast_mut::<State>();
        state.debounce.set_delay(self.resize_debounce);
        state.measure(
            Measurement {
                available: max.width,
                widths,
                spacing: self.spacing,
                padding_size: self.padding_size,
            },
            Instant::now(),
        );

        let partition = Partition::new(nodes.len(), state.index);
        state.partition = partition.clone();
        nodes.truncate(partition.visible_len());

        let button = self.menu_button_size.size();

        let height = nodes
            .iter()
            .map(|node| node.size().height)
            .fold(
                if partition.has_menu() { button.height } else { 0.0 },
                f32::max,
            );

        let align_y = self.align_y;
        let offset = |item_height: f32| match align_y {
            alignment::Vertical::Top => 0.0,
            alignment::Vertical::Center => (height - item_height) / 2.0,
            alignment::Vertical::Bottom => height - item_height,
        };

        let mut x = 0.0;
        let mut content_width = 0.0;

        let mut children: Vec<layout::Node> = nodes
            .into_iter()
            .map(|node| {
                let size = node.size();
                let node = node.move_to(Point::new(x, offset(size.height)));

                content_width = x + size.width;
                x += size.width + self.spacing;

                node
            })
            .collect();

        if partition.has_menu() {
            children.push(
                layout::Node::new(button).move_to(Point::new(x, offset(button.height))),
            );
            content_width = x + button.width;
        }

        let size = limits.resolve(
            self.width,
            Length::Shrink,
            Size::new(content_width, height),
        );

        layout::Node::with_children(size, children)
    }

    fn operate(
        &mut self,
        tree: &mut Tree,
        layout: Layout<'_>,
        renderer: &Renderer,
        operation: &mut dyn Operation,
    ) {
        let id = self.id.map(Id::new);
        let visible = tree.state.downcast_ref::<State>().partition.visible_len();

        operation.container(id.as_ref(), layout.bounds());
        operation.traverse(&mut |operation| {
            self.items
                .iter_mut()
                .zip(tree.children.iter_mut())
                .zip(layout.children())
                .take(visible)
                .for_each(|((item, tree), layout)| {
                    item.as_widget_mut()
                        .operate(tree, layout, renderer, operation);
                });
        });
    }

    fn update(
        &mut self,
        tree: &mut Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        renderer: &Renderer,
        clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        viewport: &Rectangle,
    ) {
        let state = tree.state.downcast_mut::<State>();
        let visible = state.partition.visible_len();

        // A settling resize redistributes items once its deadline passes
        if let Some(deadline) = state.debounce.deadline() {
            match event {
                Event::Window(window::Event::RedrawRequested(now)) if *now >= deadline => {
                    shell.invalidate_layout();
                    shell.request_redraw();
                }
                _ => shell.request_redraw_at(deadline),
            }
        }

        let button_bounds = trigger_bounds(state, layout);
        let is_open = state.is_open;

        for ((item, tree), layout) in self
            .items
            .iter_mut()
            .zip(tree.children.iter_mut())
            .zip(layout.children())
            .take(visible)
        {
            item.as_widget_mut().update(
                tree, event, layout, cursor, renderer, clipboard, shell, viewport,
            );
        }

        if !shell.is_event_captured() {
            match event {
                Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left))
                | Event::Touch(touch::Event::FingerPressed { .. }) => {
                    if !is_open && button_bounds.is_some_and(|bounds| cursor.is_over(bounds)) {
                        let state = tree.state.downcast_mut::<State>();
                        state.is_open = true;

                        log::debug!(
                            "{} ({}): opened with {} items",
                            self.menu_button_label,
                            self.get_test_id(),
                            state.partition.menu.len()
                        );

                        if let Some(on_open) = &self.on_open {
                            shell.publish(on_open.clone());
                        }

                        shell.capture_event();
                        shell.request_redraw();
                    }
                }
                _ => {}
            }
        }

        let state = tree.state.downcast_ref::<State>();
        let status = Status::new(
            state.is_open,
            button_bounds.is_some_and(|bounds| cursor.is_over(bounds)),
        );

        if let Event::Window(window::Event::RedrawRequested(_)) = event {
            self.last_status = Some(status);
        } else if self.last_status.is_some_and(|last| last != status) {
            shell.request_redraw();
        }
    }

    fn mouse_interaction(
        &self,
        tree: &Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
        renderer: &Renderer,
    ) -> mouse::Interaction {
        let state = tree.state.downcast_ref::<State>();

        if trigger_bounds(state, layout).is_some_and(|bounds| cursor.is_over(bounds)) {
            return mouse::Interaction::Pointer;
        }

        self.items
            .iter()
            .zip(&tree.children)
            .zip(layout.children())
            .take(state.partition.visible_len())
            .map(|((item, tree), layout)| {
                item.as_widget()
                    .mouse_interaction(tree, layout, cursor, viewport, renderer)
            })
            .max()
            .unwrap_or_default()
    }

    fn draw(
        &self,
        tree: &Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        style: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
    ) {
        let state = tree.state.downcast_ref::<State>();
        let bounds = layout.bounds();

        let appearance = Catalog::style(
            theme,
            &self.class,
            self.last_status.unwrap_or(Status::Active),
        );

        if let Some(background) = appearance.background {
            renderer.fill_quad(
                renderer::Quad {
                    bounds,
                    ..renderer::Quad::default()
                },
                background,
            );
        }

        for ((item, tree), layout) in self
            .items
            .iter()
            .zip(&tree.children)
            .zip(layout.children())
            .take(state.partition.visible_len())
        {
            item.as_widget()
                .draw(tree, renderer, theme, style, layout, cursor, viewport);
        }

        if let Some(button_bounds) = trigger_bounds(state, layout) {
            trigger::draw(renderer, button_bounds, self.menu_button_icon, &appearance);
        }
    }

    fn overlay<'b>(
        &'b mut self,
        tree: &'b mut Tree,
        layout: Layout<'b>,
        renderer: &Renderer,
        viewport: &Rectangle,
        translation: Vector,
    ) -> Option<overlay::Element<'b, Message, Theme, Renderer>> {
        let state = tree.state.downcast_ref::<State>();
        let visible = state.partition.visible_len();

        if !(state.is_open && state.partition.has_menu()) {
            return overlay::from_children(
                &mut self.items[..visible],
                tree,
                layout,
                renderer,
                viewport,
                translation,
            );
        }

        let trigger = trigger_bounds(state, layout)? + translation;

        let Tree {
            state, children, ..
        } = tree;
        let state = state.downcast_mut::<State>();

        let len = self.items.len();

        let menu = Menu {
            is_open: &mut state.is_open,
            items: &mut self.items[visible..],
            trees: &mut children[visible..len],
            trigger,
            padding: self.menu_padding,
            spacing: self.menu_spacing,
            z_index: self.dialog_z_index,
            close_on_content_click: self.close_on_content_click,
            on_close: self.on_close.as_ref(),
            class: &self.class,
        };

        Some(overlay::Element::new(Box::new(menu)))
    }
}

/// The bounds of the menu button, if the list is showing one.
fn trigger_bounds(state: &State, layout: Layout<'_>) -> Option<Rectangle> {
    if !state.partition.has_menu() {
        return None;
    }

    layout
        .children()
        .nth(state.partition.visible_len())
        .map(|layout| layout.bounds())
}

impl<'a, Message, Theme, Renderer> From<ResponsiveList<'a, Message, Theme, Renderer>>
    for Element<'a, Message, Theme, Renderer>
where
    Message: Clone + 'a,
    Theme: Catalog + 'a,
    Renderer: renderer::Renderer + 'a,
{
    fn from(list: ResponsiveList<'a, Message, Theme, Renderer>) -> Self {
        Self::new(list)
    }
}
