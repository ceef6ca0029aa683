//! A horizontal list that collapses the items it cannot fit into a
//! "more actions" menu.
//!
//! [`ResponsiveList`] is meant for adaptive toolbars and action bars. Every
//! item is measured at its intrinsic width; the ones that do not fit in the
//! available width, after keeping some room for the menu button, are moved
//! into a menu opened by that button. Shrinking the window moves items into
//! the menu, growing it brings them back.
//!
//! # Example
//! ```no_run
//! use iced::widget::{button, column, text};
//! use iced::{Element, Fill};
//! use icy_responsive_list::responsive_list;
//!
//! #[derive(Debug, Clone)]
//! enum Message {
//!     Action(&'static str),
//! }
//!
//! fn view(last: &str) -> Element<'_, Message> {
//!     let actions: Vec<Element<'_, Message>> = ["Cut", "Copy", "Paste", "Delete"]
//!         .into_iter()
//!         .map(|action| button(action).on_press(Message::Action(action)).into())
//!         .collect();
//!
//!     column![
//!         responsive_list(actions).spacing(4.0),
//!         text(last).width(Fill),
//!     ]
//!     .into()
//! }
//! ```
//!
//! Resizes can be debounced with [`ResponsiveList::resize_debounce`], and
//! shared props can be loaded from a RON file with [`Settings::load`] when
//! the `serde` feature is enabled.
#![cfg_attr(docsrs, feature(doc_cfg))]
pub mod debounce;
pub mod overflow;
pub mod responsive_list;
pub mod settings;
pub mod style;
pub mod trigger;

mod menu;

pub use iced_core as core;

pub use debounce::Debounce;
pub use overflow::{Partition, overflowing_index};
pub use responsive_list::ResponsiveList;
pub use settings::{LoadError, Settings};
pub use style::{Catalog, Style};
pub use trigger::{ButtonSize, Icon, Status};

use iced_core::Element;

/// Creates a new [`ResponsiveList`] with the given items.
pub fn responsive_list<'a, Message, Theme, Renderer>(
    items: impl IntoIterator<Item = Element<'a, Message, Theme, Renderer>>,
) -> ResponsiveList<'a, Message, Theme, Renderer>
where
    Theme: Catalog,
    Renderer: iced_core::Renderer,
{
    ResponsiveList::with_children(items)
}
