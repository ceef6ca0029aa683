//! Styling for responsive lists, their menu button and their menu.
use iced_core::{Background, Border, Color, Shadow, Theme, Vector};

use crate::trigger::Status;

/// The appearance of a responsive list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
    /// The [`Background`] behind the row of items, if any.
    pub background: Option<Background>,
    /// The [`Background`] of the menu button, if any.
    pub button_background: Option<Background>,
    /// The [`Border`] of the menu button.
    pub button_border: Border,
    /// The [`Color`] of the dots of the menu button.
    pub icon_color: Color,
    /// The [`Background`] of the menu.
    pub menu_background: Background,
    /// The [`Border`] of the menu.
    pub menu_border: Border,
    /// The [`Shadow`] of the menu.
    pub menu_shadow: Shadow,
}

/// The theme catalog of a [`ResponsiveList`](crate::ResponsiveList).
pub trait Catalog {
    /// The item class of the [`Catalog`].
    type Class<'a>;

    /// The default class produced by the [`Catalog`].
    fn default<'a>() -> Self::Class<'a>;

    /// The [`Style`] of a class with the given status of the menu button.
    fn style(&self, class: &Self::Class<'_>, status: Status) -> Style;
}

/// A styling function for a [`ResponsiveList`](crate::ResponsiveList).
///
/// This is just a boxed closure: `Fn(&Theme, Status) -> Style`.
pub type StyleFn<'a, Theme> = Box<dyn Fn(&Theme, Status) -> Style + 'a>;

impl Catalog for Theme {
    type Class<'a> = StyleFn<'a, Self>;

    fn default<'a>() -> Self::Class<'a> {
        Box::new(default)
    }

    fn style(&self, class: &Self::Class<'_>, status: Status) -> Style {
        class(self, status)
    }
}

/// The default style of a responsive list: a bare row with a flat menu
/// button and a raised menu.
pub fn default(theme: &Theme, status: Status) -> Style {
    let palette = theme.extended_palette();

    let base = Style {
        background: None,
        button_background: None,
        button_border: Border {
            radius: 4.0.into(),
            ..Border::default()
        },
        icon_color: palette.background.base.text,
        menu_background: palette.background.base.color.into(),
        menu_border: Border {
            radius: 4.0.into(),
            width: 1.0,
            color: palette.background.strong.color,
        },
        menu_shadow: Shadow {
            color: Color::BLACK.scale_alpha(0.2),
            offset: Vector::new(0.0, 2.0),
            blur_radius: 8.0,
        },
    };

    match status {
        Status::Active => base,
        Status::Hovered => Style {
            button_background: Some(palette.background.weak.color.into()),
            ..base
        },
        Status::Opened => Style {
            button_background: Some(palette.primary.weak.color.into()),
            icon_color: palette.primary.weak.text,
            ..base
        },
    }
}

/// A style with no menu border or shadow, for lists embedded in surfaces
/// that already draw their own frame.
pub fn borderless(theme: &Theme, status: Status) -> Style {
    Style {
        menu_border: Border {
            width: 0.0,
            ..default(theme, status).menu_border
        },
        menu_shadow: Shadow::default(),
        ..default(theme, status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_highlights_button() {
        let theme = Theme::Light;

        let active = default(&theme, Status::Active);
        let hovered = default(&theme, Status::Hovered);
        let opened = default(&theme, Status::Opened);

        assert!(active.button_background.is_none());
        assert!(hovered.button_background.is_some());
        assert_ne!(hovered.button_background, opened.button_background);
        assert_eq!(active.menu_background, opened.menu_background);
    }

    #[test]
    fn test_borderless() {
        let style = borderless(&Theme::Dark, Status::Active);

        assert_eq!(style.menu_border.width, 0.0);
        assert_eq!(style.menu_shadow, Shadow::default());
    }

    #[test]
    fn test_catalog_uses_class() {
        let theme = Theme::Dark;
        let class: StyleFn<'_, Theme> = Box::new(borderless);

        assert_eq!(
            Catalog::style(&theme, &class, Status::Hovered),
            borderless(&theme, Status::Hovered)
        );
    }
}
