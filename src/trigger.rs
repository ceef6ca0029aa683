//! The "more actions" button that opens the overflow menu.
use iced_core::renderer;
use iced_core::{Background, Color, Rectangle, Size};

use crate::style::Style;

/// The default accessible label of the menu button.
pub const DEFAULT_LABEL: &str = "More Actions";

/// The size of the menu button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ButtonSize {
    /// 16 × 16
    Xxs,
    /// 24 × 24
    Xs,
    /// 32 × 32
    #[default]
    Small,
    /// 40 × 40
    Medium,
    /// 48 × 48
    Large,
}

impl ButtonSize {
    /// The side length of the square button, in logical pixels.
    pub fn side(self) -> f32 {
        match self {
            Self::Xxs => 16.0,
            Self::Xs => 24.0,
            Self::Small => 32.0,
            Self::Medium => 40.0,
            Self::Large => 48.0,
        }
    }

    /// The bounds of the square button.
    pub fn size(self) -> Size {
        Size::new(self.side(), self.side())
    }
}

/// The glyph drawn inside the menu button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Icon {
    /// Three dots in a row (⋯).
    #[default]
    DotsHorizontal,
    /// Three dots in a column (⋮).
    DotsVertical,
}

/// The possible status of the menu button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The menu button can be interacted with.
    Active,
    /// The menu button is being hovered.
    Hovered,
    /// The menu is open.
    Opened,
}

impl Status {
    pub(crate) fn new(is_open: bool, is_hovered: bool) -> Self {
        if is_open {
            Self::Opened
        } else if is_hovered {
            Self::Hovered
        } else {
            Self::Active
        }
    }
}

/// Draws the menu button in `bounds`.
pub(crate) fn draw<Renderer>(renderer: &mut Renderer, bounds: Rectangle, icon: Icon, style: &Style)
where
    Renderer: renderer::Renderer,
{
    renderer.fill_quad(
        renderer::Quad {
            bounds,
            border: style.button_border,
            ..renderer::Quad::default()
        },
        style
            .button_background
            .unwrap_or(Background::Color(Color::TRANSPARENT)),
    );

    for dot in dots(bounds, icon) {
        renderer.fill_quad(
            renderer::Quad {
                bounds: dot,
                border: iced_core::Border {
                    radius: (dot.width / 2.0).into(),
                    ..iced_core::Border::default()
                },
                ..renderer::Quad::default()
            },
            style.icon_color,
        );
    }
}

/// The bounds of the three dots of the icon, centered in `bounds`.
fn dots(bounds: Rectangle, icon: Icon) -> [Rectangle; 3] {
    let side = bounds.width.min(bounds.height);
    let diameter = (side / 8.0).max(2.0);
    let step = diameter * 2.0;
    let center = bounds.center();

    let dot = |offset: f32| {
        let (x, y) = match icon {
            Icon::DotsHorizontal => (center.x + offset, center.y),
            Icon::DotsVertical => (center.x, center.y + offset),
        };

        Rectangle {
            x: x - diameter / 2.0,
            y: y - diameter / 2.0,
            width: diameter,
            height: diameter,
        }
    };

    [dot(-step), dot(0.0), dot(step)]
}
