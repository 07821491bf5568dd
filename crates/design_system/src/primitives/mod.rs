//! Shared form, control, typography, and layout primitives.

use leptos::ev::MouseEvent;
use leptos::*;

use crate::style::{bool_token, button_style, merge_layout_class};
use crate::theme::use_theme;
use crate::{Icon, IconName};

mod button;
mod field;
mod layout;
mod searchbar;
mod typography;

pub use button::{Button, ButtonState};
pub use field::{
    expect_field, use_field, Field, FieldAction, FieldContext, FieldError, FieldHint, FieldInput,
    FieldLabel, HintContent,
};
pub use layout::{Block, Grid, GridItem, GridLayout, Row};
pub use searchbar::Searchbar;
pub use typography::{ButtonText, Text, VisuallyHidden};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Button color variants.
pub enum ButtonVariant {
    /// Filled primary action.
    #[default]
    Default,
    /// Tinted primary action.
    Secondary,
    /// Outlined neutral action.
    Tertiary,
    /// Filled confirmation action.
    Success,
    /// Filled destructive action.
    Danger,
    /// Tinted confirmation action.
    SuccessLight,
    /// Tinted destructive action.
    DangerLight,
    /// Borderless neutral action.
    Ghost,
}

impl ButtonVariant {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Secondary => "secondary",
            Self::Tertiary => "tertiary",
            Self::Success => "success",
            Self::Danger => "danger",
            Self::SuccessLight => "success-light",
            Self::DangerLight => "danger-light",
            Self::Ghost => "ghost",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Button sizing tokens.
pub enum ButtonSize {
    /// Compact button with small bold label.
    #[default]
    S,
    /// Large button with the regular button label.
    L,
}

impl ButtonSize {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::S => "S",
            Self::L => "L",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Text-input sizing tokens.
pub enum InputSize {
    /// 32px tall input.
    S,
    /// 40px tall input.
    #[default]
    M,
}

impl InputSize {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::S => "S",
            Self::M => "M",
        }
    }

    pub(crate) fn height(self) -> &'static str {
        match self {
            Self::S => "32px",
            Self::M => "40px",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Pointer pseudo-state of an interactive control.
pub enum Interaction {
    /// No pointer over the control.
    #[default]
    Idle,
    /// Pointer over the control.
    Hover,
    /// Pointer pressed on the control.
    Active,
}

impl Interaction {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Hover => "hover",
            Self::Active => "active",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Semantic text tone resolved against the theme palette.
pub enum TextTone {
    /// Body copy.
    #[default]
    Primary,
    /// Supporting copy such as hints.
    Secondary,
    /// Validation errors.
    Danger,
}

impl TextTone {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Danger => "danger",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Cross-axis alignment for flex rows.
pub enum LayoutAlign {
    /// Stretch/fill alignment.
    Stretch,
    /// Start alignment.
    Start,
    /// Center alignment.
    #[default]
    Center,
    /// End alignment.
    End,
}

impl LayoutAlign {
    pub(crate) fn css(self) -> &'static str {
        match self {
            Self::Stretch => "stretch",
            Self::Start => "flex-start",
            Self::Center => "center",
            Self::End => "flex-end",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Main-axis justification for flex rows.
pub enum LayoutJustify {
    /// Start justification.
    #[default]
    Start,
    /// Center justification.
    Center,
    /// Space between items.
    Between,
    /// End justification.
    End,
}

impl LayoutJustify {
    pub(crate) fn css(self) -> &'static str {
        match self {
            Self::Start => "flex-start",
            Self::Center => "center",
            Self::Between => "space-between",
            Self::End => "flex-end",
        }
    }
}
