//! Pure style composition.
//!
//! Primitives never hold style state of their own: they pass their declarative flags and the
//! current [`Theme`] to the functions here and render the resulting [`StyleRecord`] inline.

use crate::primitives::{ButtonSize, ButtonVariant, Interaction};
use crate::theme::Theme;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Ordered CSS declarations. Setting a property twice keeps its first position and the last
/// value, so later layers (hover, disabled) override earlier ones.
pub struct StyleRecord {
    declarations: Vec<(&'static str, String)>,
}

impl StyleRecord {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `property` to `value`, replacing any earlier value.
    pub fn set(&mut self, property: &'static str, value: impl Into<String>) -> &mut Self {
        let value = value.into();
        match self
            .declarations
            .iter_mut()
            .find(|(existing, _)| *existing == property)
        {
            Some((_, slot)) => *slot = value,
            None => self.declarations.push((property, value)),
        }
        self
    }

    /// Builder-style [`StyleRecord::set`].
    pub fn with(mut self, property: &'static str, value: impl Into<String>) -> Self {
        self.set(property, value);
        self
    }

    /// Returns the current value of `property`.
    pub fn get(&self, property: &str) -> Option<&str> {
        self.declarations
            .iter()
            .find(|(existing, _)| *existing == property)
            .map(|(_, value)| value.as_str())
    }

    /// Renders the record as an inline `style` attribute value.
    pub fn to_css(&self) -> String {
        self.declarations
            .iter()
            .map(|(property, value)| format!("{property}: {value};"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Computed appearance of a [`crate::Button`].
pub struct ButtonStyle {
    /// Declarations for the `<button>` element.
    pub container: StyleRecord,
    /// Label color.
    pub text_color: String,
    /// Fill applied to icon glyphs.
    pub icon_fill: String,
}

struct Paint<'a> {
    border: &'a str,
    background: &'a str,
    text: &'a str,
}

impl Paint<'_> {
    fn apply(&self, style: &mut ButtonStyle) {
        style
            .container
            .set("border", format!("1px solid {}", self.border))
            .set("background", self.background);
        style.text_color = self.text.to_string();
        style.icon_fill = self.text.to_string();
    }
}

fn variant_paint(theme: &Theme, variant: ButtonVariant) -> Paint<'_> {
    let colors = &theme.colors;
    match variant {
        ButtonVariant::SuccessLight => Paint {
            border: &colors.success200,
            background: &colors.success100,
            text: &colors.success700,
        },
        ButtonVariant::DangerLight => Paint {
            border: &colors.danger200,
            background: &colors.danger100,
            text: &colors.danger700,
        },
        ButtonVariant::Secondary => Paint {
            border: &colors.primary200,
            background: &colors.primary100,
            text: &colors.primary700,
        },
        ButtonVariant::Tertiary => Paint {
            border: &colors.neutral200,
            background: &colors.neutral0,
            text: &colors.neutral800,
        },
        ButtonVariant::Success => Paint {
            border: &colors.success600,
            background: &colors.success600,
            text: &colors.neutral0,
        },
        ButtonVariant::Danger => Paint {
            border: &colors.danger600,
            background: &colors.danger600,
            text: &colors.neutral0,
        },
        ButtonVariant::Ghost => Paint {
            border: "transparent",
            background: "transparent",
            text: &colors.neutral800,
        },
        ButtonVariant::Default => Paint {
            border: &colors.primary600,
            background: &colors.primary600,
            text: &colors.neutral0,
        },
    }
}

fn hover_paint(theme: &Theme, variant: ButtonVariant, base: &mut ButtonStyle) {
    let colors = &theme.colors;
    match variant {
        ButtonVariant::SuccessLight | ButtonVariant::DangerLight | ButtonVariant::Secondary => {
            base.container.set("background", colors.neutral0.as_str());
        }
        ButtonVariant::Tertiary | ButtonVariant::Ghost => {
            base.container.set("background", colors.neutral100.as_str());
        }
        ButtonVariant::Success => {
            base.container
                .set("border", format!("1px solid {}", colors.success500))
                .set("background", colors.success500.as_str());
        }
        ButtonVariant::Danger => {
            base.container
                .set("border", format!("1px solid {}", colors.danger500))
                .set("background", colors.danger500.as_str());
        }
        ButtonVariant::Default => {
            base.container
                .set("border", format!("1px solid {}", colors.primary500))
                .set("background", colors.primary500.as_str());
        }
    }
}

fn active_paint(theme: &Theme, variant: ButtonVariant, base: &mut ButtonStyle) {
    let colors = &theme.colors;
    match variant {
        ButtonVariant::SuccessLight => {
            base.container
                .set("border", format!("1px solid {}", colors.success600))
                .set("background", colors.neutral0.as_str());
        }
        ButtonVariant::DangerLight => {
            base.container
                .set("border", format!("1px solid {}", colors.danger600))
                .set("background", colors.neutral0.as_str());
        }
        ButtonVariant::Secondary => {
            base.container
                .set("border", format!("1px solid {}", colors.primary700))
                .set("background", colors.primary100.as_str());
            base.text_color = colors.primary700.clone();
            base.icon_fill = colors.primary700.clone();
        }
        ButtonVariant::Tertiary | ButtonVariant::Ghost => {
            base.container.set("background", colors.neutral150.as_str());
        }
        ButtonVariant::Success => {
            base.container
                .set("border", format!("1px solid {}", colors.success700))
                .set("background", colors.success700.as_str());
        }
        ButtonVariant::Danger => {
            base.container
                .set("border", format!("1px solid {}", colors.danger700))
                .set("background", colors.danger700.as_str());
        }
        ButtonVariant::Default => {
            base.container
                .set("border", format!("1px solid {}", colors.primary700))
                .set("background", colors.primary700.as_str());
        }
    }
}

fn disabled_paint(theme: &Theme, base: &mut ButtonStyle) {
    let colors = &theme.colors;
    base.container
        .set("border", format!("1px solid {}", colors.neutral200))
        .set("background", colors.neutral150.as_str())
        .set("cursor", "not-allowed");
    base.text_color = colors.neutral600.clone();
    base.icon_fill = colors.neutral600.clone();
}

/// Computes the appearance of a button from its declarative flags.
///
/// Layers are applied in order: base, variant, pointer interaction, disabled, full width.
/// A disabled button ignores hover and active interaction entirely.
pub fn button_style(
    theme: &Theme,
    variant: ButtonVariant,
    size: ButtonSize,
    interaction: Interaction,
    disabled: bool,
    full_width: bool,
) -> ButtonStyle {
    let vertical = match size {
        ButtonSize::S => theme.spaces.get(2),
        ButtonSize::L => "10px",
    };
    let mut style = ButtonStyle {
        container: StyleRecord::new()
            .with("display", "flex")
            .with("align-items", "center")
            .with("padding", format!("{vertical} {}", theme.spaces.get(4)))
            .with("border-radius", theme.border_radius.as_str())
            .with("cursor", "pointer"),
        text_color: theme.colors.neutral0.clone(),
        icon_fill: theme.colors.neutral0.clone(),
    };

    variant_paint(theme, variant).apply(&mut style);

    if disabled {
        disabled_paint(theme, &mut style);
    } else {
        match interaction {
            Interaction::Idle => {}
            Interaction::Hover => hover_paint(theme, variant, &mut style),
            Interaction::Active => active_paint(theme, variant, &mut style),
        }
    }

    if full_width {
        style
            .container
            .set("display", "inline-flex")
            .set("justify-content", "center")
            .set("align-items", "center")
            .set("width", "100%");
    }

    style
}

/// Appends an optional caller-supplied class to a primitive's base class.
pub(crate) fn merge_layout_class(base: &'static str, layout_class: Option<&'static str>) -> String {
    match layout_class {
        Some(layout_class) if !layout_class.is_empty() => format!("{base} {layout_class}"),
        _ => base.to_string(),
    }
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}
