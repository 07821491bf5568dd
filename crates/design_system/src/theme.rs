//! Read-only theme tokens consumed by the style functions.
//!
//! A [`Theme`] is supplied once near the root through [`ThemeProvider`] and read by every
//! primitive with [`use_theme`]. Tokens are keyed by semantic name (`primary600`,
//! `neutral0`, ...) so that light and dark palettes are interchangeable.

use std::rc::Rc;

use leptos::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Highest spacing-scale index the primitives read.
const REQUIRED_SPACE_STEPS: usize = 5;

#[derive(Debug, Error)]
/// Errors raised while loading a theme from configuration.
pub enum ThemeError {
    /// The theme document is not valid JSON or does not match the token layout.
    #[error("theme parse failed: {0}")]
    Parse(#[from] serde_json::Error),
    /// The spacing scale is too short for the primitives that index into it.
    #[error("spacing scale has {found} steps, at least {required} are required")]
    InvalidSpaceScale {
        /// Steps present in the loaded scale.
        found: usize,
        /// Minimum number of steps.
        required: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Semantic color tokens.
#[allow(missing_docs)]
pub struct Palette {
    pub primary100: String,
    pub primary200: String,
    pub primary500: String,
    pub primary600: String,
    pub primary700: String,
    pub success100: String,
    pub success200: String,
    pub success500: String,
    pub success600: String,
    pub success700: String,
    pub danger100: String,
    pub danger200: String,
    pub danger500: String,
    pub danger600: String,
    pub danger700: String,
    pub neutral0: String,
    pub neutral100: String,
    pub neutral150: String,
    pub neutral200: String,
    pub neutral400: String,
    pub neutral500: String,
    pub neutral600: String,
    pub neutral700: String,
    pub neutral800: String,
    pub neutral900: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
/// Ordered spacing scale; index `n` is "space n".
pub struct Spaces(Vec<String>);

impl Spaces {
    /// Builds a spacing scale from its ordered steps.
    pub fn new(steps: Vec<String>) -> Self {
        Self(steps)
    }

    /// Returns the step at `index`, or `0px` when the scale is shorter.
    pub fn get(&self, index: usize) -> &str {
        self.0.get(index).map(String::as_str).unwrap_or("0px")
    }

    /// Number of steps in the scale.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the scale has no steps.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Shadow definitions.
pub struct Shadows {
    /// Soft shadow under filter and search controls.
    pub filter_shadow: String,
    /// Shadow for floating popovers.
    pub popup_shadow: String,
    /// Ring drawn around focused inputs.
    pub focus_ring: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Complete token set consumed by the primitives.
pub struct Theme {
    /// Color tokens.
    pub colors: Palette,
    /// Spacing scale.
    pub spaces: Spaces,
    /// Corner radius shared by controls and surfaces.
    pub border_radius: String,
    /// Shadow tokens.
    pub shadows: Shadows,
}

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

fn default_spaces() -> Spaces {
    Spaces::new(owned(&[
        "0px", "4px", "8px", "12px", "16px", "20px", "24px", "32px", "40px", "48px", "56px",
        "64px",
    ]))
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

impl Theme {
    /// Light palette.
    pub fn light() -> Self {
        Self {
            colors: Palette {
                primary100: "#f0f0ff".into(),
                primary200: "#d9d8ff".into(),
                primary500: "#7b79ff".into(),
                primary600: "#4945ff".into(),
                primary700: "#271fe0".into(),
                success100: "#eafbe7".into(),
                success200: "#c6f0c2".into(),
                success500: "#5cb176".into(),
                success600: "#328048".into(),
                success700: "#2f6846".into(),
                danger100: "#fcecea".into(),
                danger200: "#f5c0b8".into(),
                danger500: "#ee5e52".into(),
                danger600: "#d02b20".into(),
                danger700: "#b72b1a".into(),
                neutral0: "#ffffff".into(),
                neutral100: "#f6f6f9".into(),
                neutral150: "#eaeaef".into(),
                neutral200: "#dcdce4".into(),
                neutral400: "#a5a5ba".into(),
                neutral500: "#8e8ea9".into(),
                neutral600: "#666687".into(),
                neutral700: "#4a4a6a".into(),
                neutral800: "#32324d".into(),
                neutral900: "#212134".into(),
            },
            spaces: default_spaces(),
            border_radius: "4px".into(),
            shadows: Shadows {
                filter_shadow: "0px 1px 4px rgba(33, 33, 52, 0.1)".into(),
                popup_shadow: "0px 2px 15px rgba(33, 33, 52, 0.1)".into(),
                focus_ring: "0 0 0 2px rgba(66, 153, 225, 0.6)".into(),
            },
        }
    }

    /// Dark palette. Neutral tokens are inverted so `neutral0` stays the surface color.
    pub fn dark() -> Self {
        Self {
            colors: Palette {
                primary100: "#181826".into(),
                primary200: "#4a4a6a".into(),
                primary500: "#4945ff".into(),
                primary600: "#7b79ff".into(),
                primary700: "#7b79ff".into(),
                success100: "#1c2d21".into(),
                success200: "#2f6846".into(),
                success500: "#5cb176".into(),
                success600: "#5cb176".into(),
                success700: "#c6f0c2".into(),
                danger100: "#2e1b1b".into(),
                danger200: "#b72b1a".into(),
                danger500: "#ee5e52".into(),
                danger600: "#ee5e52".into(),
                danger700: "#f5c0b8".into(),
                neutral0: "#212134".into(),
                neutral100: "#181826".into(),
                neutral150: "#32324d".into(),
                neutral200: "#4a4a6a".into(),
                neutral400: "#a5a5ba".into(),
                neutral500: "#c0c0cf".into(),
                neutral600: "#a5a5ba".into(),
                neutral700: "#eaeaef".into(),
                neutral800: "#ffffff".into(),
                neutral900: "#ffffff".into(),
            },
            spaces: default_spaces(),
            border_radius: "4px".into(),
            shadows: Shadows {
                filter_shadow: "1px 1px 10px rgba(3, 3, 5, 0.35)".into(),
                popup_shadow: "1px 1px 10px rgba(3, 3, 5, 0.35)".into(),
                focus_ring: "0 0 0 2px rgba(123, 121, 255, 0.6)".into(),
            },
        }
    }

    /// Parses a theme document and checks that the spacing scale is usable.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Parse`] for malformed JSON or missing tokens and
    /// [`ThemeError::InvalidSpaceScale`] when fewer than five spacing steps are defined.
    pub fn from_json(raw: &str) -> Result<Self, ThemeError> {
        let theme: Self = serde_json::from_str(raw)?;
        if theme.spaces.len() < REQUIRED_SPACE_STEPS {
            return Err(ThemeError::InvalidSpaceScale {
                found: theme.spaces.len(),
                required: REQUIRED_SPACE_STEPS,
            });
        }
        Ok(theme)
    }
}

/// Keyframes shared by every loading spinner, emitted once by [`ThemeProvider`].
pub(crate) const GLOBAL_KEYFRAMES: &str =
    "@keyframes ui-button-rotation { from { transform: rotate(0deg); } to { transform: rotate(359deg); } }";

thread_local! {
    static DEFAULT_THEME: Rc<Theme> = Rc::new(Theme::light());
}

fn default_theme() -> Rc<Theme> {
    DEFAULT_THEME.with(Rc::clone)
}

#[component]
/// Provides a [`Theme`] to descendant primitives and emits the shared keyframes.
///
/// Place one provider near the root; loading spinners only animate beneath it.
pub fn ThemeProvider(
    /// Token set handed to descendants.
    #[prop(optional)]
    theme: Option<Theme>,
    children: Children,
) -> impl IntoView {
    let theme = theme.map_or_else(default_theme, Rc::new);
    view! {
        <style data-ui-kind="theme-keyframes">{GLOBAL_KEYFRAMES}</style>
        <Provider value=theme>{children()}</Provider>
    }
}

/// Returns the nearest provided [`Theme`], falling back to [`Theme::light`].
///
/// The theme is shared behind an [`Rc`], so reading it never copies the token set.
pub fn use_theme() -> Rc<Theme> {
    use_context::<Rc<Theme>>().unwrap_or_else(default_theme)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn light_theme_round_trips_through_json_config() {
        let raw = serde_json::to_string(&Theme::light()).expect("serialize");
        assert!(raw.contains("\"borderRadius\""));
        assert!(raw.contains("\"filterShadow\""));

        let parsed = Theme::from_json(&raw).expect("parse");
        assert_eq!(parsed, Theme::light());
    }

    #[test]
    fn short_spacing_scale_is_rejected() {
        let mut theme = Theme::dark();
        theme.spaces = Spaces::new(owned(&["0px", "4px"]));
        let raw = serde_json::to_string(&theme).expect("serialize");

        match Theme::from_json(&raw) {
            Err(ThemeError::InvalidSpaceScale { found, required }) => {
                assert_eq!((found, required), (2, REQUIRED_SPACE_STEPS));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn malformed_document_reports_parse_error() {
        let err = Theme::from_json("{\"colors\": 3}").expect_err("must fail");
        assert!(matches!(err, ThemeError::Parse(_)));
        assert!(err.to_string().starts_with("theme parse failed"));
    }

    #[test]
    fn spacing_lookup_falls_back_past_the_end() {
        let spaces = Theme::light().spaces;
        assert_eq!(spaces.get(2), "8px");
        assert_eq!(spaces.get(4), "16px");
        assert_eq!(spaces.get(99), "0px");
    }

    #[test]
    fn fallback_theme_is_shared_not_copied() {
        let first = default_theme();
        let second = default_theme();
        assert!(Rc::ptr_eq(&first, &second));
        assert_eq!(*first, Theme::light());
    }

    #[test]
    fn keyframes_define_the_spinner_rotation() {
        assert!(GLOBAL_KEYFRAMES.starts_with("@keyframes ui-button-rotation"));
        assert!(GLOBAL_KEYFRAMES.contains("rotate(359deg)"));
    }
}
