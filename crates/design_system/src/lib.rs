//! Presentational component library for form-driven web surfaces.
//!
//! The crate owns reusable Leptos primitives (buttons, fields, the search bar,
//! layout grids, typography), a read-only [`Theme`] consumed through context,
//! and the stable `data-ui-*` DOM contract used by stylesheets and audits.
//! Visual state is computed by pure style functions from declarative props so
//! the same props always render the same markup.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod icon;
mod primitives;
mod style;
mod theme;

pub use icon::{Icon, IconName};
pub use primitives::{
    expect_field, use_field, Block, Button, ButtonSize, ButtonState, ButtonText, ButtonVariant,
    Field, FieldAction, FieldContext, FieldError, FieldHint, FieldInput, FieldLabel, Grid,
    GridItem, GridLayout, HintContent, InputSize, Interaction, LayoutAlign, LayoutJustify, Row,
    Searchbar, Text, TextTone, VisuallyHidden,
};
pub use style::{button_style, ButtonStyle, StyleRecord};
pub use theme::{use_theme, Palette, Shadows, Spaces, Theme, ThemeError, ThemeProvider};

/// Convenience imports for application crates consuming the component set.
pub mod prelude {
    pub use crate::{
        expect_field, use_field, use_theme, Block, Button, ButtonSize, ButtonText, ButtonVariant,
        Field, FieldAction, FieldContext, FieldError, FieldHint, FieldInput, FieldLabel, Grid,
        GridItem, GridLayout, HintContent, Icon, IconName, InputSize, LayoutAlign, LayoutJustify,
        Row, Searchbar, Text, TextTone, Theme, ThemeProvider, VisuallyHidden,
    };
}

/// Renders a view to HTML in a fresh reactive runtime.
#[cfg(all(test, feature = "ssr"))]
pub(crate) fn render_html<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: leptos::IntoView,
{
    leptos::ssr::render_to_string(view).to_string()
}
