//! Inline glyphs used by the primitives.
//!
//! Glyphs are decorative: they always render `aria-hidden` and inherit `currentColor`, so the
//! surrounding slot decides their fill and `font-size` decides their size.

use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Glyphs available to the primitives.
pub enum IconName {
    /// Circular progress glyph rotated by loading buttons.
    Loading,
    /// Magnifier shown at the start of the search bar.
    Search,
    /// Cross used by clear actions.
    Close,
}

impl IconName {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::Search => "search",
            Self::Close => "close",
        }
    }

    fn path(self) -> &'static str {
        match self {
            Self::Loading => "M12 2a10 10 0 1 0 10 10h-2.5A7.5 7.5 0 1 1 12 4.5V2Z",
            Self::Search => {
                "M10.5 3a7.5 7.5 0 0 1 5.96 12.05l4.25 4.24-1.42 1.42-4.24-4.25A7.5 7.5 0 1 1 10.5 3Zm0 2a5.5 5.5 0 1 0 0 11 5.5 5.5 0 0 0 0-11Z"
            }
            Self::Close => {
                "M5.7 4.3 12 10.58l6.3-6.3 1.4 1.42L13.42 12l6.3 6.3-1.42 1.4L12 13.42l-6.3 6.3-1.4-1.42L10.58 12l-6.3-6.3 1.42-1.4Z"
            }
        }
    }
}

#[component]
/// Decorative inline SVG glyph.
pub fn Icon(name: IconName) -> impl IntoView {
    view! {
        <svg
            viewBox="0 0 24 24"
            width="1em"
            height="1em"
            fill="currentColor"
            aria-hidden="true"
            focusable="false"
            data-ui-primitive="true"
            data-ui-kind="icon"
            data-ui-icon=name.token()
        >
            <path d=name.path()></path>
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_glyph_has_a_distinct_path_and_token() {
        let names = [IconName::Loading, IconName::Search, IconName::Close];
        for (index, name) in names.iter().enumerate() {
            assert!(name.path().starts_with('M'));
            for other in &names[index + 1..] {
                assert_ne!(name.path(), other.path());
                assert_ne!(name.token(), other.token());
            }
        }
    }
}
