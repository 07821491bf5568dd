//! Field grouping: one identifier shared by a label, a control, a hint, and an error.
//!
//! [`Field`] builds a [`FieldContext`] once per mounted instance and provides it to its own
//! subtree only. The label/input/hint/error primitives read it back, so callers never thread
//! ids or ARIA wiring by hand. A nested [`Field`] shadows the outer one inside its children
//! and nowhere else.

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::*;

static NEXT_FIELD_ID: AtomicUsize = AtomicUsize::new(1);

fn generate_field_id() -> String {
    format!("field-{}", NEXT_FIELD_ID.fetch_add(1, Ordering::Relaxed))
}

/// Uses the caller's id verbatim, or generates a fresh one.
pub(crate) fn resolve_field_id(explicit: Option<String>) -> String {
    match explicit {
        Some(id) if !id.is_empty() => id,
        _ => generate_field_id(),
    }
}

#[derive(Clone)]
/// Hint shown under a field: plain text or arbitrary markup.
pub enum HintContent {
    /// Plain text hint.
    Text(String),
    /// Markup hint, rendered on demand.
    View(ViewFn),
}

impl HintContent {
    fn render(&self) -> View {
        match self {
            Self::Text(text) => text.clone().into_view(),
            Self::View(view) => view.run(),
        }
    }
}

impl fmt::Debug for HintContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Self::View(_) => f.write_str("View(..)"),
        }
    }
}

impl From<&str> for HintContent {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for HintContent {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<ViewFn> for HintContent {
    fn from(value: ViewFn) -> Self {
        Self::View(value)
    }
}

#[derive(Debug, Clone)]
/// Descriptor shared by every part of a [`Field`].
pub struct FieldContext {
    /// DOM id of the control; stable for the lifetime of the field.
    pub id: String,
    /// Form name of the control.
    pub name: Option<String>,
    /// Current validation error, if any.
    pub error: MaybeSignal<Option<String>>,
    /// Supporting hint.
    pub hint: Option<HintContent>,
}

impl FieldContext {
    /// DOM id of the hint element.
    pub fn hint_id(&self) -> String {
        format!("{}-hint", self.id)
    }

    /// DOM id of the error element.
    pub fn error_id(&self) -> String {
        format!("{}-error", self.id)
    }

    /// Whether a validation error is currently set.
    pub fn has_error(&self) -> bool {
        self.error.with(Option::is_some)
    }

    /// Whether the hint should be rendered. An error replaces the hint.
    pub fn shows_hint(&self) -> bool {
        self.hint.is_some() && !self.has_error()
    }

    /// Value for the control's `aria-describedby`.
    pub fn described_by(&self) -> Option<String> {
        if self.has_error() {
            Some(self.error_id())
        } else if self.hint.is_some() {
            Some(self.hint_id())
        } else {
            None
        }
    }
}

/// Returns the nearest enclosing [`FieldContext`], if any.
pub fn use_field() -> Option<FieldContext> {
    use_context::<FieldContext>()
}

/// Returns the nearest enclosing [`FieldContext`].
///
/// # Panics
///
/// Panics if called outside [`Field`].
pub fn expect_field() -> FieldContext {
    use_context::<FieldContext>()
        .expect("FieldContext not provided; wrap the control in <Field>")
}

#[component]
/// Groups a label, control, hint, and error under one generated or explicit id.
pub fn Field(
    /// Explicit control id. A unique `field-N` id is generated when absent.
    #[prop(optional, into)]
    id: Option<String>,
    #[prop(optional, into)] name: Option<String>,
    #[prop(optional, into)] error: MaybeSignal<Option<String>>,
    #[prop(optional, into)] hint: Option<HintContent>,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let field = FieldContext {
        id: resolve_field_id(id),
        name,
        error,
        hint,
    };
    let invalid = {
        let field = field.clone();
        move || bool_token(field.has_error())
    };

    view! {
        <div
            class=merge_layout_class("ui-field", layout_class)
            data-ui-primitive="true"
            data-ui-kind="field"
            data-ui-field-id=field.id.clone()
            data-ui-invalid=invalid
        >
            <Provider value=field>{children()}</Provider>
        </div>
    }
}

#[component]
/// Label bound to the enclosing field's control.
pub fn FieldLabel(
    /// Appends a decorative required marker.
    #[prop(optional)]
    required: bool,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let field = expect_field();
    let theme = use_theme();

    view! {
        <label
            class=merge_layout_class("ui-field-label", layout_class)
            for=field.id
            data-ui-primitive="true"
            data-ui-kind="field-label"
            style=format!("display: block; color: {};", theme.colors.neutral800)
        >
            <Text small=true bold=true>
                {children()}
            </Text>
            {required
                .then(|| {
                    view! {
                        <span
                            aria-hidden="true"
                            data-ui-slot="required-mark"
                            style=format!("color: {};", theme.colors.danger600)
                        >
                            "*"
                        </span>
                    }
                })}
        </label>
    }
}

#[component]
/// Text input bound to the enclosing field, with optional leading and trailing action slots.
pub fn FieldInput(
    #[prop(default = InputSize::M)] size: InputSize,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(optional)] autocomplete: Option<&'static str>,
    /// Handle to the rendered `<input>`.
    #[prop(optional)]
    node_ref: NodeRef<html::Input>,
    #[prop(optional, into)] value: MaybeSignal<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    /// Slot rendered before the input, e.g. a search glyph.
    #[prop(optional, into)]
    start_action: Option<ViewFn>,
    /// Slot rendered after the input, e.g. a clear action.
    #[prop(optional, into)]
    end_action: Option<ViewFn>,
    #[prop(optional)] on_input: Option<Callback<web_sys::Event>>,
) -> impl IntoView {
    let field = expect_field();
    let theme = use_theme();

    let wrapper_style = {
        let field = field.clone();
        let theme = theme.clone();
        move || {
            let border = if field.has_error() {
                theme.colors.danger600.as_str()
            } else {
                theme.colors.neutral200.as_str()
            };
            format!(
                "display: flex; align-items: center; gap: {}; padding: 0 {}; height: {}; \
                 border: 1px solid {border}; border-radius: {}; background: {};",
                theme.spaces.get(2),
                theme.spaces.get(3),
                size.height(),
                theme.border_radius,
                theme.colors.neutral0,
            )
        }
    };
    let input_style = format!(
        "flex: 1; min-width: 0; border: none; background: transparent; color: {}; font-size: 0.875rem;",
        theme.colors.neutral800
    );
    let aria_invalid = {
        let field = field.clone();
        move || bool_token(field.has_error())
    };
    let described_by = {
        let field = field.clone();
        move || field.described_by()
    };

    view! {
        <div
            class=merge_layout_class("ui-field-input", layout_class)
            style=wrapper_style
            data-ui-primitive="true"
            data-ui-kind="field-input"
            data-ui-size=size.token()
            data-ui-disabled=move || bool_token(disabled.get())
        >
            {start_action.map(|action| view! { <span data-ui-slot="start-action">{action.run()}</span> })}
            <input
                id=field.id.clone()
                name=field.name.clone()
                type=input_type.unwrap_or("text")
                placeholder=placeholder.filter(|placeholder| !placeholder.is_empty())
                autocomplete=autocomplete
                node_ref=node_ref
                style=input_style
                prop:value=move || value.get()
                disabled=move || disabled.get()
                aria-invalid=aria_invalid
                aria-describedby=described_by
                on:input=move |ev| {
                    if let Some(on_input) = on_input.as_ref() {
                        on_input.call(ev);
                    }
                }
            />
            {end_action.map(|action| view! { <span data-ui-slot="end-action">{action.run()}</span> })}
        </div>
    }
}

#[component]
/// Supporting hint for the enclosing field. Hidden while the field shows an error.
pub fn FieldHint(#[prop(optional)] layout_class: Option<&'static str>) -> impl IntoView {
    let field = expect_field();

    move || {
        if !field.shows_hint() {
            return None;
        }
        let hint = field.hint.as_ref()?.render();
        let hint_id = field.hint_id();
        Some(view! {
            <div
                class=merge_layout_class("ui-field-hint", layout_class)
                data-ui-primitive="true"
                data-ui-kind="field-hint"
            >
                <Text id=hint_id small=true tone=TextTone::Secondary>
                    {hint}
                </Text>
            </div>
        })
    }
}

#[component]
/// Validation error for the enclosing field, announced to assistive tech.
pub fn FieldError(#[prop(optional)] layout_class: Option<&'static str>) -> impl IntoView {
    let field = expect_field();

    move || {
        let error = field.error.get()?;
        let error_id = field.error_id();
        Some(view! {
            <div
                class=merge_layout_class("ui-field-error", layout_class)
                role="alert"
                data-ui-primitive="true"
                data-ui-kind="field-error"
            >
                <Text id=error_id small=true tone=TextTone::Danger>
                    {error}
                </Text>
            </div>
        })
    }
}

#[component]
/// Icon-only button placed in a [`FieldInput`] action slot.
pub fn FieldAction(
    /// Accessible name; the glyph itself is hidden from assistive tech.
    #[prop(into)]
    label: String,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=merge_layout_class("ui-field-action", layout_class)
            aria-label=label
            style="display: flex; align-items: center; padding: 0; border: none; background: transparent; cursor: pointer;"
            data-ui-primitive="true"
            data-ui-kind="field-action"
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            <span aria-hidden="true" data-ui-slot="glyph">
                {children()}
            </span>
        </button>
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;

    use super::*;

    fn context(error: Option<&str>, hint: Option<&str>) -> FieldContext {
        FieldContext {
            id: "email".to_string(),
            name: Some("email".to_string()),
            error: MaybeSignal::Static(error.map(str::to_string)),
            hint: hint.map(HintContent::from),
        }
    }

    #[test]
    fn generated_ids_are_distinct_per_mount() {
        let ids = (0..64)
            .map(|_| resolve_field_id(None))
            .collect::<HashSet<_>>();

        assert_eq!(ids.len(), 64);
        assert!(ids.iter().all(|id| id.starts_with("field-")));
    }

    #[test]
    fn explicit_id_is_used_verbatim() {
        assert_eq!(resolve_field_id(Some("billing-email".to_string())), "billing-email");
    }

    #[test]
    fn empty_explicit_id_falls_back_to_generated() {
        assert!(resolve_field_id(Some(String::new())).starts_with("field-"));
    }

    #[test]
    fn described_by_prefers_error_over_hint() {
        assert_eq!(context(None, None).described_by(), None);
        assert_eq!(
            context(None, Some("We never share it")).described_by(),
            Some("email-hint".to_string())
        );
        assert_eq!(
            context(Some("Required"), Some("We never share it")).described_by(),
            Some("email-error".to_string())
        );
    }

    #[test]
    fn hint_is_hidden_while_an_error_is_shown() {
        assert!(context(None, Some("hint")).shows_hint());
        assert!(!context(Some("Required"), Some("hint")).shows_hint());
        assert!(!context(None, None).shows_hint());
    }

    #[test]
    fn derived_ids_extend_the_field_id() {
        let field = context(None, None);
        assert_eq!(field.hint_id(), "email-hint");
        assert_eq!(field.error_id(), "email-error");
    }

    #[test]
    fn text_hints_debug_print_their_content() {
        assert_eq!(
            format!("{:?}", HintContent::from("Up to 20 characters")),
            "Text(\"Up to 20 characters\")"
        );
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn nested_field_does_not_leak_into_later_siblings() {
        let html = crate::render_html(|| {
            view! {
                <Field id="outer" hint="Outer hint">
                    <Field id="inner">
                        <FieldLabel>"Inner"</FieldLabel>
                        <FieldInput />
                    </Field>
                    <FieldLabel>"Outer"</FieldLabel>
                    <FieldInput />
                    <FieldHint />
                </Field>
            }
        });

        assert_eq!(html.matches(r#"for="inner""#).count(), 1, "{html}");
        assert_eq!(html.matches(r#"for="outer""#).count(), 1, "{html}");
        assert_eq!(html.matches(r#" id="inner""#).count(), 1, "{html}");
        assert_eq!(html.matches(r#" id="outer""#).count(), 1, "{html}");
        assert_eq!(
            html.matches(r#"aria-describedby="outer-hint""#).count(),
            1,
            "{html}"
        );
        assert!(html.contains(r#" id="outer-hint""#), "{html}");
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn error_replaces_the_hint_in_the_markup() {
        let html = crate::render_html(|| {
            view! {
                <Field id="email" hint="We never share it" error=Some("Required".to_string())>
                    <FieldInput />
                    <FieldHint />
                    <FieldError />
                </Field>
            }
        });

        assert!(html.contains(r#"aria-invalid="true""#), "{html}");
        assert!(html.contains(r#"aria-describedby="email-error""#), "{html}");
        assert!(html.contains(r#"role="alert""#), "{html}");
        assert!(!html.contains("We never share it"), "{html}");
    }
}
