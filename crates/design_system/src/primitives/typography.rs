use super::*;

const VISUALLY_HIDDEN_STYLE: &str = "border: 0; clip: rect(0 0 0 0); height: 1px; margin: -1px; \
     overflow: hidden; padding: 0; position: absolute; white-space: nowrap; width: 1px;";

fn tone_color(theme: &crate::Theme, tone: TextTone) -> String {
    match tone {
        TextTone::Primary => theme.colors.neutral800.clone(),
        TextTone::Secondary => theme.colors.neutral600.clone(),
        TextTone::Danger => theme.colors.danger600.clone(),
    }
}

#[component]
/// Inline text with the shared type scale.
pub fn Text(
    /// Small (12px) instead of body (14px) size.
    #[prop(optional)]
    small: bool,
    #[prop(optional)] bold: bool,
    #[prop(default = TextTone::Primary)] tone: TextTone,
    /// Overrides the tone color, e.g. with a button's computed label color.
    #[prop(optional, into)]
    color: Option<Signal<String>>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let tone_fill = tone_color(&use_theme(), tone);
    let font_size = if small { "0.75rem" } else { "0.875rem" };
    let font_weight = if bold { 600 } else { 400 };
    let style = move || {
        let color = color
            .map(|color| color.get())
            .unwrap_or_else(|| tone_fill.clone());
        format!(
            "color: {color}; font-size: {font_size}; font-weight: {font_weight}; line-height: 1.33;"
        )
    };

    view! {
        <span
            class=merge_layout_class("ui-text", layout_class)
            id=id
            style=style
            data-ui-primitive="true"
            data-ui-kind="text"
            data-ui-tone=tone.token()
            data-ui-small=bool_token(small)
        >
            {children()}
        </span>
    }
}

#[component]
/// Label text used by large buttons.
pub fn ButtonText(
    #[prop(optional, into)] color: Option<Signal<String>>,
    children: Children,
) -> impl IntoView {
    let fallback = use_theme().colors.neutral0.clone();
    let style = move || {
        let color = color
            .map(|color| color.get())
            .unwrap_or_else(|| fallback.clone());
        format!("color: {color}; font-size: 0.875rem; font-weight: 600; line-height: 1.14;")
    };

    view! {
        <span style=style data-ui-primitive="true" data-ui-kind="button-text">
            {children()}
        </span>
    }
}

#[component]
/// Hides content visually while keeping it in the accessibility tree.
pub fn VisuallyHidden(children: Children) -> impl IntoView {
    view! {
        <div style=VISUALLY_HIDDEN_STYLE data-ui-primitive="true" data-ui-kind="visually-hidden">
            {children()}
        </div>
    }
}
