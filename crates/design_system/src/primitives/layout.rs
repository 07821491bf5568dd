use super::*;

const GRID_COLUMNS: u8 = 12;

fn column_span(col: u8) -> String {
    format!("span {}", col.clamp(1, GRID_COLUMNS))
}

#[component]
/// Horizontal flex row.
pub fn Row(
    #[prop(default = LayoutAlign::Center)] align: LayoutAlign,
    #[prop(default = LayoutJustify::Start)] justify: LayoutJustify,
    /// Spacing-scale step between children.
    #[prop(optional)]
    gap: usize,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let theme = use_theme();
    let style = format!(
        "display: flex; flex-direction: row; align-items: {}; justify-content: {}; gap: {};",
        align.css(),
        justify.css(),
        theme.spaces.get(gap),
    );

    view! {
        <div
            class=merge_layout_class("ui-row", layout_class)
            style=style
            data-ui-primitive="true"
            data-ui-kind="row"
            data-ui-slot=ui_slot
        >
            {children()}
        </div>
    }
}

#[component]
/// Padding box; spacing props are spacing-scale steps.
pub fn Block(
    #[prop(optional)] padding: usize,
    #[prop(optional)] padding_left: Option<usize>,
    #[prop(optional)] padding_right: Option<usize>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let theme = use_theme();
    let mut style = crate::StyleRecord::new().with("padding", theme.spaces.get(padding));
    if let Some(step) = padding_left {
        style.set("padding-left", theme.spaces.get(step));
    }
    if let Some(step) = padding_right {
        style.set("padding-right", theme.spaces.get(step));
    }

    view! {
        <div
            class=merge_layout_class("ui-block", layout_class)
            style=style.to_css()
            data-ui-primitive="true"
            data-ui-kind="block"
            data-ui-slot=ui_slot
        >
            {children()}
        </div>
    }
}

#[component]
/// Responsive card grid: as many 280px-minimum columns as fit.
pub fn GridLayout(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let theme = use_theme();
    let style = format!(
        "display: grid; grid-template-columns: repeat(auto-fit, minmax(280px, 1fr)); gap: {};",
        theme.spaces.get(4)
    );

    view! {
        <div
            class=merge_layout_class("ui-grid-layout", layout_class)
            style=style
            data-ui-primitive="true"
            data-ui-kind="grid-layout"
            data-ui-slot=ui_slot
        >
            {children()}
        </div>
    }
}

#[component]
/// Twelve-column grid.
pub fn Grid(
    /// Spacing-scale step between cells.
    #[prop(optional)]
    gap: usize,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let theme = use_theme();
    let style = format!(
        "display: grid; grid-template-columns: repeat({GRID_COLUMNS}, 1fr); gap: {};",
        theme.spaces.get(gap)
    );

    view! {
        <div
            class=merge_layout_class("ui-grid", layout_class)
            style=style
            data-ui-primitive="true"
            data-ui-kind="grid"
            data-ui-slot=ui_slot
        >
            {children()}
        </div>
    }
}

#[component]
/// Cell of a [`Grid`] spanning `col` of the twelve columns.
pub fn GridItem(
    #[prop(default = GRID_COLUMNS)] col: u8,
    /// Span on small viewports, applied by the stylesheet through `data-ui-col-s`.
    #[prop(optional)]
    s: Option<u8>,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-grid-item", layout_class)
            style=format!("grid-column: {};", column_span(col))
            data-ui-primitive="true"
            data-ui-kind="grid-item"
            data-ui-col=col
            data-ui-col-s=s
        >
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn column_span_is_clamped_to_the_grid() {
        assert_eq!(column_span(0), "span 1");
        assert_eq!(column_span(6), "span 6");
        assert_eq!(column_span(40), "span 12");
    }
}
