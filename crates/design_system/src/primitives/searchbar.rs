use super::*;

/// Whether the search value has anything to clear.
pub(crate) fn is_clearable(value: &str) -> bool {
    !value.is_empty()
}

/// Notifies the caller of a clear, then focuses whatever element the target resolves to.
///
/// The target is resolved only after `notify` returns: the caller's clear handler may re-render
/// the input, and the element held before the callback can be stale. Returns whether a target
/// was found.
pub(crate) fn clear_then_refocus<E, T>(
    ev: E,
    notify: impl FnOnce(E),
    resolve_target: impl FnOnce() -> Option<T>,
    focus: impl FnOnce(T),
) -> bool {
    notify(ev);
    match resolve_target() {
        Some(target) => {
            focus(target);
            true
        }
        None => false,
    }
}

#[component]
/// Controlled search input with a visually hidden label and an inline clear action.
///
/// The clear action only renders while `value` is non-empty. Activating it calls `on_clear`
/// and then returns focus to the input. The component never edits `value` itself.
pub fn Searchbar(
    /// Form name of the search input.
    #[prop(into)]
    name: String,
    /// Accessible label, visually hidden.
    #[prop(into)]
    label: String,
    /// Accessible name of the clear action.
    #[prop(into)]
    clear_label: String,
    /// Called when the clear action is activated.
    on_clear: Callback<MouseEvent>,
    #[prop(optional, into)] value: MaybeSignal<String>,
    #[prop(default = InputSize::M)] size: InputSize,
    #[prop(optional, into)] placeholder: Option<String>,
    /// Caller-owned handle to the input. An internal handle is used when absent.
    #[prop(optional)]
    node_ref: Option<NodeRef<html::Input>>,
    #[prop(optional)] on_input: Option<Callback<web_sys::Event>>,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    let theme = use_theme();
    let input_ref = node_ref.unwrap_or_else(create_node_ref::<html::Input>);
    let clearable = {
        let value = value.clone();
        Signal::derive(move || value.with(|value| is_clearable(value)))
    };

    let handle_clear = Callback::new(move |ev: MouseEvent| {
        let found = clear_then_refocus(
            ev,
            |ev| on_clear.call(ev),
            || input_ref.get_untracked(),
            |input| {
                if let Err(err) = input.focus() {
                    logging::warn!("searchbar focus restore failed: {err:?}");
                }
            },
        );
        if !found {
            logging::warn!("searchbar input not mounted after clear; focus not restored");
        }
    });

    let search_color = theme.colors.neutral800.clone();
    let start_action = move || {
        view! {
            <span
                data-ui-slot="search-icon"
                style=format!("display: flex; font-size: 0.8rem; color: {search_color};")
            >
                <Icon name=IconName::Search />
            </span>
        }
    };

    let close_color = theme.colors.neutral400.clone();
    let end_action = move || {
        let clear_label = clear_label.clone();
        let close_color = close_color.clone();
        move || {
            clearable
                .get()
                .then(|| {
                    let icon_style =
                        format!("display: flex; font-size: 0.5rem; color: {close_color};");
                    view! {
                        <FieldAction label=clear_label.clone() on_click=handle_clear>
                            <span data-ui-slot="clear-icon" style=icon_style>
                                <Icon name=IconName::Close />
                            </span>
                        </FieldAction>
                    }
                })
        }
    };

    let forward_input = Callback::new(move |ev: web_sys::Event| {
        if let Some(on_input) = on_input.as_ref() {
            on_input.call(ev);
        }
    });

    view! {
        <div
            class=merge_layout_class("ui-searchbar", layout_class)
            style=format!(
                "border-radius: {}; box-shadow: {};",
                theme.border_radius,
                theme.shadows.filter_shadow,
            )
            data-ui-primitive="true"
            data-ui-kind="searchbar"
            data-ui-clearable=move || bool_token(clearable.get())
        >
            <Field name=name>
                <VisuallyHidden>
                    <FieldLabel>{label}</FieldLabel>
                </VisuallyHidden>
                <FieldInput
                    node_ref=input_ref
                    value=value
                    size=size
                    placeholder=placeholder.unwrap_or_default()
                    autocomplete="off"
                    input_type="search"
                    start_action=start_action
                    end_action=end_action
                    on_input=forward_input
                />
            </Field>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn empty_value_has_nothing_to_clear() {
        assert!(!is_clearable(""));
        assert!(is_clearable("cat"));
        assert!(is_clearable(" "));
    }

    #[test]
    fn clear_notifies_once_before_focusing() {
        let events = RefCell::new(Vec::new());

        let found = clear_then_refocus(
            "click",
            |ev| events.borrow_mut().push(format!("clear:{ev}")),
            || Some("input"),
            |target| events.borrow_mut().push(format!("focus:{target}")),
        );

        assert!(found);
        assert_eq!(
            events.into_inner(),
            vec!["clear:click".to_string(), "focus:input".to_string()]
        );
    }

    #[test]
    fn focus_target_is_resolved_after_the_caller_rerenders() {
        let mounted = RefCell::new("input#1");
        let focused = RefCell::new(None);

        clear_then_refocus(
            (),
            |()| *mounted.borrow_mut() = "input#2",
            || Some(*mounted.borrow()),
            |target| *focused.borrow_mut() = Some(target),
        );

        assert_eq!(focused.into_inner(), Some("input#2"));
    }

    #[test]
    fn missing_target_still_notifies_the_caller() {
        let clears = RefCell::new(0);

        let found = clear_then_refocus(
            (),
            |()| *clears.borrow_mut() += 1,
            || None::<()>,
            |_| unreachable!("nothing to focus"),
        );

        assert!(!found);
        assert_eq!(clears.into_inner(), 1);
    }

    #[test]
    fn searchbar_defaults_to_the_medium_input() {
        assert_eq!(InputSize::default(), InputSize::M);
        assert_eq!(InputSize::M.height(), "40px");
        assert_eq!(InputSize::S.height(), "32px");
    }

    #[cfg(feature = "ssr")]
    fn render_searchbar(value: &'static str) -> String {
        crate::render_html(move || {
            view! {
                <Searchbar
                    name="query"
                    label="Search"
                    clear_label="Clear search"
                    on_clear=Callback::new(|_| {})
                    value=value.to_string()
                />
            }
        })
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn clear_action_renders_only_for_a_non_empty_value() {
        let empty = render_searchbar("");
        let filled = render_searchbar("cat");

        assert!(!empty.contains("Clear search"), "{empty}");
        assert!(empty.contains(r#"data-ui-clearable="false""#), "{empty}");
        assert!(filled.contains(r#"aria-label="Clear search""#), "{filled}");
        assert!(filled.contains(r#"data-ui-clearable="true""#), "{filled}");
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn hidden_label_points_at_the_search_input() {
        let html = render_searchbar("cat");

        assert!(html.contains(r#"type="search""#), "{html}");
        assert!(html.contains(r#"name="query""#), "{html}");
        assert!(html.contains(r#"data-ui-kind="visually-hidden""#), "{html}");

        let label_for = html
            .split(r#"for=""#)
            .nth(1)
            .and_then(|rest| rest.split('"').next())
            .expect("label is rendered with a for attribute");
        assert!(label_for.starts_with("field-"), "{label_for}");
        assert!(html.contains(&format!(r#" id="{label_for}""#)), "{html}");
    }
}
