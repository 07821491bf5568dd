use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Behavioral flags of a [`Button`].
pub struct ButtonState {
    /// Caller-requested disabled state.
    pub disabled: bool,
    /// Pending-action state; shows the spinner and blocks interaction.
    pub loading: bool,
}

impl ButtonState {
    /// A button is non-interactive while disabled or loading.
    pub fn is_disabled(self) -> bool {
        self.disabled || self.loading
    }

    /// Forwards `ev` to `forward` unless the button is non-interactive.
    ///
    /// Returns whether the event was forwarded.
    pub(crate) fn dispatch_click<E>(self, ev: E, forward: impl FnOnce(E)) -> bool {
        if self.is_disabled() {
            return false;
        }
        forward(ev);
        true
    }
}

#[component]
/// Action button whose appearance and behavior derive entirely from its props.
///
/// While `disabled` or `loading` the button exposes `aria-disabled="true"`, carries the native
/// `disabled` attribute, and never calls `on_click`. Loading swaps the leading icon for a
/// continuously rotating spinner; its keyframes come from the enclosing [`crate::ThemeProvider`].
pub fn Button(
    /// Visible text. Must not be empty.
    #[prop(into)]
    label: String,
    #[prop(default = ButtonVariant::Default)] variant: ButtonVariant,
    #[prop(default = ButtonSize::S)] size: ButtonSize,
    #[prop(optional)] full_width: bool,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] loading: MaybeSignal<bool>,
    #[prop(optional)] start_icon: Option<IconName>,
    #[prop(optional)] end_icon: Option<IconName>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] title: Option<String>,
    /// Native button type; `"button"` unless the control submits a form.
    #[prop(optional)]
    button_type: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
) -> impl IntoView {
    debug_assert!(!label.is_empty(), "Button label must not be empty");

    let theme = use_theme();
    let interaction = create_rw_signal(Interaction::Idle);
    let state = move || ButtonState {
        disabled: disabled.get(),
        loading: loading.get(),
    };
    let style = Signal::derive(move || {
        button_style(
            &theme,
            variant,
            size,
            interaction.get(),
            state().is_disabled(),
            full_width,
        )
    });
    let icon_color = move || format!("display: flex; color: {};", style.get().icon_fill);
    let text_color = Signal::derive(move || style.get().text_color);

    let leading = move || {
        if loading.get() {
            Some(view! {
                <span aria-hidden="true" data-ui-slot="start-icon" style="padding-right: 8px;">
                    <span
                        data-ui-slot="spinner"
                        style=move || format!("{} animation: ui-button-rotation 2s infinite linear;", icon_color())
                    >
                        <Icon name=IconName::Loading />
                    </span>
                </span>
            }
            .into_view())
        } else {
            start_icon.map(|icon| {
                view! {
                    <span aria-hidden="true" data-ui-slot="start-icon" style="padding-right: 8px;">
                        <span style=icon_color>
                            <Icon name=icon />
                        </span>
                    </span>
                }
                .into_view()
            })
        }
    };

    let text = match size {
        ButtonSize::S => view! {
            <Text small=true bold=true color=text_color>
                {label}
            </Text>
        }
        .into_view(),
        ButtonSize::L => view! { <ButtonText color=text_color>{label}</ButtonText> }.into_view(),
    };

    view! {
        <button
            type=button_type.unwrap_or("button")
            class=merge_layout_class("ui-button", layout_class)
            id=id
            title=title
            style=move || style.get().container.to_css()
            aria-disabled=move || bool_token(state().is_disabled())
            disabled=move || state().is_disabled()
            data-ui-primitive="true"
            data-ui-kind="button"
            data-ui-slot=ui_slot
            data-ui-variant=variant.token()
            data-ui-size=size.token()
            data-ui-state=move || interaction.get().token()
            data-ui-loading=move || bool_token(loading.get())
            data-ui-full-width=bool_token(full_width)
            on:mouseenter=move |_| interaction.set(Interaction::Hover)
            on:mouseleave=move |_| interaction.set(Interaction::Idle)
            on:mousedown=move |_| interaction.set(Interaction::Active)
            on:mouseup=move |_| interaction.set(Interaction::Hover)
            on:click=move |ev| {
                state()
                    .dispatch_click(ev, |ev| {
                        if let Some(on_click) = on_click.as_ref() {
                            on_click.call(ev);
                        }
                    });
            }
        >
            {leading}
            {text}
            {end_icon
                .map(|icon| {
                    view! {
                        <span aria-hidden="true" data-ui-slot="end-icon" style="padding-left: 8px;">
                            <span style=icon_color>
                                <Icon name=icon />
                            </span>
                        </span>
                    }
                })}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use pretty_assertions::assert_eq;

    use super::*;

    fn clicks(state: ButtonState, presses: usize) -> usize {
        let calls = Cell::new(0);
        for _ in 0..presses {
            state.dispatch_click((), |()| calls.set(calls.get() + 1));
        }
        calls.get()
    }

    #[test]
    fn disabled_or_loading_buttons_never_forward_clicks() {
        let blocked = [
            ButtonState {
                disabled: true,
                loading: false,
            },
            ButtonState {
                disabled: false,
                loading: true,
            },
            ButtonState {
                disabled: true,
                loading: true,
            },
        ];

        for state in blocked {
            assert!(state.is_disabled());
            assert_eq!(clicks(state, 3), 0, "{state:?}");
        }
    }

    #[test]
    fn interactive_button_forwards_exactly_one_call_per_click() {
        let state = ButtonState::default();

        assert!(!state.is_disabled());
        assert_eq!(clicks(state, 1), 1);
        assert_eq!(clicks(state, 4), 4);
    }

    #[test]
    fn dispatch_reports_whether_the_event_was_forwarded() {
        let enabled = ButtonState::default();
        let loading = ButtonState {
            disabled: false,
            loading: true,
        };

        assert!(enabled.dispatch_click("save", |_| {}));
        assert!(!loading.dispatch_click("save", |_| unreachable!("click must be gated")));
    }

    #[test]
    fn button_defaults_are_the_filled_small_variant() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Default);
        assert_eq!(ButtonSize::default(), ButtonSize::S);
        assert_eq!(ButtonSize::default().token(), "S");
        assert_eq!(ButtonVariant::DangerLight.token(), "danger-light");
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn enabled_button_renders_its_label_without_blocking() {
        let html = crate::render_html(|| view! { <Button label="Save" /> });

        assert!(html.contains("Save"), "{html}");
        assert!(html.contains(r#"aria-disabled="false""#), "{html}");
        assert!(!html.contains(r#"disabled="""#), "{html}");
        assert!(html.contains("font-size: 0.75rem; font-weight: 600"), "{html}");
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn loading_or_disabled_button_is_blocked_in_the_markup() {
        let loading = crate::render_html(|| view! { <Button label="Save" loading=true /> });
        let disabled = crate::render_html(|| view! { <Button label="Save" disabled=true /> });

        for html in [&loading, &disabled] {
            assert!(html.contains(r#"aria-disabled="true""#), "{html}");
            assert!(html.contains(r#"disabled="""#), "{html}");
        }
        assert!(loading.contains(r#"data-ui-slot="spinner""#), "{loading}");
        assert!(!disabled.contains(r#"data-ui-slot="spinner""#), "{disabled}");
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn spinner_keyframes_are_emitted_once_per_provider() {
        let html = crate::render_html(|| {
            view! {
                <crate::ThemeProvider>
                    <Button label="Save" loading=true />
                    <Button label="Publish" loading=true />
                </crate::ThemeProvider>
            }
        });

        assert_eq!(html.matches("@keyframes ui-button-rotation").count(), 1);
        assert_eq!(html.matches("animation: ui-button-rotation 2s infinite linear").count(), 2);
    }
}
