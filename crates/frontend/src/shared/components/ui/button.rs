use leptos::prelude::*;

/// CSS classes of a button: variant is "primary" (default), "secondary" or "ghost",
/// size is "md" (default) or "sm".
pub fn button_class(variant: Option<&str>, size: Option<&str>, extra: &str) -> String {
    let variant_class = match variant.unwrap_or("primary") {
        "secondary" => "button--secondary",
        "ghost" => "button--ghost",
        _ => "button--primary",
    };
    let mut class = format!("button {}", variant_class);
    if size == Some("sm") {
        class.push_str(" button--small");
    }
    if !extra.is_empty() {
        class.push(' ');
        class.push_str(extra);
    }
    class
}

/// Toolbar and form button
#[component]
pub fn Button(
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    #[prop(optional, into)]
    size: MaybeProp<String>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
    /// Tooltip
    #[prop(optional, into)]
    title: MaybeProp<String>,
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    #[prop(optional)]
    on_click: Option<Callback<leptos::ev::MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let classes = move || {
        button_class(
            variant.get().as_deref(),
            size.get().as_deref(),
            &class.get().unwrap_or_default(),
        )
    };

    view! {
        <button
            type="button"
            class=classes
            title=move || title.get().unwrap_or_default()
            disabled=move || disabled.get().unwrap_or(false)
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}
