use leptos::prelude::*;

pub fn badge_class(variant: Option<&str>) -> &'static str {
    match variant.unwrap_or("neutral") {
        "primary" => "badge badge--primary",
        "success" => "badge badge--success",
        "warning" => "badge badge--warning",
        "error" => "badge badge--error",
        _ => "badge badge--neutral",
    }
}

/// Badge: "primary", "success", "warning", "error" or "neutral" (default)
#[component]
pub fn Badge(
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    #[prop(optional, into)]
    title: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <span
            class=move || badge_class(variant.get().as_deref())
            title=move || title.get().unwrap_or_default()
        >
            {children()}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_class() {
        assert_eq!(badge_class(Some("primary")), "badge badge--primary");
        assert_eq!(badge_class(None), "badge badge--neutral");
        assert_eq!(badge_class(Some("info")), "badge badge--neutral");
    }
}
