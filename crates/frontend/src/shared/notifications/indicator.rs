use contracts::shared::notifications::UnreadNotifications;
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::poll_policy::PollPolicy;
use crate::shared::api_utils::api_url;
use crate::shared::components::ui::Badge;
use crate::shared::config::config;
use crate::shared::error::FilterError;
use crate::shared::icons::icon;

fn document_has_focus() -> bool {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.has_focus().ok())
        .unwrap_or(false)
}

async fn fetch_unread(url: &str) -> Result<u32, FilterError> {
    let request_error = |message: String| FilterError::Request {
        url: url.to_string(),
        message,
    };
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| request_error(e.to_string()))?;
    if !response.ok() {
        return Err(request_error(format!("status {}", response.status())));
    }
    let unread: UnreadNotifications = response
        .json()
        .await
        .map_err(|e| request_error(e.to_string()))?;
    Ok(unread.count)
}

/// Bell with the unread notification count, polled in the background.
#[component]
pub fn NotificationIndicator() -> impl IntoView {
    let count = RwSignal::new(0u32);
    let settings = config().notifications.clone();

    spawn_local(async move {
        let url = api_url(&settings.endpoint);
        let mut policy = PollPolicy::new(settings.tick_threshold);
        // first check runs straight away
        let mut force = true;
        loop {
            // the indicator was unmounted
            if count.try_get_untracked().is_none() {
                break;
            }
            if policy.tick(document_has_focus(), force) {
                match fetch_unread(&url).await {
                    Ok(unread) => count.set(unread),
                    Err(e) => log::debug!("Notification check failed: {}", e),
                }
            }
            force = false;
            TimeoutFuture::new(settings.interval_ms).await;
        }
    });

    view! {
        <span class="notification-indicator" title="Notifications">
            {icon("bell")}
            {move || {
                let unread = count.get();
                (unread > 0).then(|| view! { <Badge variant="primary" title="Unread notifications">{unread}</Badge> })
            }}
        </span>
    }
}
