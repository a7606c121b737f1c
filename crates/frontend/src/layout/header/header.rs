use std::time::Duration;

use leptos::prelude::*;
use leptos_router::components::A;
use thaw::{Badge, BadgeAppearance, BadgeColor};

use crate::shared::constants::INQUIRY_BADGE_POLL_MS;
use crate::shared::inquiry_context::use_inquiry_cart;

const NAV_LINKS: [(&str, &str); 4] = [
    ("Home", "/"),
    ("Catalog", "/catalog"),
    ("Products", "/products"),
    ("Contact", "/contact"),
];

#[component]
pub fn Header() -> impl IntoView {
    let cart = use_inquiry_cart();
    let count = cart.count();

    // Storage writes from other tabs are not observable, so poll
    match set_interval_with_handle(
        move || cart.refresh(),
        Duration::from_millis(u64::from(INQUIRY_BADGE_POLL_MS)),
    ) {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(e) => log::warn!("inquiry badge: cannot start polling: {:?}", e),
    }

    view! {
        <header class="navbar">
            <A href="/" attr:class="navbar__brand">"Peroz Corp"</A>
            <nav class="navbar__links">
                {NAV_LINKS
                    .iter()
                    .map(|(label, href)| view! { <A href=*href attr:class="navbar__link">{*label}</A> })
                    .collect_view()}
            </nav>
            <A href="/contact" attr:class="navbar__inquiry" attr:title="Your inquiry">
                "Inquiry"
                <Show when=move || { count.get() > 0 }>
                    <Badge appearance=BadgeAppearance::Filled color=BadgeColor::Brand>
                        {move || count.get().to_string()}
                    </Badge>
                </Show>
            </A>
        </header>
    }
}
