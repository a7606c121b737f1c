use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use super::constants::SEARCH_DEBOUNCE_MS;

/// Text search box that reports its value after a short pause in typing.
///
/// Clearing with the × button reports immediately.
#[component]
pub fn SearchInput(
    /// Current filter value
    #[prop(into)]
    value: Signal<String>,
    /// Receives the debounced value
    #[prop(into)]
    on_change: Callback<String>,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search products...".to_string()
    } else {
        placeholder
    };

    let input_value = RwSignal::new(value.get_untracked());
    let last_reported = StoredValue::new(value.get_untracked());
    let pending = StoredValue::new_local(None::<Timeout>);

    // Follow resets made by the owner (e.g. a route change clearing the query)
    Effect::new(move |_| {
        let external = value.get();
        if last_reported.with_value(|last| *last != external) {
            last_reported.set_value(external.clone());
            input_value.set(external);
        }
    });

    let report = move |text: String| {
        last_reported.set_value(text.clone());
        on_change.run(text);
    };

    let handle_input = move |new_value: String| {
        input_value.set(new_value.clone());

        // Replacing the handle drops (and cancels) the previous timer
        let timeout = Timeout::new(SEARCH_DEBOUNCE_MS, move || report(new_value));
        pending.set_value(Some(timeout));
    };

    let clear = move |_| {
        pending.set_value(None);
        input_value.set(String::new());
        report(String::new());
    };

    view! {
        <div class="search-input">
            <input
                type="search"
                class="search-input__field"
                placeholder=placeholder
                aria-label="Search products"
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input(event_target_value(&ev))
            />
            <Show when=move || !input_value.get().is_empty()>
                <button class="search-input__clear" title="Clear search" on:click=clear>
                    "×"
                </button>
            </Show>
        </div>
    }
}
