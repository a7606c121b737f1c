use contracts::domain::a001_product::Product;
use leptos::ev;
use leptos::prelude::*;

use super::card::{image_or_placeholder, RequestQuoteButton, StockBadge};

/// Product details overlay. Closes on the backdrop, the × button or Escape.
#[component]
pub fn ProductModal(
    #[prop(into)] product: Signal<Option<Product>>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let escape_listener = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" && product.with_untracked(Option::is_some) {
            on_close.run(());
        }
    });
    on_cleanup(move || escape_listener.remove());

    move || {
        product.get().map(|p| {
            let image = image_or_placeholder(&p);
            let description = p.description_text().to_string();
            view! {
                <div class="modal-backdrop" on:click=move |_| on_close.run(())>
                    <div
                        class="modal"
                        role="dialog"
                        aria-modal="true"
                        on:click=|ev| ev.stop_propagation()
                    >
                        <button class="modal__close" title="Close" on:click=move |_| on_close.run(())>
                            "×"
                        </button>
                        <img class="modal__image" src=image alt=p.name.clone() />
                        <div class="modal__body">
                            <h2>{p.name.clone()}</h2>
                            <p class="modal__category">{p.category.clone()}</p>
                            <StockBadge in_stock=p.in_stock />
                            {(!description.is_empty())
                                .then(|| view! { <p class="modal__description">{description}</p> })}
                            <RequestQuoteButton name=p.name.clone() />
                        </div>
                    </div>
                </div>
            }
        })
    }
}
