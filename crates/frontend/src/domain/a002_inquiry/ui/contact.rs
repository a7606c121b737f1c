use contracts::domain::a002_inquiry::{Inquiry, InquiryDto};
use contracts::shared::contact_draft::{clear_draft, load_draft, save_draft};
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance, Input, Textarea};
use wasm_bindgen_futures::spawn_local;

use crate::domain::a002_inquiry::api;
use crate::shared::inquiry_context::use_inquiry_cart;
use crate::shared::storage::LocalStorage;

#[derive(Clone, Debug, PartialEq)]
enum SubmitState {
    Idle,
    Sending,
    Sent,
    Failed(String),
}

#[component]
pub fn ContactPage() -> impl IntoView {
    let cart = use_inquiry_cart();
    let draft = load_draft(&LocalStorage);

    let name = RwSignal::new(draft.name);
    let email = RwSignal::new(draft.email);
    let message = RwSignal::new(draft.message);
    let state = RwSignal::new(SubmitState::Idle);

    // Picks up products added elsewhere before (and while) the page is open
    cart.refresh();
    let items = cart.items();
    Effect::new(move |_| {
        items.track();
        let current = message.get_untracked();
        let merged = cart.merge_into_message(&current);
        if merged != current {
            message.set(merged);
        }
    });

    Effect::new(move |_| {
        let dto = InquiryDto {
            name: name.get(),
            email: email.get(),
            message: message.get(),
        };
        if dto.is_empty() {
            clear_draft(&LocalStorage);
        } else {
            save_draft(&LocalStorage, &dto);
        }
    });

    let remove_items = move |_| cart.clear();

    let submit = move |_| {
        if state.get_untracked() == SubmitState::Sending {
            return;
        }
        let dto = InquiryDto {
            name: name.get_untracked(),
            email: email.get_untracked(),
            message: message.get_untracked(),
        };
        if let Err(e) = Inquiry::new_for_insert(dto.clone()).validate() {
            state.set(SubmitState::Failed(e.to_string()));
            return;
        }

        state.set(SubmitState::Sending);
        spawn_local(async move {
            match api::submit_inquiry(&dto).await {
                Ok(created) => {
                    log::info!("inquiry {} sent", created.id);
                    cart.clear();
                    clear_draft(&LocalStorage);
                    name.set(String::new());
                    email.set(String::new());
                    message.set(String::new());
                    state.set(SubmitState::Sent);
                }
                Err(e) => {
                    log::warn!("inquiry submission failed: {}", e);
                    state.set(SubmitState::Failed(e));
                }
            }
        });
    };

    view! {
        <div class="contact">
            <header class="contact__header">
                <h1>"Contact Us"</h1>
                <p>"Ask for wholesale pricing, availability or samples. We reply within one business day."</p>
            </header>

            <Show when=move || !items.with(Vec::is_empty)>
                <div class="contact__inquiry">
                    <div class="contact__inquiry-header">
                        <span>"Products in your inquiry"</span>
                        <button class="btn btn--link" on:click=remove_items>
                            {move || format!("Remove Items ({})", items.with(Vec::len))}
                        </button>
                    </div>
                    <ul class="contact__inquiry-items">
                        <For
                            each=move || items.get()
                            key=|item| item.clone()
                            children=move |item| {
                                let label = item.clone();
                                view! {
                                    <li class="chip">
                                        {label}
                                        <button
                                            class="chip__remove"
                                            title="Remove"
                                            on:click=move |_| {
                                                cart.remove(&item);
                                            }
                                        >
                                            "×"
                                        </button>
                                    </li>
                                }
                            }
                        />
                    </ul>
                </div>
            </Show>

            <div class="contact__form">
                <label class="contact__label">"Name"</label>
                <Input value=name placeholder="Your name" />
                <label class="contact__label">"Email"</label>
                <Input value=email placeholder="name@company.com" />
                <label class="contact__label">"Message"</label>
                <Textarea value=message placeholder="How can we help?" />

                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=submit
                    disabled=Signal::derive(move || state.get() == SubmitState::Sending)
                >
                    {move || if state.get() == SubmitState::Sending { "Sending..." } else { "Send Message" }}
                </Button>

                {move || match state.get() {
                    SubmitState::Sent => view! {
                        <p class="contact__status contact__status--ok">"Thank you! Your message has been sent."</p>
                    }.into_any(),
                    SubmitState::Failed(e) => view! {
                        <p class="contact__status contact__status--error">{e}</p>
                    }.into_any(),
                    _ => ().into_any(),
                }}
            </div>
        </div>
    }
}
