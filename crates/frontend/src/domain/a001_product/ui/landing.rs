use contracts::domain::a001_product::summarize_categories;
use contracts::domain::a001_product::Category;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::domain::a001_product::catalog_store::use_catalog;

fn product_count_label(count: usize) -> String {
    match count {
        1 => "1 product".to_string(),
        n => format!("{} products", n),
    }
}

/// Category landing grid at `/products`
#[component]
pub fn ProductsLandingPage() -> impl IntoView {
    let catalog = use_catalog();
    let products = catalog.products();
    let is_loading = catalog.is_loading();
    let summaries = Signal::derive(move || products.with(|p| summarize_categories(p)));

    view! {
        <div class="landing">
            <header class="landing__header">
                <h1>"Product Categories"</h1>
                <A href="/catalog" attr:class="btn btn--secondary">"View Full Catalog"</A>
            </header>

            <Show when=move || !is_loading.get() && summaries.with(Vec::is_empty)>
                <p class="landing__status">"No categories available yet."</p>
            </Show>

            <div class="category-grid">
                <For
                    each=move || summaries.get()
                    key=|s| s.slug.clone()
                    children=|summary| {
                        let image = Category {
                            name: summary.name.clone(),
                            slug: summary.slug.clone(),
                        }
                        .image_path();
                        view! {
                            <A href=format!("/products/{}", summary.slug) attr:class="category-card">
                                <img src=image alt=summary.name.clone() loading="lazy" />
                                <span class="category-card__name">{summary.name.clone()}</span>
                                <span class="category-card__count">
                                    {product_count_label(summary.product_count)}
                                </span>
                            </A>
                        }
                    }
                />
            </div>
        </div>
    }
}
