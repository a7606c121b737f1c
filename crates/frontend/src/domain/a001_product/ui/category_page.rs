use contracts::domain::a001_product::Product;
use contracts::shared::catalog_filter::filter_products;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use super::card::ProductGrid;
use super::modal::ProductModal;
use crate::domain::a001_product::catalog_store::use_catalog;
use crate::shared::search_input::SearchInput;

/// Products of one category, with a search box of its own
#[component]
pub fn CategoryPage() -> impl IntoView {
    let params = use_params_map();
    let catalog = use_catalog();
    let categories = catalog.categories();

    let slug = Memo::new(move |_| params.read().get("slug").unwrap_or_default());
    let query = RwSignal::new(String::new());
    let selected = RwSignal::new(None::<Product>);

    let title = Signal::derive(move || {
        let slug = slug.get();
        categories.with(|c| {
            c.iter()
                .find(|category| category.slug == slug)
                .map(|category| category.name.clone())
                .unwrap_or(slug)
        })
    });

    let in_category = catalog.in_category(slug);
    let visible = Signal::derive(move || {
        let q = query.get();
        in_category.with(|p| filter_products(p, &q).into_owned())
    });

    // A new category starts with an empty search
    Effect::new(move |_| {
        slug.track();
        query.set(String::new());
    });

    view! {
        <div class="category-page">
            <nav class="breadcrumbs">
                <A href="/products">"Categories"</A>
                " / "
                <span>{move || title.get()}</span>
            </nav>
            <header class="category-page__header">
                <h1>{move || title.get()}</h1>
                <SearchInput
                    value=query
                    on_change=Callback::new(move |v: String| query.set(v))
                    placeholder="Search in this category..."
                />
            </header>

            <Show when=move || !catalog.is_loading().get() && visible.with(Vec::is_empty)>
                <p class="category-page__status">"No products found."</p>
            </Show>

            <ProductGrid
                products=visible
                on_open=Callback::new(move |p: Product| selected.set(Some(p)))
            />

            <ProductModal product=selected on_close=Callback::new(move |_| selected.set(None)) />
        </div>
    }
}
