use contracts::domain::a001_product::{Category, Product};
use contracts::shared::catalog_filter::{CatalogSection, FilteredView};
use leptos::prelude::*;

use super::card::ProductGrid;
use super::modal::ProductModal;
use crate::domain::a001_product::catalog_store::use_catalog;
use crate::shared::constants::{nav_dom_id, section_dom_id, CATEGORY_STRIP_ID};
use crate::shared::scroll_spy::{use_scroll_spy, ScrollSpyHandle};
use crate::shared::search_input::SearchInput;

/// Full catalog: search, sticky category strip driven by the scroll spy,
/// one section per category.
#[component]
pub fn CatalogPage() -> impl IntoView {
    let catalog = use_catalog();
    let products = catalog.products();
    let categories = catalog.categories();
    let is_loading = catalog.is_loading();

    let query = RwSignal::new(String::new());
    let selected = RwSignal::new(None::<Product>);

    let filtered = Memo::new(move |_| {
        let q = query.get();
        products.with(|p| categories.with(|c| FilteredView::compute(p, c, &q)))
    });
    let slugs = Signal::derive(move || filtered.with(FilteredView::slugs));
    let strip_categories = Signal::derive(move || {
        filtered.with(|v| {
            v.sections
                .iter()
                .map(|s| s.category.clone())
                .collect::<Vec<_>>()
        })
    });
    let sections = Signal::derive(move || filtered.with(|v| v.sections.clone()));

    let spy = use_scroll_spy(slugs);
    let open_product = Callback::new(move |p: Product| selected.set(Some(p)));

    view! {
        <div class="catalog">
            <header class="catalog__header">
                <h1>"Our Products"</h1>
                <SearchInput
                    value=query
                    on_change=Callback::new(move |v: String| query.set(v))
                    placeholder="Search by name, category or description..."
                />
            </header>

            <nav id=CATEGORY_STRIP_ID class="category-strip" aria-label="Categories">
                <For
                    each=move || strip_categories.get()
                    key=|c| c.slug.clone()
                    children=move |category| view! { <StripControl category=category spy=spy /> }
                />
            </nav>

            {move || {
                if is_loading.get() {
                    view! { <p class="catalog__status">"Loading products..."</p> }.into_any()
                } else if filtered.with(FilteredView::is_empty) {
                    let q = query.get();
                    let text = if q.trim().is_empty() {
                        "No products available yet.".to_string()
                    } else {
                        format!("No products match \"{}\".", q.trim())
                    };
                    view! { <p class="catalog__status">{text}</p> }.into_any()
                } else {
                    ().into_any()
                }
            }}

            <For
                each=move || sections.get()
                key=section_key
                children=move |section| view! { <CatalogSectionView section=section on_open=open_product /> }
            />

            <ProductModal product=selected on_close=Callback::new(move |_| selected.set(None)) />

            <Show when=move || spy.show_back_to_top().get()>
                <button class="back-to-top" title="Back to top" on:click=move |_| spy.scroll_to_top()>
                    "↑"
                </button>
            </Show>
        </div>
    }
}

/// A section re-renders when its product list changes, not only its slug
fn section_key(section: &CatalogSection) -> (String, Vec<String>) {
    (
        section.category.slug.clone(),
        section.products.iter().map(|p| p.id.0.clone()).collect(),
    )
}

#[component]
fn StripControl(category: Category, spy: ScrollSpyHandle) -> impl IntoView {
    let active = spy.active();
    let slug = category.slug.clone();
    let is_active = {
        let slug = slug.clone();
        move || active.with(|a| a.as_deref() == Some(slug.as_str()))
    };

    view! {
        <button
            id=nav_dom_id(&category.slug)
            class="category-strip__item"
            class:active=is_active
            on:click=move |_| spy.navigate_to(&slug)
        >
            {category.name}
        </button>
    }
}

#[component]
fn CatalogSectionView(section: CatalogSection, on_open: Callback<Product>) -> impl IntoView {
    let count = section.products.len();
    let products = Signal::stored(section.products);

    view! {
        <section id=section_dom_id(&section.category.slug) class="catalog-section">
            <h2 class="catalog-section__title">
                {section.category.name}
                <span class="catalog-section__count">{format!("({})", count)}</span>
            </h2>
            <ProductGrid products=products on_open=on_open />
        </section>
    }
}
