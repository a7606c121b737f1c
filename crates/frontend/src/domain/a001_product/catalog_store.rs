//! Catalog snapshot shared by every page

use contracts::domain::a001_product::{derive_categories, Category, Product};
use contracts::shared::catalog_filter::products_in_category;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use super::api;

/// Products fetched once per app load, plus the categories derived from
/// them. A failed fetch leaves an empty catalog.
#[derive(Clone, Copy)]
pub struct CatalogStore {
    products: RwSignal<Vec<Product>>,
    loading: RwSignal<bool>,
    categories: Memo<Vec<Category>>,
}

impl CatalogStore {
    pub fn new() -> Self {
        let products = RwSignal::new(Vec::<Product>::new());
        let categories = Memo::new(move |_| products.with(|p| derive_categories(p)));
        Self {
            products,
            loading: RwSignal::new(false),
            categories,
        }
    }

    pub fn load(&self) {
        let products = self.products;
        let loading = self.loading;
        loading.set(true);

        spawn_local(async move {
            match api::fetch_products().await {
                Ok(items) => {
                    log::debug!("catalog: loaded {} products", items.len());
                    products.set(items);
                }
                Err(e) => {
                    log::warn!("catalog: fetch failed, showing empty catalog: {}", e);
                    products.set(Vec::new());
                }
            }
            loading.set(false);
        });
    }

    pub fn products(&self) -> Signal<Vec<Product>> {
        self.products.into()
    }

    pub fn categories(&self) -> Signal<Vec<Category>> {
        self.categories.into()
    }

    /// Products of one category slug; empty for an unknown slug
    pub fn in_category(&self, slug: impl Into<Signal<String>>) -> Signal<Vec<Product>> {
        let products = self.products;
        let slug = slug.into();
        Signal::derive(move || slug.with(|s| products.with(|p| products_in_category(p, s))))
    }

    pub fn is_loading(&self) -> Signal<bool> {
        self.loading.into()
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_catalog() -> CatalogStore {
    use_context::<CatalogStore>().expect("CatalogStore not found in context")
}
