use contracts::domain::a001_product::Product;
use leptos::prelude::*;
use leptos_router::components::A;

use super::card::ProductGrid;
use super::modal::ProductModal;
use crate::domain::a001_product::catalog_store::use_catalog;

const FEATURED_LIMIT: usize = 8;
const HOME_CATEGORY_LIMIT: usize = 6;

/// Flagged products first; with none flagged, the head of the catalog
fn featured_products(products: &[Product]) -> Vec<Product> {
    let flagged: Vec<Product> = products
        .iter()
        .filter(|p| p.featured)
        .take(FEATURED_LIMIT)
        .cloned()
        .collect();
    if flagged.is_empty() {
        products.iter().take(FEATURED_LIMIT).cloned().collect()
    } else {
        flagged
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let catalog = use_catalog();
    let products = catalog.products();
    let categories = catalog.categories();
    let selected = RwSignal::new(None::<Product>);

    let featured = Signal::derive(move || products.with(|p| featured_products(p)));
    let top_categories = Signal::derive(move || {
        categories.with(|c| c.iter().take(HOME_CATEGORY_LIMIT).cloned().collect::<Vec<_>>())
    });

    view! {
        <div class="home">
            <section class="hero">
                <h1>"Wholesale Imports, Delivered"</h1>
                <p>"Confectionery, dried fruit, nuts and beverages for retailers and distributors."</p>
                <div class="hero__actions">
                    <A href="/catalog" attr:class="btn btn--primary">"Browse Catalog"</A>
                    <A href="/contact" attr:class="btn btn--secondary">"Contact Us"</A>
                </div>
            </section>

            <section class="home__categories">
                <h2>"Shop by Category"</h2>
                <div class="category-grid">
                    <For
                        each=move || top_categories.get()
                        key=|c| c.slug.clone()
                        children=|category| {
                            view! {
                                <A href=format!("/products/{}", category.slug) attr:class="category-card">
                                    <img src=category.image_path() alt=category.name.clone() loading="lazy" />
                                    <span class="category-card__name">{category.name.clone()}</span>
                                </A>
                            }
                        }
                    />
                </div>
            </section>

            <section class="home__featured">
                <h2>"Featured Products"</h2>
                <ProductGrid
                    products=featured
                    on_open=Callback::new(move |p: Product| selected.set(Some(p)))
                />
            </section>

            <ProductModal product=selected on_close=Callback::new(move |_| selected.set(None)) />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_product::ProductId;

    fn product(id: usize, featured: bool) -> Product {
        Product {
            id: ProductId::new(id.to_string()),
            name: format!("Product {}", id),
            category: "Sweets".into(),
            description: None,
            image: String::new(),
            in_stock: true,
            featured,
            created_at: None,
        }
    }

    #[test]
    fn test_featured_prefers_flagged() {
        let products: Vec<Product> = (0..12).map(|i| product(i, i % 5 == 0)).collect();
        let ids: Vec<String> = featured_products(&products)
            .into_iter()
            .map(|p| p.id.0)
            .collect();
        assert_eq!(ids, vec!["0", "5", "10"]);
    }

    #[test]
    fn test_featured_falls_back_to_first_products() {
        let products: Vec<Product> = (0..12).map(|i| product(i, false)).collect();
        assert_eq!(featured_products(&products).len(), FEATURED_LIMIT);
    }
}
