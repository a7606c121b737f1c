use contracts::domain::a001_product::Product;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::shared::inquiry_context::use_inquiry_cart;

pub const PLACEHOLDER_IMAGE: &str = "/images/placeholder.jpg";

pub fn image_or_placeholder(product: &Product) -> String {
    if product.image.trim().is_empty() {
        PLACEHOLDER_IMAGE.to_string()
    } else {
        product.image.clone()
    }
}

#[component]
pub fn StockBadge(in_stock: bool) -> impl IntoView {
    let (class, text) = if in_stock {
        ("stock-badge stock-badge--in", "In Stock")
    } else {
        ("stock-badge stock-badge--out", "Out of Stock")
    };
    view! { <span class=class>{text}</span> }
}

/// Adds the product to the inquiry cart and opens the contact form
#[component]
pub fn RequestQuoteButton(name: String) -> impl IntoView {
    let cart = use_inquiry_cart();
    let navigate = use_navigate();

    let on_click = move |_| {
        cart.add(&name);
        navigate("/contact", Default::default());
    };

    view! {
        <button class="btn btn--primary" on:click=on_click>
            "Request Quote"
        </button>
    }
}

#[component]
pub fn ProductCard(product: Product, #[prop(into)] on_open: Callback<Product>) -> impl IntoView {
    let image = image_or_placeholder(&product);
    let name = product.name.clone();
    let category = product.category.clone();
    let in_stock = product.in_stock;
    let open = move |_| on_open.run(product.clone());

    view! {
        <article class="product-card">
            <button class="product-card__media" on:click=open title="View details">
                <img src=image alt=name.clone() loading="lazy" />
            </button>
            <div class="product-card__body">
                <h3 class="product-card__name">{name.clone()}</h3>
                <p class="product-card__category">{category}</p>
                <StockBadge in_stock=in_stock />
            </div>
            <div class="product-card__actions">
                <RequestQuoteButton name=name />
            </div>
        </article>
    }
}

/// Grid of cards; `on_open` receives the clicked product
#[component]
pub fn ProductGrid(
    #[prop(into)] products: Signal<Vec<Product>>,
    #[prop(into)] on_open: Callback<Product>,
) -> impl IntoView {
    view! {
        <div class="product-grid">
            <For
                each=move || products.get()
                key=|p| p.id.clone()
                children=move |product| view! { <ProductCard product=product on_open=on_open /> }
            />
        </div>
    }
}
