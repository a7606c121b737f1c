use crate::domain::a001_product::ui::catalog::CatalogPage;
use crate::domain::a001_product::ui::category_page::CategoryPage;
use crate::domain::a001_product::ui::home::HomePage;
use crate::domain::a001_product::ui::landing::ProductsLandingPage;
use crate::domain::a002_inquiry::ui::contact::ContactPage;
use leptos::prelude::*;
use leptos_router::components::{Route, Routes, A};
use leptos_router::path;

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"Page not found"</h1>
            <A href="/">"Back to home"</A>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFound /> }>
            <Route path=path!("/") view=HomePage />
            <Route path=path!("/catalog") view=CatalogPage />
            <Route path=path!("/products") view=ProductsLandingPage />
            <Route path=path!("/products/:slug") view=CategoryPage />
            <Route path=path!("/contact") view=ContactPage />
        </Routes>
    }
}
