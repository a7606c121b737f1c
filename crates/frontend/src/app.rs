use crate::domain::a001_product::catalog_store::CatalogStore;
use crate::layout::{Footer, Header};
use crate::routes::routes::AppRoutes;
use crate::shared::inquiry_context::InquiryContext;
use leptos::prelude::*;
use leptos_router::components::Router;

#[component]
pub fn App() -> impl IntoView {
    // One catalog snapshot per app load, shared by every page
    let catalog = CatalogStore::new();
    catalog.load();
    provide_context(catalog);

    provide_context(InquiryContext::new());

    view! {
        <Router>
            <Header />
            <main class="page">
                <AppRoutes />
            </main>
            <Footer />
        </Router>
    }
}
