//! Search/filter pipeline over a fetched catalog snapshot.
//!
//! `filter_products` -> `group_by_slug` -> `FilteredView`. Every step is pure
//! and cheap enough to run on each keystroke.

use std::borrow::Cow;
use std::collections::HashMap;

use crate::domain::a001_product::{slugify, Category, Product};

/// Case-insensitive substring match of `query` against name, category and
/// description (OR-combined). A blank query returns the input itself.
pub fn filter_products<'a>(products: &'a [Product], query: &str) -> Cow<'a, [Product]> {
    let needle = query.trim();
    if needle.is_empty() {
        return Cow::Borrowed(products);
    }

    let needle = needle.to_lowercase();
    Cow::Owned(
        products
            .iter()
            .filter(|p| matches_query(p, &needle))
            .cloned()
            .collect(),
    )
}

/// `needle` must already be lowercased and trimmed
pub fn matches_query(product: &Product, needle: &str) -> bool {
    product.name.to_lowercase().contains(needle)
        || product.category.to_lowercase().contains(needle)
        || product.description_text().to_lowercase().contains(needle)
}

/// Products whose category normalizes to `slug`, in input order
pub fn products_in_category(products: &[Product], slug: &str) -> Vec<Product> {
    products
        .iter()
        .filter(|p| slugify(&p.category) == slug)
        .cloned()
        .collect()
}

/// Products sharing one category slug
#[derive(Debug, Clone, PartialEq)]
pub struct ProductGroup {
    pub slug: String,
    pub products: Vec<Product>,
}

/// Group products by category slug.
///
/// Groups come out in order of first appearance; inside a group products
/// keep their input order.
pub fn group_by_slug(products: &[Product]) -> Vec<ProductGroup> {
    let mut groups: Vec<ProductGroup> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for product in products {
        let slug = slugify(&product.category);
        match index.get(&slug) {
            Some(&i) => groups[i].products.push(product.clone()),
            None => {
                index.insert(slug.clone(), groups.len());
                groups.push(ProductGroup {
                    slug,
                    products: vec![product.clone()],
                });
            }
        }
    }
    groups
}

/// One rendered section of the products page
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogSection {
    pub category: Category,
    pub products: Vec<Product>,
}

/// Sections for the current query, in category order; empty sections are
/// left out.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilteredView {
    pub sections: Vec<CatalogSection>,
}

impl FilteredView {
    /// `categories` fixes section order and titles (normally
    /// `derive_categories` over the whole snapshot, not the filtered part).
    pub fn compute(products: &[Product], categories: &[Category], query: &str) -> Self {
        let filtered = filter_products(products, query);
        let mut groups: HashMap<String, Vec<Product>> = group_by_slug(&filtered)
            .into_iter()
            .map(|g| (g.slug, g.products))
            .collect();

        let sections = categories
            .iter()
            .filter_map(|category| {
                let products = groups.remove(&category.slug)?;
                Some(CatalogSection {
                    category: category.clone(),
                    products,
                })
            })
            .collect();

        Self { sections }
    }

    pub fn slugs(&self) -> Vec<String> {
        self.sections.iter().map(|s| s.category.slug.clone()).collect()
    }

    pub fn section(&self, slug: &str) -> Option<&CatalogSection> {
        self.sections.iter().find(|s| s.category.slug == slug)
    }

    pub fn total_products(&self) -> usize {
        self.sections.iter().map(|s| s.products.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_product::{derive_categories, ProductId};

    fn product(id: &str, name: &str, category: &str, description: Option<&str>) -> Product {
        Product {
            id: ProductId::new(id),
            name: name.to_string(),
            category: category.to_string(),
            description: description.map(str::to_string),
            image: String::new(),
            in_stock: true,
            featured: false,
            created_at: None,
        }
    }

    fn catalog() -> Vec<Product> {
        vec![
            product("1", "Laziz Fudge", "Sweets", Some("Milk fudge from Kabul")),
            product("2", "Ginseng Drink", "Beverages", None),
            product("3", "Green Raisins", "Dried Fruits", Some("Sun dried, seedless")),
            product("4", "Sohan Halwa", "Sweets", Some("Brittle with pistachio")),
            product("5", "Black Tea", "Tea & Coffee", Some("Loose leaf")),
        ]
    }

    fn ids(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.id.value()).collect()
    }

    #[test]
    fn test_empty_query_is_identity() {
        let products = catalog();
        for q in ["", "   ", "\t\n"] {
            let out = filter_products(&products, q);
            assert!(matches!(out, Cow::Borrowed(_)));
            assert_eq!(out.as_ref(), products.as_slice());
        }
    }

    #[test]
    fn test_matches_any_field_case_insensitive() {
        let products = catalog();
        assert_eq!(ids(&filter_products(&products, "FUDGE")), vec!["1"]);
        assert_eq!(ids(&filter_products(&products, "sweets")), vec!["1", "4"]);
        assert_eq!(ids(&filter_products(&products, "pistachio")), vec!["4"]);
        assert_eq!(ids(&filter_products(&products, "  tea  ")), vec!["5"]);
    }

    #[test]
    fn test_absent_description_is_empty() {
        let products = catalog();
        assert!(filter_products(&products, "kabul")
            .iter()
            .all(|p| p.id.value() == "1"));
        assert!(filter_products(&products, "zzz").is_empty());
    }

    #[test]
    fn test_refinement_is_monotonic() {
        let products = catalog();
        let queries = ["s", "se", "see", "seed", "seedl"];
        for pair in queries.windows(2) {
            let wide = filter_products(&products, pair[0]);
            let narrow = filter_products(&products, pair[1]);
            assert!(narrow.iter().all(|p| wide.contains(p)), "{:?}", pair);
        }
    }

    #[test]
    fn test_group_by_slug_preserves_order() {
        let groups = group_by_slug(&catalog());
        let slugs: Vec<&str> = groups.iter().map(|g| g.slug.as_str()).collect();
        assert_eq!(slugs, vec!["sweets", "beverages", "dried-fruits", "tea-coffee"]);
        assert_eq!(ids(&groups[0].products), vec!["1", "4"]);
    }

    #[test]
    fn test_group_by_slug_merges_collisions() {
        let products = vec![
            product("1", "Almonds", "Nuts & Seeds", None),
            product("2", "Pumpkin Seeds", "nuts seeds", None),
        ];
        let groups = group_by_slug(&products);
        assert_eq!(groups.len(), 1);
        assert_eq!(ids(&groups[0].products), vec!["1", "2"]);
    }

    #[test]
    fn test_filtered_view_orders_by_category_and_drops_empty() {
        let products = catalog();
        let categories = derive_categories(&products);

        let all = FilteredView::compute(&products, &categories, "");
        assert_eq!(
            all.slugs(),
            vec!["beverages", "dried-fruits", "sweets", "tea-coffee"]
        );
        assert_eq!(all.total_products(), 5);

        let sweets = FilteredView::compute(&products, &categories, "halwa");
        assert_eq!(sweets.slugs(), vec!["sweets"]);
        assert_eq!(ids(&sweets.section("sweets").unwrap().products), vec!["4"]);
    }

    #[test]
    fn test_products_in_category_matches_by_slug() {
        let products = vec![
            product("1", "Laziz Fudge", "Sweets & Halva", None),
            product("2", "Green Tea", "Tea", None),
            product("3", "Sohan", "sweets halva", None),
        ];
        let ids: Vec<String> = products_in_category(&products, "sweets-halva")
            .into_iter()
            .map(|p| p.id.0)
            .collect();
        assert_eq!(ids, vec!["1", "3"]);
        assert!(products_in_category(&products, "unknown").is_empty());
    }

    #[test]
    fn test_filtered_view_of_empty_catalog() {
        let view = FilteredView::compute(&[], &[], "tea");
        assert!(view.is_empty());
    }
}
