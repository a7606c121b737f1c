use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap, HashSet};

use super::aggregate::Product;

/// Slug used when a category name contains no characters at all
pub const EMPTY_CATEGORY_SLUG: &str = "-";

/// Derive the URL-safe slug of a free-text category name.
///
/// Lowercases, then replaces every maximal run of characters outside
/// `[a-z0-9]` with a single `-`. Leading and trailing runs are kept as a
/// hyphen too ("  Tea " -> "-tea-"), so distinct spellings stay distinct
/// unless they only differ in punctuation or case. An empty name maps to
/// [`EMPTY_CATEGORY_SLUG`], which keeps the result non-empty.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut in_gap = false;

    for ch in name.to_lowercase().chars() {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            slug.push(ch);
            in_gap = false;
        } else if !in_gap {
            slug.push('-');
            in_gap = true;
        }
    }

    if slug.is_empty() {
        return EMPTY_CATEGORY_SLUG.to_string();
    }
    slug
}

/// Derived category: not stored anywhere, computed from the product set
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub slug: String,
}

impl Category {
    pub fn from_name(name: &str) -> Self {
        Self {
            name: name.to_string(),
            slug: slugify(name),
        }
    }

    /// Static image path used by the category cards
    pub fn image_path(&self) -> String {
        format!("/images/categories/{}.jpg", self.slug)
    }
}

/// Category row of `GET /api/categories`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub name: String,
    pub slug: String,
    pub product_count: usize,
}

/// Distinct categories of a product set, sorted by name.
///
/// Names whose slugs collide collapse into one category titled by the first
/// name in sorted order.
pub fn derive_categories(products: &[Product]) -> Vec<Category> {
    let names: BTreeSet<&str> = products.iter().map(|p| p.category.as_str()).collect();

    let mut seen_slugs = HashSet::new();
    names
        .into_iter()
        .map(Category::from_name)
        .filter(|c| seen_slugs.insert(c.slug.clone()))
        .collect()
}

/// Categories with the number of products that fall into each slug
pub fn summarize_categories(products: &[Product]) -> Vec<CategorySummary> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for p in products {
        *counts.entry(slugify(&p.category)).or_default() += 1;
    }

    derive_categories(products)
        .into_iter()
        .map(|c| CategorySummary {
            product_count: counts.get(&c.slug).copied().unwrap_or(0),
            name: c.name,
            slug: c.slug,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_product::aggregate::ProductId;

    fn product(id: &str, category: &str) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Product {id}"),
            category: category.to_string(),
            description: None,
            image: String::new(),
            in_stock: true,
            featured: false,
            created_at: None,
        }
    }

    #[test]
    fn test_slugify_collapses_runs() {
        assert_eq!(slugify("Dried Fruits & Nuts"), "dried-fruits-nuts");
        assert_eq!(slugify("Tea"), "tea");
        assert_eq!(slugify("Rice / Grains 2kg"), "rice-grains-2kg");
    }

    #[test]
    fn test_slugify_keeps_edge_hyphens() {
        assert_eq!(slugify("  Tea "), "-tea-");
        assert_eq!(slugify("(Sweets)"), "-sweets-");
    }

    #[test]
    fn test_slugify_never_empty() {
        assert_eq!(slugify(""), EMPTY_CATEGORY_SLUG);
        assert_eq!(slugify("&& !!"), "-");
    }

    #[test]
    fn test_slugify_is_deterministic() {
        for name in ["Spices", "Snacks & Chips", "Crème Brûlée", ""] {
            assert_eq!(slugify(name), slugify(name));
        }
    }

    #[test]
    fn test_slugify_non_ascii_becomes_gap() {
        assert_eq!(slugify("Crème Brûlée"), "cr-me-br-l-e");
    }

    #[test]
    fn test_derive_categories_sorted_and_distinct() {
        let products = vec![
            product("1", "Tea"),
            product("2", "Nuts"),
            product("3", "Tea"),
            product("4", "Dried Fruits"),
        ];
        let names: Vec<String> = derive_categories(&products)
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["Dried Fruits", "Nuts", "Tea"]);
    }

    #[test]
    fn test_derive_categories_merges_colliding_slugs() {
        let products = vec![
            product("1", "Nuts & Seeds"),
            product("2", "Nuts - Seeds"),
            product("3", "Tea"),
        ];
        let categories = derive_categories(&products);
        assert_eq!(categories.len(), 2);
        assert_eq!(categories[0].slug, "nuts-seeds");
        assert_eq!(categories[0].name, "Nuts & Seeds");

        let summary = summarize_categories(&products);
        assert_eq!(summary[0].product_count, 2);
        assert_eq!(summary[1].product_count, 1);
    }

    #[test]
    fn test_image_path() {
        assert_eq!(
            Category::from_name("Dried Fruits").image_path(),
            "/images/categories/dried-fruits.jpg"
        );
    }
}
