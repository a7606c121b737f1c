use super::repository;
use crate::shared::api_error::ServiceError;
use contracts::domain::a001_product::{
    summarize_categories, CategorySummary, Product, ProductDto, ProductListQuery, ProductPatch,
};
use contracts::shared::catalog_filter::{filter_products, products_in_category};

/// List products matching the optional text query and category slug
pub async fn list(query: &ProductListQuery) -> anyhow::Result<Vec<Product>> {
    let all = repository::list_all().await?;
    Ok(apply_list_query(&all, query))
}

pub async fn get_by_id(id: &str) -> anyhow::Result<Option<Product>> {
    repository::get_by_id(id).await
}

/// Create a product; a missing id gets a fresh UUID
pub async fn create(dto: ProductDto) -> anyhow::Result<Product> {
    let product = Product::new_for_insert(dto);
    product.validate().map_err(ServiceError::from)?;

    if repository::get_by_id(product.id.value()).await?.is_some() {
        return Err(ServiceError::Validation(format!(
            "product id {} already exists",
            product.id
        ))
        .into());
    }

    repository::insert(&product).await?;
    tracing::info!("Created product {} ({})", product.id, product.name);
    Ok(product)
}

/// Merge `patch` over the stored product
pub async fn update(id: &str, patch: ProductPatch) -> anyhow::Result<Product> {
    let mut product = repository::get_by_id(id)
        .await?
        .ok_or_else(|| ServiceError::NotFound(format!("product {}", id)))?;

    product.apply_patch(&patch);
    product.validate().map_err(ServiceError::from)?;

    repository::update(&product).await?;
    tracing::info!("Updated product {}", product.id);
    Ok(product)
}

pub async fn delete(id: &str) -> anyhow::Result<bool> {
    let deleted = repository::delete(id).await?;
    if deleted {
        tracing::info!("Deleted product {}", id);
    }
    Ok(deleted)
}

/// Categories derived from the stored products, sorted by name
pub async fn list_categories() -> anyhow::Result<Vec<CategorySummary>> {
    let all = repository::list_all().await?;
    Ok(summarize_categories(&all))
}

/// Same filtering the catalog page applies, plus an exact category-slug match
pub fn apply_list_query(products: &[Product], query: &ProductListQuery) -> Vec<Product> {
    let text = query.q.as_deref().unwrap_or("");
    let filtered = filter_products(products, text);

    match query.category.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        Some(slug) => products_in_category(&filtered, slug),
        None => filtered.into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_product::ProductId;

    fn product(id: &str, name: &str, category: &str) -> Product {
        Product {
            id: ProductId::new(id),
            name: name.into(),
            category: category.into(),
            description: None,
            image: String::new(),
            in_stock: true,
            featured: false,
            created_at: None,
        }
    }

    fn catalog() -> Vec<Product> {
        vec![
            product("1", "Laziz Fudge", "Sweets & Halva"),
            product("2", "Ginseng Drink", "Beverages"),
            product("3", "Sohan Halwa", "Sweets & Halva"),
        ]
    }

    #[test]
    fn test_empty_query_returns_all() {
        let all = catalog();
        assert_eq!(apply_list_query(&all, &ProductListQuery::default()), all);
    }

    #[test]
    fn test_text_and_category_combine() {
        let all = catalog();
        let query = ProductListQuery {
            q: Some("  HAL ".into()),
            category: Some("sweets-halva".into()),
        };
        let ids: Vec<_> = apply_list_query(&all, &query)
            .into_iter()
            .map(|p| p.id.0)
            .collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn test_unknown_category_is_empty() {
        let query = ProductListQuery {
            q: None,
            category: Some("tools".into()),
        };
        assert!(apply_list_query(&catalog(), &query).is_empty());
    }
}
