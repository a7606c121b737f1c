use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::validation::require_non_blank;
use crate::domain::common::{AggregateId, ValidationError};

// ============================================================================
// ID Type
// ============================================================================

/// Opaque product identifier. Rows created by the admin tooling use UUIDs,
/// older rows carry hand-written ids, so no format is assumed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub String);

impl ProductId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl AggregateId for ProductId {
    fn as_string(&self) -> String {
        self.0.clone()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err("Product id must not be empty".to_string());
        }
        Ok(Self(trimmed.to_string()))
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

fn default_in_stock() -> bool {
    true
}

/// Catalog product as served by the catalog relay.
///
/// `category` is free text; sections are formed from its slug, see
/// [`super::category::slugify`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub image: String,
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
    #[serde(default)]
    pub featured: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Product {
    /// Build a new product for insertion; a missing id gets a fresh UUID
    pub fn new_for_insert(dto: ProductDto) -> Self {
        let id = dto
            .id
            .as_deref()
            .and_then(|s| ProductId::from_string(s).ok())
            .unwrap_or_else(ProductId::new_v4);

        Self {
            id,
            name: dto.name.trim().to_string(),
            category: dto.category.trim().to_string(),
            description: normalize_optional(dto.description),
            image: dto.image.unwrap_or_default(),
            in_stock: dto.in_stock.unwrap_or(true),
            featured: dto.featured.unwrap_or(false),
            created_at: Some(Utc::now()),
        }
    }

    /// Merge a partial update over the current record; absent fields are kept
    pub fn apply_patch(&mut self, patch: &ProductPatch) {
        if let Some(name) = &patch.name {
            self.name = name.trim().to_string();
        }
        if let Some(category) = &patch.category {
            self.category = category.trim().to_string();
        }
        if let Some(description) = &patch.description {
            self.description = normalize_optional(Some(description.clone()));
        }
        if let Some(image) = &patch.image {
            self.image = image.clone();
        }
        if let Some(in_stock) = patch.in_stock {
            self.in_stock = in_stock;
        }
        if let Some(featured) = patch.featured {
            self.featured = featured;
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require_non_blank("id", self.id.value())?;
        require_non_blank("name", &self.name)?;
        require_non_blank("category", &self.category)?;
        Ok(())
    }

    /// Description text with the absent case folded to ""
    pub fn description_text(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }
}

fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

// ============================================================================
// DTOs
// ============================================================================

/// Create request body for `POST /api/products`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductDto {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub in_stock: Option<bool>,
    #[serde(default)]
    pub featured: Option<bool>,
}

/// Partial update body for `PUT /api/products/:id`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub in_stock: Option<bool>,
    #[serde(default)]
    pub featured: Option<bool>,
}

/// Envelope returned by create/update, `{"success": true, "data": {...}}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductMutationResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Product>,
}

/// Query string of `GET /api/products`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductListQuery {
    #[serde(default)]
    pub q: Option<String>,
    /// Category slug
    #[serde(default)]
    pub category: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto(name: &str, category: &str) -> ProductDto {
        ProductDto {
            name: name.to_string(),
            category: category.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_new_for_insert_generates_id_and_defaults() {
        let p = Product::new_for_insert(dto("  Laziz Fudge ", "Sweets"));
        assert!(!p.id.value().is_empty());
        assert_eq!(p.name, "Laziz Fudge");
        assert!(p.in_stock);
        assert!(!p.featured);
        assert!(p.description.is_none());
        assert!(p.created_at.is_some());
    }

    #[test]
    fn test_new_for_insert_keeps_given_id() {
        let mut d = dto("Ginseng Drink", "Beverages");
        d.id = Some("bev-001".into());
        let p = Product::new_for_insert(d);
        assert_eq!(p.id, ProductId::new("bev-001"));
    }

    #[test]
    fn test_patch_keeps_absent_fields() {
        let mut d = dto("Ginseng Drink", "Beverages");
        d.description = Some("Korean ginseng".into());
        let mut p = Product::new_for_insert(d);

        p.apply_patch(&ProductPatch {
            in_stock: Some(false),
            ..Default::default()
        });

        assert_eq!(p.name, "Ginseng Drink");
        assert_eq!(p.description.as_deref(), Some("Korean ginseng"));
        assert!(!p.in_stock);
    }

    #[test]
    fn test_patch_blank_description_clears_it() {
        let mut d = dto("Green Tea", "Tea");
        d.description = Some("Loose leaf".into());
        let mut p = Product::new_for_insert(d);
        p.apply_patch(&ProductPatch {
            description: Some("   ".into()),
            ..Default::default()
        });
        assert!(p.description.is_none());
    }

    #[test]
    fn test_validate_rejects_blank_category() {
        let p = Product::new_for_insert(dto("Raisins", "  "));
        assert_eq!(p.validate(), Err(ValidationError::Blank("category")));
    }

    #[test]
    fn test_deserialize_defaults_for_sparse_rows() {
        let raw = r#"{"id":"x1","name":"Pine Nuts","category":"Nuts"}"#;
        let p: Product = serde_json::from_str(raw).unwrap();
        assert!(p.in_stock);
        assert_eq!(p.image, "");
        assert_eq!(p.description_text(), "");
    }
}
