use chrono::Utc;
use contracts::domain::a001_product::{Product, ProductId};
use serde::{Deserialize, Serialize};

use sea_orm::entity::prelude::*;

use sea_orm::{EntityTrait, QueryOrder, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a001_product")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub category: String,
    pub description: Option<String>,
    pub image: String,
    pub in_stock: bool,
    pub featured: bool,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Product {
    fn from(m: Model) -> Self {
        Product {
            id: ProductId::new(m.id),
            name: m.name,
            category: m.category,
            description: m.description.filter(|d| !d.trim().is_empty()),
            image: m.image,
            in_stock: m.in_stock,
            featured: m.featured,
            created_at: m.created_at,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

/// All products, newest first
pub async fn list_all() -> anyhow::Result<Vec<Product>> {
    let items = Entity::find()
        .order_by_desc(Column::CreatedAt)
        .order_by_asc(Column::Name)
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn get_by_id(id: &str) -> anyhow::Result<Option<Product>> {
    let result = Entity::find_by_id(id.to_string()).one(conn()).await?;
    Ok(result.map(Into::into))
}

pub async fn insert(product: &Product) -> anyhow::Result<()> {
    let now = Utc::now();
    let active = ActiveModel {
        id: Set(product.id.value().to_string()),
        name: Set(product.name.clone()),
        category: Set(product.category.clone()),
        description: Set(product.description.clone()),
        image: Set(product.image.clone()),
        in_stock: Set(product.in_stock),
        featured: Set(product.featured),
        created_at: Set(Some(product.created_at.unwrap_or(now))),
        updated_at: Set(Some(now)),
    };
    active.insert(conn()).await?;
    Ok(())
}

pub async fn update(product: &Product) -> anyhow::Result<()> {
    let active = ActiveModel {
        id: Set(product.id.value().to_string()),
        name: Set(product.name.clone()),
        category: Set(product.category.clone()),
        description: Set(product.description.clone()),
        image: Set(product.image.clone()),
        in_stock: Set(product.in_stock),
        featured: Set(product.featured),
        updated_at: Set(Some(Utc::now())),
        created_at: sea_orm::ActiveValue::NotSet,
    };
    active.update(conn()).await?;
    Ok(())
}

pub async fn delete(id: &str) -> anyhow::Result<bool> {
    let result = Entity::delete_by_id(id.to_string()).exec(conn()).await?;
    Ok(result.rows_affected > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> Model {
        Model {
            id: "p-1".into(),
            name: "Laziz Fudge".into(),
            category: "Sweets & Halva".into(),
            description: Some("   ".into()),
            image: "/images/fudge.jpg".into(),
            in_stock: false,
            featured: true,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_model_into_product() {
        let product: Product = model().into();
        assert_eq!(product.id.value(), "p-1");
        assert_eq!(product.category, "Sweets & Halva");
        assert!(!product.in_stock);
        assert!(product.featured);
    }

    #[test]
    fn test_blank_description_reads_as_absent() {
        let product: Product = model().into();
        assert_eq!(product.description, None);
        assert_eq!(product.description_text(), "");
    }
}
