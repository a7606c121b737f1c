use contracts::domain::a002_inquiry::{Inquiry, InquiryId};
use contracts::domain::common::AggregateId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sea_orm::entity::prelude::*;

use sea_orm::{EntityTrait, QueryOrder, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a002_inquiry")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub email: String,
    pub message: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for Inquiry {
    type Error = anyhow::Error;

    fn try_from(m: Model) -> Result<Self, Self::Error> {
        let id = InquiryId::from_string(&m.id)
            .map_err(|e| anyhow::anyhow!("inquiry {} has a malformed id: {}", m.id, e))?;
        Ok(Inquiry {
            id,
            name: m.name,
            email: m.email,
            message: m.message,
            created_at: m.created_at,
        })
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

/// Stored inquiries, newest first. Rows with a malformed id are skipped.
pub async fn list_all() -> anyhow::Result<Vec<Inquiry>> {
    let rows = Entity::find()
        .order_by_desc(Column::CreatedAt)
        .all(conn())
        .await?;

    let items = rows
        .into_iter()
        .filter_map(|m| match Inquiry::try_from(m) {
            Ok(inquiry) => Some(inquiry),
            Err(e) => {
                tracing::warn!("{}", e);
                None
            }
        })
        .collect();
    Ok(items)
}

pub async fn insert(inquiry: &Inquiry) -> anyhow::Result<Uuid> {
    let uuid = inquiry.id.value();
    let active = ActiveModel {
        id: Set(uuid.to_string()),
        name: Set(inquiry.name.clone()),
        email: Set(inquiry.email.clone()),
        message: Set(inquiry.message.clone()),
        created_at: Set(inquiry.created_at),
    };
    active.insert(conn()).await?;
    Ok(uuid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn model(id: &str) -> Model {
        Model {
            id: id.into(),
            name: "Ahmad".into(),
            email: "ahmad@example.com".into(),
            message: "Need pallet pricing.".into(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_model_into_inquiry() {
        let id = Uuid::new_v4();
        let inquiry = Inquiry::try_from(model(&id.to_string())).unwrap();
        assert_eq!(inquiry.id.value(), id);
        assert_eq!(inquiry.email, "ahmad@example.com");
    }

    #[test]
    fn test_malformed_id_is_rejected() {
        assert!(Inquiry::try_from(model("not-a-uuid")).is_err());
    }
}
