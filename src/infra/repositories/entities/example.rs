//! Example database entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::NotSet, Set};

use crate::domain::Example;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "example")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub first_name: String,
    pub surname: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTimeUtc,
    /// NULL until the first update
    pub updated_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for Example {
    fn from(model: Model) -> Self {
        Example {
            id: model.id,
            first_name: model.first_name,
            surname: model.surname,
            email: model.email,
            password_hash: model.password_hash,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl ActiveModel {
    /// Every column but the key, which the store owns.
    pub fn without_key(example: Example) -> Self {
        Self {
            id: NotSet,
            first_name: Set(example.first_name),
            surname: Set(example.surname),
            email: Set(example.email),
            password_hash: Set(example.password_hash),
            created_at: Set(example.created_at),
            updated_at: Set(example.updated_at),
        }
    }
}
