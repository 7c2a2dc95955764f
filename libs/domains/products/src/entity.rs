use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::entity::prelude::*;

use crate::models::Product;

/// Sea-ORM Entity for the products table
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub maker: String,
    pub price: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Product {
    fn from(model: Model) -> Self {
        Self {
            id: Some(model.id),
            name: model.name,
            maker: model.maker,
            price: model.price,
        }
    }
}

/// Unsaved products leave `id` to the sequence.
impl From<Product> for ActiveModel {
    fn from(product: Product) -> Self {
        ActiveModel {
            id: product.id.map_or(NotSet, Set),
            name: Set(product.name),
            maker: Set(product.maker),
            price: Set(product.price),
        }
    }
}
