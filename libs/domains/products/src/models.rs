use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::error::{ProductError, ProductResult};

/// A product offered by the shop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Assigned by storage on first save
    pub id: Option<i64>,
    pub name: String,
    pub maker: String,
    pub price: i32,
}

/// Request body for creating or updating a product.
///
/// Every field is optional on the wire; creation requires all three,
/// updates only touch the fields that are present.
/// Field checks live in [`Product::from_data`] and [`Product::apply_data`],
/// so the `Validate` derive carries no rules.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(default)]
pub struct ProductData {
    #[schema(example = "Pencil")]
    pub name: Option<String>,
    #[schema(example = "Acme")]
    pub maker: Option<String>,
    #[schema(example = 500)]
    pub price: Option<i32>,
}

impl ProductData {
    pub fn new(name: impl Into<String>, maker: impl Into<String>, price: i32) -> Self {
        Self {
            name: Some(name.into()),
            maker: Some(maker.into()),
            price: Some(price),
        }
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Present and not just whitespace, otherwise `BadRequest(field)`.
fn require_text(field: &str, value: Option<String>) -> ProductResult<String> {
    match value {
        Some(v) if !is_blank(&v) => Ok(v),
        _ => Err(ProductError::bad_request(field)),
    }
}

/// Absent is fine; present must not be blank.
fn check_optional_text(field: &str, value: Option<&String>) -> ProductResult<()> {
    match value {
        Some(v) if is_blank(v) => Err(ProductError::bad_request(field)),
        _ => Ok(()),
    }
}

impl Product {
    /// Build an unsaved product, checking name, maker and price in that order.
    pub fn from_data(data: ProductData) -> ProductResult<Self> {
        let name = require_text("name", data.name)?;
        let maker = require_text("maker", data.maker)?;
        let price = data.price.ok_or_else(|| ProductError::bad_request("price"))?;

        Ok(Self {
            id: None,
            name,
            maker,
            price,
        })
    }

    /// Overwrite the fields present in `data`.
    ///
    /// Nothing is changed when any present field is blank.
    pub fn apply_data(&mut self, data: ProductData) -> ProductResult<()> {
        check_optional_text("name", data.name.as_ref())?;
        check_optional_text("maker", data.maker.as_ref())?;

        if let Some(name) = data.name {
            self.name = name;
        }
        if let Some(maker) = data.maker {
            self.maker = maker;
        }
        if let Some(price) = data.price {
            self.price = price;
        }
        Ok(())
    }
}
