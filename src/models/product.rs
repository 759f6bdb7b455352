use bigdecimal::BigDecimal;
use diesel::prelude::*;
use serde::Deserialize;

/// Product model for reading from the database.
/// Derives Queryable for SELECT operations and Selectable for type-safe column selection.
#[derive(Debug, Queryable, Selectable, Clone, PartialEq)]
#[diesel(table_name = crate::schema::products)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub colour: String,
    /// Fixed-point price; Numeric in the database to avoid float rounding drift.
    pub price: BigDecimal,
}

/// NewProduct model for staging inserts; the id is assigned by the store on commit.
#[derive(Debug, Insertable, Deserialize, Clone, PartialEq)]
#[diesel(table_name = crate::schema::products)]
pub struct NewProduct {
    pub name: String,
    pub colour: String,
    pub price: BigDecimal,
}
