//! Product DAO contract and SQLite implementation.
//!
//! # Invariants
//! - `add_product`/`update_product` call `Product::validate()` before SQL
//!   mutations.
//! - `price` is written as its decimal text so no binary float rounding
//!   happens on the way in.
//! - `category_id` must reference an existing category; violations surface
//!   as storage errors from the foreign key.

use super::{decode_decimal, query_all, query_optional, require_changed, DaoResult, FromRow};
use crate::model::product::Product;
use crate::model::{validate_id, EntityId};
use log::debug;
use rusqlite::{params, Connection, Row};

const PRODUCT_SELECT_SQL: &str = "SELECT id, name, price, category_id FROM products";

/// CRUD operations over `products`.
pub trait ProductDao {
    fn get_product_by_id(&self, id: EntityId) -> DaoResult<Option<Product>>;
    fn get_all_products(&self) -> DaoResult<Vec<Product>>;
    /// Inserts `product` and returns the storage-assigned id.
    fn add_product(&self, product: &Product) -> DaoResult<EntityId>;
    fn update_product(&self, product: &Product) -> DaoResult<()>;
    fn delete_product_by_id(&self, id: EntityId) -> DaoResult<()>;
}

/// SQLite-backed product DAO.
pub struct SqliteProductDao<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteProductDao<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl ProductDao for SqliteProductDao<'_> {
    fn get_product_by_id(&self, id: EntityId) -> DaoResult<Option<Product>> {
        validate_id(id)?;
        query_optional(
            self.conn,
            &format!("{PRODUCT_SELECT_SQL} WHERE id = ?1;"),
            [id],
        )
    }

    fn get_all_products(&self) -> DaoResult<Vec<Product>> {
        query_all(self.conn, &format!("{PRODUCT_SELECT_SQL} ORDER BY id;"), [])
    }

    fn add_product(&self, product: &Product) -> DaoResult<EntityId> {
        product.validate()?;

        self.conn.execute(
            "INSERT INTO products (name, price, category_id) VALUES (?1, ?2, ?3);",
            params![
                product.name.as_str(),
                product.price.to_string(),
                product.category_id,
            ],
        )?;

        let id = self.conn.last_insert_rowid();
        debug!(
            "event=product_add module=dao status=ok id={id} category_id={}",
            product.category_id
        );
        Ok(id)
    }

    fn update_product(&self, product: &Product) -> DaoResult<()> {
        validate_id(product.id)?;
        product.validate()?;

        let changed = self.conn.execute(
            "UPDATE products SET name = ?1, price = ?2, category_id = ?3 WHERE id = ?4;",
            params![
                product.name.as_str(),
                product.price.to_string(),
                product.category_id,
                product.id,
            ],
        )?;
        require_changed(changed, Product::TABLE, product.id)?;

        debug!("event=product_update module=dao status=ok id={}", product.id);
        Ok(())
    }

    fn delete_product_by_id(&self, id: EntityId) -> DaoResult<()> {
        validate_id(id)?;

        let changed = self
            .conn
            .execute("DELETE FROM products WHERE id = ?1;", [id])?;
        require_changed(changed, Product::TABLE, id)?;

        debug!("event=product_delete module=dao status=ok id={id}");
        Ok(())
    }
}

impl FromRow for Product {
    const TABLE: &'static str = "products";

    fn from_row(row: &Row<'_>) -> DaoResult<Self> {
        Ok(Self {
            id: row.get("id")?,
            name: row.get("name")?,
            price: decode_decimal(row, Self::TABLE, "price")?,
            category_id: row.get("category_id")?,
        })
    }
}
