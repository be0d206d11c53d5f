//! Category DAO: just enough to create and read the rows products point at.

use super::{query_all, query_optional, DaoResult, FromRow};
use crate::model::category::Category;
use crate::model::{validate_id, EntityId};
use log::debug;
use rusqlite::{Connection, Row};

const CATEGORY_SELECT_SQL: &str = "SELECT id, name FROM categories";

pub trait CategoryDao {
    fn get_category_by_id(&self, id: EntityId) -> DaoResult<Option<Category>>;
    fn get_all_categories(&self) -> DaoResult<Vec<Category>>;
    fn add_category(&self, category: &Category) -> DaoResult<EntityId>;
}

/// SQLite-backed category DAO.
pub struct SqliteCategoryDao<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteCategoryDao<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl CategoryDao for SqliteCategoryDao<'_> {
    fn get_category_by_id(&self, id: EntityId) -> DaoResult<Option<Category>> {
        validate_id(id)?;
        query_optional(
            self.conn,
            &format!("{CATEGORY_SELECT_SQL} WHERE id = ?1;"),
            [id],
        )
    }

    fn get_all_categories(&self) -> DaoResult<Vec<Category>> {
        query_all(self.conn, &format!("{CATEGORY_SELECT_SQL} ORDER BY id;"), [])
    }

    fn add_category(&self, category: &Category) -> DaoResult<EntityId> {
        category.validate()?;

        self.conn.execute(
            "INSERT INTO categories (name) VALUES (?1);",
            [category.name.as_str()],
        )?;

        let id = self.conn.last_insert_rowid();
        debug!("event=category_add module=dao status=ok id={id}");
        Ok(id)
    }
}

impl FromRow for Category {
    const TABLE: &'static str = "categories";

    fn from_row(row: &Row<'_>) -> DaoResult<Self> {
        Ok(Self {
            id: row.get("id")?,
            name: row.get("name")?,
        })
    }
}
