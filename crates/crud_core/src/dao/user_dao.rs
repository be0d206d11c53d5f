//! User DAO contract and SQLite implementation.
//!
//! # Invariants
//! - `add_user`/`update_user` call `User::validate()` before SQL mutations.
//! - Lookups by id never fail on a miss; they return `Ok(None)`.

use super::{query_all, query_optional, require_changed, DaoResult, FromRow};
use crate::model::user::User;
use crate::model::{validate_id, EntityId};
use log::debug;
use rusqlite::{params, Connection, Row};

const USER_SELECT_SQL: &str = "SELECT id, username, email FROM users";

/// CRUD operations over `users`.
pub trait UserDao {
    fn get_user_by_id(&self, id: EntityId) -> DaoResult<Option<User>>;
    fn get_all_users(&self) -> DaoResult<Vec<User>>;
    /// Inserts `user` and returns the storage-assigned id; `user.id` is ignored.
    fn add_user(&self, user: &User) -> DaoResult<EntityId>;
    fn update_user(&self, user: &User) -> DaoResult<()>;
    fn delete_user_by_id(&self, id: EntityId) -> DaoResult<()>;
}

/// SQLite-backed user DAO.
pub struct SqliteUserDao<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteUserDao<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl UserDao for SqliteUserDao<'_> {
    fn get_user_by_id(&self, id: EntityId) -> DaoResult<Option<User>> {
        validate_id(id)?;
        query_optional(
            self.conn,
            &format!("{USER_SELECT_SQL} WHERE id = ?1;"),
            [id],
        )
    }

    fn get_all_users(&self) -> DaoResult<Vec<User>> {
        query_all(self.conn, &format!("{USER_SELECT_SQL} ORDER BY id;"), [])
    }

    fn add_user(&self, user: &User) -> DaoResult<EntityId> {
        user.validate()?;

        self.conn.execute(
            "INSERT INTO users (username, email) VALUES (?1, ?2);",
            params![user.username.as_str(), user.email.as_str()],
        )?;

        let id = self.conn.last_insert_rowid();
        debug!("event=user_add module=dao status=ok id={id}");
        Ok(id)
    }

    fn update_user(&self, user: &User) -> DaoResult<()> {
        validate_id(user.id)?;
        user.validate()?;

        let changed = self.conn.execute(
            "UPDATE users SET username = ?1, email = ?2 WHERE id = ?3;",
            params![user.username.as_str(), user.email.as_str(), user.id],
        )?;
        require_changed(changed, User::TABLE, user.id)?;

        debug!("event=user_update module=dao status=ok id={}", user.id);
        Ok(())
    }

    fn delete_user_by_id(&self, id: EntityId) -> DaoResult<()> {
        validate_id(id)?;

        let changed = self
            .conn
            .execute("DELETE FROM users WHERE id = ?1;", [id])?;
        require_changed(changed, User::TABLE, id)?;

        debug!("event=user_delete module=dao status=ok id={id}");
        Ok(())
    }
}

impl FromRow for User {
    const TABLE: &'static str = "users";

    fn from_row(row: &Row<'_>) -> DaoResult<Self> {
        Ok(Self {
            id: row.get("id")?,
            username: row.get("username")?,
            email: row.get("email")?,
        })
    }
}
