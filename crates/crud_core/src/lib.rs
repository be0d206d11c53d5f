//! Synchronous data-access layer over the users/products/categories/addresses
//! schema.
//!
//! Callers open a connection (directly or through `ConnectionProvider`) and
//! hand it to the DAO they need; every DAO call runs one statement to
//! completion before returning.

pub mod dao;
pub mod db;
pub mod logging;
pub mod model;

pub use dao::category_dao::{CategoryDao, SqliteCategoryDao};
pub use dao::product_dao::{ProductDao, SqliteProductDao};
pub use dao::user_dao::{SqliteUserDao, UserDao};
pub use dao::{DaoError, DaoResult, FromRow};
pub use db::{ConnectionProvider, DbEndpoint, DbError, DbResult};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::address::Address;
pub use model::category::Category;
pub use model::product::Product;
pub use model::user::User;
pub use model::{EntityId, ValidationError, UNASSIGNED_ID};
