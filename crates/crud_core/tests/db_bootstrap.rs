use crud_core::db::schema::{current_user_version, SCHEMA_VERSION, TABLES};
use crud_core::db::{open_db, open_db_in_memory, DbError};
use crud_core::{SqliteUserDao, User, UserDao};
use rusqlite::Connection;

#[test]
fn open_db_in_memory_creates_all_tables() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(current_user_version(&conn).unwrap(), SCHEMA_VERSION);
    for table in TABLES {
        assert_table_exists(&conn, table);
    }
}

#[test]
fn foreign_keys_are_enforced() {
    let conn = open_db_in_memory().unwrap();

    let enabled: i64 = conn
        .query_row("PRAGMA foreign_keys;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(enabled, 1);

    let result = conn.execute(
        "INSERT INTO addresses (street, city, postal_code, user_id)
         VALUES ('1 Main St', 'Springfield', '12345', 77);",
        [],
    );
    assert!(result.is_err());
}

#[test]
fn reopening_file_database_keeps_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("crud.db");

    let first = open_db(&path).unwrap();
    SqliteUserDao::new(&first)
        .add_user(&User::new("testuser1", "test1@example.com"))
        .unwrap();
    drop(first);

    let second = open_db(&path).unwrap();
    assert_eq!(current_user_version(&second).unwrap(), SCHEMA_VERSION);
    let users = SqliteUserDao::new(&second).get_all_users().unwrap();
    assert_eq!(users.len(), 1);
}

#[test]
fn ids_are_not_reused_after_delete() {
    let conn = open_db_in_memory().unwrap();
    let dao = SqliteUserDao::new(&conn);

    let first = dao.add_user(&User::new("a", "a@example.com")).unwrap();
    dao.delete_user_by_id(first).unwrap();
    let second = dao.add_user(&User::new("b", "b@example.com")).unwrap();

    assert!(second > first);
}

#[test]
fn opening_database_with_newer_schema_version_returns_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.db");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();
    drop(conn);

    match open_db(&path).unwrap_err() {
        DbError::UnsupportedSchemaVersion {
            db_version,
            latest_supported,
        } => {
            assert_eq!(db_version, 999);
            assert_eq!(latest_supported, SCHEMA_VERSION);
        }
        other => panic!("unexpected error: {other}"),
    }
}

fn assert_table_exists(conn: &Connection, table_name: &str) {
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM sqlite_master
                WHERE type = 'table' AND name = ?1
            );",
            [table_name],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exists, 1, "table {table_name} does not exist");
}
