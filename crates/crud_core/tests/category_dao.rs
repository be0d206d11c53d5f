use crud_core::db::open_db_in_memory;
use crud_core::{Category, CategoryDao, DaoError, SqliteCategoryDao, ValidationError};

#[test]
fn categories_are_listed_in_insertion_order() {
    let conn = open_db_in_memory().unwrap();
    let dao = SqliteCategoryDao::new(&conn);

    for name in ["Electronics", "Clothing", "Books"] {
        dao.add_category(&Category::new(name)).unwrap();
    }

    let names: Vec<_> = dao
        .get_all_categories()
        .unwrap()
        .into_iter()
        .map(|category| category.name)
        .collect();
    assert_eq!(names, vec!["Electronics", "Clothing", "Books"]);
}

#[test]
fn get_by_id_returns_row_or_none() {
    let conn = open_db_in_memory().unwrap();
    let dao = SqliteCategoryDao::new(&conn);

    let id = dao.add_category(&Category::new("Books")).unwrap();

    assert_eq!(
        dao.get_category_by_id(id).unwrap(),
        Some(Category::with_id(id, "Books"))
    );
    assert!(dao.get_category_by_id(id + 1).unwrap().is_none());
}

#[test]
fn empty_name_is_rejected_but_whitespace_is_kept() {
    let conn = open_db_in_memory().unwrap();
    let dao = SqliteCategoryDao::new(&conn);

    let err = dao.add_category(&Category::new("")).unwrap_err();
    assert!(matches!(
        err,
        DaoError::InvalidArgument(ValidationError::EmptyField("name"))
    ));

    let id = dao.add_category(&Category::new(" ")).unwrap();
    assert_eq!(
        dao.get_category_by_id(id).unwrap(),
        Some(Category::with_id(id, " "))
    );
}
