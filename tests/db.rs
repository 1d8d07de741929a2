use diesel::RunQueryDsl;
use diesel::sql_types::Integer;

mod common;

#[derive(diesel::QueryableByName)]
struct Flag {
    #[diesel(sql_type = Integer)]
    foreign_keys: i32,
}

#[test]
fn test_pool_hands_out_connections() {
    let test_db = common::TestDb::new("test_pool_hands_out_connections.db");
    let conn = test_db.pool().get();
    assert!(conn.is_ok());
    assert!(test_db.repo().ping().is_ok());
}

#[test]
fn test_foreign_keys_are_enforced() {
    let test_db = common::TestDb::new("test_foreign_keys_are_enforced.db");
    let mut conn = test_db.pool().get().unwrap();

    let flag = diesel::sql_query("PRAGMA foreign_keys")
        .get_result::<Flag>(&mut conn)
        .unwrap();

    assert_eq!(flag.foreign_keys, 1);
}

#[test]
fn test_migrations_are_idempotent() {
    let test_db = common::TestDb::new("test_migrations_are_idempotent.db");
    assert!(airport_admin::db::run_migrations(test_db.pool()).is_ok());
}
