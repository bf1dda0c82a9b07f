//! News repository integration tests

use clubsite::app::{news_add, news_get, news_list, NewsCreateReq};
use clubsite::infra::db::{get_connection, init_test_db, DbPool};
use rusqlite::params;

// ──────────────────────── Helpers ────────────────────────

fn make_create_req(title: &str) -> NewsCreateReq {
    NewsCreateReq {
        title: title.to_string(),
        content: "Match report.".to_string(),
        author: "Club Press".to_string(),
    }
}

/// Insert directly with an explicit timestamp, bypassing the storage clock
fn seed_article(pool: &DbPool, title: &str, created_at: &str) {
    let conn = get_connection(pool);
    conn.execute(
        "INSERT INTO news (title, content, author, created_at) VALUES (?1, 'c', 'a', ?2)",
        params![title, created_at],
    )
    .unwrap();
}

// ══════════════════════════════════════════════════════════
//  news_add
// ══════════════════════════════════════════════════════════

#[test]
fn add_news_returns_persisted_article() {
    let pool = init_test_db();
    let dto = news_add(&pool, make_create_req("Season opener")).unwrap();
    assert!(dto.id > 0);
    assert_eq!(dto.title, "Season opener");
    assert_eq!(dto.content, "Match report.");
    assert_eq!(dto.author, "Club Press");
}

#[test]
fn add_news_timestamp_is_storage_assigned() {
    let pool = init_test_db();
    let dto = news_add(&pool, make_create_req("Kickoff")).unwrap();
    // datetime('now') format, parseable and non-empty
    chrono::NaiveDateTime::parse_from_str(&dto.created_at, "%Y-%m-%d %H:%M:%S").unwrap();
}

#[test]
fn add_news_sanitizes_all_fields() {
    let pool = init_test_db();
    let dto = news_add(
        &pool,
        NewsCreateReq {
            title: "<h1>Win!</h1>".to_string(),
            content: "3 > 2 & counting".to_string(),
            author: "<script>x</script>Press".to_string(),
        },
    )
    .unwrap();
    assert_eq!(dto.title, "Win!");
    assert_eq!(dto.content, "3 &gt; 2 &amp; counting");
    assert_eq!(dto.author, "xPress");
}

#[test]
fn add_news_statement_failure_is_err_not_panic() {
    let pool = init_test_db();
    {
        let conn = get_connection(&pool);
        conn.execute("DROP TABLE news", []).unwrap();
    } // release conn before calling news_add
    let err = news_add(&pool, make_create_req("Lost")).unwrap_err();
    assert_eq!(err.code(), "DB_ERROR");
}

// ══════════════════════════════════════════════════════════
//  news_list
// ══════════════════════════════════════════════════════════

#[test]
fn list_news_is_reverse_chronological() {
    let pool = init_test_db();
    seed_article(&pool, "oldest", "2026-08-01 09:00:00");
    seed_article(&pool, "middle", "2026-08-15 09:00:00");
    seed_article(&pool, "newest", "2026-08-29 09:00:00");

    let titles: Vec<String> = news_list(&pool).unwrap().into_iter().map(|n| n.title).collect();
    assert_eq!(titles, vec!["newest", "middle", "oldest"]);
}

#[test]
fn list_news_same_second_orders_latest_insert_first() {
    let pool = init_test_db();
    seed_article(&pool, "first insert", "2026-08-29 09:00:00");
    seed_article(&pool, "second insert", "2026-08-29 09:00:00");

    let titles: Vec<String> = news_list(&pool).unwrap().into_iter().map(|n| n.title).collect();
    assert_eq!(titles, vec!["second insert", "first insert"]);
}

#[test]
fn list_news_empty_table_gives_empty_vec() {
    let pool = init_test_db();
    assert!(news_list(&pool).unwrap().is_empty());
}

// ══════════════════════════════════════════════════════════
//  news_get
// ══════════════════════════════════════════════════════════

#[test]
fn get_news_by_id() {
    let pool = init_test_db();
    let created = news_add(&pool, make_create_req("Cup draw")).unwrap();
    let fetched = news_get(&pool, created.id).unwrap();
    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.title, "Cup draw");
}

#[test]
fn get_news_not_found() {
    let pool = init_test_db();
    let err = news_get(&pool, 424242).unwrap_err();
    assert_eq!(err.code(), "NOT_FOUND");
}
