//! News articles: add, list, fetch one.

use rusqlite::params;
use serde::{Deserialize, Serialize};

use crate::domain::sanitize::sanitize;
use crate::error::AppError;
use crate::infra::{get_connection, sql, DbPool};

const TABLE: &str = "news";
const COLUMNS: &[&str] = &["id", "title", "content", "author", "created_at"];

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsCreateReq {
    pub title: String,
    pub content: String,
    pub author: String,
}

#[derive(Debug, Serialize)]
pub struct NewsDto {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub author: String,
    pub created_at: String,
}

/// Insert an article. `created_at` is computed by storage inside the
/// statement, never bound; the other three fields are sanitized and bound.
pub fn news_add(pool: &DbPool, req: NewsCreateReq) -> Result<NewsDto, AppError> {
    let title = sanitize(&req.title);
    let content = sanitize(&req.content);
    let author = sanitize(&req.author);

    let conn = get_connection(pool);
    conn.execute(
        &sql::insert_stmt(
            TABLE,
            &["title", "content", "author", "created_at"],
            &["?1", "?2", "?3", "datetime('now')"],
        ),
        params![title, content, author],
    )?;

    news_get_by_id(&conn, conn.last_insert_rowid())
}

/// All articles, newest first. `id DESC` breaks ties when two inserts land
/// in the same second.
pub fn news_list(pool: &DbPool) -> Result<Vec<NewsDto>, AppError> {
    let conn = get_connection(pool);
    let mut stmt = conn.prepare(&sql::select_stmt(
        TABLE,
        COLUMNS,
        Some("created_at DESC, id DESC"),
    ))?;
    let rows = stmt.query_map([], map_row)?;
    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// One article for a detail page.
pub fn news_get(pool: &DbPool, id: i64) -> Result<NewsDto, AppError> {
    let conn = get_connection(pool);
    news_get_by_id(&conn, id)
}

fn news_get_by_id(conn: &rusqlite::Connection, id: i64) -> Result<NewsDto, AppError> {
    let mut stmt = conn.prepare(&format!(
        "{} WHERE id = ?1",
        sql::select_stmt(TABLE, COLUMNS, None)
    ))?;
    stmt.query_row(params![id], map_row)
        .map_err(|_| AppError::NotFound(format!("news article {}", id)))
}

fn map_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<NewsDto> {
    Ok(NewsDto {
        id: row.get(0)?,
        title: row.get(1)?,
        content: row.get(2)?,
        author: row.get(3)?,
        created_at: row.get(4)?,
    })
}
