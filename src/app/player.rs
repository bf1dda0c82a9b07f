//! Player roster: add and list.

use rusqlite::params;
use serde::{Deserialize, Serialize};

use crate::domain::sanitize::sanitize;
use crate::error::AppError;
use crate::infra::{get_connection, sql, DbPool};

const TABLE: &str = "players";
const COLUMNS: &[&str] = &["id", "name", "position", "number", "bio"];

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerCreateReq {
    pub name: String,
    pub position: String,
    /// Shirt number, kept as text; "00" and "7a" are both legal.
    pub number: String,
    pub bio: String,
}

#[derive(Debug, Serialize)]
pub struct PlayerDto {
    pub id: i64,
    pub name: String,
    pub position: String,
    pub number: String,
    pub bio: String,
}

/// Sanitize all four fields, then insert. Every field goes through
/// strip-then-escape before it is ever bound, so raw input never reaches
/// storage.
pub fn player_add(pool: &DbPool, req: PlayerCreateReq) -> Result<PlayerDto, AppError> {
    let name = sanitize(&req.name);
    let position = sanitize(&req.position);
    let number = sanitize(&req.number);
    let bio = sanitize(&req.bio);

    let conn = get_connection(pool);
    conn.execute(
        &sql::insert_stmt(
            TABLE,
            &["name", "position", "number", "bio"],
            &["?1", "?2", "?3", "?4"],
        ),
        params![name, position, number, bio],
    )?;

    Ok(PlayerDto {
        id: conn.last_insert_rowid(),
        name,
        position,
        number,
        bio,
    })
}

/// Unfiltered select, storage insertion order. No ORDER BY on purpose.
pub fn player_list(pool: &DbPool) -> Result<Vec<PlayerDto>, AppError> {
    let conn = get_connection(pool);
    let mut stmt = conn.prepare(&sql::select_stmt(TABLE, COLUMNS, None))?;
    let rows = stmt.query_map([], |row| {
        Ok(PlayerDto {
            id: row.get(0)?,
            name: row.get(1)?,
            position: row.get(2)?,
            number: row.get(3)?,
            bio: row.get(4)?,
        })
    })?;
    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
