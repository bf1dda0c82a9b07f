//! Statement builders for the repositories.
//!
//! Every statement that splices a table identifier is built here, so the
//! `FROM`/`INTO` spacing lives in exactly one place.

pub(crate) fn select_stmt(table: &str, columns: &[&str], order_by: Option<&str>) -> String {
    let mut sql = format!("SELECT {} FROM {}", columns.join(", "), table);
    if let Some(order) = order_by {
        sql.push_str(" ORDER BY ");
        sql.push_str(order);
    }
    sql
}

pub(crate) fn insert_stmt(table: &str, columns: &[&str], values: &[&str]) -> String {
    format!(
        "INSERT INTO {} ({}) VALUES ({})",
        table,
        columns.join(", "),
        values.join(", ")
    )
}
