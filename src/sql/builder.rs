//! Builds parameterized SELECT, INSERT, DELETE statements for a `Table`.

/// Static description of a persisted entity. `COLUMNS[0]` is the integer primary key.
pub trait Table {
    /// Table name in the store.
    const TABLE: &'static str;
    /// Human-facing kind, used in "not found" messages.
    const KIND: &'static str;
    const COLUMNS: &'static [&'static str];

    fn primary_key() -> &'static str {
        Self::COLUMNS[0]
    }
}

/// Quote identifier (safe: only from `Table` constants).
fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

fn column_list(columns: &[&str]) -> String {
    columns.iter().map(|c| quoted(c)).collect::<Vec<_>>().join(", ")
}

/// SELECT every row ordered by primary key.
pub fn select_all<T: Table>() -> String {
    format!(
        "SELECT {} FROM {} ORDER BY {}",
        column_list(T::COLUMNS),
        quoted(T::TABLE),
        quoted(T::primary_key())
    )
}

/// SELECT one row by primary key; binds the id as `?`.
pub fn select_by_id<T: Table>() -> String {
    format!(
        "SELECT {} FROM {} WHERE {} = ?",
        column_list(T::COLUMNS),
        quoted(T::TABLE),
        quoted(T::primary_key())
    )
}

/// SELECT rows where `column IN (?, ?, ...)` with `count` placeholders, ordered by primary key.
/// An empty set yields a query that matches nothing.
pub fn select_where_in<T: Table>(column: &str, count: usize) -> String {
    let cols = column_list(T::COLUMNS);
    if count == 0 {
        return format!("SELECT {} FROM {} WHERE 1 = 0", cols, quoted(T::TABLE));
    }
    let placeholders = vec!["?"; count].join(", ");
    format!(
        "SELECT {} FROM {} WHERE {} IN ({}) ORDER BY {}",
        cols,
        quoted(T::TABLE),
        quoted(column),
        placeholders,
        quoted(T::primary_key())
    )
}

/// INSERT every non-key column and return the full row.
pub fn insert_returning<T: Table>() -> String {
    let value_columns = &T::COLUMNS[1..];
    let placeholders = vec!["?"; value_columns.len()].join(", ");
    format!(
        "INSERT INTO {} ({}) VALUES ({}) RETURNING {}",
        quoted(T::TABLE),
        column_list(value_columns),
        placeholders,
        column_list(T::COLUMNS)
    )
}

/// DELETE by primary key.
pub fn delete_by_id<T: Table>() -> String {
    format!("DELETE FROM {} WHERE {} = ?", quoted(T::TABLE), quoted(T::primary_key()))
}

/// DELETE every row whose `column` equals the bound value.
pub fn delete_where<T: Table>(column: &str) -> String {
    format!("DELETE FROM {} WHERE {} = ?", quoted(T::TABLE), quoted(column))
}

pub fn count<T: Table>() -> String {
    format!("SELECT COUNT(*) FROM {}", quoted(T::TABLE))
}

/// SELECT 1 when a row with the bound primary key exists.
pub fn exists_by_id<T: Table>() -> String {
    format!(
        "SELECT EXISTS(SELECT 1 FROM {} WHERE {} = ?)",
        quoted(T::TABLE),
        quoted(T::primary_key())
    )
}
