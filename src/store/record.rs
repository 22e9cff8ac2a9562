use super::row::Row;
use super::schema::Table;

/// A strongly typed worksheet row.
///
/// Conversion happens only at the store boundary: `to_row` renders every
/// field as persisted text, `from_row` reads it back best-effort.
pub trait Record: Sized {
    const TABLE: Table;

    fn id(&self) -> i64;

    fn set_id(&mut self, id: i64);

    fn to_row(&self) -> Row;

    fn from_row(row: &Row) -> Self;
}
