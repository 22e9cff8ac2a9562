use super::schema::COL_ID;
use std::collections::BTreeMap;

/// One worksheet row as a column name → text mapping.
///
/// Missing columns read as the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row(BTreeMap<String, String>);

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a row from positional values. Short rows are padded with `""`,
    /// surplus values are dropped.
    pub fn from_values(columns: &[&str], values: &[String]) -> Self {
        let map = columns
            .iter()
            .enumerate()
            .map(|(i, col)| (col.to_string(), values.get(i).cloned().unwrap_or_default()))
            .collect();
        Self(map)
    }

    /// Positional values following `columns`.
    pub fn to_values(&self, columns: &[&str]) -> Vec<String> {
        columns.iter().map(|c| self.get(c).to_string()).collect()
    }

    pub fn get(&self, column: &str) -> &str {
        self.0.get(column).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, column: &str, value: impl Into<String>) {
        self.0.insert(column.to_string(), value.into());
    }

    pub fn with(mut self, column: &str, value: impl Into<String>) -> Self {
        self.set(column, value);
        self
    }

    pub fn contains(&self, column: &str) -> bool {
        self.0.contains_key(column)
    }

    /// Numeric `ID` of the row, `None` when the cell is blank or not a number.
    pub fn id(&self) -> Option<i64> {
        parse_id(self.get(COL_ID))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Row {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Parse a raw `ID` cell.
///
/// Integers and integral floats (`"3"`, `" 3 "`, `"3.0"`) keep their value;
/// blank, non-numeric or out-of-range cells (`"1e30"`) have no identifier.
pub fn parse_id(raw: &str) -> Option<i64> {
    let s = raw.trim();
    if let Ok(n) = s.parse::<i64>() {
        return Some(n);
    }
    match s.parse::<f64>() {
        Ok(f) if f.is_finite() && f >= i64::MIN as f64 && f < i64::MAX as f64 => {
            Some(f.trunc() as i64)
        }
        _ => None,
    }
}

/// Like [`parse_id`], counting blank or non-numeric cells as 0.
pub fn coerce_id(raw: &str) -> i64 {
    parse_id(raw).unwrap_or(0)
}
