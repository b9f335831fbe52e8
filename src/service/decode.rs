//! Row to JSON decoding, one type cascade per driver.

use serde_json::{Map, Value};
use sqlx::mysql::MySqlRow;
use sqlx::sqlite::SqliteRow;
use sqlx::{Column, Row, TypeInfo};

pub fn mysql_row_to_json(row: &MySqlRow) -> Value {
    let mut map = Map::new();
    for col in row.columns() {
        let name = col.name();
        let v = match col.type_info().name() {
            "DECIMAL" => decimal_cell(row, name),
            "JSON" => json_cell(row, name),
            _ => mysql_cell_to_value(row, name),
        };
        map.insert(name.to_string(), v);
    }
    Value::Object(map)
}

pub fn sqlite_row_to_json(row: &SqliteRow) -> Value {
    let mut map = Map::new();
    for col in row.columns() {
        let name = col.name();
        map.insert(name.to_string(), sqlite_cell_to_value(row, name));
    }
    Value::Object(map)
}

/// DECIMAL arrives as its exact decimal text.
fn decimal_cell(row: &MySqlRow, name: &str) -> Value {
    match row.try_get_unchecked::<Option<String>, _>(name) {
        Ok(Some(s)) => decimal_to_value(&s),
        _ => Value::Null,
    }
}

fn json_cell(row: &MySqlRow, name: &str) -> Value {
    match row.try_get_unchecked::<Option<String>, _>(name) {
        Ok(Some(s)) => serde_json::from_str(&s).unwrap_or(Value::String(s)),
        _ => Value::Null,
    }
}

/// Numeric text becomes a JSON number; anything serde_json cannot represent stays text.
pub(crate) fn decimal_to_value(s: &str) -> Value {
    match s.trim().parse::<serde_json::Number>() {
        Ok(n) => Value::Number(n),
        Err(_) => Value::String(s.to_string()),
    }
}

fn mysql_cell_to_value(row: &MySqlRow, name: &str) -> Value {
    // Signed TINYINT through BIGINT (BOOLEAN included) decode as i64; UNSIGNED, YEAR and BIT as u64.
    if let Ok(Some(n)) = row.try_get::<Option<i64>, _>(name) {
        return Value::Number(n.into());
    }
    if let Ok(Some(n)) = row.try_get::<Option<u64>, _>(name) {
        return Value::Number(n.into());
    }
    if let Ok(Some(n)) = row.try_get::<Option<f64>, _>(name) {
        if let Some(n) = serde_json::Number::from_f64(n) {
            return Value::Number(n);
        }
    }
    if let Ok(Some(d)) = row.try_get::<Option<chrono::DateTime<chrono::Utc>>, _>(name) {
        return Value::String(d.to_rfc3339());
    }
    if let Ok(Some(d)) = row.try_get::<Option<chrono::NaiveDateTime>, _>(name) {
        return Value::String(d.format("%Y-%m-%dT%H:%M:%S%.f").to_string());
    }
    if let Ok(Some(d)) = row.try_get::<Option<chrono::NaiveDate>, _>(name) {
        return Value::String(d.format("%Y-%m-%d").to_string());
    }
    if let Ok(Some(t)) = row.try_get::<Option<chrono::NaiveTime>, _>(name) {
        return Value::String(t.format("%H:%M:%S%.f").to_string());
    }
    if let Ok(Some(s)) = row.try_get::<Option<String>, _>(name) {
        return Value::String(s);
    }
    if let Ok(Some(bytes)) = row.try_get::<Option<Vec<u8>>, _>(name) {
        return Value::String(String::from_utf8_lossy(&bytes).into_owned());
    }
    Value::Null
}

fn sqlite_cell_to_value(row: &SqliteRow, name: &str) -> Value {
    if let Ok(Some(n)) = row.try_get::<Option<i64>, _>(name) {
        return Value::Number(n.into());
    }
    if let Ok(Some(n)) = row.try_get::<Option<f64>, _>(name) {
        if let Some(n) = serde_json::Number::from_f64(n) {
            return Value::Number(n);
        }
    }
    if let Ok(Some(s)) = row.try_get::<Option<String>, _>(name) {
        return Value::String(s);
    }
    if let Ok(Some(bytes)) = row.try_get::<Option<Vec<u8>>, _>(name) {
        return Value::String(String::from_utf8_lossy(&bytes).into_owned());
    }
    Value::Null
}
