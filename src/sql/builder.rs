//! Builds parameterized INSERT, SELECT, UPDATE, DELETE from a catalog resource.

use crate::config::Resource;
use crate::sql::BindValue;
use serde_json::{Map, Value};

/// Quote identifier with backticks (MySQL and SQLite; safe: only from the catalog).
fn quoted(s: &str) -> String {
    format!("`{}`", s.replace('`', "``"))
}

#[derive(Debug)]
pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<BindValue>,
}

impl QueryBuf {
    fn new() -> Self {
        QueryBuf {
            sql: String::new(),
            params: Vec::new(),
        }
    }

    fn push_param(&mut self, v: BindValue) -> &'static str {
        self.params.push(v);
        "?"
    }
}

/// SELECT * over the whole table.
pub fn select_all(resource: &Resource) -> QueryBuf {
    let mut q = QueryBuf::new();
    q.sql = format!("SELECT * FROM {}", quoted(resource.table_name));
    q
}

pub fn select_by_id(resource: &Resource, id: i64) -> QueryBuf {
    let mut q = QueryBuf::new();
    let ph = q.push_param(BindValue::I64(id));
    q.sql = format!(
        "SELECT * FROM {} WHERE {} = {}",
        quoted(resource.table_name),
        quoted(resource.key_column),
        ph
    );
    q
}

/// INSERT over every writable column; a column missing from the body binds NULL.
pub fn insert(resource: &Resource, body: &Map<String, Value>) -> QueryBuf {
    let mut q = QueryBuf::new();
    let mut cols = Vec::with_capacity(resource.columns.len());
    let mut placeholders = Vec::with_capacity(resource.columns.len());
    for name in resource.columns {
        let val = body.get(*name).map(BindValue::from_json).unwrap_or(BindValue::Null);
        placeholders.push(q.push_param(val));
        cols.push(quoted(name));
    }
    q.sql = format!(
        "INSERT INTO {} ({}) VALUES ({})",
        quoted(resource.table_name),
        cols.join(", "),
        placeholders.join(", ")
    );
    q
}

/// UPDATE by id: full replace, SET every writable column (missing ones become NULL).
pub fn update(resource: &Resource, id: i64, body: &Map<String, Value>) -> QueryBuf {
    let mut q = QueryBuf::new();
    let mut sets = Vec::with_capacity(resource.columns.len());
    for name in resource.columns {
        let val = body.get(*name).map(BindValue::from_json).unwrap_or(BindValue::Null);
        let ph = q.push_param(val);
        sets.push(format!("{} = {}", quoted(name), ph));
    }
    let id_ph = q.push_param(BindValue::I64(id));
    q.sql = format!(
        "UPDATE {} SET {} WHERE {} = {}",
        quoted(resource.table_name),
        sets.join(", "),
        quoted(resource.key_column),
        id_ph
    );
    q
}

pub fn delete(resource: &Resource, id: i64) -> QueryBuf {
    let mut q = QueryBuf::new();
    let ph = q.push_param(BindValue::I64(id));
    q.sql = format!(
        "DELETE FROM {} WHERE {} = {}",
        quoted(resource.table_name),
        quoted(resource.key_column),
        ph
    );
    q
}
