use netview_types::ObjectList;
use serde::Serialize;
use std::collections::HashMap;
use std::io::Read;
use std::marker::PhantomData;

use crate::kind::ResourceKind;
use crate::sort::{SortBy, sort_objects};
use crate::table::{TableData, TableRenderable, render_table};
use crate::{Error, Result};

/// Output of a transform: one response, or one per list element
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Transformed<R> {
    Single(R),
    List(Vec<R>),
}

impl<R> Transformed<R> {
    pub fn into_vec(self) -> Vec<R> {
        match self {
            Transformed::Single(r) => vec![r],
            Transformed::List(items) => items,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Transformed::Single(_) => 1,
            Transformed::List(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<R: TableRenderable> Transformed<R> {
    pub fn to_table(&self, max_column_width: usize) -> Option<TableData> {
        match self {
            Transformed::Single(r) => render_table(std::slice::from_ref(r), max_column_width),
            Transformed::List(items) => render_table(items, max_column_width),
        }
    }
}

/// Decode → sort → transform pipeline bound to one resource kind
#[derive(Debug, Clone, Copy, Default)]
pub struct Factory<K: ResourceKind> {
    _kind: PhantomData<K>,
}

impl<K: ResourceKind> Factory<K> {
    pub fn new() -> Self {
        Self { _kind: PhantomData }
    }

    /// Transform a JSON byte stream.
    ///
    /// With `single` the stream holds one object; otherwise it holds a list
    /// container whose items are ordered by `options["sort-by"]` first.
    pub fn transform<Rd: Read>(
        &self,
        reader: Rd,
        single: bool,
        options: &HashMap<String, String>,
    ) -> Result<Transformed<K::Response>> {
        let value: serde_json::Value = serde_json::from_reader(reader)?;

        if single {
            let object = decode_object::<K>(value)?;
            tracing::debug!(kind = K::KIND, "transforming single object");
            return Ok(Transformed::Single(K::transform_one(object)?));
        }

        let mut list = decode_list::<K>(value)?;
        let sort_by = SortBy::from_options(options);
        tracing::debug!(
            kind = K::LIST_KIND,
            items = list.items.len(),
            sort_by = ?sort_by,
            "sorting list"
        );
        sort_objects(&mut list.items, sort_by);

        Ok(Transformed::List(K::transform_many(list.items)?))
    }
}

fn check_kind(value: &serde_json::Value, expected: &str) -> Result<()> {
    match value.get("kind").and_then(|k| k.as_str()) {
        Some(found) if !found.is_empty() && found != expected => {
            Err(Error::unexpected_kind(expected, found))
        }
        _ => Ok(()),
    }
}

fn decode_object<K: ResourceKind>(value: serde_json::Value) -> Result<K::Object> {
    check_kind(&value, K::KIND)?;
    Ok(serde_json::from_value(value)?)
}

fn decode_list<K: ResourceKind>(value: serde_json::Value) -> Result<ObjectList<K::Object>> {
    check_kind(&value, K::LIST_KIND)?;
    if let Some(items) = value.get("items").and_then(|i| i.as_array()) {
        for item in items {
            check_kind(item, K::KIND)?;
        }
    }
    Ok(serde_json::from_value(value)?)
}
