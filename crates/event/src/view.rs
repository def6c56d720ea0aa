//! Accessors over a parsed event.
//!
//! [`EventView`] pairs one [`ParsedEvent`] with a [`FieldTable`] and decodes
//! only the columns a call needs. Whole-event and subset calls skip empty
//! columns; [`EventView::get_value`] reports them. Malformed columns abort
//! every call.
use serde::Serialize;
use serde_json::Value;
use tracing::trace;

use crate::error::EventError;
use crate::fields::{FieldTable, GEO_LOCATION};
use crate::path::{navigate, render_path, PathSegment};
use crate::record::ParsedEvent;
use crate::value::{DecodedValue, EventMap, ValueKind};

/// Read-only accessors for one event.
#[derive(Debug, Clone, Copy)]
pub struct EventView<'a> {
    event: &'a ParsedEvent,
    table: &'a FieldTable,
}

impl<'a> EventView<'a> {
    pub fn new(event: &'a ParsedEvent, table: &'a FieldTable) -> Self {
        Self { event, table }
    }

    pub fn table(&self) -> &'a FieldTable {
        self.table
    }

    fn raw(&self, index: usize) -> &'a str {
        self.event.get(index).unwrap_or("")
    }

    /// Decodes every non-empty column into one flat map.
    ///
    /// Contexts and unstruct columns contribute one key per derived schema
    /// key. When `contexts` and `derived_contexts` carry the same schema, the
    /// key holds the objects of both columns, `contexts` first. With `include_geo`, `geo_location` is added as `"<lat>,<lon>"`
    /// when both geo columns are non-empty.
    pub fn to_map(&self, include_geo: bool) -> Result<EventMap, EventError> {
        let mut out = EventMap::new();
        if include_geo {
            if let Some(location) = self.geo_location() {
                out.insert(GEO_LOCATION.to_string(), DecodedValue::String(location));
            }
        }
        for (index, spec) in self.table.specs().iter().enumerate() {
            let raw = self.raw(index);
            if raw.is_empty() {
                continue;
            }
            spec.kind.decode(&spec.name, raw)?.merge_into(&spec.name, &mut out);
        }
        Ok(out)
    }

    /// [`to_map`](Self::to_map) serialized as a JSON object with sorted keys.
    pub fn to_json(&self, include_geo: bool) -> Result<Vec<u8>, EventError> {
        to_json_bytes(&self.to_map(include_geo)?)
    }

    /// Decodes the single column `name`.
    ///
    /// Contexts and unstruct columns come back as
    /// [`DecodedValue::Group`].
    ///
    /// # Errors
    ///
    /// [`EventError::UnknownField`] if `name` is not a column,
    /// [`EventError::EmptyField`] if the column is empty, or the decode
    /// error of the column.
    pub fn get_value(&self, name: &str) -> Result<DecodedValue, EventError> {
        let index = self
            .table
            .index_of(name)
            .ok_or_else(|| EventError::UnknownField(name.to_string()))?;
        let raw = self.raw(index);
        if raw.is_empty() {
            return Err(EventError::EmptyField(name.to_string()));
        }
        self.decode_at(index, raw)
    }

    /// Decodes the named columns into one map, skipping empty ones.
    pub fn get_subset<I, S>(&self, names: I) -> Result<EventMap, EventError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut out = EventMap::new();
        for name in names {
            let name = name.as_ref();
            let index = self
                .table
                .index_of(name)
                .ok_or_else(|| EventError::UnknownField(name.to_string()))?;
            let raw = self.raw(index);
            if raw.is_empty() {
                continue;
            }
            self.decode_at(index, raw)?.merge_into(name, &mut out);
        }
        Ok(out)
    }

    /// [`get_subset`](Self::get_subset) serialized like [`to_json`](Self::to_json).
    pub fn get_subset_json<I, S>(&self, names: I) -> Result<Vec<u8>, EventError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        to_json_bytes(&self.get_subset(names)?)
    }

    /// Reads `path` inside the custom event carried by the unstruct column,
    /// without deriving its key.
    ///
    /// # Errors
    ///
    /// [`EventError::NotFound`] when the column is empty or the path does not
    /// resolve; [`EventError::Schema`] when the envelope is malformed.
    pub fn get_unstruct_path(&self, path: &[PathSegment]) -> Result<Value, EventError> {
        let not_found = || EventError::NotFound {
            path: render_path(path),
        };
        let raw = self
            .table
            .columns_of(ValueKind::Unstruct)
            .map(|index| self.raw(index))
            .find(|raw| !raw.is_empty())
            .ok_or_else(not_found)?;
        let data = schema::unstruct_data(raw)?;
        navigate(&data, path).cloned().ok_or_else(not_found)
    }

    /// Collects `path` from every context named `context_name` across all
    /// contexts columns.
    ///
    /// Empty columns and contexts where `path` does not resolve are skipped,
    /// so the result may be empty. An empty `path` returns whole context
    /// objects.
    pub fn get_context_path(
        &self,
        context_name: &str,
        path: &[PathSegment],
    ) -> Result<Vec<Value>, EventError> {
        let mut found = Vec::new();
        for index in self.table.columns_of(ValueKind::Contexts) {
            let raw = self.raw(index);
            if raw.is_empty() {
                continue;
            }
            let mut group = schema::shred_contexts(raw)?;
            let Some(objects) = group.swap_remove(context_name) else {
                continue;
            };
            for object in objects {
                let object = Value::Object(object);
                if path.is_empty() {
                    found.push(object);
                    continue;
                }
                match navigate(&object, path) {
                    Some(value) => found.push(value.clone()),
                    None => trace!(
                        context = context_name,
                        path = %render_path(path),
                        "context_path_unresolved"
                    ),
                }
            }
        }
        Ok(found)
    }

    fn decode_at(&self, index: usize, raw: &str) -> Result<DecodedValue, EventError> {
        match self.table.spec(index) {
            Some(spec) => spec.kind.decode(&spec.name, raw),
            None => Err(EventError::UnknownField(index.to_string())),
        }
    }

    fn geo_location(&self) -> Option<String> {
        let (lat, lon) = self.table.geo_columns()?;
        let (lat, lon) = (self.raw(lat), self.raw(lon));
        if lat.is_empty() || lon.is_empty() {
            return None;
        }
        Some(format!("{lat},{lon}"))
    }
}

fn to_json_bytes<T: Serialize>(value: &T) -> Result<Vec<u8>, EventError> {
    serde_json::to_vec(value).map_err(|err| EventError::Serialize(err.to_string()))
}
