//! Shared helpers for integration tests.
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use serde_json::Value;
use tienda_admin::domain::types::RecordId;
use tienda_admin::repository::errors::{RepositoryError, RepositoryResult};
use tienda_admin::repository::{RecordReader, RecordWriter};
use tienda_admin::schema::Entity;

#[derive(Default)]
struct Store {
    tables: HashMap<&'static str, Vec<Value>>,
    calls: Vec<String>,
    failing: HashSet<String>,
}

/// In-memory stand-in for the store API, shared between clones.
///
/// Records are kept as JSON so one fixture serves every entity. Every call is
/// logged as `"<action> <resource>"` (e.g. `"remove ventas"`).
#[derive(Clone, Default)]
pub struct FixtureRepository {
    store: Rc<RefCell<Store>>,
}

impl FixtureRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the collection of `E`.
    pub fn with<E: Entity>(self, records: Vec<E>) -> Self {
        let values = records
            .iter()
            .map(|record| with_id(record, record.id()))
            .collect();
        self.store
            .borrow_mut()
            .tables
            .insert(E::SCHEMA.resource, values);
        self
    }

    /// Makes every later call named `call` (e.g. `"remove proveedores"`) fail.
    pub fn fail_on(&self, call: &str) {
        self.store.borrow_mut().failing.insert(call.to_string());
    }

    pub fn calls(&self) -> Vec<String> {
        self.store.borrow().calls.clone()
    }

    pub fn count(&self, call: &str) -> usize {
        self.store
            .borrow()
            .calls
            .iter()
            .filter(|logged| logged.as_str() == call)
            .count()
    }

    pub fn records<E: Entity>(&self) -> Vec<E> {
        self.store
            .borrow()
            .tables
            .get(E::SCHEMA.resource)
            .map(|values| values.iter().map(decode::<E>).collect())
            .unwrap_or_default()
    }

    fn enter<E: Entity>(&self, action: &str) -> RepositoryResult<()> {
        let call = format!("{action} {}", E::SCHEMA.resource);
        let mut store = self.store.borrow_mut();
        let failing = store.failing.contains(&call);
        store.calls.push(call);
        if failing {
            Err(RepositoryError::Status {
                status: 500,
                body: "fixture failure".to_string(),
            })
        } else {
            Ok(())
        }
    }
}

fn id_field<E: Entity>() -> &'static str {
    E::SCHEMA.fields[0].name
}

fn with_id<E: Entity>(record: &E, id: i32) -> Value {
    let mut value = serde_json::to_value(record).expect("record serializes");
    value[id_field::<E>()] = Value::from(id);
    value
}

fn decode<E: Entity>(value: &Value) -> E {
    serde_json::from_value(value.clone()).expect("fixture record decodes")
}

impl<E: Entity> RecordReader<E> for FixtureRepository {
    fn list(&self) -> RepositoryResult<Vec<E>> {
        self.enter::<E>("list")?;
        Ok(self.records())
    }

    fn get(&self, id: RecordId) -> RepositoryResult<E> {
        self.enter::<E>("get")?;
        self.records::<E>()
            .into_iter()
            .find(|record| record.id() == id.get())
            .ok_or(RepositoryError::NotFound)
    }
}

impl<E: Entity> RecordWriter<E> for FixtureRepository {
    fn create(&self, record: &E) -> RepositoryResult<E> {
        self.enter::<E>("create")?;
        let mut store = self.store.borrow_mut();
        let table = store.tables.entry(E::SCHEMA.resource).or_default();
        let next_id = table
            .iter()
            .map(|value| decode::<E>(value).id())
            .max()
            .unwrap_or(0)
            + 1;
        let value = with_id(record, next_id);
        table.push(value.clone());
        Ok(decode(&value))
    }

    fn update(&self, id: RecordId, record: &E) -> RepositoryResult<E> {
        self.enter::<E>("update")?;
        let mut store = self.store.borrow_mut();
        let table = store.tables.entry(E::SCHEMA.resource).or_default();
        let slot = table
            .iter_mut()
            .find(|value| decode::<E>(value).id() == id.get())
            .ok_or(RepositoryError::NotFound)?;
        *slot = with_id(record, id.get());
        Ok(decode(slot))
    }

    fn remove(&self, id: RecordId) -> RepositoryResult<()> {
        self.enter::<E>("remove")?;
        let mut store = self.store.borrow_mut();
        let table = store.tables.entry(E::SCHEMA.resource).or_default();
        let before = table.len();
        table.retain(|value| decode::<E>(value).id() != id.get());
        if table.len() == before {
            Err(RepositoryError::NotFound)
        } else {
            Ok(())
        }
    }
}

pub fn id(value: i32) -> RecordId {
    RecordId::new(value).expect("valid id")
}
