//! Entity clients: typed access to the remote collections.
//!
//! Services depend on [`RecordReader`] and [`RecordWriter`] only, so the HTTP
//! client, test doubles and fixtures are interchangeable.

use crate::domain::types::RecordId;
use crate::repository::errors::RepositoryResult;
use crate::schema::Entity;

pub mod errors;
#[cfg(feature = "client")]
pub mod http;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;

#[cfg(feature = "client")]
pub use http::HttpRepository;

pub trait RecordReader<E: Entity> {
    /// `GET /{resource}`: the whole collection, in server order.
    fn list(&self) -> RepositoryResult<Vec<E>>;
    /// `GET /{resource}/{id}`.
    fn get(&self, id: RecordId) -> RepositoryResult<E>;
}

pub trait RecordWriter<E: Entity> {
    /// `POST /{resource}`; the payload carries no id.
    fn create(&self, record: &E) -> RepositoryResult<E>;
    /// `PUT /{resource}/{id}` with the full record.
    fn update(&self, id: RecordId, record: &E) -> RepositoryResult<E>;
    /// `DELETE /{resource}/{id}`.
    fn remove(&self, id: RecordId) -> RepositoryResult<()>;
}
