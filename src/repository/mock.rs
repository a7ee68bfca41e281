//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::types::RecordId;
use crate::repository::errors::RepositoryResult;
use crate::repository::{RecordReader, RecordWriter};
use crate::schema::Entity;

mock! {
    pub Repository<E: Entity> {}

    impl<E: Entity> RecordReader<E> for Repository<E> {
        fn list(&self) -> RepositoryResult<Vec<E>>;
        fn get(&self, id: RecordId) -> RepositoryResult<E>;
    }

    impl<E: Entity> RecordWriter<E> for Repository<E> {
        fn create(&self, record: &E) -> RepositoryResult<E>;
        fn update(&self, id: RecordId, record: &E) -> RepositoryResult<E>;
        fn remove(&self, id: RecordId) -> RepositoryResult<()>;
    }
}
