//! Drives a [`ControllerState`] against an entity client.

use crate::controller::{ControllerState, Effect, Intent, RequestFailed, update};
use crate::repository::errors::RepositoryError;
use crate::repository::{RecordReader, RecordWriter};
use crate::schema::Entity;

/// Executes one effect and returns the completion to feed back, if any.
///
/// Failures are logged with their structured cause before being collapsed
/// into [`RequestFailed`].
pub fn perform<E, R>(repo: &R, effect: Effect<E>) -> Option<Intent<E>>
where
    E: Entity,
    R: RecordReader<E> + RecordWriter<E> + ?Sized,
{
    let resource = E::SCHEMA.resource;
    match effect {
        Effect::None => None,
        Effect::FetchList => Some(Intent::ListLoaded(
            repo.list()
                .map_err(|err| log_failure(err, "list", resource)),
        )),
        Effect::FetchRecord(id) => Some(Intent::RecordLoaded(
            id,
            repo.get(id)
                .map_err(|err| log_failure(err, "load", resource)),
        )),
        Effect::Create(record) => Some(Intent::Saved(
            repo.create(&record)
                .map_err(|err| log_failure(err, "create", resource)),
        )),
        Effect::Update(id, record) => Some(Intent::Saved(
            repo.update(id, &record)
                .map_err(|err| log_failure(err, "update", resource)),
        )),
        Effect::Remove(id) => Some(Intent::Removed(
            id,
            repo.remove(id)
                .map_err(|err| log_failure(err, "delete", resource)),
        )),
    }
}

fn log_failure(err: RepositoryError, action: &str, resource: &str) -> RequestFailed {
    log::error!("Failed to {action} {resource}: {err}");
    RequestFailed::from(err)
}

/// One mounted entity screen: the controller state plus the client it talks to.
pub struct CrudService<E: Entity, R> {
    repo: R,
    state: ControllerState<E>,
}

impl<E, R> CrudService<E, R>
where
    E: Entity,
    R: RecordReader<E> + RecordWriter<E>,
{
    /// Creates the controller and performs the initial `list()`.
    pub fn mount(repo: R) -> Self {
        let mut service = Self {
            repo,
            state: ControllerState::new(),
        };
        service.dispatch(Intent::Mount);
        service
    }

    /// Runs `intent` and every completion it triggers until the controller
    /// has nothing left to ask for.
    pub fn dispatch(&mut self, intent: Intent<E>) {
        log::debug!("{}: {}", E::SCHEMA.resource, intent.label());
        let mut effect = update(&mut self.state, intent);
        while let Some(completion) = perform(&self.repo, effect) {
            effect = update(&mut self.state, completion);
        }
    }

    pub fn state(&self) -> &ControllerState<E> {
        &self.state
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::Phase;
    use crate::domain::producto::Producto;
    use crate::domain::proveedor::Proveedor;
    use crate::domain::types::RecordId;
    use crate::repository::mock::MockRepository;

    fn id(value: i32) -> RecordId {
        RecordId::new(value).expect("valid id")
    }

    fn producto(id_producto: i32, precio: f64) -> Producto {
        Producto {
            id_producto,
            descripcion: "Leche entera".to_string(),
            precio,
            id_categoria: 1,
            id_proveedor: 2,
        }
    }

    fn proveedor(id_proveedor: i32) -> Proveedor {
        Proveedor {
            id_proveedor,
            nombre: "Distribuidora Sur".to_string(),
            direccion: "Av. Central 10".to_string(),
            telefono: "555-0100".to_string(),
        }
    }

    /// Mounting issues exactly one list call.
    #[test]
    fn mount_lists_once() {
        let mut repo = MockRepository::<Producto>::new();
        repo.expect_list()
            .times(1)
            .returning(|| Ok(vec![producto(3, 12.5)]));

        let service = CrudService::mount(repo);

        assert_eq!(service.state().records().len(), 1);
        assert!(!service.state().list_is_loading());
    }

    /// A negative price is rejected before `update()` is ever called.
    #[test]
    fn negative_price_never_reaches_update() {
        let mut repo = MockRepository::<Producto>::new();
        repo.expect_list()
            .times(1)
            .returning(|| Ok(vec![producto(3, 12.5)]));
        repo.expect_get()
            .withf(|requested| requested.get() == 3)
            .times(1)
            .returning(|_| Ok(producto(3, 12.5)));
        repo.expect_update().times(0);

        let mut service = CrudService::mount(repo);
        service.dispatch(Intent::OpenEdit(id(3)));
        service.dispatch(Intent::edit_field("precio", "-1"));
        service.dispatch(Intent::Submit);

        assert_eq!(service.state().phase(), Phase::Editing);
        assert_eq!(
            service.state().error_message(),
            Some("El precio debe ser un valor positivo.")
        );
    }

    /// A rejected delete keeps the confirmation dialog and the list.
    #[test]
    fn rejected_delete_keeps_confirmation() {
        let mut repo = MockRepository::<Proveedor>::new();
        repo.expect_list()
            .times(1)
            .returning(|| Ok(vec![proveedor(7)]));
        repo.expect_remove()
            .withf(|requested| requested.get() == 7)
            .times(1)
            .returning(|_| Err(RepositoryError::Status {
                status: 409,
                body: "referenced by productos".to_string(),
            }));

        let mut service = CrudService::mount(repo);
        service.dispatch(Intent::OpenDelete(id(7)));
        service.dispatch(Intent::ConfirmDelete);

        assert_eq!(service.state().pending_delete_id(), Some(id(7)));
        assert_eq!(
            service.state().error_message(),
            Some("Error al eliminar el proveedor.")
        );
        assert_eq!(service.state().records(), &[proveedor(7)]);
    }

    /// A successful create triggers exactly one extra list call.
    #[test]
    fn create_refetches_once() {
        let mut repo = MockRepository::<Proveedor>::new();
        let mut calls = 0;
        repo.expect_list().times(2).returning(move || {
            calls += 1;
            if calls == 1 {
                Ok(vec![])
            } else {
                Ok(vec![proveedor(1)])
            }
        });
        repo.expect_create()
            .withf(|record| record.id_proveedor == 0 && record.nombre == "Distribuidora Sur")
            .times(1)
            .returning(|record| {
                let mut saved = record.clone();
                saved.id_proveedor = 1;
                Ok(saved)
            });

        let mut service = CrudService::mount(repo);
        service.dispatch(Intent::OpenCreate);
        service.dispatch(Intent::edit_field("nombre", "Distribuidora Sur"));
        service.dispatch(Intent::edit_field("direccion", "Av. Central 10"));
        service.dispatch(Intent::edit_field("telefono", "555-0100"));
        service.dispatch(Intent::Submit);

        assert_eq!(service.state().phase(), Phase::Idle);
        assert_eq!(service.state().records(), &[proveedor(1)]);
        assert_eq!(
            service.state().success_message(),
            Some("Proveedor agregado con éxito.")
        );
    }

    /// Cancelling issues no calls beyond the initial list.
    #[test]
    fn cancel_issues_no_calls() {
        let mut repo = MockRepository::<Proveedor>::new();
        repo.expect_list().times(1).returning(|| Ok(vec![proveedor(7)]));
        repo.expect_get().times(0);
        repo.expect_create().times(0);
        repo.expect_update().times(0);
        repo.expect_remove().times(0);

        let mut service = CrudService::mount(repo);
        service.dispatch(Intent::OpenCreate);
        service.dispatch(Intent::CancelEdit);
        service.dispatch(Intent::OpenDelete(id(7)));
        service.dispatch(Intent::CancelDelete);

        assert_eq!(service.state().phase(), Phase::Idle);
        assert_eq!(service.state().error_message(), None);
        assert_eq!(service.state().success_message(), None);
    }
}
