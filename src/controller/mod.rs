//! Generic CRUD controller shared by every entity screen.
//!
//! The controller is a plain value ([`ControllerState`]) plus a pure
//! transition function ([`update`]). Network calls are requested through
//! [`Effect`]s and their outcomes come back as completion [`Intent`]s, so the
//! whole flow can be exercised without a rendering surface or a server.

use thiserror::Error;

use crate::repository::errors::RepositoryError;

pub mod intent;
pub mod state;
pub mod update;

pub use intent::{Effect, Intent};
pub use state::{ControllerState, Dialog, EditMode, Mutation, Operation, Phase};
pub use update::update;

/// Failure of a remote call as seen by the controller.
///
/// Carries no detail on purpose: the operator only ever gets the generic
/// per-entity message. The structured cause is logged by the driver.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[error("request failed")]
pub struct RequestFailed;

impl From<RepositoryError> for RequestFailed {
    fn from(_: RepositoryError) -> Self {
        RequestFailed
    }
}
