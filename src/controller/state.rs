use crate::domain::types::RecordId;
use crate::schema::Entity;

/// Whether the dialog creates a new record or updates an existing one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditMode {
    Create,
    Update(RecordId),
}

/// Which dialog, if any, is open. Exactly one variant holds at a time.
#[derive(Clone, Debug, PartialEq)]
pub enum Dialog<F> {
    Closed,
    Editing { mode: EditMode, draft: F },
    ConfirmingDelete { id: RecordId },
}

/// A mutation confirmed by the server whose list refetch is outstanding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mutation {
    Created,
    Updated(RecordId),
    Deleted(RecordId),
}

/// The single round trip a controller may have in flight.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    LoadingList,
    LoadingRecord(RecordId),
    Saving(EditMode),
    Deleting(RecordId),
    Refreshing(Mutation),
}

/// Coarse dialog state, as named by the screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Editing,
    ConfirmingDelete,
}

/// Everything one entity screen knows. Dropped when the screen unmounts.
#[derive(Clone, Debug, PartialEq)]
pub struct ControllerState<E: Entity> {
    pub(crate) records: Vec<E>,
    pub(crate) dialog: Dialog<E::Form>,
    pub(crate) busy: Option<Operation>,
    pub(crate) error_message: Option<String>,
    pub(crate) success_message: Option<String>,
}

impl<E: Entity> Default for ControllerState<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Entity> ControllerState<E> {
    /// Idle controller with an empty list.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            dialog: Dialog::Closed,
            busy: None,
            error_message: None,
            success_message: None,
        }
    }

    /// Records from the last successful `list()`, in server order.
    pub fn records(&self) -> &[E] {
        &self.records
    }

    pub fn dialog(&self) -> &Dialog<E::Form> {
        &self.dialog
    }

    pub fn busy(&self) -> Option<Operation> {
        self.busy
    }

    pub fn is_busy(&self) -> bool {
        self.busy.is_some()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn success_message(&self) -> Option<&str> {
        self.success_message.as_deref()
    }

    pub fn phase(&self) -> Phase {
        match self.dialog {
            Dialog::Closed => Phase::Idle,
            Dialog::Editing { .. } => Phase::Editing,
            Dialog::ConfirmingDelete { .. } => Phase::ConfirmingDelete,
        }
    }

    /// `true` while the dialog updates an existing record, `false` for create.
    pub fn is_editing(&self) -> bool {
        matches!(
            self.dialog,
            Dialog::Editing {
                mode: EditMode::Update(_),
                ..
            }
        )
    }

    pub fn edit_mode(&self) -> Option<EditMode> {
        match self.dialog {
            Dialog::Editing { mode, .. } => Some(mode),
            _ => None,
        }
    }

    pub fn draft(&self) -> Option<&E::Form> {
        match &self.dialog {
            Dialog::Editing { draft, .. } => Some(draft),
            _ => None,
        }
    }

    pub fn pending_delete_id(&self) -> Option<RecordId> {
        match self.dialog {
            Dialog::ConfirmingDelete { id } => Some(id),
            _ => None,
        }
    }

    /// Set while the mount/refresh fetch or a post-mutation refetch runs.
    pub fn list_is_loading(&self) -> bool {
        matches!(
            self.busy,
            Some(Operation::LoadingList | Operation::Refreshing(_))
        )
    }

    pub(crate) fn clear_messages(&mut self) {
        self.error_message = None;
        self.success_message = None;
    }

    pub(crate) fn fail(&mut self, message: impl Into<String>) {
        self.success_message = None;
        self.error_message = Some(message.into());
    }

    pub(crate) fn succeed(&mut self, message: impl Into<String>) {
        self.error_message = None;
        self.success_message = Some(message.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::venta::Venta;
    use crate::forms::venta::VentaForm;

    #[test]
    fn new_controller_is_idle_and_empty() {
        let state = ControllerState::<Venta>::new();

        assert_eq!(state.phase(), Phase::Idle);
        assert!(state.records().is_empty());
        assert!(!state.is_busy());
        assert!(!state.list_is_loading());
        assert_eq!(state.draft(), None);
        assert_eq!(state.pending_delete_id(), None);
    }

    #[test]
    fn messages_are_mutually_exclusive() {
        let mut state = ControllerState::<Venta>::new();

        state.succeed("ok");
        state.fail("mal");
        assert_eq!(state.success_message(), None);
        assert_eq!(state.error_message(), Some("mal"));

        state.succeed("ok");
        assert_eq!(state.error_message(), None);
        assert_eq!(state.success_message(), Some("ok"));
    }

    #[test]
    fn is_editing_distinguishes_update_from_create() {
        let mut state = ControllerState::<Venta>::new();
        state.dialog = Dialog::Editing {
            mode: EditMode::Create,
            draft: VentaForm::default(),
        };
        assert_eq!(state.phase(), Phase::Editing);
        assert!(!state.is_editing());

        state.dialog = Dialog::Editing {
            mode: EditMode::Update(RecordId::new(2).expect("valid id")),
            draft: VentaForm::default(),
        };
        assert!(state.is_editing());
    }
}
