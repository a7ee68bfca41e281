use crate::controller::RequestFailed;
use crate::domain::types::RecordId;
use crate::schema::Entity;

/// Inputs of the transition function.
///
/// The first group comes from the operator; the second reports the outcome of
/// the [`Effect`] the controller asked for last.
#[derive(Clone, Debug, PartialEq)]
pub enum Intent<E: Entity> {
    /// Screen shown for the first time.
    Mount,
    Refresh,
    OpenCreate,
    OpenEdit(RecordId),
    EditField {
        name: String,
        value: String,
    },
    Submit,
    CancelEdit,
    OpenDelete(RecordId),
    ConfirmDelete,
    CancelDelete,
    DismissMessage,

    ListLoaded(Result<Vec<E>, RequestFailed>),
    RecordLoaded(RecordId, Result<E, RequestFailed>),
    Saved(Result<E, RequestFailed>),
    Removed(RecordId, Result<(), RequestFailed>),
}

impl<E: Entity> Intent<E> {
    pub fn edit_field(name: impl Into<String>, value: impl Into<String>) -> Self {
        Intent::EditField {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Short name used in log lines.
    pub fn label(&self) -> &'static str {
        match self {
            Intent::Mount => "mount",
            Intent::Refresh => "refresh",
            Intent::OpenCreate => "open_create",
            Intent::OpenEdit(_) => "open_edit",
            Intent::EditField { .. } => "edit_field",
            Intent::Submit => "submit",
            Intent::CancelEdit => "cancel_edit",
            Intent::OpenDelete(_) => "open_delete",
            Intent::ConfirmDelete => "confirm_delete",
            Intent::CancelDelete => "cancel_delete",
            Intent::DismissMessage => "dismiss_message",
            Intent::ListLoaded(_) => "list_loaded",
            Intent::RecordLoaded(..) => "record_loaded",
            Intent::Saved(_) => "saved",
            Intent::Removed(..) => "removed",
        }
    }
}

/// Remote call requested by a transition. At most one per intent.
#[derive(Clone, Debug, PartialEq)]
pub enum Effect<E: Entity> {
    None,
    FetchList,
    FetchRecord(RecordId),
    Create(E),
    Update(RecordId, E),
    Remove(RecordId),
}

impl<E: Entity> Effect<E> {
    pub fn is_none(&self) -> bool {
        matches!(self, Effect::None)
    }
}
