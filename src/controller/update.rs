use crate::controller::intent::{Effect, Intent};
use crate::controller::state::{ControllerState, Dialog, EditMode, Mutation, Operation};
use crate::controller::RequestFailed;
use crate::domain::types::RecordId;
use crate::forms::{EntityForm, FormError};
use crate::schema::{Entity, EntitySchema};

/// Applies one intent to the controller and returns the remote call to issue.
///
/// Intents that would start a second round trip while one is in flight are
/// ignored. Completions that do not match the operation in flight are
/// dropped.
pub fn update<E: Entity>(state: &mut ControllerState<E>, intent: Intent<E>) -> Effect<E> {
    let label = intent.label();
    match intent {
        Intent::Mount | Intent::Refresh => refresh(state, label),
        Intent::OpenCreate => open_create(state),
        Intent::OpenEdit(id) => open_edit(state, id, label),
        Intent::EditField { name, value } => edit_field(state, &name, &value),
        Intent::Submit => submit(state, label),
        Intent::CancelEdit => {
            if matches!(state.dialog, Dialog::Editing { .. }) {
                state.dialog = Dialog::Closed;
                state.clear_messages();
            }
            Effect::None
        }
        Intent::OpenDelete(id) => open_delete(state, id),
        Intent::ConfirmDelete => confirm_delete(state, label),
        Intent::CancelDelete => {
            if matches!(state.dialog, Dialog::ConfirmingDelete { .. }) {
                state.dialog = Dialog::Closed;
                state.clear_messages();
            }
            Effect::None
        }
        Intent::DismissMessage => {
            state.clear_messages();
            Effect::None
        }
        Intent::ListLoaded(result) => list_loaded(state, result),
        Intent::RecordLoaded(id, result) => record_loaded(state, id, result),
        Intent::Saved(result) => saved(state, result),
        Intent::Removed(id, result) => removed(state, id, result),
    }
}

fn schema<E: Entity>() -> &'static EntitySchema {
    E::SCHEMA
}

fn ignore_while_busy<E: Entity>(state: &ControllerState<E>, label: &str) -> bool {
    match state.busy {
        Some(operation) => {
            log::debug!(
                "Ignoring {label} on {}: {operation:?} in flight",
                schema::<E>().resource
            );
            true
        }
        None => false,
    }
}

/// Opening a dialog is refused while another is open or while any operation
/// other than a plain list load is in flight. A pending save or delete closes
/// the dialog that matches it, so a fresh one must not open underneath.
fn dialog_available<E: Entity>(state: &ControllerState<E>) -> bool {
    matches!(state.dialog, Dialog::Closed)
        && matches!(state.busy, None | Some(Operation::LoadingList))
}

fn refresh<E: Entity>(state: &mut ControllerState<E>, label: &str) -> Effect<E> {
    if ignore_while_busy(state, label) {
        return Effect::None;
    }
    state.clear_messages();
    state.busy = Some(Operation::LoadingList);
    Effect::FetchList
}

fn open_create<E: Entity>(state: &mut ControllerState<E>) -> Effect<E> {
    if !dialog_available(state) {
        return Effect::None;
    }
    state.clear_messages();
    state.dialog = Dialog::Editing {
        mode: EditMode::Create,
        draft: E::Form::default(),
    };
    Effect::None
}

fn open_edit<E: Entity>(state: &mut ControllerState<E>, id: RecordId, label: &str) -> Effect<E> {
    if ignore_while_busy(state, label) || !dialog_available(state) {
        return Effect::None;
    }
    state.clear_messages();
    state.busy = Some(Operation::LoadingRecord(id));
    Effect::FetchRecord(id)
}

fn edit_field<E: Entity>(state: &mut ControllerState<E>, name: &str, value: &str) -> Effect<E> {
    if matches!(state.busy, Some(Operation::Saving(_))) {
        log::debug!("Ignoring edit of {name} while saving");
        return Effect::None;
    }
    let Dialog::Editing { draft, .. } = &mut state.dialog else {
        return Effect::None;
    };

    if let Err(err) = draft.set_field(name, value) {
        let message = field_error_message(schema::<E>(), &err);
        state.fail(message);
    }
    Effect::None
}

fn field_error_message(schema: &EntitySchema, err: &FormError) -> String {
    let label_of = |name: &str| {
        schema
            .field(name)
            .map_or_else(|| name.to_string(), |field| field.label.to_string())
    };
    match err {
        FormError::InvalidValue { field, .. } => {
            format!("Valor inválido para el campo {}.", label_of(field))
        }
        FormError::ReadOnlyField(field) => {
            format!("El campo {} no se puede modificar.", label_of(field))
        }
        FormError::UnknownField(field) => format!("Campo desconocido: {field}."),
        FormError::Validation(message) => message.clone(),
    }
}

fn submit<E: Entity>(state: &mut ControllerState<E>, label: &str) -> Effect<E> {
    let Dialog::Editing { mode, draft } = &state.dialog else {
        return Effect::None;
    };
    if ignore_while_busy(state, label) {
        return Effect::None;
    }
    let mode = *mode;
    let payload = draft.clone().into_payload();

    state.clear_messages();
    match payload {
        Ok(record) => {
            state.busy = Some(Operation::Saving(mode));
            match mode {
                EditMode::Create => Effect::Create(record),
                EditMode::Update(id) => Effect::Update(id, record),
            }
        }
        Err(err) => {
            state.fail(err.to_string());
            Effect::None
        }
    }
}

fn open_delete<E: Entity>(state: &mut ControllerState<E>, id: RecordId) -> Effect<E> {
    if !dialog_available(state) {
        return Effect::None;
    }
    state.clear_messages();
    state.dialog = Dialog::ConfirmingDelete { id };
    Effect::None
}

fn confirm_delete<E: Entity>(state: &mut ControllerState<E>, label: &str) -> Effect<E> {
    let Dialog::ConfirmingDelete { id } = state.dialog else {
        return Effect::None;
    };
    if ignore_while_busy(state, label) {
        return Effect::None;
    }
    state.clear_messages();
    state.busy = Some(Operation::Deleting(id));
    Effect::Remove(id)
}

fn list_loaded<E: Entity>(
    state: &mut ControllerState<E>,
    result: Result<Vec<E>, RequestFailed>,
) -> Effect<E> {
    let messages = &schema::<E>().messages;
    match state.busy {
        Some(Operation::LoadingList) => {
            state.busy = None;
            match result {
                Ok(records) => state.records = records,
                Err(RequestFailed) => state.fail(messages.load_list_failed),
            }
        }
        Some(Operation::Refreshing(mutation)) => {
            state.busy = None;
            if dialog_matches(&state.dialog, mutation) {
                state.dialog = Dialog::Closed;
            }
            match result {
                Ok(records) => {
                    state.records = records;
                    state.succeed(match mutation {
                        Mutation::Created => messages.created,
                        Mutation::Updated(_) => messages.updated,
                        Mutation::Deleted(_) => messages.deleted,
                    });
                }
                Err(RequestFailed) => state.fail(messages.load_list_failed),
            }
        }
        other => log::warn!("Dropping list completion, in flight: {other:?}"),
    }
    Effect::None
}

/// Whether the open dialog is the one that issued `mutation`.
fn dialog_matches<F>(dialog: &Dialog<F>, mutation: Mutation) -> bool {
    match (dialog, mutation) {
        (
            Dialog::Editing {
                mode: EditMode::Create,
                ..
            },
            Mutation::Created,
        ) => true,
        (
            Dialog::Editing {
                mode: EditMode::Update(open),
                ..
            },
            Mutation::Updated(id),
        ) => *open == id,
        (Dialog::ConfirmingDelete { id: open }, Mutation::Deleted(id)) => *open == id,
        _ => false,
    }
}

fn record_loaded<E: Entity>(
    state: &mut ControllerState<E>,
    id: RecordId,
    result: Result<E, RequestFailed>,
) -> Effect<E> {
    if state.busy != Some(Operation::LoadingRecord(id)) {
        log::warn!("Dropping record {id} completion, in flight: {:?}", state.busy);
        return Effect::None;
    }
    state.busy = None;
    match result {
        Ok(record) => {
            state.dialog = Dialog::Editing {
                mode: EditMode::Update(id),
                draft: E::Form::from_record(&record),
            };
        }
        Err(RequestFailed) => state.fail(schema::<E>().messages.load_record_failed),
    }
    Effect::None
}

fn saved<E: Entity>(state: &mut ControllerState<E>, result: Result<E, RequestFailed>) -> Effect<E> {
    let Some(Operation::Saving(mode)) = state.busy else {
        log::warn!("Dropping save completion, in flight: {:?}", state.busy);
        return Effect::None;
    };
    match result {
        Ok(_) => {
            let mutation = match mode {
                EditMode::Create => Mutation::Created,
                EditMode::Update(id) => Mutation::Updated(id),
            };
            state.busy = Some(Operation::Refreshing(mutation));
            Effect::FetchList
        }
        Err(RequestFailed) => {
            state.busy = None;
            state.fail(schema::<E>().messages.save_failed);
            Effect::None
        }
    }
}

fn removed<E: Entity>(
    state: &mut ControllerState<E>,
    id: RecordId,
    result: Result<(), RequestFailed>,
) -> Effect<E> {
    if state.busy != Some(Operation::Deleting(id)) {
        log::warn!("Dropping delete {id} completion, in flight: {:?}", state.busy);
        return Effect::None;
    }
    match result {
        Ok(()) => {
            state.busy = Some(Operation::Refreshing(Mutation::Deleted(id)));
            Effect::FetchList
        }
        Err(RequestFailed) => {
            state.busy = None;
            state.fail(schema::<E>().messages.delete_failed);
            Effect::None
        }
    }
}
