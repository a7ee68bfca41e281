//! View models rendered by the console templates.
//!
//! Built purely from controller state; nothing here talks to the network.

use serde::Serialize;

use crate::controller::{ControllerState, Dialog, EditMode, Operation};
use crate::forms::EntityForm;
use crate::schema::Entity;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RowView {
    pub id: i32,
    pub summary: String,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FieldView {
    pub name: String,
    pub label: String,
    pub value: String,
}

/// Add/edit dialog.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DialogView {
    pub heading: String,
    pub fields: Vec<FieldView>,
    pub submit_label: String,
    pub submit_enabled: bool,
}

/// Delete confirmation dialog.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ConfirmView {
    pub id: i32,
    pub prompt: String,
    pub confirm_enabled: bool,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Success,
    Error,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct MessageView {
    pub level: MessageLevel,
    pub text: String,
}

/// Everything one entity screen shows.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ScreenView {
    pub title: String,
    pub singular: String,
    pub resource: String,
    pub loading: bool,
    pub rows: Vec<RowView>,
    pub dialog: Option<DialogView>,
    pub confirm: Option<ConfirmView>,
    pub message: Option<MessageView>,
}

impl ScreenView {
    pub fn from_state<E: Entity>(state: &ControllerState<E>) -> Self {
        let schema = E::SCHEMA;

        let rows = state
            .records()
            .iter()
            .map(|record| RowView {
                id: record.id(),
                summary: record.summary(),
            })
            .collect();

        let (dialog, confirm) = match state.dialog() {
            Dialog::Closed => (None, None),
            Dialog::Editing { mode, draft } => {
                let saving = matches!(
                    state.busy(),
                    Some(Operation::Saving(_) | Operation::Refreshing(_))
                );
                let (heading, submit_label) = match mode {
                    EditMode::Create => (format!("Agregar {}", schema.singular), "Agregar"),
                    EditMode::Update(_) => (format!("Editar {}", schema.singular), "Actualizar"),
                };
                let fields = schema
                    .editable_fields()
                    .map(|field| FieldView {
                        name: field.name.to_string(),
                        label: field.label.to_string(),
                        value: draft.field_value(field.name).unwrap_or_default(),
                    })
                    .collect();
                let view = DialogView {
                    heading,
                    fields,
                    submit_label: submit_label.to_string(),
                    submit_enabled: !saving,
                };
                (Some(view), None)
            }
            Dialog::ConfirmingDelete { id } => {
                let view = ConfirmView {
                    id: id.get(),
                    prompt: schema.messages.confirm_delete.to_string(),
                    confirm_enabled: !state.is_busy(),
                };
                (None, Some(view))
            }
        };

        let message = state
            .error_message()
            .map(|text| MessageView {
                level: MessageLevel::Error,
                text: text.to_string(),
            })
            .or_else(|| {
                state.success_message().map(|text| MessageView {
                    level: MessageLevel::Success,
                    text: text.to_string(),
                })
            });

        Self {
            title: schema.title.to_string(),
            singular: schema.singular.to_string(),
            resource: schema.resource.to_string(),
            loading: state.list_is_loading(),
            rows,
            dialog,
            confirm,
            message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::{Intent, RequestFailed, update};
    use crate::domain::types::RecordId;
    use crate::domain::venta::Venta;

    fn venta(id_venta: i32) -> Venta {
        Venta {
            id_venta,
            id_factura: 1,
            id_producto: 2,
            cantidad: 3,
        }
    }

    #[test]
    fn rows_carry_ids_and_summaries() {
        let mut state = ControllerState::<Venta>::new();
        update(&mut state, Intent::Mount);
        assert!(ScreenView::from_state(&state).loading);

        update(&mut state, Intent::ListLoaded(Ok(vec![venta(4)])));
        let view = ScreenView::from_state(&state);

        assert!(!view.loading);
        assert_eq!(view.title, "Gestión de Ventas");
        assert_eq!(
            view.rows,
            vec![RowView {
                id: 4,
                summary: "ID: 4, IdFactura: 1, IdProducto: 2, Cantidad: 3".to_string(),
            }]
        );
        assert_eq!(view.dialog, None);
        assert_eq!(view.confirm, None);
    }

    #[test]
    fn create_dialog_lists_editable_fields() {
        let mut state = ControllerState::<Venta>::new();
        update(&mut state, Intent::OpenCreate);

        let dialog = ScreenView::from_state(&state).dialog.expect("dialog open");

        assert_eq!(dialog.heading, "Agregar Venta");
        assert_eq!(dialog.submit_label, "Agregar");
        assert!(dialog.submit_enabled);
        let names: Vec<_> = dialog.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["idFactura", "idProducto", "cantidad"]);
        assert!(dialog.fields.iter().all(|f| f.value == "0"));
    }

    #[test]
    fn edit_dialog_disables_submit_while_saving() {
        let mut state = ControllerState::<Venta>::new();
        let id = RecordId::new(4).expect("valid id");
        update(&mut state, Intent::OpenEdit(id));
        update(&mut state, Intent::RecordLoaded(id, Ok(venta(4))));
        update(&mut state, Intent::Submit);

        let dialog = ScreenView::from_state(&state).dialog.expect("dialog open");

        assert_eq!(dialog.heading, "Editar Venta");
        assert_eq!(dialog.submit_label, "Actualizar");
        assert!(!dialog.submit_enabled);
    }

    #[test]
    fn confirm_dialog_and_error_message() {
        let mut state = ControllerState::<Venta>::new();
        let id = RecordId::new(4).expect("valid id");
        update(&mut state, Intent::OpenDelete(id));
        update(&mut state, Intent::ConfirmDelete);
        update(&mut state, Intent::Removed(id, Err(RequestFailed)));

        let view = ScreenView::from_state(&state);

        let confirm = view.confirm.expect("confirmation open");
        assert_eq!(confirm.id, 4);
        assert!(confirm.confirm_enabled);
        assert_eq!(
            view.message,
            Some(MessageView {
                level: MessageLevel::Error,
                text: "Error al eliminar la venta.".to_string(),
            })
        );
    }
}
