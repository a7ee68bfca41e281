use serde::{Deserialize, Serialize};

use crate::domain::types::{is_unsaved, null_as_empty};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Cliente {
    #[serde(default, skip_serializing_if = "is_unsaved")]
    pub id_cliente: i32,
    pub nombre: String,
    /// Optional postal address, empty when unknown.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub direccion: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub telefono: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_contact_fields_decode_as_empty() {
        let cliente: Cliente = serde_json::from_str(
            r#"{"idCliente": 4, "nombre": "Ana", "direccion": null, "telefono": null}"#,
        )
        .expect("valid payload");

        assert_eq!(cliente.id_cliente, 4);
        assert_eq!(cliente.direccion, "");
        assert_eq!(cliente.telefono, "");
    }
}
