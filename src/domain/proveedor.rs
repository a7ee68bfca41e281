use serde::{Deserialize, Serialize};

use crate::domain::types::{is_unsaved, null_as_empty};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Proveedor {
    #[serde(default, skip_serializing_if = "is_unsaved")]
    pub id_proveedor: i32,
    pub nombre: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub direccion: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub telefono: String,
}
