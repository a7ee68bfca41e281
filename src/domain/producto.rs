use serde::{Deserialize, Serialize};

use crate::domain::types::is_unsaved;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Producto {
    #[serde(default, skip_serializing_if = "is_unsaved")]
    pub id_producto: i32,
    pub descripcion: String,
    pub precio: f64,
    pub id_categoria: i32,
    pub id_proveedor: i32,
}
