use serde::{Deserialize, Serialize};

use crate::domain::types::is_unsaved;

/// One invoice line: a quantity of a product sold under an invoice.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Venta {
    #[serde(default, skip_serializing_if = "is_unsaved")]
    pub id_venta: i32,
    pub id_factura: i32,
    pub id_producto: i32,
    pub cantidad: i32,
}
