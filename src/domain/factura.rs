use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::types::{api_date, is_unsaved};

/// Invoice issued to a client on a given date.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Factura {
    #[serde(default, skip_serializing_if = "is_unsaved")]
    pub id_factura: i32,
    #[serde(with = "api_date")]
    pub fecha: NaiveDate,
    /// Soft reference to [`crate::domain::cliente::Cliente`].
    pub id_cliente: i32,
}
