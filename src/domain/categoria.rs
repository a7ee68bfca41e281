use serde::{Deserialize, Serialize};

use crate::domain::types::is_unsaved;

/// Product category.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Categoria {
    #[serde(default, skip_serializing_if = "is_unsaved")]
    pub id_categoria: i32,
    pub descripcion: String,
}
