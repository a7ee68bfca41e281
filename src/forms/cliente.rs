use validator::Validate;

use crate::domain::cliente::Cliente;
use crate::forms::{EntityForm, FormError, validate_in_order};
use crate::schema::CLIENTE_SCHEMA;

#[derive(Clone, Debug, Default, PartialEq, Validate)]
/// Draft of a [`Cliente`].
pub struct ClienteForm {
    pub id_cliente: i32,
    #[validate(length(
        min = 1,
        max = 100,
        message = "El nombre es requerido y no puede exceder los 100 caracteres."
    ))]
    pub nombre: String,
    #[validate(length(max = 255, message = "La dirección no puede exceder los 255 caracteres."))]
    pub direccion: String,
    #[validate(length(max = 20, message = "El teléfono no puede exceder los 20 caracteres."))]
    pub telefono: String,
}

impl TryFrom<ClienteForm> for Cliente {
    type Error = FormError;

    fn try_from(form: ClienteForm) -> Result<Self, Self::Error> {
        validate_in_order(&form, CLIENTE_SCHEMA.fields)?;

        Ok(Self {
            id_cliente: form.id_cliente,
            nombre: form.nombre,
            direccion: form.direccion,
            telefono: form.telefono,
        })
    }
}

impl EntityForm for ClienteForm {
    type Record = Cliente;

    fn from_record(record: &Cliente) -> Self {
        Self {
            id_cliente: record.id_cliente,
            nombre: record.nombre.clone(),
            direccion: record.direccion.clone(),
            telefono: record.telefono.clone(),
        }
    }

    fn into_payload(self) -> Result<Cliente, FormError> {
        Cliente::try_from(self)
    }

    fn set_field(&mut self, name: &str, value: &str) -> Result<(), FormError> {
        match name {
            "nombre" => self.nombre = value.to_string(),
            "direccion" => self.direccion = value.to_string(),
            "telefono" => self.telefono = value.to_string(),
            "idCliente" => return Err(FormError::ReadOnlyField(name.to_string())),
            _ => return Err(FormError::UnknownField(name.to_string())),
        }
        Ok(())
    }

    fn field_value(&self, name: &str) -> Option<String> {
        match name {
            "idCliente" => Some(self.id_cliente.to_string()),
            "nombre" => Some(self.nombre.clone()),
            "direccion" => Some(self.direccion.clone()),
            "telefono" => Some(self.telefono.clone()),
            _ => None,
        }
    }
}
