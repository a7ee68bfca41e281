use chrono::NaiveDate;
use validator::Validate;

use crate::domain::factura::Factura;
use crate::domain::types::DATE_FORMAT;
use crate::forms::{EntityForm, FormError, parse_integer, parse_optional_date, validate_in_order};
use crate::schema::FACTURA_SCHEMA;

#[derive(Clone, Debug, Default, PartialEq, Validate)]
/// Draft of a [`Factura`]; the date stays empty until the operator picks one.
pub struct FacturaForm {
    pub id_factura: i32,
    #[validate(required(message = "La fecha es requerida."))]
    pub fecha: Option<NaiveDate>,
    #[validate(range(min = 1, message = "El IdCliente debe ser un valor positivo."))]
    pub id_cliente: i32,
}

impl TryFrom<FacturaForm> for Factura {
    type Error = FormError;

    fn try_from(form: FacturaForm) -> Result<Self, Self::Error> {
        validate_in_order(&form, FACTURA_SCHEMA.fields)?;
        let fecha = form
            .fecha
            .ok_or_else(|| FormError::Validation("La fecha es requerida.".to_string()))?;

        Ok(Self {
            id_factura: form.id_factura,
            fecha,
            id_cliente: form.id_cliente,
        })
    }
}

impl EntityForm for FacturaForm {
    type Record = Factura;

    fn from_record(record: &Factura) -> Self {
        Self {
            id_factura: record.id_factura,
            fecha: Some(record.fecha),
            id_cliente: record.id_cliente,
        }
    }

    fn into_payload(self) -> Result<Factura, FormError> {
        Factura::try_from(self)
    }

    fn set_field(&mut self, name: &str, value: &str) -> Result<(), FormError> {
        match name {
            "fecha" => self.fecha = parse_optional_date(name, value)?,
            "idCliente" => self.id_cliente = parse_integer(name, value)?,
            "idFactura" => return Err(FormError::ReadOnlyField(name.to_string())),
            _ => return Err(FormError::UnknownField(name.to_string())),
        }
        Ok(())
    }

    fn field_value(&self, name: &str) -> Option<String> {
        match name {
            "idFactura" => Some(self.id_factura.to_string()),
            "fecha" => Some(
                self.fecha
                    .map(|date| date.format(DATE_FORMAT).to_string())
                    .unwrap_or_default(),
            ),
            "idCliente" => Some(self.id_cliente.to_string()),
            _ => None,
        }
    }
}
