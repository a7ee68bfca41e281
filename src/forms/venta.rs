use validator::Validate;

use crate::domain::venta::Venta;
use crate::forms::{EntityForm, FormError, parse_integer, validate_in_order};
use crate::schema::VENTA_SCHEMA;

#[derive(Clone, Debug, Default, PartialEq, Validate)]
pub struct VentaForm {
    pub id_venta: i32,
    #[validate(range(min = 1, message = "El IdFactura debe ser un valor positivo."))]
    pub id_factura: i32,
    #[validate(range(min = 1, message = "El IdProducto debe ser un valor positivo."))]
    pub id_producto: i32,
    #[validate(range(min = 1, message = "La Cantidad debe ser un valor positivo."))]
    pub cantidad: i32,
}

impl TryFrom<VentaForm> for Venta {
    type Error = FormError;

    fn try_from(form: VentaForm) -> Result<Self, Self::Error> {
        validate_in_order(&form, VENTA_SCHEMA.fields)?;

        Ok(Self {
            id_venta: form.id_venta,
            id_factura: form.id_factura,
            id_producto: form.id_producto,
            cantidad: form.cantidad,
        })
    }
}

impl EntityForm for VentaForm {
    type Record = Venta;

    fn from_record(record: &Venta) -> Self {
        Self {
            id_venta: record.id_venta,
            id_factura: record.id_factura,
            id_producto: record.id_producto,
            cantidad: record.cantidad,
        }
    }

    fn into_payload(self) -> Result<Venta, FormError> {
        Venta::try_from(self)
    }

    fn set_field(&mut self, name: &str, value: &str) -> Result<(), FormError> {
        match name {
            "idFactura" => self.id_factura = parse_integer(name, value)?,
            "idProducto" => self.id_producto = parse_integer(name, value)?,
            "cantidad" => self.cantidad = parse_integer(name, value)?,
            "idVenta" => return Err(FormError::ReadOnlyField(name.to_string())),
            _ => return Err(FormError::UnknownField(name.to_string())),
        }
        Ok(())
    }

    fn field_value(&self, name: &str) -> Option<String> {
        match name {
            "idVenta" => Some(self.id_venta.to_string()),
            "idFactura" => Some(self.id_factura.to_string()),
            "idProducto" => Some(self.id_producto.to_string()),
            "cantidad" => Some(self.cantidad.to_string()),
            _ => None,
        }
    }
}
