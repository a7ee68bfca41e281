use validator::Validate;

use crate::domain::producto::Producto;
use crate::forms::{EntityForm, FormError, parse_decimal, parse_integer, validate_in_order};
use crate::schema::PRODUCTO_SCHEMA;

#[derive(Clone, Debug, Default, PartialEq, Validate)]
/// Draft of a [`Producto`].
pub struct ProductoForm {
    pub id_producto: i32,
    #[validate(length(
        min = 1,
        max = 100,
        message = "La descripción es requerida y no puede exceder los 100 caracteres."
    ))]
    pub descripcion: String,
    #[validate(range(min = 0.0, message = "El precio debe ser un valor positivo."))]
    pub precio: f64,
    #[validate(range(min = 1, message = "El IdCategoria debe ser un valor positivo."))]
    pub id_categoria: i32,
    #[validate(range(min = 1, message = "El IdProveedor debe ser un valor positivo."))]
    pub id_proveedor: i32,
}

impl TryFrom<ProductoForm> for Producto {
    type Error = FormError;

    fn try_from(form: ProductoForm) -> Result<Self, Self::Error> {
        validate_in_order(&form, PRODUCTO_SCHEMA.fields)?;

        Ok(Self {
            id_producto: form.id_producto,
            descripcion: form.descripcion,
            precio: form.precio,
            id_categoria: form.id_categoria,
            id_proveedor: form.id_proveedor,
        })
    }
}

impl EntityForm for ProductoForm {
    type Record = Producto;

    fn from_record(record: &Producto) -> Self {
        Self {
            id_producto: record.id_producto,
            descripcion: record.descripcion.clone(),
            precio: record.precio,
            id_categoria: record.id_categoria,
            id_proveedor: record.id_proveedor,
        }
    }

    fn into_payload(self) -> Result<Producto, FormError> {
        Producto::try_from(self)
    }

    fn set_field(&mut self, name: &str, value: &str) -> Result<(), FormError> {
        match name {
            "descripcion" => self.descripcion = value.to_string(),
            "precio" => self.precio = parse_decimal(name, value)?,
            "idCategoria" => self.id_categoria = parse_integer(name, value)?,
            "idProveedor" => self.id_proveedor = parse_integer(name, value)?,
            "idProducto" => return Err(FormError::ReadOnlyField(name.to_string())),
            _ => return Err(FormError::UnknownField(name.to_string())),
        }
        Ok(())
    }

    fn field_value(&self, name: &str) -> Option<String> {
        match name {
            "idProducto" => Some(self.id_producto.to_string()),
            "descripcion" => Some(self.descripcion.clone()),
            "precio" => Some(self.precio.to_string()),
            "idCategoria" => Some(self.id_categoria.to_string()),
            "idProveedor" => Some(self.id_proveedor.to_string()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> ProductoForm {
        ProductoForm {
            id_producto: 3,
            descripcion: "Agua mineral".to_string(),
            precio: 1.25,
            id_categoria: 1,
            id_proveedor: 2,
        }
    }

    #[test]
    fn negative_price_is_rejected() {
        let form = ProductoForm {
            precio: -1.0,
            ..valid_form()
        };

        assert_eq!(
            form.into_payload(),
            Err(FormError::Validation(
                "El precio debe ser un valor positivo.".to_string()
            ))
        );
    }

    #[test]
    fn zero_price_is_allowed() {
        let form = ProductoForm {
            precio: 0.0,
            ..valid_form()
        };

        assert!(form.into_payload().is_ok());
    }

    #[test]
    fn foreign_keys_are_checked_in_order() {
        let form = ProductoForm {
            id_categoria: 0,
            id_proveedor: 0,
            ..valid_form()
        };

        assert_eq!(
            form.into_payload(),
            Err(FormError::Validation(
                "El IdCategoria debe ser un valor positivo.".to_string()
            ))
        );
    }
}
