use validator::Validate;

use crate::domain::categoria::Categoria;
use crate::forms::{EntityForm, FormError, validate_in_order};
use crate::schema::CATEGORIA_SCHEMA;

#[derive(Clone, Debug, Default, PartialEq, Validate)]
/// Draft of a [`Categoria`].
pub struct CategoriaForm {
    pub id_categoria: i32,
    #[validate(length(
        min = 1,
        max = 100,
        message = "La descripción es requerida y no puede exceder los 100 caracteres."
    ))]
    pub descripcion: String,
}

impl TryFrom<CategoriaForm> for Categoria {
    type Error = FormError;

    fn try_from(form: CategoriaForm) -> Result<Self, Self::Error> {
        validate_in_order(&form, CATEGORIA_SCHEMA.fields)?;

        Ok(Self {
            id_categoria: form.id_categoria,
            descripcion: form.descripcion,
        })
    }
}

impl EntityForm for CategoriaForm {
    type Record = Categoria;

    fn from_record(record: &Categoria) -> Self {
        Self {
            id_categoria: record.id_categoria,
            descripcion: record.descripcion.clone(),
        }
    }

    fn into_payload(self) -> Result<Categoria, FormError> {
        Categoria::try_from(self)
    }

    fn set_field(&mut self, name: &str, value: &str) -> Result<(), FormError> {
        match name {
            "descripcion" => self.descripcion = value.to_string(),
            "idCategoria" => return Err(FormError::ReadOnlyField(name.to_string())),
            _ => return Err(FormError::UnknownField(name.to_string())),
        }
        Ok(())
    }

    fn field_value(&self, name: &str) -> Option<String> {
        match name {
            "idCategoria" => Some(self.id_categoria.to_string()),
            "descripcion" => Some(self.descripcion.clone()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descripcion_is_required() {
        let result = CategoriaForm::default().into_payload();

        assert_eq!(
            result,
            Err(FormError::Validation(
                "La descripción es requerida y no puede exceder los 100 caracteres.".to_string()
            ))
        );
    }

    #[test]
    fn descripcion_limit_counts_characters() {
        let at_limit = CategoriaForm {
            descripcion: "ñ".repeat(100),
            ..CategoriaForm::default()
        };
        let over_limit = CategoriaForm {
            descripcion: "a".repeat(101),
            ..CategoriaForm::default()
        };

        assert!(at_limit.into_payload().is_ok());
        assert!(matches!(
            over_limit.into_payload(),
            Err(FormError::Validation(_))
        ));
    }

    #[test]
    fn id_is_not_editable() {
        let mut form = CategoriaForm::default();

        assert_eq!(
            form.set_field("idCategoria", "5"),
            Err(FormError::ReadOnlyField("idCategoria".to_string()))
        );
        assert_eq!(form, CategoriaForm::default());
    }
}
