//! Navigation table and console command parsing.
//!
//! Routes are a fixed table: the landing page plus one screen per entity.
//! Commands are parsed here and translated into controller intents; nothing
//! in this module performs I/O.

use thiserror::Error;

use crate::controller::{Intent, Phase};
use crate::domain::types::{RecordId, TypeConstraintError};
use crate::schema::{
    CATEGORIA_SCHEMA, CLIENTE_SCHEMA, Entity, EntitySchema, FACTURA_SCHEMA, PRODUCTO_SCHEMA,
    PROVEEDOR_SCHEMA, VENTA_SCHEMA,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Home,
    Categorias,
    Clientes,
    Facturas,
    Productos,
    Proveedores,
    Ventas,
}

impl Route {
    /// Navigation order.
    pub const ALL: [Route; 7] = [
        Route::Home,
        Route::Categorias,
        Route::Clientes,
        Route::Facturas,
        Route::Productos,
        Route::Proveedores,
        Route::Ventas,
    ];

    /// Entity shown by this route, `None` for the landing page.
    pub fn schema(self) -> Option<&'static EntitySchema> {
        match self {
            Route::Home => None,
            Route::Categorias => Some(&CATEGORIA_SCHEMA),
            Route::Clientes => Some(&CLIENTE_SCHEMA),
            Route::Facturas => Some(&FACTURA_SCHEMA),
            Route::Productos => Some(&PRODUCTO_SCHEMA),
            Route::Proveedores => Some(&PROVEEDOR_SCHEMA),
            Route::Ventas => Some(&VENTA_SCHEMA),
        }
    }

    pub fn path(self) -> String {
        match self.schema() {
            Some(schema) => format!("/{}", schema.resource),
            None => "/".to_string(),
        }
    }

    /// Menu label.
    pub fn label(self) -> &'static str {
        match self {
            Route::Home => "Inicio",
            Route::Categorias => "Categorías",
            Route::Clientes => "Clientes",
            Route::Facturas => "Facturas",
            Route::Productos => "Productos",
            Route::Proveedores => "Proveedores",
            Route::Ventas => "Ventas",
        }
    }

    /// Resolves `/ventas`, `ventas` or `/` (case-insensitive).
    pub fn from_path(path: &str) -> Option<Route> {
        let wanted = path.trim().trim_matches('/').to_lowercase();
        Route::ALL
            .into_iter()
            .find(|route| route.path().trim_matches('/') == wanted)
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum CommandError {
    #[error("Escribe un comando.")]
    Empty,

    #[error("Comando desconocido: {0}.")]
    Unknown(String),

    #[error("Falta {argument} para '{command}'.")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error("Id no válido: {value}.")]
    InvalidId {
        value: String,
        #[source]
        source: TypeConstraintError,
    },

    #[error("Ruta desconocida: {0}.")]
    UnknownRoute(String),
}

/// One line typed by the operator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Go(Route),
    Refresh,
    Add,
    Edit(RecordId),
    Set { name: String, value: String },
    Save,
    Cancel,
    Delete(RecordId),
    Confirm,
    Dismiss,
    Help,
    Quit,
}

/// Splits off the first word; the remainder keeps its inner spacing.
fn split_word(input: &str) -> (&str, &str) {
    match input.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim_start()),
        None => (input, ""),
    }
}

fn parse_id(command: &'static str, rest: &str) -> Result<RecordId, CommandError> {
    let (value, _) = split_word(rest);
    if value.is_empty() {
        return Err(CommandError::MissingArgument {
            command,
            argument: "el id",
        });
    }
    value.parse().map_err(|source| CommandError::InvalidId {
        value: value.to_string(),
        source,
    })
}

impl Command {
    pub fn parse(line: &str) -> Result<Command, CommandError> {
        let (word, rest) = split_word(line.trim());
        match word.to_lowercase().as_str() {
            "" => Err(CommandError::Empty),
            "ir" => {
                if rest.is_empty() {
                    return Err(CommandError::MissingArgument {
                        command: "ir",
                        argument: "la ruta",
                    });
                }
                Route::from_path(rest)
                    .map(Command::Go)
                    .ok_or_else(|| CommandError::UnknownRoute(rest.to_string()))
            }
            "listar" | "actualizar" => Ok(Command::Refresh),
            "agregar" => Ok(Command::Add),
            "editar" => parse_id("editar", rest).map(Command::Edit),
            "campo" => {
                let (name, value) = split_word(rest);
                if name.is_empty() {
                    return Err(CommandError::MissingArgument {
                        command: "campo",
                        argument: "el nombre del campo",
                    });
                }
                Ok(Command::Set {
                    name: name.to_string(),
                    value: value.to_string(),
                })
            }
            "guardar" => Ok(Command::Save),
            "cancelar" => Ok(Command::Cancel),
            "eliminar" => parse_id("eliminar", rest).map(Command::Delete),
            "confirmar" => Ok(Command::Confirm),
            "descartar" => Ok(Command::Dismiss),
            "ayuda" => Ok(Command::Help),
            "salir" => Ok(Command::Quit),
            _ => Err(CommandError::Unknown(word.to_string())),
        }
    }

    /// Controller intent for this command on a screen in `phase`.
    ///
    /// `None` for shell commands and for a cancel with no dialog open.
    pub fn intent<E: Entity>(&self, phase: Phase) -> Option<Intent<E>> {
        match self {
            Command::Refresh => Some(Intent::Refresh),
            Command::Add => Some(Intent::OpenCreate),
            Command::Edit(id) => Some(Intent::OpenEdit(*id)),
            Command::Set { name, value } => Some(Intent::edit_field(name.as_str(), value.as_str())),
            Command::Save => Some(Intent::Submit),
            Command::Cancel => match phase {
                Phase::Editing => Some(Intent::CancelEdit),
                Phase::ConfirmingDelete => Some(Intent::CancelDelete),
                Phase::Idle => None,
            },
            Command::Delete(id) => Some(Intent::OpenDelete(*id)),
            Command::Confirm => Some(Intent::ConfirmDelete),
            Command::Dismiss => Some(Intent::DismissMessage),
            Command::Go(_) | Command::Help | Command::Quit => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cliente::Cliente;

    #[test]
    fn route_table_round_trips_paths() {
        for route in Route::ALL {
            assert_eq!(Route::from_path(&route.path()), Some(route));
        }
        assert_eq!(Route::from_path("Ventas"), Some(Route::Ventas));
        assert_eq!(Route::from_path("/pedidos"), None);
        assert_eq!(Route::Home.schema(), None);
    }

    #[test]
    fn parses_navigation() {
        assert_eq!(
            Command::parse("ir /proveedores"),
            Ok(Command::Go(Route::Proveedores))
        );
        assert_eq!(
            Command::parse("ir"),
            Err(CommandError::MissingArgument {
                command: "ir",
                argument: "la ruta",
            })
        );
        assert_eq!(
            Command::parse("ir /pedidos"),
            Err(CommandError::UnknownRoute("/pedidos".to_string()))
        );
    }

    #[test]
    fn field_value_keeps_inner_spaces() {
        assert_eq!(
            Command::parse("campo direccion  Av. Central  10 "),
            Ok(Command::Set {
                name: "direccion".to_string(),
                value: "Av. Central  10".to_string(),
            })
        );
        assert_eq!(
            Command::parse("campo telefono"),
            Ok(Command::Set {
                name: "telefono".to_string(),
                value: String::new(),
            })
        );
    }

    #[test]
    fn ids_must_be_positive() {
        assert_eq!(
            Command::parse("EDITAR 3"),
            Ok(Command::Edit(RecordId::new(3).expect("valid id")))
        );
        assert!(matches!(
            Command::parse("eliminar 0"),
            Err(CommandError::InvalidId { .. })
        ));
        assert!(matches!(
            Command::parse("eliminar"),
            Err(CommandError::MissingArgument { .. })
        ));
    }

    #[test]
    fn unknown_commands_are_rejected() {
        assert_eq!(Command::parse("   "), Err(CommandError::Empty));
        assert_eq!(
            Command::parse("borrar 1"),
            Err(CommandError::Unknown("borrar".to_string()))
        );
    }

    #[test]
    fn cancel_depends_on_the_open_dialog() {
        assert_eq!(
            Command::Cancel.intent::<Cliente>(Phase::Editing),
            Some(Intent::CancelEdit)
        );
        assert_eq!(
            Command::Cancel.intent::<Cliente>(Phase::ConfirmingDelete),
            Some(Intent::CancelDelete)
        );
        assert_eq!(Command::Cancel.intent::<Cliente>(Phase::Idle), None);
        assert_eq!(Command::Help.intent::<Cliente>(Phase::Idle), None);
    }
}
