//! Declarative schemas binding each record type to its API resource,
//! draft form, field list and operator-facing texts.
//!
//! The CRUD controller is written once against [`Entity`]; the six
//! implementations below are the only per-entity code besides the drafts.

use std::fmt::Debug;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::domain::categoria::Categoria;
use crate::domain::cliente::Cliente;
use crate::domain::factura::Factura;
use crate::domain::producto::Producto;
use crate::domain::proveedor::Proveedor;
use crate::domain::types::DATE_FORMAT;
use crate::domain::venta::Venta;
use crate::forms::EntityForm;
use crate::forms::categoria::CategoriaForm;
use crate::forms::cliente::ClienteForm;
use crate::forms::factura::FacturaForm;
use crate::forms::producto::ProductoForm;
use crate::forms::proveedor::ProveedorForm;
use crate::forms::venta::VentaForm;

/// Input kind of a draft field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    /// Server-assigned identifier, never edited.
    Id,
    Text,
    Integer,
    Decimal,
    Date,
}

/// One field of an entity, in declared order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    /// Name used on the wire and by the console (`idFactura`).
    pub name: &'static str,
    /// Name of the draft struct member, as reported by `validator`.
    pub attr: &'static str,
    /// Label shown next to the input.
    pub label: &'static str,
    pub kind: FieldKind,
}

impl FieldSpec {
    const fn new(
        name: &'static str,
        attr: &'static str,
        label: &'static str,
        kind: FieldKind,
    ) -> Self {
        Self {
            name,
            attr,
            label,
            kind,
        }
    }
}

/// Operator-facing outcome texts of one entity screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EntityMessages {
    pub load_list_failed: &'static str,
    pub load_record_failed: &'static str,
    pub save_failed: &'static str,
    pub delete_failed: &'static str,
    pub created: &'static str,
    pub updated: &'static str,
    pub deleted: &'static str,
    pub confirm_delete: &'static str,
}

/// Static description of an entity screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EntitySchema {
    /// Resource path segment, also the console route (`ventas`).
    pub resource: &'static str,
    /// Singular display name (`Venta`).
    pub singular: &'static str,
    /// Screen heading (`Gestión de Ventas`).
    pub title: &'static str,
    pub fields: &'static [FieldSpec],
    pub messages: EntityMessages,
}

impl EntitySchema {
    /// Looks up a field by its wire/console name.
    pub fn field(&self, name: &str) -> Option<&'static FieldSpec> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Fields the operator may edit, in declared order.
    pub fn editable_fields(&self) -> impl Iterator<Item = &'static FieldSpec> {
        self.fields
            .iter()
            .filter(|field| field.kind != FieldKind::Id)
    }
}

/// A record type managed by a CRUD screen.
pub trait Entity:
    Clone + Debug + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Draft edited in the dialog.
    type Form: EntityForm<Record = Self>;

    const SCHEMA: &'static EntitySchema;

    /// Raw identifier, `0` for unsaved records.
    fn id(&self) -> i32;

    /// One-line rendering used by the record list.
    fn summary(&self) -> String;
}

const CATEGORIA_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("idCategoria", "id_categoria", "Id", FieldKind::Id),
    FieldSpec::new("descripcion", "descripcion", "Descripción", FieldKind::Text),
];

const CLIENTE_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("idCliente", "id_cliente", "Id", FieldKind::Id),
    FieldSpec::new("nombre", "nombre", "Nombre", FieldKind::Text),
    FieldSpec::new("direccion", "direccion", "Dirección", FieldKind::Text),
    FieldSpec::new("telefono", "telefono", "Teléfono", FieldKind::Text),
];

const FACTURA_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("idFactura", "id_factura", "Id", FieldKind::Id),
    FieldSpec::new("fecha", "fecha", "Fecha", FieldKind::Date),
    FieldSpec::new("idCliente", "id_cliente", "Id Cliente", FieldKind::Integer),
];

const PRODUCTO_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("idProducto", "id_producto", "Id", FieldKind::Id),
    FieldSpec::new("descripcion", "descripcion", "Descripción", FieldKind::Text),
    FieldSpec::new("precio", "precio", "Precio", FieldKind::Decimal),
    FieldSpec::new("idCategoria", "id_categoria", "Id Categoría", FieldKind::Integer),
    FieldSpec::new("idProveedor", "id_proveedor", "Id Proveedor", FieldKind::Integer),
];

const PROVEEDOR_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("idProveedor", "id_proveedor", "Id", FieldKind::Id),
    FieldSpec::new("nombre", "nombre", "Nombre", FieldKind::Text),
    FieldSpec::new("direccion", "direccion", "Dirección", FieldKind::Text),
    FieldSpec::new("telefono", "telefono", "Teléfono", FieldKind::Text),
];

const VENTA_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("idVenta", "id_venta", "Id", FieldKind::Id),
    FieldSpec::new("idFactura", "id_factura", "Id Factura", FieldKind::Integer),
    FieldSpec::new("idProducto", "id_producto", "Id Producto", FieldKind::Integer),
    FieldSpec::new("cantidad", "cantidad", "Cantidad", FieldKind::Integer),
];

pub const CATEGORIA_SCHEMA: EntitySchema = EntitySchema {
    resource: "categorias",
    singular: "Categoría",
    title: "Gestión de Categorías",
    fields: CATEGORIA_FIELDS,
    messages: EntityMessages {
        load_list_failed: "Error al cargar las categorías.",
        load_record_failed: "Error al cargar la categoría.",
        save_failed: "Error al guardar la categoría.",
        delete_failed: "Error al eliminar la categoría.",
        created: "Categoría agregada con éxito.",
        updated: "Categoría actualizada con éxito.",
        deleted: "Categoría eliminada con éxito.",
        confirm_delete: "¿Estás seguro de que deseas eliminar esta categoría?",
    },
};

pub const CLIENTE_SCHEMA: EntitySchema = EntitySchema {
    resource: "clientes",
    singular: "Cliente",
    title: "Gestión de Clientes",
    fields: CLIENTE_FIELDS,
    messages: EntityMessages {
        load_list_failed: "Error al cargar los clientes.",
        load_record_failed: "Error al cargar el cliente.",
        save_failed: "Error al guardar el cliente.",
        delete_failed: "Error al eliminar el cliente.",
        created: "Cliente agregado con éxito.",
        updated: "Cliente actualizado con éxito.",
        deleted: "Cliente eliminado con éxito.",
        confirm_delete: "¿Estás seguro de que deseas eliminar este cliente?",
    },
};

pub const FACTURA_SCHEMA: EntitySchema = EntitySchema {
    resource: "facturas",
    singular: "Factura",
    title: "Gestión de Facturas",
    fields: FACTURA_FIELDS,
    messages: EntityMessages {
        load_list_failed: "Error al cargar las facturas.",
        load_record_failed: "Error al cargar la factura.",
        save_failed: "Error al guardar la factura.",
        delete_failed: "Error al eliminar la factura.",
        created: "Factura agregada con éxito.",
        updated: "Factura actualizada con éxito.",
        deleted: "Factura eliminada con éxito.",
        confirm_delete: "¿Estás seguro de que deseas eliminar esta factura?",
    },
};

pub const PRODUCTO_SCHEMA: EntitySchema = EntitySchema {
    resource: "productos",
    singular: "Producto",
    title: "Gestión de Productos",
    fields: PRODUCTO_FIELDS,
    messages: EntityMessages {
        load_list_failed: "Error al cargar los productos.",
        load_record_failed: "Error al cargar el producto.",
        save_failed: "Error al guardar el producto.",
        delete_failed: "Error al eliminar el producto.",
        created: "Producto agregado con éxito.",
        updated: "Producto actualizado con éxito.",
        deleted: "Producto eliminado con éxito.",
        confirm_delete: "¿Estás seguro de que deseas eliminar este producto?",
    },
};

pub const PROVEEDOR_SCHEMA: EntitySchema = EntitySchema {
    resource: "proveedores",
    singular: "Proveedor",
    title: "Gestión de Proveedores",
    fields: PROVEEDOR_FIELDS,
    messages: EntityMessages {
        load_list_failed: "Error al cargar los proveedores.",
        load_record_failed: "Error al cargar el proveedor.",
        save_failed: "Error al guardar el proveedor.",
        delete_failed: "Error al eliminar el proveedor.",
        created: "Proveedor agregado con éxito.",
        updated: "Proveedor actualizado con éxito.",
        deleted: "Proveedor eliminado con éxito.",
        confirm_delete: "¿Estás seguro de que deseas eliminar este proveedor?",
    },
};

pub const VENTA_SCHEMA: EntitySchema = EntitySchema {
    resource: "ventas",
    singular: "Venta",
    title: "Gestión de Ventas",
    fields: VENTA_FIELDS,
    messages: EntityMessages {
        load_list_failed: "Error al cargar las ventas.",
        load_record_failed: "Error al cargar la venta.",
        save_failed: "Error al guardar la venta.",
        delete_failed: "Error al eliminar la venta.",
        created: "Venta agregada con éxito.",
        updated: "Venta actualizada con éxito.",
        deleted: "Venta eliminada con éxito.",
        confirm_delete: "¿Estás seguro de que deseas eliminar esta venta?",
    },
};

/// Schemas in navigation order.
pub const ALL_SCHEMAS: [&EntitySchema; 6] = [
    &CATEGORIA_SCHEMA,
    &CLIENTE_SCHEMA,
    &FACTURA_SCHEMA,
    &PRODUCTO_SCHEMA,
    &PROVEEDOR_SCHEMA,
    &VENTA_SCHEMA,
];

impl Entity for Categoria {
    type Form = CategoriaForm;
    const SCHEMA: &'static EntitySchema = &CATEGORIA_SCHEMA;

    fn id(&self) -> i32 {
        self.id_categoria
    }

    fn summary(&self) -> String {
        self.descripcion.clone()
    }
}

impl Entity for Cliente {
    type Form = ClienteForm;
    const SCHEMA: &'static EntitySchema = &CLIENTE_SCHEMA;

    fn id(&self) -> i32 {
        self.id_cliente
    }

    fn summary(&self) -> String {
        format!("{} - {} - {}", self.nombre, self.direccion, self.telefono)
    }
}

impl Entity for Factura {
    type Form = FacturaForm;
    const SCHEMA: &'static EntitySchema = &FACTURA_SCHEMA;

    fn id(&self) -> i32 {
        self.id_factura
    }

    fn summary(&self) -> String {
        format!(
            "ID: {}, Fecha: {}, Cliente ID: {}",
            self.id_factura,
            self.fecha.format(DATE_FORMAT),
            self.id_cliente
        )
    }
}

impl Entity for Producto {
    type Form = ProductoForm;
    const SCHEMA: &'static EntitySchema = &PRODUCTO_SCHEMA;

    fn id(&self) -> i32 {
        self.id_producto
    }

    fn summary(&self) -> String {
        format!(
            "ID: {}, Descripción: {}, Precio: {}, IdCategoría: {}, IdProveedor: {}",
            self.id_producto, self.descripcion, self.precio, self.id_categoria, self.id_proveedor
        )
    }
}

impl Entity for Proveedor {
    type Form = ProveedorForm;
    const SCHEMA: &'static EntitySchema = &PROVEEDOR_SCHEMA;

    fn id(&self) -> i32 {
        self.id_proveedor
    }

    fn summary(&self) -> String {
        format!(
            "ID: {}, Nombre: {}, Dirección: {}, Teléfono: {}",
            self.id_proveedor, self.nombre, self.direccion, self.telefono
        )
    }
}

impl Entity for Venta {
    type Form = VentaForm;
    const SCHEMA: &'static EntitySchema = &VENTA_SCHEMA;

    fn id(&self) -> i32 {
        self.id_venta
    }

    fn summary(&self) -> String {
        format!(
            "ID: {}, IdFactura: {}, IdProducto: {}, Cantidad: {}",
            self.id_venta, self.id_factura, self.id_producto, self.cantidad
        )
    }
}
