//! Records served by the remote store API.

pub mod categoria;
pub mod cliente;
pub mod factura;
pub mod producto;
pub mod proveedor;
pub mod types;
pub mod venta;
