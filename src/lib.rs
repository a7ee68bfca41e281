//! Management console for the store REST API.
//!
//! Six entity screens (categorías, clientes, facturas, productos, proveedores,
//! ventas) share one generic CRUD controller parametrized by [`schema::Entity`].

#[cfg(feature = "console")]
pub mod console;
#[cfg(feature = "data")]
pub mod controller;
#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "data")]
pub mod dto;
#[cfg(feature = "data")]
pub mod forms;
#[cfg(feature = "console")]
pub mod models;
#[cfg(feature = "data")]
pub mod repository;
#[cfg(feature = "data")]
pub mod routes;
#[cfg(feature = "data")]
pub mod schema;
#[cfg(feature = "data")]
pub mod services;

#[cfg(feature = "console")]
pub use console::run;
