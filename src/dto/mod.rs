//! DTO modules that bridge controller state with the console templates.

use serde::Serialize;

use crate::routes::Route;

pub mod screen;

pub use screen::ScreenView;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct MenuEntry {
    pub path: String,
    pub label: String,
}

/// Landing page: greeting plus the navigation menu.
///
/// The menu is shown on every page, so screens render it too.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct HomeView {
    pub heading: String,
    pub subheading: String,
    pub menu: Vec<MenuEntry>,
}

impl Default for HomeView {
    fn default() -> Self {
        Self {
            heading: "Bienvenido a la aplicación".to_string(),
            subheading: "Selecciona una opción del menú para comenzar.".to_string(),
            menu: Route::ALL
                .into_iter()
                .map(|route| MenuEntry {
                    path: route.path(),
                    label: route.label().to_string(),
                })
                .collect(),
        }
    }
}
