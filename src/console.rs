//! Line-oriented presentation shell.
//!
//! Each route owns at most one mounted screen. Navigating drops the current
//! controller and mounts a fresh one, so no state survives navigation.

use std::io::{self, BufRead, Write};

use tera::{Context, Tera};
use thiserror::Error;

use crate::domain::categoria::Categoria;
use crate::domain::cliente::Cliente;
use crate::domain::factura::Factura;
use crate::domain::producto::Producto;
use crate::domain::proveedor::Proveedor;
use crate::domain::venta::Venta;
use crate::dto::{HomeView, ScreenView};
use crate::models::config::ConsoleConfig;
use crate::repository::errors::RepositoryError;
use crate::repository::{HttpRepository, RecordReader, RecordWriter};
use crate::routes::{Command, CommandError, Route};
use crate::schema::Entity;
use crate::services::CrudService;

#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("Template error: {0}")]
    Template(#[from] tera::Error),

    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Client able to serve every entity screen.
pub trait StoreRepository:
    RecordReader<Categoria>
    + RecordWriter<Categoria>
    + RecordReader<Cliente>
    + RecordWriter<Cliente>
    + RecordReader<Factura>
    + RecordWriter<Factura>
    + RecordReader<Producto>
    + RecordWriter<Producto>
    + RecordReader<Proveedor>
    + RecordWriter<Proveedor>
    + RecordReader<Venta>
    + RecordWriter<Venta>
    + Clone
    + 'static
{
}

impl<T> StoreRepository for T where
    T: RecordReader<Categoria>
        + RecordWriter<Categoria>
        + RecordReader<Cliente>
        + RecordWriter<Cliente>
        + RecordReader<Factura>
        + RecordWriter<Factura>
        + RecordReader<Producto>
        + RecordWriter<Producto>
        + RecordReader<Proveedor>
        + RecordWriter<Proveedor>
        + RecordReader<Venta>
        + RecordWriter<Venta>
        + Clone
        + 'static
{
}

/// Entity-erased view of a mounted [`CrudService`].
trait Screen {
    fn apply(&mut self, command: &Command);
    fn view(&self) -> ScreenView;
}

impl<E, R> Screen for CrudService<E, R>
where
    E: Entity,
    R: RecordReader<E> + RecordWriter<E>,
{
    fn apply(&mut self, command: &Command) {
        if let Some(intent) = command.intent::<E>(self.state().phase()) {
            self.dispatch(intent);
        }
    }

    fn view(&self) -> ScreenView {
        ScreenView::from_state(self.state())
    }
}

fn mount<R: StoreRepository>(route: Route, repo: &R) -> Option<Box<dyn Screen>> {
    let repo = repo.clone();
    let screen: Box<dyn Screen> = match route {
        Route::Home => return None,
        Route::Categorias => Box::new(CrudService::<Categoria, R>::mount(repo)),
        Route::Clientes => Box::new(CrudService::<Cliente, R>::mount(repo)),
        Route::Facturas => Box::new(CrudService::<Factura, R>::mount(repo)),
        Route::Productos => Box::new(CrudService::<Producto, R>::mount(repo)),
        Route::Proveedores => Box::new(CrudService::<Proveedor, R>::mount(repo)),
        Route::Ventas => Box::new(CrudService::<Venta, R>::mount(repo)),
    };
    Some(screen)
}

const PROMPT: &str = "> ";

/// Result of handling one input line.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Text to print before the next prompt.
    Show(String),
    Quit,
}

pub struct Console<R: StoreRepository> {
    repo: R,
    tera: Tera,
    route: Route,
    screen: Option<Box<dyn Screen>>,
}

impl<R: StoreRepository> Console<R> {
    /// Starts on the landing page.
    pub fn new(repo: R, tera: Tera) -> Self {
        Self {
            repo,
            tera,
            route: Route::Home,
            screen: None,
        }
    }

    pub fn route(&self) -> Route {
        self.route
    }

    /// Unmounts the current screen and mounts the one for `route`.
    pub fn navigate(&mut self, route: Route) {
        log::info!("Navigating to {}", route.path());
        self.screen = None;
        self.route = route;
        self.screen = mount(route, &self.repo);
    }

    /// View model of the mounted screen, `None` on the landing page.
    pub fn screen_view(&self) -> Option<ScreenView> {
        self.screen.as_ref().map(|screen| screen.view())
    }

    pub fn render(&self) -> Result<String, ConsoleError> {
        let home = HomeView::default();
        let mut context = Context::new();
        context.insert("menu", &home.menu);

        let rendered = match self.screen_view() {
            Some(view) => {
                context.insert("screen", &view);
                self.tera.render("screen.txt", &context)?
            }
            None => {
                context.insert("home", &home);
                self.tera.render("home.txt", &context)?
            }
        };
        Ok(rendered)
    }

    pub fn render_help(&self) -> Result<String, ConsoleError> {
        let mut context = Context::new();
        context.insert("menu", &HomeView::default().menu);
        Ok(self.tera.render("help.txt", &context)?)
    }

    pub fn handle_line(&mut self, line: &str) -> Result<Outcome, ConsoleError> {
        let command = match Command::parse(line) {
            Ok(command) => command,
            Err(CommandError::Empty) => return self.render().map(Outcome::Show),
            Err(err) => {
                log::debug!("Rejected input {line:?}: {err}");
                return Ok(Outcome::Show(format!(
                    "{err} Escribe 'ayuda' para ver los comandos.\n"
                )));
            }
        };

        match command {
            Command::Quit => return Ok(Outcome::Quit),
            Command::Help => return self.render_help().map(Outcome::Show),
            Command::Go(route) => self.navigate(route),
            other => match self.screen.as_mut() {
                Some(screen) => screen.apply(&other),
                None => {
                    return Ok(Outcome::Show(
                        "Selecciona una opción del menú con 'ir <ruta>'.\n".to_string(),
                    ));
                }
            },
        }

        self.render().map(Outcome::Show)
    }
}

/// Runs the interactive console on stdin/stdout until `salir` or end of input.
pub fn run(config: ConsoleConfig) -> Result<(), ConsoleError> {
    let repo = HttpRepository::new(&config.api_base_url, config.request_timeout())?;
    let tera = Tera::new(&config.templates_dir)?;
    log::info!("Using store API at {}", repo.base_url());

    let mut console = Console::new(repo, tera);
    let mut stdout = io::stdout();
    write!(stdout, "{}{PROMPT}", console.render()?)?;
    stdout.flush()?;

    for line in io::stdin().lock().lines() {
        match console.handle_line(&line?)? {
            Outcome::Show(text) => write!(stdout, "{text}{PROMPT}")?,
            Outcome::Quit => break,
        }
        stdout.flush()?;
    }

    Ok(())
}
