use std::env;
use std::path::Path;

use dotenvy::dotenv;

use tienda_admin::models::config::ConsoleConfig;

fn main() {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    // Select config profile (defaults to `local`).
    let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());

    let console_config = match ConsoleConfig::load(Path::new("config"), &app_env) {
        Ok(console_config) => console_config,
        Err(err) => {
            log::error!("Error loading console config: {err}");
            std::process::exit(1);
        }
    };

    if let Err(err) = tienda_admin::run(console_config) {
        log::error!("Console stopped: {err}");
        std::process::exit(1);
    }
}
