//! Binary entry point: resolve configuration, bring up the database, seed it
//! on first run, then hand control to the console menu.
use school_manager::{ensure_schema, logging, run_app, seed_if_empty, Config};

fn main() -> anyhow::Result<()> {
    logging::init();

    let config = Config::from_env()?;
    let conn = ensure_schema(&config.db_path)?;
    if config.seed {
        seed_if_empty(&conn, &mut rand::thread_rng())?;
    }

    run_app(&conn)
}
