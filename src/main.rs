mod cli;
mod config;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A missing .env file is fine, flags and defaults still apply
    dotenvy::dotenv().ok();
    env_logger::init();

    cli::run()?;
    Ok(())
}
