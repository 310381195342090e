mod allocate;
mod cli;
mod infra;
mod routes;
mod server;

use kitty_allocator::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
