mod cli;
mod infra;
mod report;
mod routes;
mod server;

use ivf_navigator::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
