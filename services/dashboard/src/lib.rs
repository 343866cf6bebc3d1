mod cli;
mod infra;
mod render;

use fundi_trust::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
