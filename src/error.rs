use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),
    #[error("failed to install logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}
