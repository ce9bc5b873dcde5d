pub mod benchmark;
pub mod configuration;
mod logger;
pub use logger::{set_progress_line_active, setup_logger, ProgressLineGuard};
pub mod plugin;
pub mod relayer;
mod shared;
pub use shared::common_types;
pub mod transaction;
mod environment;
mod file;

pub use environment::load_env_from_dir;
pub use file::{write_file, WriteFileError};
pub use tracing::{error as relaydash_error, info as relaydash_info};
