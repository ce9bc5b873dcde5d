mod settings;
pub use settings::{Configuration, DEFAULT_RELAYER_URL};

mod document;
pub use document::RelayerConfigDocument;

mod error;
pub use error::ConfigError;

mod store;
pub use store::{ConfigStore, STORAGE_KEY};
