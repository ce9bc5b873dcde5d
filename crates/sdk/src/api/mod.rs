pub mod http;
mod plugin;
mod relayer;
#[cfg(test)]
pub(crate) mod test_server;
mod types;

pub use plugin::{PluginApi, PluginInvoker};
pub use relayer::RelayerApi;
pub use types::{ApiResponse, ApiResult, ApiSdkError};
