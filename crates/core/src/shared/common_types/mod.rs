mod api_key;
pub use api_key::ApiKey;

mod endpoint;
pub use endpoint::Endpoint;
