mod plugin_definition;
pub use plugin_definition::PluginDefinition;

mod plugin_call_result;
pub use plugin_call_result::{PluginCallResult, PluginLog, PluginTrace};
