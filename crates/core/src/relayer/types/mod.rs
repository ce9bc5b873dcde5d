mod relayer;
pub use relayer::Relayer;

mod relayer_id;
pub use relayer_id::RelayerId;

mod relayer_balance;
pub use relayer_balance::RelayerBalance;
