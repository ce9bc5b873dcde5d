mod transaction;
pub use transaction::Transaction;

mod transaction_status;
pub use transaction_status::TransactionStatus;
