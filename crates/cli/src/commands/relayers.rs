use clap::Subcommand;
use relaydash_core::{relayer::RelayerId, transaction::types::Transaction};
use relaydash_sdk::SDK;

use crate::{
    commands::error::RelayerQueryError,
    console::{print_details, print_table, truncate},
};

#[derive(Subcommand)]
pub enum RelayersCommand {
    /// List all relayers
    List,
    /// Show the native balance of a relayer
    Balance {
        /// The unique identifier of the relayer
        relayer_id: String,
    },
    /// List the transactions a relayer has sent
    Transactions {
        /// The unique identifier of the relayer
        relayer_id: String,
    },
}

pub async fn handle_relayers(
    command: &RelayersCommand,
    sdk: &SDK,
) -> Result<(), RelayerQueryError> {
    match command {
        RelayersCommand::List => handle_list(sdk).await,
        RelayersCommand::Balance { relayer_id } => {
            handle_balance(&parse_id(relayer_id)?, sdk).await
        }
        RelayersCommand::Transactions { relayer_id } => {
            handle_transactions(&parse_id(relayer_id)?, sdk).await
        }
    }
}

fn parse_id(relayer_id: &str) -> Result<RelayerId, RelayerQueryError> {
    relayer_id.parse().map_err(|_| RelayerQueryError::InvalidId(relayer_id.to_string()))
}

async fn handle_list(sdk: &SDK) -> Result<(), RelayerQueryError> {
    let relayers = sdk.relayer.list().await?;

    if relayers.is_empty() {
        println!("No relayers found.");
        return Ok(());
    }

    let rows = relayers
        .iter()
        .map(|relayer| {
            vec![
                relayer.id.to_string(),
                relayer.name.clone(),
                relayer.network.clone(),
                relayer.network_type.clone(),
                relayer.address.clone(),
                relayer.status().to_string(),
            ]
        })
        .collect();

    let headers = vec!["Id", "Name", "Network", "Type", "Address", "Status"];

    let title = format!("{} Relayers:", relayers.len());
    print_table(headers, rows, Some(&title), None);

    Ok(())
}

async fn handle_balance(relayer_id: &RelayerId, sdk: &SDK) -> Result<(), RelayerQueryError> {
    let balance = sdk.relayer.balance(relayer_id).await?;

    print_details(
        &format!("Relayer {}", relayer_id),
        &[("Balance", balance.balance.to_string()), ("Unit", balance.unit.clone())],
    );

    Ok(())
}

async fn handle_transactions(relayer_id: &RelayerId, sdk: &SDK) -> Result<(), RelayerQueryError> {
    let transactions = sdk.relayer.transactions(relayer_id).await?;

    if transactions.is_empty() {
        println!("No transactions found for relayer {}.", relayer_id);
        return Ok(());
    }

    let rows = transactions.iter().map(transaction_row).collect();
    let headers = vec!["Id", "Hash", "Status", "Nonce", "To", "Value", "Created", "Confirmed"];

    let title = format!("{} Transactions for relayer {}:", transactions.len(), relayer_id);
    print_table(headers, rows, Some(&title), None);

    Ok(())
}

fn transaction_row(transaction: &Transaction) -> Vec<String> {
    let or_dash = |value: &Option<String>| value.clone().unwrap_or_else(|| "-".to_string());

    vec![
        transaction.id.clone(),
        transaction.hash.as_deref().map(|hash| truncate(hash, 18)).unwrap_or_else(|| "-".into()),
        transaction.status.to_string(),
        transaction.nonce.map(|nonce| nonce.to_string()).unwrap_or_else(|| "-".into()),
        or_dash(&transaction.to),
        or_dash(&transaction.value),
        or_dash(&transaction.created_at),
        or_dash(&transaction.confirmed_at),
    ]
}
