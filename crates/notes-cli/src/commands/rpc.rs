use std::time::Duration;

use notes_core::NoteId;

use crate::cli::NoteCommands;
use crate::commands::common::{print_id, print_note, print_notes};
use crate::error::CliError;
use crate::rpc_client::RpcNotesClient;

pub async fn run_rpc(
    command: NoteCommands,
    base_url: &str,
    timeout_ms: u64,
    as_json: bool,
) -> Result<(), CliError> {
    let client = RpcNotesClient::new(base_url, Duration::from_millis(timeout_ms))?;

    match command {
        NoteCommands::Create { fields } => {
            let info = fields.into_info(&mut rand::thread_rng());
            let id = client.create(info).await?;
            tracing::debug!(note_id = %id, "Created note over RPC");
            print_id(id, as_json)?;
        }
        NoteCommands::Get { id } => {
            let note = client.get(NoteId::new(id)).await?;
            print_note(&note, as_json)?;
        }
        NoteCommands::List { limit, offset } => {
            let notes = client.list(limit, offset).await?;
            print_notes(&notes, as_json)?;
        }
        NoteCommands::Update { id, fields } => {
            let id = NoteId::new(id);
            client.update(id, fields.into_patch()).await?;
            print_id(id, as_json)?;
        }
        NoteCommands::Delete { id } => {
            let id = NoteId::new(id);
            client.delete(id).await?;
            print_id(id, as_json)?;
        }
    }

    Ok(())
}
