use notes_core::NoteId;

use crate::cli::NoteCommands;
use crate::commands::common::{print_id, print_note, print_notes};
use crate::error::CliError;
use crate::http_client::HttpNotesClient;

pub async fn run_http(
    command: NoteCommands,
    base_url: &str,
    as_json: bool,
) -> Result<(), CliError> {
    let client = HttpNotesClient::new(base_url)?;

    match command {
        NoteCommands::Create { fields } => {
            let info = fields.into_info(&mut rand::thread_rng());
            let note = client.create(&info).await?;
            tracing::debug!(note_id = %note.id, "Created note over HTTP");
            if as_json {
                print_note(&note, true)?;
            } else {
                println!("{}", note.id);
            }
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
            let note = client.update(NoteId::new(id), fields.into_patch()).await?;
            if as_json {
                print_note(&note, true)?;
            } else {
                println!("{}", note.id);
            }
        }
        NoteCommands::Delete { id } => {
            let id = NoteId::new(id);
            client.delete(id).await?;
            print_id(id, as_json)?;
        }
    }

    Ok(())
}
