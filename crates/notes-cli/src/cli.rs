use clap::{Args, Parser, Subcommand};

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8081";

#[derive(Parser)]
#[command(name = "notes")]
#[command(about = "Talk to a notes server over JSON HTTP or protobuf RPC")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Base URL of the notes server
    #[arg(
        long,
        global = true,
        env = "NOTES_API_URL",
        default_value = DEFAULT_BASE_URL,
        value_name = "URL"
    )]
    pub base_url: String,

    /// Print results as pretty JSON
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Use the JSON HTTP routes
    Http {
        #[command(subcommand)]
        command: NoteCommands,
    },
    /// Use the protobuf RPC routes
    Rpc {
        /// Per-request timeout in milliseconds
        #[arg(long, global = true, default_value_t = 1_000, value_name = "MS")]
        timeout_ms: u64,
        #[command(subcommand)]
        command: NoteCommands,
    },
    /// Compare JSON and protobuf encodings of a random note
    Size,
}

#[derive(Subcommand)]
pub enum NoteCommands {
    /// Create a note (random content when no field is given)
    #[command(alias = "new")]
    Create {
        #[command(flatten)]
        fields: NoteFields,
    },
    /// Fetch a note by id
    Get {
        /// Note ID
        id: i64,
    },
    /// List notes in insertion order
    List {
        /// Number of notes to show
        #[arg(short, long, default_value = "10")]
        limit: i64,
        /// Number of notes to skip
        #[arg(short, long, default_value = "0")]
        offset: i64,
    },
    /// Change the given fields of a note
    Update {
        /// Note ID
        id: i64,
        #[command(flatten)]
        fields: NoteFields,
    },
    /// Delete a note
    Delete {
        /// Note ID
        id: i64,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Args)]
pub struct NoteFields {
    /// Note title
    #[arg(long)]
    pub title: Option<String>,
    /// Note body
    #[arg(long)]
    pub context: Option<String>,
    /// Note author
    #[arg(long)]
    pub author: Option<String>,
    /// Whether the note is public (`true` or `false`)
    #[arg(long = "public", value_name = "BOOL")]
    pub is_public: Option<bool>,
}
