use chrono::{DateTime, Utc};
use notes_core::{Note, NoteId, NoteInfo, NotePatch};
use rand::Rng;

use crate::cli::NoteFields;
use crate::error::CliError;
use crate::random::random_note_info;

impl NoteFields {
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.context.is_none()
            && self.author.is_none()
            && self.is_public.is_none()
    }

    /// Content for a new note; random when no field was given
    pub fn into_info<R: Rng>(self, rng: &mut R) -> NoteInfo {
        if self.is_empty() {
            return random_note_info(rng);
        }
        NoteInfo::new(
            self.title.unwrap_or_default(),
            self.context.unwrap_or_default(),
            self.author.unwrap_or_default(),
            self.is_public.unwrap_or_default(),
        )
    }

    pub fn into_patch(self) -> NotePatch {
        NotePatch {
            title: self.title,
            context: self.context,
            author: self.author,
            is_public: self.is_public,
        }
    }
}

pub fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn print_id(id: NoteId, as_json: bool) -> Result<(), CliError> {
    if as_json {
        return print_json(&serde_json::json!({ "id": id }));
    }
    println!("{id}");
    Ok(())
}

pub fn print_notes(notes: &[Note], as_json: bool) -> Result<(), CliError> {
    if as_json {
        return print_json(notes);
    }
    for line in format_note_lines(notes, Utc::now()) {
        println!("{line}");
    }
    Ok(())
}

pub fn print_note(note: &Note, as_json: bool) -> Result<(), CliError> {
    if as_json {
        return print_json(note);
    }
    println!("{}", format_note_details(note));
    Ok(())
}

pub fn format_note_lines(notes: &[Note], now: DateTime<Utc>) -> Vec<String> {
    notes
        .iter()
        .map(|note| {
            let id = note.id.to_string();
            let title = preview(&note.info.title, 32);
            let author = preview(&note.info.author, 20);
            let visibility = visibility(&note.info);
            let relative_time = format_relative_time(note.updated_at, now);
            format!("{id:<19}  {title:<32}  {author:<20}  {visibility:<7}  {relative_time}")
        })
        .collect()
}

pub fn format_note_details(note: &Note) -> String {
    format!(
        "id:         {}\ntitle:      {}\nauthor:     {}\nvisibility: {}\ncreated:    {}\nupdated:    {}\n\n{}",
        note.id,
        note.info.title,
        note.info.author,
        visibility(&note.info),
        note.created_at.to_rfc3339(),
        note.updated_at.to_rfc3339(),
        note.info.context,
    )
}

const fn visibility(info: &NoteInfo) -> &'static str {
    if info.is_public {
        "public"
    } else {
        "private"
    }
}

pub fn preview(text: &str, max_chars: usize) -> String {
    let first_line = text.lines().next().unwrap_or("").trim();
    let collapsed = first_line.split_whitespace().collect::<Vec<_>>().join(" ");

    if collapsed.chars().count() <= max_chars {
        collapsed
    } else {
        let take_len = max_chars.saturating_sub(3);
        let mut truncated = collapsed.chars().take(take_len).collect::<String>();
        truncated.push_str("...");
        truncated
    }
}

pub fn format_relative_time(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let diff = now
        .signed_duration_since(timestamp)
        .num_seconds()
        .max(0);
    let minute = 60;
    let hour = 60 * minute;
    let day = 24 * hour;
    let week = 7 * day;
    let month = 30 * day;
    let year = 365 * day;

    if diff < minute {
        "just now".to_string()
    } else if diff < hour {
        format!("{}m ago", diff / minute)
    } else if diff < day {
        format!("{}h ago", diff / hour)
    } else if diff < week {
        format!("{}d ago", diff / day)
    } else if diff < month {
        format!("{}w ago", diff / week)
    } else if diff < year {
        format!("{}mo ago", diff / month)
    } else {
        format!("{}y ago", diff / year)
    }
}
