use std::fmt::Write as _;

use notes_core::NoteInfo;
use prost::Message;
use serde::Serialize;

use crate::commands::common::print_json;
use crate::error::CliError;
use crate::random::random_note_info;

/// One note encoded both ways
#[derive(Debug, Serialize)]
pub struct SizeReport {
    pub json_len: usize,
    pub protobuf_len: usize,
    pub json: String,
    pub protobuf_hex: String,
}

pub fn measure(info: &NoteInfo) -> Result<SizeReport, CliError> {
    let json = serde_json::to_string(info)?;
    let protobuf = notes_proto::NoteInfo::from(info.clone()).encode_to_vec();

    Ok(SizeReport {
        json_len: json.len(),
        protobuf_len: protobuf.len(),
        json,
        protobuf_hex: hex(&protobuf),
    })
}

pub fn run_size(as_json: bool) -> Result<(), CliError> {
    let info = random_note_info(&mut rand::thread_rng());
    let report = measure(&info)?;

    if as_json {
        return print_json(&report);
    }
    println!("json:     {} bytes", report.json_len);
    println!("protobuf: {} bytes", report.protobuf_len);
    println!();
    println!("json bytes:\n{}", report.json);
    println!("protobuf bytes:\n{}", report.protobuf_hex);
    Ok(())
}

fn hex(bytes: &[u8]) -> String {
    bytes.iter().fold(String::with_capacity(bytes.len() * 2), |mut out, byte| {
        let _ = write!(out, "{byte:02x}");
        out
    })
}
