use serde::{Deserialize, Serialize};

use chrono::{SecondsFormat, Utc};
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::render::Feedback;

/// Records a single accepted guess within a session.
/// Keeps the score value that was displayed with the guess, which is the
/// pre-charge value.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct GuessRecord {
    /// The number the player submitted
    pub guess: i64,
    /// Feedback the session answered with
    pub feedback: Feedback,
    /// Score rendered alongside the feedback
    pub score_shown: u32,
}

/// Complete record of one session including every guess and the outcome.
/// Serialized to JSONL format for history storage and replay.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    /// Unique identifier for this session (format: YYYYMMDD-NNNNNN)
    pub session_id: String,
    /// Seed of the drawer stream this session's secret came from
    pub seed: Option<u64>,
    /// Inclusive lower bound of the guessing range
    pub min_number: i64,
    /// Inclusive upper bound of the guessing range
    pub max_number: i64,
    /// Score the session opened with
    pub starting_score: u32,
    /// The secret number (safe to record; sessions are over when written)
    pub secret: i64,
    /// Chronological list of accepted guesses
    pub guesses: Vec<GuessRecord>,
    /// Session outcome ("won", "lost" or "abandoned")
    pub result: Option<String>,
    /// Score remaining when the session ended
    pub final_score: u32,
    /// Best score on record after this session settled
    #[serde(default)]
    pub best_after: Option<u32>,
    /// Timestamp when the session ended (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
}

pub fn format_session_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

pub struct SessionLogger {
    writer: Option<BufWriter<File>>,
    date: String,
    seq: u32,
}

impl SessionLogger {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                let _ = create_dir_all(parent);
            }
        }
        let f = File::create(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            date: Utc::now().format("%Y%m%d").to_string(),
            seq: 0,
        })
    }

    pub fn with_seq_for_test(date: &str) -> Self {
        Self {
            writer: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_session_id(&self.date, self.seq)
    }

    pub fn write(&mut self, record: &SessionRecord) -> std::io::Result<()> {
        // inject timestamp if missing
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        Ok(())
    }
}
