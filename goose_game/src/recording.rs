use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Collects every command of a session with its response, and writes them
/// to a JSON file.
pub struct Recorder {
    path: PathBuf,
    transcript: Transcript,
}

#[derive(Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transcript {
    pub exchanges: Vec<Exchange>,
}

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exchange {
    pub command: String,
    pub response: String,
}

impl Recorder {
    pub fn new(path: PathBuf) -> anyhow::Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.is_dir() {
                anyhow::bail!("Directory '{}' does not exist", parent.display());
            }
        }
        Ok(Self {
            path,
            transcript: Transcript::default(),
        })
    }

    pub fn store_exchange(&mut self, command: &str, response: &str) {
        self.transcript.exchanges.push(Exchange {
            command: String::from(command),
            response: String::from(response),
        });
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn write_transcript(&self) -> anyhow::Result<()> {
        let writer = BufWriter::new(File::create(&self.path)?);
        serde_json::to_writer_pretty(writer, &self.transcript)?;
        Ok(())
    }
}
