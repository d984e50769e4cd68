//! Save and restore adventure progress.
//!
//! Progress (current level, completion flag, collected pieces) is written to
//! a `save.json` file whenever it changes, and loaded once at startup. A
//! missing file simply means a fresh adventure.

use log::debug;
use serde::{Deserialize, Serialize};
use std::env;
use std::error::Error;
use std::fs::{create_dir_all, remove_file, File};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::PathBuf;

/// The serialized state. Everything else (grid, timer) is per-level and
/// never persisted.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
pub struct SaveData {
    pub level: u32,
    pub completed: bool,
    pub pieces: Vec<u8>,
}

/// Reads and writes the save file in a fixed data directory.
pub struct Saver {
    save_file: PathBuf,
}

impl Saver {
    pub fn new(mut data_dir: PathBuf) -> Self {
        data_dir.push("save.json");
        debug!("save file: {data_dir:?}");
        Self {
            save_file: data_dir,
        }
    }

    /// Resolve the data directory: explicit override, else XDG data home,
    /// else `~/.local/share`, else the working directory.
    pub fn resolve_data_dir(override_dir: Option<PathBuf>) -> PathBuf {
        if let Some(dir) = override_dir {
            return dir;
        }
        if let Ok(xdg) = env::var("XDG_DATA_HOME") {
            if !xdg.is_empty() {
                return PathBuf::from(xdg).join("linkup");
            }
        }
        if let Ok(home) = env::var("HOME") {
            if !home.is_empty() {
                return PathBuf::from(home).join(".local/share/linkup");
            }
        }
        PathBuf::from(".")
    }

    /// Load the saved progress, or None if no save exists yet.
    pub fn load(&self) -> Result<Option<SaveData>, Box<dyn Error>> {
        let file = match File::open(&self.save_file) {
            Ok(f) => f,
            Err(error) => match error.kind() {
                ErrorKind::NotFound => return Ok(None),
                _ => return Err(Box::new(error)),
            },
        };
        let reader = BufReader::new(file);
        let data: SaveData = serde_json::from_reader(reader)?;
        Ok(Some(data))
    }

    pub fn save(&self, data: &SaveData) -> Result<(), Box<dyn Error>> {
        if let Some(dir) = self.save_file.parent() {
            create_dir_all(dir)?;
        }
        let file = File::create(&self.save_file)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer(&mut writer, data)?;
        writer.flush()?;
        Ok(())
    }

    /// Delete the save file. Missing files are fine.
    pub fn delete(&self) {
        let _ = remove_file(&self.save_file);
    }
}
