use serde::de::DeserializeOwned;
use std::{
    fs::File,
    io::{self, Cursor, Read},
    path::PathBuf,
};
use thiserror::Error;
use tracing::warn;

mod config;
pub mod models;
pub use config::*;
pub use models::*;

const REQUIRED_HEADERS: [&str; 5] = ["id", "name", "address", "longitude", "latitude"];
const OPTIONAL_HEADERS: [&str; 1] = ["is_available"];

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Csv file {0} is missing header")]
    MissingHeader(String),
    #[error("Csv file {0} has unknown column {1}")]
    UnknownHeader(String, String),
    #[error("Could not find file with name: {0}")]
    FileNotFound(String),
}

#[derive(Default)]
pub enum StorageType {
    #[default]
    None,
    Dir(PathBuf),
    File(PathBuf),
    Text(String),
}

/// Where relay point fixtures are read from.
#[derive(Default)]
pub struct Source {
    config: Config,
    storage: StorageType,
}

impl Source {
    pub fn new(config: self::Config) -> Self {
        Self {
            config,
            storage: Default::default(),
        }
    }

    /// Reads `config.points_file_name` inside `path`.
    pub fn from_dir(mut self, path: PathBuf) -> Self {
        self.storage = StorageType::Dir(path);
        self
    }

    pub fn from_file(mut self, path: PathBuf) -> Self {
        self.storage = StorageType::File(path);
        self
    }

    /// Reads csv text already in memory.
    pub fn from_text(mut self, text: impl Into<String>) -> Self {
        self.storage = StorageType::Text(text.into());
        self
    }

    /// Streams every well formed row. Rows that fail to parse are logged and skipped.
    pub fn stream_points<F>(&self, f: F) -> Result<(), self::Error>
    where
        F: FnMut((usize, CsvRelayPoint)),
    {
        match &self.storage {
            StorageType::None => Ok(()),
            StorageType::Dir(dir) => self.stream_file(dir.join(&self.config.points_file_name), f),
            StorageType::File(path) => self.stream_file(path.clone(), f),
            StorageType::Text(text) => stream_from_reader::<CsvRelayPoint, _, _>(
                Cursor::new(text.as_bytes()),
                "<memory>",
                self.config.delimiter,
                f,
            ),
        }
    }

    fn stream_file<F>(&self, path: PathBuf, f: F) -> Result<(), self::Error>
    where
        F: FnMut((usize, CsvRelayPoint)),
    {
        let name = path.display().to_string();
        if !path.is_file() {
            return Err(Error::FileNotFound(name));
        }
        stream_from_reader::<CsvRelayPoint, _, _>(
            File::open(&path)?,
            &name,
            self.config.delimiter,
            f,
        )
    }
}

fn stream_from_reader<T, R, F>(
    reader: R,
    name: &str,
    delimiter: u8,
    f: F,
) -> Result<(), self::Error>
where
    T: DeserializeOwned,
    R: Read,
    F: FnMut((usize, T)),
{
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .trim(csv::Trim::All)
        .from_reader(reader);
    let headers = reader.headers()?;
    if !REQUIRED_HEADERS
        .iter()
        .all(|required| headers.iter().any(|header| header == *required))
    {
        return Err(Error::MissingHeader(name.to_string()));
    }
    if let Some(unknown) = headers.iter().find(|header| {
        !REQUIRED_HEADERS.contains(header) && !OPTIONAL_HEADERS.contains(header)
    }) {
        return Err(Error::UnknownHeader(name.to_string(), unknown.to_string()));
    }

    reader
        .deserialize()
        .enumerate()
        .filter_map(|(line, row)| match row {
            Ok(value) => Some(value),
            Err(err) => {
                warn!("Skipping row {} of {}: {}", line + 1, name, err);
                None
            }
        })
        .enumerate()
        .for_each(f);
    Ok(())
}
