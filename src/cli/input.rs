//! Reads document-mode input and content files.
//!
//! A document is a json object holding the whole request. It is read
//! from a file or, if the path is `-`, from stdin. The handle is
//! dropped right after reading.

use serde::de::DeserializeOwned;
use serde_json::Value;
use snafu::{ResultExt, Snafu};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use crate::error::ErrorKind;

const STDIN: &str = "-";

#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(display("Failed to open the file {}: {}", path.display(), source))]
    ErrorOpeningFile {
        source: std::io::Error,
        path: PathBuf,
    },

    #[snafu(display(
        "Failed to unmarshal the json document from {}: {}. Check the document and try again",
        origin,
        source
    ))]
    ErrorUnmarshalReader {
        source: serde_json::Error,
        origin: String,
    },
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::ErrorOpeningFile { .. } => ErrorKind::OpeningFile,
            Error::ErrorUnmarshalReader { .. } => ErrorKind::UnmarshalReader,
        }
    }
}

/// True if `path` denotes stdin.
pub fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == STDIN
}

fn origin(path: &Path) -> String {
    if is_stdin(path) {
        "stdin".to_string()
    } else {
        path.display().to_string()
    }
}

/// Reads a json document from the file at `path` or from stdin.
pub fn read_document(path: &Path) -> Result<Value, Error> {
    if is_stdin(path) {
        log::debug!("Reading document from stdin");
        let stdin = std::io::stdin();
        let lock = stdin.lock();
        parse(lock, path)
    } else {
        log::debug!("Reading document from {}", path.display());
        let file = File::open(path).context(ErrorOpeningFileSnafu { path })?;
        parse(BufReader::new(file), path)
    }
}

fn parse<R: Read>(reader: R, path: &Path) -> Result<Value, Error> {
    serde_json::from_reader(reader).context(ErrorUnmarshalReaderSnafu {
        origin: origin(path),
    })
}

/// Converts a (validated) document into a typed request.
pub fn decode<T: DeserializeOwned>(doc: Value, path: &Path) -> Result<T, Error> {
    serde_json::from_value(doc).context(ErrorUnmarshalReaderSnafu {
        origin: origin(path),
    })
}

/// Reads the complete file at `path` as text; `-` reads stdin.
pub fn read_content(path: &Path) -> Result<String, Error> {
    let mut content = String::new();
    if is_stdin(path) {
        std::io::stdin()
            .lock()
            .read_to_string(&mut content)
            .context(ErrorOpeningFileSnafu { path })?;
    } else {
        File::open(path)
            .and_then(|mut f| f.read_to_string(&mut content))
            .context(ErrorOpeningFileSnafu { path })?;
    }
    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::payload::OriginRequest;
    use std::io::Write;

    #[test]
    fn unit_read_document_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"name": "origin", "application_id": 4}}"#).unwrap();

        let doc = read_document(file.path()).unwrap();
        let req: OriginRequest = decode(doc, file.path()).unwrap();
        assert_eq!(req.name.as_deref(), Some("origin"));
        assert_eq!(req.application_id, Some(4));
    }

    #[test]
    fn unit_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("update.json");
        let err = read_document(&path).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::OpeningFile);
        assert!(err.to_string().contains("update.json"));
    }

    #[test]
    fn unit_malformed_document() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ name: ").unwrap();
        let err = read_document(file.path()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnmarshalReader);
    }

    #[test]
    fn unit_wrong_shape_fails_to_decode() {
        let path = Path::new("-");
        let err = decode::<OriginRequest>(serde_json::json!({"addresses": "a"}), path).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnmarshalReader);
        assert!(err.to_string().contains("stdin"));
    }

    #[test]
    fn unit_read_content() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "#!/bin/sh\necho hi\n").unwrap();
        assert_eq!(read_content(file.path()).unwrap(), "#!/bin/sh\necho hi\n");
    }
}
