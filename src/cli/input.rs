//! Input source resolution

use std::io::Read;
use std::path::PathBuf;

/// Where a JSON document comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputKind {
    /// An inline document given directly on the command line
    Literal(String),
    /// A single file path
    File(PathBuf),
    /// A directory of JSON files
    Directory(PathBuf),
    /// Standard input stream
    Stdin,
}

impl InputKind {
    /// Work out what the positional INPUT argument refers to.
    ///
    /// Text wrapped in `{...}` or `[...]` is taken as an inline document,
    /// anything else must name an existing file or directory.
    pub fn resolve(input: Option<&str>, stdin: bool) -> Result<Self, std::io::Error> {
        if stdin {
            return Ok(InputKind::Stdin);
        }

        let input = match input {
            Some(text) => text,
            None => {
                return Err(std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    "No input provided. Use --stdin or provide an input path",
                ))
            }
        };

        let trimmed = input.trim();
        if (trimmed.starts_with('{') && trimmed.ends_with('}'))
            || (trimmed.starts_with('[') && trimmed.ends_with(']'))
        {
            return Ok(InputKind::Literal(input.to_string()));
        }

        let path = PathBuf::from(input);
        if path.is_file() {
            Ok(InputKind::File(path))
        } else if path.is_dir() {
            Ok(InputKind::Directory(path))
        } else {
            Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Input path does not exist: {}", input),
            ))
        }
    }

    /// Read the document behind this source
    pub fn read_content(&self) -> Result<String, std::io::Error> {
        match self {
            InputKind::Literal(text) => Ok(text.clone()),
            InputKind::File(path) => std::fs::read_to_string(path),
            InputKind::Stdin => {
                let mut buffer = String::new();
                std::io::stdin().read_to_string(&mut buffer)?;
                Ok(buffer)
            }
            InputKind::Directory(_) => Err(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "Cannot read directory as content",
            )),
        }
    }
}
