//! Validation of fuzzing dictionaries.
//!
//! A dictionary holds one token per line, written as a quoted string with an optional `name=`
//! prefix. Inside the quotes, `\\`, `\"` and `\xAB` are the only escapes. Empty lines and lines
//! starting with `#` are ignored.

use crate::Status;
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use unicode_general_category::{get_general_category, GeneralCategory};

/// An error produced while validating or merging dictionaries.
#[derive(Debug)]
pub enum DictError {
    /// A dictionary could not be read, or the merged output could not be written.
    Io(Status),
    /// A dictionary contains an invalid entry.
    InvalidEntry {
        path: PathBuf,
        /// 1-based
        line_number: usize,
        /// the offending line, trimmed
        line: String,
    },
}

impl fmt::Display for DictError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DictError::Io(status) => write!(f, "{}", status.message()),
            DictError::InvalidEntry {
                path,
                line_number,
                line,
            } => write!(
                f,
                "invalid dictionary entry '{}' at {}:{}",
                line,
                path.display(),
                line_number
            ),
        }
    }
}

impl std::error::Error for DictError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DictError::Io(status) => Some(status),
            DictError::InvalidEntry { .. } => None,
        }
    }
}

impl From<DictError> for io::Error {
    fn from(e: DictError) -> Self {
        let kind = match e {
            DictError::Io(_) => io::ErrorKind::Other,
            DictError::InvalidEntry { .. } => io::ErrorKind::InvalidData,
        };
        io::Error::new(kind, e)
    }
}

fn io_error(context: &str, path: &Path, error: &io::Error) -> DictError {
    DictError::Io(Status::from_io_error(
        &format!("{} {}", context, path.display()),
        error,
    ))
}

/// Printable characters are everything outside the "Other" and "Separator" categories, plus the
/// ASCII space.
fn is_printable(c: char) -> bool {
    use GeneralCategory::*;
    c == ' '
        || !matches!(
            get_general_category(c),
            Control
                | Format
                | Surrogate
                | PrivateUse
                | Unassigned
                | SpaceSeparator
                | LineSeparator
                | ParagraphSeparator
        )
}

fn is_space(c: char) -> bool {
    // The information separators count as whitespace for the dictionary format
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Check a single quoted entry, starting at its opening quote.
pub fn validate_entry(entry: &str) -> bool {
    let chars: Vec<char> = entry.chars().collect();
    let end = match chars.len().checked_sub(1) {
        Some(end) => end,
        None => return true,
    };

    // chars[0] is the opening quote
    let mut pos = 0;
    while pos < end {
        pos += 1;
        let c = chars[pos];

        if !(is_printable(c) || is_space(c)) {
            return false;
        }

        if c == '\\' {
            if pos < end && (chars[pos + 1] == '\\' || chars[pos + 1] == '"') {
                pos += 1;
                continue;
            }

            if pos + 2 < end
                && chars[pos + 1] == 'x'
                && chars[pos + 2].is_ascii_hexdigit()
                && chars[pos + 3].is_ascii_hexdigit()
            {
                pos += 3;
                continue;
            }

            return false;
        }
    }
    true
}

/// Check a single dictionary line.
///
/// Blank lines and comments are valid.
pub fn validate_line(line: &str) -> bool {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return true;
    }
    if line.chars().count() < 2 || !line.ends_with('"') {
        return false;
    }

    match line.find('"') {
        Some(open) if open < line.len() - 1 => validate_entry(&line[open..]),
        _ => false,
    }
}

/// Validate the dictionary at `path`, copying its lines to `output` if given.
///
/// Copied lines always end in `\n`, whatever the line endings of the file. Stops at the first invalid line. Lines before it have already been copied.
pub fn validate_dict<W>(path: &Path, mut output: Option<&mut W>) -> Result<(), DictError>
where
    W: Write + ?Sized,
{
    let file =
        File::open(path).map_err(|e| io_error("could not open dictionary file", path, &e))?;
    let mut reader = BufReader::new(file);

    let mut line = String::new();
    let mut line_number = 0;
    loop {
        line.clear();
        let read = reader
            .read_line(&mut line)
            .map_err(|e| io_error("could not read dictionary file", path, &e))?;
        if read == 0 {
            break;
        }
        line_number += 1;

        if !validate_line(&line) {
            #[cfg(feature = "log")]
            log::warn!(
                "invalid dictionary entry '{}' at {}:{}",
                line.trim(),
                path.display(),
                line_number
            );
            return Err(DictError::InvalidEntry {
                path: path.to_path_buf(),
                line_number,
                line: line.trim().to_string(),
            });
        }

        if let Some(output) = output.as_deref_mut() {
            let content = line.strip_suffix('\n').unwrap_or(line.as_str());
            let content = content.strip_suffix('\r').unwrap_or(content);
            let newline = if content.len() < line.len() { "\n" } else { "" };
            output
                .write_all(content.as_bytes())
                .and_then(|_| output.write_all(newline.as_bytes()))
                .map_err(|e| io_error("could not write entries of", path, &e))?;
        }
    }

    #[cfg(feature = "log")]
    log::debug!("validated {} lines of {}", line_number, path.display());
    Ok(())
}

/// Validate each dictionary in turn, concatenating them into `output` if given.
///
/// Stops at the first dictionary that fails.
pub fn merge_dicts<P, W>(paths: &[P], mut output: Option<&mut W>) -> Result<(), DictError>
where
    P: AsRef<Path>,
    W: Write + ?Sized,
{
    for path in paths {
        validate_dict(path.as_ref(), output.as_deref_mut())?;
    }
    Ok(())
}

/// Validate each dictionary in turn without producing any output.
pub fn check_dicts<P: AsRef<Path>>(paths: &[P]) -> Result<(), DictError> {
    merge_dicts(paths, None::<&mut io::Sink>)
}
