//! Input parsing errors

use std::fmt;
use std::error::Error;

use sphbessel::constants::MAX_ORDER;

/// Why did reading the configuration fail?
#[derive(Debug,Copy,Clone,PartialEq)]
pub enum InputErrorKind {
    File,
    Syntax,
    Location,
    Conversion,
    Loop,
}

/// Error returned when the configuration file cannot be read,
/// or one of its fields is missing or malformed.
pub enum InputError {
    /// file path, reason it could not be read
    File(String, String),
    /// YAML scanner message
    Syntax(String),
    /// field path, first missing component
    Location(String, String),
    /// field path, what was wrong with the value
    Conversion(String, String),
    /// loop path, what was wrong with start/stop/step
    Loop(String, String),
}

/// Describes what the table tool expects to find at `path`,
/// if it is one of the fields it reads.
fn expected_form(path: &str) -> Option<String> {
    let form = match path {
        "table:functions" => "a list drawn from j, y, i, ic, k, kc, e.g. [j, y]".to_owned(),
        "table:order" => format!("an integer between 0 and {}, or a loop {{start, stop, step}}", MAX_ORDER),
        "table:x" => "a non-negative expression, or a loop {start, stop, step}".to_owned(),
        "output:file" => "a file name".to_owned(),
        "output:precision" => "a positive integer number of significant figures".to_owned(),
        _ => return None,
    };
    Some(form)
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            InputError::File(path, cause) => write!(f, "unable to open configuration file '{}': {}", path, cause)?,
            InputError::Syntax(cause) => write!(f, "configuration is not valid YAML: {}", cause)?,
            InputError::Location(path, missing) => {
                let top = path.split(':').next() == Some(missing.as_str());
                if top && path.contains(':') {
                    write!(f, "section '{}' is missing", missing)?
                } else {
                    write!(f, "'{}' is missing", path)?
                }
            },
            InputError::Conversion(path, cause) => write!(f, "could not read '{}': {}", path, cause)?,
            InputError::Loop(path, cause) => write!(f, "'{}' is not a valid loop: {}", path, cause)?,
        }

        let path = match self {
            InputError::Location(p, _) | InputError::Conversion(p, _) => Some(p.as_str()),
            InputError::Loop(p, _) => Some(p.trim_end_matches(":step")),
            _ => None,
        };

        if let Some(form) = path.and_then(expected_form) {
            write!(f, ", expected {}", form)?;
        }

        Ok(())
    }
}

impl fmt::Debug for InputError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl Error for InputError {}

impl InputError {
    pub fn file(path: &str, cause: &str) -> Self {
        InputError::File(path.to_owned(), cause.to_owned())
    }

    pub fn syntax(cause: &str) -> Self {
        InputError::Syntax(cause.to_owned())
    }

    pub fn location(path: &str, missing: &str) -> Self {
        InputError::Location(path.to_owned(), missing.to_owned())
    }

    pub fn conversion(path: &str, cause: &str) -> Self {
        InputError::Conversion(path.to_owned(), cause.to_owned())
    }

    pub fn bad_loop(path: &str, cause: &str) -> Self {
        InputError::Loop(path.to_owned(), cause.to_owned())
    }

    pub fn kind(&self) -> InputErrorKind {
        match self {
            InputError::File(..) => InputErrorKind::File,
            InputError::Syntax(..) => InputErrorKind::Syntax,
            InputError::Location(..) => InputErrorKind::Location,
            InputError::Conversion(..) => InputErrorKind::Conversion,
            InputError::Loop(..) => InputErrorKind::Loop,
        }
    }
}
