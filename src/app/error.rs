use std::fmt;

#[derive(Debug)]
#[non_exhaustive]
pub enum Error {
    Manifest(config::ConfigError),
    Io(std::io::Error),
    Json(serde_json::Error),
    UnknownNode(String),
    DuplicateNode(String),
    AttachedNode(String),
    CyclicAttachment { parent: String, child: String },
    UnknownScenario(String),
}

impl ::std::error::Error for Error {
    fn source(&self) -> Option<&(dyn ::std::error::Error + 'static)> {
        match *self {
            Error::Manifest(ref err) => Some(err),
            Error::Io(ref err) => Some(err),
            Error::Json(ref err) => Some(err),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::Manifest(ref err) => write!(f, "Failed to load manifest: {}", err),
            Error::Io(ref err) => write!(f, "I/O error: {}", err),
            Error::Json(ref err) => write!(f, "Failed to serialize report: {}", err),
            Error::UnknownNode(ref id) => write!(f, "Node '{}' is not defined", id),
            Error::DuplicateNode(ref id) => write!(f, "Node '{}' is already defined", id),
            Error::AttachedNode(ref id) => write!(f, "Node '{}' already has a parent", id),
            Error::CyclicAttachment {
                ref parent,
                ref child,
            } => write!(
                f,
                "Node '{}' cannot be attached into its own subtree at '{}'",
                child, parent
            ),
            Error::UnknownScenario(ref name) => write!(f, "Scenario '{}' is not defined", name),
        }
    }
}

impl From<config::ConfigError> for Error {
    fn from(err: config::ConfigError) -> Self {
        Error::Manifest(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}
