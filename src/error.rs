pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    Environment(&'static str),
    Io(std::io::Error),
    Config(String),
    Replay {
        line: usize,
        source: serde_json::Error,
    },
    AlreadyRegistered(String),
    NotRegistered(String),
    Task(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Environment(name) => write!(f, "missing environment variable {name}"),
            Error::Io(e) => write!(f, "I/O error: {e}"),
            Error::Config(message) => write!(f, "invalid configuration: {message}"),
            Error::Replay { line, source } => write!(f, "bad event on line {line}: {source}"),
            Error::AlreadyRegistered(name) => write!(f, r#"plugin "{name}" is already registered"#),
            Error::NotRegistered(name) => write!(f, r#"plugin "{name}" is not registered"#),
            Error::Task(message) => write!(f, "task failed: {message}"),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Self::Config(e.message().to_owned())
    }
}

impl From<tokio::task::JoinError> for Error {
    fn from(e: tokio::task::JoinError) -> Self {
        Self::Task(e.to_string())
    }
}
