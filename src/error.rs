use std::fmt;
use std::io;
use std::path::PathBuf;

/// Main error type for ftp-courier
#[derive(Debug)]
pub enum FtpClientError {
    // Configuration errors
    ServerNotConfigured,
    CredentialsNotConfigured,
    MissingRemoteName,
    InvalidLocalPath(PathBuf),
    InvalidConfigValue(String),
    ConfigLoad(config::ConfigError),

    // Local file errors
    FileOpen { path: PathBuf, source: io::Error },
    EmptyUpload(PathBuf),

    // Engine errors (option setup or the perform call itself)
    Transfer(curl::Error),

    // IO errors
    Io(io::Error),
}

impl fmt::Display for FtpClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ServerNotConfigured => {
                write!(f, "No FTP server configured, call set_host first")
            }
            Self::CredentialsNotConfigured => {
                write!(f, "No credentials configured, call set_credentials first")
            }
            Self::MissingRemoteName => write!(f, "Remote file name is empty"),
            Self::InvalidLocalPath(path) => {
                write!(f, "Local path '{}' has no file name", path.display())
            }
            Self::InvalidConfigValue(msg) => write!(f, "Invalid config value: {}", msg),
            Self::ConfigLoad(err) => write!(f, "Cannot load configuration: {}", err),

            Self::FileOpen { path, source } => {
                write!(f, "Cannot open local file '{}': {}", path.display(), source)
            }
            Self::EmptyUpload(path) => {
                write!(f, "Refusing to upload empty file '{}'", path.display())
            }

            Self::Transfer(err) => write!(f, "Transfer failed: {}", err),

            Self::Io(err) => write!(f, "IO error: {}", err),
        }
    }
}

impl std::error::Error for FtpClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ConfigLoad(err) => Some(err),
            Self::FileOpen { source, .. } => Some(source),
            Self::Transfer(err) => Some(err),
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for FtpClientError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<curl::Error> for FtpClientError {
    fn from(err: curl::Error) -> Self {
        Self::Transfer(err)
    }
}

impl From<config::ConfigError> for FtpClientError {
    fn from(err: config::ConfigError) -> Self {
        Self::ConfigLoad(err)
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, FtpClientError>;
