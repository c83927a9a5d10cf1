//! Public client surface for ftp-courier
//!
//! `FtpClient` remembers the server address and credentials across calls and
//! drives one blocking upload or download at a time through its owned
//! `TransferSession`. Exclusive access during a transfer is enforced by the
//! `&mut self` receivers.

use log::{error, info, warn};
use std::fmt;
use std::path::Path;

use crate::error::{FtpClientError, Result};
use crate::session::TransferSession;
use crate::transfer::{DownloadRequest, UploadRequest};

/// Standard FTP control port; omitted from rendered URLs
pub const DEFAULT_FTP_PORT: u16 = 21;

/// Login credentials handed to the engine per operation
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    pub fn new(username: &str, password: &str) -> Self {
        Self {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    /// The `user:pass` rendering the engine receives
    pub fn userpwd(&self) -> String {
        format!("{}:{}", self.username, self.password)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// FTP root URL derived from host and port.
///
/// The port segment is omitted exactly when it equals the default port 21.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerUrl(String);

impl ServerUrl {
    pub fn new(host: &str, port: u16) -> Self {
        if port == DEFAULT_FTP_PORT {
            Self(format!("ftp://{}/", host))
        } else {
            Self(format!("ftp://{}:{}/", host, port))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Full remote URL for one file under the server root
    pub fn join(&self, remote_name: &str) -> String {
        format!("{}{}", self.0, remote_name)
    }
}

impl fmt::Display for ServerUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Main FTP transfer client
pub struct FtpClient {
    session: TransferSession,
    server_url: Option<ServerUrl>,
    credentials: Option<Credentials>,
}

impl FtpClient {
    /// Create a client with an initialized transfer session and no server or
    /// credentials configured yet
    pub fn new() -> Self {
        Self {
            session: TransferSession::new(),
            server_url: None,
            credentials: None,
        }
    }

    /// Set the FTP server address. Ignored (with a warning) when `host` is
    /// empty; operations then keep failing until a server is configured.
    pub fn set_host(&mut self, host: &str, port: u16) {
        if host.is_empty() {
            warn!("ignoring set_host with empty host");
            return;
        }

        let url = ServerUrl::new(host, port);
        info!("FTP server set to {}", url);
        self.server_url = Some(url);
    }

    /// Set the login credentials. Ignored (with a warning) when either part
    /// is empty.
    pub fn set_credentials(&mut self, username: &str, password: &str) {
        if username.is_empty() || password.is_empty() {
            warn!("ignoring set_credentials with empty username or password");
            return;
        }

        self.credentials = Some(Credentials::new(username, password));
    }

    /// `set_credentials` followed by `set_host`
    pub fn set_host_and_credentials(
        &mut self,
        username: &str,
        password: &str,
        host: &str,
        port: u16,
    ) {
        self.set_credentials(username, password);
        self.set_host(host, port);
    }

    pub fn server_url(&self) -> Option<&ServerUrl> {
        self.server_url.as_ref()
    }

    /// Upload a local file, blocking until the transfer finishes.
    ///
    /// The remote name defaults to the file name of `local_path`. Fails
    /// before any engine call when no server or credentials are configured,
    /// when the file cannot be opened, or when it is empty.
    pub fn upload(&mut self, local_path: &Path, remote_name: Option<&str>) -> Result<()> {
        let result = self.try_upload(local_path, remote_name);
        if let Err(ref e) = result {
            error!("upload of '{}' failed: {}", local_path.display(), e);
        }
        result
    }

    fn try_upload(&mut self, local_path: &Path, remote_name: Option<&str>) -> Result<()> {
        let server_url = self
            .server_url
            .as_ref()
            .ok_or(FtpClientError::ServerNotConfigured)?;
        let credentials = self
            .credentials
            .as_ref()
            .ok_or(FtpClientError::CredentialsNotConfigured)?;

        let request = UploadRequest::open(local_path, remote_name)?;
        let url = server_url.join(request.remote_name());

        info!(
            "uploading '{}' ({} bytes) to {}",
            local_path.display(),
            request.size(),
            url
        );
        self.session.upload(&url, credentials, request)?;
        info!("upload completed: {}", url);

        Ok(())
    }

    /// Download a remote file, blocking until the transfer finishes.
    ///
    /// The local destination defaults to `remote_name`. A missing remote file
    /// is not distinguished from other engine failures; the engine's error
    /// text carries the diagnosis.
    pub fn download(&mut self, remote_name: &str, local_path: Option<&Path>) -> Result<()> {
        let result = self.try_download(remote_name, local_path);
        if let Err(ref e) = result {
            error!("download of '{}' failed: {}", remote_name, e);
        }
        result
    }

    fn try_download(&mut self, remote_name: &str, local_path: Option<&Path>) -> Result<()> {
        let server_url = self
            .server_url
            .as_ref()
            .ok_or(FtpClientError::ServerNotConfigured)?;
        let credentials = self
            .credentials
            .as_ref()
            .ok_or(FtpClientError::CredentialsNotConfigured)?;

        if remote_name.is_empty() {
            return Err(FtpClientError::MissingRemoteName);
        }

        let request = DownloadRequest::create(remote_name, local_path)?;
        let url = server_url.join(remote_name);

        info!(
            "downloading {} to '{}'",
            url,
            request.local_path().display()
        );
        self.session.download(&url, credentials, request)?;
        info!("download completed: {}", url);

        Ok(())
    }
}

impl Default for FtpClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("ftp-courier-client-{}-{}", std::process::id(), name))
    }

    #[test]
    fn test_server_url_omits_default_port() {
        assert_eq!(
            ServerUrl::new("192.168.1.9", DEFAULT_FTP_PORT).as_str(),
            "ftp://192.168.1.9/"
        );
    }

    #[test]
    fn test_server_url_keeps_non_default_port() {
        assert_eq!(
            ServerUrl::new("192.168.1.9", 2121).as_str(),
            "ftp://192.168.1.9:2121/"
        );
        assert_eq!(ServerUrl::new("ftp.example.com", 990).as_str(), "ftp://ftp.example.com:990/");
    }

    #[test]
    fn test_server_url_join() {
        let url = ServerUrl::new("10.0.0.2", 2121);
        assert_eq!(url.join("backup/data.tar"), "ftp://10.0.0.2:2121/backup/data.tar");
    }

    #[test]
    fn test_credentials_userpwd_rendering() {
        assert_eq!(Credentials::new("u", "p").userpwd(), "u:p");
    }

    #[test]
    fn test_credentials_debug_redacts_password() {
        let rendered = format!("{:?}", Credentials::new("alice", "s3cret"));
        assert!(rendered.contains("alice"));
        assert!(!rendered.contains("s3cret"));
    }

    #[test]
    fn test_empty_setter_arguments_are_ignored() {
        let mut client = FtpClient::new();

        client.set_host("", 21);
        assert!(client.server_url().is_none());

        client.set_credentials("user", "");
        client.set_credentials("", "pass");
        assert!(client.credentials.is_none());

        client.set_host_and_credentials("user", "pass", "127.0.0.1", 2121);
        assert_eq!(
            client.server_url().map(ServerUrl::as_str),
            Some("ftp://127.0.0.1:2121/")
        );
        assert_eq!(client.credentials.as_ref().map(Credentials::userpwd).as_deref(), Some("user:pass"));
    }

    #[test]
    fn test_upload_without_server_fails_before_touching_files() {
        let mut client = FtpClient::new();

        // The path does not exist: reaching the filesystem would surface a
        // FileOpen error instead of the configuration error
        let err = client
            .upload(Path::new("/definitely/not/a/real/file.bin"), None)
            .unwrap_err();
        assert!(matches!(err, FtpClientError::ServerNotConfigured));
    }

    #[test]
    fn test_upload_without_credentials_fails() {
        let mut client = FtpClient::new();
        client.set_host("127.0.0.1", 2121);

        let err = client
            .upload(Path::new("/definitely/not/a/real/file.bin"), None)
            .unwrap_err();
        assert!(matches!(err, FtpClientError::CredentialsNotConfigured));
    }

    #[test]
    fn test_upload_of_empty_file_fails_before_engine_call() {
        let path = temp_path("empty-upload.bin");
        fs::write(&path, b"").unwrap();

        let mut client = FtpClient::new();
        client.set_host_and_credentials("user", "pass", "127.0.0.1", 2121);

        let err = client.upload(&path, None).unwrap_err();
        assert!(matches!(err, FtpClientError::EmptyUpload(_)));

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_download_without_server_creates_no_file() {
        let destination = temp_path("never-created.bin");

        let mut client = FtpClient::new();
        let err = client
            .download("remote.bin", Some(&destination))
            .unwrap_err();

        assert!(matches!(err, FtpClientError::ServerNotConfigured));
        assert!(!destination.exists());
    }

    #[test]
    fn test_download_with_empty_remote_name_fails() {
        let mut client = FtpClient::new();
        client.set_host_and_credentials("user", "pass", "127.0.0.1", 2121);

        let err = client.download("", None).unwrap_err();
        assert!(matches!(err, FtpClientError::MissingRemoteName));
    }
}
