//! Per-operation transfer requests
//!
//! A request owns the local file handle for exactly one upload or download;
//! dropping it releases the handle on every exit path.

use std::fs::File;
use std::path::{Path, PathBuf};

use crate::error::{FtpClientError, Result};

/// Source file and target name for one upload
#[derive(Debug)]
pub struct UploadRequest {
    file: File,
    size: u64,
    remote_name: String,
}

impl UploadRequest {
    /// Open `local_path` for reading and resolve the remote file name.
    ///
    /// When no remote name is given the file name of `local_path` is used.
    /// Zero-byte sources are rejected before any engine work happens: an
    /// empty upload is treated as a misconfiguration, not a valid transfer.
    pub fn open(local_path: &Path, remote_name: Option<&str>) -> Result<Self> {
        let remote_name = match remote_name {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => derive_remote_name(local_path)?,
        };

        let file = File::open(local_path).map_err(|e| FtpClientError::FileOpen {
            path: local_path.to_path_buf(),
            source: e,
        })?;

        let size = file
            .metadata()
            .map_err(|e| FtpClientError::FileOpen {
                path: local_path.to_path_buf(),
                source: e,
            })?
            .len();

        if size == 0 {
            return Err(FtpClientError::EmptyUpload(local_path.to_path_buf()));
        }

        Ok(Self {
            file,
            size,
            remote_name,
        })
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn remote_name(&self) -> &str {
        &self.remote_name
    }

    pub fn into_file(self) -> File {
        self.file
    }
}

/// Destination file for one download
#[derive(Debug)]
pub struct DownloadRequest {
    file: File,
    local_path: PathBuf,
}

impl DownloadRequest {
    /// Create (or truncate) the local destination for writing.
    ///
    /// The destination defaults to `remote_name` interpreted as a local path
    /// when none is given.
    pub fn create(remote_name: &str, local_path: Option<&Path>) -> Result<Self> {
        let local_path = match local_path {
            Some(path) => path.to_path_buf(),
            None => PathBuf::from(remote_name),
        };

        let file = File::create(&local_path).map_err(|e| FtpClientError::FileOpen {
            path: local_path.clone(),
            source: e,
        })?;

        Ok(Self { file, local_path })
    }

    pub fn local_path(&self) -> &Path {
        &self.local_path
    }

    pub fn into_file(self) -> File {
        self.file
    }
}

/// Remote file name for an upload when the caller did not pick one
fn derive_remote_name(local_path: &Path) -> Result<String> {
    local_path
        .file_name()
        .and_then(|name| name.to_str())
        .map(str::to_string)
        .ok_or_else(|| FtpClientError::InvalidLocalPath(local_path.to_path_buf()))
}
