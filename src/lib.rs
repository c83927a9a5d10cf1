//! ftp-courier: a small FTP transfer manager
//!
//! Wraps the libcurl easy interface behind a stateful client that remembers
//! server address and credentials across calls, drives blocking uploads and
//! downloads through one reusable engine handle, and reports progress and
//! throughput while a transfer runs.

pub mod client;
pub mod config;
pub mod error;
pub mod logging;
pub mod session;
pub mod transfer;

pub use client::{Credentials, DEFAULT_FTP_PORT, FtpClient, ServerUrl};
pub use config::ClientConfig;
pub use error::{FtpClientError, Result};
pub use session::TransferSession;
