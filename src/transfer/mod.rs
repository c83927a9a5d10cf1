//! File transfer building blocks for ftp-courier

pub mod progress;
pub mod request;

pub use progress::{TransferProgress, format_speed};
pub use request::{DownloadRequest, UploadRequest};
