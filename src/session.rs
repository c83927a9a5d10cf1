//! Transfer session owning the reusable engine handle
//!
//! One `TransferSession` wraps one libcurl easy handle for its whole lifetime.
//! Every operation starts from a full handle reset, so options set for a
//! previous upload cannot leak into a later download or vice versa. The handle
//! is released when the session drops.

use curl::easy::{Easy, ReadError};
use log::{info, warn};
use std::io::{Read, Write};

use crate::client::Credentials;
use crate::error::Result;
use crate::transfer::{DownloadRequest, TransferProgress, UploadRequest};

// CURLOPT_FTP_CREATE_MISSING_DIRS is not bound by the curl crate; long option
// 110 in curl/curl.h.
const CURLOPT_FTP_CREATE_MISSING_DIRS: curl_sys::CURLoption = 110;

// CURLINFO_DOUBLE (0x300000) + 9 and + 10 in curl/curl.h; not bound either
const CURLINFO_SPEED_DOWNLOAD: curl_sys::CURLINFO = 0x30_0000 + 9;
const CURLINFO_SPEED_UPLOAD: curl_sys::CURLINFO = 0x30_0000 + 10;

/// Owns the reusable engine handle plus the per-direction progress state
pub struct TransferSession {
    easy: Easy,
    progress: TransferProgress,
}

impl TransferSession {
    /// Initialize the engine and allocate the reusable handle.
    ///
    /// Global engine initialization runs at most once per process no matter
    /// how many sessions are created. libcurl aborts the process when global
    /// init fails and `Easy::new` panics when the handle cannot be allocated;
    /// neither is recoverable, since no transfer can ever succeed without
    /// them.
    pub fn new() -> Self {
        curl::init();
        info!("libcurl {}", curl::Version::get().version());

        Self {
            easy: Easy::new(),
            progress: TransferProgress::new(),
        }
    }

    /// Configure the handle for one upload and run the blocking perform call.
    ///
    /// The request's file handle moves into the scoped read callback and is
    /// released when the transfer scope ends, on success and failure alike.
    pub fn upload(
        &mut self,
        url: &str,
        credentials: &Credentials,
        request: UploadRequest,
    ) -> Result<()> {
        self.configure_common(url, credentials)?;
        self.easy.upload(true)?;
        self.easy.in_filesize(request.size())?;
        self.enable_create_missing_dirs();
        self.progress.begin_upload();

        let mut file = request.into_file();
        let progress = &mut self.progress;
        let raw = self.easy.raw();

        let mut transfer = self.easy.transfer();
        transfer.read_function(move |into| file.read(into).map_err(|_| ReadError::Abort))?;
        transfer.progress_function(move |_dltotal, _dlnow, ultotal, ulnow| {
            progress.on_upload(ultotal, ulnow, || query_speed(raw, CURLINFO_SPEED_UPLOAD))
        })?;
        transfer.perform()?;

        Ok(())
    }

    /// Configure the handle for one download and run the blocking perform
    /// call. Symmetric to `upload` with the write side of the adapter.
    pub fn download(
        &mut self,
        url: &str,
        credentials: &Credentials,
        request: DownloadRequest,
    ) -> Result<()> {
        self.configure_common(url, credentials)?;
        self.progress.begin_download();

        let mut file = request.into_file();
        let progress = &mut self.progress;
        let raw = self.easy.raw();

        let mut transfer = self.easy.transfer();
        transfer.write_function(move |data| match file.write_all(data) {
            Ok(()) => Ok(data.len()),
            // A short count signals the write failure to the engine
            Err(_) => Ok(0),
        })?;
        transfer.progress_function(move |dltotal, dlnow, _ultotal, _ulnow| {
            progress.on_download(dltotal, dlnow, || query_speed(raw, CURLINFO_SPEED_DOWNLOAD))
        })?;
        transfer.perform()?;

        Ok(())
    }

    /// Reset the handle and apply the options shared by both directions
    fn configure_common(&mut self, url: &str, credentials: &Credentials) -> Result<()> {
        self.easy.reset();
        self.easy.url(url)?;
        self.easy.username(credentials.username())?;
        self.easy.password(credentials.password())?;
        self.easy.progress(true)?;
        self.easy.verbose(log::log_enabled!(log::Level::Debug))?;
        Ok(())
    }

    /// Let the engine create missing remote directories for uploads.
    ///
    /// The safe binding does not expose this option, so it is set through the
    /// raw handle. Non-fatal: uploads into existing directories still work.
    fn enable_create_missing_dirs(&mut self) {
        unsafe {
            let rc = curl_sys::curl_easy_setopt(
                self.easy.raw(),
                CURLOPT_FTP_CREATE_MISSING_DIRS,
                1 as std::os::raw::c_long,
            );
            if rc != curl_sys::CURLE_OK {
                warn!("could not enable remote directory creation (rc={})", rc);
            }
        }
    }
}

impl Default for TransferSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Instantaneous per-direction transfer speed straight from the engine, in
/// bytes per second. Reads zero when the query fails.
///
/// Called from inside the progress callback while the handle is driving a
/// transfer; the engine explicitly supports getinfo queries during callbacks.
fn query_speed(raw: *mut curl_sys::CURL, info: curl_sys::CURLINFO) -> f64 {
    let mut speed = 0.0f64;
    let rc = unsafe { curl_sys::curl_easy_getinfo(raw, info, &mut speed as *mut f64) };
    if rc == curl_sys::CURLE_OK { speed } else { 0.0 }
}
