//! Transfer progress tracking and throughput formatting

use log::info;

const KIB: f64 = 1024.0;
const MIB: f64 = 1024.0 * 1024.0;
const GIB: f64 = 1024.0 * 1024.0 * 1024.0;

/// Progress state for the reusable transfer session.
///
/// The engine invokes the progress callback with cumulative byte counts; this
/// tracker only reports when the count for the active direction actually
/// changed, so unchanged callbacks produce no log output. The counter for a
/// direction is reset when an operation of that kind begins, so a fresh
/// transfer always reports relative to zero.
pub struct TransferProgress {
    last_uploaded: u64,
    last_downloaded: u64,
}

impl TransferProgress {
    pub fn new() -> Self {
        Self {
            last_uploaded: 0,
            last_downloaded: 0,
        }
    }

    /// Reset upload state at the start of an upload
    pub fn begin_upload(&mut self) {
        self.last_uploaded = 0;
    }

    /// Reset download state at the start of a download
    pub fn begin_download(&mut self) {
        self.last_downloaded = 0;
    }

    /// Engine progress callback for uploads.
    ///
    /// `speed` supplies the engine's current upload throughput in bytes per
    /// second and is only consulted when a report is actually emitted.
    /// Always returns `true`: progress reporting never aborts a transfer.
    pub fn on_upload<F>(&mut self, ultotal: f64, ulnow: f64, speed: F) -> bool
    where
        F: FnOnce() -> f64,
    {
        // No size information yet means not-yet-started, not an error
        if ultotal <= 0.0 || ulnow <= 0.0 {
            return true;
        }

        let transferred = ulnow as u64;
        if transferred != self.last_uploaded {
            let percentage = ulnow * 100.0 / ultotal;
            let speed = speed();
            info!("uploading {:.2}%...", percentage);
            info!("uploading speed: {}", format_speed(speed));
            self.last_uploaded = transferred;
        }

        true
    }

    /// Engine progress callback for downloads.
    pub fn on_download<F>(&mut self, dltotal: f64, dlnow: f64, speed: F) -> bool
    where
        F: FnOnce() -> f64,
    {
        if dltotal <= 0.0 || dlnow <= 0.0 {
            return true;
        }

        let transferred = dlnow as u64;
        if transferred != self.last_downloaded {
            let percentage = dlnow * 100.0 / dltotal;
            let speed = speed();
            info!("downloading {:.2}%...", percentage);
            info!("downloading speed: {}", format_speed(speed));
            self.last_downloaded = transferred;
        }

        true
    }

    pub fn last_uploaded(&self) -> u64 {
        self.last_uploaded
    }

    pub fn last_downloaded(&self) -> u64 {
        self.last_downloaded
    }
}

impl Default for TransferProgress {
    fn default() -> Self {
        Self::new()
    }
}

/// Format a byte rate with a binary-magnitude suffix.
///
/// Thresholds are half-open: `[0, 1024)` stays in B/s, `[1024, 1024^2)` scales
/// to KiB/s, and so on up to GiB/s. The value keeps default float formatting,
/// unlike the percentage lines which force two decimals.
pub fn format_speed(speed: f64) -> String {
    if speed < KIB {
        format!("{} B/s", speed)
    } else if speed < MIB {
        format!("{} KiB/s", speed / KIB)
    } else if speed < GIB {
        format!("{} MiB/s", speed / MIB)
    } else {
        format!("{} GiB/s", speed / GIB)
    }
}
