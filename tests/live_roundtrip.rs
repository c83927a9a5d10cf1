//! Round-trip test against a live FTP server
//!
//! Ignored by default since it needs a reachable server. Point it at one with:
//!
//! ```text
//! FTP_COURIER_TEST_HOST=127.0.0.1 FTP_COURIER_TEST_PORT=2121 \
//! FTP_COURIER_TEST_USER=user FTP_COURIER_TEST_PASSWORD=pass \
//! cargo test --test live_roundtrip -- --ignored
//! ```

use std::env;
use std::fs;

use ftp_courier::{DEFAULT_FTP_PORT, FtpClient};

#[test]
#[ignore = "needs a live FTP server, see module docs"]
fn uploaded_bytes_come_back_identical() {
    let host = env::var("FTP_COURIER_TEST_HOST").expect("FTP_COURIER_TEST_HOST not set");
    let port = env::var("FTP_COURIER_TEST_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_FTP_PORT);
    let user = env::var("FTP_COURIER_TEST_USER").expect("FTP_COURIER_TEST_USER not set");
    let password = env::var("FTP_COURIER_TEST_PASSWORD").expect("FTP_COURIER_TEST_PASSWORD not set");

    let pid = std::process::id();
    let source = env::temp_dir().join(format!("ftp-courier-roundtrip-{pid}.bin"));
    let fetched = env::temp_dir().join(format!("ftp-courier-roundtrip-{pid}-copy.bin"));

    // Non-trivial payload so truncation or reordering would be caught
    let payload: Vec<u8> = (0..64 * 1024u32).map(|i| (i % 251) as u8).collect();
    fs::write(&source, &payload).unwrap();

    let mut client = FtpClient::new();
    client.set_host_and_credentials(&user, &password, &host, port);

    let remote_name = source.file_name().unwrap().to_str().unwrap().to_string();
    client.upload(&source, None).unwrap();
    client.download(&remote_name, Some(&fetched)).unwrap();

    assert_eq!(fs::read(&fetched).unwrap(), payload);

    fs::remove_file(&source).unwrap();
    fs::remove_file(&fetched).unwrap();
}
