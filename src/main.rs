use std::path::Path;
use std::process;

use ftp_courier::{ClientConfig, FtpClient, logging};

fn main() {
    logging::init();

    let config = match ClientConfig::load(None) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            print_usage();
            process::exit(1);
        }
    };
    log::info!("{}", config);

    let mut client = FtpClient::new();
    client.set_host_and_credentials(
        &config.auth.username,
        &config.auth.password,
        &config.server.host,
        config.server.port,
    );

    let args: Vec<String> = std::env::args().collect();
    let outcome = match (args.get(1).map(String::as_str), args.get(2)) {
        (Some("upload"), Some(local_path)) => {
            client.upload(Path::new(local_path), args.get(3).map(String::as_str))
        }
        (Some("download"), Some(remote_name)) => {
            client.download(remote_name, args.get(3).map(Path::new))
        }
        _ => {
            print_usage();
            process::exit(2);
        }
    };

    if let Err(e) = outcome {
        eprintln!("Transfer failed: {}", e);
        process::exit(1);
    }
}

fn print_usage() {
    println!("ftp-courier");
    println!("Usage:");
    println!("  ftp-courier upload <local_path> [remote_name]");
    println!("  ftp-courier download <remote_name> [local_path]");
    println!("Configuration (ftp-courier.toml or environment):");
    println!("  FTP_COURIER_HOST=127.0.0.1");
    println!("  FTP_COURIER_PORT=21");
    println!("  FTP_COURIER_USER=alice");
    println!("  FTP_COURIER_PASSWORD=secret");
    println!("  RUST_LOG=info");
}
