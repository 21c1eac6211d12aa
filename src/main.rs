// src/main.rs
/**
* date: 2025. 4. 6.
* description: command line entry point for signature checks, uploads and history scans
**/

use sigscan::analyzer::{format_history, scan_node};
use sigscan::auth::{matches_claimed_address, verify};
use sigscan::config::Settings;
use sigscan::content::IpfsClient;
use sigscan::repository::RepositoryWrapper;
use sigscan::service::{UploadRequest, UploadService};
use sigscan::shutdown::shutdown_signal;
use sigscan::types::AppError;

use chrono::Utc;
use clap::{Parser, Subcommand};
use log::{error, info};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Cli {
  /// Configuration file, layered under APP_* environment variables.
  #[clap(long, default_value = "./config.toml")]
  config: String,

  #[clap(subcommand)]
  command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
  /// Recover the address that signed a message.
  Verify {
    #[clap(long)]
    message: String,
    #[clap(long)]
    signature: String,
    /// Address the signer claims to be; the exit code is 1 when it does not match.
    #[clap(long)]
    address: Option<String>,
  },
  /// Scan the node for transactions sent from or to an address.
  History {
    #[clap(long)]
    address: String,
    /// Accepted for compatibility; scans always start at genesis.
    #[clap(long, default_value_t = 0)]
    start_block: u64,
    /// 0 scans up to the current head. Defaults to node.end_block from config.
    #[clap(long)]
    end_block: Option<u64>,
    #[clap(long)]
    rpc_url: Option<String>,
  },
  /// Upload a signed audio file to the content store and record it.
  Upload {
    #[clap(long, value_name = "FILE")]
    file: PathBuf,
    #[clap(long)]
    message: String,
    #[clap(long)]
    signature: String,
    #[clap(long)]
    address: String,
  },
  /// List stored uploads.
  List,
}

#[tokio::main]
async fn main() -> ExitCode {
  // 1. Initialize logging
  env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

  let cli = Cli::parse();

  // 2. Load configuration
  let settings = match Settings::from_path(&cli.config) {
    Ok(settings) => settings,
    Err(e) => {
      error!("Failed to load configuration: {}", e);
      return ExitCode::FAILURE;
    }
  };

  match run(cli.command, settings).await {
    Ok(code) => code,
    Err(e) if e.is_auth_rejection() => {
      error!("Rejected: {}", e);
      ExitCode::from(1)
    }
    Err(e) => {
      error!("{}", e);
      ExitCode::from(2)
    }
  }
}

async fn run(command: Command, settings: Settings) -> Result<ExitCode, AppError> {
  match command {
    Command::Verify { message, signature, address } => {
      let recovered = verify(&message, &signature)?;
      println!("Recovered address: {}", recovered);
      if let Some(claimed) = address {
        if !matches_claimed_address(&recovered, &claimed) {
          println!("Does not match {}", claimed);
          return Ok(ExitCode::from(1));
        }
        println!("Matches {}", claimed);
      }
      Ok(ExitCode::SUCCESS)
    }
    Command::History { address, start_block, end_block, rpc_url } => {
      let rpc_url = rpc_url.unwrap_or(settings.node.rpc_url);
      let end_block = end_block.unwrap_or(settings.node.end_block);
      let timeout_secs = settings.scanner.timeout_secs;

      let scan = tokio::time::timeout(
        Duration::from_secs(timeout_secs),
        scan_node(&address, start_block, end_block, &rpc_url),
      );

      let transactions = tokio::select! {
        result = scan => result.map_err(|_| AppError::Timeout(timeout_secs))??,
        _ = shutdown_signal() => {
          info!("Scan cancelled.");
          return Ok(ExitCode::from(130));
        }
      };

      print!("{}", format_history(&transactions));
      Ok(ExitCode::SUCCESS)
    }
    Command::Upload { file, message, signature, address } => {
      let bytes = tokio::fs::read(&file).await?;
      let filename = file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "upload".to_string());

      let service = build_upload_service(&settings).await?;
      let receipt = service.upload(UploadRequest {
        message,
        signature,
        wallet_address: address,
        filename,
        bytes,
        uploaded_at: Utc::now(),
      }).await?;

      println!("Uploaded as {} (record #{})", receipt.cid, receipt.music_id);
      Ok(ExitCode::SUCCESS)
    }
    Command::List => {
      let service = build_upload_service(&settings).await?;
      let music = service.list_music().await?;
      println!("{}", serde_json::to_string_pretty(&music)?);
      Ok(ExitCode::SUCCESS)
    }
  }
}

async fn build_upload_service(settings: &Settings) -> Result<UploadService<IpfsClient, RepositoryWrapper>, AppError> {
  let store = Arc::new(IpfsClient::new(settings.content_store.api_url.clone()));
  let repository = Arc::new(RepositoryWrapper::from_settings(&settings.repository).await?);
  Ok(UploadService::new(store, repository, settings.content_store.gateway_url.clone()))
}
