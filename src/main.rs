#[tokio::main]
async fn main() {
  // Minimal CLI: support --version/-V
  let mut args = std::env::args().skip(1);
  if let Some(arg) = args.next() {
    if arg == "--version" || arg == "-V" {
      println!("logsink {}", env!("CARGO_PKG_VERSION"));
      return;
    }
    if arg == "--help" || arg == "-h" {
      eprintln!("Usage: logsink [--version]");
      eprintln!();
      eprintln!("Environment:");
      eprintln!("  DATABASE_URL              sqlx SQLite URL (default sqlite://logsink.db)");
      eprintln!("  DATABASE_MAX_CONNECTIONS  pool size (default 5)");
      eprintln!("  HOST                      bind address (default 0.0.0.0)");
      eprintln!("  PORT                      listening port (default 3000)");
      eprintln!("  RUST_LOG                  log filter (default info)");
      return;
    }
  }

  if let Err(e) = logsink::app::run().await {
    eprintln!("error: {e}");
    std::process::exit(1);
  }
}
