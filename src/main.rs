#[tokio::main]
async fn main() {
  // Minimal CLI: support --version/-V and --help/-h
  let mut args = std::env::args().skip(1);
  if let Some(arg) = args.next() {
    if arg == "--version" || arg == "-V" {
      println!("consultrack {}", env!("CARGO_PKG_VERSION"));
      return;
    }
    if arg == "--help" || arg == "-h" {
      eprintln!("Usage: consultrack [--version]");
      eprintln!();
      eprintln!("Environment:");
      eprintln!("  CONSULTRACK_DATABASE  sqlx SQLite URL (default sqlite://emails.db)");
      eprintln!("  CONSULTRACK_ADDR      listen address (default 127.0.0.1:3000)");
      eprintln!("  CONSULTRACK_PERSIST   store tracking events (default true)");
      eprintln!("  RUST_LOG              log filter (default info)");
      return;
    }
  }

  if let Err(e) = consultrack::app::run().await {
    eprintln!("error: {e}");
    std::process::exit(1);
  }
}
