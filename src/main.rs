#[tokio::main]
async fn main() {
    if let Err(e) = nutrisafe::run().await {
        eprintln!("fatal: {e}");
        std::process::exit(1);
    }
}
