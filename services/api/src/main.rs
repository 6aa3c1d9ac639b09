use talent_ops_api::run;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("talent ops error: {err}");
        std::process::exit(1);
    }
}
