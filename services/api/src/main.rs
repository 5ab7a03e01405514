use ivf_navigator_api::run;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("navigator error: {err}");
        std::process::exit(1);
    }
}
