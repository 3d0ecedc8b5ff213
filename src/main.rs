#[tokio::main]
async fn main() {
    fitclub_backend::run().await;
}
