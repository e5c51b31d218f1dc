#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    plainpaste_lib::run_cli().await
}
