use ask_codex::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    ask_codex::logging::init();

    let config = Config::from_env()?;
    let args: Vec<String> = std::env::args().collect();
    ask_codex::run::run(args, None, &config).await?;
    Ok(())
}
