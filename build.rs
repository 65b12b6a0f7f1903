use std::env;

const DEFAULT_OWNER: &str = "Fujita0113";
const DEFAULT_REPO: &str = "game-macro-assistant2";

fn main() {
    let owner = env::var("ASK_CODEX_OWNER").unwrap_or_else(|_| DEFAULT_OWNER.to_string());
    let repo = env::var("ASK_CODEX_REPO").unwrap_or_else(|_| DEFAULT_REPO.to_string());
    println!("cargo:rustc-env=ASK_CODEX_OWNER={owner}");
    println!("cargo:rustc-env=ASK_CODEX_REPO={repo}");
    println!("cargo:rerun-if-env-changed=ASK_CODEX_OWNER");
    println!("cargo:rerun-if-env-changed=ASK_CODEX_REPO");
}
