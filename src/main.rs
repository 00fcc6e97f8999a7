use ollama_dev::{Method, Ollama, OllamaConfig, OllamaError};
use serde_json::json;

#[tokio::main]
async fn main() {
    env_logger::init();

    if let Err(err) = smoke_test().await {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

/// Runs the connectivity check and two canned generation requests against the
/// local server, printing whatever comes back.
async fn smoke_test() -> Result<(), OllamaError> {
    let ollama = Ollama::new(OllamaConfig::default());
    let model = ollama.config.model.clone();

    println!("Checking connection to Ollama...");
    let tags = ollama.request("/api/tags", Method::GET, None).await?;
    let names: Vec<&str> = tags["models"]
        .as_array()
        .map(|models| {
            models
                .iter()
                .filter_map(|model| model["name"].as_str())
                .collect()
        })
        .unwrap_or_default();
    println!("Connection OK");
    println!("Available models: {names:?}");

    println!("\nTesting code generation...");
    let generated = ollama
        .request(
            "/api/generate",
            Method::POST,
            Some(json!({
                "model": model,
                "prompt": "Write a Rust function that validates an email address",
                "stream": false,
            })),
        )
        .await?;
    println!("Generated code:");
    println!("{}", generated["response"].as_str().unwrap_or_default());

    println!("\nTesting code explanation...");
    let explained = ollama
        .request(
            "/api/generate",
            Method::POST,
            Some(json!({
                "model": model,
                "prompt": "Explain this code: let doubled: Vec<i32> = [1, 2, 3].iter().map(|x| x * 2).collect();",
                "stream": false,
            })),
        )
        .await?;
    println!("Explanation:");
    println!("{}", explained["response"].as_str().unwrap_or_default());

    Ok(())
}
