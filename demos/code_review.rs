use ollama_dev::{Ollama, OllamaConfig};

const SNIPPET: &str = r#"fn mean(values: &Vec<f64>) -> f64 {
    let mut total = 0.0;
    for value in values {
        total = total + value;
    }
    total / values.len() as f64
}"#;

#[tokio::main]
async fn main() {
    env_logger::init();

    let ollama = Ollama::new(OllamaConfig::default());

    if let Some(review) = ollama.review_code(SNIPPET, Some("Rust")).await {
        println!("Review:\n{review}\n");
    }

    if let Some(tests) = ollama.generate_tests(SNIPPET, "cargo test").await {
        println!("Suggested tests:\n{tests}");
    }
}
