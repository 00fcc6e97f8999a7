use ollama_dev::{Ollama, OllamaConfig};

#[tokio::main]
async fn main() {
    env_logger::init();

    let ollama = Ollama::new(OllamaConfig::default());

    match ollama
        .generate_code("Write a function that returns the nth Fibonacci number", None)
        .await
    {
        Some(code) => println!("{code}"),
        None => eprintln!("no completion; is the server running?"),
    }
}
