use ollama_dev::{Message, Ollama, OllamaConfig, Role};

#[tokio::main]
async fn main() {
    env_logger::init();

    let ollama = Ollama::new(OllamaConfig::default());

    let context = vec![
        Message::new(Role::User, "I'm porting a Python script to Rust."),
        Message::new(Role::Assistant, "Happy to help. What does the script do?"),
    ];

    match ollama
        .chat(
            "It reads a CSV file and prints one column. Where do I start?",
            &context,
        )
        .await
    {
        Some(reply) => println!("{reply}"),
        None => eprintln!("no reply; is the server running?"),
    }
}
