use std::time::Duration;

use log::{debug, error};
use reqwest::header::CONTENT_TYPE;
use reqwest::Method;
use serde_json::{json, Value};

use crate::config::OllamaConfig;
use crate::error::OllamaError;
use crate::types::{GenerateOptions, Message, Role};

const TAGS_PATH: &str = "/api/tags";
const GENERATE_PATH: &str = "/api/generate";
const CHAT_PATH: &str = "/api/chat";

/// System message prepended to every chat exchange.
const CHAT_SYSTEM_PROMPT: &str =
    "You are a programming assistant with expertise in multiple languages.";

/// How long [`Ollama::is_connected`] waits before declaring the server
/// unreachable. The raw request helper itself enforces no timeout.
const CONNECT_PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Client for a local Ollama server.
///
/// One [`request`](Ollama::request) call issues one HTTP request; the helper
/// methods layered on top fill in the payloads and pick the response field
/// their callers care about.
#[derive(Debug, Clone)]
pub struct Ollama {
    pub config: OllamaConfig,
    client: reqwest::Client,
}

impl Ollama {
    pub fn new(config: OllamaConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    /// Performs one HTTP request against the configured server and decodes the
    /// response body as JSON.
    ///
    /// The method is passed through verbatim. A body, when present, is sent as
    /// `application/json`; without one, no payload and no `Content-Type`
    /// header go out. The whole response is buffered before decoding, and the
    /// HTTP status is not inspected: an error body like `{"error": "..."}`
    /// resolves as a normal value. Fails with [`OllamaError::Transport`] when
    /// no response arrives and with [`OllamaError::InvalidResponse`] when the
    /// body is not JSON. No timeout, no retry.
    pub async fn request(
        &self,
        path: &str,
        method: Method,
        body: Option<Value>,
    ) -> Result<Value, OllamaError> {
        let url = format!("{}{}", self.config.base_url(), path);
        debug!("{method} {url}");

        let mut request = self.client.request(method, url);
        if let Some(body) = body {
            request = request
                .header(CONTENT_TYPE, "application/json")
                .body(body.to_string());
        }

        let text = request.send().await?.text().await?;
        serde_json::from_str(&text).map_err(|err| {
            debug!("response body was not valid JSON: {err}");
            OllamaError::InvalidResponse
        })
    }

    /// Whether the server answers the tags endpoint with a success status
    /// within five seconds.
    pub async fn is_connected(&self) -> bool {
        let url = format!("{}{}", self.config.base_url(), TAGS_PATH);
        match tokio::time::timeout(CONNECT_PROBE_TIMEOUT, self.client.get(url).send()).await {
            Ok(Ok(response)) => response.status().is_success(),
            Ok(Err(err)) => {
                debug!("connectivity probe failed: {err}");
                false
            }
            Err(_) => {
                debug!("connectivity probe timed out");
                false
            }
        }
    }

    /// Names of the models the server has available; empty on any failure.
    pub async fn list_models(&self) -> Vec<String> {
        match self.request(TAGS_PATH, Method::GET, None).await {
            Ok(value) => model_names(&value),
            Err(err) => {
                error!("listing models failed: {err}");
                Vec::new()
            }
        }
    }

    /// Generates text for a prompt; `None` on failure (the error is logged,
    /// not propagated).
    ///
    /// Passing no options applies [`GenerateOptions::code_defaults`].
    pub async fn generate_code(
        &self,
        prompt: &str,
        options: Option<GenerateOptions>,
    ) -> Option<String> {
        let options = options.unwrap_or_else(GenerateOptions::code_defaults);
        let body = json!({
            "model": self.config.model,
            "prompt": prompt,
            "stream": false,
            "options": options,
        });

        match self.request(GENERATE_PATH, Method::POST, Some(body)).await {
            Ok(value) => Some(response_text(&value)),
            Err(err) => {
                error!("code generation failed: {err}");
                None
            }
        }
    }

    /// Completes code at a cursor position; `None` on failure.
    ///
    /// Generation stops at the first blank line or line comment.
    pub async fn code_completion(&self, prompt: &str) -> Option<String> {
        let options = GenerateOptions {
            temperature: Some(0.2),
            top_p: Some(0.9),
            stop: Some(vec!["\n\n".to_string(), "//".to_string()]),
        };
        self.generate_code(prompt, Some(options)).await
    }

    /// Sends one chat message, with optional earlier turns as context, and
    /// returns the assistant's reply; `None` on failure.
    pub async fn chat(&self, message: &str, context: &[Message]) -> Option<String> {
        let mut messages = Vec::with_capacity(context.len() + 2);
        messages.push(Message::new(Role::System, CHAT_SYSTEM_PROMPT));
        messages.extend_from_slice(context);
        messages.push(Message::new(Role::User, message));

        let body = json!({
            "model": self.config.model,
            "messages": messages,
            "stream": false,
        });

        match self.request(CHAT_PATH, Method::POST, Some(body)).await {
            Ok(value) => Some(message_content(&value)),
            Err(err) => {
                error!("chat failed: {err}");
                None
            }
        }
    }

    /// Asks the model to explain a piece of code.
    pub async fn explain_code(&self, code: &str, language: Option<&str>) -> Option<String> {
        self.generate_code(&explain_prompt(code, language), None)
            .await
    }

    /// Asks the model to review code and suggest improvements.
    pub async fn review_code(&self, code: &str, language: Option<&str>) -> Option<String> {
        self.generate_code(&review_prompt(code, language), None)
            .await
    }

    /// Asks the model to write unit tests for a function with the given test
    /// framework.
    pub async fn generate_tests(&self, code: &str, framework: &str) -> Option<String> {
        self.generate_code(&tests_prompt(code, framework), None)
            .await
    }

    /// Asks the model to find and fix errors in code, optionally quoting an
    /// observed error message.
    pub async fn debug_code(&self, code: &str, error_message: Option<&str>) -> Option<String> {
        self.generate_code(&debug_prompt(code, error_message), None)
            .await
    }

    /// Asks the model to refactor code toward the given goals; when none are
    /// given, readability and performance.
    pub async fn refactor_code(&self, code: &str, goals: Option<&str>) -> Option<String> {
        self.generate_code(&refactor_prompt(code, goals), None)
            .await
    }
}

impl Default for Ollama {
    fn default() -> Self {
        Self::new(OllamaConfig::default())
    }
}

fn model_names(value: &Value) -> Vec<String> {
    value["models"]
        .as_array()
        .map(|models| {
            models
                .iter()
                .filter_map(|model| model["name"].as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

fn response_text(value: &Value) -> String {
    value["response"].as_str().unwrap_or_default().to_string()
}

fn message_content(value: &Value) -> String {
    value["message"]["content"]
        .as_str()
        .unwrap_or_default()
        .to_string()
}

fn explain_prompt(code: &str, language: Option<&str>) -> String {
    match language {
        Some(language) => format!("Explain this {language} code:\n\n```\n{code}\n```"),
        None => format!("Explain this code:\n\n```\n{code}\n```"),
    }
}

fn review_prompt(code: &str, language: Option<&str>) -> String {
    match language {
        Some(language) => {
            format!("Review this {language} code and suggest improvements:\n\n```\n{code}\n```")
        }
        None => format!("Review this code and suggest improvements:\n\n```\n{code}\n```"),
    }
}

fn tests_prompt(code: &str, framework: &str) -> String {
    format!("Generate unit tests using {framework} for this function:\n\n```\n{code}\n```")
}

fn debug_prompt(code: &str, error_message: Option<&str>) -> String {
    match error_message {
        Some(error_message) => format!(
            "Find and fix errors in this code:\n\nError: {error_message}\n\n```\n{code}\n```"
        ),
        None => format!("Find and fix errors in this code:\n\n```\n{code}\n```"),
    }
}

fn refactor_prompt(code: &str, goals: Option<&str>) -> String {
    let goals = goals.unwrap_or("improve readability and performance");
    format!("Refactor this code to {goals}:\n\n```\n{code}\n```")
}
