use blog_post_generator::config::Config;

/// Builds a config pointing both upstream clients at stub servers.
pub fn test_config(openai_base_url: &str, currents_base_url: &str) -> Config {
    Config {
        server_addr: "127.0.0.1:0".parse().unwrap(),
        openai_api_key: "test-openai-key".to_string(),
        currents_api_key: "test-currents-key".to_string(),
        openai_base_url: openai_base_url.trim_end_matches('/').to_string(),
        currents_base_url: currents_base_url.trim_end_matches('/').to_string(),
    }
}

/// Minimal chat-completions response body with the given content.
pub fn chat_response(content: &str) -> String {
    serde_json::json!({
        "model": "gpt-4o-mini",
        "choices": [{
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop"
        }]
    })
    .to_string()
}

/// Currents-style response body with the given article titles.
pub fn news_response(titles: &[&str]) -> String {
    let news: Vec<_> = titles
        .iter()
        .map(|t| serde_json::json!({ "title": t }))
        .collect();
    serde_json::json!({ "status": "ok", "news": news }).to_string()
}
