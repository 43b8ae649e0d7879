use tracing::info;

use crate::api::models::GeneratedPost;
use crate::config::Config;
use crate::error::Result;
use crate::llm::{CompletionParams, LlmClient};
use crate::news::NewsClient;

/// Builds a blog post from a topic by chaining a news lookup and three
/// dependent generation calls. Steps run strictly in order; the first
/// failure aborts the rest and no partial post is ever returned.
pub struct Generator {
    news: NewsClient,
    llm: LlmClient,
}

impl Generator {
    pub fn new(config: &Config) -> Self {
        Self {
            news: NewsClient::new(config),
            llm: LlmClient::new(config),
        }
    }

    pub async fn generate(&self, topic: &str) -> Result<GeneratedPost> {
        let recent_news = self.news.fetch_headlines(topic).await?;

        info!("Generating title for topic: {}", topic);
        let title = self
            .llm
            .complete(
                &title_prompt(topic, &recent_news),
                CompletionParams {
                    max_tokens: 20,
                    temperature: 1.0,
                    stop: Some(vec!["\n".to_string()]),
                    presence_penalty: None,
                    frequency_penalty: None,
                },
            )
            .await?
            .trim()
            .to_string();

        info!("Generating meta description for title: {}", title);
        let meta_description = self
            .llm
            .complete(
                &meta_prompt(&title),
                CompletionParams {
                    max_tokens: 30,
                    temperature: 1.0,
                    stop: Some(vec![".".to_string()]),
                    presence_penalty: None,
                    frequency_penalty: None,
                },
            )
            .await?
            .trim()
            .to_string();

        info!("Generating post content for topic: {}", topic);
        let post_content = self
            .llm
            .complete(
                &body_prompt(topic, &recent_news),
                CompletionParams {
                    max_tokens: 1000,
                    temperature: 1.0,
                    stop: None,
                    presence_penalty: Some(0.6),
                    frequency_penalty: Some(0.6),
                },
            )
            .await?
            .trim()
            .to_string();

        Ok(GeneratedPost {
            title,
            meta_description,
            post_content,
        })
    }
}

pub fn title_prompt(topic: &str, recent_news: &str) -> String {
    format!(
        "Come up with an attention-grabbing and accurate title for an article about '{topic}', \
         taking into account the latest news:\n{recent_news}. \
         The title should be interesting and clearly convey the essence of the topic. \
         Do not use the # and - characters anywhere in the text, even in headings."
    )
}

pub fn meta_prompt(title: &str) -> String {
    format!(
        "Write a meta description for an article titled: '{title}'. \
         It should be complete, informative, and contain the main keywords. \
         Do not use the # and - characters anywhere in the text, even in headings."
    )
}

pub fn body_prompt(topic: &str, recent_news: &str) -> String {
    format!(
        "Write a detailed article about '{topic}', using the latest news:\n{recent_news}.\n\
         The article must:\n\
         1. Be informative and well-reasoned\n\
         2. Contain at least 500 characters\n\
         3. Have a clear structure with subheadings\n\
         4. Include an analysis of current trends\n\
         5. Have an introduction, main body, and conclusion\n\
         6. Include examples from the latest news\n\
         7. Have paragraphs of at least 3-4 sentences each\n\
         8. Be easy to read and substantive\n\
         9. Not use the # character anywhere in the text, even in headings."
    )
}
