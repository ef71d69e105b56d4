use crate::{
    error::Result,
    llm::TextGenerator,
    logger,
    models::GenerationRequest,
    prompt::render_title_prompt,
};
use std::sync::Arc;
use uuid::Uuid;

/// Sampling temperature for every title request.
pub const TITLE_TEMPERATURE: f32 = 0.0;

/// Builds the request that [`generate_title`] would submit, without sending it.
pub fn build_title_request(query: &str, result: &str) -> GenerationRequest {
    GenerationRequest::new(render_title_prompt(query, result), TITLE_TEMPERATURE)
}

/// Asks `model` for a title describing `query` and its summarised `result`.
///
/// The model's text is returned exactly as generated; errors from the model are
/// returned unchanged. `model` is only borrowed, so one instance may serve many
/// concurrent callers.
pub async fn generate_title<G>(model: &G, query: &str, result: &str) -> Result<String>
where
    G: TextGenerator + ?Sized,
{
    let run_id = Uuid::new_v4();
    let request = build_title_request(query, result);

    log::debug!(
        "[TitleGenerator {}] prompt of {} chars for model {}",
        run_id,
        request.prompt.len(),
        model.model_id()
    );
    if result.is_empty() {
        log::debug!("[TitleGenerator {}] empty search result, title will rely on the query", run_id);
    }

    let timer = logger::timer("TitleGenerator");
    let title = match model.generate(&request).await {
        Ok(title) => title,
        Err(e) => {
            timer.fail(&e);
            return Err(e);
        }
    };
    drop(timer);

    log::debug!("[TitleGenerator {}] generated {} chars", run_id, title.len());
    Ok(title)
}

/// A title generator bound to one shared model.
#[derive(Clone)]
pub struct TitleGenerator {
    model: Arc<dyn TextGenerator>,
}

impl TitleGenerator {
    pub fn new(model: Arc<dyn TextGenerator>) -> Self {
        Self { model }
    }

    pub async fn generate_title(&self, query: &str, result: &str) -> Result<String> {
        generate_title(self.model.as_ref(), query, result).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TitleError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct StubModel {
        reply: std::result::Result<String, String>,
        seen: Mutex<Vec<GenerationRequest>>,
    }

    impl StubModel {
        fn replying(reply: &str) -> Self {
            Self {
                reply: Ok(reply.to_string()),
                seen: Mutex::new(Vec::new()),
            }
        }

        fn failing(message: &str) -> Self {
            Self {
                reply: Err(message.to_string()),
                seen: Mutex::new(Vec::new()),
            }
        }

        fn requests(&self) -> Vec<GenerationRequest> {
            self.seen.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl TextGenerator for StubModel {
        async fn generate(&self, request: &GenerationRequest) -> Result<String> {
            self.seen.lock().unwrap().push(request.clone());
            match &self.reply {
                Ok(text) => Ok(text.clone()),
                Err(message) => Err(TitleError::ProviderError {
                    status: 503,
                    body: message.clone(),
                }),
            }
        }

        fn model_id(&self) -> &str {
            "stub"
        }
    }

    #[tokio::test]
    async fn test_temperature_is_zero_at_call_time() {
        let model = StubModel::replying("Title");
        generate_title(&model, "What is SvelteKit?", "A web framework").await.unwrap();

        let requests = model.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].temperature, 0.0);
    }

    #[tokio::test]
    async fn test_output_passes_through_unmodified() {
        let reply = "<title>\n  Cheese: A Dairy Product Made from Milk \n</title>\n";
        let model = StubModel::replying(reply);
        let title = generate_title(&model, "What is cheese?", "Cheese is...").await.unwrap();
        assert_eq!(title, reply);
    }

    #[tokio::test]
    async fn test_empty_result_still_returns_title() {
        let model = StubModel::replying("History of the Rust Programming Language");
        let title = generate_title(&model, "rust language history", "").await.unwrap();
        assert!(!title.is_empty());

        let requests = model.requests();
        let prompt = &requests[0].prompt;
        assert!(prompt.ends_with("<query>\nrust language history\n</query>\n\n<result>\n\n</result>\n"));
    }

    #[tokio::test]
    async fn test_special_characters_reach_model_verbatim() {
        let query = "Is <b>1 < 2</b> in {query} templates?";
        let result = "Yes: `{result}` & </result><title>x</title> stay literal.";
        let model = StubModel::replying("Angle Brackets in Templates");
        generate_title(&model, query, result).await.unwrap();

        let requests = model.requests();
        let prompt = &requests[0].prompt;
        assert_eq!(prompt, &render_title_prompt(query, result));
        assert!(prompt.contains(&format!("<query>\n{}\n</query>", query)));
        assert!(prompt.contains(&format!("<result>\n{}\n</result>", result)));
    }

    #[tokio::test]
    async fn test_errors_propagate_unchanged() {
        let model = StubModel::failing("overloaded");
        let err = generate_title(&model, "q", "r").await.unwrap_err();
        match err {
            TitleError::ProviderError { status, body } => {
                assert_eq!(status, 503);
                assert_eq!(body, "overloaded");
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert_eq!(model.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_shared_generator_serves_concurrent_callers() {
        let model = Arc::new(StubModel::replying("Shared Title"));
        let generator = TitleGenerator::new(model.clone());

        let (a, b) = tokio::join!(
            generator.generate_title("first query", "first result"),
            generator.generate_title("second query", ""),
        );
        assert_eq!(a.unwrap(), "Shared Title");
        assert_eq!(b.unwrap(), "Shared Title");

        let requests = model.requests();
        assert_eq!(requests.len(), 2);
        assert!(requests.iter().all(|r| r.temperature == TITLE_TEMPERATURE));
        assert!(requests.iter().any(|r| r.prompt.contains("first query")));
        assert!(requests.iter().any(|r| r.prompt.contains("second query")));
    }

    #[test]
    fn test_build_title_request() {
        let request = build_title_request("q", "r");
        assert_eq!(request.temperature, 0.0);
        assert_eq!(request.prompt, render_title_prompt("q", "r"));
    }
}
