//! Remote provider backed by the Gemini `generateContent` REST endpoint.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::prompt::SYSTEM_INSTRUCTION;
use super::provider::{ProviderError, ResponseProvider};

/// Blocking HTTP client for the hosted generative-language API.
pub struct GeminiProvider {
    base_url: String,
    api_key: String,
    model: String,
    client: reqwest::blocking::Client,
    timeout: Duration,
}

impl GeminiProvider {
    pub fn new(
        base_url: &str,
        api_key: &str,
        model: &str,
        timeout: Duration,
    ) -> Result<Self, ProviderError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ProviderError::HttpClient(e.to_string()))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            model: model.to_string(),
            client,
            timeout,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    system_instruction: Content<'a>,
    contents: Vec<Content<'a>>,
}

#[derive(Serialize)]
struct Content<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'a str>,
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

fn build_request(user_text: &str) -> GenerateContentRequest<'_> {
    GenerateContentRequest {
        system_instruction: Content {
            role: None,
            parts: vec![Part {
                text: SYSTEM_INSTRUCTION,
            }],
        },
        contents: vec![Content {
            role: Some("user"),
            parts: vec![Part { text: user_text }],
        }],
    }
}

/// Concatenate the text parts of the first candidate.
fn extract_text(response: GenerateContentResponse) -> Result<String, ProviderError> {
    let text: String = response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect::<String>())
        .unwrap_or_default();

    if text.trim().is_empty() {
        return Err(ProviderError::EmptyResponse);
    }
    Ok(text)
}

impl ResponseProvider for GeminiProvider {
    fn name(&self) -> &'static str {
        "gemini"
    }

    fn respond(&self, user_text: &str) -> Result<String, ProviderError> {
        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&build_request(user_text))
            .send()
            .map_err(|e| {
                if e.is_connect() {
                    ProviderError::Connection(self.base_url.clone())
                } else if e.is_timeout() {
                    ProviderError::HttpClient(format!(
                        "Request timed out after {}s",
                        self.timeout.as_secs()
                    ))
                } else {
                    ProviderError::HttpClient(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(ProviderError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GenerateContentResponse = response
            .json()
            .map_err(|e| ProviderError::ResponseParsing(e.to_string()))?;

        extract_text(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> GenerateContentResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn request_carries_system_instruction_and_user_turn() {
        let value = serde_json::to_value(build_request("How do I treat a burn?")).unwrap();
        assert_eq!(
            value["systemInstruction"]["parts"][0]["text"],
            SYSTEM_INSTRUCTION
        );
        assert!(value["systemInstruction"].get("role").is_none());
        assert_eq!(value["contents"][0]["role"], "user");
        assert_eq!(
            value["contents"][0]["parts"][0]["text"],
            "How do I treat a burn?"
        );
    }

    #[test]
    fn extract_joins_text_parts() {
        let response = parse(
            r#"{"candidates":[{"content":{"parts":[{"text":"Cool the burn "},{"text":"for 20 minutes."}]}}]}"#,
        );
        assert_eq!(
            extract_text(response).unwrap(),
            "Cool the burn for 20 minutes."
        );
    }

    #[test]
    fn extract_uses_first_candidate_only() {
        let response = parse(
            r#"{"candidates":[{"content":{"parts":[{"text":"first"}]}},{"content":{"parts":[{"text":"second"}]}}]}"#,
        );
        assert_eq!(extract_text(response).unwrap(), "first");
    }

    #[test]
    fn missing_candidates_is_empty_response() {
        assert_eq!(
            extract_text(parse("{}")),
            Err(ProviderError::EmptyResponse)
        );
        assert_eq!(
            extract_text(parse(r#"{"candidates":[{}]}"#)),
            Err(ProviderError::EmptyResponse)
        );
    }

    #[test]
    fn endpoint_includes_model() {
        let provider = GeminiProvider::new(
            "https://example.test/",
            "key",
            "gemini-1.5-flash",
            Duration::from_secs(1),
        )
        .unwrap();
        assert_eq!(
            provider.endpoint(),
            "https://example.test/v1beta/models/gemini-1.5-flash:generateContent"
        );
        assert_eq!(provider.model(), "gemini-1.5-flash");
    }

    #[test]
    fn unreachable_server_is_an_error() {
        // Port 9 (discard) is closed on test machines
        let provider =
            GeminiProvider::new("http://127.0.0.1:9", "key", "m", Duration::from_secs(2)).unwrap();
        assert!(provider.respond("hello").is_err());
    }
}
