use url::Url;

use crate::error::{JokeApiError, Result};
use crate::types::{
    ApiErrorBody, Category, FlagsResponse, Joke, LangCodeResponse, Language, LanguagesResponse,
};

/// Base URL of the public JokeAPI v2 deployment
pub const PUBLIC_BASE_URL: &str = "https://v2.jokeapi.dev/";

/// Typed client for the JokeAPI v2 service
///
/// Construction performs no network I/O; each operation issues exactly one
/// GET request with no retries and the library-default timeout
#[derive(Debug, Clone)]
pub struct JokeApiClient {
    base_url: Url,
    http: reqwest::Client,
}

impl JokeApiClient {
    /// Create a new client pointing at the given base URL
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| JokeApiError::Config(format!("invalid base URL: {e}")))?;

        Ok(Self {
            base_url,
            http: reqwest::Client::new(),
        })
    }

    /// Get the base URL
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// URL for `joke/{category}`
    #[must_use]
    pub fn joke_url(&self, category: Category) -> Url {
        self.endpoint_url(&format!("joke/{category}"))
    }

    /// URL for the `languages` endpoint
    #[must_use]
    pub fn languages_url(&self) -> Url {
        self.endpoint_url("languages")
    }

    /// URL for `langcode/{language}`
    #[must_use]
    pub fn langcode_url(&self, language: Language) -> Url {
        self.endpoint_url(&format!("langcode/{language}"))
    }

    /// URL for the `flags` endpoint
    #[must_use]
    pub fn flags_url(&self) -> Url {
        self.endpoint_url("flags")
    }

    /// Fetch a joke for the given category
    ///
    /// # Errors
    ///
    /// Returns [`JokeApiError::Api`] when the server rejects the category
    /// (the expected outcome for [`Category::NonExisting`]) and
    /// [`JokeApiError::Http`] on transport or decode failure
    pub async fn joke(&self, category: Category) -> Result<Joke> {
        let response = self.http.get(self.joke_url(category)).send().await?;
        handle_error(response).await?.json().await.map_err(Into::into)
    }

    /// Fetch the supported language sets
    pub async fn languages(&self) -> Result<LanguagesResponse> {
        let response = self.http.get(self.languages_url()).send().await?;
        handle_error(response).await?.json().await.map_err(Into::into)
    }

    /// Resolve a language name to its two-letter ISO code
    pub async fn langcode(&self, language: Language) -> Result<LangCodeResponse> {
        let response = self.http.get(self.langcode_url(language)).send().await?;
        handle_error(response).await?.json().await.map_err(Into::into)
    }

    /// Fetch the list of content flags the server recognizes
    pub async fn flags(&self) -> Result<FlagsResponse> {
        let response = self.http.get(self.flags_url()).send().await?;
        handle_error(response).await?.json().await.map_err(Into::into)
    }

    fn endpoint_url(&self, path: &str) -> Url {
        let mut url = self.base_url.clone();
        url.set_path(path);
        url
    }
}

impl Default for JokeApiClient {
    /// Client pointing at the public deployment
    fn default() -> Self {
        Self::new(PUBLIC_BASE_URL).expect("public base URL is valid")
    }
}

/// Turn a non-success response into a typed API error
///
/// The server's error body is parsed for its `message` and `causedBy`
/// fields; an unparseable body is carried through as the raw message text
async fn handle_error(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let (message, caused_by) = match serde_json::from_str::<ApiErrorBody>(&body) {
        Ok(err) => (err.message, err.caused_by),
        Err(_) => (body, Vec::new()),
    };

    Err(JokeApiError::Api {
        status: status.as_u16(),
        message,
        caused_by,
    })
}
