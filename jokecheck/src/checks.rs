//! Per-endpoint contract checks
//!
//! Each check runs every scenario for its endpoint and returns the first
//! violated expectation, named by field

use std::collections::HashSet;

use anyhow::{Context, bail, ensure};
use jokeapi_client::{
    Category, ContentFlag, JokeApiClient, JokeApiError, JokeContent, LangCode, Language,
    SystemLangCode,
};

/// Millisecond-precision epoch, enforced by digit count
const TIMESTAMP_DIGITS: usize = 13;

/// Every valid category yields a well-formed joke; the invalid one is
/// rejected with a 400 and a message
pub async fn jokes(client: &JokeApiClient) -> anyhow::Result<()> {
    for category in Category::VALID {
        let joke = client
            .joke(category)
            .await
            .with_context(|| format!("joke/{category}"))?;

        ensure!(!joke.error, "joke/{category}: 'error' should be false");
        match &joke.content {
            JokeContent::Single { joke } => {
                ensure!(!joke.is_empty(), "joke/{category}: 'joke' should be non-empty");
            }
            JokeContent::Twopart { setup, delivery } => {
                ensure!(!setup.is_empty(), "joke/{category}: 'setup' should be non-empty");
                ensure!(!delivery.is_empty(), "joke/{category}: 'delivery' should be non-empty");
            }
        }
        ensure!(
            LangCode::ALL.contains(&joke.lang),
            "joke/{category}: unexpected 'lang' {}",
            joke.lang
        );

        tracing::debug!(%category, id = joke.id, safe = joke.safe, "joke ok");
    }

    match client.joke(Category::NonExisting).await {
        Ok(_) => bail!("joke/NonExisting: expected a 400 rejection, got a joke"),
        Err(JokeApiError::Api { status: 400, message, .. }) => {
            ensure!(!message.is_empty(), "joke/NonExisting: rejection should carry a 'message'");
            tracing::debug!("invalid category rejected as expected");
        }
        Err(other) => return Err(other).context("joke/NonExisting"),
    }

    Ok(())
}

/// The language sets match the published ones, compared order-insensitively
pub async fn languages(client: &JokeApiClient) -> anyhow::Result<()> {
    let response = client.languages().await.context("languages")?;

    ensure!(
        response.default_language == LangCode::DEFAULT,
        "languages: 'defaultLanguage' should be '{}', got '{}'",
        LangCode::DEFAULT,
        response.default_language
    );

    let joke_languages: HashSet<LangCode> = response.joke_languages.iter().copied().collect();
    let expected: HashSet<LangCode> = LangCode::ALL.into_iter().collect();
    ensure!(joke_languages == expected, "languages: 'jokeLanguages' set mismatch");

    let system_languages: HashSet<SystemLangCode> =
        response.system_languages.iter().copied().collect();
    let expected: HashSet<SystemLangCode> = SystemLangCode::ALL.into_iter().collect();
    ensure!(system_languages == expected, "languages: 'systemLanguages' set mismatch");

    tracing::debug!(possible = response.possible_languages.len(), "languages ok");
    Ok(())
}

/// Every supported language name resolves to its exact two-letter code
pub async fn langcode(client: &JokeApiClient) -> anyhow::Result<()> {
    for language in Language::ALL {
        let resolved = client
            .langcode(language)
            .await
            .with_context(|| format!("langcode/{language}"))?;

        ensure!(!resolved.error, "langcode/{language}: 'error' should be false");
        ensure!(
            resolved.code == language.code(),
            "langcode/{language}: expected '{}', got '{}'",
            language.code(),
            resolved.code
        );

        tracing::debug!(%language, code = %resolved.code, "langcode ok");
    }

    Ok(())
}

/// The flag list is exactly the canonical six and the timestamp carries
/// millisecond precision
pub async fn flags(client: &JokeApiClient) -> anyhow::Result<()> {
    let response = client.flags().await.context("flags")?;

    ensure!(!response.error, "flags: 'error' should be false");

    let reported: HashSet<ContentFlag> = response.flags.iter().copied().collect();
    let expected: HashSet<ContentFlag> = ContentFlag::ALL.into_iter().collect();
    ensure!(reported == expected, "flags: 'flags' set should be exactly the canonical six");

    let digits = response.timestamp.to_string().len();
    ensure!(
        digits == TIMESTAMP_DIGITS,
        "flags: 'timestamp' should have {TIMESTAMP_DIGITS} decimal digits, got {digits}"
    );

    tracing::debug!(timestamp = response.timestamp, "flags ok");
    Ok(())
}
