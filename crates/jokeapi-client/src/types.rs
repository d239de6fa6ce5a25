use std::fmt;

use serde::{Deserialize, Serialize};

// -- Closed value sets --

/// Joke topic classifier accepted by the `joke/{category}` endpoint
///
/// `NonExisting` is not a category the server recognizes; it exists to
/// exercise the error path and must be rejected with a 400
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Any,
    Programming,
    Dark,
    Misc,
    NonExisting,
}

impl Category {
    /// The four categories the server actually serves jokes for
    pub const VALID: [Self; 4] = [Self::Any, Self::Programming, Self::Dark, Self::Misc];

    /// Path segment used when building the request URL
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Any => "Any",
            Self::Programming => "Programming",
            Self::Dark => "Dark",
            Self::Misc => "Misc",
            Self::NonExisting => "NonExisting",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Language name accepted by the `langcode/{language}` endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    English,
    German,
    Spanish,
    French,
    Portuguese,
    Czech,
}

impl Language {
    /// All six language names the service resolves to a code
    pub const ALL: [Self; 6] = [
        Self::English,
        Self::German,
        Self::Spanish,
        Self::French,
        Self::Portuguese,
        Self::Czech,
    ];

    /// Path segment used when building the request URL
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::English => "English",
            Self::German => "German",
            Self::Spanish => "Spanish",
            Self::French => "French",
            Self::Portuguese => "Portuguese",
            Self::Czech => "Czech",
        }
    }

    /// The two-letter ISO code the server is expected to return
    pub const fn code(self) -> LangCode {
        match self {
            Self::English => LangCode::En,
            Self::German => LangCode::De,
            Self::Spanish => LangCode::Es,
            Self::French => LangCode::Fr,
            Self::Portuguese => LangCode::Pt,
            Self::Czech => LangCode::Cs,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Two-letter ISO code for a language jokes are served in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LangCode {
    Cs,
    De,
    En,
    Es,
    Fr,
    Pt,
}

impl LangCode {
    /// The full joke-language set reported by `languages`
    pub const ALL: [Self; 6] = [Self::Cs, Self::De, Self::En, Self::Es, Self::Fr, Self::Pt];

    /// The service's default language
    pub const DEFAULT: Self = Self::En;

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cs => "cs",
            Self::De => "de",
            Self::En => "en",
            Self::Es => "es",
            Self::Fr => "fr",
            Self::Pt => "pt",
        }
    }
}

impl fmt::Display for LangCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Two-letter ISO code for a language the service's own messages come in
///
/// Distinct from [`LangCode`]: the system set includes `it` and `ru`, which no
/// jokes are served in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SystemLangCode {
    Cs,
    De,
    En,
    It,
    Ru,
}

impl SystemLangCode {
    /// The full system-language set reported by `languages`
    pub const ALL: [Self; 5] = [Self::Cs, Self::De, Self::En, Self::It, Self::Ru];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cs => "cs",
            Self::De => "de",
            Self::En => "en",
            Self::It => "it",
            Self::Ru => "ru",
        }
    }
}

/// Response-shape discriminator for a joke body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JokeType {
    Single,
    Twopart,
}

/// Content-sensitivity attribute attached per joke and listed by `flags`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentFlag {
    Nsfw,
    Religious,
    Political,
    Racist,
    Sexist,
    Explicit,
}

impl ContentFlag {
    /// The canonical six-flag set
    pub const ALL: [Self; 6] = [
        Self::Nsfw,
        Self::Religious,
        Self::Political,
        Self::Racist,
        Self::Sexist,
        Self::Explicit,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Nsfw => "nsfw",
            Self::Religious => "religious",
            Self::Political => "political",
            Self::Racist => "racist",
            Self::Sexist => "sexist",
            Self::Explicit => "explicit",
        }
    }
}

impl fmt::Display for ContentFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// -- Response types --

/// A joke returned by `joke/{category}`
#[derive(Debug, Clone, Deserialize)]
pub struct Joke {
    /// Always `false` on a successful response
    pub error: bool,
    /// Category the server filed the joke under
    pub category: String,
    /// Joke text, shaped by the `type` discriminator
    #[serde(flatten)]
    pub content: JokeContent,
    /// Per-joke boolean map over the six canonical flags
    pub flags: JokeFlags,
    /// Server-assigned joke identifier
    pub id: u64,
    /// Whether the joke passed the server's safe-mode filter
    pub safe: bool,
    /// Language the joke is written in
    pub lang: LangCode,
}

/// Joke text fields, internally tagged on `type`
///
/// The tag makes the shape contract structural: a `single` body without
/// `joke`, or a `twopart` body missing `setup` or `delivery`, fails to
/// decode
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum JokeContent {
    Single { joke: String },
    Twopart { setup: String, delivery: String },
}

impl JokeContent {
    pub const fn joke_type(&self) -> JokeType {
        match self {
            Self::Single { .. } => JokeType::Single,
            Self::Twopart { .. } => JokeType::Twopart,
        }
    }
}

/// Per-joke flag map keyed by exactly the six canonical flags
///
/// `deny_unknown_fields` turns an extra key into a decode error; a missing
/// key already is one
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JokeFlags {
    pub nsfw: bool,
    pub religious: bool,
    pub political: bool,
    pub racist: bool,
    pub sexist: bool,
    pub explicit: bool,
}

impl JokeFlags {
    /// Exhaustive lookup by flag
    pub const fn get(self, flag: ContentFlag) -> bool {
        match flag {
            ContentFlag::Nsfw => self.nsfw,
            ContentFlag::Religious => self.religious,
            ContentFlag::Political => self.political,
            ContentFlag::Racist => self.racist,
            ContentFlag::Sexist => self.sexist,
            ContentFlag::Explicit => self.explicit,
        }
    }
}

/// Response from the `languages` endpoint
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguagesResponse {
    pub default_language: LangCode,
    /// Languages jokes are served in; server ordering is not guaranteed
    pub joke_languages: Vec<LangCode>,
    /// Languages the service's own messages come in
    pub system_languages: Vec<SystemLangCode>,
    /// Every language the server can name, as (code, name) pairs
    pub possible_languages: Vec<PossibleLanguage>,
}

/// One entry of `possibleLanguages`
#[derive(Debug, Clone, Deserialize)]
pub struct PossibleLanguage {
    pub code: String,
    pub name: String,
}

/// Response from the `langcode/{language}` endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct LangCodeResponse {
    pub error: bool,
    pub code: LangCode,
}

/// Response from the `flags` endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct FlagsResponse {
    pub error: bool,
    /// Decodes only if every element is one of the canonical flags
    pub flags: Vec<ContentFlag>,
    /// Millisecond UNIX epoch; 13 decimal digits
    pub timestamp: i64,
}

/// Error body the server sends alongside a non-success status
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorBody {
    pub error: bool,
    #[serde(default)]
    pub internal_error: bool,
    #[serde(default)]
    pub code: Option<u32>,
    pub message: String,
    #[serde(default)]
    pub caused_by: Vec<String>,
    #[serde(default)]
    pub additional_info: Option<String>,
    #[serde(default)]
    pub timestamp: Option<i64>,
}
