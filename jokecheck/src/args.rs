use std::fmt;

use clap::{Parser, ValueEnum};

/// JokeAPI contract checker
#[derive(Debug, Parser)]
#[command(name = "jokecheck", about = "Run the JokeAPI contract checks against a live deployment")]
pub struct Args {
    /// Base URL of the deployment to check
    #[arg(long, default_value = jokeapi_client::PUBLIC_BASE_URL, env = "JOKEAPI_URL")]
    pub base_url: String,

    /// Restrict the run to specific endpoints (repeatable); default is all four
    #[arg(long = "endpoint", value_enum)]
    pub endpoints: Vec<Endpoint>,

    /// Log per-scenario detail
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Endpoints to check, in a fixed order and without duplicates
    pub fn selected_endpoints(&self) -> Vec<Endpoint> {
        Endpoint::ALL
            .into_iter()
            .filter(|e| self.endpoints.is_empty() || self.endpoints.contains(e))
            .collect()
    }
}

/// One checkable endpoint of the service
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Endpoint {
    Jokes,
    Languages,
    Langcode,
    Flags,
}

impl Endpoint {
    pub const ALL: [Self; 4] = [Self::Jokes, Self::Languages, Self::Langcode, Self::Flags];
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Jokes => "jokes",
            Self::Languages => "languages",
            Self::Langcode => "langcode",
            Self::Flags => "flags",
        };
        f.write_str(name)
    }
}
