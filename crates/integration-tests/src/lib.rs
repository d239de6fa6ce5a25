//! Contract tests for the JokeAPI v2 service; see `tests/`
