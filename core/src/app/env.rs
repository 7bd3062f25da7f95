use std::path::PathBuf;
use std::str::FromStr;

use crate::maybe::Maybe;

/// Loads a `.env` file from the current directory or its parents into the process environment. A missing `.env`
/// file is not an error and yields `Ok(None)`.
pub fn load_dotenv_into_env() -> Result<Option<PathBuf>, dotenvy::Error> {
  match dotenvy::dotenv() {
    Ok(path) => Ok(Some(path)),
    Err(e) if e.not_found() => Ok(None),
    Err(e) => Err(e),
  }
}

/// Parses environment variable `key`, returning `default` if it is unset, not unicode, or does not parse.
pub fn var_or<T: FromStr>(key: &str, default: T) -> T {
  Maybe::from(std::env::var(key).ok())
    .map_nullable(|value| value.trim().parse().ok())
    .unwrap_or(default)
}
