use std::error::Error;
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, error, info};

use outcome_core::{Maybe, Outcome};
use outcome_core::app::env;
use outcome_core::app::storage::Storage;
use outcome_core::app::tracing::AppTracingBuilder;
use outcome_core::util::time::timeout;

use crate::users::{User, UserDirectory};

mod users;

#[derive(Clone, Debug, thiserror::Error)]
enum DemoError {
  #[error("Users not found from directory: {0}")]
  UsersNotFound(&'static str),
  #[error("Lookup of user {0} failed or timed out")]
  UserLookupFailed(u64),
}

fn main() -> Result<(), Box<dyn Error>> {
  let dotenv_path = env::load_dotenv_into_env()?;
  let storage = Storage::new("demo");
  let _tracing = AppTracingBuilder::default()
    .with_default_directive("info")
    .with_log_file_path_opt(storage.local_data_file("log.txt"))
    .build();
  debug!(?dotenv_path, "loaded environment");

  let step_delay = Duration::from_millis(env::var_or("DEMO_STEP_DELAY_MS", 30));
  let lookup_timeout = Duration::from_millis(env::var_or("DEMO_LOOKUP_TIMEOUT_MS", 500));

  let runtime = tokio::runtime::Builder::new_multi_thread()
    .enable_all()
    .build()?;
  runtime.block_on(run(step_delay, lookup_timeout));

  Ok(())
}

async fn run(step_delay: Duration, lookup_timeout: Duration) {
  let numbers = [1, 2, 3, 4, 5];

  let num = Outcome::<_, ()>::ok(1);
  if let Outcome::Ok(value) = num {
    info!(value, "constructed outcome");
  }

  let found = Outcome::from_fn(|| numbers.iter().find(|n| **n == 2).copied(), "number not found");
  info!(value = found.unwrap_or(-1), "searched numbers");

  let reversed = Outcome::<_, ()>::ok(123)
    .map(|x| x.to_string())
    .map_error("string not found!")
    .map(|x| x.chars().rev().collect::<String>());
  info!(value = %reversed.unwrap_or(String::new()), "reversed number");

  let even = Maybe::from(numbers.iter().copied().find(|n| n % 2 == 0)).filter(|n| *n > 2);
  info!(value = even.unwrap_or(0), "first even number above two");

  let directory = Arc::new(UserDirectory::new("users", step_delay));
  let users = Outcome::from_async_fn(|| directory.fetch_all(), DemoError::UsersNotFound(directory.name())).await;
  match users {
    Outcome::Ok(mut users) => {
      users.push(User { id: 3, name: "def".to_string() });
      info!(count = users.len(), "fetched users");
    }
    Outcome::Err(e) => error!(%e, "fetching users failed"),
  }

  let offline = UserDirectory::new("backup", step_delay).offline();
  let backup_users = Outcome::from_async_fn(|| offline.fetch_all(), DemoError::UsersNotFound(offline.name())).await;
  if let Outcome::Err(e) = &backup_users {
    error!(%e, "fetching users failed");
  }

  for id in [2, 9] {
    let lookup = directory.clone();
    let name_length = Outcome::<_, ()>::ok(id)
      .map_async(move |id| async move { timeout(lookup_timeout, lookup.find(id)).await })
      // A directory error stops the chain like a timeout does.
      .map_sync(|lookup_result| lookup_result)
      .map_sync(|user: Option<User>| user.map(|u| u.name))
      .map_sync(|name| Some(name.len()))
      .collect(DemoError::UserLookupFailed(id))
      .await;
    match name_length {
      Outcome::Ok(length) => info!(id, length, "looked up user name"),
      Outcome::Err(e) => error!(%e, "looking up user failed"),
    }
  }
}
