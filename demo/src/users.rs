use std::time::Duration;

use outcome_core::util::time::sleep;

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct User {
  pub id: u64,
  pub name: String,
}

#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
  #[error("User directory '{0}' is offline")]
  Offline(&'static str),
}

/// In-memory stand-in for a remote user listing, answering after a delay.
pub struct UserDirectory {
  name: &'static str,
  users: Vec<User>,
  delay: Duration,
  online: bool,
}
impl UserDirectory {
  pub fn new(name: &'static str, delay: Duration) -> Self {
    let users = vec![
      User { id: 1, name: "Leanne".to_string() },
      User { id: 2, name: "Ervin".to_string() },
    ];
    Self { name, users, delay, online: true }
  }

  pub fn offline(mut self) -> Self {
    self.online = false;
    self
  }

  #[inline]
  pub fn name(&self) -> &'static str { self.name }

  pub async fn fetch_all(&self) -> Result<Vec<User>, DirectoryError> {
    sleep(self.delay).await;
    if !self.online {
      return Err(DirectoryError::Offline(self.name));
    }
    Ok(self.users.clone())
  }

  pub async fn find(&self, id: u64) -> Result<Option<User>, DirectoryError> {
    Ok(self.fetch_all().await?.into_iter().find(|u| u.id == id))
  }
}
