use std::path::{Path, PathBuf};

use directories::ProjectDirs;

/// Per-application directories of the current user, if the platform provides them.
#[derive(Default, Clone, Debug)]
pub struct Storage {
  project_directories: Option<ProjectDirs>,
}
impl Storage {
  pub fn new(application: &str) -> Self {
    let project_directories = ProjectDirs::from("", "Outcome", application);
    Self { project_directories }
  }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum DirectoryKind {
  Data,
  LocalData,
  Cache,
}
impl Storage {
  pub fn directory(&self, kind: DirectoryKind) -> Option<&Path> {
    self.project_directories.as_ref().map(|project_directories| match kind {
      DirectoryKind::Data => project_directories.data_dir(),
      DirectoryKind::LocalData => project_directories.data_local_dir(),
      DirectoryKind::Cache => project_directories.cache_dir(),
    })
  }

  pub fn file(&self, kind: DirectoryKind, file_path: impl AsRef<Path>) -> Option<PathBuf> {
    self.directory(kind).map(|d| d.join(file_path))
  }
  pub fn local_data_file(&self, file_path: impl AsRef<Path>) -> Option<PathBuf> {
    self.file(DirectoryKind::LocalData, file_path)
  }
}


#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn files_live_in_their_directory() {
    let storage = Storage::new("outcome_test");
    if let Some(directory) = storage.directory(DirectoryKind::LocalData) {
      assert_eq!(storage.local_data_file("log.txt"), Some(directory.join("log.txt")));
    }
    assert_eq!(Storage::default().local_data_file("log.txt"), None);
  }
}
