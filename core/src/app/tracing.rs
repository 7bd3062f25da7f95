use std::path::PathBuf;

use tracing_subscriber::{EnvFilter, Layer};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Builds and installs the global tracing subscriber of an application.
///
/// Console output goes to stderr, filtered by `CONSOLE_LOG` unless a filter is given. With feature
/// `app_tracing_file` and a log file path, output is also written to that file, filtered by `FILE_LOG`.
#[derive(Default)]
pub struct AppTracingBuilder {
  console_filter: Option<EnvFilter>,
  log_file_path: Option<PathBuf>,
  file_filter: Option<EnvFilter>,
  default_directive: Option<String>,
}
impl AppTracingBuilder {
  pub fn with_console_filter(mut self, console_filter: EnvFilter) -> Self {
    self.console_filter = Some(console_filter);
    self
  }

  pub fn with_log_file_path_opt(mut self, log_file_path: Option<PathBuf>) -> Self {
    self.log_file_path = log_file_path;
    self
  }
  pub fn with_file_filter(mut self, file_filter: EnvFilter) -> Self {
    self.file_filter = Some(file_filter);
    self
  }

  /// Directive used when a filter environment variable is unset or invalid, e.g. `"info"`.
  pub fn with_default_directive(mut self, directive: impl Into<String>) -> Self {
    self.default_directive = Some(directive.into());
    self
  }

  pub fn build(self) -> AppTracing {
    let default_directive = self.default_directive.as_deref();
    let filter = |env: &str| {
      EnvFilter::try_from_env(env)
        .unwrap_or_else(|_| default_directive.map(EnvFilter::new).unwrap_or_default())
    };

    let console_filter = self.console_filter.unwrap_or_else(|| filter("CONSOLE_LOG"));

    #[cfg(not(target_arch = "wasm32"))] {
      let file_filter = self.file_filter;
      let file = self.log_file_path.map(|p| (p, file_filter.unwrap_or_else(|| filter("FILE_LOG"))));
      AppTracing::new(console_filter, file)
    }
    #[cfg(target_arch = "wasm32")] {
      AppTracing::new_wasm(console_filter)
    }
  }
}

/// Keeps the file writer alive; drop it last to flush buffered log lines.
pub struct AppTracing {
  _file_tracing: FileTracing,
}
#[cfg(feature = "app_tracing_file")]
#[derive(Default)]
struct FileTracing(Option<tracing_appender::non_blocking::WorkerGuard>);
#[cfg(not(feature = "app_tracing_file"))]
#[derive(Default)]
struct FileTracing;

impl AppTracing {
  #[cfg(not(target_arch = "wasm32"))]
  fn new(
    console_filter: EnvFilter,
    file: Option<(PathBuf, EnvFilter)>,
  ) -> Self {
    use std::io;

    let layered = tracing_subscriber::registry().with(
      tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_filter(console_filter)
    );

    #[cfg(feature = "app_tracing_file")] let _file_tracing = {
      use std::fs::{create_dir_all, File};
      use std::io::BufWriter;

      if let Some((file_path, filter)) = file {
        let result = (|| {
          if let Some(parent) = file_path.parent() {
            create_dir_all(parent)?;
          }
          File::create(&file_path)
        })();
        match result {
          Err(e) => {
            layered.init();
            tracing::warn!("Cannot log to file; could not truncate/create and open log file '{}' for writing: {}", file_path.display(), e);
            FileTracing::default()
          }
          Ok(log_file) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(BufWriter::new(log_file));
            layered.with(
              tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_filter(filter)
            ).init();
            FileTracing(Some(guard))
          }
        }
      } else {
        layered.init();
        FileTracing::default()
      }
    };
    #[cfg(not(feature = "app_tracing_file"))] let _file_tracing = {
      if file.is_some() {
        layered.init();
        tracing::warn!("Cannot log to file; feature `app_tracing_file` is disabled");
      } else {
        layered.init();
      }
      FileTracing
    };

    Self { _file_tracing }
  }

  #[cfg(target_arch = "wasm32")]
  fn new_wasm(
    console_filter: EnvFilter,
  ) -> Self {
    tracing_subscriber::registry().with(
      tracing_subscriber::fmt::layer()
        .with_writer(tracing_web::MakeWebConsoleWriter::new())
        .with_ansi(false)
        .without_time()
        .with_filter(console_filter)
    ).init();

    Self { _file_tracing: FileTracing::default() }
  }
}
