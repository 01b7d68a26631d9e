//! Command-line entry helper.
//!
//! Turns a producer into a small program: arguments are parsed with clap,
//! the manifest goes to stdout and logs go to stderr.
//!
//! Exit codes:
//! - 0: Success
//! - 1: Producer failed
//! - 2: Invalid arguments
//! - 3: Transpilation failed

use std::fmt;
use std::process::ExitCode;

use clap::Parser;
use gybe_model::IntoManifest;
use tracing_subscriber::{fmt as log_fmt, prelude::*, EnvFilter};

use crate::config::RenderConfig;
use crate::error::TranspileError;
use crate::transpiler::Transpiler;

/// CI-friendly exit codes
pub struct ExitCodes;

impl ExitCodes {
    pub const SUCCESS: u8 = 0;
    pub const PRODUCER_ERROR: u8 = 1;
    pub const INVALID_ARGS: u8 = 2;
    pub const TRANSPILE_ERROR: u8 = 3;
}

/// Why a run failed.
#[derive(Debug)]
pub enum RunError<E> {
    Producer(E),
    Transpile(TranspileError),
}

impl<E> RunError<E> {
    pub fn exit_code(&self) -> u8 {
        match self {
            RunError::Producer(_) => ExitCodes::PRODUCER_ERROR,
            RunError::Transpile(_) => ExitCodes::TRANSPILE_ERROR,
        }
    }
}

impl<E: fmt::Display> fmt::Display for RunError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunError::Producer(e) => write!(f, "{:#}", e),
            RunError::Transpile(e) => write!(f, "{}", e),
        }
    }
}

/// Parse arguments, run the producer and print its manifest.
///
/// ```rust,no_run
/// use clap::Parser;
/// use gybe_core::cli;
/// use gybe_k8s::{ConfigMap, ObjectMeta};
///
/// #[derive(Parser)]
/// struct Args {
///     #[arg(long)]
///     name: String,
/// }
///
/// fn main() -> std::process::ExitCode {
///     cli::run(|args: Args| -> anyhow::Result<ConfigMap> {
///         Ok(ConfigMap::new().metadata(ObjectMeta::new().name(args.name)))
///     })
/// }
/// ```
pub fn run<A, M, E, F>(producer: F) -> ExitCode
where
    A: Parser,
    M: IntoManifest,
    E: fmt::Display,
    F: FnOnce(A) -> Result<M, E>,
{
    init_logging();

    let args = match A::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::from(ExitCodes::INVALID_ARGS)
            } else {
                ExitCode::from(ExitCodes::SUCCESS)
            };
        }
    };

    let transpiler = Transpiler::with_config(RenderConfig::default().with_env_overrides());

    match execute(&transpiler, args, producer) {
        Ok(yaml) => {
            print!("{}", yaml);
            ExitCode::from(ExitCodes::SUCCESS)
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(e.exit_code())
        }
    }
}

/// Run the producer once and render its output, keeping failures apart.
pub fn execute<A, M, E, F>(transpiler: &Transpiler, args: A, producer: F) -> Result<String, RunError<E>>
where
    M: IntoManifest,
    F: FnOnce(A) -> Result<M, E>,
{
    let output = producer(args).map_err(RunError::Producer)?;
    transpiler.render(output).map_err(RunError::Transpile)
}

/// Install the stderr log subscriber. Does nothing if one is already set.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("gybe=info,warn"));

    let _ = tracing_subscriber::registry()
        .with(log_fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use gybe_model::{DynamicObject, Value};

    fn widget(name: String) -> DynamicObject {
        DynamicObject::new("example.com/v1", "Widget").with("name", name)
    }

    #[test]
    fn test_execute_success() {
        let yaml = execute(&Transpiler::new(), "a".to_string(), |name| {
            Ok::<_, String>(widget(name))
        })
        .unwrap();

        assert!(yaml.contains("name: a"));
    }

    #[test]
    fn test_producer_error_exit_code() {
        let err = execute(&Transpiler::new(), (), |_| Err::<DynamicObject, _>("boom"))
            .unwrap_err();

        assert_eq!(err.exit_code(), ExitCodes::PRODUCER_ERROR);
        assert_eq!(err.to_string(), "boom");
    }

    #[test]
    fn test_transpile_error_exit_code() {
        let err = execute(&Transpiler::new(), (), |_| {
            Ok::<_, String>(widget("a".to_string()).with("ratio", f64::NAN))
        })
        .unwrap_err();

        assert_eq!(err.exit_code(), ExitCodes::TRANSPILE_ERROR);
        assert!(err.to_string().contains("Widget.ratio"));
    }

    #[test]
    fn test_type_mismatch_is_a_transpile_error() {
        let err = execute(&Transpiler::new(), (), |_| Ok::<_, String>(Value::from("text")))
            .unwrap_err();

        assert!(matches!(err, RunError::Transpile(TranspileError::Model(_))));
    }
}
