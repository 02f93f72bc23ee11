#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `cli` implements the thin command-line front-end for the `oc-dbus-match`
//! workspace. The surface is deliberately small: one positional `RULE`
//! operand, `-v`/`--verbose` for diagnostics, and the conventional
//! `--help`/`--version` switches. The actual work happens in the `rules`
//! crate; this crate only shuttles text between the process boundary and
//! [`rules::parse`].
//!
//! # Design
//!
//! The crate exposes [`run`] as the primary entry point. The function
//! accepts an iterator of arguments together with handles for standard
//! output and error, so binaries and tests share one execution path and
//! tests can capture output without touching process-global streams. A
//! [`clap`](https://docs.rs/clap/) command definition performs the parse;
//! help and version rendering use static snapshots so the wording stays
//! deterministic.
//!
//! # Invariants
//!
//! - [`run`] never panics; argument problems and I/O failures surface as
//!   non-zero exit codes.
//! - Diagnostics go to stderr; the usage banner, help, version, and the
//!   rule dump go to stdout.
//! - Exit codes are produced exclusively through [`ExitCode`]: `0` for an
//!   accepted rule, `1` for usage or validation errors, `2` for an empty
//!   rule string.
//!
//! # Errors
//!
//! Argument-parsing failures are reported with exit code `1`. Rule
//! validation failures are reported with the code from
//! [`ExitCode::from_error`], naming the offending key and value in the
//! diagnostic.
//!
//! # Examples
//!
//! ```
//! use cli::run;
//!
//! let mut stdout = Vec::new();
//! let mut stderr = Vec::new();
//! let exit = run(["oc-dbus-match", "type='signal'"], &mut stdout, &mut stderr);
//!
//! assert_eq!(exit, 0);
//! assert!(!stdout.is_empty());
//! assert!(stderr.is_empty());
//! ```
//!
//! # See also
//!
//! - [`rules`] for the parser pipeline itself.
//! - `src/bin/oc-dbus-match.rs` for the binary that wires [`run`] into
//!   `main`.

mod exit_code;

pub use exit_code::ExitCode;

use std::ffi::OsString;
use std::io::{self, Write};

use clap::{Arg, ArgAction, Command};
use tracing_subscriber::EnvFilter;

/// Canonical program name used in diagnostics and the usage banner.
pub const PROGRAM_NAME: &str = "oc-dbus-match";

/// Maximum exit code representable by a Unix process.
const MAX_EXIT_CODE: i32 = u8::MAX as i32;

/// Deterministic help text describing the CLI surface.
const HELP_TEXT: &str = concat!(
    "oc-dbus-match ",
    env!("CARGO_PKG_VERSION"),
    "\n",
    "\n",
    "Usage: oc-dbus-match [-h] [-V] [-v] RULE\n",
    "\n",
    "Validates a D-Bus match rule and prints the parsed record. RULE is a\n",
    "comma-separated list of key='value' clauses, for example:\n",
    "\n",
    "  oc-dbus-match \"type='signal',interface='org.freedesktop.DBus'\"\n",
    "\n",
    "Options:\n",
    "  -h, --help       Show this help message and exit.\n",
    "  -V, --version    Output version information and exit.\n",
    "  -v, --verbose    Emit parser tracing on stderr (RUST_LOG overrides).\n",
);

/// One-line usage banner printed alongside operand diagnostics.
const USAGE_BANNER: &str = "Usage: oc-dbus-match [-h] [-V] [-v] RULE";

/// Arguments recognised by the front-end after a successful parse.
#[derive(Debug)]
struct ParsedArgs {
    show_help: bool,
    show_version: bool,
    verbose: bool,
    rule: Option<String>,
}

/// Builds the `clap` command definition.
///
/// Help and version flags are declared manually so rendering stays inside
/// the writer-based [`run`] path instead of clap's process-global printing.
fn clap_command() -> Command {
    Command::new(PROGRAM_NAME)
        .disable_help_flag(true)
        .disable_version_flag(true)
        .arg(
            Arg::new("help")
                .short('h')
                .long("help")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("version")
                .short('V')
                .long("version")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue),
        )
        .arg(Arg::new("rule").action(ArgAction::Set).num_args(0..=1))
}

/// Parses command-line arguments into a [`ParsedArgs`] structure.
fn parse_args<I, S>(arguments: I) -> Result<ParsedArgs, clap::Error>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    let mut args: Vec<OsString> = arguments.into_iter().map(Into::into).collect();

    if args.is_empty() {
        args.push(OsString::from(PROGRAM_NAME));
    }

    let mut matches = clap_command().try_get_matches_from(args)?;

    Ok(ParsedArgs {
        show_help: matches.get_flag("help"),
        show_version: matches.get_flag("version"),
        verbose: matches.get_flag("verbose"),
        rule: matches.remove_one::<String>("rule"),
    })
}

/// Installs the tracing subscriber for this invocation.
///
/// `RUST_LOG` takes precedence; otherwise `--verbose` selects the parser's
/// debug events. Repeated installation (tests call [`run`] many times in
/// one process) is a no-op.
fn init_tracing(verbose: bool) {
    let default_directive = if verbose { "dbus=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

/// Runs the front-end over the supplied arguments and I/O handles.
///
/// Returns the numeric exit status; callers convert it with
/// [`exit_code_from`] when terminating a process.
pub fn run<I, S, Out, Err>(arguments: I, stdout: &mut Out, stderr: &mut Err) -> i32
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
    Out: Write,
    Err: Write,
{
    match parse_args(arguments) {
        Ok(parsed) => execute(&parsed, stdout, stderr),
        Err(error) => {
            let _ = writeln!(stderr, "{PROGRAM_NAME}: {error}");
            ExitCode::Syntax.as_i32()
        }
    }
}

/// Executes a parsed invocation.
fn execute<Out, Err>(parsed: &ParsedArgs, stdout: &mut Out, stderr: &mut Err) -> i32
where
    Out: Write,
    Err: Write,
{
    if parsed.show_help {
        let _ = stdout.write_all(HELP_TEXT.as_bytes());
        return ExitCode::Ok.as_i32();
    }
    if parsed.show_version {
        let _ = writeln!(stdout, "{PROGRAM_NAME} {}", env!("CARGO_PKG_VERSION"));
        return ExitCode::Ok.as_i32();
    }

    init_tracing(parsed.verbose);

    let Some(rule_text) = parsed.rule.as_deref() else {
        let _ = writeln!(stdout, "{USAGE_BANNER}");
        let _ = writeln!(stderr, "{PROGRAM_NAME}: missing RULE operand");
        return ExitCode::Syntax.as_i32();
    };

    match rules::parse(rule_text) {
        Ok(rule) => {
            if writeln!(stdout, "accepted match rule: {rule_text}")
                .and_then(|()| write!(stdout, "{rule}"))
                .is_err()
            {
                return ExitCode::Syntax.as_i32();
            }
            ExitCode::Ok.as_i32()
        }
        Err(error) => {
            let _ = writeln!(stderr, "{PROGRAM_NAME}: rejecting rule: {error}");
            ExitCode::from_error(&error).as_i32()
        }
    }
}

/// Converts a numeric exit status into an [`std::process::ExitCode`].
#[must_use]
pub fn exit_code_from(status: i32) -> std::process::ExitCode {
    let clamped = status.clamp(0, MAX_EXIT_CODE);
    u8::try_from(clamped).map_or(std::process::ExitCode::FAILURE, std::process::ExitCode::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_captured(args: &[&str]) -> (i32, String, String) {
        let mut stdout = Vec::new();
        let mut stderr = Vec::new();
        let exit = run(args.iter().copied(), &mut stdout, &mut stderr);
        (
            exit,
            String::from_utf8(stdout).expect("stdout is UTF-8"),
            String::from_utf8(stderr).expect("stderr is UTF-8"),
        )
    }

    #[test]
    fn valid_rule_prints_dump_and_succeeds() {
        let (exit, stdout, stderr) = run_captured(&[PROGRAM_NAME, "type='signal'"]);

        assert_eq!(exit, ExitCode::Ok.as_i32());
        assert!(stdout.contains("accepted match rule"));
        assert!(stdout.contains("signal"));
        assert!(stderr.is_empty());
    }

    #[test]
    fn invalid_rule_names_the_key_on_stderr() {
        let (exit, stdout, stderr) = run_captured(&[PROGRAM_NAME, "type='bogus'"]);

        assert_eq!(exit, ExitCode::Syntax.as_i32());
        assert!(stdout.is_empty());
        assert!(stderr.contains("'type'"));
        assert!(stderr.contains("'bogus'"));
    }

    #[test]
    fn empty_rule_reports_dedicated_exit_code() {
        let (exit, _, stderr) = run_captured(&[PROGRAM_NAME, ""]);

        assert_eq!(exit, ExitCode::EmptyRule.as_i32());
        assert!(stderr.contains("empty"));
    }

    #[test]
    fn missing_operand_shows_usage() {
        let (exit, stdout, stderr) = run_captured(&[PROGRAM_NAME]);

        assert_eq!(exit, ExitCode::Syntax.as_i32());
        assert!(stdout.contains("Usage:"));
        assert!(stderr.contains("missing RULE operand"));
    }

    #[test]
    fn help_renders_on_stdout() {
        let (exit, stdout, stderr) = run_captured(&[PROGRAM_NAME, "--help"]);

        assert_eq!(exit, ExitCode::Ok.as_i32());
        assert!(stdout.contains("Usage:"));
        assert!(stdout.contains(PROGRAM_NAME));
        assert!(stderr.is_empty());
    }

    #[test]
    fn version_renders_on_stdout() {
        let (exit, stdout, stderr) = run_captured(&[PROGRAM_NAME, "--version"]);

        assert_eq!(exit, ExitCode::Ok.as_i32());
        assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
        assert!(stderr.is_empty());
    }

    #[test]
    fn unknown_flag_is_a_usage_error() {
        let (exit, stdout, stderr) = run_captured(&[PROGRAM_NAME, "--definitely-invalid"]);

        assert_eq!(exit, ExitCode::Syntax.as_i32());
        assert!(stdout.is_empty());
        assert!(!stderr.is_empty());
    }

    #[test]
    fn extra_operands_are_rejected() {
        let (exit, _, stderr) = run_captured(&[PROGRAM_NAME, "type='signal'", "extra"]);

        assert_eq!(exit, ExitCode::Syntax.as_i32());
        assert!(!stderr.is_empty());
    }

    #[test]
    fn empty_argument_list_defaults_to_usage_error() {
        let mut stdout = Vec::new();
        let mut stderr = Vec::new();
        let exit = run(std::iter::empty::<OsString>(), &mut stdout, &mut stderr);

        assert_eq!(exit, ExitCode::Syntax.as_i32());
        let stdout_text = String::from_utf8(stdout).expect("stdout is UTF-8");
        assert!(stdout_text.contains("Usage:"));
    }

    #[test]
    fn exit_code_from_clamps_to_u8_range() {
        // ExitCode carries no comparison impls; clamping must simply not panic.
        let _ = exit_code_from(0);
        let _ = exit_code_from(-7);
        let _ = exit_code_from(4000);
    }
}
