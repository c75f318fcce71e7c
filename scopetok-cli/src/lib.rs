//! Command-line front ends for scopetok
//!
//! Two binaries share this library. `tokenizer` prints the abstracted token window at a cursor
//! (or, with `--idents`, the identifiers of the document), and `suggester` prints completion
//! suggestions for it. Both read the document from stdin and write a single response to
//! stdout.
//!
//! Failures are answered on stdout as `!ERR: <description>` with a zero exit status, so an
//! editor client reading stdout always receives something it can interpret.

pub mod args;
pub mod error;
pub mod logging;

pub use error::CliError;

use clap::ArgMatches;
use log::LevelFilter;
use std::io::Read;
use std::path::PathBuf;

use scopetok_config::{Loader, OutputFormat, ScopetokConfig};
use scopetok_parser::golang::suggest::{StaticSuggester, Suggester};
use scopetok_parser::{identifiers, ScopeResolver};

/// Prefix of every failure response.
pub const ERROR_MARKER: &str = "!ERR: ";

/// Everything one run needs: the cursor, the flags, and the layered configuration.
#[derive(Debug, Clone)]
pub struct Invocation {
    pub cursor: usize,
    pub idents: bool,
    pub config: ScopetokConfig,
}

impl Invocation {
    /// Build the invocation from parsed arguments. Flags override `--config`, which overrides
    /// the per-user file, which overrides the built-in defaults.
    pub fn from_matches(matches: &ArgMatches) -> Result<Self, CliError> {
        let mut loader = Loader::new().with_user_file();
        if let Some(path) = matches.get_one::<PathBuf>("config") {
            loader = loader.with_file(path);
        }
        if let Some(granularity) = args::option(matches, "granularity") {
            loader = loader.set_override("scope.granularity", granularity.as_str())?;
        }
        if let Some(level) = args::option(matches, "log-level") {
            loader = loader.set_override("logging.level", level.as_str())?;
        }
        if let Some(format) = args::option(matches, "format") {
            loader = loader.set_override("output.format", format.as_str())?;
        }
        if args::flag(matches, "full") {
            loader = loader.set_override("output.mode", "full")?;
        }

        Ok(Invocation {
            cursor: args::cursor(matches),
            idents: args::flag(matches, "idents"),
            config: loader.build()?,
        })
    }

    pub fn log_level(&self) -> Result<LevelFilter, CliError> {
        self.config
            .logging
            .level_filter()
            .map_err(|_| CliError::LogLevel(self.config.logging.level.clone()))
    }

    /// Install the stderr logger at the configured level.
    pub fn init_logging(&self) -> Result<(), CliError> {
        logging::init(self.log_level()?)?;
        Ok(())
    }

    fn resolver(&self) -> ScopeResolver {
        ScopeResolver::new()
            .with_granularity(self.config.scope.granularity)
            .with_lexer_options(self.config.lexer.clone())
    }
}

/// Read the whole document.
pub fn read_document(mut input: impl Read) -> Result<Vec<u8>, CliError> {
    let mut source = Vec::new();
    input.read_to_end(&mut source)?;
    log::debug!("read {} bytes", source.len());
    Ok(source)
}

/// The `tokenizer` response for a document.
pub fn run_tokenizer(invocation: &Invocation, input: impl Read) -> Result<String, CliError> {
    let source = read_document(input)?;

    if invocation.idents {
        let text = String::from_utf8_lossy(&source);
        return Ok(identifiers(&text).join(","));
    }

    let resolution = invocation.resolver().resolve(&source, invocation.cursor);
    log::debug!(
        "window {:?} via {:?}: {} tokens",
        resolution.range,
        resolution.route,
        resolution.lexemes.len()
    );

    let output = &invocation.config.output;
    match output.format {
        OutputFormat::Text => Ok(resolution.render(output.mode)),
        OutputFormat::Json => Ok(serde_json::to_string(&resolution.render_items(output.mode))?),
    }
}

/// The `suggester` response for a document.
pub fn run_suggester(
    invocation: &Invocation,
    input: impl Read,
    suggester: &dyn Suggester,
) -> Result<String, CliError> {
    let source = read_document(input)?;
    let tokens = invocation
        .resolver()
        .resolve(&source, invocation.cursor)
        .tokens();
    Ok(suggester.suggest(&tokens, invocation.cursor).join(","))
}

/// The suggester configured for this invocation.
pub fn configured_suggester(invocation: &Invocation) -> StaticSuggester {
    StaticSuggester::new(invocation.config.suggester.static_suggestions.iter().cloned())
}

/// Render a failure the way clients expect it.
pub fn error_response(err: &CliError) -> String {
    format!("{}{}", ERROR_MARKER, err)
}
