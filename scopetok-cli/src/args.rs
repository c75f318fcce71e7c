//! Command definitions for both binaries.

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use std::path::PathBuf;

const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

/// Arguments every binary accepts.
fn common_args(command: Command) -> Command {
    command
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::new("pos")
                .long("pos")
                .help("Byte offset of the cursor in the document read from stdin")
                .value_parser(value_parser!(i64))
                .allow_negative_numbers(true)
                .default_value("0"),
        )
        .arg(
            Arg::new("granularity")
                .long("granularity")
                .help("Where the token window starts (default from configuration: declaration)")
                .value_parser(["declaration", "block"]),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("TOML configuration file layered over the built-in defaults")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .help("Log level for messages on stderr (default from configuration: warn)")
                .value_parser(LOG_LEVELS),
        )
}

/// `tokenizer`: print the abstracted token window at the cursor.
pub fn tokenizer_command() -> Command {
    common_args(Command::new("tokenizer"))
        .about("Print the abstracted Go tokens of the scope around a cursor")
        .arg(
            Arg::new("idents")
                .long("idents")
                .help("Print the distinct identifiers of the whole document instead")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("full")
                .long("full")
                .help("Follow every ID_S with the identifier it stands for")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format (default from configuration: text)")
                .value_parser(["text", "json"]),
        )
}

/// `suggester`: print completion suggestions for the cursor.
pub fn suggester_command() -> Command {
    common_args(Command::new("suggester"))
        .about("Print completion suggestions for a cursor in a Go document")
}

/// A `SetTrue` flag that only one of the commands defines.
pub(crate) fn flag(matches: &ArgMatches, id: &str) -> bool {
    matches
        .try_get_one::<bool>(id)
        .ok()
        .flatten()
        .copied()
        .unwrap_or(false)
}

/// A string option that only one of the commands defines.
pub(crate) fn option<'a>(matches: &'a ArgMatches, id: &str) -> Option<&'a String> {
    matches.try_get_one::<String>(id).ok().flatten()
}

/// The cursor with negative offsets clamped to the start of the document.
pub(crate) fn cursor(matches: &ArgMatches) -> usize {
    let pos = matches.get_one::<i64>("pos").copied().unwrap_or(0);
    usize::try_from(pos.max(0)).unwrap_or(usize::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_are_well_formed() {
        tokenizer_command().debug_assert();
        suggester_command().debug_assert();
    }

    #[test]
    fn negative_positions_clamp_to_zero() {
        let matches = tokenizer_command()
            .try_get_matches_from(["tokenizer", "--pos", "-7"])
            .expect("arguments to parse");
        assert_eq!(cursor(&matches), 0);
    }

    #[test]
    fn tokenizer_only_flags_read_as_unset_on_suggester() {
        let matches = suggester_command()
            .try_get_matches_from(["suggester", "--pos", "3"])
            .expect("arguments to parse");
        assert!(!flag(&matches, "full"));
        assert!(option(&matches, "format").is_none());
        assert_eq!(cursor(&matches), 3);
    }

    #[test]
    fn rejects_unknown_granularity() {
        let result = tokenizer_command().try_get_matches_from(["tokenizer", "--granularity", "line"]);
        assert!(result.is_err());
    }
}
