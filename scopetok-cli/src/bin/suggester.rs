//! `suggester`: print completion suggestions for a cursor in a Go document.
//!
//! Usage:
//!   suggester --pos `<offset>` < file.go

use scopetok_cli::{
    args, configured_suggester, error_response, run_suggester, CliError, Invocation,
};

fn main() {
    let matches = args::suggester_command().get_matches();

    match respond(&matches) {
        Ok(response) => print!("{}", response),
        Err(err) => print!("{}", error_response(&err)),
    }
}

fn respond(matches: &clap::ArgMatches) -> Result<String, CliError> {
    let invocation = Invocation::from_matches(matches)?;
    invocation.init_logging()?;
    let suggester = configured_suggester(&invocation);
    run_suggester(&invocation, std::io::stdin().lock(), &suggester)
}
