//! `tokenizer`: print the abstracted Go tokens of the scope around a cursor.
//!
//! Usage:
//!   tokenizer --pos `<offset>` [--full] [--format text|json] [--granularity declaration|block] < file.go
//!   tokenizer --idents < file.go

use scopetok_cli::{args, error_response, run_tokenizer, CliError, Invocation};

fn main() {
    let matches = args::tokenizer_command().get_matches();

    match respond(&matches) {
        Ok(response) => println!("{}", response),
        Err(err) => print!("{}", error_response(&err)),
    }
}

fn respond(matches: &clap::ArgMatches) -> Result<String, CliError> {
    let invocation = Invocation::from_matches(matches)?;
    invocation.init_logging()?;
    run_tokenizer(&invocation, std::io::stdin().lock())
}
