use clap::{CommandFactory, FromArgMatches, Parser};

use crate::output::{self, SystemClipboard};
use crate::prelude::*;

#[derive(Debug, Parser)]
#[command(version)]
#[command(about = "Ask an LLM a question through the terminal")]
pub struct Args {
    /// Returns a valid bash command that matches the request and copies it to the clipboard.
    #[arg(short, long)]
    pub shell: bool,

    /// The question to ask.
    #[arg(trailing_var_arg = true)]
    pub question: Vec<String>,
}

impl Args {
    pub fn mode(&self) -> Mode {
        Mode::from_shell_flag(self.shell)
    }

    /// The positional words joined by single spaces, or `None` if there are none.
    pub fn question(&self) -> Option<String> {
        if self.question.is_empty() {
            None
        } else {
            Some(self.question.join(" "))
        }
    }
}

/// Builds the request for `question`, sends it and post-processes the answer.
pub fn answer<P: Provider>(
    provider: &P,
    mode: Mode,
    question: &str,
    clipboard: &mut impl Clipboard,
) -> Result<String> {
    let request = provider.build_request(mode, question);
    let text = provider.send(&request)?;
    log::debug!("response: {:#?}", text);

    output::finish(text, mode, clipboard)
}

/// Writes the final answer followed by a newline.
pub fn print_answer(out: &mut impl std::io::Write, output: &str) -> Result<()> {
    writeln!(out, "{output}")?;
    out.flush()?;
    Ok(())
}

fn fatal<T>(result: Result<T>) -> T {
    match result {
        Ok(value) => value,
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    }
}

/// Entry point shared by every provider binary.
pub fn run<P: Provider>() {
    env_logger::init();

    let matches = Args::command().name(P::BIN_NAME).get_matches();
    let args = Args::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let Some(question) = args.question() else {
        eprintln!("Error: no arguments provided");
        std::process::exit(1);
    };
    log::debug!("question: {}", question);

    let api_key = fatal(crate::config::load_api_key(P::API_KEY_ENV));
    let provider = fatal(P::new(api_key));

    let output = fatal(answer(&provider, args.mode(), &question, &mut SystemClipboard));

    fatal(print_answer(&mut std::io::stdout().lock(), &output));
}
