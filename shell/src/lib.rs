//! Interactive shell over the search engine.
//!
//! Reads commands line by line: `add <text>` indexes a document, `search
//! <terms>` prints matching documents in descending relevance, `quit` (or
//! end of input) terminates, anything else prints the usage message. The
//! loop is generic over its reader and writer so tests can drive scripted
//! sessions through in-memory buffers.

use std::io::{BufRead, Write};

use anyhow::Result;
use engine::tokenizer::tokenize;
use engine::{Document, SearchEngine};

const ADD_COMMAND: &str = "add";
const SEARCH_COMMAND: &str = "search";
const QUIT_COMMAND: &str = "quit";

/// The demo corpus preloaded at startup unless `--empty` is given.
pub fn demo_documents() -> Vec<Document> {
    vec![
        Document::new("the brown fox jumped over the brown dog"),
        Document::new("the lazy brown dog sat in the corner"),
        Document::new("the red fox bit the lazy dog"),
    ]
}

/// Split an input line on its first whitespace run into command and rest.
fn split_command(line: &str) -> (&str, &str) {
    match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim_start()),
        None => (line, ""),
    }
}

fn print_usage(output: &mut impl Write) -> Result<()> {
    writeln!(output, "usages:")?;
    writeln!(output, "\t{ADD_COMMAND} the noisy chicken jumped over the quick cat")?;
    writeln!(output, "\t{SEARCH_COMMAND} brown dog")?;
    writeln!(output, "\t{QUIT_COMMAND}")?;
    Ok(())
}

/// Drive the read-eval-print loop until `quit` or end of input.
pub fn run(engine: &mut SearchEngine, mut input: impl BufRead, mut output: impl Write) -> Result<()> {
    print_usage(&mut output)?;

    let mut line = String::new();
    loop {
        write!(output, ">")?;
        output.flush()?;
        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(());
        }

        let (command, rest) = split_command(line.trim_end_matches(['\r', '\n']));
        match command {
            ADD_COMMAND => {
                engine.add_document(Document::new(rest));
            }
            SEARCH_COMMAND => {
                let terms = if rest.is_empty() { Vec::new() } else { tokenize(rest) };
                let terms: Vec<&str> = terms.iter().map(String::as_str).collect();
                for id in engine.search(&terms) {
                    if let Some(document) = engine.document(id) {
                        writeln!(output, "{document}")?;
                    }
                }
            }
            QUIT_COMMAND => return Ok(()),
            _ => print_usage(&mut output)?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_command_from_rest_on_first_whitespace_run() {
        assert_eq!(split_command("add the lazy dog"), ("add", "the lazy dog"));
        assert_eq!(split_command("add   padded"), ("add", "padded"));
        assert_eq!(split_command("quit"), ("quit", ""));
        assert_eq!(split_command(""), ("", ""));
        assert_eq!(split_command("search "), ("search", ""));
    }
}
