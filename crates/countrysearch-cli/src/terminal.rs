//! A line-driven terminal autosuggest widget.
//!
//! Plays the part of the external dropdown widget: it reads one line per
//! event, forwards it to an [`AutosuggestSource`] and prints the dropdown
//! and detail panel after each event.
//!
//! | input        | event                                   |
//! |--------------|-----------------------------------------|
//! | any text     | change + fetch with that text           |
//! | empty line   | change to `""`                          |
//! | `:N`         | select suggestion `N` (1-based)         |
//! | `:clear`     | dismiss the dropdown                    |
//! | `:q`/`:quit` | leave                                   |

use countrysearch_core::traits::{Autosuggest, AutosuggestSource};
use std::io::{self, BufRead, Write};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command<'l> {
    Text(&'l str),
    ClearInput,
    Select(usize),
    Dismiss,
    Quit,
}

fn parse_command(line: &str) -> Command<'_> {
    let line = line.trim_end_matches(['\r', '\n']);
    if line.is_empty() {
        return Command::ClearInput;
    }
    match line.strip_prefix(':') {
        Some("q") | Some("quit") => Command::Quit,
        Some("clear") => Command::Dismiss,
        Some(n) => match n.trim().parse::<usize>() {
            Ok(n) => Command::Select(n),
            Err(_) => Command::Text(line),
        },
        None => Command::Text(line),
    }
}

pub struct TerminalAutosuggest<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TerminalAutosuggest<R, W> {
    pub fn new(input: R, output: W) -> Self {
        TerminalAutosuggest { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn render<'a, S: AutosuggestSource<'a>>(&mut self, source: &S) -> io::Result<()> {
        let props = source.input_props();
        if props.value.is_empty() {
            writeln!(self.output, "[{}]", props.placeholder)?;
        } else {
            writeln!(self.output, "> {}", props.value)?;
        }

        for (i, country) in source.suggestions().iter().copied().enumerate() {
            writeln!(self.output, "{:>3}. {}", i + 1, source.render_suggestion(country))?;
        }

        if let Some(panel) = source.detail_panel() {
            writeln!(self.output, "{panel}")?;
        }
        self.output.flush()
    }
}

impl<R: BufRead, W: Write> Autosuggest for TerminalAutosuggest<R, W> {
    type Error = io::Error;

    fn run<'a, S: AutosuggestSource<'a>>(&mut self, source: &mut S) -> io::Result<()> {
        self.render(source)?;
        let mut line = String::new();
        loop {
            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                break;
            }
            let command = parse_command(&line);
            debug!(?command, "terminal input");
            match command {
                Command::Quit => break,
                Command::ClearInput => source.on_change(""),
                Command::Dismiss => source.on_suggestions_clear_requested(),
                Command::Select(0) => {
                    writeln!(self.output, "suggestions are numbered from 1")?;
                    continue;
                }
                Command::Select(n) => source.on_suggestion_selected(n - 1),
                Command::Text(text) => {
                    source.on_change(text);
                    source.on_suggestions_fetch_requested(text);
                }
            }
            self.render(source)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use countrysearch_core::{Dataset, SearchBar};
    use std::io::Cursor;

    fn session(script: &str) -> String {
        let dataset = Dataset::from_json_str(
            r#"{"countries":[
                {"country":"France","capital":"Paris","population":67000000,"currency":"Euro","official_language":"French"},
                {"country":"Paraguay","capital":"Asunción","population":6700000,"currency":"Guarani","official_language":["Spanish","Guarani"]}
            ]}"#,
        )
        .unwrap();
        let mut bar = SearchBar::new(&dataset);
        let mut term = TerminalAutosuggest::new(Cursor::new(script.to_string()), Vec::new());
        term.run(&mut bar).unwrap();
        String::from_utf8(term.into_output()).unwrap()
    }

    #[test]
    fn parses_commands() {
        assert_eq!(parse_command("\n"), Command::ClearInput);
        assert_eq!(parse_command(":2\n"), Command::Select(2));
        assert_eq!(parse_command(":clear"), Command::Dismiss);
        assert_eq!(parse_command(":q\r\n"), Command::Quit);
        assert_eq!(parse_command(":abc"), Command::Text(":abc"));
        assert_eq!(parse_command("new york\n"), Command::Text("new york"));
    }

    #[test]
    fn type_select_and_clear() {
        let out = session("par\n:1\n\n:q\n");
        assert!(out.starts_with("[Search by country name or capital]\n"));
        assert!(out.contains("> par\n  1. France — Paris"));
        assert!(out.contains("  2. Paraguay — Asunción"));
        assert!(out.contains("> France\nFrance\n  Capital: Paris\n  Population: 67,000,000\n  Currency: Euro"));
        assert!(out.trim_end().ends_with("[Search by country name or capital]"));
    }

    #[test]
    fn zero_index_is_rejected() {
        let out = session("par\n:0\n");
        assert!(out.contains("suggestions are numbered from 1"));
    }

    #[test]
    fn stops_at_end_of_input() {
        let out = session("zzz\n");
        assert!(out.ends_with("> zzz\n"));
    }
}
