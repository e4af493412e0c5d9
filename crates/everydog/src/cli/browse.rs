//! Interactive browse session.
//!
//! Each input line is one event for the API. After every event the session
//! writes the view that event affects (the list after a filter change, the
//! overlay after `open`). With `--output json` it writes the full snapshot
//! as one JSON line instead, so scripts can drive the viewer.
//!
//! A bad line (unknown command, unknown breed) prints an error and the
//! session keeps going; only I/O failures end it early.

use super::render;
use super::setup::OutputFormat;
use everydogapp::api::{CatalogApi, Snapshot};
use everydogapp::error::{EverydogError, Result};
use everydogapp::facets::{Facet, FacetOption};
use std::io::{BufRead, Write};
use std::str::FromStr;
use tracing::debug;

const PROMPT: &str = "everydog> ";

const HELP: &str = "\
Commands:
  list               show the filtered breeds
  groups | origins   show the options of a facet
  group [VALUE]      filter by breed group (no value clears)
  origin [VALUE]     filter by origin (no value clears)
  open <ID|NAME>     show a breed in the detail view
  close              close the detail view
  status             show counts, filters and the open breed
  help               this text
  quit               leave
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseCommand {
    List,
    Options(Facet),
    Select(Facet, Option<String>),
    Open(String),
    Close,
    Status,
    Help,
    Quit,
}

/// Parse one input line. Blank lines yield `None`.
pub fn parse_line(line: &str) -> Result<Option<BrowseCommand>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };
    let arg = Some(rest).filter(|r| !r.is_empty()).map(str::to_string);

    let command = match word.to_lowercase().as_str() {
        "list" | "ls" => BrowseCommand::List,
        "groups" => BrowseCommand::Options(Facet::BreedGroup),
        "origins" | "countries" => BrowseCommand::Options(Facet::Origin),
        "open" | "show" => match arg {
            Some(selector) => BrowseCommand::Open(selector),
            None => return Err(EverydogError::Api("open needs a breed id or name".into())),
        },
        "close" => BrowseCommand::Close,
        "status" => BrowseCommand::Status,
        "help" | "?" => BrowseCommand::Help,
        "quit" | "exit" | "q" => BrowseCommand::Quit,
        other => match Facet::from_str(other) {
            Ok(facet) => BrowseCommand::Select(facet, arg),
            Err(_) => {
                return Err(EverydogError::Api(format!(
                    "Unknown command: {} (try `help`)",
                    word
                )))
            }
        },
    };
    Ok(Some(command))
}

/// Run the session until `quit` or end of input.
pub fn run_session<R: BufRead, W: Write>(
    api: &mut CatalogApi,
    image_base: &str,
    output: OutputFormat,
    prompt: bool,
    input: R,
    out: &mut W,
) -> Result<()> {
    write_view(out, output, &api.snapshot(), render::render_list_view)?;

    let mut lines = input.lines();
    loop {
        if prompt {
            write!(out, "{}", PROMPT)?;
            out.flush()?;
        }
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;

        let command = match parse_line(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                writeln!(out, "Error: {}", e)?;
                continue;
            }
        };
        debug!(?command, "browse event");

        match command {
            BrowseCommand::Quit => break,
            BrowseCommand::Help => write!(out, "{}", HELP)?,
            BrowseCommand::List => {
                write_view(out, output, &api.snapshot(), render::render_list_view)?
            }
            BrowseCommand::Status => write_view(out, output, &api.snapshot(), render_status)?,
            BrowseCommand::Options(facet) => {
                write_view(out, output, &api.snapshot(), |s: &Snapshot| {
                    render::render_options(facet, s.options(facet), s.selections.get(facet))
                })?
            }
            BrowseCommand::Select(facet, value) => {
                let snapshot = api.set_selection(facet, value.map(FacetOption::new));
                write_view(out, output, &snapshot, render::render_list_view)?
            }
            BrowseCommand::Open(selector) => match api.open_detail_by(&selector) {
                Ok(snapshot) => write_view(out, output, &snapshot, |s: &Snapshot| {
                    s.selected_dog
                        .as_ref()
                        .map(|r| render::render_detail(r, image_base))
                        .unwrap_or_default()
                })?,
                Err(e) => writeln!(out, "Error: {}", e)?,
            },
            BrowseCommand::Close => {
                let snapshot = api.close_detail();
                write_view(out, output, &snapshot, |s: &Snapshot| {
                    format!("Detail closed.\n{}", render::render_status(s))
                })?
            }
        }
    }
    Ok(())
}

fn render_status(snapshot: &Snapshot) -> String {
    let mut out = render::render_status(snapshot);
    if let Some(dog) = &snapshot.selected_dog {
        out.push_str(&format!("Open: {}\n", dog.name));
    }
    out.push_str(&render::render_messages(&snapshot.messages));
    out
}

fn write_view<W: Write>(
    out: &mut W,
    output: OutputFormat,
    snapshot: &Snapshot,
    text: impl Fn(&Snapshot) -> String,
) -> Result<()> {
    match output {
        OutputFormat::Text => write!(out, "{}", text(snapshot))?,
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(snapshot)?)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use everydogapp::catalog::memory::fixtures::sample_catalog;
    use everydogapp::catalog::CatalogEvent;

    const BASE: &str = "https://cdn2.thedogapi.com/images";

    fn loaded() -> CatalogApi {
        let mut api = CatalogApi::new();
        api.deliver(CatalogEvent::Loaded(sample_catalog()));
        api
    }

    fn session(api: &mut CatalogApi, output: OutputFormat, script: &str) -> String {
        colored::control::set_override(false);
        let mut out = Vec::new();
        run_session(api, BASE, output, false, script.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(parse_line("   ").unwrap(), None);
        assert_eq!(parse_line("LIST").unwrap(), Some(BrowseCommand::List));
        assert_eq!(
            parse_line("origins").unwrap(),
            Some(BrowseCommand::Options(Facet::Origin))
        );
        assert_eq!(
            parse_line("group  Toy ").unwrap(),
            Some(BrowseCommand::Select(Facet::BreedGroup, Some("Toy".into())))
        );
        assert_eq!(
            parse_line("country").unwrap(),
            Some(BrowseCommand::Select(Facet::Origin, None))
        );
        assert_eq!(
            parse_line("open Shiba Inu").unwrap(),
            Some(BrowseCommand::Open("Shiba Inu".into()))
        );
        assert_eq!(parse_line("q").unwrap(), Some(BrowseCommand::Quit));
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_line("open").is_err());
        match parse_line("fetch now") {
            Err(EverydogError::Api(msg)) => assert!(msg.contains("Unknown command: fetch")),
            other => panic!("Expected Api error, got {:?}", other),
        }
    }

    #[test]
    fn test_filter_then_open_then_close() {
        let mut api = loaded();
        let out = session(&mut api, OutputFormat::Text, "group Working\nopen Pug\nclose\n");

        assert!(out.contains("Showing 2 of 3 breeds · group: Working · origin: any"));
        assert!(out.contains("Group:       Unknown"));
        assert!(out.contains("Detail closed."));
        assert_eq!(api.selected_dog(), None);
        assert_eq!(
            api.selections().breed_group,
            Some(FacetOption::new("Working"))
        );
    }

    #[test]
    fn test_clearing_a_facet() {
        let mut api = loaded();
        session(&mut api, OutputFormat::Text, "origin Japan\norigin\n");
        assert!(api.selections().is_empty());
    }

    #[test]
    fn test_bad_lines_do_not_end_session() {
        let mut api = loaded();
        let out = session(&mut api, OutputFormat::Text, "wag\nopen Beagle\nopen 2\nstatus\n");

        assert!(out.contains("Error: Unknown command: wag"));
        assert!(out.contains("Error: Breed not found: Beagle"));
        assert!(out.contains("Open: Husky"));
    }

    #[test]
    fn test_quit_stops_reading() {
        let mut api = loaded();
        session(&mut api, OutputFormat::Text, "quit\nopen 1\n");
        assert_eq!(api.selected_dog(), None);
    }

    #[test]
    fn test_json_lines_output() {
        let mut api = loaded();
        let out = session(&mut api, OutputFormat::Json, "origin Russia\n");
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);

        let last: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(last["filteredBreeds"][0]["name"], "Husky");
        assert_eq!(last["selections"]["origin"]["value"], "Russia");
    }
}
