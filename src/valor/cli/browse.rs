//! Interactive browsing.
//!
//! Every plain line read from stdin is the new search text. Search changes go through
//! a [`Debouncer`], so a burst of lines (a paste, or fast typing piped in) recomputes
//! the listing once, with the last text. Lines starting with `:` are commands and
//! take effect immediately:
//!
//! ```text
//! :war WWII      filter by war (`:war` alone removes the filter)
//! :state TX      filter by state
//! :award Medal of Honor
//! :clear         drop search and filters
//! :filters       list the values available for each filter
//! :view 3        show one record in full
//! :help
//! :quit
//! ```
//!
//! Stdin is read on its own thread and handed over a channel, so the loop can wait
//! for either the next line or the debounce deadline, whichever comes first.

use super::render::{
    render_detail, render_error_with, render_listing, render_loading,
    render_messages, render_vocabulary, RenderOptions,
};
use super::surface::TerminalPage;
use std::io::{BufRead, IsTerminal, Write};
use std::str::FromStr;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::Instant;
use tracing::debug;
use valor::api::{CmdMessage, ValorApi};
use valor::commands;
use valor::config::ValorConfig;
use valor::debounce::Debouncer;
use valor::detail::DetailView;
use valor::error::{Result, ValorError};
use valor::filter::Category;
use valor::images::ImageResolver;
use valor::listing::ListingSession;
use valor::store::DataSource;

const HELP: &str = "\
Type to search. Commands:
  :war VALUE     :state VALUE     :award VALUE   (no value removes the filter)
  :clear         :filters         :view ID        :quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseEvent {
    Search(String),
    Category(Category, Option<String>),
    Clear,
    Filters,
    View(String),
    Help,
    Quit,
}

/// Reads one input line as a browse event.
pub fn parse_line(line: &str) -> std::result::Result<BrowseEvent, String> {
    let line = line.trim_end_matches(['\r', '\n']);
    let Some(command) = line.strip_prefix(':') else {
        return Ok(BrowseEvent::Search(line.to_string()));
    };

    let (name, arg) = match command.trim().split_once(char::is_whitespace) {
        Some((name, arg)) => (name, arg.trim()),
        None => (command.trim(), ""),
    };
    let value = (!arg.is_empty()).then(|| arg.to_string());

    match name {
        "clear" | "c" => Ok(BrowseEvent::Clear),
        "filters" | "f" => Ok(BrowseEvent::Filters),
        "help" | "h" | "?" => Ok(BrowseEvent::Help),
        "quit" | "q" => Ok(BrowseEvent::Quit),
        "view" | "v" => value
            .map(BrowseEvent::View)
            .ok_or_else(|| "Usage: :view ID".to_string()),
        other => Category::from_str(other)
            .map(|category| BrowseEvent::Category(category, value))
            .map_err(|_| format!("Unknown command: :{} (try :help)", other)),
    }
}

/// Loads the collection and runs the browse loop on stdin/stdout.
pub fn run<S: DataSource>(api: &ValorApi<S>, config: &ValorConfig) -> Result<()> {
    let opts = RenderOptions::detect();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let mut page = TerminalPage::listing(config.show_count);
    render_loading(&mut page, &api.source().location(), opts);
    write!(out, "{}", page.render())?;
    out.flush()?;

    let session = api.browse();
    let prompt = std::io::stdin().is_terminal();
    let mut browser = Browser::new(session, config, opts).with_prompt(prompt);
    browser.drive(spawn_stdin_reader(), &mut out)
}

fn spawn_stdin_reader() -> Receiver<String> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if tx.send(line).is_err() {
                break;
            }
        }
    });
    rx
}

pub struct Browser {
    session: ListingSession,
    page: TerminalPage,
    debouncer: Debouncer<String>,
    images: ImageResolver,
    opts: RenderOptions,
    prompt: bool,
}

impl Browser {
    pub fn new(session: ListingSession, config: &ValorConfig, opts: RenderOptions) -> Self {
        Self {
            session,
            page: TerminalPage::listing(config.show_count),
            debouncer: Debouncer::new(config.debounce_window()),
            images: config.images(),
            opts,
            prompt: false,
        }
    }

    pub fn with_prompt(mut self, prompt: bool) -> Self {
        self.prompt = prompt;
        self
    }

    pub fn session(&self) -> &ListingSession {
        &self.session
    }

    /// Runs until `:quit` or the end of input. A search still waiting on the
    /// debounce window when input ends is applied before returning.
    pub fn drive<W: Write>(&mut self, lines: Receiver<String>, out: &mut W) -> Result<()> {
        self.show_listing(out)?;

        loop {
            let received = match self.debouncer.time_left(Instant::now()) {
                Some(wait) => lines.recv_timeout(wait),
                None => lines.recv().map_err(|_| RecvTimeoutError::Disconnected),
            };

            match received {
                Ok(line) => match parse_line(&line) {
                    Ok(BrowseEvent::Quit) => break,
                    Ok(event) => self.handle(event, out)?,
                    Err(message) => {
                        let text = render_messages(&[CmdMessage::error(message)], self.opts);
                        write!(out, "{}", text)?;
                    }
                },
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => break,
            }

            if let Some(term) = self.debouncer.poll(Instant::now()) {
                self.search(term, out)?;
            }
        }

        if let Some(term) = self.debouncer.flush() {
            self.search(term, out)?;
        }
        out.flush()?;
        Ok(())
    }

    fn handle<W: Write>(&mut self, event: BrowseEvent, out: &mut W) -> Result<()> {
        match event {
            BrowseEvent::Search(term) => {
                self.debouncer.input(term, Instant::now());
                Ok(())
            }
            BrowseEvent::Category(category, value) => {
                self.session.set_category(category, value);
                self.show_listing(out)
            }
            BrowseEvent::Clear => {
                self.debouncer.cancel();
                self.session.clear();
                self.show_listing(out)
            }
            BrowseEvent::Filters => {
                match self.session.vocabulary() {
                    Some(vocabulary) => write!(out, "{}", render_vocabulary(vocabulary, self.opts))?,
                    None => writeln!(out, "Filters are available once records have loaded.")?,
                }
                writeln!(out)?;
                Ok(())
            }
            BrowseEvent::View(id) => {
                let found = match self.session.collection() {
                    Some(collection) => collection
                        .find(&id)
                        .map(|record| render_detail(&DetailView::project(record, &self.images), self.opts)),
                    None => Err(ValorError::Api("Records have not loaded".to_string())),
                };
                match found {
                    Ok(text) => write!(out, "{}", text)?,
                    Err(e) => write!(out, "{}", render_error_with(&e, self.opts))?,
                }
                writeln!(out)?;
                Ok(())
            }
            BrowseEvent::Help => {
                writeln!(out, "{}", HELP)?;
                Ok(())
            }
            BrowseEvent::Quit => Ok(()),
        }
    }

    fn search<W: Write>(&mut self, term: String, out: &mut W) -> Result<()> {
        debug!(term = %term, "search settled");
        self.session.set_search(term);
        self.show_listing(out)
    }

    fn show_listing<W: Write>(&mut self, out: &mut W) -> Result<()> {
        let result = commands::list::run(&self.session);
        render_listing(&mut self.page, &result, &self.images, self.opts);
        write!(out, "{}", self.page.render())?;
        if self.prompt {
            write!(out, "search> ")?;
        }
        out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use valor::collection::Collection;
    use valor::model::Record;

    fn record(id: &str, name: &str, war: &str, state: &str, story: &str) -> Record {
        let mut r = Record::new(id, name);
        r.war = war.into();
        r.state = state.into();
        r.award = "Medal of Honor".into();
        r.short_story = story.into();
        r
    }

    fn browser() -> Browser {
        let records = vec![
            record("1", "John Basilone", "WWII", "NJ", "machine gunner"),
            record("2", "Alvin York", "WWI", "TN", "captured soldiers"),
            record("3", "Audie Murphy", "WWII", "TX", "held off a company of soldiers"),
        ];
        let session = ListingSession::ready(Collection::from_records(records));
        Browser::new(session, &ValorConfig::default(), RenderOptions::plain(100))
    }

    fn drive(browser: &mut Browser, lines: &[&str]) -> String {
        let (tx, rx) = mpsc::channel();
        for line in lines {
            tx.send(line.to_string()).unwrap();
        }
        drop(tx);
        let mut out = Vec::new();
        browser.drive(rx, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn parses_plain_lines_as_search() {
        assert_eq!(parse_line("soldiers"), Ok(BrowseEvent::Search("soldiers".into())));
        assert_eq!(parse_line(""), Ok(BrowseEvent::Search(String::new())));
    }

    #[test]
    fn parses_commands() {
        assert_eq!(
            parse_line(":war WWII"),
            Ok(BrowseEvent::Category(Category::War, Some("WWII".into())))
        );
        assert_eq!(
            parse_line(":award Medal of Honor"),
            Ok(BrowseEvent::Category(Category::Award, Some("Medal of Honor".into())))
        );
        assert_eq!(parse_line(":state"), Ok(BrowseEvent::Category(Category::State, None)));
        assert_eq!(parse_line(":clear"), Ok(BrowseEvent::Clear));
        assert_eq!(parse_line(":view 12"), Ok(BrowseEvent::View("12".into())));
        assert_eq!(parse_line(":q"), Ok(BrowseEvent::Quit));
        assert!(parse_line(":view").is_err());
        assert!(parse_line(":bogus").is_err());
    }

    #[test]
    fn burst_of_search_lines_recomputes_once() {
        let mut b = browser();
        let out = drive(&mut b, &["s", "so", "sol", "soldiers"]);

        assert_eq!(b.session().recomputations(), 1);
        assert_eq!(b.session().criteria().search(), "soldiers");
        assert!(out.contains("Showing 2 of 3 records"));
    }

    #[test]
    fn category_commands_apply_immediately_and_combine_with_search() {
        let mut b = browser();
        let out = drive(&mut b, &[":war WWII", "soldiers"]);

        let ids: Vec<_> = b.session().visible().iter().map(|r| r.id.clone()).collect();
        assert_eq!(ids, vec!["3"]);
        assert!(out.contains("Showing 2 of 3 records"));
        assert!(out.contains("Showing 1 of 3 records"));
    }

    #[test]
    fn clear_drops_pending_search_and_filters() {
        let mut b = browser();
        drive(&mut b, &[":state TN", "york", ":clear"]);

        assert!(b.session().criteria().is_unset());
        assert_eq!(b.session().visible().len(), 3);
    }

    #[test]
    fn quit_still_applies_the_pending_search() {
        let mut b = browser();
        let out = drive(&mut b, &["machine", ":quit", "ignored"]);
        assert_eq!(b.session().criteria().search(), "machine");
        assert!(out.contains("Showing 1 of 3 records"));
    }

    #[test]
    fn no_match_shows_no_results_not_error() {
        let mut b = browser();
        let out = drive(&mut b, &["zzz"]);
        assert!(out.contains("No records found."));
        assert!(!out.contains("Error"));
    }

    #[test]
    fn view_and_filters_commands() {
        let mut b = browser();
        let out = drive(&mut b, &[":view 2", ":view 99", ":filters"]);
        assert!(out.contains("Alvin York\n"));
        assert!(out.contains("Record not found: 99"));
        assert!(out.contains("Wars\n  WWI\n  WWII"));
    }

    #[test]
    fn failed_session_shows_error_panel() {
        let mut session = ListingSession::new();
        session.finish_load(Err(ValorError::load("heroes.json", "HTTP error! status: 500")));
        let mut b = Browser::new(session, &ValorConfig::default(), RenderOptions::plain(100));
        let out = drive(&mut b, &["anything"]);
        assert!(out.contains("✖ Error: Failed to load records from heroes.json"));
        assert!(!out.contains("Showing"));
    }

    #[test]
    fn unknown_commands_are_reported() {
        let mut b = browser();
        let out = drive(&mut b, &[":bogus"]);
        assert!(out.contains("Unknown command: :bogus"));
    }
}
