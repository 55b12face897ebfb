//! Terminal report rendering
//!
//! Writes the two platform sections to any `Write` sink. Styling is opt-in
//! per renderer so tests see plain text.

use std::fmt::Display;
use std::io::{self, Write};

use console::{StyledObject, Term, style};
use driftnet_search::{Platform, ResultItem, ResultSet, SearchFailure, SearchReport};

const DEFAULT_WIDTH: usize = 80;
const RULE_CHAR: char = '─';
const ORANGE: u8 = 172;
const GREY: u8 = 244;

/// Escapes `[` so the text cannot open a markup directive downstream.
///
/// Single pass: text that already contains `\[` gains one more backslash.
pub fn escape_markup(text: &str) -> String {
    text.replace('[', r"\[")
}

/// Attribution line for an item: `by <author>`, prefixed with the community
/// when the item has one.
pub fn attribution(item: &ResultItem) -> String {
    let author = item.author_or_placeholder();
    match item.community.as_deref() {
        Some(community) => format!("in r/{community} by {author}"),
        None => format!("by {author}"),
    }
}

/// Renders search reports to an output sink.
pub struct Renderer<W: Write> {
    out: W,
    width: usize,
    styled: bool,
}

impl Renderer<io::Stdout> {
    /// Renderer for the process's standard output, sized to the terminal.
    pub fn stdout() -> Self {
        let width = Term::stdout()
            .size_checked()
            .map(|(_rows, columns)| usize::from(columns))
            .unwrap_or(DEFAULT_WIDTH);
        Self::new(io::stdout(), width, console::colors_enabled())
    }
}

impl<W: Write> Renderer<W> {
    pub fn new(out: W, width: usize, styled: bool) -> Self {
        Self {
            out,
            width: width.max(1),
            styled,
        }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Writes failure lines, then the Hacker News and Reddit sections.
    ///
    /// # Errors
    /// - `io::Error` - The output sink rejected a write
    pub fn render_report(&mut self, report: &SearchReport) -> io::Result<()> {
        for failure in &report.failures {
            self.render_failure(failure)?;
        }

        writeln!(self.out)?;
        self.render_section(Platform::HackerNews, &report.hacker_news)?;
        writeln!(self.out)?;
        self.render_section(Platform::Reddit, &report.reddit)?;

        self.out.flush()
    }

    fn render_failure(&mut self, failure: &SearchFailure) -> io::Result<()> {
        let line = self.paint(failure.to_string()).red().bold();
        writeln!(self.out, "{line}")
    }

    /// Writes one platform's header followed by its items or a placeholder.
    ///
    /// # Errors
    /// - `io::Error` - The output sink rejected a write
    pub fn render_section(&mut self, platform: Platform, results: &ResultSet) -> io::Result<()> {
        self.header_rule(platform)?;

        if results.is_empty() {
            let placeholder = self
                .paint(format!("No results found on {platform}."))
                .dim();
            return writeln!(self.out, "{placeholder}");
        }

        for (index, item) in results.iter().enumerate() {
            if index > 0 {
                self.separator()?;
            }
            self.render_item(item)?;
        }

        Ok(())
    }

    fn render_item(&mut self, item: &ResultItem) -> io::Result<()> {
        let text = self.paint(escape_markup(&item.text)).bold().magenta();
        let byline = self.paint(attribution(item)).green();
        let url = self.paint(item.url.as_str()).blue().underlined();

        writeln!(self.out, "{text}")?;
        writeln!(self.out, "{byline}")?;
        writeln!(self.out, "{url}")
    }

    fn header_rule(&mut self, platform: Platform) -> io::Result<()> {
        let title = format!("{platform} Results");
        let label = format!(" {title} ");
        let fill = self.width.saturating_sub(label.chars().count()).max(4);
        let left = RULE_CHAR.to_string().repeat(fill / 2);
        let right = RULE_CHAR.to_string().repeat(fill - fill / 2);

        let (title, left, right) = match platform {
            Platform::HackerNews => (
                self.paint(title).bold().cyan(),
                self.paint(left).cyan(),
                self.paint(right).cyan(),
            ),
            Platform::Reddit => (
                self.paint(title).bold().color256(ORANGE),
                self.paint(left).color256(ORANGE),
                self.paint(right).color256(ORANGE),
            ),
        };

        writeln!(self.out, "{left} {title} {right}")
    }

    fn separator(&mut self) -> io::Result<()> {
        let line = self
            .paint(RULE_CHAR.to_string().repeat(self.width))
            .color256(GREY);
        writeln!(self.out, "{line}")
    }

    fn paint<D: Display>(&self, value: D) -> StyledObject<D> {
        style(value).force_styling(self.styled)
    }
}
