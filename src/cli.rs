use crate::discovery::Discovery;
use crate::provider::Client;
use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::json;
use std::error::Error;
use std::io::Write;
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "book-discovery", version, about = "Book suggestions from the Penguin Random House catalog")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Suggest random books for a theme
    Suggest {
        #[arg(long)]
        theme: String,
        #[arg(long, default_value_t = 3)]
        count: usize,
    },
    /// Find the ISBN of a book by title keyword
    Search {
        #[arg(long)]
        title: String,
    },
    /// Title and cover of a book
    Info {
        #[arg(long)]
        isbn: String,
    },
    /// Full details of a book
    Detail {
        #[arg(long)]
        isbn: String,
    },
    /// First theme of a book
    Theme {
        #[arg(long)]
        isbn: String,
    },
    /// Dominant theme across favorited books
    FavoriteTheme {
        #[arg(required = true)]
        isbns: Vec<String>,
    },
}

/// 명령 실행 결과. 제목 검색 결과가 없을 때만 `NoResults`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    NoResults,
}

/// 명령을 실행하고 결과 JSON 은 `out` 에, 사용자 안내 문구는 `err` 에 쓴다.
pub fn execute<C, W, E>(discovery: &Discovery<C>, command: Command, out: &mut W, err: &mut E) -> Result<Outcome, Box<dyn Error>>
where
    C: Client,
    W: Write,
    E: Write,
{
    match command {
        Command::Suggest { theme, count } => {
            info!(theme = %theme, count, "테마 추천");
            write_json(out, &discovery.suggest_by_theme(&theme, count))?;
        }
        Command::Search { title } => {
            info!(title = %title, "제목 검색");
            match discovery.search_by_title(&title) {
                Ok(isbn) => write_json(out, &json!({ "isbn": isbn }))?,
                Err(e) if e.is_not_found() => {
                    writeln!(err, "No results for \"{}\"", title)?;
                    return Ok(Outcome::NoResults);
                }
                Err(e) => return Err(e.into()),
            }
        }
        Command::Info { isbn } => {
            let (title, cover_url) = discovery.basic_info(&isbn);
            write_json(out, &json!({ "title": title, "cover_url": cover_url }))?;
        }
        Command::Detail { isbn } => {
            write_json(out, &discovery.full_info(&isbn))?;
        }
        Command::Theme { isbn } => {
            write_json(out, &json!({ "theme": discovery.single_theme(&isbn) }))?;
        }
        Command::FavoriteTheme { isbns } => {
            write_json(out, &json!({ "theme": discovery.dominant_theme(isbns.as_slice()) }))?;
        }
    }

    Ok(Outcome::Success)
}

fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> Result<(), Box<dyn Error>> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}
