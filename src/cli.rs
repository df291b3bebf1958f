//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;
use std::str::FromStr;

use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "attercop", about = "token-marked corpus conversion tool.")]
/// Holds every command that is callable by the `attercop` command.
pub enum Attercop {
    #[structopt(about = "Convert a corpus file into a document index")]
    Convert(Convert),
    #[structopt(about = "Compute frequency and containment statistics")]
    Stats(Stats),
    #[structopt(about = "Print the canonical record JSON schema")]
    Schema,
}

/// Basket shape of a source corpus.
#[derive(Debug, Clone, Copy)]
pub enum SourceKind {
    Line,
    Entity,
    Infobox,
}

impl FromStr for SourceKind {
    type Err = String;

    fn from_str(kind: &str) -> Result<Self, Self::Err> {
        match kind {
            "line" => Ok(Self::Line),
            "entity" => Ok(Self::Entity),
            "infobox" => Ok(Self::Infobox),
            other => Err(format!("unknown source kind: {}", other)),
        }
    }
}

#[derive(Debug, StructOpt)]
/// Convert command and parameters.
///
/// ```sh
/// attercop-convert 0.3.0
/// Convert a corpus file into a document index
///
/// USAGE:
///     attercop convert [OPTIONS] <src> <dst>
///
/// FLAGS:
///     -h, --help       Prints help information
///     -V, --version    Prints version information
///
/// OPTIONS:
///         --entity <entity>    entity prefix for --from entity [default: wikidata]
///         --from <from>        source basket shape (line, entity or infobox) [default: line]
///         --limit <limit>      last line index to process
///
/// ARGS:
///     <src>    source corpus location
///     <dst>    destination index location
/// ```
pub struct Convert {
    #[structopt(parse(from_os_str), help = "source corpus location")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "destination index location")]
    pub dst: PathBuf,
    #[structopt(
        long = "from",
        default_value = "line",
        help = "source basket shape (line, entity or infobox)"
    )]
    pub from: SourceKind,
    #[structopt(
        long = "entity",
        default_value = "wikidata",
        help = "entity prefix for --from entity"
    )]
    pub entity: String,
    #[structopt(long = "limit", help = "last line index to process")]
    pub limit: Option<usize>,
}

#[derive(Debug, StructOpt)]
/// Stats command and parameters.
pub struct Stats {
    #[structopt(parse(from_os_str), help = "source corpus location")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "destination report folder")]
    pub dst: PathBuf,
    #[structopt(
        long = "from",
        default_value = "line",
        help = "source basket shape (line, entity or infobox)"
    )]
    pub from: SourceKind,
    #[structopt(
        long = "entity",
        default_value = "wikidata",
        help = "entity prefix for --from entity"
    )]
    pub entity: String,
    #[structopt(long = "limit", help = "last line index to process")]
    pub limit: Option<usize>,
}
