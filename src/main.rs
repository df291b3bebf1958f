//! # Attercop
//!
//! 🕷️ Attercop turns token-marked, line-delimited JSON corpora into
//! canonical per-document indexes and derived corpus statistics.
//!
//! This project can be used both as a tool to convert or analyze corpora,
//! or as a lib to integrate loading, saving and normalization into other
//! projects.
//!
//! ## Getting started
//!
//! ```sh
//! attercop 0.3.0
//! token-marked corpus conversion tool.
//!
//! USAGE:
//!     attercop <SUBCOMMAND>
//!
//! FLAGS:
//!     -h, --help       Prints help information
//!     -V, --version    Prints version information
//!
//! SUBCOMMANDS:
//!     convert    Convert a corpus file into a document index
//!     help       Prints this message or the help of the given subcommand(s)
//!     schema     Print the canonical record JSON schema
//!     stats      Compute frequency and containment statistics
//! ```
//!
use structopt::StructOpt;

use attercop::error::Error;
use attercop::normalizers::{EntityNormalizer, InfoboxNormalizer, LineNormalizer, NormalizerKind};
use attercop::pipelines::{Convert, Pipeline};
use attercop::stats::{ContainmentReport, FrequencyReport};
use attercop::types::Record;

#[macro_use]
extern crate log;

mod cli;

fn normalizer(from: cli::SourceKind, entity: &str) -> NormalizerKind {
    match from {
        cli::SourceKind::Line => NormalizerKind::Line(LineNormalizer),
        cli::SourceKind::Entity => NormalizerKind::Entity(EntityNormalizer::new(entity)),
        cli::SourceKind::Infobox => NormalizerKind::Infobox(InfoboxNormalizer),
    }
}

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = cli::Attercop::from_args();
    debug!("cli args\n{:#?}", opt);

    match opt {
        cli::Attercop::Convert(c) => {
            let pipeline = Convert::new(c.src, Some(c.dst), normalizer(c.from, &c.entity), c.limit);
            pipeline.run()?;
        }

        cli::Attercop::Stats(s) => {
            let pipeline = Convert::new(s.src, None, normalizer(s.from, &s.entity), s.limit);
            let index = pipeline.run()?;

            std::fs::create_dir_all(&s.dst)?;
            let frequencies = FrequencyReport::from_index(&index);
            frequencies.save(
                &s.dst.join("tag_counts.txt"),
                &s.dst.join("value_counts.txt"),
            )?;
            info!("frequency tables written to {:?}", s.dst);

            println!("{}", ContainmentReport::from_index(&index));
        }

        cli::Attercop::Schema => {
            println!("{}", Record::get_schema()?);
        }
    };
    Ok(())
}
