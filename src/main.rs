use std::path::PathBuf;

use anyhow::{Context, Result};
use rdf_coder::{Coder, Config, Term, TermId};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let flags = xflags::parse_or_exit! {
        /// Configuration file
        optional -c,--config CONFIG: PathBuf
        /// Term to encode, in N-Triples syntax
        repeated -e,--encode TERM: String
        /// Id to decode, decimal or 0x prefixed hexadecimal
        repeated -d,--decode ID: String
        /// List the registered vocabularies
        optional --vocabularies
    };
    let config = match &flags.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    let coder = Coder::open(&config).context("unable to open the coder")?;

    if flags.vocabularies {
        for vocabulary in coder.registry().vocabularies() {
            println!(
                "{}\t{:#x}..{:#x}\t{} terms\t{}",
                vocabulary.name,
                vocabulary.base,
                vocabulary.end(),
                vocabulary.terms,
                vocabulary.namespace
            );
        }
    }

    if !flags.encode.is_empty() {
        let terms = flags
            .encode
            .iter()
            .map(|text| {
                text.parse::<Term>()
                    .with_context(|| format!("invalid term {text}"))
            })
            .collect::<Result<Vec<_>>>()?;
        let ids = coder.encode_all(&terms).await?;
        for (term, id) in terms.iter().zip(ids) {
            println!("{term}\t{id}");
        }
    }

    if !flags.decode.is_empty() {
        let ids = flags
            .decode
            .iter()
            .map(|text| {
                text.parse::<TermId>()
                    .with_context(|| format!("invalid id {text}"))
            })
            .collect::<Result<Vec<_>>>()?;
        let terms = coder.decode_all(&ids).await?;
        for (id, term) in ids.iter().zip(terms) {
            println!("{id}\t{term}");
        }
    }

    let stats = coder.stats();
    info!(
        vocabulary_terms = stats.vocabulary_terms,
        cached_entries = stats.cached_entries,
        "done"
    );
    Ok(())
}
