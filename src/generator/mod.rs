//! Output generators.
//!
//! Produces the two files of a run from the extracted records:
//!
//! - **Feed**: RSS 2.0 channel (`../feed` by default)
//! - **Index**: HTML list of every document (`index.html`)
//!
//! Records are extracted once, before anything is written, and both
//! generators render from the same list so they always agree on order.

pub mod feed;
pub mod index;

use crate::{config::SiteConfig, debug, page::load_records};
use anyhow::Result;

/// Run one generation: extract every document, then write feed and index.
///
/// A document that cannot be extracted aborts the run before either output
/// is touched. The writes themselves are not atomic.
pub fn build_all(config: &SiteConfig) -> Result<()> {
    let records = load_records(config)?;
    debug!("build"; "{} records from {}", records.len(), config.get_root().display());

    feed::build_feed(&records, config)?;
    index::build_index(&records, config)?;
    Ok(())
}
