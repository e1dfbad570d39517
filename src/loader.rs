//! Full-catalog loading over sequential pagination

use crate::error::{LoadError, Result};
use crate::source::PageSource;
use crate::types::{Catalog, Character};
use futures::{stream, Stream, TryStreamExt};
use std::collections::HashSet;
use tracing::{debug, error, info, warn};

/// Lazily yield the results of each remote page, one request at a time.
///
/// Page 1 is always requested; its `info.pages` bounds the rest. The stream
/// ends once the next page number exceeds the last reported page count, and
/// stops at the first error.
pub fn catalog_pages<'a, S>(source: &'a S) -> impl Stream<Item = Result<Vec<Character>>> + 'a
where
    S: PageSource + ?Sized,
{
    stream::try_unfold((1u32, None::<u32>), move |(page, total_pages)| async move {
        if matches!(total_pages, Some(total) if page > total) {
            return Ok::<_, LoadError>(None);
        }
        let response = source.fetch_page(page).await?;
        let total = response.info.pages;
        debug!(page, total_pages = total, count = response.results.len(), "Page loaded");
        Ok(Some((response.results, (page + 1, Some(total)))))
    })
}

/// Fetch every page and concatenate the results in page order.
///
/// Any failed page aborts the load; nothing partial is returned.
pub async fn load_full_catalog<S>(source: &S) -> Result<Catalog>
where
    S: PageSource + ?Sized,
{
    info!("Loading character catalog");
    let mut pages = std::pin::pin!(catalog_pages(source));
    let mut characters: Vec<Character> = Vec::new();
    let mut page_count = 0u32;

    loop {
        match pages.try_next().await {
            Ok(Some(results)) => {
                page_count += 1;
                characters.extend(results);
            }
            Ok(None) => break,
            Err(e) => {
                error!(error = %e, page = e.page(), "Catalog load failed");
                return Err(e);
            }
        }
    }

    let mut seen = HashSet::with_capacity(characters.len());
    for c in &characters {
        if !seen.insert(c.id) {
            warn!(id = c.id, "Duplicate character id across pages");
        }
    }

    info!(pages = page_count, count = characters.len(), "Character catalog loaded");
    Ok(Catalog::new(characters))
}
