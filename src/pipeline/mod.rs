/*! Pipeline stage drivers.

Two thin, stateless stages: [load] shapes a stream of raw elements into the
store, [clean] runs document-level cleaners over stored documents and
applies their patches. All persistence goes through the [Store] trait; the
corruption protocol (flag, raw-value record, field removal) is executed
here, never inside the normalizers.
!*/
use log::{info, warn};

use crate::error::Error;
use crate::normalizers::{Clean, Patch};
use crate::shaping::ElementShaper;
use crate::store::{Store, UpdateOp};
use crate::types::RawElement;

/// Counters for one shaping run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LoadStats {
    /// Elements pulled from the source.
    pub read: usize,
    /// Documents shaped and inserted.
    pub shaped: usize,
    /// Elements with nothing to shape (relations, bounds, …).
    pub skipped: usize,
}

/// Counters for one cleaning run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CleanStats {
    /// Documents rewritten with normalized values.
    pub updated: usize,
    /// Documents flagged corrupt for manual review.
    pub flagged: usize,
}

/// Shapes every element of `source` into `store`.
///
/// Elements are processed one at a time and released; the store sees
/// documents in source order.
pub fn load<I, S>(source: I, shaper: &ElementShaper, store: &mut S) -> Result<LoadStats, Error>
where
    I: IntoIterator<Item = Result<RawElement, Error>>,
    S: Store,
{
    let mut stats = LoadStats::default();

    for element in source {
        let element = element?;
        stats.read += 1;
        match shaper.shape(&element) {
            Some(document) => {
                store.insert(vec![document])?;
                stats.shaped += 1;
            }
            None => stats.skipped += 1,
        }
    }

    info!(
        "loaded {} documents ({} of {} elements had nothing to shape)",
        stats.shaped, stats.skipped, stats.read
    );
    Ok(stats)
}

/// Runs each cleaner over the documents carrying its field and applies the
/// resulting patches.
pub fn clean<S: Store>(store: &mut S, cleaners: &[&dyn Clean]) -> Result<CleanStats, Error> {
    let mut stats = CleanStats::default();

    for cleaner in cleaners {
        for (id, document) in store.find_with(cleaner.field())? {
            match cleaner.clean(&document) {
                Some(Patch::SetPhone(numbers)) => {
                    store.update(id, UpdateOp::SetPhone(numbers))?;
                    stats.updated += 1;
                }
                Some(Patch::SetAddress(address)) => {
                    store.update(id, UpdateOp::SetAddress(address))?;
                    stats.updated += 1;
                }
                Some(Patch::Corrupt { field, raw }) => {
                    warn!("no usable value in {}, removing it for manual review", field.path());
                    store.update(id, UpdateOp::SetCorruptFlag)?;
                    store.update(id, UpdateOp::SetCorruptFields(raw))?;
                    store.unset(id, field)?;
                    stats.flagged += 1;
                }
                None => (),
            }
        }
    }

    info!(
        "cleaning pass done: {} documents updated, {} flagged for review",
        stats.updated, stats.flagged
    );
    Ok(stats)
}
