//! Fair sorting allocator.
//!
//! Hands out houses from a shuffled "bag" holding an equal number of each house, so every
//! complete bag is exactly balanced while individual draws still look random. A single
//! step of lookahead avoids handing out the same house twice in a row where the bag
//! allows it. Bag, cursor and last house are persisted through a [`KvStore`] and survive
//! restarts.
//!
//! The allocator assumes a single writer per key set. Callers that can draw concurrently
//! must serialize draws themselves (see `SortingService`).

use rand::{seq::SliceRandom, CryptoRng, Rng};
use sea_orm::DbErr;

use crate::{data::kv::KvStore, error::sorting::SortingError, model::house::House};

/// Entries per bag when no size is configured.
pub const DEFAULT_BAG_SIZE: usize = 20;

/// JSON array of house tags.
pub const BAG_KEY: &str = "sorting.bag";
/// Number of bag slots already consumed, as decimal text.
pub const CURSOR_KEY: &str = "sorting.cursor";
/// Tag of the house returned by the most recent draw.
pub const LAST_KEY: &str = "sorting.last";

/// Validates a configured bag size and rounds odd sizes up to the next even number.
///
/// # Returns
/// - `Ok(usize)` - Even bag size, at least 2
/// - `Err(SortingError::InvalidConfiguration)` - Bag size is zero
pub fn normalize_bag_size(bag_size: usize) -> Result<usize, SortingError> {
    if bag_size == 0 {
        return Err(SortingError::InvalidConfiguration(bag_size));
    }

    Ok(bag_size + bag_size % 2)
}

/// Allocator state as persisted after a draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BagState {
    pub bag: Vec<House>,
    /// Slots consumed so far, `0 <= cursor <= bag.len()`.
    pub cursor: usize,
    pub last: Option<House>,
}

impl BagState {
    /// Builds a freshly shuffled bag with `bag_size / 2` of each house and a zero cursor.
    ///
    /// `bag_size` must already be normalized. The shuffle is a uniform Fisher-Yates
    /// shuffle, so the RNG must be cryptographically secure to keep results unpredictable.
    pub fn fresh<R>(bag_size: usize, last: Option<House>, rng: &mut R) -> Self
    where
        R: Rng + CryptoRng + ?Sized,
    {
        let half = bag_size / 2;
        let mut bag: Vec<House> = std::iter::repeat_n(House::Light, half)
            .chain(std::iter::repeat_n(House::Dark, half))
            .collect();
        bag.shuffle(rng);

        Self {
            bag,
            cursor: 0,
            last,
        }
    }

    /// Whether every slot of the bag has been consumed.
    #[cfg(test)]
    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.bag.len()
    }

    fn entries(&self) -> Result<Vec<(&'static str, String)>, SortingError> {
        let bag = serde_json::to_string(&self.bag)
            .map_err(|e| SortingError::StorageUnavailable(DbErr::Json(e.to_string())))?;

        let mut entries = vec![(BAG_KEY, bag), (CURSOR_KEY, self.cursor.to_string())];
        if let Some(last) = self.last {
            entries.push((LAST_KEY, last.as_str().to_string()));
        }

        Ok(entries)
    }
}

/// Why a stored bag cannot be drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Unusable {
    Missing,
    Malformed,
    Exhausted,
}

/// Raw persisted values, interpreted leniently.
///
/// Anything that fails validation is treated as absent and leads to a new bag; it is
/// never reported as an error.
#[derive(Debug, Clone, Default)]
struct StoredState {
    bag: Option<String>,
    cursor: Option<String>,
    last: Option<String>,
}

impl StoredState {
    fn last(&self) -> Option<House> {
        self.last.as_deref().and_then(|raw| raw.trim().parse().ok())
    }

    fn usable(&self) -> Result<(Vec<House>, usize), Unusable> {
        let Some(raw_bag) = self.bag.as_deref() else {
            return Err(Unusable::Missing);
        };

        let bag: Vec<House> = serde_json::from_str(raw_bag).map_err(|_| Unusable::Malformed)?;
        if bag.len() < 2 {
            return Err(Unusable::Malformed);
        }

        let cursor: usize = self
            .cursor
            .as_deref()
            .and_then(|raw| raw.trim().parse().ok())
            .ok_or(Unusable::Malformed)?;
        if cursor >= bag.len() {
            return Err(Unusable::Exhausted);
        }

        Ok((bag, cursor))
    }
}

/// Outcome of advancing the stored state by one draw.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Draw {
    house: House,
    state: BagState,
}

/// Applies one draw to the stored state without touching the store.
fn advance<R>(stored: &StoredState, bag_size: usize, rng: &mut R) -> Draw
where
    R: Rng + CryptoRng + ?Sized,
{
    let last = stored.last();

    let mut state = match stored.usable() {
        Ok((bag, cursor)) => BagState { bag, cursor, last },
        Err(reason) => {
            match reason {
                Unusable::Malformed => {
                    tracing::warn!("Discarding malformed sorting bag state, starting a new bag")
                }
                Unusable::Missing | Unusable::Exhausted => {
                    tracing::debug!("Starting a new sorting bag of {} entries", bag_size)
                }
            }
            BagState::fresh(bag_size, last, rng)
        }
    };

    let candidate = state.bag[state.cursor];
    state.cursor += 1;

    // One step of lookahead only; a second repeat is accepted to keep the bag's
    // composition authoritative.
    let mut house = candidate;
    if last == Some(candidate) && state.cursor < state.bag.len() {
        house = state.bag[state.cursor];
        state.cursor += 1;
    }

    state.last = Some(house);

    Draw { house, state }
}

/// Bag-based fair allocator over an injected key/value store.
pub struct FairAllocator<S> {
    store: S,
    bag_size: usize,
}

impl<S> FairAllocator<S>
where
    S: KvStore,
{
    /// Creates an allocator over `store`.
    ///
    /// # Arguments
    /// - `store` - Key/value store holding the allocator state
    /// - `bag_size` - Entries per freshly shuffled bag, odd sizes are rounded up
    ///
    /// # Returns
    /// - `Ok(FairAllocator)` - Ready allocator; no state is read until the first draw
    /// - `Err(SortingError::InvalidConfiguration)` - Bag size is zero
    pub fn new(store: S, bag_size: usize) -> Result<Self, SortingError> {
        Ok(Self {
            store,
            bag_size: normalize_bag_size(bag_size)?,
        })
    }

    /// Effective (even) bag size.
    #[cfg(test)]
    pub fn bag_size(&self) -> usize {
        self.bag_size
    }

    /// Draws the next house using the thread-local CSPRNG for any new bag.
    ///
    /// Either the bag, cursor and last house are all advanced and a house is returned, or
    /// an error is returned and the store is untouched.
    ///
    /// # Returns
    /// - `Ok(House)` - The drawn house
    /// - `Err(SortingError::StorageUnavailable)` - The store could not be read or written
    pub async fn draw(&self) -> Result<House, SortingError> {
        let stored = self.load().await?;
        let draw = advance(&stored, self.bag_size, &mut rand::rng());
        self.commit(draw).await
    }

    /// Same as [`draw`](Self::draw) with a caller-provided RNG for new bags.
    #[cfg(test)]
    pub async fn draw_with<R>(&self, rng: &mut R) -> Result<House, SortingError>
    where
        R: Rng + CryptoRng + Send + ?Sized,
    {
        let stored = self.load().await?;
        let draw = advance(&stored, self.bag_size, rng);
        self.commit(draw).await
    }

    /// Reads the persisted state, `None` when the next draw would start a new bag.
    #[cfg(test)]
    pub async fn state(&self) -> Result<Option<BagState>, SortingError> {
        let stored = self.load().await?;
        let last = stored.last();

        Ok(stored.usable().ok().map(|(bag, cursor)| BagState { bag, cursor, last }))
    }

    async fn load(&self) -> Result<StoredState, SortingError> {
        Ok(StoredState {
            bag: self.store.get_text(BAG_KEY).await?,
            cursor: self.store.get_text(CURSOR_KEY).await?,
            last: self.store.get_text(LAST_KEY).await?,
        })
    }

    async fn commit(&self, draw: Draw) -> Result<House, SortingError> {
        let entries = draw.state.entries()?;
        self.store.set_texts(&entries).await?;

        tracing::debug!(
            "Drew {} at slot {}/{}",
            draw.house,
            draw.state.cursor,
            draw.state.bag.len()
        );

        Ok(draw.house)
    }
}
