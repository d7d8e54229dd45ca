// Copyright 2025 the Hotmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Build-once memoization of [`AreaSet`]s, keyed by [`MapIdentity`].

use std::sync::Arc;

use hashbrown::HashMap;
use parking_lot::{Condvar, Mutex};

use crate::{AreaRecord, AreaSet, MapIdentity, MapLoadError};

/// Turns a map description into polygon records.
///
/// Implementations do their own I/O (resource lookup, file read, or parsing
/// inline text) and may block.
pub trait MapParser: Send + Sync {
    /// Parses the description named by `identity`.
    fn parse(&self, identity: &MapIdentity) -> Result<Vec<AreaRecord>, MapLoadError>;
}

impl<F> MapParser for F
where
    F: Fn(&MapIdentity) -> Result<Vec<AreaRecord>, MapLoadError> + Send + Sync,
{
    fn parse(&self, identity: &MapIdentity) -> Result<Vec<AreaRecord>, MapLoadError> {
        self(identity)
    }
}

/// Hands out the [`AreaSet`] for a map, building it at most once.
pub trait AreaCache: Send + Sync {
    /// Returns the memoized store for `identity`, building it on first use.
    ///
    /// Concurrent first requests for the same identity result in a single
    /// build; every caller observes the same `Arc`. Failures are not
    /// memoized.
    fn get_or_build(&self, identity: &MapIdentity) -> Result<Arc<AreaSet>, MapLoadError>;
}

#[derive(Debug)]
enum Slot {
    Building,
    Built(Arc<AreaSet>),
}

/// An [`AreaCache`] backed by a [`MapParser`].
///
/// Builds for different identities run in parallel; a second caller for an
/// identity that is already building waits for that build instead of
/// starting its own.
pub struct SimpleAreaCache<P> {
    parser: P,
    slots: Mutex<HashMap<MapIdentity, Slot>>,
    ready: Condvar,
}

impl<P> core::fmt::Debug for SimpleAreaCache<P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let slots = self.slots.lock();
        let built = slots
            .values()
            .filter(|slot| matches!(slot, Slot::Built(_)))
            .count();
        f.debug_struct("SimpleAreaCache")
            .field("maps", &slots.len())
            .field("built", &built)
            .finish_non_exhaustive()
    }
}

impl<P: MapParser> SimpleAreaCache<P> {
    /// Creates an empty cache around `parser`.
    pub fn new(parser: P) -> Self {
        Self {
            parser,
            slots: Mutex::new(HashMap::new()),
            ready: Condvar::new(),
        }
    }

    /// The wrapped parser.
    pub fn parser(&self) -> &P {
        &self.parser
    }

    /// Returns `true` if the store for `identity` has been built.
    pub fn is_built(&self, identity: &MapIdentity) -> bool {
        matches!(self.slots.lock().get(identity), Some(Slot::Built(_)))
    }

    /// Forgets the store for `identity`; the next request rebuilds it.
    ///
    /// A build in flight is left alone.
    pub fn invalidate(&self, identity: &MapIdentity) {
        let mut slots = self.slots.lock();
        if matches!(slots.get(identity), Some(Slot::Built(_))) {
            slots.remove(identity);
            tracing::debug!(map = %identity, "invalidated area store");
        }
    }

    /// Forgets every built store. Builds in flight are left alone.
    pub fn clear(&self) {
        self.slots
            .lock()
            .retain(|_, slot| matches!(slot, Slot::Building));
    }

    fn finish(&self, identity: &MapIdentity, result: &Result<Arc<AreaSet>, MapLoadError>) {
        let mut slots = self.slots.lock();
        match result {
            Ok(set) => {
                slots.insert(identity.clone(), Slot::Built(Arc::clone(set)));
            }
            Err(_) => {
                slots.remove(identity);
            }
        }
        drop(slots);
        self.ready.notify_all();
    }
}

/// Clears a `Building` slot if the parser unwinds, so waiters retry instead
/// of sleeping forever.
struct BuildGuard<'a, P: MapParser> {
    cache: &'a SimpleAreaCache<P>,
    identity: &'a MapIdentity,
    armed: bool,
}

impl<P: MapParser> Drop for BuildGuard<'_, P> {
    fn drop(&mut self) {
        if self.armed {
            self.cache.slots.lock().remove(self.identity);
            self.cache.ready.notify_all();
        }
    }
}

impl<P: MapParser> AreaCache for SimpleAreaCache<P> {
    fn get_or_build(&self, identity: &MapIdentity) -> Result<Arc<AreaSet>, MapLoadError> {
        identity.validate()?;

        {
            let mut slots = self.slots.lock();
            loop {
                match slots.get(identity) {
                    Some(Slot::Built(set)) => return Ok(Arc::clone(set)),
                    Some(Slot::Building) => self.ready.wait(&mut slots),
                    None => {
                        slots.insert(identity.clone(), Slot::Building);
                        break;
                    }
                }
            }
        }

        let mut guard = BuildGuard {
            cache: self,
            identity,
            armed: true,
        };
        tracing::debug!(map = %identity, "building area store");
        let result = self
            .parser
            .parse(identity)
            .and_then(AreaSet::from_records)
            .map(Arc::new);
        guard.armed = false;

        match &result {
            Ok(set) => tracing::debug!(map = %identity, areas = set.len(), "area store built"),
            Err(err) => tracing::warn!(map = %identity, %err, "area store build failed"),
        }
        self.finish(identity, &result);
        result
    }
}
