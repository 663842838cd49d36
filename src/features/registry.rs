// Resolution registry
// The only shared mutable state of the pipeline: URL -> pending lookup

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use crate::models::conversation::ConversationId;
use crate::models::lookup::{PendingLookup, Strategy};

/// In-flight lookups keyed by normalized URL
///
/// Keys are compared exactly; at most one lookup exists per key.
#[derive(Debug, Default)]
pub struct ResolutionRegistry {
    pending: DashMap<String, PendingLookup>,
}

impl ResolutionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a lookup unless one is already pending for `url`
    ///
    /// Check and insert happen under the same shard lock.
    pub fn try_insert(&self, url: &str, conversation: ConversationId, strategy: Strategy) -> bool {
        match self.pending.entry(url.to_string()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(PendingLookup::new(url, conversation, strategy));
                true
            }
        }
    }

    /// Remove and return the lookup for a completed URL
    pub fn take(&self, url: &str) -> Option<PendingLookup> {
        self.pending.remove(url).map(|(_, lookup)| lookup)
    }

    pub fn contains(&self, url: &str) -> bool {
        self.pending.contains_key(url)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
