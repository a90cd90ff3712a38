use crate::cache::{CacheLookup, ChannelCache};
use crate::models::ChannelRecord;
use crate::router::Route;
use yew::prelude::*;
use yew_router::prelude::*;

/// Validates the cached channel on entry to a channel-scoped page.
/// A stale or absent cache is cleared and the user is sent back to the
/// lookup page; no partial record is ever rendered.
#[hook]
pub fn use_cached_channel() -> Option<ChannelRecord> {
    let navigator = use_navigator();
    let channel = use_state(|| None::<ChannelRecord>);

    {
        let channel = channel.clone();
        use_effect_with((), move |_| {
            let cache = ChannelCache::browser();
            let lookup = cache
                .stored_id()
                .map(|id| cache.load(&id))
                .unwrap_or(CacheLookup::Absent);
            match lookup {
                CacheLookup::Fresh(record) => channel.set(Some(record)),
                CacheLookup::Stale | CacheLookup::Absent => {
                    cache.clear();
                    if let Some(navigator) = navigator {
                        navigator.push(&Route::Landing);
                    }
                }
            }
            || ()
        });
    }

    (*channel).clone()
}
