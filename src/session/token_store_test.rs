use super::*;

// =============================================================
// MemoryTokenStore slot semantics
// =============================================================

#[test]
fn empty_slot_reads_none() {
    let store = MemoryTokenStore::default();
    assert_eq!(store.get(), None);
}

#[test]
fn set_then_get_round_trips() {
    let store = MemoryTokenStore::default();
    store.set("tok");
    assert_eq!(store.get(), Some("tok".to_owned()));
}

#[test]
fn set_overwrites_previous_token() {
    let store = MemoryTokenStore::with_token("old");
    store.set("new");
    assert_eq!(store.get(), Some("new".to_owned()));
}

#[test]
fn remove_clears_the_slot() {
    let store = MemoryTokenStore::with_token("tok");
    store.remove();
    assert_eq!(store.get(), None);
}

#[test]
fn remove_on_empty_slot_is_a_noop() {
    let store = MemoryTokenStore::default();
    store.remove();
    assert_eq!(store.get(), None);
}

#[test]
fn clones_share_the_same_slot() {
    let store = MemoryTokenStore::default();
    let alias = store.clone();
    store.set("tok");
    assert_eq!(alias.get(), Some("tok".to_owned()));
    alias.remove();
    assert_eq!(store.get(), None);
}

// Outside the browser the persistent store behaves as an empty slot.
#[test]
fn browser_store_reads_none_natively() {
    let store = BrowserTokenStore;
    store.set("tok");
    assert_eq!(store.get(), None);
}
