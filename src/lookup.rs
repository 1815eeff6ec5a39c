use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

/// Keyed containers that can answer "is this key present". Used by
/// [`crate::Tester::contains_key`]; the borrowed-key bounds mirror the std
/// `contains_key` signatures so string maps accept `&str` keys.
pub trait KeyLookup<Q: ?Sized> {
    fn has_key(&self, key: &Q) -> bool;
}

impl<K, V, Q, S> KeyLookup<Q> for HashMap<K, V, S>
where
    K: Eq + Hash + Borrow<Q>,
    Q: Eq + Hash + ?Sized,
    S: std::hash::BuildHasher,
{
    fn has_key(&self, key: &Q) -> bool {
        self.contains_key(key)
    }
}

impl<K, V, Q> KeyLookup<Q> for BTreeMap<K, V>
where
    K: Ord + Borrow<Q>,
    Q: Ord + ?Sized,
{
    fn has_key(&self, key: &Q) -> bool {
        self.contains_key(key)
    }
}
