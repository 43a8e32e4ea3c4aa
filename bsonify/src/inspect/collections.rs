use crate::inspect::{Inspect, Kind};
use indexmap::IndexMap;
use std::collections::{BTreeMap, HashMap, VecDeque};
use std::hash::BuildHasher;

impl<T: Inspect> Inspect for [T] {
    fn kind(&self) -> Kind<'_> {
        Kind::Sequence(Box::new(self.iter().map(|v| v as &dyn Inspect)))
    }

    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl<T: Inspect, const N: usize> Inspect for [T; N] {
    fn kind(&self) -> Kind<'_> {
        Kind::Sequence(Box::new(self.iter().map(|v| v as &dyn Inspect)))
    }

    fn is_zero(&self) -> bool {
        self.iter().all(|v| v.is_zero())
    }
}

impl<T: Inspect> Inspect for Vec<T> {
    fn kind(&self) -> Kind<'_> {
        Kind::Sequence(Box::new(self.iter().map(|v| v as &dyn Inspect)))
    }

    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl<T: Inspect> Inspect for VecDeque<T> {
    fn kind(&self) -> Kind<'_> {
        Kind::Sequence(Box::new(self.iter().map(|v| v as &dyn Inspect)))
    }

    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl<K: Inspect, V: Inspect, S: BuildHasher> Inspect for HashMap<K, V, S> {
    fn kind(&self) -> Kind<'_> {
        Kind::Associative(Box::new(
            self.iter().map(|(k, v)| (k as &dyn Inspect, v as &dyn Inspect)),
        ))
    }

    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl<K: Inspect, V: Inspect> Inspect for BTreeMap<K, V> {
    fn kind(&self) -> Kind<'_> {
        Kind::Associative(Box::new(
            self.iter().map(|(k, v)| (k as &dyn Inspect, v as &dyn Inspect)),
        ))
    }

    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl<K: Inspect, V: Inspect, S: BuildHasher> Inspect for IndexMap<K, V, S> {
    fn kind(&self) -> Kind<'_> {
        Kind::Associative(Box::new(
            self.iter().map(|(k, v)| (k as &dyn Inspect, v as &dyn Inspect)),
        ))
    }

    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequences() {
        let values = vec![1, 2, 3];
        match values.kind() {
            Kind::Sequence(elements) => assert_eq!(elements.count(), 3),
            other => panic!("unexpected kind {}", other.name()),
        }
        assert!(Vec::<i32>::new().is_zero());
        assert!(!values.is_zero());
        assert!(VecDeque::<u8>::new().is_zero());
        assert!([0u8; 4].is_zero());
        assert!(![0u8, 1].is_zero());
        assert!(values.as_slice().kind().name() == "sequence");
    }

    #[test]
    fn test_index_map_keeps_insertion_order() {
        let mut map = IndexMap::new();
        map.insert("b".to_string(), 1);
        map.insert("a".to_string(), 2);
        match map.kind() {
            Kind::Associative(entries) => {
                let keys: Vec<_> = entries.map(|(k, _)| k.as_key().unwrap_or_default().to_string()).collect();
                assert_eq!(keys, vec!["b", "a"]);
            }
            other => panic!("unexpected kind {}", other.name()),
        };
    }

    #[test]
    fn test_maps_are_zero_when_empty() {
        assert!(HashMap::<String, i32>::new().is_zero());
        assert!(BTreeMap::<String, i32>::new().is_zero());
        let mut map = BTreeMap::new();
        map.insert(1, 1);
        assert!(!map.is_zero());
    }
}
