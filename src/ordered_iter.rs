use ::ordered_iter::OrderedMapIterator;
use compare::Compare;

use crate::map;

impl<K, V> OrderedMapIterator for map::IntoIter<K, V> where K: Ord {
    type Key = K;
    type Val = V;
}

impl<'a, K, V> OrderedMapIterator for map::Iter<'a, K, V> where K: Ord {
    type Key = &'a K;
    type Val = &'a V;
}

impl<'a, K, V> OrderedMapIterator for map::IterMut<'a, K, V> where K: Ord {
    type Key = &'a K;
    type Val = &'a mut V;
}

impl<'a, K, V, C> OrderedMapIterator for map::Range<'a, K, V, C>
    where K: Ord, C: Compare<K> {

    type Key = &'a K;
    type Val = &'a V;
}
