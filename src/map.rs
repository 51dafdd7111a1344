pub trait SequentialMap<V> {
    fn new() -> Self;

    /// Set (key, value) on the map.
    ///
    /// If the key is already live, overwrite its value in place and return the old one.
    /// If not, insert the pair after every live key and return None.
    fn insert(&mut self, key: &str, value: V) -> Option<V>;

    /// Lookup (key, value) from the map with the key.
    ///
    /// If success, return the reference of the value.
    /// If fail, return None.
    fn lookup(&self, key: &str) -> Option<&V>;

    /// Remove (key, value) from the map with the key.
    ///
    /// If success, return Some(value) which is inserted before.
    /// If fail, return None.
    fn remove(&mut self, key: &str) -> Option<V>;

    /// Live keys in the order they were first inserted.
    fn ordered_keys(&self) -> Vec<&str>;

    fn len(&self) -> usize;
}
