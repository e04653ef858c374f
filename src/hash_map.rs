use core::borrow::Borrow;
use core::cmp::Ordering;
use core::fmt::Debug;
use core::fmt::Display;
use core::hash::BuildHasher;
use core::hash::Hash;
use core::iter::FusedIterator;
use core::ops::BitOr;
use core::ops::BitOrAssign;
use core::ops::Index;

use crate::DefaultHashBuilder;
use crate::error::Error;
use crate::hash_table::Entry as TableEntry;
use crate::hash_table::HashTable;

/// A hash map implemented on top of the linear-probing [`HashTable`].
///
/// `HashMap<K, V, S>` stores key-value pairs where keys implement `Hash + Eq`
/// and uses a configurable hasher builder `S` to hash keys. Each key's home
/// slot is its hash modulo the slot count; collisions walk forward one slot at
/// a time.
///
/// Iteration order is the physical slot order, which changes whenever the
/// table resizes.
///
/// # Examples
///
/// ```rust
/// use lp_hash::HashMap;
///
/// let mut map = HashMap::new();
/// map.insert("this", 1);
/// map.insert("that", 2);
///
/// assert_eq!(map.get(&"this"), Some(&1));
/// assert_eq!(map.get(&"other"), None);
/// assert_eq!(map.len(), 2);
/// ```
#[derive(Clone)]
pub struct HashMap<K, V, S = DefaultHashBuilder> {
    table: HashTable<(K, V)>,
    hash_builder: S,
}

impl<K, V, S> Debug for HashMap<K, V, S>
where
    K: Debug,
    V: Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Renders as `{k: v, k: v}` using the `Debug` form of keys and values.
///
/// # Examples
///
/// ```rust
/// use lp_hash::HashMap;
///
/// let map = HashMap::from([("this", 512)]);
/// assert_eq!(map.to_string(), r#"{"this": 512}"#);
/// ```
impl<K, V, S> Display for HashMap<K, V, S>
where
    K: Debug,
    V: Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("{")?;
        for (i, (k, v)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{k:?}: {v:?}")?;
        }
        f.write_str("}")
    }
}

impl<K, V, S> HashMap<K, V, S> {
    /// Returns the number of elements in the map.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns `true` if the map contains no elements.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Returns the number of slots in the underlying table.
    ///
    /// The table resizes once live entries plus tombstones reach 3/4 of this.
    pub fn capacity(&self) -> usize {
        self.table.capacity()
    }

    /// Removes all elements from the map, keeping its slot count.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lp_hash::HashMap;
    ///
    /// let mut map = HashMap::new();
    /// map.insert(1, "a");
    /// map.clear();
    /// assert!(map.is_empty());
    /// ```
    pub fn clear(&mut self) {
        self.table.clear();
    }

    /// Returns a reference to the map's hasher builder.
    pub fn hasher(&self) -> &S {
        &self.hash_builder
    }

    /// Returns an iterator over the key-value pairs of the map.
    ///
    /// The iterator yields `(&K, &V)` pairs in slot order. While it is alive
    /// the map cannot be modified, so collecting it gives an independent
    /// snapshot.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lp_hash::HashMap;
    ///
    /// let mut map = HashMap::new();
    /// map.insert(1, "a");
    /// map.insert(2, "b");
    ///
    /// let mut pairs: Vec<_> = map.iter().collect();
    /// pairs.sort();
    /// assert_eq!(pairs, vec![(&1, &"a"), (&2, &"b")]);
    /// ```
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            inner: self.table.iter(),
        }
    }

    /// Returns an iterator over the keys of the map.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys { inner: self.iter() }
    }

    /// Returns an iterator over the values of the map.
    pub fn values(&self) -> Values<'_, K, V> {
        Values { inner: self.iter() }
    }

    /// Returns an iterator that removes and yields all key-value pairs from the
    /// map.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lp_hash::HashMap;
    ///
    /// let mut map = HashMap::new();
    /// map.insert(1, "a");
    /// map.insert(2, "b");
    ///
    /// let pairs: Vec<_> = map.drain().collect();
    /// assert!(map.is_empty());
    /// assert_eq!(pairs.len(), 2);
    /// ```
    pub fn drain(&mut self) -> Drain<'_, K, V> {
        Drain {
            inner: self.table.drain(),
        }
    }

    /// Returns slot-level statistics of the underlying table.
    #[cfg(any(test, feature = "stats"))]
    pub fn debug_stats(&self) -> crate::hash_table::DebugStats {
        self.table.debug_stats()
    }

    /// Pretty-prints the underlying table's probe-length histogram.
    #[cfg(all(any(test, feature = "stats"), feature = "std"))]
    pub fn print_probe_histogram(&self) {
        self.table.print_probe_histogram();
    }
}

impl<K, V, S> HashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    /// Creates a new hash map with the given hasher builder.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use core::hash::BuildHasherDefault;
    /// # use siphasher::sip::SipHasher;
    /// #
    /// # use lp_hash::HashMap;
    /// #
    /// let map: HashMap<i32, String, _> =
    ///     HashMap::with_hasher(BuildHasherDefault::<SipHasher>::default());
    /// assert!(map.is_empty());
    /// assert_eq!(map.capacity(), 2);
    /// ```
    pub fn with_hasher(hash_builder: S) -> Self {
        Self::with_capacity_and_hasher(0, hash_builder)
    }

    /// Creates a new hash map sized for `capacity` entries, with the given
    /// hasher builder.
    ///
    /// The slot count is `round(8/3 * capacity)`, at least two.
    pub fn with_capacity_and_hasher(capacity: usize, hash_builder: S) -> Self {
        Self {
            table: HashTable::with_capacity(capacity),
            hash_builder,
        }
    }

    /// Builds a map from `seed` pairs followed by `overrides`, sized for the
    /// number of distinct keys among them.
    ///
    /// Later pairs win, so an override replaces a seed value for the same key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lp_hash::DefaultHashBuilder;
    /// use lp_hash::HashMap;
    ///
    /// let map = HashMap::from_seed_with_hasher(
    ///     [("this", 1), ("that", 2)],
    ///     [("that", 20)],
    ///     DefaultHashBuilder::default(),
    /// );
    /// assert_eq!(map.get(&"that"), Some(&20));
    /// assert_eq!(map.len(), 2);
    /// ```
    pub fn from_seed_with_hasher(
        seed: impl IntoIterator<Item = (K, V)>,
        overrides: impl IntoIterator<Item = (K, V)>,
        hash_builder: S,
    ) -> Self {
        let pairs: alloc::vec::Vec<(K, V)> = seed.into_iter().chain(overrides).collect();
        let mut map = Self::with_capacity_and_hasher(pairs.len(), hash_builder);
        map.update(pairs);
        map.table.shrink_to_seeded();
        map
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the map did not have this key present, `None` is returned.
    /// If the map did have this key present, the value is updated in place,
    /// the stored key is kept, and the old value is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lp_hash::HashMap;
    ///
    /// let mut map = HashMap::new();
    /// assert_eq!(map.insert(37, "a"), None);
    /// assert_eq!(map.insert(37, "b"), Some("a"));
    /// assert_eq!(map.get(&37), Some(&"b"));
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let hash = self.hash_builder.hash_one(&key);
        match self.table.entry(hash, |(k, _)| k == &key) {
            TableEntry::Occupied(mut entry) => {
                let old_value = core::mem::replace(&mut entry.get_mut().1, value);
                Some(old_value)
            }
            TableEntry::Vacant(entry) => {
                entry.insert((key, value));
                None
            }
        }
    }

    /// Inserts every pair from `pairs`, later pairs overwriting earlier ones.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lp_hash::HashMap;
    ///
    /// let mut map = HashMap::from([("this", 1)]);
    /// map.update([("that", 2), ("this", 3)]);
    /// assert_eq!(map.get(&"this"), Some(&3));
    /// assert_eq!(map.len(), 2);
    /// ```
    pub fn update(&mut self, pairs: impl IntoIterator<Item = (K, V)>) {
        for (key, value) in pairs {
            self.insert(key, value);
        }
    }

    /// Returns a reference to the value corresponding to the key.
    ///
    /// `None` means the key is absent, which is distinct from a present key
    /// whose value happens to equal some default.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lp_hash::HashMap;
    ///
    /// let mut map = HashMap::new();
    /// map.insert(1, None::<&str>);
    /// assert_eq!(map.get(&1), Some(&None));
    /// assert_eq!(map.get(&2), None);
    /// ```
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let hash = self.hash_builder.hash_one(key);
        self.table
            .find(hash, |(k, _)| k.borrow() == key)
            .map(|(_, v)| v)
    }

    /// Returns the value for `key`, or `default` if the key is absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lp_hash::HashMap;
    ///
    /// let map = HashMap::from([("this", 1)]);
    /// assert_eq!(map.get_or(&"this", &0), &1);
    /// assert_eq!(map.get_or(&"key", &0), &0);
    /// ```
    pub fn get_or<'a, Q>(&'a self, key: &Q, default: &'a V) -> &'a V
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get(key).unwrap_or(default)
    }

    /// Returns the value for `key`, or [`Error::KeyNotFound`].
    pub fn try_get<Q>(&self, key: &Q) -> Result<&V, Error>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get(key).ok_or(Error::KeyNotFound)
    }

    /// Returns the stored key and value corresponding to the key.
    pub fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let hash = self.hash_builder.hash_one(key);
        self.table
            .find(hash, |(k, _)| k.borrow() == key)
            .map(|(k, v)| (k, v))
    }

    /// Returns a mutable reference to the value corresponding to the key.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let hash = self.hash_builder.hash_one(key);
        self.table
            .find_mut(hash, |(k, _)| k.borrow() == key)
            .map(|(_, v)| v)
    }

    /// Returns `true` if the map contains a value for the specified key.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get(key).is_some()
    }

    /// Removes a key from the map, returning the value at the key if the key
    /// was previously in the map.
    ///
    /// The slot is left as a tombstone; the map never shrinks.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lp_hash::HashMap;
    ///
    /// let mut map = HashMap::new();
    /// map.insert(1, "a");
    /// assert_eq!(map.remove(&1), Some("a"));
    /// assert_eq!(map.remove(&1), None);
    /// ```
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.remove_entry(key).map(|(_, v)| v)
    }

    /// Removes a key from the map, returning the stored key and value if the
    /// key was previously in the map.
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let hash = self.hash_builder.hash_one(key);
        self.table.remove(hash, |(k, _)| k.borrow() == key)
    }

    /// Removes `key` and returns its value.
    ///
    /// An absent key yields `default` when one is given and
    /// [`Error::KeyNotFound`] otherwise.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lp_hash::Error;
    /// use lp_hash::HashMap;
    ///
    /// let mut map = HashMap::from([("this", 1)]);
    /// assert_eq!(map.pop(&"this", None), Ok(1));
    /// assert_eq!(map.pop(&"this", Some(7)), Ok(7));
    /// assert_eq!(map.pop(&"this", None), Err(Error::KeyNotFound));
    /// ```
    pub fn pop<Q>(&mut self, key: &Q, default: Option<V>) -> Result<V, Error>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        match self.remove(key) {
            Some(value) => Ok(value),
            None => default.ok_or(Error::KeyNotFound),
        }
    }

    /// Returns the value for `key`, first inserting `default` if the key is
    /// absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lp_hash::HashMap;
    ///
    /// let mut map = HashMap::new();
    /// assert_eq!(*map.get_or_insert("key", 1), 1);
    /// assert_eq!(*map.get_or_insert("key", 2), 1);
    /// ```
    pub fn get_or_insert(&mut self, key: K, default: V) -> &mut V {
        self.entry(key).or_insert(default)
    }

    /// Gets the given key's corresponding entry in the map for in-place
    /// manipulation.
    ///
    /// Like [`insert`](Self::insert), this runs the load check and may resize
    /// the table even if the entry turns out to be occupied.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lp_hash::HashMap;
    ///
    /// let mut map = HashMap::new();
    ///
    /// map.entry(1).or_insert("a");
    /// map.entry(2).or_insert("b");
    ///
    /// assert_eq!(map.get(&1), Some(&"a"));
    /// assert_eq!(map.get(&2), Some(&"b"));
    /// ```
    pub fn entry(&mut self, key: K) -> Entry<'_, K, V> {
        let hash = self.hash_builder.hash_one(&key);
        match self.table.entry(hash, |(k, _)| k == &key) {
            TableEntry::Occupied(entry) => Entry::Occupied(OccupiedEntry { entry }),
            TableEntry::Vacant(entry) => Entry::Vacant(VacantEntry { entry, key }),
        }
    }

    /// Returns `true` if every pair of `self` is also a pair of `other`.
    pub fn is_subset<S2>(&self, other: &HashMap<K, V, S2>) -> bool
    where
        V: PartialEq,
        S2: BuildHasher,
    {
        self.len() <= other.len() && self.iter().all(|(k, v)| other.get(k) == Some(v))
    }
}

impl<K, V> HashMap<K, V, DefaultHashBuilder>
where
    K: Hash + Eq,
{
    /// Creates a new hash map using the default hasher builder.
    ///
    /// An empty map starts with two slots.
    pub fn new() -> Self {
        Self::with_hasher(DefaultHashBuilder::default())
    }

    /// Creates a new hash map sized for `capacity` entries, using the default
    /// hasher builder.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lp_hash::HashMap;
    ///
    /// let map: HashMap<i32, String> = HashMap::with_capacity(3);
    /// assert_eq!(map.capacity(), 8);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, DefaultHashBuilder::default())
    }

    /// Builds a map from `seed` pairs with `overrides` applied on top.
    ///
    /// See [`from_seed_with_hasher`](Self::from_seed_with_hasher).
    pub fn from_seed(
        seed: impl IntoIterator<Item = (K, V)>,
        overrides: impl IntoIterator<Item = (K, V)>,
    ) -> Self {
        Self::from_seed_with_hasher(seed, overrides, DefaultHashBuilder::default())
    }

    /// Creates a map with every key in `keys` mapped to a clone of `value`.
    ///
    /// The map is not presized; it starts empty and grows as the keys arrive.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lp_hash::HashMap;
    ///
    /// let map: HashMap<_, _> = HashMap::from_keys(["a", "b", "a"], 0);
    /// assert_eq!(map.len(), 2);
    /// assert_eq!(map.get(&"b"), Some(&0));
    /// ```
    pub fn from_keys(keys: impl IntoIterator<Item = K>, value: V) -> Self
    where
        V: Clone,
    {
        let mut map = Self::new();
        for key in keys {
            map.insert(key, value.clone());
        }
        map
    }
}

impl<K, V, S> Default for HashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher + Default,
{
    fn default() -> Self {
        Self::with_hasher(S::default())
    }
}

impl<K, V, S, S2> PartialEq<HashMap<K, V, S2>> for HashMap<K, V, S>
where
    K: Hash + Eq,
    V: PartialEq,
    S: BuildHasher,
    S2: BuildHasher,
{
    fn eq(&self, other: &HashMap<K, V, S2>) -> bool {
        self.len() == other.len() && self.is_subset(other)
    }
}

impl<K, V, S> Eq for HashMap<K, V, S>
where
    K: Hash + Eq,
    V: Eq,
    S: BuildHasher,
{
}

#[cfg(feature = "std")]
impl<K, V, S, S2> PartialEq<std::collections::HashMap<K, V, S2>> for HashMap<K, V, S>
where
    K: Hash + Eq,
    V: PartialEq,
    S: BuildHasher,
    S2: BuildHasher,
{
    fn eq(&self, other: &std::collections::HashMap<K, V, S2>) -> bool {
        self.len() == other.len() && self.iter().all(|(k, v)| other.get(k) == Some(v))
    }
}

#[cfg(feature = "std")]
impl<K, V, S, S2> PartialEq<HashMap<K, V, S>> for std::collections::HashMap<K, V, S2>
where
    K: Hash + Eq,
    V: PartialEq,
    S: BuildHasher,
    S2: BuildHasher,
{
    fn eq(&self, other: &HashMap<K, V, S>) -> bool {
        other == self
    }
}

/// Orders maps by inclusion of their `(key, value)` pair sets.
///
/// `a < b` when `a` is a proper subset of `b`; maps neither equal nor nested
/// are incomparable.
///
/// # Examples
///
/// ```rust
/// use lp_hash::HashMap;
///
/// let small = HashMap::from([(1, "a")]);
/// let large = HashMap::from([(1, "a"), (2, "b")]);
/// let other = HashMap::from([(3, "c")]);
///
/// assert!(small < large);
/// assert!(large > small);
/// assert_eq!(small.partial_cmp(&other), None);
/// ```
impl<K, V, S, S2> PartialOrd<HashMap<K, V, S2>> for HashMap<K, V, S>
where
    K: Hash + Eq,
    V: PartialEq,
    S: BuildHasher,
    S2: BuildHasher,
{
    fn partial_cmp(&self, other: &HashMap<K, V, S2>) -> Option<Ordering> {
        match self.len().cmp(&other.len()) {
            Ordering::Equal => self.is_subset(other).then_some(Ordering::Equal),
            Ordering::Less => self.is_subset(other).then_some(Ordering::Less),
            Ordering::Greater => other.is_subset(self).then_some(Ordering::Greater),
        }
    }
}

impl<K, V, S, Q> Index<&Q> for HashMap<K, V, S>
where
    K: Hash + Eq + Borrow<Q>,
    Q: Hash + Eq + ?Sized,
    S: BuildHasher,
{
    type Output = V;

    /// # Panics
    ///
    /// Panics if the key is not present in the map.
    fn index(&self, key: &Q) -> &V {
        match self.get(key) {
            Some(value) => value,
            None => panic!("{}", Error::KeyNotFound),
        }
    }
}

/// `&a | &b` is a copy of `a` updated with the pairs of `b`.
///
/// # Examples
///
/// ```rust
/// use lp_hash::HashMap;
///
/// let a = HashMap::from([(1, "a"), (2, "b")]);
/// let b = HashMap::from([(2, "B"), (3, "C")]);
///
/// let union = &a | &b;
/// assert_eq!(union, HashMap::from([(1, "a"), (2, "B"), (3, "C")]));
/// ```
impl<K, V, S, S2> BitOr<&HashMap<K, V, S2>> for &HashMap<K, V, S>
where
    K: Hash + Eq + Clone,
    V: Clone,
    S: BuildHasher + Clone,
{
    type Output = HashMap<K, V, S>;

    fn bitor(self, other: &HashMap<K, V, S2>) -> HashMap<K, V, S> {
        let mut union = self.clone();
        union |= other;
        union
    }
}

impl<K, V, S, S2> BitOrAssign<&HashMap<K, V, S2>> for HashMap<K, V, S>
where
    K: Hash + Eq + Clone,
    V: Clone,
    S: BuildHasher,
{
    fn bitor_assign(&mut self, other: &HashMap<K, V, S2>) {
        self.update(other.iter().map(|(k, v)| (k.clone(), v.clone())));
    }
}

impl<K, V, S, S2> BitOrAssign<HashMap<K, V, S2>> for HashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    fn bitor_assign(&mut self, other: HashMap<K, V, S2>) {
        self.update(other);
    }
}

impl<K, V, S> Extend<(K, V)> for HashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        self.update(iter);
    }
}

impl<K, V, S> FromIterator<(K, V)> for HashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher + Default,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self::from_seed_with_hasher(iter, core::iter::empty(), S::default())
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for HashMap<K, V, DefaultHashBuilder>
where
    K: Hash + Eq,
{
    fn from(pairs: [(K, V); N]) -> Self {
        Self::from_seed(pairs, core::iter::empty())
    }
}

impl<K, V, S> IntoIterator for HashMap<K, V, S> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.table.into_iter(),
        }
    }
}

impl<'a, K, V, S> IntoIterator for &'a HashMap<K, V, S> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A view into a single entry in the map, which may either be vacant or
/// occupied.
///
/// This enum is constructed from the [`entry`] method on [`HashMap`].
///
/// [`entry`]: HashMap::entry
pub enum Entry<'a, K, V> {
    /// A vacant entry.
    Vacant(VacantEntry<'a, K, V>),
    /// An occupied entry.
    Occupied(OccupiedEntry<'a, K, V>),
}

impl<'a, K, V> Entry<'a, K, V> {
    /// Inserts a default value if the entry is vacant and returns a mutable
    /// reference.
    pub fn or_insert(self, default: V) -> &'a mut V {
        match self {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(default),
        }
    }

    /// Inserts a value computed from a closure if the entry is vacant and
    /// returns a mutable reference.
    pub fn or_insert_with<F>(self, default: F) -> &'a mut V
    where
        F: FnOnce() -> V,
    {
        match self {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(default()),
        }
    }

    /// Provides in-place mutable access to an occupied entry before any
    /// potential inserts.
    pub fn and_modify<F>(self, f: F) -> Self
    where
        F: FnOnce(&mut V),
    {
        match self {
            Entry::Occupied(mut entry) => {
                f(entry.get_mut());
                Entry::Occupied(entry)
            }
            Entry::Vacant(entry) => Entry::Vacant(entry),
        }
    }

    /// Returns a reference to this entry's key.
    pub fn key(&self) -> &K {
        match self {
            Entry::Occupied(entry) => entry.key(),
            Entry::Vacant(entry) => entry.key(),
        }
    }
}

impl<'a, K, V> Entry<'a, K, V>
where
    V: Default,
{
    /// Inserts the default value if the entry is vacant and returns a mutable
    /// reference.
    pub fn or_default(self) -> &'a mut V {
        self.or_insert_with(Default::default)
    }
}

/// A view into a vacant entry in the map.
pub struct VacantEntry<'a, K, V> {
    entry: crate::hash_table::VacantEntry<'a, (K, V)>,
    key: K,
}

impl<'a, K, V> VacantEntry<'a, K, V> {
    /// Gets a reference to the key that would be used when inserting a value.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Take ownership of the key.
    pub fn into_key(self) -> K {
        self.key
    }

    /// Inserts the value into the map and returns a mutable reference to it.
    pub fn insert(self, value: V) -> &'a mut V {
        &mut self.entry.insert((self.key, value)).1
    }
}

/// A view into an occupied entry in the map.
pub struct OccupiedEntry<'a, K, V> {
    entry: crate::hash_table::OccupiedEntry<'a, (K, V)>,
}

impl<'a, K, V> OccupiedEntry<'a, K, V> {
    /// Gets a reference to the key in the entry.
    pub fn key(&self) -> &K {
        &self.entry.get().0
    }

    /// Gets a reference to the value in the entry.
    pub fn get(&self) -> &V {
        &self.entry.get().1
    }

    /// Gets a mutable reference to the value in the entry.
    pub fn get_mut(&mut self) -> &mut V {
        &mut self.entry.get_mut().1
    }

    /// Converts the entry into a mutable reference to the value.
    pub fn into_mut(self) -> &'a mut V {
        &mut self.entry.into_mut().1
    }

    /// Inserts a value into the entry and returns the old value.
    pub fn insert(&mut self, value: V) -> V {
        core::mem::replace(&mut self.entry.get_mut().1, value)
    }

    /// Removes the entry from the map and returns the value.
    pub fn remove(self) -> V {
        self.entry.remove().1
    }

    /// Removes the entry from the map and returns the key and value.
    pub fn remove_entry(self) -> (K, V) {
        self.entry.remove()
    }
}

/// An iterator over the key-value pairs of a `HashMap`.
pub struct Iter<'a, K, V> {
    inner: crate::hash_table::Iter<'a, (K, V)>,
}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (k, v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

/// An iterator over the keys of a `HashMap`.
pub struct Keys<'a, K, V> {
    inner: Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Keys<'_, K, V> {}

impl<K, V> FusedIterator for Keys<'_, K, V> {}

/// An iterator over the values of a `HashMap`.
pub struct Values<'a, K, V> {
    inner: Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Values<'_, K, V> {}

impl<K, V> FusedIterator for Values<'_, K, V> {}

/// A draining iterator over the key-value pairs of a `HashMap`.
pub struct Drain<'a, K, V> {
    inner: crate::hash_table::Drain<'a, (K, V)>,
}

impl<K, V> Iterator for Drain<'_, K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> FusedIterator for Drain<'_, K, V> {}

/// An owning iterator over the key-value pairs of a `HashMap`.
pub struct IntoIter<K, V> {
    inner: crate::hash_table::IntoIter<(K, V)>,
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}

impl<K, V> FusedIterator for IntoIter<K, V> {}
