use alloc::vec::Vec;
use core::fmt::Debug;
use core::iter::FusedIterator;
use core::marker::PhantomData;

use crate::error::Error;

/// Smallest slot array a table ever allocates.
const MIN_CAPACITY: usize = 2;

/// Number of slots allocated for a table seeded with `len` entries.
///
/// This is `round(8/3 * len)`, which leaves the seed at a load of about 3/8.
/// `8 * len / 3` never has a fractional part of exactly one half, so rounding
/// reduces to adding one before the integer division.
#[inline(always)]
fn capacity_for(len: usize) -> usize {
    if len == 0 {
        return MIN_CAPACITY;
    }

    let scaled = len
        .checked_mul(8)
        .and_then(|v| v.checked_add(1))
        .expect("capacity overflow");
    (scaled / 3).max(MIN_CAPACITY)
}

/// True once `used / capacity` has reached 3/4.
#[inline(always)]
fn at_load_limit(used: usize, capacity: usize) -> bool {
    used as u128 * 4 >= capacity as u128 * 3
}

#[inline(always)]
fn home_index(hash: u64, capacity: usize) -> usize {
    (hash % capacity as u64) as usize
}

fn empty_slots<V>(capacity: usize) -> Vec<Slot<V>> {
    let mut slots = Vec::with_capacity(capacity);
    slots.resize_with(capacity, || Slot::Empty);
    slots
}

#[cold]
#[inline(never)]
fn invariant_broken(err: Error) -> ! {
    panic!("{err}")
}

#[derive(Clone)]
enum Slot<V> {
    /// Never written. Ends every probe.
    Empty,
    /// Previously occupied. Probes walk past it; inserts may reuse it.
    Tombstone,
    Occupied { hash: u64, value: V },
}

impl<V> Slot<V> {
    #[inline(always)]
    fn value(&self) -> Option<&V> {
        match self {
            Slot::Occupied { value, .. } => Some(value),
            _ => None,
        }
    }

    #[inline(always)]
    fn value_mut(&mut self) -> Option<&mut V> {
        match self {
            Slot::Occupied { value, .. } => Some(value),
            _ => None,
        }
    }

    #[inline(always)]
    fn into_value(self) -> Option<V> {
        match self {
            Slot::Occupied { value, .. } => Some(value),
            _ => None,
        }
    }
}

/// Linear probe sequence over `0..capacity`, starting at the home slot of
/// `hash` and wrapping once around the array.
#[derive(Clone)]
struct ProbeSeq {
    pos: usize,
    remaining: usize,
    capacity: usize,
}

impl ProbeSeq {
    #[inline(always)]
    fn new(hash: u64, capacity: usize) -> Self {
        Self {
            pos: home_index(hash, capacity),
            remaining: capacity,
            capacity,
        }
    }
}

impl Iterator for ProbeSeq {
    type Item = usize;

    #[inline(always)]
    fn next(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }

        let pos = self.pos;
        self.remaining -= 1;
        self.pos += 1;
        if self.pos == self.capacity {
            self.pos = 0;
        }
        Some(pos)
    }
}

/// Outcome of an insert-side probe.
enum Probe {
    Found(usize),
    Vacant(usize),
}

/// Debug statistics for hash table analysis.
///
/// Available under `cfg(test)` or the `stats` feature.
#[cfg(any(test, feature = "stats"))]
#[derive(Debug, Clone)]
pub struct DebugStats {
    /// Number of live entries
    pub populated: usize,
    /// Number of tombstoned slots
    pub tombstones: usize,
    /// Number of never-written slots
    pub empty_slots: usize,
    /// Total number of slots allocated
    pub capacity: usize,
    /// Load factor counting tombstones, `(populated + tombstones) / capacity`
    pub load_factor: f64,
    /// Load factor counting only live entries
    pub live_load_factor: f64,
    /// Longest distance of a live entry from its home slot
    pub max_probe_length: usize,
    /// Bytes held by the slot array
    pub total_bytes: usize,
}

#[cfg(any(test, feature = "stats"))]
impl DebugStats {
    /// Pretty-print the debug statistics.
    #[cfg(feature = "std")]
    pub fn print(&self) {
        println!("=== Hash Table Debug Statistics ===");
        println!(
            "Population: {}/{} ({:.2}% live load)",
            self.populated,
            self.capacity,
            self.live_load_factor * 100.0
        );
        println!(
            "Slot Usage: {} live, {} tombstones, {} empty ({:.2}% load)",
            self.populated,
            self.tombstones,
            self.empty_slots,
            self.load_factor * 100.0
        );
        println!("Longest probe: {}", self.max_probe_length);
        println!("Total Allocated: {} bytes", self.total_bytes);
    }
}

/// An open-addressing hash table with linear probing and tombstone deletion.
///
/// `HashTable<V>` stores values of type `V` in a single slot array. Like the
/// raw tables it is modelled on, the caller supplies the hash and an equality
/// predicate for every operation; keyed access lives in
/// [`HashMap`](crate::HashMap).
///
/// Removal leaves a tombstone behind so later probes keep walking past it.
/// Tombstones are only reclaimed when an insert finds the table at 3/4 load
/// (tombstones included) and rebuilds the slot array from the live entries.
///
/// ## Example
///
/// ```rust
/// # use core::hash::Hash;
/// # use core::hash::Hasher;
/// #
/// # use lp_hash::hash_table::Entry;
/// # use lp_hash::hash_table::HashTable;
/// # use siphasher::sip::SipHasher;
/// #
/// # #[derive(Debug, PartialEq)]
/// # struct Person {
/// #     id: u64,
/// #     name: String,
/// # }
/// #
/// # fn hash_id(id: u64) -> u64 {
/// #     let mut hasher = SipHasher::new();
/// #     id.hash(&mut hasher);
/// #     hasher.finish()
/// # }
///
/// let mut table = HashTable::new();
/// let hash = hash_id(123);
///
/// match table.entry(hash, |p: &Person| p.id == 123) {
///     Entry::Vacant(entry) => {
///         entry.insert(Person {
///             id: 123,
///             name: "Alice".to_string(),
///         });
///     }
///     Entry::Occupied(_) => {
///         println!("Person already exists");
///     }
/// }
///
/// assert_eq!(table.find(hash, |p| p.id == 123).map(|p| p.name.as_str()), Some("Alice"));
/// ```
#[derive(Clone)]
pub struct HashTable<V> {
    slots: Vec<Slot<V>>,
    populated: usize,
    tombstones: usize,
}

impl<V> Debug for HashTable<V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        use alloc::format;
        use alloc::string::String;
        use alloc::string::ToString;

        let capacity = self.capacity();
        let layout = self
            .slots
            .iter()
            .enumerate()
            .map(|(index, slot)| match slot {
                Slot::Empty => "..".to_string(),
                Slot::Tombstone => "xx".to_string(),
                Slot::Occupied { hash, .. } => {
                    let home = home_index(*hash, capacity);
                    format!("{:02}", (index + capacity - home) % capacity)
                }
            })
            .collect::<Vec<String>>()
            .join(", ");

        f.debug_struct("HashTable")
            .field("slots", &layout)
            .field("populated", &self.populated)
            .field("tombstones", &self.tombstones)
            .field("capacity", &capacity)
            .finish()
    }
}

impl<V> Default for HashTable<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> HashTable<V> {
    /// Creates an empty table with the minimum slot count of two.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use lp_hash::hash_table::HashTable;
    /// #
    /// let table: HashTable<u64> = HashTable::new();
    /// assert_eq!(table.capacity(), 2);
    /// ```
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates a table sized for a seed of `len` entries.
    ///
    /// The slot count is `round(8/3 * len)` (at least two), so loading `len`
    /// entries leaves the table at roughly 3/8 load.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use lp_hash::hash_table::HashTable;
    /// #
    /// let table: HashTable<String> = HashTable::with_capacity(3);
    /// assert_eq!(table.capacity(), 8);
    /// ```
    pub fn with_capacity(len: usize) -> Self {
        Self {
            slots: empty_slots(capacity_for(len)),
            populated: 0,
            tombstones: 0,
        }
    }

    /// Returns an iterator over the live values in slot order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use core::hash::Hash;
    /// # use core::hash::Hasher;
    /// #
    /// # use lp_hash::hash_table::HashTable;
    /// # use siphasher::sip::SipHasher;
    /// #
    /// # fn hash_str(s: &str) -> u64 {
    /// #     let mut hasher = SipHasher::new();
    /// #     s.hash(&mut hasher);
    /// #     hasher.finish()
    /// # }
    /// #
    /// let mut table = HashTable::new();
    /// table
    ///     .entry(hash_str("key1"), |s: &String| s == "key1")
    ///     .or_insert("key1".to_string());
    /// table
    ///     .entry(hash_str("key2"), |s: &String| s == "key2")
    ///     .or_insert("key2".to_string());
    ///
    /// assert_eq!(table.iter().count(), 2);
    /// ```
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            slots: self.slots.iter(),
            remaining: self.populated,
        }
    }

    /// Returns an iterator that removes and yields all values from the table.
    ///
    /// The table is emptied immediately and keeps its slot count, with every
    /// slot (tombstones included) reset to empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use lp_hash::hash_table::HashTable;
    /// #
    /// let mut table = HashTable::new();
    /// table.entry(7, |&n: &u64| n == 7).or_insert(7);
    ///
    /// let values: Vec<u64> = table.drain().collect();
    /// assert!(table.is_empty());
    /// assert_eq!(values, vec![7]);
    /// ```
    pub fn drain(&mut self) -> Drain<'_, V> {
        let remaining = self.populated;
        let capacity = self.slots.len();
        let slots = core::mem::replace(&mut self.slots, empty_slots(capacity));
        self.populated = 0;
        self.tombstones = 0;

        Drain {
            inner: slots.into_iter(),
            remaining,
            _table: PhantomData,
        }
    }

    /// Returns `true` if the table contains no live values.
    pub fn is_empty(&self) -> bool {
        self.populated == 0
    }

    /// Returns the number of live values in the table.
    pub fn len(&self) -> usize {
        self.populated
    }

    /// Returns the number of slots in the table.
    ///
    /// Unlike most Rust collections this is the length of the slot array, not
    /// the number of values that fit before the next resize.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Removes all values, keeping the current slot count.
    ///
    /// Tombstones are discarded along with the values.
    pub fn clear(&mut self) {
        for slot in self.slots.iter_mut() {
            *slot = Slot::Empty;
        }
        self.populated = 0;
        self.tombstones = 0;
    }

    /// Returns a reference to the value matching `hash` and `eq`.
    ///
    /// The probe stops at the first empty slot; tombstones are walked past.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use lp_hash::hash_table::HashTable;
    /// #
    /// let mut table = HashTable::new();
    /// table.entry(42, |&n: &u64| n == 42).or_insert(42);
    ///
    /// assert_eq!(table.find(42, |&n| n == 42), Some(&42));
    /// assert_eq!(table.find(99, |&n| n == 99), None);
    /// ```
    pub fn find(&self, hash: u64, eq: impl Fn(&V) -> bool) -> Option<&V> {
        let index = self.find_index(hash, eq)?;
        self.slots[index].value()
    }

    /// Returns a mutable reference to the value matching `hash` and `eq`.
    pub fn find_mut(&mut self, hash: u64, eq: impl Fn(&V) -> bool) -> Option<&mut V> {
        let index = self.find_index(hash, eq)?;
        self.slots[index].value_mut()
    }

    /// Removes and returns the value matching `hash` and `eq`.
    ///
    /// The slot becomes a tombstone. The table never resizes on removal.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use lp_hash::hash_table::HashTable;
    /// #
    /// let mut table = HashTable::new();
    /// table.entry(42, |&n: &u64| n == 42).or_insert(42);
    ///
    /// assert_eq!(table.remove(42, |&n| n == 42), Some(42));
    /// assert!(table.is_empty());
    /// assert_eq!(table.remove(42, |&n| n == 42), None);
    /// ```
    pub fn remove(&mut self, hash: u64, eq: impl Fn(&V) -> bool) -> Option<V> {
        let index = self.find_index(hash, eq)?;
        Some(self.take(index))
    }

    /// Gets an entry for the given hash and equality predicate.
    ///
    /// The load check runs first: if live entries plus tombstones fill 3/4 of
    /// the slots, the table is rebuilt before probing. The probe then stops at
    /// the matching entry or at the first empty slot. A vacant entry reuses the
    /// nearest tombstone passed on the way, or the empty slot if there was none.
    ///
    /// # Panics
    ///
    /// Panics if the probe visits every slot without an empty slot or a match,
    /// which the resize policy rules out. See [`try_entry`](Self::try_entry).
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use core::hash::Hash;
    /// # use core::hash::Hasher;
    /// #
    /// # use lp_hash::hash_table::HashTable;
    /// # use siphasher::sip::SipHasher;
    /// #
    /// # fn hash_str(s: &str) -> u64 {
    /// #     let mut hasher = SipHasher::new();
    /// #     s.hash(&mut hasher);
    /// #     hasher.finish()
    /// # }
    /// #
    /// let mut table = HashTable::new();
    /// let hash = hash_str("hello");
    ///
    /// match table.entry(hash, |s: &String| s == "hello") {
    ///     lp_hash::hash_table::Entry::Vacant(entry) => {
    ///         entry.insert("hello".to_string());
    ///     }
    ///     lp_hash::hash_table::Entry::Occupied(mut entry) => {
    ///         entry.get_mut().push('!');
    ///     }
    /// }
    ///
    /// table
    ///     .entry(hash, |s: &String| s == "hello")
    ///     .or_insert("ignored".to_string());
    /// assert_eq!(table.len(), 1);
    /// ```
    pub fn entry(&mut self, hash: u64, eq: impl Fn(&V) -> bool) -> Entry<'_, V> {
        match self.try_entry(hash, eq) {
            Ok(entry) => entry,
            Err(err) => invariant_broken(err),
        }
    }

    /// Fallible form of [`entry`](Self::entry).
    ///
    /// Returns [`Error::InvariantViolation`] if the probe exhausts the slot
    /// array, leaving the table untouched apart from any resize that ran.
    pub fn try_entry(&mut self, hash: u64, eq: impl Fn(&V) -> bool) -> Result<Entry<'_, V>, Error> {
        self.maybe_resize_rehash();

        match self.probe_for_insert(hash, eq)? {
            Probe::Found(index) => Ok(Entry::Occupied(OccupiedEntry { table: self, index })),
            Probe::Vacant(index) => Ok(Entry::Vacant(VacantEntry {
                table: self,
                hash,
                index,
            })),
        }
    }

    fn find_index(&self, hash: u64, eq: impl Fn(&V) -> bool) -> Option<usize> {
        if self.populated == 0 {
            return None;
        }

        for index in ProbeSeq::new(hash, self.capacity()) {
            match &self.slots[index] {
                Slot::Empty => return None,
                Slot::Tombstone => {}
                Slot::Occupied { hash: stored, value } => {
                    if *stored == hash && eq(value) {
                        return Some(index);
                    }
                }
            }
        }

        None
    }

    fn probe_for_insert(&self, hash: u64, eq: impl Fn(&V) -> bool) -> Result<Probe, Error> {
        let mut first_tombstone = None;

        for index in ProbeSeq::new(hash, self.capacity()) {
            match &self.slots[index] {
                Slot::Empty => return Ok(Probe::Vacant(first_tombstone.unwrap_or(index))),
                Slot::Tombstone => {
                    // The key may still live further down the chain, so only
                    // remember the slot until an empty one proves it absent.
                    first_tombstone.get_or_insert(index);
                }
                Slot::Occupied { hash: stored, value } => {
                    if *stored == hash && eq(value) {
                        return Ok(Probe::Found(index));
                    }
                }
            }
        }

        Err(Error::InvariantViolation {
            capacity: self.capacity(),
        })
    }

    #[inline(always)]
    fn maybe_resize_rehash(&mut self) {
        if at_load_limit(self.populated + self.tombstones, self.capacity()) {
            let new_capacity = capacity_for(self.populated).max(self.capacity());
            self.do_resize_rehash(new_capacity);
        }
    }

    /// Rebuilds the table at the seeded size for its live entries when it
    /// currently holds more slots than that.
    ///
    /// Bulk constructors presize for every pair they were handed, duplicates
    /// included, and call this once the pairs are in.
    pub(crate) fn shrink_to_seeded(&mut self) {
        let capacity = capacity_for(self.populated);
        if capacity < self.capacity() {
            self.do_resize_rehash(capacity);
        }
    }

    #[cold]
    #[inline(never)]
    fn do_resize_rehash(&mut self, capacity: usize) {
        let old = core::mem::replace(&mut self.slots, empty_slots(capacity));
        self.tombstones = 0;

        for slot in old {
            if let Slot::Occupied { hash, value } = slot {
                // Entries are already unique, so no key comparison is needed.
                match self.probe_for_insert(hash, |_| false) {
                    Ok(Probe::Vacant(index)) => self.slots[index] = Slot::Occupied { hash, value },
                    Ok(Probe::Found(_)) => unreachable!("rehash probe matched an entry"),
                    Err(err) => invariant_broken(err),
                }
            }
        }
    }

    /// Tombstones an occupied slot and returns its value.
    fn take(&mut self, index: usize) -> V {
        match core::mem::replace(&mut self.slots[index], Slot::Tombstone).into_value() {
            Some(value) => {
                self.populated -= 1;
                self.tombstones += 1;
                value
            }
            None => unreachable!("slot {index} is not occupied"),
        }
    }

    fn live(&self, index: usize) -> &V {
        match self.slots[index].value() {
            Some(value) => value,
            None => unreachable!("slot {index} is not occupied"),
        }
    }

    fn live_mut(&mut self, index: usize) -> &mut V {
        match self.slots[index].value_mut() {
            Some(value) => value,
            None => unreachable!("slot {index} is not occupied"),
        }
    }

    /// Computes a histogram of probe lengths for the current table state.
    ///
    /// Entry `i` counts the live values sitting `i` slots past their home
    /// slot, wrapping around the end of the array.
    #[cfg(any(test, feature = "stats"))]
    pub fn probe_histogram(&self) -> Vec<usize> {
        let capacity = self.capacity();
        let mut hist = alloc::vec![0usize; 1];

        for (index, slot) in self.slots.iter().enumerate() {
            if let Slot::Occupied { hash, .. } = slot {
                let distance = (index + capacity - home_index(*hash, capacity)) % capacity;
                if distance >= hist.len() {
                    hist.resize(distance + 1, 0);
                }
                hist[distance] += 1;
            }
        }

        hist
    }

    /// Returns slot-level statistics for debugging.
    ///
    /// Counts are taken by scanning the slot array, not from the table's
    /// running counters.
    #[cfg(any(test, feature = "stats"))]
    pub fn debug_stats(&self) -> DebugStats {
        let mut populated = 0;
        let mut tombstones = 0;
        let mut empty_slots = 0;
        for slot in self.slots.iter() {
            match slot {
                Slot::Empty => empty_slots += 1,
                Slot::Tombstone => tombstones += 1,
                Slot::Occupied { .. } => populated += 1,
            }
        }

        let capacity = self.capacity();
        DebugStats {
            populated,
            tombstones,
            empty_slots,
            capacity,
            load_factor: (populated + tombstones) as f64 / capacity as f64,
            live_load_factor: populated as f64 / capacity as f64,
            max_probe_length: self.probe_histogram().len() - 1,
            total_bytes: capacity * core::mem::size_of::<Slot<V>>(),
        }
    }

    /// Pretty-prints the probe-length histogram horizontally using stdout.
    #[cfg(all(any(test, feature = "stats"), feature = "std"))]
    pub fn print_probe_histogram(&self) {
        let hist = self.probe_histogram();
        let max = *hist.iter().max().unwrap_or(&0);
        if max == 0 {
            println!("probe histogram: empty");
            return;
        }

        let max_bar = 60usize;
        println!("probe histogram ({} entries):", self.populated);
        for (i, &count) in hist.iter().enumerate() {
            let width = (count * max_bar).div_ceil(max);
            println!("{:>3} | {} ({})", i, "█".repeat(width), count);
        }
    }
}

impl<V> IntoIterator for HashTable<V> {
    type Item = V;
    type IntoIter = IntoIter<V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.slots.into_iter(),
            remaining: self.populated,
        }
    }
}

impl<'a, V> IntoIterator for &'a HashTable<V> {
    type Item = &'a V;
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A view into a single entry in the hash table, which may be vacant or
/// occupied.
///
/// This enum is constructed from the [`entry`] method on [`HashTable`].
///
/// [`entry`]: HashTable::entry
pub enum Entry<'a, V> {
    /// A vacant entry - the key is not present in the table
    Vacant(VacantEntry<'a, V>),
    /// An occupied entry - the key is present in the table
    Occupied(OccupiedEntry<'a, V>),
}

impl<'a, V> Entry<'a, V> {
    /// Inserts `default` if the entry is vacant and returns a mutable
    /// reference to the value in the entry.
    pub fn or_insert(self, default: V) -> &'a mut V {
        match self {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(default),
        }
    }

    /// Inserts the result of `default` if the entry is vacant and returns a
    /// mutable reference to the value in the entry.
    pub fn or_insert_with(self, default: impl FnOnce() -> V) -> &'a mut V {
        match self {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(default()),
        }
    }

    /// Applies `f` to an occupied entry's value. Vacant entries are left
    /// alone and yield `None`.
    pub fn and_modify(self, f: impl FnOnce(&mut V)) -> Option<&'a mut V> {
        match self {
            Entry::Occupied(entry) => {
                let value = entry.into_mut();
                f(value);
                Some(value)
            }
            Entry::Vacant(_) => None,
        }
    }

    /// Inserts `V::default()` if the entry is vacant and returns a mutable
    /// reference to the value in the entry.
    pub fn or_default(self) -> &'a mut V
    where
        V: Default,
    {
        self.or_insert_with(Default::default)
    }
}

/// A view into a vacant entry in the hash table.
///
/// The target slot was fixed by the probe: the nearest tombstone on the
/// chain, otherwise the empty slot that ended it.
pub struct VacantEntry<'a, V> {
    table: &'a mut HashTable<V>,
    hash: u64,
    index: usize,
}

impl<'a, V> VacantEntry<'a, V> {
    /// Inserts a value into the vacant entry and returns a mutable reference to
    /// it.
    pub fn insert(self, value: V) -> &'a mut V {
        let VacantEntry { table, hash, index } = self;

        if matches!(table.slots[index], Slot::Tombstone) {
            table.tombstones -= 1;
        }
        table.populated += 1;
        table.slots[index] = Slot::Occupied { hash, value };
        table.live_mut(index)
    }
}

/// A view into an occupied entry in the hash table.
pub struct OccupiedEntry<'a, V> {
    table: &'a mut HashTable<V>,
    index: usize,
}

impl<'a, V> OccupiedEntry<'a, V> {
    /// Gets a reference to the value in the entry.
    pub fn get(&self) -> &V {
        self.table.live(self.index)
    }

    /// Gets a mutable reference to the value in the entry.
    pub fn get_mut(&mut self) -> &mut V {
        self.table.live_mut(self.index)
    }

    /// Converts the entry into a mutable reference bound to the table's
    /// lifetime.
    pub fn into_mut(self) -> &'a mut V {
        let OccupiedEntry { table, index } = self;
        table.live_mut(index)
    }

    /// Removes the value, leaving a tombstone in its slot.
    pub fn remove(self) -> V {
        self.table.take(self.index)
    }
}

/// An iterator over the live values of a [`HashTable`], in slot order.
pub struct Iter<'a, V> {
    slots: core::slice::Iter<'a, Slot<V>>,
    remaining: usize,
}

impl<V> Clone for Iter<'_, V> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots.clone(),
            remaining: self.remaining,
        }
    }
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let value = self.slots.find_map(Slot::value)?;
        self.remaining -= 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V> ExactSizeIterator for Iter<'_, V> {}
impl<V> FusedIterator for Iter<'_, V> {}

/// A draining iterator over the values of a [`HashTable`].
///
/// This struct is created by the [`drain`] method on [`HashTable`]. The table
/// is already empty by the time the iterator exists; values not consumed are
/// dropped with the iterator.
///
/// [`drain`]: HashTable::drain
pub struct Drain<'a, V> {
    inner: alloc::vec::IntoIter<Slot<V>>,
    remaining: usize,
    _table: PhantomData<&'a mut HashTable<V>>,
}

impl<V> Iterator for Drain<'_, V> {
    type Item = V;

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.inner.find_map(Slot::into_value)?;
        self.remaining -= 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V> ExactSizeIterator for Drain<'_, V> {}
impl<V> FusedIterator for Drain<'_, V> {}

/// An owning iterator over the values of a [`HashTable`].
pub struct IntoIter<V> {
    inner: alloc::vec::IntoIter<Slot<V>>,
    remaining: usize,
}

impl<V> Iterator for IntoIter<V> {
    type Item = V;

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.inner.find_map(Slot::into_value)?;
        self.remaining -= 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V> ExactSizeIterator for IntoIter<V> {}
impl<V> FusedIterator for IntoIter<V> {}
