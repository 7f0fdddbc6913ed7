// Hash-slot memo cache for classification verdicts

/// Longest text (in chars) that is cached.
const MAX_CACHED_LEN: usize = 64;

/// Slot count at size parameter 0.
const BASE_ORDER: u32 = 8;

/// Largest accepted size parameter (64K slots).
pub const MAX_SIZE_PARAM: usize = 8;

fn slot_hash(text: &str, strict: bool, order: u32) -> usize {
    let modulus = 1u32 << order;
    let mut hash: u32 = u32::from(strict);
    for c in text.chars() {
        hash = hash.wrapping_mul(37).wrapping_add(c as u32) % modulus;
    }
    hash as usize
}

#[derive(Debug)]
struct Entry {
    text: Box<str>,
    strict: bool,
    valid: bool,
}

/// A fixed-size cache of classification verdicts keyed by `(text, strict)`.
///
/// Each key hashes to exactly one slot; a colliding store overwrites the
/// previous entry. Texts longer than 64 characters are never cached.
/// Holding no entry is always correct, so the cache can be cleared or
/// dropped at any time.
#[derive(Debug)]
pub struct ClassifierCache {
    order: u32,
    slots: Vec<Option<Entry>>,
}

impl ClassifierCache {
    /// Create a cache with `256 << size_param` slots. `size_param` is capped
    /// at [`MAX_SIZE_PARAM`].
    pub fn new(size_param: usize) -> Self {
        let order = BASE_ORDER + size_param.min(MAX_SIZE_PARAM) as u32;
        let mut slots = Vec::new();
        slots.resize_with(1usize << order, || None);
        Self { order, slots }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// The cached verdict, if this exact key is stored.
    pub fn lookup(&self, text: &str, strict: bool) -> Option<bool> {
        if text.chars().count() > MAX_CACHED_LEN {
            return None;
        }
        let slot = &self.slots[slot_hash(text, strict, self.order)];
        match slot {
            Some(e) if e.strict == strict && &*e.text == text => Some(e.valid),
            _ => None,
        }
    }

    pub fn store(&mut self, text: &str, strict: bool, valid: bool) {
        if text.chars().count() > MAX_CACHED_LEN {
            return;
        }
        let index = slot_hash(text, strict, self.order);
        self.slots[index] = Some(Entry {
            text: text.into(),
            strict,
            valid,
        });
    }

    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|s| *s = None);
    }
}
