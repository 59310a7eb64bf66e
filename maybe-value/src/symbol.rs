use std::fmt::{self, Display};
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

static NEXT_SYMBOL_ID: AtomicU64 = AtomicU64::new(0);

/// A unique symbol.
///
/// Every call to `Symbol::new` yields a fresh identity, even for identical descriptions: two
/// symbols are equal only if one is a clone of the other. This is fast to clone and compare.
#[derive(Debug, Clone)]
pub struct Symbol {
    id: u64,
    description: Option<Arc<str>>,
}

impl Symbol {
    pub fn new(description: Option<&str>) -> Self {
        Self {
            id: NEXT_SYMBOL_ID.fetch_add(1, Ordering::Relaxed),
            description: description.map(Arc::from),
        }
    }

    #[inline(always)]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Symbol {}

impl Hash for Symbol {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({})", self.description().unwrap_or_default())
    }
}
