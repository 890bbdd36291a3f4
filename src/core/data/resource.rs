use std::{collections::HashMap, fmt};

/// Kind of a resource entry, taken from its element tag.
///
/// Android `strings.xml` files declare three kinds of translatable entries:
///
/// 1. **String**: `<string name="title">Title</string>`
/// 2. **Plurals**: `<plurals name="items"><item quantity="one">…</item></plurals>`
/// 3. **StringArray**: `<string-array name="days"><item>Mon</item></string-array>`
///
/// A key declared with one kind in the base file and another in a locale file
/// is reported as a type mismatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EntryKind {
    String,
    Plurals,
    StringArray,
}

impl EntryKind {
    pub const ALL: [EntryKind; 3] = [EntryKind::String, EntryKind::Plurals, EntryKind::StringArray];

    /// Returns the kind for a recognized element tag, `None` for anything else.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.tag() == tag)
    }

    pub fn tag(self) -> &'static str {
        match self {
            EntryKind::String => "string",
            EntryKind::Plurals => "plurals",
            EntryKind::StringArray => "string-array",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Entries declared by one resource file.
///
/// `order` and `entries` always hold the same keys; `order` keeps the
/// declaration order of first occurrences. Later occurrences of a key only
/// land in `duplicates`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceFile {
    /// File path the entries were loaded from.
    pub file_path: String,
    pub order: Vec<String>,
    pub entries: HashMap<String, EntryKind>,
    /// Repeated keys, in the order they were encountered.
    pub duplicates: Vec<String>,
}

impl ResourceFile {
    pub fn new(file_path: impl Into<String>) -> Self {
        Self {
            file_path: file_path.into(),
            ..Default::default()
        }
    }

    /// Record a declaration. The first one for a name wins.
    pub fn declare(&mut self, name: impl Into<String>, kind: EntryKind) {
        let name = name.into();
        if self.entries.contains_key(&name) {
            self.duplicates.push(name);
            return;
        }
        self.order.push(name.clone());
        self.entries.insert(name, kind);
    }

    pub fn get(&self, key: &str) -> Option<EntryKind> {
        self.entries.get(key).copied()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Keys in declaration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
