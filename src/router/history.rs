//! Hash-based history.
//!
//! Locations are addressed through the fragment (`#/watch/123`), so nothing
//! outside the client ever has to understand application paths.

/// Extract the application path from a location.
///
/// Accepts a bare fragment (`#/upload`), an absolute path (`/upload`), or a
/// full URL whose fragment carries the path (`http://host/#/upload`). A URL
/// without fragment, or an empty fragment, addresses the root. A `#` after
/// the path is an in-page anchor and is dropped.
pub fn parse_location(location: &str) -> String {
    let location = location.trim();
    let path = if let Some(fragment) = location.strip_prefix('#') {
        fragment
    } else if location.contains("://") {
        location.split_once('#').map(|(_, f)| f).unwrap_or_default()
    } else {
        location
    };

    let path = path.split('#').next().unwrap_or_default();
    format!("/{}", path.trim_start_matches('/'))
}

/// Render a path as a hash href.
pub fn href(path: &str) -> String {
    if path.starts_with('/') {
        format!("#{}", path)
    } else {
        format!("#/{}", path)
    }
}

/// Back/forward stack of visited paths.
#[derive(Debug, Clone)]
pub struct HashHistory {
    entries: Vec<String>,
    index: usize,
}

impl Default for HashHistory {
    fn default() -> Self {
        Self::new("/")
    }
}

impl HashHistory {
    pub fn new(initial: &str) -> Self {
        Self {
            entries: vec![parse_location(initial)],
            index: 0,
        }
    }

    /// Current path.
    pub fn current(&self) -> &str {
        &self.entries[self.index]
    }

    /// Current location as an href.
    pub fn current_href(&self) -> String {
        href(self.current())
    }

    /// Push a new entry, discarding any forward entries.
    ///
    /// Pushing the current location again is a no-op.
    pub fn push(&mut self, location: &str) -> &str {
        let path = parse_location(location);
        if path != self.current() {
            self.entries.truncate(self.index + 1);
            self.entries.push(path);
            self.index = self.entries.len() - 1;
        }
        self.current()
    }

    /// Replace the current entry.
    pub fn replace(&mut self, location: &str) -> &str {
        self.entries[self.index] = parse_location(location);
        self.current()
    }

    pub fn can_go_back(&self) -> bool {
        self.index > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.index + 1 < self.entries.len()
    }

    /// Step back; returns the new current path, or None at the start.
    pub fn back(&mut self) -> Option<&str> {
        if !self.can_go_back() {
            return None;
        }
        self.index -= 1;
        Some(self.current())
    }

    /// Step forward; returns the new current path, or None at the end.
    pub fn forward(&mut self) -> Option<&str> {
        if !self.can_go_forward() {
            return None;
        }
        self.index += 1;
        Some(self.current())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
