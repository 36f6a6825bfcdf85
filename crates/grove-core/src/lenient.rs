//! Best-effort reading: a read cursor wrapped with an error-depth counter.
//!
//! Chained optional navigation ("descend into three optional keys, then read
//! with a default") should not need a validity check after every step. The
//! lenient cursor tracks how many descents were attempted *past* the point
//! where the underlying reader went invalid; while that counter is above
//! zero, descents only increment it and ascents only decrement it, without
//! touching the reader. Reaching zero again means the cursor has walked back
//! out to the depth where the reader is still positioned, and delegation
//! resumes.
//!
//! The named value accessors never move the cursor: each one probes a
//! *clone* of the underlying reader, so a failed lookup cannot disturb the
//! wrapper's position.

use crate::reader::ReadCursor;

/// Forgiving wrapper over [`ReadCursor`] for tolerant config-style reads.
#[derive(Debug, Clone)]
pub struct LenientReadCursor<'a> {
    reader: ReadCursor<'a>,
    error_depth: u32,
}

impl<'a> LenientReadCursor<'a> {
    /// Wrap a reader. The reader's current position becomes the wrapper's.
    pub fn new(reader: ReadCursor<'a>) -> Self {
        Self {
            reader,
            error_depth: 0,
        }
    }

    /// A clone of the underlying reader at its current position.
    pub fn reader(&self) -> ReadCursor<'a> {
        self.reader.clone()
    }

    /// `true` iff no failed descents are outstanding and the underlying
    /// reader is valid.
    pub fn is_valid(&self) -> bool {
        self.error_depth == 0 && self.reader.is_valid()
    }

    /// Descend to the named child. On failure (or while already broken) the
    /// error depth grows and the reader is left untouched.
    pub fn to_child(&mut self, name: &str) -> bool {
        if !self.is_valid() {
            self.error_depth += 1;
            return false;
        }
        self.reader.to_child(name);
        self.note_descent()
    }

    /// Descend to the first child; same failure accounting as
    /// [`LenientReadCursor::to_child`].
    pub fn to_first_child(&mut self) -> bool {
        if !self.is_valid() {
            self.error_depth += 1;
            return false;
        }
        self.reader.to_first_child();
        self.note_descent()
    }

    fn note_descent(&mut self) -> bool {
        if self.reader.is_valid() {
            true
        } else {
            // The reader recorded the failed descent on its own ancestor
            // stack; our counter mirrors that one level.
            self.error_depth += 1;
            false
        }
    }

    /// Move to the next sibling. Only meaningful while valid; a failing
    /// no-op otherwise.
    pub fn to_next_sibling(&mut self) -> bool {
        if !self.is_valid() {
            return false;
        }
        self.reader.to_next_sibling();
        self.reader.is_valid()
    }

    /// Walk back toward the root. While broken this unwinds the error depth;
    /// returns `true` once the cursor is valid again at the new position.
    ///
    /// Each failed descent costs exactly one `to_parent`: the decrement that
    /// reaches zero also pops the reader's own record of the descent that
    /// originally broke it.
    pub fn to_parent(&mut self) -> bool {
        if self.error_depth > 0 {
            self.error_depth -= 1;
            if self.error_depth > 0 {
                return false;
            }
            self.reader.to_parent();
            return self.reader.is_valid();
        }
        self.reader.to_parent();
        self.reader.is_valid()
    }

    /// Descend into the named child, then into its first element. On any
    /// failure the cursor is restored to its starting position.
    pub fn enter_array(&mut self, name: &str) -> bool {
        if !self.to_child(name) {
            // Undo the failed descent's error-depth bump.
            self.to_parent();
            return false;
        }
        if !self.to_first_child() {
            self.to_parent();
            self.to_parent();
            return false;
        }
        true
    }

    /// Leave an array entered via [`LenientReadCursor::enter_array`]: go to
    /// the parent's parent.
    pub fn exit_array(&mut self) {
        let ascended = self.to_parent();
        debug_assert!(ascended, "exit_array without a surrounding array");
        let ascended = self.to_parent();
        debug_assert!(ascended, "exit_array without an enter_array");
    }

    //
    // Named value accessors. All probe a clone of the reader and leave the
    // cursor where it was.
    //

    /// Read the named `Bool` child, substituting `default` if it is missing
    /// or has another type.
    pub fn bool_or(&self, name: &str, default: bool) -> bool {
        self.probe(name).and_then(|r| r.query_bool()).unwrap_or(default)
    }

    /// Read the named `Int` child, substituting `default` on any failure.
    pub fn int_or(&self, name: &str, default: i32) -> i32 {
        self.probe(name).and_then(|r| r.query_int()).unwrap_or(default)
    }

    /// Read the named `Float` child, substituting `default` on any failure.
    pub fn float_or(&self, name: &str, default: f32) -> f32 {
        self.probe(name).and_then(|r| r.query_float()).unwrap_or(default)
    }

    /// Read the named `Str` child, substituting `default` on any failure.
    pub fn string_or(&self, name: &str, default: &str) -> String {
        self.probe(name)
            .as_ref()
            .and_then(|r| r.query_str())
            .unwrap_or(default)
            .to_string()
    }

    /// Read the named `Bool` child. A missing or mistyped child is a
    /// contract violation: debug builds assert, release builds yield
    /// `false`.
    pub fn read_bool(&self, name: &str) -> bool {
        let value = self.probe(name).and_then(|r| r.query_bool());
        debug_assert!(value.is_some(), "missing or non-bool child {name:?}");
        value.unwrap_or(false)
    }

    /// Read the named `Int` child; asserts in debug builds, `0` in release.
    pub fn read_int(&self, name: &str) -> i32 {
        let value = self.probe(name).and_then(|r| r.query_int());
        debug_assert!(value.is_some(), "missing or non-int child {name:?}");
        value.unwrap_or(0)
    }

    /// Read the named `Float` child; asserts in debug builds, `0.0` in
    /// release.
    pub fn read_float(&self, name: &str) -> f32 {
        let value = self.probe(name).and_then(|r| r.query_float());
        debug_assert!(value.is_some(), "missing or non-float child {name:?}");
        value.unwrap_or(0.0)
    }

    /// Read the named `Str` child; asserts in debug builds, `""` in
    /// release.
    pub fn read_string(&self, name: &str) -> String {
        let probed = self.probe(name);
        let value = probed.as_ref().and_then(|r| r.query_str());
        debug_assert!(value.is_some(), "missing or non-string child {name:?}");
        value.unwrap_or("").to_string()
    }

    /// Clone the reader and descend one level to `name`. `None` while the
    /// wrapper (or the reader underneath) is not in a readable state.
    fn probe(&self, name: &str) -> Option<ReadCursor<'a>> {
        if !self.reader.is_valid() {
            return None;
        }
        let mut temp = self.reader.clone();
        temp.to_child(name);
        temp.is_valid().then_some(temp)
    }
}
