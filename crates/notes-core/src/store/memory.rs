//! In-memory note store
//!
//! All notes live behind one reader-writer lock. Readers (`get`, `list`) share
//! it; writers (`create`, `update`, `delete`) hold it exclusively and commit a
//! fully built note in a single assignment, so no reader can see a half-applied
//! write. Insertion order is tracked by a per-store sequence number.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::fmt;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::{
    Clock, IdGenerator, NoteRepository, RandomIds, StoreLimits, SystemClock, MAX_ID_ATTEMPTS,
};
use crate::error::{Error, Result};
use crate::models::{Note, NoteId, NoteInfo, NotePatch};

/// Thread-safe, process-local implementation of [`NoteRepository`]
pub struct InMemoryNoteStore {
    inner: RwLock<Inner>,
    ids: Box<dyn IdGenerator>,
    clock: Box<dyn Clock>,
    limits: StoreLimits,
}

#[derive(Default)]
struct Inner {
    notes: HashMap<NoteId, Entry>,
    /// Insertion sequence -> id, iterated by `list`
    order: BTreeMap<u64, NoteId>,
    /// Identifiers of deleted notes, never handed out again
    ///
    /// Grows by one entry per delete for the life of the store; that memory is
    /// the cost of never reusing an identifier.
    retired: HashSet<NoteId>,
    next_seq: u64,
}

struct Entry {
    seq: u64,
    note: Note,
}

impl Inner {
    fn is_taken(&self, id: NoteId) -> bool {
        self.notes.contains_key(&id) || self.retired.contains(&id)
    }
}

impl InMemoryNoteStore {
    /// Create an empty store with random identifiers, the system clock, and default limits
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner::default()),
            ids: Box::new(RandomIds),
            clock: Box::new(SystemClock),
            limits: StoreLimits::default(),
        }
    }

    #[must_use]
    pub const fn with_limits(mut self, limits: StoreLimits) -> Self {
        self.limits = limits;
        self
    }

    #[must_use]
    pub fn with_id_generator(mut self, ids: impl IdGenerator + 'static) -> Self {
        self.ids = Box::new(ids);
        self
    }

    #[must_use]
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub const fn limits(&self) -> &StoreLimits {
        &self.limits
    }

    // Writers never leave `Inner` half-modified, so a poisoned lock still guards
    // consistent data.
    fn read(&self) -> RwLockReadGuard<'_, Inner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Inner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn allocate_id(&self, inner: &Inner) -> Result<NoteId> {
        for _ in 0..MAX_ID_ATTEMPTS {
            let candidate = self.ids.next_id();
            if candidate < 0 {
                continue;
            }
            let id = NoteId::new(candidate);
            if !inner.is_taken(id) {
                return Ok(id);
            }
        }
        Err(Error::IdentifierExhausted {
            attempts: MAX_ID_ATTEMPTS,
        })
    }
}

impl Default for InMemoryNoteStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for InMemoryNoteStore {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("InMemoryNoteStore")
            .field("len", &self.len())
            .field("limits", &self.limits)
            .finish_non_exhaustive()
    }
}

impl NoteRepository for InMemoryNoteStore {
    fn create(&self, info: NoteInfo) -> Result<Note> {
        self.limits.check_info(&info)?;

        let mut inner = self.write();
        let id = self.allocate_id(&inner)?;
        let note = Note::new(id, info, self.clock.now());

        let seq = inner.next_seq;
        inner.next_seq += 1;
        inner.order.insert(seq, id);
        inner.notes.insert(
            id,
            Entry {
                seq,
                note: note.clone(),
            },
        );

        Ok(note)
    }

    fn get(&self, id: NoteId) -> Result<Note> {
        self.read()
            .notes
            .get(&id)
            .map(|entry| entry.note.clone())
            .ok_or(Error::NotFound(id))
    }

    fn list(&self, limit: i64, offset: i64) -> Result<Vec<Note>> {
        if limit <= 0 {
            return Ok(Vec::new());
        }
        let limit = saturating_usize(limit);
        let offset = saturating_usize(offset);

        let inner = self.read();
        let notes = inner
            .order
            .values()
            .skip(offset)
            .take(limit)
            .filter_map(|id| inner.notes.get(id))
            .map(|entry| entry.note.clone())
            .collect();

        Ok(notes)
    }

    fn update(&self, id: NoteId, patch: NotePatch) -> Result<Note> {
        self.limits.check_patch(&patch)?;

        let mut inner = self.write();
        let entry = inner.notes.get_mut(&id).ok_or(Error::NotFound(id))?;

        let mut note = entry.note.clone();
        patch.apply_to(&mut note.info);
        // The wall clock may step backwards; updated_at must not.
        note.updated_at = self.clock.now().max(note.updated_at);
        entry.note = note.clone();

        Ok(note)
    }

    fn delete(&self, id: NoteId) -> Result<()> {
        let mut inner = self.write();
        let entry = inner.notes.remove(&id).ok_or(Error::NotFound(id))?;
        inner.order.remove(&entry.seq);
        inner.retired.insert(id);
        Ok(())
    }

    fn len(&self) -> usize {
        self.read().notes.len()
    }
}

fn saturating_usize(value: i64) -> usize {
    usize::try_from(value.max(0)).unwrap_or(usize::MAX)
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};

    use chrono::{DateTime, Duration, Utc};
    use pretty_assertions::assert_eq;

    use super::*;

    /// Hands out a fixed script of candidates, then repeats the last one
    struct ScriptedIds(Mutex<VecDeque<i64>>);

    impl ScriptedIds {
        fn new(ids: &[i64]) -> Self {
            Self(Mutex::new(ids.iter().copied().collect()))
        }
    }

    impl IdGenerator for ScriptedIds {
        fn next_id(&self) -> i64 {
            let mut queue = self.0.lock().unwrap();
            if queue.len() > 1 {
                queue.pop_front().unwrap()
            } else {
                *queue.front().unwrap()
            }
        }
    }

    struct ManualClock(Mutex<DateTime<Utc>>);

    impl ManualClock {
        fn at(rfc3339: &str) -> Arc<Self> {
            Arc::new(Self(Mutex::new(parse(rfc3339))))
        }

        fn set(&self, rfc3339: &str) {
            *self.0.lock().unwrap() = parse(rfc3339);
        }

        fn advance(&self, by: Duration) {
            *self.0.lock().unwrap() += by;
        }
    }

    impl Clock for ManualClock {
        fn now(&self) -> DateTime<Utc> {
            *self.0.lock().unwrap()
        }
    }

    fn parse(rfc3339: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(rfc3339)
            .unwrap()
            .with_timezone(&Utc)
    }

    fn sample() -> NoteInfo {
        NoteInfo::new("A", "B", "C", true)
    }

    #[test]
    fn test_create_and_get() {
        let store = InMemoryNoteStore::new();

        let note = store.create(sample()).unwrap();
        assert!(note.id.get() >= 0);
        assert_eq!(note.created_at, note.updated_at);

        let fetched = store.get(note.id).unwrap();
        assert_eq!(fetched, note);
        assert_eq!(fetched.info, sample());
    }

    #[test]
    fn test_get_missing() {
        let store = InMemoryNoteStore::new();
        let err = store.get(NoteId::new(1)).unwrap_err();
        assert_eq!(err, Error::NotFound(NoteId::new(1)));
    }

    #[test]
    fn test_create_redraws_on_collision() {
        let store = InMemoryNoteStore::new().with_id_generator(ScriptedIds::new(&[5, 5, -3, 9]));

        let first = store.create(sample()).unwrap();
        let second = store.create(sample()).unwrap();

        assert_eq!(first.id, NoteId::new(5));
        assert_eq!(second.id, NoteId::new(9));
        assert_eq!(store.get(first.id).unwrap().info, sample());
    }

    #[test]
    fn test_create_reports_exhaustion() {
        let store = InMemoryNoteStore::new().with_id_generator(ScriptedIds::new(&[1]));
        store.create(sample()).unwrap();

        let err = store.create(sample()).unwrap_err();
        assert_eq!(
            err,
            Error::IdentifierExhausted {
                attempts: MAX_ID_ATTEMPTS
            }
        );
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_deleted_ids_are_not_reused() {
        let store = InMemoryNoteStore::new().with_id_generator(ScriptedIds::new(&[3, 3, 4]));
        let note = store.create(sample()).unwrap();
        store.delete(note.id).unwrap();

        let next = store.create(sample()).unwrap();
        assert_eq!(next.id, NoteId::new(4));
    }

    #[test]
    fn test_update_applies_only_present_fields() {
        let store = InMemoryNoteStore::new();
        let note = store.create(sample()).unwrap();

        let updated = store.update(note.id, NotePatch::new().context("Z")).unwrap();
        assert_eq!(updated.info, NoteInfo::new("A", "Z", "C", true));

        let updated = store
            .update(note.id, NotePatch::new().is_public(false))
            .unwrap();
        assert_eq!(updated.info, NoteInfo::new("A", "Z", "C", false));
        assert_eq!(store.get(note.id).unwrap(), updated);
    }

    #[test]
    fn test_update_refreshes_updated_at() {
        let clock = ManualClock::at("2024-01-01T00:00:00Z");
        let store = InMemoryNoteStore::new().with_clock(Arc::clone(&clock));
        let note = store.create(sample()).unwrap();

        clock.advance(Duration::seconds(5));
        let updated = store.update(note.id, NotePatch::new()).unwrap();

        assert_eq!(updated.info, note.info);
        assert_eq!(updated.created_at, note.created_at);
        assert_eq!(updated.updated_at, note.created_at + Duration::seconds(5));
    }

    #[test]
    fn test_update_never_moves_updated_at_backwards() {
        let clock = ManualClock::at("2024-01-01T00:00:00Z");
        let store = InMemoryNoteStore::new().with_clock(Arc::clone(&clock));
        let note = store.create(sample()).unwrap();

        clock.set("2023-06-01T00:00:00Z");
        let updated = store.update(note.id, NotePatch::new().title("x")).unwrap();
        assert_eq!(updated.updated_at, note.created_at);
        assert!(updated.updated_at >= updated.created_at);
    }

    #[test]
    fn test_update_missing() {
        let store = InMemoryNoteStore::new();
        let err = store
            .update(NoteId::new(77), NotePatch::new().title("x"))
            .unwrap_err();
        assert_eq!(err, Error::NotFound(NoteId::new(77)));
    }

    #[test]
    fn test_invalid_patch_changes_nothing() {
        let store = InMemoryNoteStore::new().with_limits(StoreLimits {
            max_title_len: 4,
            ..StoreLimits::default()
        });
        let note = store.create(sample()).unwrap();

        let err = store
            .update(note.id, NotePatch::new().context("ok").title("too long"))
            .unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
        assert_eq!(store.get(note.id).unwrap(), note);
    }

    #[test]
    fn test_create_rejects_oversized_info() {
        let store = InMemoryNoteStore::new().with_limits(StoreLimits {
            max_author_len: 1,
            ..StoreLimits::default()
        });
        let err = store
            .create(NoteInfo::new("t", "c", "Ann", false))
            .unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
        assert!(store.is_empty());
    }

    #[test]
    fn test_delete_is_terminal() {
        let store = InMemoryNoteStore::new();
        let note = store.create(sample()).unwrap();

        store.delete(note.id).unwrap();
        assert_eq!(store.get(note.id).unwrap_err(), Error::NotFound(note.id));
        assert_eq!(store.delete(note.id).unwrap_err(), Error::NotFound(note.id));
        assert!(store.list(10, 0).unwrap().is_empty());
    }

    #[test]
    fn test_list_insertion_order_and_window() {
        let store = InMemoryNoteStore::new();
        let a = store.create(NoteInfo::new("A", "", "", false)).unwrap();
        let b = store.create(NoteInfo::new("B", "", "", false)).unwrap();
        let c = store.create(NoteInfo::new("C", "", "", false)).unwrap();

        let ids = |notes: Vec<Note>| notes.into_iter().map(|n| n.id).collect::<Vec<_>>();

        assert_eq!(ids(store.list(10, 0).unwrap()), vec![a.id, b.id, c.id]);
        assert_eq!(ids(store.list(1, 1).unwrap()), vec![b.id]);
        assert_eq!(ids(store.list(2, 1).unwrap()), vec![b.id, c.id]);
        assert!(store.list(10, 5).unwrap().is_empty());
        assert!(store.list(10, 3).unwrap().is_empty());
    }

    #[test]
    fn test_list_limit_and_offset_edges() {
        let store = InMemoryNoteStore::new();
        let a = store.create(sample()).unwrap();
        store.create(sample()).unwrap();

        assert!(store.list(0, 0).unwrap().is_empty());
        assert!(store.list(-1, 0).unwrap().is_empty());
        assert_eq!(store.list(1, -4).unwrap()[0].id, a.id);
        assert_eq!(store.list(i64::MAX, 0).unwrap().len(), 2);
    }

    #[test]
    fn test_list_skips_deleted_and_keeps_order() {
        let store = InMemoryNoteStore::new();
        let a = store.create(sample()).unwrap();
        let b = store.create(sample()).unwrap();
        let c = store.create(sample()).unwrap();

        store.delete(b.id).unwrap();
        store.update(a.id, NotePatch::new().title("edited")).unwrap();

        let listed: Vec<_> = store.list(10, 0).unwrap().into_iter().map(|n| n.id).collect();
        assert_eq!(listed, vec![a.id, c.id]);
    }

    #[test]
    fn test_returned_notes_are_snapshots() {
        let store = InMemoryNoteStore::new();
        let mut note = store.create(sample()).unwrap();
        note.info.title = "changed locally".to_string();

        assert_eq!(store.get(note.id).unwrap().info.title, "A");
    }
}
