//! Per-instance handler state keyed by device and function number

use crate::error::{Rmi4Error, Rmi4Result};
use crate::function::{DeviceId, FunctionKey};
use parking_lot::Mutex;
use std::collections::HashMap;

/// State blobs a handler allocated at probe time, one per function instance.
///
/// Entries live until the instance is removed or its device is released.
pub struct StateTable<T> {
    entries: Mutex<HashMap<FunctionKey, T>>,
    limit: Option<usize>,
}

impl<T> StateTable<T> {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            limit: None,
        }
    }

    /// Table that refuses to hold more than `limit` instances.
    pub fn bounded(limit: usize) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            limit: Some(limit),
        }
    }

    /// Make sure `key` can be stored without allocating later.
    ///
    /// Replacing an existing entry always succeeds. Fails with
    /// [`Rmi4Error::ResourceExhausted`] if the table is full or cannot grow.
    pub fn reserve(&self, key: &FunctionKey) -> Rmi4Result<()> {
        let mut entries = self.entries.lock();
        Self::reserve_locked(&mut entries, self.limit, key)
    }

    fn reserve_locked(
        entries: &mut HashMap<FunctionKey, T>,
        limit: Option<usize>,
        key: &FunctionKey,
    ) -> Rmi4Result<()> {
        if entries.contains_key(key) {
            return Ok(());
        }
        if limit.is_some_and(|limit| entries.len() >= limit) {
            return Err(Rmi4Error::ResourceExhausted);
        }
        if entries.try_reserve(1).is_err() {
            return Err(Rmi4Error::ResourceExhausted);
        }
        Ok(())
    }

    /// Store `state` for `key`, replacing any earlier entry.
    ///
    /// Fails with [`Rmi4Error::ResourceExhausted`] if the table cannot grow.
    pub fn insert(&self, key: FunctionKey, state: T) -> Rmi4Result<Option<T>> {
        let mut entries = self.entries.lock();
        Self::reserve_locked(&mut entries, self.limit, &key)?;
        Ok(entries.insert(key, state))
    }

    pub fn contains(&self, key: &FunctionKey) -> bool {
        self.entries.lock().contains_key(key)
    }

    /// Run `f` against the state for `key`, if any.
    pub fn with<R>(&self, key: &FunctionKey, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        self.entries.lock().get_mut(key).map(f)
    }

    pub fn remove(&self, key: &FunctionKey) -> Option<T> {
        self.entries.lock().remove(key)
    }

    /// Drop every entry belonging to `device`, returning how many went away.
    pub fn release_device(&self, device: DeviceId) -> usize {
        let mut entries = self.entries.lock();
        let before = entries.len();
        entries.retain(|key, _| key.device != device);
        before.saturating_sub(entries.len())
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

impl<T> Default for StateTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(device: u32, function_number: u8) -> FunctionKey {
        FunctionKey::new(DeviceId(device), function_number)
    }

    #[test]
    fn test_insert_replaces() -> Rmi4Result<()> {
        let table = StateTable::new();
        assert_eq!(table.insert(key(1, 0x21), 10u8)?, None);
        assert_eq!(table.insert(key(1, 0x21), 20u8)?, Some(10));
        assert_eq!(table.len(), 1);
        assert_eq!(table.with(&key(1, 0x21), |v| *v), Some(20));
        Ok(())
    }

    #[test]
    fn test_bounded_table_rejects_new_keys_when_full() -> Rmi4Result<()> {
        let table = StateTable::bounded(1);
        table.insert(key(1, 0x21), 1u8)?;

        assert_eq!(table.reserve(&key(2, 0x21)), Err(Rmi4Error::ResourceExhausted));
        assert_eq!(
            table.insert(key(2, 0x21), 2u8),
            Err(Rmi4Error::ResourceExhausted)
        );
        // replacing a live entry needs no new slot
        assert_eq!(table.reserve(&key(1, 0x21)), Ok(()));
        assert_eq!(table.insert(key(1, 0x21), 3u8)?, Some(1));
        assert_eq!(table.len(), 1);
        Ok(())
    }

    #[test]
    fn test_with_missing_key() {
        let table: StateTable<u8> = StateTable::new();
        assert_eq!(table.with(&key(1, 0x21), |v| *v), None);
    }

    #[test]
    fn test_release_device_only_drops_that_device() -> Rmi4Result<()> {
        let table = StateTable::new();
        table.insert(key(1, 0x21), ())?;
        table.insert(key(1, 0x11), ())?;
        table.insert(key(2, 0x21), ())?;

        assert_eq!(table.release_device(DeviceId(1)), 2);
        assert!(!table.contains(&key(1, 0x21)));
        assert!(table.contains(&key(2, 0x21)));
        assert_eq!(table.release_device(DeviceId(1)), 0);
        Ok(())
    }
}
