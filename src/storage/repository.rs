//! Repository over the key-value store.
//!
//! Quotas, production entries and supplementary data are each stored as a
//! JSON array under their own key. Every write loads the collection,
//! applies the change to a fresh `Vec` and saves it back.

use chrono::NaiveDate;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use uuid::Uuid;

use crate::config::StorageKeys;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    DailySupplementaryData, NewProductionEntry, NewQuota, ProductionEntry, Quota,
    SupplementaryUpdate, normalize_stage_code, validate_quota_fields,
};

use super::store::KeyValueStore;

/// Typed access to the stored production records.
///
/// # Example
///
/// ```
/// use estron_engine::config::StorageKeys;
/// use estron_engine::models::NewQuota;
/// use estron_engine::storage::{InMemoryStore, ProductionRepository};
/// use rust_decimal::Decimal;
///
/// let mut repo = ProductionRepository::new(InMemoryStore::new(), StorageKeys::default());
/// let quota = repo
///     .add_quota(NewQuota { stage_code: "CD01".to_string(), daily_quota: Decimal::new(400, 0) })
///     .unwrap();
/// assert_eq!(quota.order, 0);
/// assert_eq!(repo.quotas().unwrap().len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct ProductionRepository<S> {
    store: S,
    keys: StorageKeys,
}

impl<S: KeyValueStore> ProductionRepository<S> {
    /// Creates a repository over `store` using `keys`.
    pub fn new(store: S, keys: StorageKeys) -> Self {
        Self { store, keys }
    }

    /// Returns the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    fn load_list<T: DeserializeOwned>(&self, key: &str) -> EngineResult<Vec<T>> {
        match self.store.get(key)? {
            Some(json) => serde_json::from_str(&json).map_err(|e| EngineError::Storage {
                key: key.to_string(),
                message: e.to_string(),
            }),
            None => Ok(Vec::new()),
        }
    }

    fn save_list<T: Serialize>(&mut self, key: &str, items: &[T]) -> EngineResult<()> {
        let json = serde_json::to_string(items).map_err(|e| EngineError::Storage {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        debug!(key, count = items.len(), "Saving collection");
        self.store.set(key, json)
    }

    // --- Quotas ---

    /// Returns all quotas sorted by display order.
    pub fn quotas(&self) -> EngineResult<Vec<Quota>> {
        let mut quotas: Vec<Quota> = self.load_list(&self.keys.quotas_key)?;
        quotas.sort_by_key(|q| q.order);
        Ok(quotas)
    }

    /// Saves `quotas` in the given sequence, renumbering `order` by position.
    pub fn save_quotas(&mut self, quotas: &[Quota]) -> EngineResult<Vec<Quota>> {
        let ordered: Vec<Quota> = quotas
            .iter()
            .enumerate()
            .map(|(index, quota)| Quota {
                order: index as u32,
                ..quota.clone()
            })
            .collect();
        let key = self.keys.quotas_key.clone();
        self.save_list(&key, &ordered)?;
        Ok(ordered)
    }

    /// Adds a quota at the end of the list.
    ///
    /// # Errors
    ///
    /// - [`EngineError::InvalidRecord`] for a blank stage code or non-positive quota
    /// - [`EngineError::DuplicateStageCode`] if the stage code is already used
    pub fn add_quota(&mut self, new_quota: NewQuota) -> EngineResult<Quota> {
        new_quota.validate()?;
        let mut quotas = self.quotas()?;

        if quotas.iter().any(|q| q.matches_stage(&new_quota.stage_code)) {
            return Err(EngineError::DuplicateStageCode {
                code: new_quota.stage_code,
            });
        }

        let quota = Quota {
            id: Uuid::new_v4().to_string(),
            stage_code: new_quota.stage_code,
            daily_quota: new_quota.daily_quota,
            order: quotas.len() as u32,
        };
        quotas.push(quota.clone());
        self.save_quotas(&quotas)?;
        Ok(quota)
    }

    /// Replaces the quota with the same id, keeping its position.
    ///
    /// # Errors
    ///
    /// - [`EngineError::QuotaNotFound`] if no quota has `updated.id`
    /// - [`EngineError::DuplicateStageCode`] if another quota uses the stage code
    /// - [`EngineError::InvalidRecord`] for invalid field values
    pub fn update_quota(&mut self, updated: Quota) -> EngineResult<Quota> {
        validate_quota_fields(&updated.stage_code, updated.daily_quota)?;
        let quotas = self.quotas()?;

        let index = quotas
            .iter()
            .position(|q| q.id == updated.id)
            .ok_or_else(|| EngineError::QuotaNotFound {
                id: updated.id.clone(),
            })?;

        let code = normalize_stage_code(&updated.stage_code);
        if quotas
            .iter()
            .any(|q| q.id != updated.id && normalize_stage_code(&q.stage_code) == code)
        {
            return Err(EngineError::DuplicateStageCode {
                code: updated.stage_code,
            });
        }

        let replaced: Vec<Quota> = quotas
            .into_iter()
            .enumerate()
            .map(|(i, q)| if i == index { updated.clone() } else { q })
            .collect();
        let saved = self.save_quotas(&replaced)?;
        Ok(saved[index].clone())
    }

    /// Deletes the quota with `id`. Deleting an unknown id is a no-op.
    pub fn delete_quota(&mut self, id: &str) -> EngineResult<()> {
        let remaining: Vec<Quota> = self.quotas()?.into_iter().filter(|q| q.id != id).collect();
        self.save_quotas(&remaining)?;
        Ok(())
    }

    // --- Production entries ---

    /// Returns every stored production entry.
    pub fn production_entries(&self) -> EngineResult<Vec<ProductionEntry>> {
        self.load_list(&self.keys.production_entries_key)
    }

    /// Records production for `(date, stage_code)`.
    ///
    /// An existing entry for the same key has its quantity replaced; otherwise
    /// a new entry is inserted.
    pub fn upsert_production_entry(
        &mut self,
        new_entry: NewProductionEntry,
    ) -> EngineResult<ProductionEntry> {
        new_entry.validate()?;
        let mut entries = self.production_entries()?;

        let result = match entries
            .iter_mut()
            .find(|e| e.is_for(new_entry.date, &new_entry.stage_code))
        {
            Some(existing) => {
                existing.quantity = new_entry.quantity;
                existing.clone()
            }
            None => {
                let entry = ProductionEntry {
                    id: Uuid::new_v4().to_string(),
                    date: new_entry.date,
                    stage_code: new_entry.stage_code,
                    quantity: new_entry.quantity,
                };
                entries.push(entry.clone());
                entry
            }
        };

        let key = self.keys.production_entries_key.clone();
        self.save_list(&key, &entries)?;
        Ok(result)
    }

    /// Returns the entries recorded on `date`.
    pub fn production_entries_on(&self, date: NaiveDate) -> EngineResult<Vec<ProductionEntry>> {
        Ok(self
            .production_entries()?
            .into_iter()
            .filter(|e| e.date == date)
            .collect())
    }

    /// Returns the entries recorded in `[start, end]`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidRange`] if `start` is after `end`.
    pub fn production_entries_between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> EngineResult<Vec<ProductionEntry>> {
        check_range(start, end)?;
        Ok(self
            .production_entries()?
            .into_iter()
            .filter(|e| e.date >= start && e.date <= end)
            .collect())
    }

    /// Deletes the entry with `id`. Deleting an unknown id is a no-op.
    pub fn delete_production_entry(&mut self, id: &str) -> EngineResult<()> {
        let remaining: Vec<ProductionEntry> = self
            .production_entries()?
            .into_iter()
            .filter(|e| e.id != id)
            .collect();
        let key = self.keys.production_entries_key.clone();
        self.save_list(&key, &remaining)
    }

    // --- Supplementary data ---

    /// Returns every stored supplementary record.
    pub fn supplementary_data(&self) -> EngineResult<Vec<DailySupplementaryData>> {
        self.load_list(&self.keys.supplementary_key)
    }

    /// Merges `update` into the record for its date.
    ///
    /// Records left with no values are removed. Returns the stored record,
    /// or `None` if the update emptied it.
    pub fn apply_supplementary_update(
        &mut self,
        update: &SupplementaryUpdate,
    ) -> EngineResult<Option<DailySupplementaryData>> {
        let records = self.supplementary_data()?;

        let current = records
            .iter()
            .find(|r| r.date == update.date)
            .cloned()
            .unwrap_or_else(|| DailySupplementaryData::empty(update.date));
        let merged = current.merged(update);

        let mut updated: Vec<DailySupplementaryData> = records
            .into_iter()
            .filter(|r| r.date != update.date && !r.is_empty())
            .collect();
        let stored = if merged.is_empty() {
            None
        } else {
            updated.push(merged.clone());
            Some(merged)
        };
        updated.sort_by_key(|r| r.date);

        let key = self.keys.supplementary_key.clone();
        self.save_list(&key, &updated)?;
        Ok(stored)
    }

    /// Returns the supplementary record for `date`, if any.
    pub fn supplementary_on(&self, date: NaiveDate) -> EngineResult<Option<DailySupplementaryData>> {
        Ok(self
            .supplementary_data()?
            .into_iter()
            .find(|r| r.date == date))
    }

    /// Returns the supplementary records in `[start, end]`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidRange`] if `start` is after `end`.
    pub fn supplementary_between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> EngineResult<Vec<DailySupplementaryData>> {
        check_range(start, end)?;
        Ok(self
            .supplementary_data()?
            .into_iter()
            .filter(|r| r.date >= start && r.date <= end)
            .collect())
    }

    /// Removes every stored collection.
    pub fn clear_all(&mut self) -> EngineResult<()> {
        self.store.delete(&self.keys.quotas_key)?;
        self.store.delete(&self.keys.production_entries_key)?;
        self.store.delete(&self.keys.supplementary_key)?;
        debug!("Cleared all stored collections");
        Ok(())
    }
}

fn check_range(start: NaiveDate, end: NaiveDate) -> EngineResult<()> {
    if start > end {
        return Err(EngineError::InvalidRange { start, end });
    }
    Ok(())
}
