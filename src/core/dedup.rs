use crate::domain::model::Record;
use std::collections::HashSet;

/// 依 `id` 去除重複紀錄，保留第一次出現的那筆
#[derive(Debug, Default)]
pub struct Deduplicator {
    seen: HashSet<String>,
    records: Vec<Record>,
    duplicates: usize,
}

impl Deduplicator {
    pub fn new() -> Self {
        Self::default()
    }

    /// 回傳 `true` 表示紀錄被保留
    pub fn push(&mut self, record: Record) -> bool {
        if !self.seen.insert(record.id.clone()) {
            self.duplicates += 1;
            return false;
        }
        self.records.push(record);
        true
    }

    pub fn duplicates(&self) -> usize {
        self.duplicates
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn finish(self) -> Vec<Record> {
        self.records
    }
}

impl Extend<Record> for Deduplicator {
    fn extend<I: IntoIterator<Item = Record>>(&mut self, iter: I) {
        for record in iter {
            self.push(record);
        }
    }
}

pub fn dedup_by_id<I: IntoIterator<Item = Record>>(records: I) -> Vec<Record> {
    let mut deduplicator = Deduplicator::new();
    deduplicator.extend(records);
    deduplicator.finish()
}
