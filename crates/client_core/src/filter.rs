use shared::domain::Record;

/// Records whose name or email contains `query`, ignoring case, in input order.
/// An empty query keeps everything.
pub fn filter(records: &[Record], query: &str) -> Vec<Record> {
    if query.is_empty() {
        return records.to_vec();
    }
    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|record| matches(record, &needle))
        .cloned()
        .collect()
}

/// `needle` must already be lowercased.
pub fn matches(record: &Record, needle: &str) -> bool {
    record.name.to_lowercase().contains(needle) || record.email.to_lowercase().contains(needle)
}
