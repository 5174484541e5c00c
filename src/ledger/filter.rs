use crate::ledger::entry::LedgerEntry;
use crate::ledger::period::Period;
use std::collections::HashMap;

/// Returns the entries whose derived period matches, preserving the input
/// order. The source collection is never mutated.
pub fn filter_by_period<E: LedgerEntry + Clone>(entries: &[E], period: Period) -> Vec<E> {
    entries.iter().filter(|e| e.period() == period).cloned().collect()
}

/// Returns the entries recorded anywhere in the given year, preserving the
/// input order. The yearly report totals are built over this subset.
pub fn filter_by_year<E: LedgerEntry + Clone>(entries: &[E], year: i32) -> Vec<E> {
    entries.iter().filter(|e| e.period().year == year).cloned().collect()
}

/// Groups entries under their `"{year} {month}"` key. Keys appear in the
/// order their first entry was encountered, and entries keep their input
/// order within each group; list views rely on both.
pub fn group_by_period<E: LedgerEntry + Clone>(entries: &[E]) -> Vec<(String, Vec<E>)> {
    let mut groups: Vec<(String, Vec<E>)> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for entry in entries {
        let key = entry.period().to_string();
        match positions.get(&key) {
            Some(&at) => groups[at].1.push(entry.clone()),
            None => {
                positions.insert(key.clone(), groups.len());
                groups.push((key, vec![entry.clone()]));
            }
        }
    }

    groups
}

/// Case-insensitive substring match over one field of each entry. An empty
/// query matches everything.
pub fn filter_by_text<E: Clone>(entries: &[E], query: &str, field: impl Fn(&E) -> &str) -> Vec<E> {
    if query.is_empty() {
        return entries.to_vec();
    }

    let needle = query.to_lowercase();
    entries.iter().filter(|e| field(e).to_lowercase().contains(&needle)).cloned().collect()
}
