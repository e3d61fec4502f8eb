use std::cmp::Ordering;

use shared::domain::{Record, SortField, SortSpec};
use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

type RecordComparator = fn(&Record, &Record) -> Ordering;

/// Ascending comparator for a field. Mirrors `SortField::key_kind`: ids compare
/// as numbers, everything else as folded text.
fn ascending(field: SortField) -> RecordComparator {
    match field {
        SortField::Id => |a: &Record, b: &Record| a.id.cmp(&b.id),
        SortField::Name => |a: &Record, b: &Record| compare_text(&a.name, &b.name),
        SortField::Username => |a: &Record, b: &Record| compare_text(&a.username, &b.username),
        SortField::Email => |a: &Record, b: &Record| compare_text(&a.email, &b.email),
        SortField::Phone => |a: &Record, b: &Record| compare_text(&a.phone, &b.phone),
    }
}

/// Case-folded collation: base letters first with accents stripped, so "Émile"
/// sorts among the e's; accents only break ties ("e" before "é").
pub fn compare_text(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| folded(a).cmp(folded(b)))
}

fn base_letters(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

fn folded(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd().flat_map(char::to_lowercase)
}

pub fn compare(a: &Record, b: &Record, spec: SortSpec) -> Ordering {
    spec.direction.apply(ascending(spec.field)(a, b))
}

/// Stable in-place sort.
pub fn sort(records: &mut [Record], spec: SortSpec) {
    let cmp = ascending(spec.field);
    records.sort_by(|a, b| spec.direction.apply(cmp(a, b)));
}

pub fn sorted(mut records: Vec<Record>, spec: SortSpec) -> Vec<Record> {
    sort(&mut records, spec);
    records
}
