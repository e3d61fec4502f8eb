use rand::{seq::SliceRandom, Rng};
use shared::domain::Record;

/// Visual randomization only; not suitable where a fair shuffle matters.
pub fn shuffle<R: Rng + ?Sized>(records: &mut [Record], rng: &mut R) {
    records.shuffle(rng);
}

pub fn shuffled<R: Rng + ?Sized>(mut records: Vec<Record>, rng: &mut R) -> Vec<Record> {
    shuffle(&mut records, rng);
    records
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};
    use shared::domain::RecordId;

    use super::*;

    fn records(count: i64) -> Vec<Record> {
        (1..=count)
            .map(|id| Record {
                id: RecordId(id),
                name: format!("n{id}"),
                username: format!("u{id}"),
                email: format!("e{id}@x.com"),
                phone: String::new(),
            })
            .collect()
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let mut rng = StdRng::seed_from_u64(7);
        for count in [0, 1, 2, 10] {
            let input = records(count);
            let mut ids: Vec<_> = shuffled(input.clone(), &mut rng)
                .iter()
                .map(|r| r.id)
                .collect();
            ids.sort();
            assert_eq!(ids, input.iter().map(|r| r.id).collect::<Vec<_>>());
        }
    }

    #[test]
    fn shuffle_eventually_changes_order() {
        let mut rng = StdRng::seed_from_u64(42);
        let input = records(10);
        let changed = (0..20).any(|_| shuffled(input.clone(), &mut rng) != input);
        assert!(changed);
    }
}
