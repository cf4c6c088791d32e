//! Aggregates computed over a full record sequence.

use std::collections::HashSet;

use serde::Serialize;
use utoipa::ToSchema;

/// A closed enumeration whose members can all be listed
pub trait ClosedSet: Copy + Eq + 'static {
    const ALL: &'static [Self];
}

/// Number of records carrying one member of a closed set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Tally<K> {
    pub value: K,
    pub count: usize,
}

/// Count records per member of `K`. Every member appears, in declaration
/// order, including those with a zero count.
pub fn count_by<T, K, F>(records: &[T], key: F) -> Vec<Tally<K>>
where
    K: ClosedSet,
    F: Fn(&T) -> K,
{
    K::ALL
        .iter()
        .map(|member| Tally {
            value: *member,
            count: records.iter().filter(|r| key(r) == *member).count(),
        })
        .collect()
}

/// Count of one member from a tally list, zero when absent
pub fn tally_of<K: PartialEq>(tallies: &[Tally<K>], value: K) -> usize {
    tallies
        .iter()
        .find(|t| t.value == value)
        .map(|t| t.count)
        .unwrap_or(0)
}

pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Mean rounded to one decimal place; `None` when there is nothing to average
pub fn average_one_decimal<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = f64>,
{
    let (sum, count) = values
        .into_iter()
        .fold((0.0_f64, 0_usize), |(sum, count), v| (sum + v, count + 1));

    if count == 0 {
        return None;
    }
    Some(round_one_decimal(sum / count as f64))
}

/// Integer-rounded share of `part` in `total`, as a percentage. Zero when
/// `total` is zero.
pub fn percentage(part: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((part as f64 / total as f64) * 100.0).round() as u32
}

/// Distinct values in order of first appearance
pub fn distinct_in_order<'a, I>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    values
        .into_iter()
        .filter(|v| seen.insert(*v))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Light {
        Green,
        Amber,
        Red,
    }

    impl ClosedSet for Light {
        const ALL: &'static [Self] = &[Light::Green, Light::Amber, Light::Red];
    }

    #[test]
    fn test_count_by_includes_zero_counts() {
        let lights = vec![Light::Red, Light::Green, Light::Red];
        let tallies = count_by(&lights, |l| *l);

        assert_eq!(
            tallies,
            vec![
                Tally { value: Light::Green, count: 1 },
                Tally { value: Light::Amber, count: 0 },
                Tally { value: Light::Red, count: 2 },
            ]
        );
        assert_eq!(tally_of(&tallies, Light::Red), 2);
        assert_eq!(tally_of(&tallies, Light::Amber), 0);
    }

    #[test]
    fn test_average_one_decimal() {
        let ratings = [5.0, 2.0, 4.0, 1.0, 5.0];
        assert_eq!(average_one_decimal(ratings), Some(3.4));
        assert_eq!(average_one_decimal([4.8, 4.6, 4.9, 4.3, 4.7]), Some(4.7));
    }

    #[test]
    fn test_average_of_nothing_is_none() {
        assert_eq!(average_one_decimal(Vec::<f64>::new()), None);
    }

    #[test]
    fn test_percentage() {
        assert_eq!(percentage(2, 5), 40);
        assert_eq!(percentage(1, 3), 33);
        assert_eq!(percentage(2, 3), 67);
        assert_eq!(percentage(5, 5), 100);
    }

    #[test]
    fn test_percentage_of_zero_total_is_zero() {
        assert_eq!(percentage(0, 0), 0);
        assert_eq!(percentage(7, 0), 0);
    }

    #[test]
    fn test_distinct_in_order() {
        let names = distinct_in_order(["A", "B", "A", "C"]);
        assert_eq!(names, vec!["A", "B", "C"]);
        assert!(distinct_in_order(Vec::<&str>::new()).is_empty());
    }
}
