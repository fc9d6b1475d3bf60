pub use crate::generators::backtrack::powerset_backtrack;
pub use crate::generators::doubling::powerset_iterative;
pub use crate::generators::lazy::powerset_lazy;
pub use crate::generators::parallel::powerset_parallel;

pub mod backtrack;
pub mod doubling;
pub mod lazy;
pub mod parallel;

#[cfg(test)]
mod tests {

    use rand::RngExt;

    use super::*;

    fn sorted<T: Ord>(mut powerset: Vec<Vec<T>>) -> Vec<Vec<T>> {
        powerset.sort();
        powerset
    }

    #[test]
    fn test_cardinality_all_generators() {
        for n in 0..=12usize {
            let elements: Vec<u32> = (0..n as u32).collect();
            let expected = (1usize << n) - 1;

            assert_eq!(powerset_lazy(&elements).count(), expected);
            assert_eq!(powerset_backtrack(&elements).unwrap().len(), expected);
            assert_eq!(powerset_iterative(&elements).unwrap().len(), expected);
            assert_eq!(powerset_parallel(&elements).unwrap().len(), expected);
        }
    }

    #[test]
    fn test_generators_agree_as_sets() {
        let elements = vec!["1", "2", "3", "4"];
        let expected = sorted(vec![
            vec!["1"],
            vec!["2"],
            vec!["3"],
            vec!["4"],
            vec!["1", "2"],
            vec!["1", "3"],
            vec!["1", "4"],
            vec!["2", "3"],
            vec!["2", "4"],
            vec!["3", "4"],
            vec!["1", "2", "3"],
            vec!["1", "2", "4"],
            vec!["1", "3", "4"],
            vec!["2", "3", "4"],
            vec!["1", "2", "3", "4"],
        ]);

        assert_eq!(sorted(powerset_lazy(&elements).collect()), expected);
        assert_eq!(sorted(powerset_backtrack(&elements).unwrap()), expected);
        assert_eq!(sorted(powerset_iterative(&elements).unwrap()), expected);
        assert_eq!(sorted(powerset_parallel(&elements).unwrap()), expected);
    }

    #[test]
    fn test_no_empty_subset_no_duplicates() {
        let elements: Vec<u32> = (0..10).collect();

        for powerset in [
            powerset_lazy(&elements).collect::<Vec<_>>(),
            powerset_backtrack(&elements).unwrap(),
            powerset_iterative(&elements).unwrap(),
            powerset_parallel(&elements).unwrap(),
        ] {
            assert!(powerset.iter().all(|subset| !subset.is_empty()));

            let deduplicated = sorted(powerset.clone());
            let mut unique = deduplicated.clone();
            unique.dedup();
            assert_eq!(deduplicated, unique);
        }
    }

    #[test]
    fn test_randomized_agreement() {
        let mut rng = rand::rng();

        for _ in 0..25 {
            let length = rng.random_range(0..=10usize);
            let elements: Vec<u32> = (0..length)
                .map(|_| rng.random_range(0..1000u32))
                .collect();

            let reference = sorted(powerset_iterative(&elements).unwrap());
            assert_eq!(sorted(powerset_lazy(&elements).collect()), reference);
            assert_eq!(sorted(powerset_backtrack(&elements).unwrap()), reference);
            assert_eq!(sorted(powerset_parallel(&elements).unwrap()), reference);
        }
    }

    #[test]
    fn test_generators_do_not_mutate_input() {
        let elements = vec!["a", "b", "c"];

        let first = sorted(powerset_backtrack(&elements).unwrap());
        let second = sorted(powerset_backtrack(&elements).unwrap());
        assert_eq!(first, second);
        assert_eq!(elements, vec!["a", "b", "c"]);

        let first: Vec<_> = powerset_lazy(&elements).collect();
        let second: Vec<_> = powerset_lazy(&elements).collect();
        assert_eq!(first, second);
        assert_eq!(elements, vec!["a", "b", "c"]);
    }
}
