//! Full and incremental fitness evaluation.
//!
//! `swap_delta` is the load-bearing contract of the crate: for every
//! instance and every pair of locations it must predict exactly what
//! `evaluate` returns on the swapped solution. All local-search runners
//! rely on it instead of re-evaluating from scratch.

use super::QapInstance;

/// Computes the total flow-weighted distance of a complete assignment:
/// the sum over all ordered location pairs (i, j) of
/// `flow[solution[i]][solution[j]] * distance[i][j]`.
///
/// The caller must pass a valid permutation of `0..n`; this is not
/// re-checked here.
pub fn evaluate(instance: &QapInstance, solution: &[usize]) -> u64 {
    let n = instance.size();
    let mut total = 0u64;
    for i in 0..n {
        for j in 0..n {
            total += instance.flow(solution[i], solution[j]) * instance.distance(i, j);
        }
    }
    total
}

/// Computes, in O(n), the fitness change of exchanging the facilities at
/// locations `i` and `j`.
///
/// Sums both directions of every cost term involving `i` or `j` against
/// the remaining locations (the matrices may be asymmetric), corrects the
/// diagonal entries, and counts the direct i–j interaction once so
/// nothing is double-counted. Requires `i != j`.
pub fn swap_delta(instance: &QapInstance, solution: &[usize], i: usize, j: usize) -> i64 {
    debug_assert!(i != j, "swap requires two distinct locations");
    let n = instance.size();
    let (a, b) = (solution[i], solution[j]);

    let mut delta = 0i64;
    for k in 0..n {
        if k == i || k == j {
            continue;
        }
        let c = solution[k];
        delta += (instance.flow(b, c) as i64 - instance.flow(a, c) as i64)
            * (instance.distance(i, k) as i64 - instance.distance(j, k) as i64);
        delta += (instance.flow(c, b) as i64 - instance.flow(c, a) as i64)
            * (instance.distance(k, i) as i64 - instance.distance(k, j) as i64);
    }
    delta += (instance.flow(b, b) as i64 - instance.flow(a, a) as i64)
        * (instance.distance(i, i) as i64 - instance.distance(j, j) as i64);
    delta += (instance.flow(b, a) as i64 - instance.flow(a, b) as i64)
        * (instance.distance(i, j) as i64 - instance.distance(j, i) as i64);
    delta
}

/// Fitness after hypothetically exchanging the facilities at locations
/// `i` and `j`, given the current fitness. Requires `i != j`.
pub fn swap_fitness(
    instance: &QapInstance,
    solution: &[usize],
    current_fitness: u64,
    i: usize,
    j: usize,
) -> u64 {
    (current_fitness as i64 + swap_delta(instance, solution, i, j)) as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::random_solution;
    use crate::random::create_rng;
    use rand::Rng;

    fn asymmetric_instance() -> QapInstance {
        // Asymmetric matrices with non-zero diagonals to exercise every
        // correction term in swap_delta.
        QapInstance::new(
            4,
            vec![
                vec![2, 1, 7, 3],
                vec![4, 0, 5, 9],
                vec![2, 8, 1, 6],
                vec![3, 5, 6, 0],
            ],
            vec![
                vec![1, 9, 2, 4],
                vec![3, 0, 6, 5],
                vec![8, 4, 3, 1],
                vec![2, 7, 5, 0],
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_evaluate_identity_assignment() {
        let instance = QapInstance::new(
            2,
            vec![vec![0, 2], vec![3, 0]],
            vec![vec![0, 5], vec![4, 0]],
        )
        .unwrap();
        // F[0][1]*D[0][1] + F[1][0]*D[1][0] = 2*5 + 3*4
        assert_eq!(evaluate(&instance, &[0, 1]), 22);
    }

    #[test]
    fn test_evaluate_includes_diagonal_terms() {
        let instance = QapInstance::new(
            2,
            vec![vec![7, 0], vec![0, 2]],
            vec![vec![3, 0], vec![0, 5]],
        )
        .unwrap();
        // F[0][0]*D[0][0] + F[1][1]*D[1][1] = 7*3 + 2*5
        assert_eq!(evaluate(&instance, &[0, 1]), 31);
    }

    #[test]
    fn test_swap_delta_matches_reevaluation_all_pairs() {
        let instance = asymmetric_instance();
        let solution = vec![2, 0, 3, 1];
        let current = evaluate(&instance, &solution);

        for i in 0..4 {
            for j in 0..4 {
                if i == j {
                    continue;
                }
                let mut swapped = solution.clone();
                swapped.swap(i, j);
                assert_eq!(
                    swap_fitness(&instance, &solution, current, i, j),
                    evaluate(&instance, &swapped),
                    "delta mismatch for swap ({i}, {j})"
                );
            }
        }
    }

    #[test]
    fn test_swap_delta_random_instances() {
        let mut rng = create_rng(Some(42));
        for n in 2..12 {
            let flow: Vec<Vec<u64>> = (0..n)
                .map(|_| (0..n).map(|_| rng.random_range(0..100)).collect())
                .collect();
            let distance: Vec<Vec<u64>> = (0..n)
                .map(|_| (0..n).map(|_| rng.random_range(0..100)).collect())
                .collect();
            let instance = QapInstance::new(n, flow, distance).unwrap();
            let solution = random_solution(n, &mut rng);
            let current = evaluate(&instance, &solution);

            for _ in 0..20 {
                let i = rng.random_range(0..n);
                let mut j = rng.random_range(0..n);
                while j == i {
                    j = rng.random_range(0..n);
                }
                let mut swapped = solution.clone();
                swapped.swap(i, j);
                assert_eq!(
                    swap_fitness(&instance, &solution, current, i, j),
                    evaluate(&instance, &swapped)
                );
            }
        }
    }

    #[test]
    fn test_evaluate_is_pure() {
        let instance = asymmetric_instance();
        let solution = vec![3, 1, 0, 2];
        assert_eq!(evaluate(&instance, &solution), evaluate(&instance, &solution));
    }
}
