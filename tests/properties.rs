use proptest::prelude::*;

use u_tour::models::{Algorithm, Location, Tour};
use u_tour::solver::solver_for;
use u_tour::validation::validate_route_against;
use u_tour::{brute_force, held_karp, DistanceTable, Error};

/// A random instance: `n` locations, one cost per unordered pair (in
/// `(i, j)`, `i < j` order), and a home index.
#[derive(Debug, Clone)]
struct Instance {
    locations: Vec<Location>,
    costs: Vec<f64>,
    home: usize,
}

impl Instance {
    fn pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let n = self.locations.len();
        (0..n).flat_map(move |i| ((i + 1)..n).map(move |j| (i, j)))
    }

    fn home(&self) -> &Location {
        &self.locations[self.home]
    }

    /// Table holding only the `(i, j)` ordering of each pair.
    fn one_sided(&self) -> DistanceTable {
        let mut table = DistanceTable::new();
        for ((i, j), &c) in self.pairs().zip(&self.costs) {
            table.insert(self.locations[i].clone(), self.locations[j].clone(), c);
        }
        table
    }

    fn symmetric(&self) -> DistanceTable {
        let mut table = DistanceTable::new();
        for ((i, j), &c) in self.pairs().zip(&self.costs) {
            table.insert_symmetric(self.locations[i].clone(), self.locations[j].clone(), c);
        }
        table
    }

    fn solve(&self, algorithm: Algorithm, table: &DistanceTable) -> Tour {
        solver_for(algorithm)
            .solve(&self.locations, table, self.home())
            .expect("complete table")
    }
}

fn instance_with<C>(max_n: usize, cost: C) -> impl Strategy<Value = Instance>
where
    C: Strategy<Value = f64> + Clone,
{
    (1..=max_n).prop_flat_map(move |n| {
        let pairs = n * (n - 1) / 2;
        (
            proptest::collection::vec(cost.clone(), pairs),
            0..n,
            Just(n),
        )
            .prop_map(|(costs, home, n)| Instance {
                locations: (0..n).map(|i| Location::new(format!("L{i}"))).collect(),
                costs,
                home,
            })
    })
}

/// Whole-number costs.
fn instance(max_n: usize) -> impl Strategy<Value = Instance> {
    instance_with(max_n, (1u32..100).prop_map(f64::from))
}

/// Two-decimal costs, as the scenario generator produces. Sums of these
/// round differently depending on the order they are added in.
fn fractional_instance(max_n: usize) -> impl Strategy<Value = Instance> {
    instance_with(max_n, (1u32..10000).prop_map(|c| f64::from(c) / 100.0))
}

proptest! {
    #[test]
    fn every_solver_returns_a_valid_consistent_tour(inst in instance(7)) {
        let table = inst.symmetric();
        for algorithm in Algorithm::ALL {
            let tour = inst.solve(algorithm, &table);
            prop_assert!(validate_route_against(tour.route(), inst.home(), &inst.locations).is_ok());
            prop_assert_eq!(tour.route().len(), inst.locations.len() + 1);
            prop_assert_eq!(table.route_length(tour.route()), Ok(tour.length()));
        }
    }

    #[test]
    fn exact_solvers_agree_and_bound_greedy(inst in instance(7)) {
        let table = inst.symmetric();
        let bf = inst.solve(Algorithm::BruteForce, &table);
        let dp = inst.solve(Algorithm::HeldKarp, &table);
        let nn = inst.solve(Algorithm::NearestNeighbor, &table);
        prop_assert_eq!(bf.length(), dp.length());
        prop_assert!(bf.length() <= nn.length());
    }

    #[test]
    fn exact_solvers_agree_exactly_on_fractional_costs(inst in fractional_instance(8)) {
        let table = inst.symmetric();
        let bf = inst.solve(Algorithm::BruteForce, &table);
        let dp = inst.solve(Algorithm::HeldKarp, &table);
        let nn = inst.solve(Algorithm::NearestNeighbor, &table);
        prop_assert_eq!(bf.length(), dp.length());
        prop_assert!(bf.length() <= nn.length());
        for tour in [&bf, &dp, &nn] {
            prop_assert_eq!(table.route_length(tour.route()), Ok(tour.length()));
        }
    }

    #[test]
    fn held_karp_delegates_for_three_or_fewer(inst in instance(3)) {
        let table = inst.symmetric();
        let bf = brute_force(&inst.locations, &table, inst.home()).expect("complete table");
        let dp = held_karp(&inst.locations, &table, inst.home()).expect("complete table");
        prop_assert_eq!(bf, dp);
    }

    #[test]
    fn one_sided_entries_are_enough(inst in instance(6)) {
        let one_sided = inst.one_sided();
        let symmetric = inst.symmetric();
        for algorithm in Algorithm::ALL {
            prop_assert_eq!(
                inst.solve(algorithm, &one_sided),
                inst.solve(algorithm, &symmetric)
            );
        }
    }

    #[test]
    fn a_missing_pair_fails_every_solver(inst in instance(6), pick in any::<prop::sample::Index>()) {
        prop_assume!(inst.locations.len() >= 2);
        let pairs: Vec<_> = inst.pairs().collect();
        let (mi, mj) = pairs[pick.index(pairs.len())];

        let mut table = DistanceTable::new();
        for ((i, j), &c) in inst.pairs().zip(&inst.costs) {
            if (i, j) != (mi, mj) {
                table.insert_symmetric(inst.locations[i].clone(), inst.locations[j].clone(), c);
            }
        }

        for algorithm in Algorithm::ALL {
            let err = solver_for(algorithm)
                .solve(&inst.locations, &table, inst.home())
                .unwrap_err();
            prop_assert!(matches!(err, Error::UndefinedDistance { .. }), "expected UndefinedDistance, got {:?}", err);
            prop_assert!(err.is_undefined_between(&inst.locations[mi], &inst.locations[mj]));
        }
    }
}
