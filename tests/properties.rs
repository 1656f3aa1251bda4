//! Property tests across all solvers.

use proptest::prelude::*;
use u_knapsack::brute::BruteForceSolver;
use u_knapsack::dp::{DpConfig, FillOrder, MemoizedDpSolver};
use u_knapsack::greedy::{GreedyConfig, GreedySolver, TieBreaker};
use u_knapsack::order::{Order, Selection};
use u_knapsack::Solver;

fn orders_strategy(max_len: usize) -> impl Strategy<Value = Vec<Order<u32>>> {
    prop::collection::vec((0u32..100, 0usize..30), 0..=max_len)
        .prop_map(|pairs| pairs.into_iter().map(|(v, w)| Order::new(v, w)).collect())
}

fn exact() -> MemoizedDpSolver {
    MemoizedDpSolver::default()
}

fn bottom_up() -> MemoizedDpSolver {
    MemoizedDpSolver::new(DpConfig::default().with_fill(FillOrder::BottomUp))
}

fn assert_consistent(orders: &[Order<u32>], capacity: usize, sel: &Selection<u32>) {
    assert!(sel.weight <= capacity, "infeasible selection {sel:?}");
    assert!(sel.indices.windows(2).all(|w| w[0] < w[1]));
    let value: u32 = sel.indices.iter().map(|&i| orders[i].value).sum();
    let weight: usize = sel.indices.iter().map(|&i| orders[i].weight).sum();
    assert_eq!(value, sel.value);
    assert_eq!(weight, sel.weight);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn dp_matches_brute_force(orders in orders_strategy(12), capacity in 0usize..80) {
        let oracle = BruteForceSolver.solve(&orders, capacity).unwrap();
        prop_assert_eq!(exact().solve(&orders, capacity).unwrap(), oracle);
        prop_assert_eq!(bottom_up().solve(&orders, capacity).unwrap(), oracle);
    }

    #[test]
    fn fill_orders_agree(orders in orders_strategy(25), capacity in 0usize..150) {
        let lazy = exact().select(&orders, capacity).unwrap();
        let eager = bottom_up().select(&orders, capacity).unwrap();
        prop_assert_eq!(&lazy, &eager);

        let lazy_table = exact().fill_table(&orders, capacity).unwrap();
        let eager_table = bottom_up().fill_table(&orders, capacity).unwrap();
        prop_assert!(lazy_table.computed_cells() <= eager_table.computed_cells());
    }

    #[test]
    fn selections_are_feasible(orders in orders_strategy(12), capacity in 0usize..80) {
        assert_consistent(&orders, capacity, &exact().select(&orders, capacity).unwrap());
        assert_consistent(&orders, capacity, &BruteForceSolver.select(&orders, capacity).unwrap());
        let greedy = GreedySolver::default().select(&orders, capacity).unwrap();
        assert_consistent(&orders, capacity, &greedy);
    }

    #[test]
    fn monotone_in_capacity(orders in orders_strategy(20), w1 in 0usize..100, extra in 0usize..50) {
        let low = exact().solve(&orders, w1).unwrap();
        let high = exact().solve(&orders, w1 + extra).unwrap();
        prop_assert!(low <= high);
    }

    #[test]
    fn monotone_in_orders(
        orders in orders_strategy(20),
        value in 0u32..100,
        weight in 0usize..30,
        capacity in 0usize..100
    ) {
        let before = exact().solve(&orders, capacity).unwrap();
        let mut more = orders.clone();
        more.push(Order::new(value, weight));
        prop_assert!(exact().solve(&more, capacity).unwrap() >= before);
    }

    #[test]
    fn infeasible_orders_ignored(
        orders in orders_strategy(20),
        capacity in 0usize..60,
        value in 0u32..1000,
        excess in 1usize..50
    ) {
        let mut with_heavy = orders.clone();
        with_heavy.insert(0, Order::new(value, capacity + excess));
        prop_assert_eq!(
            exact().solve(&with_heavy, capacity).unwrap(),
            exact().solve(&orders, capacity).unwrap()
        );
        prop_assert_eq!(
            GreedySolver::default().solve(&with_heavy, capacity).unwrap(),
            GreedySolver::default().solve(&orders, capacity).unwrap()
        );
    }

    #[test]
    fn greedy_is_lower_bound(orders in orders_strategy(30), capacity in 0usize..200) {
        let optimum = exact().solve(&orders, capacity).unwrap();
        for tb in [TieBreaker::PreserveOrder, TieBreaker::LighterFirst, TieBreaker::HeavierFirst] {
            let greedy = GreedySolver::new(GreedyConfig::default().with_tie_breaker(tb));
            prop_assert!(greedy.solve(&orders, capacity).unwrap() <= optimum);
        }
    }

    #[test]
    fn deterministic(orders in orders_strategy(30), capacity in 0usize..200) {
        prop_assert_eq!(
            exact().select(&orders, capacity).unwrap(),
            exact().select(&orders, capacity).unwrap()
        );
        prop_assert_eq!(
            GreedySolver::default().select(&orders, capacity).unwrap(),
            GreedySolver::default().select(&orders, capacity).unwrap()
        );
    }

    #[test]
    fn empty_orders_yield_zero(capacity in 0usize..1000) {
        let empty: Vec<Order<u32>> = Vec::new();
        prop_assert_eq!(exact().solve(&empty, capacity).unwrap(), 0);
        prop_assert_eq!(BruteForceSolver.solve(&empty, capacity).unwrap(), 0);
        prop_assert_eq!(GreedySolver::default().solve(&empty, capacity).unwrap(), 0);
    }

    #[test]
    fn zero_capacity_yields_zero(orders in orders_strategy(20)) {
        // Only weightless orders fit an empty payload.
        let positive: Vec<Order<u32>> = orders.into_iter().filter(|o| o.weight > 0).collect();
        prop_assert_eq!(exact().solve(&positive, 0).unwrap(), 0);
        prop_assert_eq!(BruteForceSolver.solve(&positive, 0).unwrap(), 0);
        prop_assert_eq!(GreedySolver::default().solve(&positive, 0).unwrap(), 0);
    }
}
