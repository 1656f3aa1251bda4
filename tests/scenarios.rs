//! End-to-end scenarios through the public entry points.

use u_knapsack::dispatch::{DispatchConfig, Dispatcher, Strategy};
use u_knapsack::dp::DpConfig;
use u_knapsack::generate::{generate, InstanceConfig};
use u_knapsack::greedy::GreedySolver;
use u_knapsack::order::{parse_orders, Order, RawOrder};
use u_knapsack::{maximum_value, maximum_value_with, KnapsackError, Solver};

#[test]
fn canonical_scenario_all_strategies() {
    let orders = [
        Order::new(10u32, 5),
        Order::new(40, 4),
        Order::new(30, 6),
        Order::new(50, 3),
    ];
    for strategy in [Strategy::Auto, Strategy::Exact, Strategy::BruteForce] {
        let config = DispatchConfig::default().with_strategy(strategy);
        assert_eq!(maximum_value_with(&orders, 10, &config).unwrap(), 90);
    }
}

#[test]
fn greedy_counterexample() {
    let orders = [
        Order::new(60.0_f64, 10),
        Order::new(100.0, 20),
        Order::new(120.0, 30),
    ];
    let exact = maximum_value(&orders, 50).unwrap();
    let greedy = GreedySolver::default().solve(&orders, 50).unwrap();
    assert!((exact - 220.0).abs() < 1e-9);
    assert!((greedy - 160.0).abs() < 1e-9);
}

#[test]
fn large_instance_goes_greedy() {
    let inst = generate(&InstanceConfig::new(3000).with_seed(11)).unwrap();
    let dispatcher = Dispatcher::default();
    assert_eq!(dispatcher.choose(&inst.orders, inst.capacity), Strategy::Greedy);

    let sel = dispatcher.select(&inst.orders, inst.capacity).unwrap();
    assert!(sel.weight <= inst.capacity);
    assert!(sel.value > 0);
}

#[test]
fn generated_instances_exact_beats_greedy() {
    for seed in 0..5 {
        let inst = generate(&InstanceConfig::new(200).with_seed(seed)).unwrap();
        let exact = maximum_value(&inst.orders, inst.capacity).unwrap();
        let config = DispatchConfig::default().with_strategy(Strategy::Greedy);
        let greedy = maximum_value_with(&inst.orders, inst.capacity, &config).unwrap();
        assert!(greedy <= exact, "seed {seed}: greedy {greedy} > exact {exact}");
    }
}

#[test]
fn forced_exact_surfaces_resource_limit() {
    let inst = generate(&InstanceConfig::new(100)).unwrap();
    let config = DispatchConfig::default()
        .with_strategy(Strategy::Exact)
        .with_dp(DpConfig::default().with_max_table_cells(1000));
    let err = maximum_value_with(&inst.orders, inst.capacity, &config).unwrap_err();
    assert!(matches!(err, KnapsackError::TableTooLarge { limit: 1000, .. }));
}

#[test]
fn raw_records_are_validated() {
    let raw = [RawOrder::new(5.0, 1.0), RawOrder::new(3.0, -2.0)];
    let err = parse_orders(&raw).unwrap_err();
    assert_eq!(
        err,
        KnapsackError::InvalidWeight {
            index: 1,
            weight: -2.0
        }
    );
}

#[test]
fn integer_and_float_values_agree() {
    let inst = generate(&InstanceConfig::new(60).with_seed(5)).unwrap();
    let as_float: Vec<Order<f64>> = inst
        .orders
        .iter()
        .map(|o| Order::new(o.value as f64, o.weight))
        .collect();
    let int_best = maximum_value(&inst.orders, inst.capacity).unwrap();
    let float_best = maximum_value(&as_float, inst.capacity).unwrap();
    assert!((float_best - int_best as f64).abs() < 1e-6);
}
