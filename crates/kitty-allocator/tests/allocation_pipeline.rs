use kitty_allocator::workflows::allocation::{
    allocate, normalize, score, AllocationEngine, AllocationError, AllocationRequest, RawAgent,
    ScoredAgent, Weights,
};

fn agent(id: &str, performance: f64, seniority: f64, target: f64, clients: f64) -> RawAgent {
    RawAgent {
        id: id.to_string(),
        performance_score: performance,
        seniority_months: seniority,
        target_achieved_percent: target,
        active_clients: clients,
    }
}

fn weights() -> Weights {
    Weights {
        performance: 0.4,
        seniority: 0.3,
        target: 0.2,
        clients: 0.1,
    }
}

fn roster() -> Vec<RawAgent> {
    vec![
        agent("A1", 92.0, 36.0, 88.0, 14.0),
        agent("A2", 61.0, 4.0, 45.0, 3.0),
        agent("A3", 77.0, 120.0, 95.0, 22.0),
        agent("A4", 15.0, 0.0, 10.0, 0.0),
        agent("A5", 84.0, 58.0, 71.0, 9.0),
    ]
}

// (kitty, min, max)
const SCENARIOS: &[(i64, i64, i64)] = &[
    (10_000, 500, 5_000),
    (10_000, 0, 2_000),
    (10_000, 1_000, 1_500),
    (2_500, 500, 3_000),
    (99_999, 333, 40_000),
    (7_777, 100, 1_200),
];

#[test]
fn integration_of_normalization_scoring_and_allocation() {
    let agents = vec![
        agent("A1", 80.0, 20.0, 90.0, 10.0),
        agent("A2", 60.0, 10.0, 70.0, 5.0),
    ];

    let normalized = normalize(&agents);
    let scores = score(&normalized, &weights());
    let result = allocate(&scores, 2000, 500, 1500).expect("allocation succeeds");

    assert_eq!(result.entries.len(), 2);
    assert_eq!(result.total_allocated, 2000);
    assert_eq!(result.total_discount_remaining, 0);
}

#[test]
fn allocations_conserve_the_kitty() {
    let scored = score(&normalize(&roster()), &weights());

    for &(kitty, min, max) in SCENARIOS {
        let result = allocate(&scored, kitty, min, max).expect("feasible scenario");
        let allocated: i64 = result.entries.iter().map(|entry| entry.discount).sum();

        assert_eq!(allocated, kitty, "scenario {kitty}/{min}/{max}");
        assert_eq!(result.total_allocated, kitty);
        assert_eq!(result.total_discount_remaining, 0);
    }
}

#[test]
fn bounds_hold_for_all_but_the_last_agent() {
    let scored = score(&normalize(&roster()), &weights());

    for &(kitty, min, max) in SCENARIOS {
        let result = allocate(&scored, kitty, min, max).expect("feasible scenario");
        let (_, leading) = result.entries.split_last().expect("non-empty");

        for entry in leading {
            assert!(
                entry.discount >= min && entry.discount <= max,
                "{} got {} outside [{min}, {max}]",
                entry.id,
                entry.discount
            );
        }
    }
}

#[test]
fn feasibility_gate_is_exact() {
    let scored: Vec<ScoredAgent> = (0..4)
        .map(|idx| ScoredAgent {
            id: format!("A{idx}"),
            score: 0.5,
        })
        .collect();

    assert!(allocate(&scored, 4_000, 1_000, 2_000).is_ok());
    assert!(matches!(
        allocate(&scored, 3_999, 1_000, 2_000),
        Err(AllocationError::Infeasible { agents: 4, .. })
    ));
}

#[test]
fn results_are_reproducible() {
    let scored = score(&normalize(&roster()), &weights());

    let first = allocate(&scored, 12_345, 250, 4_000).expect("allocation succeeds");
    let second = allocate(&scored, 12_345, 250, 4_000).expect("allocation succeeds");

    assert_eq!(first, second);
}

#[test]
fn engine_renders_output_contract() {
    let request = AllocationRequest {
        site_kitty: 10_000,
        sales_agents: roster(),
        min_per_agent: None,
        max_per_agent: None,
    };

    let report = AllocationEngine::new(weights())
        .run(&request)
        .expect("report builds");
    let json: serde_json::Value =
        serde_json::from_str(&report.to_pretty_json().expect("serializes")).expect("valid json");

    let allocations = json["allocations"].as_array().expect("allocations array");
    assert_eq!(allocations.len(), 5);
    assert_eq!(allocations[0]["id"], "A1");
    assert!(allocations[0]["assignedDiscount"].is_i64());
    assert!(allocations[0]["justification"]
        .as_str()
        .expect("justification string")
        .starts_with("Consistently "));
    assert_eq!(json["summary"]["totalKitty"], 10_000);
    assert_eq!(json["summary"]["totalAllocated"], 10_000);
    assert_eq!(json["summary"]["remainingKitty"], 0);
    assert_eq!(json["summary"]["averageDiscount"], 2_000);
}
