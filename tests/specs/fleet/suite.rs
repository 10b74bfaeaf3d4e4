//! Suite specs
//!
//! Checks run in order and a failing check does not stop the rest.

use crate::prelude::*;

#[test]
fn suite_runs_every_check_after_a_failure() {
    let cluster = Cluster::fake();
    cluster.faked().set_machines(&[]).unwrap();
    let fleet = cluster.client();

    let report = Suite::new(&fleet, ThreadSleeper, cluster.policy()).run(&Check::ALL);

    assert!(!report.passed());
    let summary: Vec<(String, bool)> = report
        .outcomes
        .iter()
        .map(|o| (o.check.to_string(), o.passed))
        .collect();
    similar_asserts::assert_eq!(
        summary,
        vec![
            ("list-machines".to_string(), false),
            ("run-service".to_string(), true),
        ]
    );
}

#[test]
fn suite_passes_on_healthy_cluster() {
    let cluster = Cluster::fake();
    cluster.faked().set_delay(1).unwrap();
    let fleet = cluster.client();

    let report = Suite::new(&fleet, ThreadSleeper, cluster.policy())
        .with_unit_name("smoke.service")
        .run(&Check::ALL);

    assert!(report.passed(), "report: {:?}", report);
    assert!(cluster
        .faked()
        .calls()
        .unwrap()
        .contains(&"destroy smoke.service".to_string()));
}
