//! Unit lifecycle specs
//!
//! fleetctl can start, unload and destroy a unit file, and the cluster
//! converges to each state within the retry budget.

use crate::prelude::*;
use serial_test::serial;

const SERVICE: &str = "hello.service";

#[test]
#[serial(cluster)]
fn fleetctl_run_service() {
    let cluster = Cluster::from_env();
    let file = UnitFile::create(SERVICE, HELLO_SERVICE).unwrap();
    let fleet = cluster.client();
    let _destroy = DestroyOnDrop::new(&fleet, file.path().to_string_lossy());

    cluster
        .fleetctl()
        .args(&["start", "--no-block"])
        .arg_path(file.path())
        .passes();
    assert!(
        cluster.wait_for_unit(SERVICE, UnitState::Active),
        "Failed checking {} is active",
        SERVICE
    );

    cluster
        .fleetctl()
        .args(&["unload", "--no-block", SERVICE])
        .passes();
    assert!(
        cluster.wait_for_unit(SERVICE, UnitState::Inactive),
        "Failed checking {} is inactive",
        SERVICE
    );

    cluster.fleetctl().args(&["destroy", SERVICE]).passes();
    assert!(
        cluster.wait_for_unit(SERVICE, UnitState::Absent),
        "Failed checking {} is nonexist",
        SERVICE
    );
}

#[test]
#[serial(cluster)]
fn run_service_check_passes() {
    let cluster = Cluster::from_env();
    checks::run_service(&cluster.client(), ThreadSleeper, &cluster.policy(), SERVICE).unwrap();
    cluster
        .fleetctl()
        .args(&["list-units", "--no-legend"])
        .passes()
        .stdout_lacks(SERVICE);
}

#[test]
fn run_service_tolerates_convergence_delay() {
    let cluster = Cluster::fake();
    cluster.faked().set_delay(3).unwrap();

    checks::run_service(&cluster.client(), ThreadSleeper, &cluster.policy(), SERVICE).unwrap();
    assert!(cluster.faked().units().unwrap().is_empty());
}

#[test]
fn run_service_gives_up_on_stuck_cluster() {
    let cluster = Cluster::fake();
    cluster.faked().set_delay(100).unwrap();

    let err = checks::run_service(&cluster.client(), ThreadSleeper, &cluster.policy(), SERVICE)
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "hello.service did not become active after 5 attempts (last observed: absent)"
    );
    let list_calls = cluster
        .faked()
        .calls()
        .unwrap()
        .iter()
        .filter(|c| c.starts_with("list-units"))
        .count();
    assert_eq!(list_calls, 5);
}

#[test]
fn run_service_destroys_unit_when_unload_fails() {
    let cluster = Cluster::fake();
    cluster.faked().fail("unload", "Error unloading units").unwrap();

    let err = checks::run_service(&cluster.client(), ThreadSleeper, &cluster.policy(), SERVICE)
        .unwrap_err();
    assert!(matches!(err, CheckError::Command { step: "unload", .. }));

    let calls = cluster.faked().calls().unwrap();
    let last = calls.last().unwrap();
    assert!(
        last.starts_with("destroy /") && last.ends_with("/hello.service"),
        "calls: {:?}",
        calls
    );
    // The destroy guard only asks; the unit disappears on the next listing.
    cluster
        .fleetctl()
        .args(&["list-units", "--no-legend"])
        .passes()
        .stdout_lacks(SERVICE);
}

#[test]
fn run_service_removes_unit_file_on_failure() {
    let cluster = Cluster::fake();
    cluster.faked().fail("start", "Error creating units").unwrap();

    let err = checks::run_service(&cluster.client(), ThreadSleeper, &cluster.policy(), SERVICE)
        .unwrap_err();
    assert!(matches!(err, CheckError::Command { step: "start", .. }));

    let calls = cluster.faked().calls().unwrap();
    let staged = calls[0].trim_start_matches("start --no-block ");
    assert!(!std::path::Path::new(staged).exists());
}

#[test]
fn start_without_unit_file_fails() {
    let cluster = Cluster::fake();
    cluster.faked().fail("start", "Unable to find unit").unwrap();

    let err = cluster
        .fleetctl()
        .args(&["start", "--no-block", "/nonexistent/hello.service"])
        .fails();
    assert_eq!(err.stderr(), "Unable to find unit");
}
