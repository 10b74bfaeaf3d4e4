//! Machine listing specs
//!
//! `fleetctl list-machines` works and lists at least the local machine.

use crate::prelude::*;
use serial_test::serial;

#[test]
#[serial(cluster)]
fn list_machines_prints_at_least_one_machine() {
    let cluster = Cluster::from_env();

    let stdout = cluster
        .fleetctl()
        .args(&["list-machines", "--no-legend"])
        .passes()
        .stdout();

    assert!(
        stdout.lines().any(|l| !l.trim().is_empty()),
        "Failed listing out at least one machine\nstdout: {}",
        stdout
    );
}

#[test]
#[serial(cluster)]
fn list_machines_check_passes() {
    let cluster = Cluster::from_env();
    let count = checks::list_machines(&cluster.client()).unwrap();
    assert!(count >= 1);
}

#[test]
fn list_machines_check_fails_on_empty_cluster() {
    let cluster = Cluster::fake();
    cluster.faked().set_machines(&[]).unwrap();

    let err = checks::list_machines(&cluster.client()).unwrap_err();
    assert!(matches!(err, CheckError::NoMachines));
}

#[test]
fn list_machines_check_surfaces_fleetctl_output() {
    let cluster = Cluster::fake();
    cluster
        .faked()
        .fail("list-machines", "Error retrieving list of active machines: etcd down")
        .unwrap();

    let err = checks::list_machines(&cluster.client()).unwrap_err();
    let msg = err.to_string();
    assert!(msg.starts_with("fleetctl list-machines failed"), "got: {}", msg);
    assert!(msg.contains("stderr: Error retrieving list of active machines"), "got: {}", msg);
}
