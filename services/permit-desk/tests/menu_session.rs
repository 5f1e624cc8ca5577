//! Scripted desk sessions driven through in-memory input and output.

use parking_permits::permits::ParkingSystem;
use permit_desk::Desk;

fn run_session(system: &mut ParkingSystem, script: &[&str]) -> String {
    let mut input = script.join("\n");
    input.push('\n');
    let mut output = Vec::new();
    Desk::new(system, input.as_bytes(), &mut output)
        .run()
        .expect("in-memory session");
    String::from_utf8(output).expect("utf8 output")
}

#[test]
fn full_permit_lifecycle_through_the_menu() {
    let mut system = ParkingSystem::new();
    let out = run_session(
        &mut system,
        &[
            "5",
            "1", "Ann Lee", "S1", "abc-123", "student",
            "2", "S1", " Student ",
            "3", "abc-123",
            "4", "ABC-123", "2.5",
            "4", "ABC-123", "1",
            "5",
            "6",
        ],
    );

    let pid = system
        .get_pass("ABC-123")
        .map(|pass| pass.pid().to_string())
        .expect("pass issued");

    assert!(out.contains("No active passes"));
    assert!(out.contains("Driver registered: Ann Lee"));
    assert!(out.contains(&format!("Pass issued: {pid}")));
    assert!(out.contains("Vehicle parked"));
    assert!(out.contains("Fee: 5.00"));
    assert!(out.contains("Error: not parked"));
    assert!(out.contains(&format!("{pid} Ann Lee ABC-123")));
    assert_eq!(system.lot().occupancy(), 0);
}

#[test]
fn rule_violations_are_printed_and_the_loop_continues() {
    let mut system = ParkingSystem::new();
    let out = run_session(
        &mut system,
        &[
            "1", "Ann Lee", "S1", "abc-123", "car",
            "1", "Bob Ray", "S2", " ABC-123 ", "car",
            "1", "   ", "S3", "xyz-1", "car",
            "2", "S9", "staff",
            "2", "S1", "visitor",
            "3", "abc-123",
            "3", "nope",
            "2", "S1", "staff",
            "2", "S1", "staff",
            "6",
        ],
    );

    for expected in [
        "Error: plate exists",
        "Error: invalid name",
        "Error: driver not found",
        "Error: unknown pass type 'visitor'",
        "Error: no pass",
        "Error: plate not registered",
        "Error: vehicle already has a pass",
    ] {
        assert!(out.contains(expected), "missing {expected:?} in:\n{out}");
    }
    assert_eq!(system.driver_count(), 1);
    assert_eq!(system.passes().len(), 1);
}

#[test]
fn lot_full_is_reported_for_the_eleventh_vehicle() {
    let mut system = ParkingSystem::new();
    let mut script: Vec<String> = Vec::new();
    for n in 0..11 {
        script.extend([
            "1".to_string(),
            format!("Driver {n}"),
            format!("D{n}"),
            format!("car-{n}"),
            "sedan".to_string(),
            "2".to_string(),
            format!("D{n}"),
            "staff".to_string(),
            "3".to_string(),
            format!("car-{n}"),
        ]);
    }
    script.push("6".to_string());
    let script: Vec<&str> = script.iter().map(String::as_str).collect();

    let out = run_session(&mut system, &script);

    assert_eq!(out.matches("Vehicle parked").count(), 10);
    assert_eq!(out.matches("Error: lot full").count(), 1);
    assert_eq!(system.lot().occupancy(), 10);
}
