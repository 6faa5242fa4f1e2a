use crate::helper::*;
use schedule_core::ServiceCatalog;
use voyage_engine::*;

#[test]
fn test_csv_has_a_row_per_vessel_and_port() {
    let snapshot = snapshot(vec![saecs_vessel(
        "MAERSK V",
        "1234567",
        "201E",
        "2025-02-05T00:00:00Z",
        "2025-03-05T00:00:00Z",
    )]);
    let schedule = build_service_schedule(
        Some(&snapshot),
        "SAECS",
        &ServiceCatalog::default(),
        ScheduleOptions::default(),
        now(),
    )
    .unwrap();

    let csv = export_csv(&schedule).unwrap();
    let lines: Vec<_> = csv.lines().collect();

    assert_eq!(
        lines[0],
        "Vessel Name,IMO,Service,Voyage,Port,Port Code,Port Role,ETA,ETD,ETA Status,ETD Status,Delay Hours"
    );
    assert_eq!(lines.len(), 1 + 4 + 4);
    assert_eq!(
        lines[1],
        "MAERSK V,1234567,SAECS,201E,London Gateway,GBLGP,Load,-,05 Feb,,EST,"
    );
    assert!(lines.contains(&"MAERSK V,1234567,SAECS,201E,Durban,ZADUR,Discharge,05 Mar,-,EST,,"));
}

#[test]
fn test_empty_schedule_exports_header_only() {
    let schedule = build_service_schedule(
        None,
        "WAF7",
        &ServiceCatalog::default(),
        ScheduleOptions::default(),
        now(),
    )
    .unwrap();

    let csv = export_csv(&schedule).unwrap();

    assert_eq!(csv.lines().count(), 1);
}
