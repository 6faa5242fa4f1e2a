use crate::helper::*;
use schedule_core::{EventClassifier::*, ServiceCatalog, test_helper::*};
use voyage_engine::*;

#[test]
fn test_resolves_upcoming_voyage_and_surfaces_load_port_departure() {
    let vessel = VesselBuilder::new("V")
        .imo("1234567")
        .call(
            CallBuilder::new("GBLGP")
                .outbound("SAECS", "198E")
                .departure(Actual, "2024-12-01T00:00:00Z"),
        )
        .call(
            CallBuilder::new("ZADUR")
                .inbound("SAECS", "198E")
                .arrival(Actual, "2025-01-01T00:00:00Z"),
        )
        .call(
            CallBuilder::new("GBLGP")
                .outbound("SAECS", "201E")
                .departure(Estimated, "2025-02-03T00:00:00Z"),
        )
        .call(
            CallBuilder::new("ZADUR")
                .inbound("SAECS", "201E")
                .arrival(Estimated, "2025-03-01T00:00:00Z"),
        )
        .build();

    let schedule = build_service_schedule(
        Some(&snapshot(vec![vessel])),
        "SAECS",
        &ServiceCatalog::default(),
        ScheduleOptions::default(),
        now(),
    )
    .unwrap();

    assert_eq!(schedule.total, 1);
    let row = &schedule.primary[0];
    assert_eq!(row.voyage, "201E");

    let london = &row.load_cells[0];
    assert_eq!(london.port, "GBLGP");
    assert_eq!(london.etd.text, "03 Feb");
    assert!(london.etd.is_estimate);

    let durban = row
        .discharge_cells
        .iter()
        .find(|c| c.port == "ZADUR")
        .unwrap();
    assert_eq!(durban.eta.text, "01 Mar");
    assert_eq!(row.load_cells[1].eta.text, voyage_engine::NO_DATA);
}

#[test]
fn test_twenty_active_vessels_are_capped_at_sixteen() {
    let vessels = (0..20)
        .map(|i| {
            saecs_vessel(
                &format!("VESSEL {i:02}"),
                &format!("{}", 9_000_000 + i),
                &format!("{}E", 200 + i),
                &format!("2025-02-{:02}T00:00:00Z", i + 2),
                "2025-03-28T00:00:00Z",
            )
        })
        .collect();

    let schedule = build_service_schedule(
        Some(&snapshot(vessels)),
        "SAECS",
        &ServiceCatalog::default(),
        ScheduleOptions::default(),
        now(),
    )
    .unwrap();

    assert_eq!(schedule.primary.len(), 5);
    assert_eq!(schedule.extended.len(), 11);
    assert_eq!(schedule.total, 16);
    assert_eq!(schedule.primary[0].name, "VESSEL 00");
    assert_eq!(schedule.extended[10].name, "VESSEL 15");
}

#[test]
fn test_vessels_sort_by_first_load_port_departure() {
    let vessels = vec![
        saecs_vessel("LATE", "1", "203E", "2025-02-20T00:00:00Z", "2025-03-20T00:00:00Z"),
        saecs_vessel("EARLY", "2", "202E", "2025-02-05T00:00:00Z", "2025-03-05T00:00:00Z"),
        VesselBuilder::new("NO DEPARTURE")
            .imo("3")
            .call(
                CallBuilder::new("ZACPT")
                    .inbound("SAECS", "204E")
                    .arrival(Estimated, "2025-02-10T00:00:00Z"),
            )
            .build(),
    ];

    let schedule = build_service_schedule(
        Some(&snapshot(vessels)),
        "SAECS",
        &ServiceCatalog::default(),
        ScheduleOptions::default(),
        now(),
    )
    .unwrap();

    let names: Vec<_> = schedule.vessels().map(|v| v.name.as_str()).collect();
    assert_eq!(names, vec!["EARLY", "LATE", "NO DEPARTURE"]);
}

#[test]
fn test_mesawa_sorts_by_inbound_voyage_number() {
    let mesawa = |name: &str, imo: &str, voyage: &str, arrival: &str| {
        VesselBuilder::new(name)
            .imo(imo)
            .call(
                CallBuilder::new("ZACPT")
                    .inbound("MESAWA", voyage)
                    .arrival(Estimated, arrival),
            )
            .build()
    };
    let vessels = vec![
        mesawa("B", "1", "MW535E", "2025-02-10T00:00:00Z"),
        mesawa("A", "2", "MW533E", "2025-03-10T00:00:00Z"),
        mesawa("C", "3", "MW534W", "2025-02-05T00:00:00Z"),
    ];

    let schedule = build_service_schedule(
        Some(&snapshot(vessels)),
        "MESAWA",
        &ServiceCatalog::default(),
        ScheduleOptions::default(),
        now(),
    )
    .unwrap();

    let names: Vec<_> = schedule.vessels().map(|v| v.name.as_str()).collect();
    assert_eq!(names, vec!["A", "B", "C"]);
    assert_eq!(schedule.discharge_ports.len(), 2);
    assert_eq!(schedule.load_ports.len(), 6);
}

#[test]
fn test_duplicate_records_are_merged_before_resolution() {
    let first = VesselBuilder::new("DUP")
        .imo("1")
        .call(
            CallBuilder::new("GBLGP")
                .outbound("SAECS", "201E")
                .departure(Estimated, "2025-02-03T00:00:00Z"),
        )
        .build();
    let second = VesselBuilder::new("DUP")
        .imo("1")
        .call(
            CallBuilder::new("ZADUR")
                .inbound("SAECS", "201E")
                .arrival(Estimated, "2025-03-01T00:00:00Z"),
        )
        .build();

    let schedule = build_service_schedule(
        Some(&snapshot(vec![first, second])),
        "SAECS",
        &ServiceCatalog::default(),
        ScheduleOptions::default(),
        now(),
    )
    .unwrap();

    assert_eq!(schedule.total, 1);
    assert_eq!(schedule.primary[0].load_cells[0].etd.text, "03 Feb");
}

#[test]
fn test_delayed_only_keeps_vessels_with_a_delayed_cell() {
    let delayed = VesselBuilder::new("DELAYED")
        .imo("1")
        .call(
            CallBuilder::new("ZADUR")
                .inbound("SAECS", "201E")
                .arrival(Estimated, "2025-03-01T00:00:00Z")
                .arrival(Estimated, "2025-03-02T12:00:00Z"),
        )
        .build();
    let on_time = saecs_vessel("ON TIME", "2", "202E", "2025-02-05T00:00:00Z", "2025-03-05T00:00:00Z");

    let schedule = build_service_schedule(
        Some(&snapshot(vec![delayed, on_time])),
        "SAECS",
        &ServiceCatalog::default(),
        ScheduleOptions { delayed_only: true },
        now(),
    )
    .unwrap();

    assert_eq!(schedule.total, 1);
    let vessel = &schedule.primary[0];
    assert_eq!(vessel.name, "DELAYED");
    let durban = vessel.discharge_cells.iter().find(|c| c.port == "ZADUR").unwrap();
    assert_eq!(durban.delay.hours, 36);
    assert_eq!(durban.delay.severity, Some(DelaySeverity::Major));
}

#[test]
fn test_inactive_and_excluded_vessels_are_dropped() {
    let departed = VesselBuilder::new("DEPARTED")
        .imo("1")
        .call(
            CallBuilder::new("ZADUR")
                .inbound("SAECS", "190E")
                .arrival(Actual, "2025-01-01T00:00:00Z")
                .departure(Actual, "2025-01-03T00:00:00Z"),
        )
        .build();
    let excluded = saecs_vessel("SANTA URSULA", "2", "201E", "2025-02-05T00:00:00Z", "2025-03-05T00:00:00Z");
    let other_service = VesselBuilder::new("OTHER")
        .imo("3")
        .call(
            CallBuilder::new("ZADUR")
                .inbound("WAF7", "201E")
                .arrival(Estimated, "2025-03-01T00:00:00Z"),
        )
        .build();

    let schedule = build_service_schedule(
        Some(&snapshot(vec![departed, excluded, other_service])),
        "SAECS",
        &ServiceCatalog::default(),
        ScheduleOptions::default(),
        now(),
    )
    .unwrap();

    assert!(schedule.is_empty());
}

#[test]
fn test_missing_snapshot_yields_empty_schedule() {
    let schedule = build_service_schedule(
        None,
        "SAECS",
        &ServiceCatalog::default(),
        ScheduleOptions::default(),
        now(),
    )
    .unwrap();

    assert!(schedule.is_empty());
    assert_eq!(schedule.label, "SAECS Service");
    assert_eq!(schedule.load_ports.len(), 4);
}

#[test]
fn test_empty_service_name_is_rejected() {
    let result = build_service_schedule(
        None,
        "  ",
        &ServiceCatalog::default(),
        ScheduleOptions::default(),
        now(),
    );

    assert!(result.is_err());
}

#[test]
fn test_repeated_builds_are_identical() {
    let snapshot = snapshot(vec![saecs_vessel(
        "V",
        "1",
        "201E",
        "2025-02-05T00:00:00Z",
        "2025-03-05T00:00:00Z",
    )]);
    let catalog = ServiceCatalog::default();

    let a = build_service_schedule(Some(&snapshot), "SAECS", &catalog, ScheduleOptions::default(), now())
        .unwrap();
    let b = build_service_schedule(Some(&snapshot), "SAECS", &catalog, ScheduleOptions::default(), now())
        .unwrap();

    assert_eq!(a, b);
}

#[test]
fn test_records_are_merged_before_activity_is_decided() {
    let saecs_record = VesselBuilder::new("SHARED")
        .imo("1")
        .call(
            CallBuilder::new("ZADUR")
                .inbound("SAECS", "198E")
                .arrival(Actual, "2024-12-28T00:00:00Z")
                .departure(Actual, "2025-01-02T00:00:00Z"),
        )
        .build();
    let waf7_record = VesselBuilder::new("SHARED")
        .imo("1")
        .call(
            CallBuilder::new("ZACPT")
                .inbound("WAF7", "301N")
                .departure(Actual, "2025-02-28T00:00:00Z"),
        )
        .build();

    let schedule = build_service_schedule(
        Some(&snapshot(vec![saecs_record, waf7_record])),
        "SAECS",
        &ServiceCatalog::default(),
        ScheduleOptions::default(),
        ts("2025-03-01T00:00:00Z"),
    )
    .unwrap();

    assert_eq!(schedule.total, 1);
    assert_eq!(schedule.primary[0].voyage, "198E");
}
