use chrono::NaiveDate;
use serde::Serialize;
use snafu::ResultExt;

use crate::{
    PortRole, ScheduleCell, ServiceSchedule, VesselSchedule,
    error::{
        Result,
        error::{CsvSnafu, FlushSnafu, Utf8Snafu},
    },
};

pub const CSV_HEADER: [&str; 12] = [
    "Vessel Name",
    "IMO",
    "Service",
    "Voyage",
    "Port",
    "Port Code",
    "Port Role",
    "ETA",
    "ETD",
    "ETA Status",
    "ETD Status",
    "Delay Hours",
];

#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    vessel_name: &'a str,
    imo: &'a str,
    service: &'a str,
    voyage: &'a str,
    port: &'a str,
    port_code: &'a str,
    port_role: PortRole,
    eta: &'a str,
    etd: &'a str,
    eta_status: &'a str,
    etd_status: &'a str,
    delay_hours: Option<i64>,
}

/// One row per displayed vessel and port, in display order.
pub fn export_csv(schedule: &ServiceSchedule) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    writer.write_record(CSV_HEADER).context(CsvSnafu)?;

    for vessel in schedule.vessels() {
        let load = vessel.load_cells.iter().zip(&schedule.load_ports);
        let discharge = vessel.discharge_cells.iter().zip(&schedule.discharge_ports);

        for (cell, column) in load.chain(discharge) {
            writer
                .serialize(row(schedule, vessel, cell, &column.name, column.role))
                .context(CsvSnafu)?;
        }
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| e.into_error())
        .context(FlushSnafu)?;
    String::from_utf8(bytes).context(Utf8Snafu)
}

/// `sa-import-schedule-<service>[-delayed-only]-<date>.csv`
pub fn export_file_name(service: &str, delayed_only: bool, date: NaiveDate) -> String {
    format!(
        "sa-import-schedule-{}{}-{}.csv",
        slug(service),
        if delayed_only { "-delayed-only" } else { "" },
        date.format("%Y-%m-%d")
    )
}

fn row<'a>(
    schedule: &'a ServiceSchedule,
    vessel: &'a VesselSchedule,
    cell: &'a ScheduleCell,
    port_name: &'a str,
    role: PortRole,
) -> CsvRow<'a> {
    CsvRow {
        vessel_name: &vessel.name,
        imo: vessel.imo.as_deref().unwrap_or(""),
        service: &schedule.service,
        voyage: &vessel.voyage,
        port: port_name,
        port_code: &cell.port,
        port_role: role,
        eta: &cell.eta.text,
        etd: &cell.etd.text,
        eta_status: cell.eta.status(),
        etd_status: cell.etd.status(),
        delay_hours: cell.delay.is_delayed.then_some(cell.delay.hours),
    }
}

fn slug(value: &str) -> String {
    value
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_ascii_lowercase())
        .collect::<Vec<_>>()
        .join("-")
}
