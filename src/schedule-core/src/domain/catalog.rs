use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::{ServiceName, UnLocode};

pub const DEFAULT_DROP_OFF_DAYS: u32 = 5;

/// How vessels of a service are ordered for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortStrategy {
    #[default]
    FirstLoadPortDeparture,
    VoyageNumber,
}

/// Which departure wins when several load port departures precede the discharge arrival of
/// a leg correlated voyage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LegTieBreak {
    #[default]
    LatestBeforeArrival,
    EarliestBeforeArrival,
}

/// Hand curated description of one carrier service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceDefinition {
    pub name: String,
    #[serde(default)]
    pub label: Option<String>,
    /// Load port rotation in sailing order.
    #[serde(default)]
    pub load_ports: Vec<UnLocode>,
    /// Falls back to the catalog's standard discharge set when absent.
    #[serde(default)]
    pub discharge_ports: Option<Vec<UnLocode>>,
    #[serde(default)]
    pub drop_off_days: Option<u32>,
    /// Load ports whose outbound voyage numbers do not match the discharge voyage numbers.
    #[serde(default)]
    pub leg_correlated_ports: Vec<UnLocode>,
    #[serde(default)]
    pub sort: SortStrategy,
    /// Only inbound voyages with this suffix count when resolving the sort voyage.
    #[serde(default)]
    pub sort_voyage_suffix: Option<String>,
}

/// Reference tables for all services, consumed as configured.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceCatalog {
    pub services: Vec<ServiceDefinition>,
    pub standard_discharge_ports: Vec<UnLocode>,
    pub default_drop_off_days: u32,
    pub leg_tie_break: LegTieBreak,
    pub excluded_services: Vec<String>,
    pub priority_services: Vec<String>,
    pub excluded_vessels: Vec<String>,
    pub port_names: BTreeMap<UnLocode, String>,
}

impl ServiceDefinition {
    fn new(name: &str, load_ports: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            label: None,
            load_ports: codes(load_ports),
            discharge_ports: None,
            drop_off_days: None,
            leg_correlated_ports: Vec::new(),
            sort: SortStrategy::default(),
            sort_voyage_suffix: None,
        }
    }

    fn label(mut self, label: &str) -> Self {
        self.label = Some(label.to_string());
        self
    }

    fn discharge_ports(mut self, ports: &[&str]) -> Self {
        self.discharge_ports = Some(codes(ports));
        self
    }

    fn drop_off_days(mut self, days: u32) -> Self {
        self.drop_off_days = Some(days);
        self
    }
}

impl ServiceCatalog {
    pub fn definition(&self, service: &ServiceName) -> Option<&ServiceDefinition> {
        self.services.iter().find(|s| service == s.name.as_str())
    }

    /// Load port rotation, `None` when the service has no curated rotation.
    pub fn load_ports(&self, service: &ServiceName) -> Option<&[UnLocode]> {
        self.definition(service)
            .map(|d| d.load_ports.as_slice())
            .filter(|p| !p.is_empty())
    }

    pub fn discharge_ports(&self, service: &ServiceName) -> &[UnLocode] {
        self.definition(service)
            .and_then(|d| d.discharge_ports.as_deref())
            .unwrap_or(&self.standard_discharge_ports)
    }

    pub fn is_discharge_port(&self, service: &ServiceName, port: &UnLocode) -> bool {
        self.discharge_ports(service).contains(port)
    }

    /// The South African ports any service may discharge at.
    pub fn is_sa_port(&self, port: &UnLocode) -> bool {
        self.standard_discharge_ports.contains(port)
            || self
                .services
                .iter()
                .filter_map(|s| s.discharge_ports.as_ref())
                .any(|p| p.contains(port))
    }

    pub fn drop_off_days(&self, service: &ServiceName) -> u32 {
        self.definition(service)
            .and_then(|d| d.drop_off_days)
            .unwrap_or(self.default_drop_off_days)
    }

    pub fn is_leg_correlated(&self, service: &ServiceName, port: &UnLocode) -> bool {
        self.definition(service)
            .is_some_and(|d| d.leg_correlated_ports.contains(port))
    }

    /// Whether any load port of the service is matched by chronology instead of voyage.
    pub fn uses_leg_correlation(&self, service: &ServiceName) -> bool {
        self.definition(service)
            .is_some_and(|d| !d.leg_correlated_ports.is_empty())
    }

    pub fn sort_strategy(&self, service: &ServiceName) -> SortStrategy {
        self.definition(service).map(|d| d.sort).unwrap_or_default()
    }

    pub fn sort_voyage_suffix(&self, service: &ServiceName) -> Option<&str> {
        self.definition(service)
            .and_then(|d| d.sort_voyage_suffix.as_deref())
    }

    pub fn label(&self, service: &str) -> String {
        self.services
            .iter()
            .find(|s| s.name == service)
            .and_then(|s| s.label.clone())
            .unwrap_or_else(|| service.to_string())
    }

    pub fn port_name(&self, port: &UnLocode) -> Option<&str> {
        self.port_names.get(port).map(|n| n.as_str())
    }

    pub fn is_excluded_service(&self, service: &str) -> bool {
        self.excluded_services.iter().any(|s| s == service)
    }

    pub fn is_excluded_vessel(&self, name: &str) -> bool {
        self.excluded_vessels.iter().any(|v| v == name)
    }
}

fn codes(values: &[&str]) -> Vec<UnLocode> {
    values.iter().map(|v| UnLocode::new(v)).collect()
}

impl Default for ServiceCatalog {
    fn default() -> Self {
        let mut mesawa = ServiceDefinition::new(
            "MESAWA",
            &["AEJEA", "INMUN", "INNSA", "CGPNR", "GHTEM", "NGAPP"],
        )
        .label("MESAWA Service")
        .discharge_ports(&["ZACPT", "ZAPLZ"])
        .drop_off_days(7);
        mesawa.leg_correlated_ports = codes(&["AEJEA", "INMUN", "INNSA"]);
        mesawa.sort = SortStrategy::VoyageNumber;
        mesawa.sort_voyage_suffix = Some("E".to_string());

        let services = vec![
            ServiceDefinition::new("SAECS", &["GBLGP", "NLRTM", "DEBRV", "ESALG"])
                .label("SAECS Service")
                .drop_off_days(5),
            ServiceDefinition::new(
                "SAFARI I SERVICE",
                &["MYTPP", "MUPLU", "HKHKG", "CNSHA", "CNNGB", "CNSHK"],
            )
            .label("Safari Service")
            .discharge_ports(&["ZADUR"])
            .drop_off_days(5),
            mesawa,
            ServiceDefinition::new("PROTEA", &["AEJEA", "INMUN", "INNSA"])
                .label("Protea Service")
                .discharge_ports(&["ZADUR"])
                .drop_off_days(5),
            ServiceDefinition::new("WAF7", &["MAPTM", "GNCKY", "ESALG", "SLFNA", "BJCOO"])
                .label("WAF7 Service")
                .drop_off_days(7),
            ServiceDefinition::new("WAFEX", &["BRSSZ", "BRPNG", "BRITJ"])
                .label("WAFEX Service")
                .drop_off_days(7),
            ServiceDefinition::new(
                "AMERICAN EXPRESS SERVICE - SCL",
                &["USEWR", "BSFPO", "USCHS", "USORF", "USBAL", "USPHL"],
            )
            .label("American Express")
            .drop_off_days(5),
            ServiceDefinition::new("PORT LOUIS - TOAMASINA FDR", &["MUPLU", "MGTSN"])
                .label("Port Louis Service"),
        ];

        let excluded_services = [
            "EMPTY EXTRALOADER (APA)",
            "AC EXTRALOADER",
            "EUROPE/FAR EAST EXTRALOADER",
            "EXTRALOADER (WCA)",
            "SHUTTLE A6",
            "SHUTTLE E10",
            "SHUTTLE E15",
            "TEMA-DAKAR SHUTTLE",
            "ZAPLZ - ZADUR OACL FEEDER",
            "FEW3",
            "FEW5",
            "AE15",
            "NEOASAS",
            "SAFINA",
        ];

        let priority_services = [
            "SAECS",
            "MESAWA",
            "SAFARI I SERVICE",
            "PROTEA",
            "WAF7",
            "WAFEX",
        ];

        let port_names = [
            ("ZAPLZ", "Port Elizabeth"),
            ("ZAZBA", "Port Coega"),
            ("ZADUR", "Durban"),
            ("ZACPT", "Cape Town"),
            ("GBLGP", "London Gateway"),
            ("NLRTM", "Rotterdam"),
            ("DEBRV", "Bremerhaven"),
            ("ESALG", "Algeciras"),
            ("MYTPP", "Tanjung Pelepas"),
            ("MUPLU", "Port Louis"),
            ("HKHKG", "Hong Kong"),
            ("CNSHA", "Shanghai"),
            ("CNNGB", "Ningbo"),
            ("CNSHK", "Shekou"),
            ("AEJEA", "Jebel Ali"),
            ("INMUN", "Mundra"),
            ("INNSA", "Jawaharlal Nehru"),
            ("CGPNR", "Pointe Noire"),
            ("GHTEM", "Tema"),
            ("NGAPP", "Apapa"),
            ("MAPTM", "Tanger Med"),
            ("GNCKY", "Conakry"),
            ("SLFNA", "Freetown"),
            ("BJCOO", "Cotonou"),
            ("BRSSZ", "Santos"),
            ("BRPNG", "Paranagua"),
            ("BRITJ", "Itajai"),
            ("USEWR", "Newark"),
            ("BSFPO", "Freeport"),
            ("USCHS", "Charleston"),
            ("USORF", "Norfolk"),
            ("USBAL", "Baltimore"),
            ("USPHL", "Philadelphia"),
            ("MGTSN", "Toamasina"),
        ];

        Self {
            services,
            standard_discharge_ports: codes(&["ZAPLZ", "ZAZBA", "ZADUR", "ZACPT"]),
            default_drop_off_days: DEFAULT_DROP_OFF_DAYS,
            leg_tie_break: LegTieBreak::default(),
            excluded_services: excluded_services.map(String::from).to_vec(),
            priority_services: priority_services.map(String::from).to_vec(),
            excluded_vessels: vec!["SANTA URSULA".to_string()],
            port_names: port_names
                .into_iter()
                .map(|(code, name)| (UnLocode::new(code), name.to_string()))
                .collect(),
        }
    }
}
