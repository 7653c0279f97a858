//! Topology domain types: devices, ports, cables
//!
//! A [`Topology`] is an immutable value. Every mutation goes through
//! [`Topology::toggle_port`], which returns a fresh snapshot and leaves the
//! receiver untouched.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Prefix of every cable identifier ("CAB001", "CAB42", ...)
pub const CABLE_ID_PREFIX: &str = "CAB";

/// Fabricated cable numbers are drawn from `0..FABRICATED_ID_RANGE`
pub const FABRICATED_ID_RANGE: u32 = 1000;

/// Draws attempted before accepting a fabricated id that is already in use
const FABRICATE_ATTEMPTS: usize = 8;

/// Connection state of a port
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PortStatus {
    Connected,
    #[default]
    Disconnected,
}

impl PortStatus {
    pub fn is_connected(&self) -> bool {
        matches!(self, PortStatus::Connected)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PortStatus::Connected => "connected",
            PortStatus::Disconnected => "disconnected",
        }
    }
}

impl std::fmt::Display for PortStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A connection point on a device, optionally bound to a cable
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Port {
    /// Unique within the owning device ("P1", "P2", ...)
    pub id: String,
    pub status: PortStatus,
    /// Cable identifier; `Some` exactly when `status` is connected
    pub connected_to: Option<String>,
    /// Physical type label ("Ethernet", "Fiber")
    #[serde(rename = "type")]
    pub kind: String,
}

impl Port {
    pub fn disconnected(id: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            status: PortStatus::Disconnected,
            connected_to: None,
            kind: kind.into(),
        }
    }

    pub fn connected(
        id: impl Into<String>,
        cable_id: impl Into<String>,
        kind: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            status: PortStatus::Connected,
            connected_to: Some(cable_id.into()),
            kind: kind.into(),
        }
    }

    pub fn is_connected(&self) -> bool {
        self.status.is_connected()
    }

    fn connect(&mut self, cable_id: String) {
        self.status = PortStatus::Connected;
        self.connected_to = Some(cable_id);
    }

    /// Returns the released cable id, if any
    fn disconnect(&mut self) -> Option<String> {
        self.status = PortStatus::Disconnected;
        self.connected_to.take()
    }
}

/// A network element (switch, router) with an ordered list of ports
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    pub id: String,
    pub name: String,
    pub location: String,
    pub ports: Vec<Port>,
}

impl Device {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        location: impl Into<String>,
        ports: Vec<Port>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            location: location.into(),
            ports,
        }
    }

    pub fn port(&self, port_id: &str) -> Option<&Port> {
        self.ports.iter().find(|p| p.id == port_id)
    }

    pub fn connected_port_count(&self) -> usize {
        self.ports.iter().filter(|p| p.is_connected()).count()
    }
}

/// A physical link resource identified by a unique code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cable {
    pub id: String,
    /// Cable category ("Cat6", "Cat6a", "Fiber")
    #[serde(rename = "type")]
    pub kind: String,
    pub length: String,
    pub color: String,
}

impl Cable {
    pub fn new(
        id: impl Into<String>,
        kind: impl Into<String>,
        length: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
            length: length.into(),
            color: color.into(),
        }
    }

    /// Placeholder record for a fabricated cable id
    pub fn unknown(id: impl Into<String>) -> Self {
        Self::new(id, "Unknown", "?", "?")
    }
}

/// What to do with a cable id fabricated when no free cable exists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CablePolicy {
    /// Attach the id without a cable record (the port references a cable that
    /// does not exist in the cable list)
    #[default]
    LeaveDangling,
    /// Also append a placeholder [`Cable::unknown`] record
    Register,
}

/// Result of toggling a single port
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ToggleOutcome {
    /// Port was disconnected and is now bound to `cable_id`
    Connected {
        device_id: String,
        port_id: String,
        cable_id: String,
        /// True when no free cable existed and the id was made up
        fabricated: bool,
    },
    /// Port was connected and its cable binding was cleared
    Disconnected {
        device_id: String,
        port_id: String,
        released: Option<String>,
    },
    /// No device/port matched; nothing changed
    NotFound { device_id: String, port_id: String },
}

impl ToggleOutcome {
    pub fn is_change(&self) -> bool {
        !matches!(self, ToggleOutcome::NotFound { .. })
    }

    /// One-line human readable summary for status bars and logs
    pub fn describe(&self) -> String {
        match self {
            ToggleOutcome::Connected {
                device_id,
                port_id,
                cable_id,
                fabricated: false,
            } => format!("{device_id}/{port_id} connected via {cable_id}"),
            ToggleOutcome::Connected {
                device_id,
                port_id,
                cable_id,
                fabricated: true,
            } => format!(
                "{device_id}/{port_id} connected via {cable_id} (no free cable, id generated)"
            ),
            ToggleOutcome::Disconnected {
                device_id,
                port_id,
                released: Some(cable),
            } => format!("{device_id}/{port_id} disconnected, released {cable}"),
            ToggleOutcome::Disconnected {
                device_id,
                port_id,
                released: None,
            } => format!("{device_id}/{port_id} disconnected"),
            ToggleOutcome::NotFound { device_id, port_id } => {
                format!("{device_id}/{port_id} not found")
            }
        }
    }
}

/// A port binding whose cable id has no record in the cable list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DanglingCableRef<'a> {
    pub device_id: &'a str,
    pub port_id: &'a str,
    pub cable_id: &'a str,
}

/// Snapshot of every device and cable
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topology {
    pub devices: Vec<Device>,
    pub cables: Vec<Cable>,
}

impl Topology {
    pub fn new(devices: Vec<Device>, cables: Vec<Cable>) -> Self {
        Self { devices, cables }
    }

    pub fn device(&self, device_id: &str) -> Option<&Device> {
        self.devices.iter().find(|d| d.id == device_id)
    }

    pub fn first_device(&self) -> Option<&Device> {
        self.devices.first()
    }

    pub fn cable(&self, cable_id: &str) -> Option<&Cable> {
        self.cables.iter().find(|c| c.id == cable_id)
    }

    fn all_ports(&self) -> impl Iterator<Item = &Port> {
        self.devices.iter().flat_map(|d| d.ports.iter())
    }

    /// True if any port on any device references `cable_id`
    pub fn is_cable_referenced(&self, cable_id: &str) -> bool {
        self.all_ports()
            .any(|p| p.connected_to.as_deref() == Some(cable_id))
    }

    /// Cables no port currently references, in cable-list order
    pub fn unreferenced_cables(&self) -> impl Iterator<Item = &Cable> {
        self.cables
            .iter()
            .filter(move |c| !self.is_cable_referenced(&c.id))
    }

    /// Port bindings to cable ids that have no cable record
    pub fn dangling_cable_refs(&self) -> Vec<DanglingCableRef<'_>> {
        self.devices
            .iter()
            .flat_map(|d| d.ports.iter().map(move |p| (d, p)))
            .filter_map(|(d, p)| {
                let cable_id = p.connected_to.as_deref()?;
                self.cable(cable_id).is_none().then_some(DanglingCableRef {
                    device_id: &d.id,
                    port_id: &p.id,
                    cable_id,
                })
            })
            .collect()
    }

    /// Toggle the connection state of one port.
    ///
    /// Returns the new snapshot and what happened, or `None` when no device
    /// or port matches (the caller keeps its snapshot as-is).
    ///
    /// Connecting attaches the first cable no port references. When every
    /// cable is in use an id of the form `CAB<n>`, `n` in `0..1000`, is
    /// fabricated; `policy` decides whether a cable record is added for it.
    pub fn toggle_port<R: Rng + ?Sized>(
        &self,
        device_id: &str,
        port_id: &str,
        policy: CablePolicy,
        rng: &mut R,
    ) -> Option<(Topology, ToggleOutcome)> {
        let device_idx = self.devices.iter().position(|d| d.id == device_id)?;
        let port_idx = self.devices[device_idx]
            .ports
            .iter()
            .position(|p| p.id == port_id)?;

        let mut next = self.clone();

        if self.devices[device_idx].ports[port_idx].is_connected() {
            let released = next.devices[device_idx].ports[port_idx].disconnect();
            let outcome = ToggleOutcome::Disconnected {
                device_id: device_id.to_string(),
                port_id: port_id.to_string(),
                released,
            };
            return Some((next, outcome));
        }

        let free = self.unreferenced_cables().next().map(|c| c.id.clone());
        let (cable_id, fabricated) = match free {
            Some(id) => (id, false),
            None => (self.fabricate_cable_id(rng), true),
        };

        if fabricated && policy == CablePolicy::Register && next.cable(&cable_id).is_none() {
            next.cables.push(Cable::unknown(cable_id.clone()));
        }

        next.devices[device_idx].ports[port_idx].connect(cable_id.clone());

        let outcome = ToggleOutcome::Connected {
            device_id: device_id.to_string(),
            port_id: port_id.to_string(),
            cable_id,
            fabricated,
        };
        Some((next, outcome))
    }

    /// Draw `CAB<n>`, preferring an id that no cable record or port uses
    fn fabricate_cable_id<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        let mut candidate = String::new();
        for _ in 0..FABRICATE_ATTEMPTS {
            candidate = format!(
                "{}{}",
                CABLE_ID_PREFIX,
                rng.gen_range(0..FABRICATED_ID_RANGE)
            );
            if self.cable(&candidate).is_none() && !self.is_cable_referenced(&candidate) {
                break;
            }
        }
        candidate
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::seed_topology;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use regex::Regex;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    fn port<'a>(topology: &'a Topology, device_id: &str, port_id: &str) -> &'a Port {
        topology
            .device(device_id)
            .and_then(|d| d.port(port_id))
            .expect("port exists in test topology")
    }

    /// Seed topology with SW001/P1 released so CAB001 is free
    fn topology_with_free_cable() -> Topology {
        let (t, _) = seed_topology()
            .toggle_port("SW001", "P1", CablePolicy::LeaveDangling, &mut rng())
            .unwrap();
        t
    }

    #[test]
    fn test_disconnect_clears_cable_reference() {
        let topology = seed_topology();
        let (next, outcome) = topology
            .toggle_port("SW001", "P1", CablePolicy::LeaveDangling, &mut rng())
            .unwrap();

        let p1 = port(&next, "SW001", "P1");
        assert_eq!(p1.status, PortStatus::Disconnected);
        assert_eq!(p1.connected_to, None);
        assert_eq!(
            outcome,
            ToggleOutcome::Disconnected {
                device_id: "SW001".into(),
                port_id: "P1".into(),
                released: Some("CAB001".into()),
            }
        );
    }

    #[test]
    fn test_toggle_leaves_receiver_untouched() {
        let topology = seed_topology();
        let before = topology.clone();
        let _ = topology.toggle_port("SW001", "P1", CablePolicy::LeaveDangling, &mut rng());
        assert_eq!(topology, before);
    }

    #[test]
    fn test_connect_attaches_first_unreferenced_cable() {
        let topology = topology_with_free_cable();
        let (next, outcome) = topology
            .toggle_port("SW001", "P3", CablePolicy::LeaveDangling, &mut rng())
            .unwrap();

        let p3 = port(&next, "SW001", "P3");
        assert_eq!(p3.status, PortStatus::Connected);
        assert_eq!(p3.connected_to.as_deref(), Some("CAB001"));
        assert!(matches!(
            outcome,
            ToggleOutcome::Connected { fabricated: false, ref cable_id, .. } if cable_id == "CAB001"
        ));
    }

    #[test]
    fn test_connect_follows_cable_list_order() {
        // Free CAB002 and CAB003; CAB002 comes first in the cable list
        let mut r = rng();
        let (t, _) = seed_topology()
            .toggle_port("RT002", "P1", CablePolicy::LeaveDangling, &mut r)
            .unwrap();
        let (t, _) = t
            .toggle_port("SW001", "P2", CablePolicy::LeaveDangling, &mut r)
            .unwrap();
        let (t, _) = t
            .toggle_port("RT002", "P2", CablePolicy::LeaveDangling, &mut r)
            .unwrap();

        assert_eq!(port(&t, "RT002", "P2").connected_to.as_deref(), Some("CAB002"));
    }

    #[test]
    fn test_seed_connect_fabricates_cable_id() {
        let topology = seed_topology();
        assert_eq!(topology.unreferenced_cables().count(), 0);

        let (next, outcome) = topology
            .toggle_port("SW001", "P3", CablePolicy::LeaveDangling, &mut rng())
            .unwrap();

        let cable_id = port(&next, "SW001", "P3").connected_to.clone().unwrap();
        let pattern = Regex::new(r"^CAB\d{1,3}$").unwrap();
        assert!(pattern.is_match(&cable_id), "unexpected id {cable_id}");
        assert!(matches!(outcome, ToggleOutcome::Connected { fabricated: true, .. }));
    }

    #[test]
    fn test_fabricated_cable_is_dangling_by_default() {
        let (next, _) = seed_topology()
            .toggle_port("SW001", "P3", CablePolicy::LeaveDangling, &mut rng())
            .unwrap();

        assert_eq!(next.cables.len(), 3);
        let dangling = next.dangling_cable_refs();
        assert_eq!(dangling.len(), 1);
        assert_eq!(dangling[0].device_id, "SW001");
        assert_eq!(dangling[0].port_id, "P3");
    }

    #[test]
    fn test_fabricated_id_redraws_on_collision() {
        // First draw from this seed, already bound to a port
        let taken = format!("{}{}", CABLE_ID_PREFIX, rng().gen_range(0..FABRICATED_ID_RANGE));
        let topology = Topology::new(
            vec![Device::new(
                "SW009",
                "Test Switch",
                "Lab",
                vec![
                    Port::connected("P1", taken.clone(), "Ethernet"),
                    Port::disconnected("P2", "Ethernet"),
                ],
            )],
            vec![Cable::new(taken.clone(), "Cat6", "1m", "Grey")],
        );

        let (next, outcome) = topology
            .toggle_port("SW009", "P2", CablePolicy::LeaveDangling, &mut rng())
            .unwrap();

        let cable_id = port(&next, "SW009", "P2").connected_to.clone().unwrap();
        assert_ne!(cable_id, taken);
        assert!(matches!(outcome, ToggleOutcome::Connected { fabricated: true, .. }));
    }

    #[test]
    fn test_register_policy_adds_placeholder_cable() {
        let (next, outcome) = seed_topology()
            .toggle_port("SW001", "P3", CablePolicy::Register, &mut rng())
            .unwrap();

        let ToggleOutcome::Connected { cable_id, .. } = outcome else {
            panic!("expected a connection");
        };
        assert_eq!(next.cables.len(), 4);
        assert_eq!(next.cable(&cable_id), Some(&Cable::unknown(cable_id.clone())));
        assert!(next.dangling_cable_refs().is_empty());
    }

    #[test]
    fn test_connect_then_disconnect_restores_disconnected_state() {
        let topology = topology_with_free_cable();
        let mut r = rng();
        let (connected, _) = topology
            .toggle_port("SW001", "P4", CablePolicy::LeaveDangling, &mut r)
            .unwrap();
        let (back, _) = connected
            .toggle_port("SW001", "P4", CablePolicy::LeaveDangling, &mut r)
            .unwrap();

        assert_eq!(port(&back, "SW001", "P4"), port(&topology, "SW001", "P4"));
        assert_eq!(back, topology);
    }

    #[test]
    fn test_reconnect_picks_currently_free_cable() {
        // Free CAB001 via P1, take it with P3, release P3, then give it to P4
        let mut r = rng();
        let (t, _) = topology_with_free_cable()
            .toggle_port("SW001", "P3", CablePolicy::LeaveDangling, &mut r)
            .unwrap();
        let (t, _) = t
            .toggle_port("SW001", "P3", CablePolicy::LeaveDangling, &mut r)
            .unwrap();
        let (t, _) = t
            .toggle_port("SW001", "P4", CablePolicy::LeaveDangling, &mut r)
            .unwrap();
        let (t, outcome) = t
            .toggle_port("SW001", "P3", CablePolicy::LeaveDangling, &mut r)
            .unwrap();

        assert_eq!(port(&t, "SW001", "P4").connected_to.as_deref(), Some("CAB001"));
        // CAB001 now belongs to P4, so P3 gets a fabricated id instead
        assert!(matches!(outcome, ToggleOutcome::Connected { fabricated: true, .. }));
    }

    #[test]
    fn test_unknown_device_returns_none() {
        let topology = seed_topology();
        assert!(topology
            .toggle_port("XX999", "P1", CablePolicy::LeaveDangling, &mut rng())
            .is_none());
    }

    #[test]
    fn test_unknown_port_returns_none() {
        let topology = seed_topology();
        assert!(topology
            .toggle_port("SW001", "P9", CablePolicy::LeaveDangling, &mut rng())
            .is_none());
    }

    #[test]
    fn test_only_target_device_changes() {
        let topology = topology_with_free_cable();
        let (next, _) = topology
            .toggle_port("SW001", "P3", CablePolicy::LeaveDangling, &mut rng())
            .unwrap();
        assert_eq!(next.device("RT002"), topology.device("RT002"));
        assert_eq!(next.cables, topology.cables);
    }

    #[test]
    fn test_same_port_id_on_other_device_is_independent() {
        // Both devices have a "P2"; toggling SW001/P2 must not touch RT002/P2
        let (next, _) = seed_topology()
            .toggle_port("SW001", "P2", CablePolicy::LeaveDangling, &mut rng())
            .unwrap();
        assert!(!port(&next, "SW001", "P2").is_connected());
        assert_eq!(port(&next, "RT002", "P2"), port(&seed_topology(), "RT002", "P2"));
    }

    #[test]
    fn test_connected_port_count() {
        let topology = seed_topology();
        assert_eq!(topology.device("SW001").unwrap().connected_port_count(), 2);
        assert_eq!(topology.device("RT002").unwrap().connected_port_count(), 1);
    }

    #[test]
    fn test_describe_mentions_cable() {
        let outcome = ToggleOutcome::Connected {
            device_id: "SW001".into(),
            port_id: "P3".into(),
            cable_id: "CAB001".into(),
            fabricated: false,
        };
        assert_eq!(outcome.describe(), "SW001/P3 connected via CAB001");
        assert!(outcome.is_change());
    }

    #[test]
    fn test_port_serializes_type_and_lowercase_status() {
        let json = serde_json::to_value(Port::disconnected("P3", "Ethernet")).unwrap();
        assert_eq!(json["type"], "Ethernet");
        assert_eq!(json["status"], "disconnected");
        assert!(json["connected_to"].is_null());
    }
}
