//! Built-in demo topology loaded at startup

use crate::topology::{Cable, Device, Port, Topology};

/// Two devices and three cables, every cable already in use.
pub fn seed_topology() -> Topology {
    Topology::new(seed_devices(), seed_cables())
}

pub fn seed_devices() -> Vec<Device> {
    vec![
        Device::new(
            "SW001",
            "Cisco Switch 3750",
            "Server Room A",
            vec![
                Port::connected("P1", "CAB001", "Ethernet"),
                Port::connected("P2", "CAB002", "Ethernet"),
                Port::disconnected("P3", "Ethernet"),
                Port::disconnected("P4", "Ethernet"),
            ],
        ),
        Device::new(
            "RT002",
            "Juniper Router EX4300",
            "Server Room B",
            vec![
                Port::connected("P1", "CAB003", "Fiber"),
                Port::disconnected("P2", "Ethernet"),
            ],
        ),
    ]
}

pub fn seed_cables() -> Vec<Cable> {
    vec![
        Cable::new("CAB001", "Cat6", "2m", "Blue"),
        Cable::new("CAB002", "Cat6a", "5m", "Yellow"),
        Cable::new("CAB003", "Fiber", "10m", "Orange"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_has_two_devices_and_three_cables() {
        let topology = seed_topology();
        assert_eq!(topology.devices.len(), 2);
        assert_eq!(topology.cables.len(), 3);
        assert_eq!(topology.first_device().map(|d| d.id.as_str()), Some("SW001"));
    }

    #[test]
    fn test_seed_every_cable_is_in_use() {
        let topology = seed_topology();
        for cable in &topology.cables {
            assert!(topology.is_cable_referenced(&cable.id), "{} is free", cable.id);
        }
        assert!(topology.dangling_cable_refs().is_empty());
    }

    #[test]
    fn test_seed_ids_are_unique() {
        let topology = seed_topology();
        let device_ids: HashSet<_> = topology.devices.iter().map(|d| &d.id).collect();
        assert_eq!(device_ids.len(), topology.devices.len());

        for device in &topology.devices {
            let port_ids: HashSet<_> = device.ports.iter().map(|p| &p.id).collect();
            assert_eq!(port_ids.len(), device.ports.len());
        }
    }

    #[test]
    fn test_seed_connected_ports_have_cables() {
        for device in seed_devices() {
            for port in &device.ports {
                assert_eq!(port.is_connected(), port.connected_to.is_some());
            }
        }
    }
}
