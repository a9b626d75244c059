//! Static network policy catalog.
//!
//! Stands in for a retrieval index: policy lookup is a fixed in-memory
//! table, seeded once at startup and never mutated.

/// A named network policy whose context text constrains generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetworkPolicy {
    pub name: &'static str,
    pub context: &'static str,
}

/// Read-only policy catalog. The policy name is the lookup key.
pub const NETWORK_POLICIES: &[NetworkPolicy] = &[
    NetworkPolicy {
        name: "Strict Firewall Policy",
        context: "Context: The firewall must be configured to deny all incoming traffic by default, \
                  except for specific ports (80, 443, 22) for web and SSH access. Outgoing traffic \
                  is permitted for all internal hosts.",
    },
    NetworkPolicy {
        name: "DMZ Web Server Policy",
        context: "Context: The DMZ web server must allow incoming traffic on ports 80 and 443 from \
                  any source. All other incoming traffic should be blocked. The server can only \
                  initiate connections to internal databases on port 3306.",
    },
    NetworkPolicy {
        name: "Guest Network Policy",
        context: "Context: The guest network must provide internet access only. All traffic \
                  between hosts on the guest network should be blocked. No access to the internal \
                  corporate network is permitted from the guest network.",
    },
];

/// Looks up a policy by its exact name.
pub fn find_policy(name: &str) -> Option<&'static NetworkPolicy> {
    NETWORK_POLICIES.iter().find(|policy| policy.name == name)
}

/// Names of all catalog policies, in catalog order.
pub fn policy_names() -> Vec<&'static str> {
    NETWORK_POLICIES.iter().map(|policy| policy.name).collect()
}
