//! Order status lifecycle.

use serde::{Deserialize, Serialize};

/// The lifecycle stage of an order.
///
/// Orders start at `Pending`. Status updates are permissive: any status may
/// replace any other, so an operator can revert `Delivered` back to
/// `Pending`; no forward-only sequence is enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum OrderStatus {
    /// Order has been placed and not yet picked up by the operator.
    #[default]
    Pending,

    /// Order is being prepared for delivery.
    #[serde(rename = "In Progress")]
    InProgress,

    /// Order has been delivered to the buyer.
    Delivered,
}

impl OrderStatus {
    /// Returns the status name as shown to buyers and operators.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::InProgress => "In Progress",
            OrderStatus::Delivered => "Delivered",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_status_is_pending() {
        assert_eq!(OrderStatus::default(), OrderStatus::Pending);
    }

    #[test]
    fn wire_strings_round_trip() {
        for (status, wire) in [
            (OrderStatus::Pending, "\"Pending\""),
            (OrderStatus::InProgress, "\"In Progress\""),
            (OrderStatus::Delivered, "\"Delivered\""),
        ] {
            assert_eq!(serde_json::to_string(&status).unwrap(), wire);
            let back: OrderStatus = serde_json::from_str(wire).unwrap();
            assert_eq!(back, status);
        }
    }

    #[test]
    fn display_matches_wire_string() {
        assert_eq!(OrderStatus::InProgress.to_string(), "In Progress");
    }

    #[test]
    fn unknown_status_is_rejected() {
        let result: Result<OrderStatus, _> = serde_json::from_str("\"Shipped\"");
        assert!(result.is_err());
    }
}
