//! Water meter registry entries.

use serde::{Deserialize, Serialize};

/// A tracked water-consumption device.
///
/// The meter ID is fixed at construction; location and owner may be updated
/// as the physical installation changes hands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaterMeter {
    meter_id: String,
    location: String,
    owner_name: String,
}

impl WaterMeter {
    /// Creates a new meter registry entry.
    pub fn new(
        meter_id: impl Into<String>,
        location: impl Into<String>,
        owner_name: impl Into<String>,
    ) -> Self {
        Self {
            meter_id: meter_id.into(),
            location: location.into(),
            owner_name: owner_name.into(),
        }
    }

    /// Returns the immutable meter identifier.
    #[must_use]
    pub fn meter_id(&self) -> &str {
        &self.meter_id
    }

    /// Returns the meter's location description.
    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Updates the meter's location description.
    pub fn set_location(&mut self, location: impl Into<String>) {
        self.location = location.into();
    }

    /// Returns the owner's display name.
    #[must_use]
    pub fn owner_name(&self) -> &str {
        &self.owner_name
    }

    /// Updates the owner's display name.
    pub fn set_owner_name(&mut self, owner_name: impl Into<String>) {
        self.owner_name = owner_name.into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mutable_fields_update_in_place() {
        let mut meter = WaterMeter::new("WM001", "Building A", "John Doe");
        meter.set_location("Building D");
        meter.set_owner_name("Jane Doe");

        assert_eq!(meter.meter_id(), "WM001");
        assert_eq!(meter.location(), "Building D");
        assert_eq!(meter.owner_name(), "Jane Doe");
    }
}
