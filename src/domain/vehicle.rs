/// Tag reserved for vehicles driven by disabled people
pub const DISABLED_TAG: char = 'D';

/// Which set of bays a vehicle searches first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VehicleClass {
    /// May use disabled bays, falling back to ordinary ones
    Disabled,
    /// Ordinary bays only
    Ordinary,
}

impl VehicleClass {
    /// Classify a vehicle by its tag character
    pub fn from_tag(tag: char) -> Self {
        if tag == DISABLED_TAG {
            VehicleClass::Disabled
        } else {
            VehicleClass::Ordinary
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vehicle_class_from_tag() {
        assert_eq!(VehicleClass::from_tag('D'), VehicleClass::Disabled);
        assert_eq!(VehicleClass::from_tag('C'), VehicleClass::Ordinary);
        assert_eq!(VehicleClass::from_tag('d'), VehicleClass::Ordinary);
    }
}
