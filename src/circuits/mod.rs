// Circuit catalog for the Brazilian stock car calendar

/// Base ambient temperature used when a circuit name is not in the catalog
pub const DEFAULT_BASE_TEMP_C: f64 = 25.0;

/// Nominal turbine RPM used when a circuit name is not in the catalog
pub const DEFAULT_RPM: u32 = 3000;

/// A race track with the constants the cooling simulation needs.
///
/// The catalog is fixed at compile time; there is no runtime registration.
/// Lookups by unknown names fall back to [`DEFAULT_BASE_TEMP_C`] and
/// [`DEFAULT_RPM`] rather than failing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circuit {
    /// Display name, as shown on the dashboard buttons
    pub name: &'static str,
    /// Ambient temperature offset for the simulation (°C)
    pub base_temp_c: f64,
    /// Turbine RPM forwarded to the cooling hardware
    pub nominal_rpm: u32,
}

const CIRCUITS: [Circuit; 8] = [
    Circuit {
        name: "Campo Grande",
        base_temp_c: 28.0,
        nominal_rpm: 3500,
    },
    Circuit {
        name: "Goiânia",
        base_temp_c: 30.0,
        nominal_rpm: 3700,
    },
    Circuit {
        name: "Londrina",
        base_temp_c: 20.0,
        nominal_rpm: 3400,
    },
    Circuit {
        name: "Santa Cruz",
        base_temp_c: 24.0,
        nominal_rpm: 3600,
    },
    Circuit {
        name: "Interlagos",
        base_temp_c: 18.0,
        nominal_rpm: 3800,
    },
    Circuit {
        name: "Cascavel",
        base_temp_c: 22.0,
        nominal_rpm: 3300,
    },
    Circuit {
        name: "Tarumã",
        base_temp_c: 16.0,
        nominal_rpm: 3200,
    },
    Circuit {
        name: "Curvelo",
        base_temp_c: 26.0,
        nominal_rpm: 3400,
    },
];

/// All circuits in calendar order. Drives the dashboard button grid.
pub fn all() -> &'static [Circuit] {
    &CIRCUITS
}

/// Find a circuit by its display name
pub fn find(name: &str) -> Option<&'static Circuit> {
    CIRCUITS.iter().find(|c| c.name == name)
}

/// Base temperature for a circuit, falling back to [`DEFAULT_BASE_TEMP_C`]
/// for names not in the catalog
pub fn base_temperature(name: &str) -> f64 {
    find(name).map_or(DEFAULT_BASE_TEMP_C, |c| c.base_temp_c)
}

/// Nominal RPM for a circuit, falling back to [`DEFAULT_RPM`] for names not
/// in the catalog
pub fn nominal_rpm(name: &str) -> u32 {
    find(name).map_or(DEFAULT_RPM, |c| c.nominal_rpm)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_eight_circuits() {
        assert_eq!(all().len(), 8);
    }

    #[test]
    fn test_each_name_maps_to_one_entry() {
        for circuit in all() {
            let matches = all().iter().filter(|c| c.name == circuit.name).count();
            assert_eq!(matches, 1, "duplicate catalog entry for {}", circuit.name);
        }
    }

    #[test]
    fn test_known_lookups() {
        assert_eq!(base_temperature("Campo Grande"), 28.0);
        assert_eq!(nominal_rpm("Campo Grande"), 3500);
        assert_eq!(base_temperature("Interlagos"), 18.0);
        assert_eq!(nominal_rpm("Interlagos"), 3800);
        assert_eq!(base_temperature("Tarumã"), 16.0);
        assert_eq!(nominal_rpm("Tarumã"), 3200);
    }

    #[test]
    fn test_unknown_names_fall_back_to_defaults() {
        assert!(find("Jacarepaguá").is_none());
        assert_eq!(base_temperature("Jacarepaguá"), DEFAULT_BASE_TEMP_C);
        assert_eq!(nominal_rpm("Jacarepaguá"), DEFAULT_RPM);
        // the match is on the exact display name
        assert_eq!(base_temperature("campo grande"), DEFAULT_BASE_TEMP_C);
    }

    #[test]
    fn test_calendar_order_is_stable() {
        let names: Vec<&str> = all().iter().map(|c| c.name).collect();
        assert_eq!(names[0], "Campo Grande");
        assert_eq!(names[4], "Interlagos");
        assert_eq!(names[7], "Curvelo");
    }
}
