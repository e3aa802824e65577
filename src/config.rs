/// Physical constants used by the diagnostic formulas
#[derive(Clone, Debug)]
pub struct Constants {
    /// Mean Earth radius (m)
    pub earth_radius: f64,
    /// Earth rotation rate (rad/s), one turn per 86400 s
    pub omega: f64,
    /// Gravitational acceleration (m/s²)
    pub g: f64,
    /// Poisson exponent Rd/Cp for dry air
    pub kappa: f64,
    /// Reference pressure for potential temperature (hPa)
    pub p0_hpa: f64,
    /// Conversion factor from hPa to Pa
    pub hpa_to_pa: f64,
}

impl Default for Constants {
    fn default() -> Self {
        Self {
            earth_radius: 6.37e6,
            omega: 2.0 * std::f64::consts::PI / 86400.0,
            g: 9.8,
            kappa: 0.286, // Rd/Cp
            p0_hpa: 1000.0,
            hpa_to_pa: 100.0,
        }
    }
}
