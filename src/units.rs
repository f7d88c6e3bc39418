//! Conversions into the internal unit system (SI: m/s).

pub fn km_h_to_m_s(value: f64) -> f64 {
    value * (1000.0 / 3600.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_km_h_to_m_s() {
        assert_eq!(km_h_to_m_s(0.0), 0.0);
        assert_eq!(km_h_to_m_s(3.6), 1.0);
        assert_eq!(km_h_to_m_s(36.0), 10.0);
    }
}
