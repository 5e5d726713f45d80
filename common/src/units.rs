//! Display unit conversions applied before values reach the scales.

/// Unit system for altitude and speed readouts.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Units {
    #[default]
    Metric,
    Imperial,
}

/// cm/s to km/h.
pub const CM_S_TO_KM_H: f32 = 0.036;

/// cm/s to mph.
pub const CM_S_TO_MPH: f32 = 0.0224;

impl Units {
    /// Barometric altitude in whole metres or feet.
    pub fn altitude(
        self,
        altitude_cm: i32,
    ) -> i32 {
        match self {
            Self::Metric => altitude_cm / 100,
            Self::Imperial => (i64::from(altitude_cm) * 328 / 100 / 100) as i32,
        }
    }

    /// Ground speed in whole km/h or mph.
    pub fn speed(
        self,
        speed_cm_s: u16,
    ) -> i32 {
        let factor = match self {
            Self::Metric => CM_S_TO_KM_H,
            Self::Imperial => CM_S_TO_MPH,
        };
        (f32::from(speed_cm_s) * factor) as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_altitude_conversion() {
        assert_eq!(Units::Metric.altitude(12_345), 123);
        assert_eq!(Units::Imperial.altitude(10_000), 328);
        assert_eq!(Units::Metric.altitude(-250), -2);
    }

    #[test]
    fn test_altitude_does_not_overflow() {
        assert_eq!(Units::Imperial.altitude(i32::MAX), (i64::from(i32::MAX) * 328 / 10_000) as i32);
    }

    #[test]
    fn test_speed_conversion() {
        assert_eq!(Units::Metric.speed(1000), 36);
        assert_eq!(Units::Imperial.speed(1000), 22);
        assert_eq!(Units::Metric.speed(0), 0);
    }
}
