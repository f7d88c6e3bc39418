/// External wind observation.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Wind {
    /// Bearing the wind blows from, in degrees.
    pub bearing: f64,
    /// Wind speed in m/s.
    pub speed: f64,
}

impl Wind {
    pub const fn new(bearing: f64, speed: f64) -> Self {
        Self { bearing, speed }
    }
}

/// Flight mode reported by the instrument's vario/speed-command switch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FlightMode {
    Cruise,
    Circling,
    Unknown,
}

impl FlightMode {
    /// Maps the instrument's two-letter state code to a mode. Total: any
    /// unrecognized code is `Unknown`.
    pub fn from_code(code: &str) -> Self {
        match code {
            "SF" => FlightMode::Cruise,
            "VA" => FlightMode::Circling,
            _ => FlightMode::Unknown,
        }
    }
}

/// Receives the physical-quantity updates decoded from sentences.
///
/// Implemented by the shared flight-state model. Speeds are in m/s,
/// directions in degrees, times in seconds on the model's own clock. Updates
/// arrive one at a time, immediately, while a decode call is running; merge
/// and staleness discipline is the implementor's business.
pub trait StateSink {
    /// The model's current time, paired with externally-provided settings.
    fn clock(&self) -> f64;

    fn provide_true_airspeed(&mut self, speed: f64);

    fn provide_total_energy_vario(&mut self, vario: f64);

    fn provide_external_wind(&mut self, wind: Wind);

    fn provide_mac_cready(&mut self, value: f64, time: f64);

    fn provide_flight_mode(&mut self, mode: FlightMode);
}

/// Receives free-text messages for pilot display.
///
/// Text is at most [`MAX_MESSAGE_LEN`](crate::MAX_MESSAGE_LEN) bytes.
pub trait NotificationSink {
    fn add_message(&mut self, text: &str);
}
