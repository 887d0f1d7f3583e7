//! The "1byte" emissions model.

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::EmissionsModel;

/// Embedded JSON with the model coefficients.
const ONEBYTE_JSON: &str = include_str!("../data/onebyte.json");

/// Static model instance.
static ONEBYTE: OnceLock<OneByte> = OnceLock::new();

/// Network energy per byte for each access technology, in kWh.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NetworkEnergy {
    /// Fixed wired broadband.
    pub fixed_wired: f64,
    /// Fixed broadband over WiFi.
    pub fixed_wifi: f64,
    /// 4G mobile.
    pub mobile_4g: f64,
}

impl NetworkEnergy {
    /// Returns the unweighted mean across access technologies.
    #[must_use]
    pub fn mean(&self) -> f64 {
        (self.fixed_wired + self.fixed_wifi + self.mobile_4g) / 3.0
    }
}

/// Grid carbon intensity in grams of CO2 per kWh.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridIntensity {
    /// Data centre on the average grid mix.
    pub data_center_grey: f64,
    /// Data centre on renewable energy.
    pub data_center_green: f64,
    /// Network on the average grid mix.
    pub network_grey: f64,
}

/// The "1byte" model.
///
/// Energy per byte is split into a data centre share and a network share.
/// When hosting is unknown both shares are charged at the grey data centre
/// intensity. When the host is known to be green the data centre share uses
/// the green intensity and the network share the grey network intensity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OneByte {
    /// Data centre energy per byte, in kWh.
    pub data_center_kwh_per_byte: f64,
    /// Network energy per byte, in kWh.
    pub network_kwh_per_byte: NetworkEnergy,
    /// Grid carbon intensities.
    pub grid_intensity: GridIntensity,
}

impl OneByte {
    /// Returns the global model instance.
    ///
    /// This lazily initializes the model from embedded JSON on first access.
    #[must_use]
    pub fn global() -> &'static Self {
        ONEBYTE.get_or_init(|| {
            Self::from_json(ONEBYTE_JSON).expect("embedded onebyte.json should be valid")
        })
    }

    /// Creates a model from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is invalid.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Returns the total energy per byte (data centre plus network), in kWh.
    #[must_use]
    pub fn kwh_per_byte(&self) -> f64 {
        self.data_center_kwh_per_byte + self.network_kwh_per_byte.mean()
    }
}

impl Default for OneByte {
    fn default() -> Self {
        Self::global().clone()
    }
}

impl EmissionsModel for OneByte {
    fn estimate(&self, bytes: u64, green_hosting_unknown: bool) -> f64 {
        if bytes < 1 {
            return 0.0;
        }
        let bytes = bytes as f64;
        let intensity = &self.grid_intensity;

        if green_hosting_unknown {
            return bytes * self.kwh_per_byte() * intensity.data_center_grey;
        }

        let data_center = bytes * self.data_center_kwh_per_byte * intensity.data_center_green;
        let network = bytes * self.network_kwh_per_byte.mean() * intensity.network_grey;
        data_center + network
    }

    fn name(&self) -> &str {
        "1byte"
    }
}
