use crate::{Celsius, Milliseconds};

/// Oversampling settings for temperature, pressure and humidity.
///
/// Higher oversampling rates reduce noise through in-hardware averaging but
/// lengthen the measurement cycle and increase power consumption.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[repr(u8)]
pub enum Oversampling {
    /// No measurement. Disables the corresponding sensor channel entirely.
    Skipped = 0,
    /// 1x oversampling.
    X1 = 1,
    /// 2x oversampling.
    #[default]
    X2 = 2,
    /// 4x oversampling.
    X4 = 3,
    /// 8x oversampling.
    X8 = 4,
    /// 16x oversampling. Maximum precision, longest duration.
    X16 = 5,
}

/// Coefficient for the IIR (infinite impulse response) filter.
///
/// The filter smooths short-term disturbances in the pressure and temperature
/// readings (slamming doors, drafts). It has no effect on humidity or gas.
#[derive(Default, Debug, Clone, Copy)]
#[repr(u8)]
pub enum IirFilter {
    /// Filter disabled.
    Off = 0,
    Coeff1 = 1,
    #[default]
    Coeff3 = 2,
    Coeff7 = 3,
    Coeff15 = 4,
    Coeff31 = 5,
    Coeff63 = 6,
    Coeff127 = 7,
}

/// Configuration for the gas sensor heating plate.
///
/// Before the gas conversion the plate is driven to `target_temp` and held
/// there for `duration`. Both values are translated into register codes once
/// during initialization.
#[derive(Debug, Clone, Copy)]
pub struct HeaterProfile {
    /// Target plate temperature (typically 300 °C to 400 °C, capped at 400).
    pub target_temp: Celsius,
    /// Heat-up time before the gas measurement. Must encode within the
    /// register maximum of 4032 ms.
    pub duration: Milliseconds,
}

impl Default for HeaterProfile {
    fn default() -> Self {
        HeaterProfile {
            target_temp: Celsius(300),
            duration: Milliseconds(150),
        }
    }
}

/// Complete driver configuration, fixed for the lifetime of the instance.
#[derive(Debug, Clone, Copy)]
pub struct Config {
    /// Oversampling for the temperature channel.
    pub temp_osrs: Oversampling,
    /// Oversampling for the pressure channel.
    pub pres_osrs: Oversampling,
    /// Oversampling for the humidity channel.
    pub hum_osrs: Oversampling,
    /// IIR filter coefficient for noise suppression.
    pub iir_filter: IirFilter,
    /// Minimum interval between two conversions. Calls arriving earlier
    /// return the "not due" sentinel without touching the bus.
    pub sample_interval: Milliseconds,
    /// Gas heater target temperature and heat-up duration.
    pub heater: HeaterProfile,
    /// Ambient temperature estimate, needed by the heater resistance formula.
    pub ambient_temp: Celsius,
    /// Sea-level reference pressure in hPa, used for the altitude estimate.
    pub sea_level_hpa: f64,
    /// Gas resistance in clean air, in Ohm. Anchors the air-quality score.
    pub gas_baseline: f64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            temp_osrs: Oversampling::X8,
            pres_osrs: Oversampling::X4,
            hum_osrs: Oversampling::X2,
            iir_filter: IirFilter::Coeff3,
            sample_interval: Milliseconds(1000),
            heater: HeaterProfile::default(),
            ambient_temp: Celsius(25),
            sea_level_hpa: 1013.25,
            gas_baseline: 100_000.0,
        }
    }
}

/// Convenience builder for [`Config`].
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the temperature oversampling.
    pub fn temp_oversampling(mut self, os: Oversampling) -> Self {
        self.config.temp_osrs = os;
        self
    }

    /// Sets the pressure oversampling.
    pub fn pres_oversampling(mut self, os: Oversampling) -> Self {
        self.config.pres_osrs = os;
        self
    }

    /// Sets the humidity oversampling.
    pub fn hum_oversampling(mut self, os: Oversampling) -> Self {
        self.config.hum_osrs = os;
        self
    }

    /// Sets the IIR filter coefficient.
    pub fn iir_filter(mut self, filter: IirFilter) -> Self {
        self.config.iir_filter = filter;
        self
    }

    /// Sets the minimum interval between conversions.
    pub fn sample_interval(mut self, interval: Milliseconds) -> Self {
        self.config.sample_interval = interval;
        self
    }

    /// Sets the gas heater profile.
    pub fn heater(mut self, heater: HeaterProfile) -> Self {
        self.config.heater = heater;
        self
    }

    /// Sets the initial ambient temperature estimate for the heater formula.
    pub fn ambient_temp(mut self, temp: Celsius) -> Self {
        self.config.ambient_temp = temp;
        self
    }

    /// Sets the sea-level reference pressure in hPa.
    pub fn sea_level_hpa(mut self, hpa: f64) -> Self {
        self.config.sea_level_hpa = hpa;
        self
    }

    /// Sets the clean-air gas resistance baseline in Ohm.
    pub fn gas_baseline(mut self, ohms: f64) -> Self {
        self.config.gas_baseline = ohms;
        self
    }

    /// Finalizes the builder.
    pub fn build(self) -> Config {
        self.config
    }
}
