//! Compensation of raw ADC frames into physical units.
//!
//! Everything in this module is a pure function of the raw frame, the
//! calibration coefficients and the configured sea-level pressure; no bus
//! I/O happens here. The polynomials follow the manufacturer formulas,
//! including their operation order: reassociating the divisions and
//! multiplications changes the result at the precision the device
//! specifies.

use crate::calib::Calibration;
use crate::{Celsius, Milliseconds, RawFrame};

/// Constants and lookup tables provided by Bosch for the gas resistance
/// calculation.
mod gas_constants {
    /// Base compensation table, indexed by the 4-bit gas range.
    pub static LOOKUP_1: [f64; 16] = [
        2147483647.0,
        2147483647.0,
        2147483647.0,
        2147483647.0,
        2147483647.0,
        2126008810.0,
        2147483647.0,
        2130303777.0,
        2147483647.0,
        2147483647.0,
        2143188679.0,
        2136746228.0,
        2147483647.0,
        2126008810.0,
        2147483647.0,
        2147483647.0,
    ];
    /// Range scaling table converting the gas ADC value into Ohm.
    pub static LOOKUP_2: [f64; 16] = [
        4096000000.0,
        2048000000.0,
        1024000000.0,
        512000000.0,
        255744255.0,
        127110228.0,
        64000000.0,
        32258064.0,
        16016016.0,
        8000000.0,
        4000000.0,
        2000000.0,
        1000000.0,
        500000.0,
        250000.0,
        125000.0,
    ];
}

/// Rounds to two decimal places, half away from zero.
pub(crate) fn round2(value: f64) -> f64 {
    libm::round(value * 100.0) / 100.0
}

/// Result of the temperature stage.
///
/// `t_fine` and `temp_scaled` are intermediate values consumed by the
/// pressure and humidity polynomials; neither is part of the public output.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TempStage {
    /// Fine temperature, truncated toward zero. The truncation is part of
    /// the algorithm: every other channel consumes this exact value.
    pub(crate) t_fine: f64,
    /// Temperature scaled by 100, before rounding.
    pub(crate) temp_scaled: f64,
    /// Temperature in °C, rounded to 2 decimals.
    pub(crate) celsius: f64,
}

/// Compensated values of one measurement frame, before derived metrics.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Compensated {
    pub(crate) temperature: f64,
    pub(crate) pressure: f64,
    pub(crate) humidity: f64,
    pub(crate) gas_resistance: f64,
    pub(crate) altitude: f64,
}

/// Converts a raw frame into physical units.
///
/// The temperature stage runs first; pressure and humidity consume its
/// intermediate values and must not be reordered in front of it.
pub(crate) fn compensate(frame: &RawFrame, calib: &Calibration, sea_level_hpa: f64) -> Compensated {
    let temp = fine_temperature(calib, frame.temp_adc);
    let pressure = pressure_hpa(calib, temp.t_fine, frame.press_adc);
    let humidity = humidity_percent(calib, temp.temp_scaled, frame.hum_adc);
    let gas_resistance = gas_ohms(calib, frame.gas_adc, frame.gas_range);
    let altitude = altitude_m(pressure, sea_level_hpa);

    Compensated {
        temperature: temp.celsius,
        pressure,
        humidity,
        gas_resistance,
        altitude,
    }
}

/// Two-stage temperature polynomial over T1-T3.
pub(crate) fn fine_temperature(calib: &Calibration, temp_adc: u32) -> TempStage {
    let var1 = (temp_adc as f64 / 8.0) - (calib.t1 as f64 * 2.0);
    let var2 = (var1 * calib.t2 as f64) / 2048.0;
    let var3 = ((var1 / 2.0) * (var1 / 2.0)) / 4096.0;
    let var3 = (var3 * calib.t3 as f64 * 16.0) / 16384.0;
    let t_fine = libm::trunc(var2 + var3);
    let temp_scaled = ((t_fine * 5.0) + 128.0) / 256.0;

    TempStage {
        t_fine,
        temp_scaled,
        celsius: round2(temp_scaled / 100.0),
    }
}

/// Pressure polynomial over P1-P10 and the fine temperature, in hPa.
pub(crate) fn pressure_hpa(calib: &Calibration, t_fine: f64, press_adc: u32) -> f64 {
    let var1 = (t_fine / 2.0) - 64000.0;
    let var2 = ((var1 / 4.0) * (var1 / 4.0)) / 2048.0;
    let var2 = (var2 * calib.p6 as f64) / 4.0;
    let var2 = var2 + (var1 * calib.p5 as f64 * 2.0);
    let var2 = (var2 / 4.0) + (calib.p4 as f64 * 65536.0);
    let var1 = (((var1 / 4.0) * (var1 / 4.0)) / 8192.0) * (calib.p3 as f64 * 32.0) / 8.0
        + ((calib.p2 as f64 * var1) / 2.0);
    let var1 = var1 / 262144.0;
    let var1 = ((32768.0 + var1) * calib.p1 as f64) / 32768.0;

    let pressure = 1048576.0 - press_adc as f64;
    let pressure = (pressure - (var2 / 4096.0)) * 3125.0;
    let pressure = (pressure / var1) * 2.0;

    let var1 = (calib.p9 as f64 * (((pressure / 8.0) * (pressure / 8.0)) / 8192.0)) / 4096.0;
    let var2 = ((pressure / 4.0) * calib.p8 as f64) / 8192.0;
    let p256 = pressure / 256.0;
    let var3 = ((p256 * p256 * p256) * calib.p10 as f64) / 131072.0;
    let pressure = pressure + (var1 + var2 + var3 + (calib.p7 as f64 * 128.0)) / 16.0;

    round2(pressure / 100.0)
}

/// Humidity polynomial over RH1-RH7 and the scaled temperature, clamped to
/// the 0..100 %RH output range.
pub(crate) fn humidity_percent(calib: &Calibration, temp_scaled: f64, hum_adc: u16) -> f64 {
    let var1 =
        (hum_adc as f64 - (calib.h1 as f64 * 16.0)) - ((temp_scaled * calib.h3 as f64) / 200.0);
    let var2 = (calib.h2 as f64
        * ((temp_scaled * calib.h4 as f64) / 100.0
            + ((temp_scaled * ((temp_scaled * calib.h5 as f64) / 100.0)) / 64.0) / 100.0
            + 16384.0))
        / 1024.0;
    let var3 = var1 * var2;
    let var4 = calib.h6 as f64 * 128.0;
    let var4 = (var4 + ((temp_scaled * calib.h7 as f64) / 100.0)) / 16.0;
    let var5 = ((var3 / 16384.0) * (var3 / 16384.0)) / 1024.0;
    let var6 = (var4 * var5) / 2.0;

    let humidity = (((var3 + var6) / 1024.0) * 1000.0) / 4096.0 / 1000.0;
    let humidity = if humidity >= 100.0 {
        100.0
    } else if humidity <= 0.0 {
        0.0
    } else {
        humidity
    };

    round2(humidity)
}

/// Gas resistance in Ohm from the 10-bit gas ADC value and range index.
pub(crate) fn gas_ohms(calib: &Calibration, gas_adc: u16, gas_range: u8) -> f64 {
    let range = (gas_range & 0x0F) as usize;
    let var1 =
        ((1340.0 + (5.0 * calib.range_sw_err as f64)) * gas_constants::LOOKUP_1[range]) / 65536.0;
    let var2 = ((gas_adc as f64 * 32768.0) - 16777216.0) + var1;
    let var3 = (gas_constants::LOOKUP_2[range] * var1) / 512.0;

    round2((var3 + (var2 / 2.0)) / var2)
}

/// Standard barometric altitude from the compensated pressure.
pub(crate) fn altitude_m(pressure_hpa: f64, sea_level_hpa: f64) -> f64 {
    round2(44330.0 * (1.0 - libm::pow(pressure_hpa / sea_level_hpa, 0.1903)))
}

/// Converts the heater target temperature into the res_heat register code.
///
/// Manufacturer integer formula over G1-G3 and the heater trims. The target
/// is capped at 400 °C to protect the sensor membrane.
pub(crate) fn heater_resistance_code(
    calib: &Calibration,
    ambient: Celsius,
    target: Celsius,
) -> u8 {
    let target = if target.0 <= 400 { target.0 } else { 400 };

    let var1 = ((ambient.0 * calib.g3 as i32) / 1000) * 256;
    let var2 = (calib.g1 as i32 + 784)
        * (((((calib.g2 as i32 + 154009) * target * 5) / 100) + 3276800) / 10);
    let var3 = var1 + (var2 / 2);
    let var4 = var3 / (calib.res_heat_range as i32 + 4);
    let var5 = (131 * calib.res_heat_val as i32) + 65536;

    let res_heat_x100 = ((var4 / var5) - 250) * 34;
    ((res_heat_x100 + 50) / 100) as u8
}

/// Encodes the heater-on time into the gas_wait register format:
/// 6-bit mantissa with a 2-bit multiplier (1/4/16/64 ms steps).
///
/// Returns `None` when the duration exceeds the encodable maximum of
/// 4032 ms (mantissa 63 at the 64 ms step); anything larger would wrap
/// the mantissa and program a shorter wait than requested.
pub(crate) fn heater_duration_code(duration: Milliseconds) -> Option<u8> {
    let ms = duration.0;
    if ms > 4032 {
        return None;
    }

    let (factor, factor_bits) = if ms <= 63 {
        (1, 0b00)
    } else if ms <= 252 {
        (4, 0b01)
    } else if ms <= 1008 {
        (16, 0b10)
    } else {
        (64, 0b11)
    };

    let base = (ms / factor) as u8;
    Some((base & 0x3F) | (factor_bits << 6))
}
