#![cfg_attr(not(test), no_std)]

//! # BME680 Environmental Sensor Driver
//!
//! A `no_std` driver for the Bosch BME680 that turns raw ADC register
//! values into compensated physical readings plus derived air-quality
//! metrics. The typestate pattern ensures calibration data is loaded and
//! the heater is programmed before measurements are taken.
//!
//! ## Features
//! - **Single entry point**: [`Bme680::read`] gates on the configured
//!   sampling interval, triggers one forced conversion, polls for
//!   completion and returns a fully compensated [`Reading`].
//! - **Explicit calibration**: coefficients are parsed once at `init` and
//!   passed explicitly through the compensation pipeline, so the math is
//!   testable with synthetic values.
//! - **Derived metrics**: dew point, gas-quality band and an IAQ score in
//!   addition to the four measured quantities.
//!
//! ## Units
//! - **Temperature / dew point**: °C, 2 decimals
//! - **Pressure**: hPa, 2 decimals
//! - **Humidity**: %RH, clamped to 0..=100
//! - **Gas resistance**: Ohms (Ω), 2 decimals
//! - **Altitude**: m above the configured sea-level reference
//! - **IAQ**: 0 (best) ..= 500 (worst)

mod calc;
pub mod calib;
mod metrics;
mod settings;

pub use calib::Calibration;
pub use metrics::{air_quality_index, dew_point, GasQuality};
pub use settings::{Config, ConfigBuilder, HeaterProfile, IirFilter, Oversampling};

use core::marker::PhantomData;
use embedded_hal::{delay::DelayNs, i2c};

/// Expected value of the chip identification register.
const CHIP_ID: u8 = 0x61;

/// Length of the status + measurement frame burst read.
const FRAME_LEN: usize = 15;

/// Delay between two status-register polls.
const POLL_INTERVAL_MS: u32 = 6;
/// Poll attempts before a conversion is reported as timed out. At 6 ms per
/// attempt this allows ~300 ms, well beyond the longest oversampling setup.
const MAX_POLL_ATTEMPTS: u32 = 50;

/// Register map of the BME680.
mod regs {
    pub const STATUS: u8 = 0x1D;
    pub const RES_HEAT_0: u8 = 0x5A;
    pub const GAS_WAIT_0: u8 = 0x64;
    pub const CTRL_GAS_1: u8 = 0x71;
    pub const CTRL_HUM: u8 = 0x72;
    pub const CTRL_MEAS: u8 = 0x74;
    pub const CONFIG: u8 = 0x75;
    pub const CHIP_ID: u8 = 0xD0;
    pub const RESET: u8 = 0xE0;
    pub const COEFF_BLOCK_1: u8 = 0x89;
    pub const COEFF_BLOCK_2: u8 = 0xE1;
    pub const RES_HEAT_VAL: u8 = 0x00;
    pub const RES_HEAT_RANGE: u8 = 0x02;
    pub const RANGE_SW_ERR: u8 = 0x04;

    /// run_gas bit in ctrl_gas_1.
    pub const RUN_GAS: u8 = 0x10;
    /// Soft-reset command value.
    pub const RESET_CMD: u8 = 0xB6;
    /// new_data bit in the status register.
    pub const NEW_DATA: u8 = 0x80;
}

// --- Typestates ---

/// Sensor has been created but not yet initialized with calibration data.
#[derive(Debug)]
pub struct Uninitialized;
/// Sensor is initialized, heater programmed, ready for measurements.
#[derive(Debug)]
pub struct Ready;

/// Error types for the BME680 driver.
pub mod error {
    /// Errors that can occur during communication or configuration.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    #[cfg_attr(feature = "defmt", derive(defmt::Format))]
    pub enum Bme680Error<E> {
        /// I2C bus error. Never retried internally.
        I2c(E),
        /// The chip identification register did not report a BME680;
        /// carries the value that was read instead.
        DeviceNotFound(u8),
        /// The conversion did not signal new data within the poll budget.
        PollTimeout,
        /// Configured heater duration exceeds the encodable 4032 ms.
        InvalidHeaterDuration,
    }

    /// Result type alias for BME680 operations.
    pub type Result<T, E> = core::result::Result<T, Bme680Error<E>>;
}

use error::Bme680Error;

/// Temperature wrapper for type-safety. Whole degrees Celsius.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Celsius(pub i32);

/// Duration wrapper for type-safety. Stored in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Milliseconds(pub u32);

/// Raw ADC output and status bits of one conversion, read in a single
/// 15-byte burst starting at the status register.
///
/// Produced by one poll cycle, fully consumed by compensation, then
/// discarded.
#[derive(Debug, Copy, Clone)]
pub struct RawFrame {
    /// Raw status byte (new_data, measuring, gas_measuring bits).
    pub status: u8,
    /// 20-bit pressure ADC value.
    pub press_adc: u32,
    /// 20-bit temperature ADC value.
    pub temp_adc: u32,
    /// 16-bit humidity ADC value.
    pub hum_adc: u16,
    /// 10-bit gas ADC value.
    pub gas_adc: u16,
    /// 4-bit range index selecting the gas lookup-table column.
    pub gas_range: u8,
    /// Gas conversion validity bit. Reported but not acted upon: a
    /// saturated gas measurement still produces a reading.
    pub gas_valid: bool,
    /// Heater stability bit. Reported but not acted upon.
    pub heat_stab: bool,
}

impl RawFrame {
    /// Reconstructs the 20-, 16- and 10-bit ADC values from the burst
    /// buffer, per the manufacturer's register layout.
    fn from_registers(buffer: &[u8; FRAME_LEN]) -> Self {
        let press_adc =
            ((buffer[2] as u32) << 12) | ((buffer[3] as u32) << 4) | ((buffer[4] as u32) >> 4);
        let temp_adc =
            ((buffer[5] as u32) << 12) | ((buffer[6] as u32) << 4) | ((buffer[7] as u32) >> 4);
        let hum_adc = ((buffer[8] as u16) << 8) | buffer[9] as u16;
        let gas_adc = ((buffer[13] as u16) << 2) | (buffer[14] as u16 >> 6);
        let gas_range = buffer[14] & 0x0F;
        let gas_valid = (buffer[14] >> 5) & 0x1 != 0;
        let heat_stab = (buffer[14] >> 4) & 0x1 != 0;

        RawFrame {
            status: buffer[0],
            press_adc,
            temp_adc,
            hum_adc,
            gas_adc,
            gas_range,
            gas_valid,
            heat_stab,
        }
    }
}

/// One fully compensated measurement in physical units.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Reading {
    /// Temperature in °C.
    pub temperature: f64,
    /// Barometric pressure in hPa.
    pub pressure: f64,
    /// Relative humidity in %, within 0..=100.
    pub humidity: f64,
    /// Gas resistance in Ohm.
    pub gas_resistance: f64,
    /// Altitude estimate in m, relative to the configured sea-level
    /// reference pressure.
    pub altitude: f64,
    /// Dew point in °C.
    pub dew_point: f64,
    /// Qualitative gas resistance band.
    pub gas_quality: GasQuality,
    /// Air-quality index within 0..=500.
    pub iaq: u16,
}

/// The main BME680 driver structure.
///
/// Use [`Bme680::new`] followed by [`Bme680::init`]. The `STATE` generic
/// uses the typestate pattern to track initialization status at compile
/// time.
#[derive(Debug)]
pub struct Bme680<I2C, STATE> {
    i2c: I2C,
    address: u8,
    config: Config,
    calib: Calibration,
    /// Timestamp of the last completed conversion, for interval gating.
    last_read: Option<Milliseconds>,
    _state: PhantomData<STATE>,
}

impl<I2C, E> Bme680<I2C, Uninitialized>
where
    I2C: i2c::I2c<Error = E>,
{
    /// Creates a new driver instance in the `Uninitialized` state.
    ///
    /// Does not communicate with the sensor yet.
    ///
    /// # Arguments
    /// * `i2c` - The I2C bus object.
    /// * `address` - The I2C address of the sensor (`0x76` or `0x77`).
    /// * `config` - Driver configuration, fixed for the instance lifetime.
    pub fn new(i2c: I2C, address: u8, config: Config) -> Self {
        Bme680 {
            i2c,
            address,
            config,
            calib: Calibration::default(),
            last_read: None,
            _state: PhantomData,
        }
    }

    /// Initializes the sensor: soft-reset, chip identification, factory
    /// calibration readout and gas-heater programming.
    ///
    /// Transitions the driver from `Uninitialized` to `Ready`.
    ///
    /// # Errors
    /// [`Bme680Error::DeviceNotFound`] if the identification register does
    /// not report a BME680; no partially initialized driver is produced.
    /// [`Bme680Error::InvalidHeaterDuration`] if the configured heater
    /// duration cannot be encoded. Bus faults propagate unretried.
    pub fn init(mut self, delay: &mut impl DelayNs) -> error::Result<Bme680<I2C, Ready>, E> {
        self.reset(delay)?;

        let chip_id = self.read_reg_byte(regs::CHIP_ID)?;
        if chip_id != CHIP_ID {
            return Err(Bme680Error::DeviceNotFound(chip_id));
        }

        let calib = self.load_calibration()?;

        // Program heater set-point 0 with the configured profile.
        let res_heat = calc::heater_resistance_code(
            &calib,
            self.config.ambient_temp,
            self.config.heater.target_temp,
        );
        let gas_wait = calc::heater_duration_code(self.config.heater.duration)
            .ok_or(Bme680Error::InvalidHeaterDuration)?;
        self.write_reg(&[regs::RES_HEAT_0, res_heat])?;
        self.write_reg(&[regs::GAS_WAIT_0, gas_wait])?;

        Ok(Bme680 {
            i2c: self.i2c,
            address: self.address,
            config: self.config,
            calib,
            last_read: None,
            _state: PhantomData,
        })
    }

    /// Reads the factory-fused calibration coefficients.
    ///
    /// The BME680 stores them in two non-contiguous blocks plus three
    /// heater-trim registers; parsing is delegated to
    /// [`Calibration::from_registers`].
    fn load_calibration(&mut self) -> error::Result<Calibration, E> {
        let mut block1 = [0u8; calib::COEFF_BLOCK_1_LEN];
        let mut block2 = [0u8; calib::COEFF_BLOCK_2_LEN];

        self.read_into(regs::COEFF_BLOCK_1, &mut block1)?;
        self.read_into(regs::COEFF_BLOCK_2, &mut block2)?;

        let res_heat_val = self.read_reg_byte(regs::RES_HEAT_VAL)?;
        let res_heat_range_reg = self.read_reg_byte(regs::RES_HEAT_RANGE)?;
        let range_sw_err_reg = self.read_reg_byte(regs::RANGE_SW_ERR)?;

        Ok(Calibration::from_registers(
            &block1,
            &block2,
            res_heat_val,
            res_heat_range_reg,
            range_sw_err_reg,
        ))
    }
}

impl<I2C, STATE, E> Bme680<I2C, STATE>
where
    I2C: i2c::I2c<Error = E>,
{
    /// Performs a soft-reset of the sensor and waits out the startup time.
    fn reset(&mut self, delay: &mut impl DelayNs) -> error::Result<(), E> {
        self.write_reg(&[regs::RESET, regs::RESET_CMD])?;
        delay.delay_ms(100);
        Ok(())
    }

    /// Reads data from a starting register address into a provided buffer.
    fn read_into(&mut self, reg_address: u8, buffer: &mut [u8]) -> error::Result<(), E> {
        self.i2c
            .write_read(self.address, &[reg_address], buffer)
            .map_err(Bme680Error::I2c)
    }

    /// Reads a single byte from a specific register address.
    fn read_reg_byte(&mut self, reg_address: u8) -> error::Result<u8, E> {
        let mut buffer = [0];
        self.i2c
            .write_read(self.address, &[reg_address], &mut buffer)
            .map_err(Bme680Error::I2c)?;
        Ok(buffer[0])
    }

    /// Writes a byte slice (typically `[register, value]`) to the sensor.
    fn write_reg(&mut self, data: &[u8]) -> error::Result<(), E> {
        self.i2c.write(self.address, data).map_err(Bme680Error::I2c)
    }
}

impl<I2C, E> Bme680<I2C, Ready>
where
    I2C: i2c::I2c<Error = E>,
{
    /// Performs one gated measurement cycle.
    ///
    /// If less than the configured sampling interval has elapsed since the
    /// last completed conversion, returns `Ok(None)` without any bus
    /// activity. Otherwise the sensor is configured, one forced conversion
    /// is triggered, the status register is polled until the new-data bit
    /// is set and the compensated [`Reading`] is returned.
    ///
    /// `now` is a monotonic millisecond tick from the caller's clock;
    /// wrap-around is handled. The call blocks through configuration,
    /// polling and retrieval.
    ///
    /// # Errors
    /// [`Bme680Error::PollTimeout`] when the conversion does not complete
    /// within the poll budget; bus faults propagate unretried.
    pub fn read(
        &mut self,
        now: Milliseconds,
        delay: &mut impl DelayNs,
    ) -> error::Result<Option<Reading>, E> {
        if let Some(last) = self.last_read {
            if now.0.wrapping_sub(last.0) <= self.config.sample_interval.0 {
                return Ok(None);
            }
        }

        self.trigger_conversion()?;
        let frame = self.poll_frame(delay)?;
        // The gate timestamps at call entry, not at conversion completion:
        // `now` is the only clock reading available, so the effective
        // cadence is interval-to-trigger rather than interval-to-data.
        self.last_read = Some(now);

        Ok(Some(self.compose_reading(&frame)))
    }

    /// The calibration coefficients loaded during `init`.
    pub fn calibration(&self) -> &Calibration {
        &self.calib
    }

    /// The configuration this instance was constructed with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Writes filter, oversampling and gas configuration, then forces a
    /// single one-shot conversion.
    ///
    /// The forced-mode write updates only the mode bits of ctrl_meas and
    /// preserves the oversampling bits already set.
    fn trigger_conversion(&mut self) -> error::Result<(), E> {
        self.write_reg(&[regs::CONFIG, (self.config.iir_filter as u8) << 2])?;
        self.write_reg(&[
            regs::CTRL_MEAS,
            ((self.config.temp_osrs as u8) << 5) | ((self.config.pres_osrs as u8) << 2),
        ])?;
        self.write_reg(&[regs::CTRL_HUM, self.config.hum_osrs as u8])?;
        self.write_reg(&[regs::CTRL_GAS_1, regs::RUN_GAS])?;

        let ctrl_meas = self.read_reg_byte(regs::CTRL_MEAS)?;
        self.write_reg(&[regs::CTRL_MEAS, (ctrl_meas & 0xFC) | 0x01])?;
        Ok(())
    }

    /// Polls the status register until the new-data bit is set, then reads
    /// the full measurement frame in one burst.
    ///
    /// Polling is bounded: after [`MAX_POLL_ATTEMPTS`] reads without new
    /// data the conversion is reported as timed out.
    fn poll_frame(&mut self, delay: &mut impl DelayNs) -> error::Result<RawFrame, E> {
        let mut attempts = 0;
        loop {
            let status = self.read_reg_byte(regs::STATUS)?;
            if status & regs::NEW_DATA != 0 {
                break;
            }
            attempts += 1;
            if attempts >= MAX_POLL_ATTEMPTS {
                return Err(Bme680Error::PollTimeout);
            }
            delay.delay_ms(POLL_INTERVAL_MS);
        }

        let mut buffer = [0u8; FRAME_LEN];
        self.read_into(regs::STATUS, &mut buffer)?;
        Ok(RawFrame::from_registers(&buffer))
    }

    /// Runs compensation and the derived metrics over one raw frame.
    fn compose_reading(&self, frame: &RawFrame) -> Reading {
        let comp = calc::compensate(frame, &self.calib, self.config.sea_level_hpa);

        Reading {
            temperature: comp.temperature,
            pressure: comp.pressure,
            humidity: comp.humidity,
            gas_resistance: comp.gas_resistance,
            altitude: comp.altitude,
            dew_point: metrics::dew_point(comp.temperature, comp.humidity),
            gas_quality: GasQuality::from_resistance(comp.gas_resistance),
            iaq: metrics::air_quality_index(
                comp.gas_resistance,
                self.config.gas_baseline,
                comp.humidity,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calib::test_support::reference_blocks;
    use embedded_hal_mock::eh1::delay::NoopDelay;
    use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTransaction};

    const ADDR: u8 = 0x77;

    /// Bus traffic of a successful `init` with the default config and the
    /// reference calibration blocks.
    fn init_expectations() -> Vec<I2cTransaction> {
        let (block1, block2) = reference_blocks();
        vec![
            I2cTransaction::write(ADDR, vec![regs::RESET, regs::RESET_CMD]),
            I2cTransaction::write_read(ADDR, vec![regs::CHIP_ID], vec![CHIP_ID]),
            I2cTransaction::write_read(ADDR, vec![regs::COEFF_BLOCK_1], block1.to_vec()),
            I2cTransaction::write_read(ADDR, vec![regs::COEFF_BLOCK_2], block2.to_vec()),
            I2cTransaction::write_read(ADDR, vec![regs::RES_HEAT_VAL], vec![0x32]),
            I2cTransaction::write_read(ADDR, vec![regs::RES_HEAT_RANGE], vec![0x16]),
            I2cTransaction::write_read(ADDR, vec![regs::RANGE_SW_ERR], vec![0x2F]),
            // 300 °C / 150 ms heater profile, encoded against the reference
            // calibration.
            I2cTransaction::write(ADDR, vec![regs::RES_HEAT_0, 0x6F]),
            I2cTransaction::write(ADDR, vec![regs::GAS_WAIT_0, 0x65]),
        ]
    }

    /// Bus traffic of one triggered conversion with the default config.
    fn trigger_expectations() -> Vec<I2cTransaction> {
        vec![
            I2cTransaction::write(ADDR, vec![regs::CONFIG, 0x08]),
            I2cTransaction::write(ADDR, vec![regs::CTRL_MEAS, 0x8C]),
            I2cTransaction::write(ADDR, vec![regs::CTRL_HUM, 0x02]),
            I2cTransaction::write(ADDR, vec![regs::CTRL_GAS_1, regs::RUN_GAS]),
            I2cTransaction::write_read(ADDR, vec![regs::CTRL_MEAS], vec![0x8C]),
            I2cTransaction::write(ADDR, vec![regs::CTRL_MEAS, 0x8D]),
        ]
    }

    fn reference_frame_bytes() -> Vec<u8> {
        vec![
            0x80, 0x00, 0x6A, 0xBC, 0x30, 0x76, 0xC4, 0xA0, 0x5E, 0x30, 0x00, 0x00, 0x00, 0x96,
            0x5A,
        ]
    }

    #[test]
    fn init_loads_calibration_and_programs_heater() {
        let mut i2c = I2cMock::new(&init_expectations());
        let driver = Bme680::new(i2c.clone(), ADDR, Config::default());
        let driver = driver.init(&mut NoopDelay).unwrap();

        let calib = driver.calibration();
        assert_eq!(calib.t1, 26127);
        assert_eq!(calib.h1, 0x2DA);
        assert_eq!(calib.range_sw_err, 2);

        i2c.done();
    }

    #[test]
    fn init_fails_on_unknown_chip_id() {
        let expectations = vec![
            I2cTransaction::write(ADDR, vec![regs::RESET, regs::RESET_CMD]),
            I2cTransaction::write_read(ADDR, vec![regs::CHIP_ID], vec![0x60]),
        ];
        let mut i2c = I2cMock::new(&expectations);
        let driver = Bme680::new(i2c.clone(), ADDR, Config::default());

        let err = driver.init(&mut NoopDelay).unwrap_err();
        assert_eq!(err, Bme680Error::DeviceNotFound(0x60));

        i2c.done();
    }

    #[test]
    fn init_rejects_unencodable_heater_duration() {
        let (block1, block2) = reference_blocks();
        let expectations = vec![
            I2cTransaction::write(ADDR, vec![regs::RESET, regs::RESET_CMD]),
            I2cTransaction::write_read(ADDR, vec![regs::CHIP_ID], vec![CHIP_ID]),
            I2cTransaction::write_read(ADDR, vec![regs::COEFF_BLOCK_1], block1.to_vec()),
            I2cTransaction::write_read(ADDR, vec![regs::COEFF_BLOCK_2], block2.to_vec()),
            I2cTransaction::write_read(ADDR, vec![regs::RES_HEAT_VAL], vec![0x32]),
            I2cTransaction::write_read(ADDR, vec![regs::RES_HEAT_RANGE], vec![0x16]),
            I2cTransaction::write_read(ADDR, vec![regs::RANGE_SW_ERR], vec![0x2F]),
        ];
        let config = ConfigBuilder::new()
            .heater(HeaterProfile {
                target_temp: Celsius(300),
                duration: Milliseconds(5000),
            })
            .build();
        let mut i2c = I2cMock::new(&expectations);
        let driver = Bme680::new(i2c.clone(), ADDR, config);

        let err = driver.init(&mut NoopDelay).unwrap_err();
        assert_eq!(err, Bme680Error::InvalidHeaterDuration);

        i2c.done();
    }

    #[test]
    fn read_returns_compensated_reading() {
        let mut expectations = init_expectations();
        expectations.extend(trigger_expectations());
        // First poll sees no new data, second poll does.
        expectations.push(I2cTransaction::write_read(
            ADDR,
            vec![regs::STATUS],
            vec![0x00],
        ));
        expectations.push(I2cTransaction::write_read(
            ADDR,
            vec![regs::STATUS],
            vec![0x80],
        ));
        expectations.push(I2cTransaction::write_read(
            ADDR,
            vec![regs::STATUS],
            reference_frame_bytes(),
        ));

        let mut i2c = I2cMock::new(&expectations);
        let driver = Bme680::new(i2c.clone(), ADDR, Config::default());
        let mut driver = driver.init(&mut NoopDelay).unwrap();

        let reading = driver
            .read(Milliseconds(0), &mut NoopDelay)
            .unwrap()
            .expect("first read is always due");

        assert_eq!(reading.temperature, 21.45);
        assert_eq!(reading.pressure, 834.55);
        assert_eq!(reading.humidity, 68.29);
        assert_eq!(reading.gas_resistance, 7328.9);
        assert_eq!(reading.altitude, 1606.95);
        assert_eq!(reading.dew_point, 15.11);
        assert_eq!(reading.gas_quality, GasQuality::Poor);
        assert_eq!(reading.iaq, 418);

        i2c.done();
    }

    #[test]
    fn read_within_interval_is_not_due_and_touches_no_registers() {
        let mut expectations = init_expectations();
        expectations.extend(trigger_expectations());
        expectations.push(I2cTransaction::write_read(
            ADDR,
            vec![regs::STATUS],
            vec![0x80],
        ));
        expectations.push(I2cTransaction::write_read(
            ADDR,
            vec![regs::STATUS],
            reference_frame_bytes(),
        ));

        let mut i2c = I2cMock::new(&expectations);
        let driver = Bme680::new(i2c.clone(), ADDR, Config::default());
        let mut driver = driver.init(&mut NoopDelay).unwrap();

        assert!(driver
            .read(Milliseconds(0), &mut NoopDelay)
            .unwrap()
            .is_some());
        // 1000 ms interval, only 400 ms elapsed: no bus traffic at all.
        assert!(driver
            .read(Milliseconds(400), &mut NoopDelay)
            .unwrap()
            .is_none());
        // Exactly the interval is still not due; strictly greater is.
        assert!(driver
            .read(Milliseconds(1000), &mut NoopDelay)
            .unwrap()
            .is_none());

        i2c.done();
    }

    #[test]
    fn read_times_out_when_new_data_never_arrives() {
        let mut expectations = init_expectations();
        expectations.extend(trigger_expectations());
        for _ in 0..MAX_POLL_ATTEMPTS {
            expectations.push(I2cTransaction::write_read(
                ADDR,
                vec![regs::STATUS],
                vec![0x00],
            ));
        }

        let mut i2c = I2cMock::new(&expectations);
        let driver = Bme680::new(i2c.clone(), ADDR, Config::default());
        let mut driver = driver.init(&mut NoopDelay).unwrap();

        let err = driver.read(Milliseconds(0), &mut NoopDelay).unwrap_err();
        assert_eq!(err, Bme680Error::PollTimeout);

        i2c.done();
    }

    #[test]
    fn frame_parsing_reconstructs_adc_values() {
        let bytes = reference_frame_bytes();
        let mut buffer = [0u8; FRAME_LEN];
        buffer.copy_from_slice(&bytes);
        let frame = RawFrame::from_registers(&buffer);

        assert_eq!(frame.status, 0x80);
        assert_eq!(frame.press_adc, 437187);
        assert_eq!(frame.temp_adc, 486474);
        assert_eq!(frame.hum_adc, 24112);
        assert_eq!(frame.gas_adc, 601);
        assert_eq!(frame.gas_range, 10);
        // Saturation bits are carried through but never abort a read.
        assert!(!frame.gas_valid);
        assert!(frame.heat_stab);
    }
}
