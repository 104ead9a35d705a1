//! Error types for the PHY management core
//!
//! Errors are organized by domain for better diagnostics:
//! - [`ConfigError`]: API misuse caught before any bus traffic
//! - [`DeviceError`]: the transceiver is absent or does not behave as required
//! - [`IoError`]: bounded register-bus or PHY polls that ran out
//!
//! The unified [`Error`] enum wraps all domain errors and is returned
//! by most driver methods.

// =============================================================================
// Configuration Errors
// =============================================================================

/// Configuration and usage errors
///
/// These are detected locally, before the MDIO bus is touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// PHY address outside the 5-bit range (must be 0-31)
    InvalidPhyAddress,
    /// Register number outside the 5-bit range (must be 0-31)
    InvalidRegister,
    /// A PHY address has already been discovered for this driver state
    AlreadyInitialized,
    /// Operation needs a discovered PHY address
    NotInitialized,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ConfigError {
    /// Returns a human-readable description of the error
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ConfigError::InvalidPhyAddress => "invalid PHY address",
            ConfigError::InvalidRegister => "invalid PHY register",
            ConfigError::AlreadyInitialized => "PHY address already discovered",
            ConfigError::NotInitialized => "PHY address not discovered",
        }
    }
}

// =============================================================================
// Device Errors
// =============================================================================

/// Transceiver errors
///
/// These abort PHY bring-up; the network interface is then reported as
/// not present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DeviceError {
    /// No address on the bus answered with a valid identifier pair
    NotFound,
    /// BMSR reports that the PHY cannot autonegotiate
    AutoNegotiationUnsupported,
    /// Soft reset bit did not self-clear in time
    ResetFailed,
}

impl core::fmt::Display for DeviceError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl DeviceError {
    /// Returns a human-readable description of the error
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            DeviceError::NotFound => "no PHY found on MDIO bus",
            DeviceError::AutoNegotiationUnsupported => "auto-negotiation not supported",
            DeviceError::ResetFailed => "PHY soft reset failed",
        }
    }
}

// =============================================================================
// I/O Errors
// =============================================================================

/// Bounded-wait errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IoError {
    /// A bounded poll ran out before the awaited condition held
    Timeout,
}

impl core::fmt::Display for IoError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl IoError {
    /// Returns a human-readable description of the error
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            IoError::Timeout => "operation timed out",
        }
    }
}

// =============================================================================
// Unified Error Type
// =============================================================================

/// This enum wraps all domain-specific errors for unified error handling.
///
/// Match on the inner domain error for specific handling:
/// ```ignore
/// match result {
///     Err(Error::Device(DeviceError::NotFound)) => { /* no PHY fitted */ }
///     Err(Error::Io(IoError::Timeout)) => { /* treat link as down */ }
///     _ => {}
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Configuration error
    Config(ConfigError),
    /// Device error
    Device(DeviceError),
    /// I/O error
    Io(IoError),
}

impl Error {
    /// `true` if this is a bounded-wait timeout
    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(self, Error::Io(IoError::Timeout))
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Config(e) => write!(f, "config: {}", e.as_str()),
            Error::Device(e) => write!(f, "device: {}", e.as_str()),
            Error::Io(e) => write!(f, "io: {}", e.as_str()),
        }
    }
}

// From impls for automatic conversion
impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<DeviceError> for Error {
    fn from(e: DeviceError) -> Self {
        Error::Device(e)
    }
}

impl From<IoError> for Error {
    fn from(e: IoError) -> Self {
        Error::Io(e)
    }
}

/// Result type alias for PHY operations
pub type Result<T> = core::result::Result<T, Error>;

/// Result type alias for configuration checks
pub type ConfigResult<T> = core::result::Result<T, ConfigError>;

/// Result type alias for device-level failures
pub type DeviceResult<T> = core::result::Result<T, DeviceError>;

/// Result type alias for bounded waits
pub type IoResult<T> = core::result::Result<T, IoError>;

// =============================================================================
// Unit Tests
// =============================================================================
