/*!
config.rs - Construction-time configuration for the 6502 core.

The one semantically meaningful knob is decimal (BCD) arithmetic. The
discrete NMOS part implements it; the Ricoh 2A03 derivative ships the same
instruction set but with the decimal circuitry cut, so its D flag can be set
and cleared yet never influences ADC/SBC. Asking for decimal arithmetic on a
2A03 is a configuration error and is rejected when the CPU is built, never
at instruction-execution time.
*/

use std::error::Error;
use std::fmt;

/// Which physical part is being modeled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Discrete NMOS 6502; decimal mode is implemented in hardware.
    Nmos6502,
    /// Ricoh 2A03 (NES). The D flag exists but the decimal circuitry does not.
    Ricoh2A03,
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variant::Nmos6502 => write!(f, "NMOS 6502"),
            Variant::Ricoh2A03 => write!(f, "Ricoh 2A03"),
        }
    }
}

/// Rejected configuration, reported by [`crate::Cpu::with_config`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Decimal arithmetic requested on a variant without decimal circuitry.
    DecimalUnsupported(Variant),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::DecimalUnsupported(variant) => {
                write!(f, "{variant} has no decimal circuitry; decimal mode cannot be enabled")
            }
        }
    }
}

impl Error for ConfigError {}

/// CPU construction options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CpuConfig {
    pub variant: Variant,
    /// When false the D flag is inert: SED/CLD/PLP still move the bit, but
    /// ADC/SBC never consult it.
    pub decimal: bool,
}

impl Default for CpuConfig {
    fn default() -> Self {
        Self::nmos()
    }
}

impl CpuConfig {
    /// NMOS 6502 with decimal arithmetic enabled (matches real silicon).
    pub fn nmos() -> Self {
        Self {
            variant: Variant::Nmos6502,
            decimal: true,
        }
    }

    /// Ricoh 2A03: decimal permanently inert.
    pub fn ricoh_2a03() -> Self {
        Self {
            variant: Variant::Ricoh2A03,
            decimal: false,
        }
    }

    /// Enable or disable decimal arithmetic.
    #[must_use]
    pub fn decimal(mut self, enabled: bool) -> Self {
        self.decimal = enabled;
        self
    }

    /// Check variant/option consistency. Called once at CPU construction.
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.decimal && self.variant == Variant::Ricoh2A03 {
            return Err(ConfigError::DecimalUnsupported(self.variant));
        }
        Ok(())
    }
}
