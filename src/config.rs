use std::env;

use crate::engine::allocation::DEFAULT_FEE_BUFFER_BPS;

/// CLMM core package (testnet deployment)
pub const TESTNET_CLMM_PACKAGE: &str =
    "0x5372d555ac734e272659136c2a0cd3227f9b92de67c80dc11250307268af2db8";
pub const TESTNET_GLOBAL_CONFIG: &str =
    "0x9774e359588ead122af1c7e7f64e14ade261cfeecdb5d0eb4a5b3b4c8ab8bd3e";
pub const TESTNET_INTEGRATE_PACKAGE: &str =
    "0x2918cf39850de6d5d94d8196dc878c8c722cd79db659318e00bff57fbb4e2ede";

/// CLMM core package (mainnet deployment)
pub const MAINNET_CLMM_PACKAGE: &str =
    "0x1eabed72c53feb3805120a081dc15963c204dc8d091542592abaf7a35689b2fb";
pub const MAINNET_GLOBAL_CONFIG: &str =
    "0xdaa46292632c3c4d8f31f23ea0f9b36a28ff3677e9684980e4438403a67a3d8f";
pub const MAINNET_INTEGRATE_PACKAGE: &str =
    "0x996c4d9480708fb8b92aa7acf819fb0497b5ec8e65ba06601cae2fb6db3312c3";

/// Smallest leg the planner will emit: 0.01 of a 9-decimal asset. Anything
/// below this is rejected rather than silently rounded away.
pub const DEFAULT_MIN_LEG_AMOUNT: u64 = 10_000_000;

/// Default range half-width, in tick-spacing units.
pub const DEFAULT_WIDTH_IN_SPACINGS: u32 = 100;

/// Static registry values the planner needs: protocol addresses plus the
/// tunables of the allocation policy. Injected, never global.
#[derive(Debug, Clone)]
pub struct PlannerConfig {
    pub clmm_package: String,
    pub global_config: String,
    pub integrate_package: String,
    pub fee_buffer_bps: u32,
    pub min_leg_amount: u64,
    pub width_in_spacings: u32,
}

impl PlannerConfig {
    pub fn testnet() -> Self {
        Self {
            clmm_package: TESTNET_CLMM_PACKAGE.to_string(),
            global_config: TESTNET_GLOBAL_CONFIG.to_string(),
            integrate_package: TESTNET_INTEGRATE_PACKAGE.to_string(),
            fee_buffer_bps: DEFAULT_FEE_BUFFER_BPS,
            min_leg_amount: DEFAULT_MIN_LEG_AMOUNT,
            width_in_spacings: DEFAULT_WIDTH_IN_SPACINGS,
        }
    }

    pub fn mainnet() -> Self {
        Self {
            clmm_package: MAINNET_CLMM_PACKAGE.to_string(),
            global_config: MAINNET_GLOBAL_CONFIG.to_string(),
            integrate_package: MAINNET_INTEGRATE_PACKAGE.to_string(),
            fee_buffer_bps: DEFAULT_FEE_BUFFER_BPS,
            min_leg_amount: DEFAULT_MIN_LEG_AMOUNT,
            width_in_spacings: DEFAULT_WIDTH_IN_SPACINGS,
        }
    }

    /// Load from the environment, starting from the testnet preset.
    /// Addresses are required; tunables fall back to the defaults.
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenv::from_filename("addresses.env").ok();
        dotenv::dotenv().ok();

        Ok(Self {
            clmm_package: env::var("CLMM_PACKAGE").map_err(|_| "CLMM_PACKAGE must be set")?,
            global_config: env::var("CLMM_GLOBAL_CONFIG")
                .map_err(|_| "CLMM_GLOBAL_CONFIG must be set")?,
            integrate_package: env::var("CLMM_INTEGRATE_PACKAGE")
                .map_err(|_| "CLMM_INTEGRATE_PACKAGE must be set")?,
            fee_buffer_bps: env::var("FEE_BUFFER_BPS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_FEE_BUFFER_BPS),
            min_leg_amount: env::var("MIN_LEG_AMOUNT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_MIN_LEG_AMOUNT),
            width_in_spacings: env::var("WIDTH_IN_SPACINGS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_WIDTH_IN_SPACINGS),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_carry_valid_addresses() {
        for cfg in [PlannerConfig::testnet(), PlannerConfig::mainnet()] {
            assert!(cfg.clmm_package.starts_with("0x"));
            assert_eq!(cfg.clmm_package.len(), 66);
            assert!(cfg.global_config.starts_with("0x"));
            assert!(cfg.integrate_package.starts_with("0x"));
            assert_eq!(cfg.fee_buffer_bps, 200);
        }
    }
}
