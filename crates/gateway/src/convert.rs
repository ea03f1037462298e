//! Wei to ether conversion at the API boundary.

use alloy::primitives::U256;

const ETH_DECIMALS: u8 = 18;

/// Convert wei to ether as f64.
///
/// May lose precision for very large amounts; acceptable for display and
/// the best-effort mirror, never used for settlement.
pub fn wei_to_ether(wei: U256) -> f64 {
    let divisor = U256::from(10u64).pow(U256::from(ETH_DECIMALS));
    let whole = wei / divisor;
    let fraction = wei % divisor;

    let whole_f64 = whole.to_string().parse::<f64>().unwrap_or(0.0);
    let fraction_f64 =
        fraction.to_string().parse::<f64>().unwrap_or(0.0) / 10_f64.powi(ETH_DECIMALS as i32);

    whole_f64 + fraction_f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_ether() {
        let one_eth_wei = U256::from(1_000_000_000_000_000_000u128);
        let eth = wei_to_ether(one_eth_wei);
        assert!((eth - 1.0).abs() < 0.0001);
    }

    #[test]
    fn test_fractional_ether() {
        let wei = U256::from(2_500_000_000_000_000_000u128);
        let eth = wei_to_ether(wei);
        assert!((eth - 2.5).abs() < 0.0001);
    }

    #[test]
    fn test_zero() {
        assert_eq!(wei_to_ether(U256::ZERO), 0.0);
    }

    #[test]
    fn test_sub_wei_precision() {
        let wei = U256::from(1u64);
        let eth = wei_to_ether(wei);
        assert!(eth > 0.0 && eth < 1e-17);
    }
}
