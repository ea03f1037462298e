//! Deterministic canned data for offline development.
//!
//! Fixture mode stands in for the contract when no upstream node access
//! key is configured. It serves two campaigns with ids 0 and 1 whose
//! deadlines are always relative to request time, and a small per-address
//! contribution table.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::{GatewayError, Result};
use crate::Campaign;

pub(crate) const SAMPLE_CONTRACT_ADDRESS: &str = "0x8123d34f5b52e8852cda1accac646b34dd4c77b5";

const SAMPLE_CREATOR_ONE: &str = "0x1234567890123456789012345678901234567890";
const SAMPLE_CREATOR_TWO: &str = "0x2345678901234567890123456789012345678901";

const ONE_WEEK_SECS: u64 = 604_800;
const TWO_WEEKS_SECS: u64 = 1_209_600;

/// Offline stand-in for the contract gateway.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureGateway;

impl FixtureGateway {
    pub fn list_campaigns(&self) -> Vec<Campaign> {
        vec![sample_campaign_one(), sample_campaign_two()]
    }

    pub fn get_campaign(&self, id: u64) -> Result<Campaign> {
        match id {
            0 => Ok(sample_campaign_one()),
            1 => Ok(sample_campaign_two()),
            _ => Err(GatewayError::NotFound { id }),
        }
    }

    pub fn get_contribution(&self, campaign_id: u64, address: &str) -> f64 {
        let address = address.to_ascii_lowercase();
        if address == SAMPLE_CREATOR_ONE {
            if campaign_id == 0 {
                1.5
            } else {
                0.0
            }
        } else if address == SAMPLE_CREATOR_TWO {
            if campaign_id == 0 {
                0.5
            } else {
                3.0
            }
        } else {
            0.0
        }
    }
}

fn sample_campaign_one() -> Campaign {
    Campaign {
        id: 0,
        creator: SAMPLE_CREATOR_ONE.to_string(),
        title: "Sample Campaign 1".to_string(),
        description: "This is a sample campaign for testing purposes".to_string(),
        image_url: "https://picsum.photos/800/500".to_string(),
        funding_goal: 5.0,
        current_amount: 2.5,
        deadline: unix_now() + ONE_WEEK_SECS,
        claimed: false,
        exists: true,
    }
}

fn sample_campaign_two() -> Campaign {
    Campaign {
        id: 1,
        creator: SAMPLE_CREATOR_TWO.to_string(),
        title: "Sample Campaign 2".to_string(),
        description: "Another sample campaign with more details".to_string(),
        image_url: "https://picsum.photos/800/500?random=2".to_string(),
        funding_goal: 10.0,
        current_amount: 7.5,
        deadline: unix_now() + TWO_WEEKS_SECS,
        claimed: false,
        exists: true,
    }
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}
