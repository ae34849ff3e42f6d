use serde::{Deserialize, Serialize};
use steel::*;

use crate::state::config_pda;

use super::DvFactorAccount;

/// Config is a singleton account holding the admin authority. The admin
/// manages editions, the employee roster, payment confirmations and
/// settlements.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Config {
    /// The admin authority.
    pub admin: Pubkey,
}

impl Config {
    pub fn pda() -> (Pubkey, u8) {
        config_pda()
    }
}

account!(DvFactorAccount, Config);
