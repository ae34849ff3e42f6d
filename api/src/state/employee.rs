use serde::{Deserialize, Serialize};
use serde_big_array::BigArray;
use steel::*;

use crate::consts::EMPLOYEE_NAME_LEN;
use crate::state::employee_pda;

use super::DvFactorAccount;

/// Employee is a roster entry eligible to be bet on. An employee resigns
/// at most once; there is no re-activation.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Employee {
    /// The roster id this account is derived from.
    pub id: u64,

    /// UTF-8 name, zero padded.
    #[serde(with = "BigArray")]
    pub name: [u8; EMPLOYEE_NAME_LEN],

    /// Unix timestamp of the hire date.
    pub hire_date: i64,

    /// Whether the employee is still active (1) or has resigned (0).
    pub is_active: u8,

    /// Month of the resignation, 1-12 (0 = none). Derived from the
    /// resignation date when the resignation is recorded.
    pub resignation_month: u8,

    /// Order of this resignation within its edition (1 = first, 0 = none).
    pub resignation_rank: u8,

    /// Whether the resignation payout has been settled (0/1).
    pub is_settled: u8,

    /// Padding for alignment.
    pub _padding: [u8; 4],

    /// Unix timestamp of the resignation date (0 = none).
    pub resignation_date: i64,

    /// Unix timestamp at which the resignation was recorded by the admin.
    pub resignation_notified_at: i64,
}

impl Employee {
    pub fn pda(&self) -> (Pubkey, u8) {
        employee_pda(self.id)
    }

    pub fn active(&self) -> bool {
        self.is_active == 1
    }

    pub fn has_resigned(&self) -> bool {
        self.resignation_month != 0
    }

    pub fn settled(&self) -> bool {
        self.is_settled == 1
    }

    /// The name as a string slice, ignoring zero padding.
    pub fn name(&self) -> &str {
        let end = self
            .name
            .iter()
            .position(|&b| b == 0)
            .unwrap_or(EMPLOYEE_NAME_LEN);
        core::str::from_utf8(&self.name[..end]).unwrap_or("")
    }

    pub fn set_resigned(&mut self, date: i64, month: u8, rank: u8, notified_at: i64) {
        self.is_active = 0;
        self.resignation_date = date;
        self.resignation_month = month;
        self.resignation_rank = rank;
        self.resignation_notified_at = notified_at;
    }
}

account!(DvFactorAccount, Employee);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_ignores_padding() {
        let mut employee = Employee::zeroed();
        employee.name[..5].copy_from_slice(b"Marco");
        assert_eq!(employee.name(), "Marco");
    }

    #[test]
    fn test_resignation_transition() {
        let mut employee = Employee::zeroed();
        employee.is_active = 1;
        assert!(employee.active());
        assert!(!employee.has_resigned());

        employee.set_resigned(1_773_532_800, 3, 1, 1_773_600_000);
        assert!(!employee.active());
        assert!(employee.has_resigned());
        assert_eq!(employee.resignation_rank, 1);
        assert!(!employee.settled());
    }
}
