mod bet;
mod config;
mod edition;
mod employee;
mod participant;

pub use bet::*;
pub use config::*;
pub use edition::*;
pub use employee::*;
pub use participant::*;

use steel::*;

use crate::consts::*;

#[repr(u8)]
#[derive(Clone, Copy, Debug, Eq, PartialEq, IntoPrimitive, TryFromPrimitive)]
pub enum DvFactorAccount {
    Config = 100,
    Edition = 101,
    Participant = 102,
    Employee = 103,
    Bet = 104,
}

pub fn config_pda() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[CONFIG], &crate::id())
}

pub fn edition_pda(year: u64) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[EDITION, &year.to_le_bytes()], &crate::id())
}

pub fn participant_pda(year: u64, authority: Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[PARTICIPANT, &year.to_le_bytes(), &authority.to_bytes()],
        &crate::id(),
    )
}

pub fn employee_pda(id: u64) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[EMPLOYEE, &id.to_le_bytes()], &crate::id())
}

pub fn bet_pda(year: u64, authority: Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[BET, &year.to_le_bytes(), &authority.to_bytes()],
        &crate::id(),
    )
}
