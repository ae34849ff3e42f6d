use steel::*;

use crate::consts::{EMPLOYEE_NAME_LEN, PICKS_PER_BET};

#[repr(u8)]
#[derive(Clone, Copy, Debug, Eq, PartialEq, TryFromPrimitive)]
pub enum DvFactorInstruction {
    // Admin
    Initialize = 0,
    SetAdmin = 1,
    CreateEdition = 2,
    CloseEdition = 3,
    FinishEdition = 4,
    CreateEmployee = 5,
    ConfirmPayment = 6,
    CancelPayment = 7,
    RecalculatePool = 8,
    RecordResignation = 9,
    RevealBets = 10,
    SettleResignation = 11,

    // Player
    JoinEdition = 12,
    PlaceBet = 13,
    ClaimWinnings = 14,
    FundJackpot = 15,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct Initialize {}

#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct SetAdmin {
    pub new_admin: Pubkey,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct CreateEdition {
    pub year: [u8; 8],
    pub entry_fee: [u8; 8],
    pub jackpot: [u8; 8],
    pub starts_at: [u8; 8],
    pub betting_deadline: [u8; 8],
    pub ends_at: [u8; 8],
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct CloseEdition {}

#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct FinishEdition {}

#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct CreateEmployee {
    pub id: [u8; 8],
    pub name: [u8; EMPLOYEE_NAME_LEN],
    pub hire_date: [u8; 8],
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct ConfirmPayment {}

#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct CancelPayment {}

#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct RecalculatePool {}

#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct RecordResignation {
    pub resignation_date: [u8; 8],
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct RevealBets {}

#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct SettleResignation {}

#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct JoinEdition {}

#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct PlaceBet {
    pub picks: [[u8; 8]; PICKS_PER_BET],
    pub bonus_index: u8,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct ClaimWinnings {}

#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct FundJackpot {
    pub amount: [u8; 8],
}

instruction!(DvFactorInstruction, Initialize);
instruction!(DvFactorInstruction, SetAdmin);
instruction!(DvFactorInstruction, CreateEdition);
instruction!(DvFactorInstruction, CloseEdition);
instruction!(DvFactorInstruction, FinishEdition);
instruction!(DvFactorInstruction, CreateEmployee);
instruction!(DvFactorInstruction, ConfirmPayment);
instruction!(DvFactorInstruction, CancelPayment);
instruction!(DvFactorInstruction, RecalculatePool);
instruction!(DvFactorInstruction, RecordResignation);
instruction!(DvFactorInstruction, RevealBets);
instruction!(DvFactorInstruction, SettleResignation);
instruction!(DvFactorInstruction, JoinEdition);
instruction!(DvFactorInstruction, PlaceBet);
instruction!(DvFactorInstruction, ClaimWinnings);
instruction!(DvFactorInstruction, FundJackpot);
