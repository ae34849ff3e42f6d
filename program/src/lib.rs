mod cancel_payment;
mod claim_winnings;
mod close_edition;
mod confirm_payment;
mod create_edition;
mod create_employee;
mod finish_edition;
mod fund_jackpot;
mod initialize;
mod join_edition;
mod place_bet;
mod recalculate_pool;
mod record_resignation;
mod reveal_bets;
mod set_admin;
mod settle_resignation;

use cancel_payment::*;
use claim_winnings::*;
use close_edition::*;
use confirm_payment::*;
use create_edition::*;
use create_employee::*;
use finish_edition::*;
use fund_jackpot::*;
use initialize::*;
use join_edition::*;
use place_bet::*;
use recalculate_pool::*;
use record_resignation::*;
use reveal_bets::*;
use set_admin::*;
use settle_resignation::*;

use dvfactor_api::instruction::*;
use steel::*;

pub fn process_instruction(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    data: &[u8],
) -> ProgramResult {
    let (ix, data) = parse_instruction(&dvfactor_api::ID, program_id, data)?;

    match ix {
        // Admin
        DvFactorInstruction::Initialize => process_initialize(accounts, data)?,
        DvFactorInstruction::SetAdmin => process_set_admin(accounts, data)?,
        DvFactorInstruction::CreateEdition => process_create_edition(accounts, data)?,
        DvFactorInstruction::CloseEdition => process_close_edition(accounts, data)?,
        DvFactorInstruction::FinishEdition => process_finish_edition(accounts, data)?,
        DvFactorInstruction::CreateEmployee => process_create_employee(accounts, data)?,
        DvFactorInstruction::ConfirmPayment => process_confirm_payment(accounts, data)?,
        DvFactorInstruction::CancelPayment => process_cancel_payment(accounts, data)?,
        DvFactorInstruction::RecalculatePool => process_recalculate_pool(accounts, data)?,
        DvFactorInstruction::RecordResignation => process_record_resignation(accounts, data)?,
        DvFactorInstruction::RevealBets => process_reveal_bets(accounts, data)?,
        DvFactorInstruction::SettleResignation => process_settle_resignation(accounts, data)?,

        // Player
        DvFactorInstruction::JoinEdition => process_join_edition(accounts, data)?,
        DvFactorInstruction::PlaceBet => process_place_bet(accounts, data)?,
        DvFactorInstruction::ClaimWinnings => process_claim_winnings(accounts, data)?,
        DvFactorInstruction::FundJackpot => process_fund_jackpot(accounts, data)?,
    }

    Ok(())
}

entrypoint!(process_instruction);
