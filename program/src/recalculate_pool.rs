use dvfactor_api::prelude::*;
use solana_program::log::sol_log;
use steel::*;

/// Admin-only instruction to recompute an edition's pool from its full
/// participant set, passed as trailing accounts. The stored total is
/// overwritten with jackpot + confirmed payments, so a second run with no
/// intervening payment change is a no-op.
pub fn process_recalculate_pool(accounts: &[AccountInfo<'_>], _data: &[u8]) -> ProgramResult {
    // Load accounts.
    let [signer_info, config_info, edition_info, participant_infos @ ..] = accounts else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    signer_info.is_signer()?;
    config_info.has_seeds(&[CONFIG], &dvfactor_api::ID)?;
    edition_info.is_writable()?;

    let config = config_info.as_account::<Config>(&dvfactor_api::ID)?;

    if config.admin != *signer_info.key {
        sol_log("Error: Only admin can recalculate the pool");
        return Err(DvFactorError::NotAdmin.into());
    }

    let edition = edition_info.as_account_mut::<Edition>(&dvfactor_api::ID)?;
    edition_info.has_seeds(&[EDITION, &edition.year.to_le_bytes()], &dvfactor_api::ID)?;

    // Sum confirmed payments, rejecting accounts from other editions and
    // duplicate passes of the same participant.
    let mut seen: Vec<Pubkey> = Vec::with_capacity(participant_infos.len());
    let mut confirmed_payments: Vec<u64> = Vec::with_capacity(participant_infos.len());
    let mut confirmed_count: u64 = 0;
    for participant_info in participant_infos {
        let participant = participant_info.as_account::<Participant>(&dvfactor_api::ID)?;
        if participant.edition_year != edition.year {
            sol_log(&format!(
                "Participant {} belongs to edition {}, not {}",
                participant.authority, participant.edition_year, edition.year
            ));
            return Err(DvFactorError::WrongEdition.into());
        }
        if seen.contains(&participant.authority) {
            sol_log(&format!(
                "Participant {} passed twice",
                participant.authority
            ));
            return Err(DvFactorError::InvalidAccount.into());
        }
        seen.push(participant.authority);
        if participant.confirmed() {
            confirmed_payments.push(participant.payment_amount);
            confirmed_count += 1;
        }
    }

    edition.total_pool = total_pool(edition.jackpot, confirmed_payments)?;
    edition.confirmed_count = confirmed_count;

    sol_log(&format!(
        "Edition {} pool recalculated over {} participants: {}",
        edition.year,
        seen.len(),
        edition.total_pool
    ));

    Ok(())
}
