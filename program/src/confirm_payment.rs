use dvfactor_api::prelude::*;
use solana_program::log::sol_log;
use steel::*;

/// Admin-only instruction to confirm a participant's payment. The pool is
/// updated in the same transaction, so the caller reads the new total from
/// the edition account the moment this succeeds.
pub fn process_confirm_payment(accounts: &[AccountInfo<'_>], _data: &[u8]) -> ProgramResult {
    // Load accounts.
    let [signer_info, config_info, edition_info, participant_info] = accounts else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    signer_info.is_signer()?;
    config_info.has_seeds(&[CONFIG], &dvfactor_api::ID)?;
    edition_info.is_writable()?;
    participant_info.is_writable()?;

    let config = config_info.as_account::<Config>(&dvfactor_api::ID)?;

    if config.admin != *signer_info.key {
        sol_log("Error: Only admin can confirm payments");
        return Err(DvFactorError::NotAdmin.into());
    }

    let edition = edition_info.as_account_mut::<Edition>(&dvfactor_api::ID)?;
    edition_info.has_seeds(&[EDITION, &edition.year.to_le_bytes()], &dvfactor_api::ID)?;

    let participant = participant_info.as_account_mut::<Participant>(&dvfactor_api::ID)?;
    participant_info.has_seeds(
        &[
            PARTICIPANT,
            &participant.edition_year.to_le_bytes(),
            &participant.authority.to_bytes(),
        ],
        &dvfactor_api::ID,
    )?;

    if participant.edition_year != edition.year {
        sol_log(&format!(
            "Participant {} belongs to edition {}, not {}",
            participant.authority, participant.edition_year, edition.year
        ));
        return Err(DvFactorError::WrongEdition.into());
    }
    if edition.is_finished() {
        sol_log(&format!("Edition {} is finished", edition.year));
        return Err(DvFactorError::EditionFinished.into());
    }
    if participant.confirmed() {
        sol_log(&format!(
            "Payment of {} is already confirmed",
            participant.authority
        ));
        return Err(DvFactorError::PaymentAlreadyConfirmed.into());
    }

    let clock = Clock::get()?;
    participant.set_confirmed(true, clock.unix_timestamp);

    edition.total_pool = edition
        .total_pool
        .checked_add(participant.payment_amount)
        .ok_or(DvFactorError::ArithmeticOverflow)?;
    edition.confirmed_count = edition
        .confirmed_count
        .checked_add(1)
        .ok_or(DvFactorError::ArithmeticOverflow)?;

    sol_log(&format!(
        "Payment of {} confirmed ({}), edition {} pool is now {}",
        participant.authority, participant.payment_amount, edition.year, edition.total_pool
    ));

    Ok(())
}
