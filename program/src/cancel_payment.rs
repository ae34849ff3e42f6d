use dvfactor_api::prelude::*;
use solana_program::log::sol_log;
use steel::*;

/// Admin-only instruction to cancel a previously confirmed payment. The
/// pool drops by the payment amount in the same transaction.
pub fn process_cancel_payment(accounts: &[AccountInfo<'_>], _data: &[u8]) -> ProgramResult {
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
        sol_log("Error: Only admin can cancel payments");
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
    if !participant.confirmed() {
        sol_log(&format!(
            "Payment of {} is not confirmed",
            participant.authority
        ));
        return Err(DvFactorError::PaymentNotConfirmed.into());
    }

    participant.set_confirmed(false, 0);

    edition.total_pool = edition
        .total_pool
        .checked_sub(participant.payment_amount)
        .ok_or(DvFactorError::ArithmeticOverflow)?;
    edition.confirmed_count = edition
        .confirmed_count
        .checked_sub(1)
        .ok_or(DvFactorError::ArithmeticOverflow)?;

    sol_log(&format!(
        "Payment of {} canceled, edition {} pool is now {}",
        participant.authority, edition.year, edition.total_pool
    ));

    Ok(())
}
