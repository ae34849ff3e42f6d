use dvfactor_api::prelude::*;
use solana_program::log::sol_log;
use steel::*;

/// Enrolls the signer in an open edition. The entry fee moves into the
/// edition vault immediately; the payment still counts toward the pool only
/// once the admin confirms it.
pub fn process_join_edition(accounts: &[AccountInfo<'_>], _data: &[u8]) -> ProgramResult {
    // Load accounts.
    let [signer_info, edition_info, participant_info, system_program] = accounts else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    signer_info.is_signer()?;
    edition_info.is_writable()?;
    system_program.is_program(&system_program::ID)?;

    let edition = edition_info.as_account_mut::<Edition>(&dvfactor_api::ID)?;
    edition_info.has_seeds(&[EDITION, &edition.year.to_le_bytes()], &dvfactor_api::ID)?;

    if !edition.is_open() {
        sol_log(&format!("Edition {} is not open", edition.year));
        return Err(DvFactorError::EditionNotOpen.into());
    }

    // One enrollment per (user, edition); a second join is rejected, not
    // merged.
    if !participant_info.data_is_empty() {
        sol_log(&format!(
            "User {} already joined edition {}",
            signer_info.key, edition.year
        ));
        return Err(DvFactorError::AlreadyJoined.into());
    }
    participant_info.is_writable()?.has_seeds(
        &[
            PARTICIPANT,
            &edition.year.to_le_bytes(),
            &signer_info.key.to_bytes(),
        ],
        &dvfactor_api::ID,
    )?;

    let clock = Clock::get()?;

    create_program_account::<Participant>(
        participant_info,
        system_program,
        signer_info,
        &dvfactor_api::ID,
        &[
            PARTICIPANT,
            &edition.year.to_le_bytes(),
            &signer_info.key.to_bytes(),
        ],
    )?;
    let participant = participant_info.as_account_mut::<Participant>(&dvfactor_api::ID)?;
    participant.authority = *signer_info.key;
    participant.edition_year = edition.year;
    participant.payment_amount = edition.entry_fee;
    participant.payment_confirmed = 0;
    participant.has_bet = 0;
    participant.payment_date = 0;
    participant.created_at = clock.unix_timestamp;

    // Collect the entry fee into the edition vault.
    edition_info.collect(edition.entry_fee, signer_info)?;

    edition.participant_count = edition
        .participant_count
        .checked_add(1)
        .ok_or(DvFactorError::ArithmeticOverflow)?;

    sol_log(&format!(
        "User {} joined edition {} (entry fee {})",
        signer_info.key, edition.year, edition.entry_fee
    ));

    Ok(())
}
