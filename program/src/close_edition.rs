use dvfactor_api::prelude::*;
use solana_program::log::sol_log;
use steel::*;

/// Admin-only instruction to close an open edition once the betting
/// deadline has passed. Bets are rejected afterwards; payments may still be
/// confirmed and resignations settled.
pub fn process_close_edition(accounts: &[AccountInfo<'_>], _data: &[u8]) -> ProgramResult {
    // Load accounts
    let [signer_info, config_info, edition_info] = accounts else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    signer_info.is_signer()?;
    config_info.has_seeds(&[CONFIG], &dvfactor_api::ID)?;
    edition_info.is_writable()?;

    let config = config_info.as_account::<Config>(&dvfactor_api::ID)?;

    if config.admin != *signer_info.key {
        sol_log("Error: Only admin can close editions");
        return Err(DvFactorError::NotAdmin.into());
    }

    let edition = edition_info.as_account_mut::<Edition>(&dvfactor_api::ID)?;
    edition_info.has_seeds(&[EDITION, &edition.year.to_le_bytes()], &dvfactor_api::ID)?;

    if !edition.is_open() {
        sol_log(&format!(
            "Edition {} is not open (status {})",
            edition.year, edition.status
        ));
        return Err(DvFactorError::InvalidStatusTransition.into());
    }
    edition.status = STATUS_CLOSED;

    sol_log(&format!("Edition {} closed", edition.year));

    Ok(())
}
