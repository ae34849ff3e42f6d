use dvfactor_api::prelude::*;
use solana_program::log::sol_log;
use steel::*;

/// Admin-only instruction to finish a closed edition once every resignation
/// of the year has been settled. Payouts are final afterwards.
pub fn process_finish_edition(accounts: &[AccountInfo<'_>], _data: &[u8]) -> ProgramResult {
    // Load accounts
    let [signer_info, config_info, edition_info] = accounts else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    signer_info.is_signer()?;
    config_info.has_seeds(&[CONFIG], &dvfactor_api::ID)?;
    edition_info.is_writable()?;

    let config = config_info.as_account::<Config>(&dvfactor_api::ID)?;

    if config.admin != *signer_info.key {
        sol_log("Error: Only admin can finish editions");
        return Err(DvFactorError::NotAdmin.into());
    }

    let edition = edition_info.as_account_mut::<Edition>(&dvfactor_api::ID)?;
    edition_info.has_seeds(&[EDITION, &edition.year.to_le_bytes()], &dvfactor_api::ID)?;

    if !edition.is_closed() {
        sol_log(&format!(
            "Edition {} is not closed (status {})",
            edition.year, edition.status
        ));
        return Err(DvFactorError::InvalidStatusTransition.into());
    }
    edition.status = STATUS_FINISHED;

    sol_log(&format!(
        "Edition {} finished: pool {}, distributed {}",
        edition.year, edition.total_pool, edition.total_distributed
    ));

    Ok(())
}
