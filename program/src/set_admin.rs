use dvfactor_api::prelude::*;
use solana_program::log::sol_log;
use steel::*;

/// Rotate the admin authority.
pub fn process_set_admin(accounts: &[AccountInfo<'_>], data: &[u8]) -> ProgramResult {
    // Parse args
    let args = SetAdmin::try_from_bytes(data)?;

    // Load accounts
    let [signer_info, config_info] = accounts else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    signer_info.is_signer()?;
    config_info
        .is_writable()?
        .has_seeds(&[CONFIG], &dvfactor_api::ID)?;

    let config = config_info.as_account_mut::<Config>(&dvfactor_api::ID)?;

    if config.admin != *signer_info.key {
        sol_log("Error: Only admin can rotate the admin key");
        return Err(DvFactorError::NotAdmin.into());
    }

    config.admin = args.new_admin;

    sol_log(&format!("Admin set to {}", config.admin));

    Ok(())
}
