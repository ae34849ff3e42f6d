use dvfactor_api::prelude::*;
use solana_program::log::sol_log;
use steel::*;

/// Initialize the program config. Can only be called once by the program
/// deployer.
pub fn process_initialize(accounts: &[AccountInfo<'_>], _data: &[u8]) -> ProgramResult {
    // Load accounts
    let [signer_info, config_info, system_program] = accounts else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    signer_info.is_signer()?;
    config_info
        .is_empty()?
        .is_writable()?
        .has_seeds(&[CONFIG], &dvfactor_api::ID)?;
    system_program.is_program(&system_program::ID)?;

    // Only the deployer may initialize.
    if *signer_info.key != ADMIN_ADDRESS {
        sol_log("Error: Only the deployer can initialize");
        return Err(DvFactorError::NotAdmin.into());
    }

    create_program_account::<Config>(
        config_info,
        system_program,
        signer_info,
        &dvfactor_api::ID,
        &[CONFIG],
    )?;
    let config = config_info.as_account_mut::<Config>(&dvfactor_api::ID)?;
    config.admin = *signer_info.key;

    sol_log(&format!("Config created at {}", config_info.key));

    Ok(())
}
