use dvfactor_api::prelude::*;
use solana_program::log::sol_log;
use steel::*;

/// Adds to an edition's jackpot. This can be called by anyone, and is also
/// the vehicle by which forfeited amounts from a previous edition are
/// rolled into the next one.
pub fn process_fund_jackpot(accounts: &[AccountInfo<'_>], data: &[u8]) -> ProgramResult {
    // Parse instruction data.
    let args = FundJackpot::try_from_bytes(data)?;
    let amount = u64::from_le_bytes(args.amount);

    sol_log(&format!("FundJackpot: amount={}", amount));

    // Load accounts.
    let [signer_info, edition_info, system_program] = accounts else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    signer_info.is_signer()?;
    edition_info.is_writable()?;
    system_program.is_program(&system_program::ID)?;

    // Validate amount.
    if amount == 0 || amount > MAX_PAYMENT_AMOUNT {
        sol_log("Amount out of range");
        return Err(DvFactorError::InvalidAmount.into());
    }

    let edition = edition_info.as_account_mut::<Edition>(&dvfactor_api::ID)?;
    edition_info.has_seeds(&[EDITION, &edition.year.to_le_bytes()], &dvfactor_api::ID)?;

    if edition.is_finished() {
        sol_log(&format!("Edition {} is finished", edition.year));
        return Err(DvFactorError::EditionFinished.into());
    }

    // Transfer the contribution into the edition vault.
    edition_info.collect(amount, signer_info)?;

    edition.jackpot = edition
        .jackpot
        .checked_add(amount)
        .ok_or(DvFactorError::ArithmeticOverflow)?;
    edition.total_pool = edition
        .total_pool
        .checked_add(amount)
        .ok_or(DvFactorError::ArithmeticOverflow)?;

    sol_log(&format!(
        "Edition {} jackpot is now {}, pool {}",
        edition.year, edition.jackpot, edition.total_pool
    ));

    Ok(())
}
