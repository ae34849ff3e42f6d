use dvfactor_api::prelude::*;
use solana_program::log::sol_log;
use steel::*;

/// Claims the signer's pending winnings from the edition vault.
pub fn process_claim_winnings(accounts: &[AccountInfo<'_>], _data: &[u8]) -> ProgramResult {
    sol_log("ClaimWinnings");

    // Load accounts.
    let [signer_info, edition_info, bet_info] = accounts else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    signer_info.is_signer()?;
    edition_info.is_writable()?;
    bet_info.is_writable()?;

    let edition = edition_info.as_account::<Edition>(&dvfactor_api::ID)?;
    edition_info.has_seeds(&[EDITION, &edition.year.to_le_bytes()], &dvfactor_api::ID)?;

    let bet = bet_info.as_account_mut::<Bet>(&dvfactor_api::ID)?;
    bet_info.has_seeds(
        &[
            BET,
            &edition.year.to_le_bytes(),
            &signer_info.key.to_bytes(),
        ],
        &dvfactor_api::ID,
    )?;

    if bet.authority != *signer_info.key {
        sol_log("Signer is not the bet authority");
        return Err(DvFactorError::InvalidAuthority.into());
    }
    if bet.edition_year != edition.year {
        sol_log(&format!(
            "Bet belongs to edition {}, not {}",
            bet.edition_year, edition.year
        ));
        return Err(DvFactorError::WrongEdition.into());
    }

    let amount = bet.pending_winnings;
    if amount == 0 {
        sol_log("No pending winnings to claim");
        return Err(DvFactorError::NothingToClaim.into());
    }

    // Clear pending winnings before the transfer.
    bet.pending_winnings = 0;

    // Transfer from the edition vault to the user.
    edition_info.send(amount, signer_info);

    sol_log(&format!(
        "User {} claimed {} from edition {}",
        signer_info.key, amount, edition.year
    ));

    Ok(())
}
