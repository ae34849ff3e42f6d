use dvfactor_api::prelude::*;
use solana_program::log::sol_log;
use steel::*;

/// Admin-only instruction to reveal an edition's bets to the other players,
/// typically at the end of the game. Bets are passed as trailing accounts.
pub fn process_reveal_bets(accounts: &[AccountInfo<'_>], _data: &[u8]) -> ProgramResult {
    // Load accounts.
    let [signer_info, config_info, edition_info, bet_infos @ ..] = accounts else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    signer_info.is_signer()?;
    config_info.has_seeds(&[CONFIG], &dvfactor_api::ID)?;

    let config = config_info.as_account::<Config>(&dvfactor_api::ID)?;

    if config.admin != *signer_info.key {
        sol_log("Error: Only admin can reveal bets");
        return Err(DvFactorError::NotAdmin.into());
    }

    let edition = edition_info.as_account::<Edition>(&dvfactor_api::ID)?;
    edition_info.has_seeds(&[EDITION, &edition.year.to_le_bytes()], &dvfactor_api::ID)?;

    for bet_info in bet_infos {
        bet_info.is_writable()?;
        let bet = bet_info.as_account_mut::<Bet>(&dvfactor_api::ID)?;
        if bet.edition_year != edition.year {
            sol_log(&format!(
                "Bet of {} belongs to edition {}, not {}",
                bet.authority, bet.edition_year, edition.year
            ));
            return Err(DvFactorError::WrongEdition.into());
        }
        bet.is_revealed = 1;
    }

    sol_log(&format!(
        "Revealed {} bets of edition {}",
        bet_infos.len(),
        edition.year
    ));

    Ok(())
}
