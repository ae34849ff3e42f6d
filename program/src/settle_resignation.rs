use dvfactor_api::prelude::*;
use solana_program::log::sol_log;
use steel::*;

/// Admin-only instruction to settle the payout for one resigned employee.
/// The edition's full bet set is passed as trailing accounts; the handler
/// selects the bets that picked the employee, resolves the payout
/// percentage for (resignation month, selector count), applies the rank
/// share, and credits each selector's pending winnings per the Chiringuito
/// split. A resignation settles exactly once.
pub fn process_settle_resignation(accounts: &[AccountInfo<'_>], _data: &[u8]) -> ProgramResult {
    // Load accounts.
    let [signer_info, config_info, edition_info, employee_info, bet_infos @ ..] = accounts else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    signer_info.is_signer()?;
    config_info.has_seeds(&[CONFIG], &dvfactor_api::ID)?;
    edition_info.is_writable()?;
    employee_info.is_writable()?;

    let config = config_info.as_account::<Config>(&dvfactor_api::ID)?;

    if config.admin != *signer_info.key {
        sol_log("Error: Only admin can settle resignations");
        return Err(DvFactorError::NotAdmin.into());
    }

    let edition = edition_info.as_account_mut::<Edition>(&dvfactor_api::ID)?;
    edition_info.has_seeds(&[EDITION, &edition.year.to_le_bytes()], &dvfactor_api::ID)?;

    let employee = employee_info.as_account_mut::<Employee>(&dvfactor_api::ID)?;
    employee_info.has_seeds(&[EMPLOYEE, &employee.id.to_le_bytes()], &dvfactor_api::ID)?;

    if edition.is_finished() {
        sol_log(&format!("Edition {} is finished", edition.year));
        return Err(DvFactorError::EditionFinished.into());
    }
    if !employee.has_resigned() {
        sol_log(&format!("Employee {} has not resigned", employee.id));
        return Err(DvFactorError::NotResigned.into());
    }
    if employee.settled() {
        sol_log(&format!(
            "Resignation of employee {} already settled",
            employee.id
        ));
        return Err(DvFactorError::AlreadySettled.into());
    }

    // Pass 1: collect the stakes of every bet that picked this employee,
    // rejecting foreign editions and duplicate passes of the same bet.
    let mut seen: Vec<Pubkey> = Vec::with_capacity(bet_infos.len());
    let mut selector_indices: Vec<usize> = Vec::new();
    let mut stakes: Vec<SelectorStake> = Vec::new();
    for (i, bet_info) in bet_infos.iter().enumerate() {
        let bet = bet_info.as_account::<Bet>(&dvfactor_api::ID)?;
        if bet.edition_year != edition.year {
            sol_log(&format!(
                "Bet of {} belongs to edition {}, not {}",
                bet.authority, bet.edition_year, edition.year
            ));
            return Err(DvFactorError::WrongEdition.into());
        }
        if seen.contains(&bet.authority) {
            sol_log(&format!("Bet of {} passed twice", bet.authority));
            return Err(DvFactorError::InvalidAccount.into());
        }
        seen.push(bet.authority);
        if bet.picked(employee.id) {
            selector_indices.push(i);
            stakes.push(SelectorStake {
                authority: bet.authority,
                has_bonus: bet.bonus_on(employee.id),
            });
        }
    }

    // Nobody picked this employee: nothing is attributable. The amount
    // stays in the edition vault and can be rolled into a later jackpot.
    if stakes.is_empty() {
        employee.is_settled = 1;
        sol_log(&format!(
            "Employee {}: no selectors, payout forfeited",
            employee.id
        ));
        return Ok(());
    }

    let bps = payout_bps(employee.resignation_month, stakes.len())?;
    let share = rank_share_bps(employee.resignation_rank);
    let attributable = attributable_amount(edition.total_pool, bps, share)?;
    if attributable == 0 {
        employee.is_settled = 1;
        sol_log(&format!(
            "Employee {}: month {} rank {} with {} selectors pays nothing",
            employee.id,
            employee.resignation_month,
            employee.resignation_rank,
            stakes.len()
        ));
        return Ok(());
    }

    let amounts = distribute(attributable, &stakes)?;

    // Pass 2: credit each selecting bet.
    let mut credited: u64 = 0;
    for (stake_idx, &account_idx) in selector_indices.iter().enumerate() {
        let amount = amounts[stake_idx];
        if amount == 0 {
            continue;
        }
        let bet_info = &bet_infos[account_idx];
        bet_info.is_writable()?;
        let bet = bet_info.as_account_mut::<Bet>(&dvfactor_api::ID)?;
        bet.pending_winnings = bet
            .pending_winnings
            .checked_add(amount)
            .ok_or(DvFactorError::ArithmeticOverflow)?;
        bet.total_won = bet
            .total_won
            .checked_add(amount)
            .ok_or(DvFactorError::ArithmeticOverflow)?;
        credited = credited
            .checked_add(amount)
            .ok_or(DvFactorError::ArithmeticOverflow)?;
        #[cfg(feature = "debug")]
        sol_log(&format!("Credited {} to {}", amount, bet.authority));
    }

    // The distribution never hands out more than the attributable amount.
    if credited > attributable {
        sol_log("Distributed more than the attributable amount");
        return Err(DvFactorError::ArithmeticOverflow.into());
    }

    edition.total_distributed = edition
        .total_distributed
        .checked_add(credited)
        .ok_or(DvFactorError::ArithmeticOverflow)?;
    employee.is_settled = 1;

    sol_log(&format!(
        "Employee {} settled: {} bps x rank share {} bps x pool {} = {} over {} selectors",
        employee.id,
        bps,
        share,
        edition.total_pool,
        credited,
        stakes.len()
    ));

    Ok(())
}

#[cfg(test)]
mod tests {
    use dvfactor_api::prelude::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use steel::*;

    #[test]
    fn test_distribution_conserves_random_inputs() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..256 {
            let pool = rng.gen_range(0..5_000_000u64);
            let month = rng.gen_range(1..=12u8);
            let count = rng.gen_range(1..=16usize);
            let stakes: Vec<SelectorStake> = (0..count)
                .map(|_| SelectorStake {
                    authority: Pubkey::new_from_array(rng.gen()),
                    has_bonus: rng.gen_bool(0.3),
                })
                .collect();

            let bps = payout_bps(month, count).unwrap();
            let rank = rng.gen_range(0..=4u8);
            let attributable = attributable_amount(pool, bps, rank_share_bps(rank)).unwrap();
            let amounts = distribute(attributable, &stakes).unwrap();
            assert_eq!(amounts.len(), stakes.len());
            assert_eq!(amounts.iter().sum::<u64>(), attributable);
        }
    }

    #[test]
    fn test_settlement_amounts_match_worked_example() {
        // EUR 80.00 pool, March resignation picked by two players, first
        // resignation of the edition, one Chiringuito activator.
        let bps = payout_bps(3, 2).unwrap();
        let attributable = attributable_amount(8_000, bps, rank_share_bps(1)).unwrap();
        assert_eq!(attributable, 2_240);

        let stakes = [
            SelectorStake {
                authority: Pubkey::new_from_array([1; 32]),
                has_bonus: true,
            },
            SelectorStake {
                authority: Pubkey::new_from_array([2; 32]),
                has_bonus: false,
            },
        ];
        let amounts = distribute(attributable, &stakes).unwrap();
        assert_eq!(amounts, vec![1_344, 896]);
    }
}
