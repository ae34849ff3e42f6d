use steel::*;

use crate::consts::*;
use crate::error::DvFactorError;

/// One bettor's stake in a resignation event: the claiming authority and
/// whether the Chiringuito bonus was activated on the resigned employee.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectorStake {
    pub authority: Pubkey,
    pub has_bonus: bool,
}

/// Compute an edition's total prize pool: jackpot plus every confirmed
/// payment. Pure over its inputs, so recomputing from the same ledger
/// snapshot always yields the same value.
pub fn total_pool(
    jackpot: u64,
    confirmed_payments: impl IntoIterator<Item = u64>,
) -> Result<u64, ProgramError> {
    let mut pool = jackpot;
    for amount in confirmed_payments {
        pool = pool
            .checked_add(amount)
            .ok_or(DvFactorError::ArithmeticOverflow)?;
    }
    Ok(pool)
}

/// Look up the payout percentage (in basis points) for a resignation in the
/// given month that was picked by `selector_count` distinct players.
///
/// Selector counts above the table's last column clamp to that column. A
/// month outside 1-12 or a zero selector count has no modeled row and is
/// reported as a configuration error rather than defaulting to zero; zero
/// is reserved for table entries that legitimately pay nothing.
pub fn payout_bps(month: u8, selector_count: usize) -> Result<u64, ProgramError> {
    if month == 0 || month as usize > PAYOUT_MONTHS || selector_count == 0 {
        return Err(DvFactorError::PayoutEntryMissing.into());
    }
    let column = selector_count.min(MAX_TRACKED_SELECTORS) - 1;
    Ok(PAYOUT_TABLE_BPS[month as usize - 1][column])
}

/// The pool share carried by a resignation rank (1 = first resignation of
/// the edition). Ranks beyond the third carry nothing.
pub fn rank_share_bps(rank: u8) -> u64 {
    RANK_SHARE_BPS
        .get(rank.wrapping_sub(1) as usize)
        .copied()
        .unwrap_or(0)
}

/// The payout-eligible amount attributable to one resignation:
/// total pool x payout percentage x rank share.
///
/// The full product is taken in u128 before a single division so the
/// two-decimal currency amounts stay exact.
pub fn attributable_amount(
    total_pool: u64,
    payout_bps: u64,
    rank_share_bps: u64,
) -> Result<u64, ProgramError> {
    let product = (total_pool as u128)
        .checked_mul(payout_bps as u128)
        .and_then(|p| p.checked_mul(rank_share_bps as u128))
        .ok_or(DvFactorError::ArithmeticOverflow)?;
    let amount = product / (DENOMINATOR_BPS as u128 * DENOMINATOR_BPS as u128);
    u64::try_from(amount).map_err(|_| DvFactorError::ArithmeticOverflow.into())
}

/// Split `amount` evenly over `count` recipients. Returns the per-head share
/// and the remainder left over by integer division.
pub fn split_evenly(amount: u64, count: u64) -> (u64, u64) {
    if count == 0 {
        return (0, amount);
    }
    (amount / count, amount % count)
}

/// Distribute one resignation's attributable amount over its selecting
/// bettors, honoring the Chiringuito split.
///
/// Returns per-bettor amounts parallel to `stakes`. If any stake carries
/// the bonus, the bonus activators split BONUS_SHARE_BPS of the amount and
/// the remaining selectors split the rest; when every selector activated
/// the bonus they split the full amount. Each sub-pool's division remainder
/// goes to the lexicographically smallest authority of that sub-pool, so
/// the total credited always equals the attributable amount.
pub fn distribute(attributable: u64, stakes: &[SelectorStake]) -> Result<Vec<u64>, ProgramError> {
    if stakes.is_empty() {
        return Ok(Vec::new());
    }
    let mut amounts = vec![0u64; stakes.len()];

    let bonus_count = stakes.iter().filter(|s| s.has_bonus).count() as u64;
    let regular_count = stakes.len() as u64 - bonus_count;

    let (bonus_pool, regular_pool) = if bonus_count == 0 {
        (0, attributable)
    } else if regular_count == 0 {
        (attributable, 0)
    } else {
        let bonus_pool =
            ((attributable as u128 * BONUS_SHARE_BPS as u128) / DENOMINATOR_BPS as u128) as u64;
        (bonus_pool, attributable - bonus_pool)
    };

    credit_group(&mut amounts, stakes, true, bonus_pool, bonus_count)?;
    credit_group(&mut amounts, stakes, false, regular_pool, regular_count)?;

    Ok(amounts)
}

/// Credit one sub-pool (bonus or regular) evenly over its members, assigning
/// the division remainder to the member with the smallest authority.
fn credit_group(
    amounts: &mut [u64],
    stakes: &[SelectorStake],
    bonus: bool,
    pool: u64,
    count: u64,
) -> Result<(), ProgramError> {
    if count == 0 || pool == 0 {
        return Ok(());
    }
    let (share, remainder) = split_evenly(pool, count);
    let mut first: Option<usize> = None;
    for (i, stake) in stakes.iter().enumerate() {
        if stake.has_bonus != bonus {
            continue;
        }
        amounts[i] = amounts[i]
            .checked_add(share)
            .ok_or(DvFactorError::ArithmeticOverflow)?;
        match first {
            Some(j) if stakes[j].authority <= stake.authority => {}
            _ => first = Some(i),
        }
    }
    if let Some(i) = first {
        amounts[i] = amounts[i]
            .checked_add(remainder)
            .ok_or(DvFactorError::ArithmeticOverflow)?;
    }
    Ok(())
}

/// Derive the UTC (year, month) of a unix timestamp, per the proleptic
/// Gregorian calendar. Resignation months are recorded in UTC.
pub fn year_month_of_unix(ts: i64) -> (i64, u8) {
    let days = ts.div_euclid(86_400);
    let z = days + 719_468;
    let era = if z >= 0 { z } else { z - 146_096 } / 146_097;
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = yoe + era * 400 + if month <= 2 { 1 } else { 0 };
    (year, month as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pk(byte: u8) -> Pubkey {
        Pubkey::new_from_array([byte; 32])
    }

    fn stakes(flags: &[bool]) -> Vec<SelectorStake> {
        flags
            .iter()
            .enumerate()
            .map(|(i, &has_bonus)| SelectorStake {
                authority: pk(i as u8 + 1),
                has_bonus,
            })
            .collect()
    }

    #[test]
    fn test_total_pool_adds_confirmed_payments() {
        // EUR 50.00 jackpot + ten confirmed EUR 3.00 entries = EUR 80.00.
        let pool = total_pool(50 * ONE_EURO, std::iter::repeat(3 * ONE_EURO).take(10)).unwrap();
        assert_eq!(pool, 80 * ONE_EURO);
    }

    #[test]
    fn test_total_pool_is_idempotent() {
        let payments = [300u64, 300, 250];
        let first = total_pool(5_000, payments).unwrap();
        let second = total_pool(5_000, payments).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_total_pool_overflow_is_reported() {
        assert!(total_pool(u64::MAX, [1u64]).is_err());
    }

    #[test]
    fn test_payout_bps_lookup() {
        // Month 3 with two selectors pays 40%.
        assert_eq!(payout_bps(3, 2).unwrap(), 4_000);
        assert_eq!(payout_bps(1, 1).unwrap(), 6_000);
        assert_eq!(payout_bps(12, 1).unwrap(), 500);
    }

    #[test]
    fn test_payout_bps_clamps_large_counts() {
        assert_eq!(
            payout_bps(1, 25).unwrap(),
            payout_bps(1, MAX_TRACKED_SELECTORS).unwrap()
        );
    }

    #[test]
    fn test_payout_bps_rejects_unmodeled_rows() {
        assert!(payout_bps(0, 1).is_err());
        assert!(payout_bps(13, 1).is_err());
        assert!(payout_bps(3, 0).is_err());
    }

    #[test]
    fn test_zero_entries_are_legitimate() {
        // A late resignation with many co-selectors pays nothing. That is a
        // real table entry, not a missing row.
        assert_eq!(payout_bps(12, 10).unwrap(), 0);
    }

    #[test]
    fn test_rank_shares() {
        assert_eq!(rank_share_bps(1), 7_000);
        assert_eq!(rank_share_bps(2), 2_500);
        assert_eq!(rank_share_bps(3), 500);
        assert_eq!(rank_share_bps(0), 0);
        assert_eq!(rank_share_bps(4), 0);
    }

    #[test]
    fn test_attributable_amount_is_exact() {
        // 40% x 70% x EUR 80.00 = EUR 22.40.
        let amount = attributable_amount(80 * ONE_EURO, 4_000, 7_000).unwrap();
        assert_eq!(amount, 2_240);
    }

    #[test]
    fn test_distribute_even_split() {
        let amounts = distribute(2_240, &stakes(&[false, false])).unwrap();
        assert_eq!(amounts, vec![1_120, 1_120]);
    }

    #[test]
    fn test_distribute_bonus_split() {
        // One of two selectors activated the Chiringuito: 60% / 40%.
        let amounts = distribute(2_240, &stakes(&[true, false])).unwrap();
        assert_eq!(amounts, vec![1_344, 896]);
    }

    #[test]
    fn test_distribute_all_bonus_takes_everything() {
        let amounts = distribute(900, &stakes(&[true, true, true])).unwrap();
        assert_eq!(amounts, vec![300, 300, 300]);
    }

    #[test]
    fn test_distribute_remainder_goes_to_smallest_authority() {
        let amounts = distribute(101, &stakes(&[false, false, false])).unwrap();
        assert_eq!(amounts, vec![35, 33, 33]);

        let reversed = vec![
            SelectorStake {
                authority: pk(9),
                has_bonus: false,
            },
            SelectorStake {
                authority: pk(2),
                has_bonus: false,
            },
        ];
        let amounts = distribute(101, &reversed).unwrap();
        assert_eq!(amounts, vec![50, 51]);
    }

    #[test]
    fn test_distribute_conserves_every_cent() {
        for &attributable in &[1u64, 7, 99, 2_240, 123_457] {
            for n in 1..=4usize {
                for mask in 0..(1u32 << n) {
                    let stakes: Vec<SelectorStake> = (0..n)
                        .map(|i| SelectorStake {
                            authority: pk(i as u8 + 1),
                            has_bonus: mask & (1 << i) != 0,
                        })
                        .collect();
                    let amounts = distribute(attributable, &stakes).unwrap();
                    assert_eq!(amounts.iter().sum::<u64>(), attributable);
                }
            }
        }
    }

    #[test]
    fn test_distribute_with_no_selectors() {
        assert!(distribute(2_240, &[]).unwrap().is_empty());
    }

    #[test]
    fn test_year_month_derivation() {
        assert_eq!(year_month_of_unix(0), (1970, 1));
        assert_eq!(year_month_of_unix(-1), (1969, 12));
        assert_eq!(year_month_of_unix(1_767_225_600), (2026, 1));
        assert_eq!(year_month_of_unix(1_773_532_800), (2026, 3));
        // Leap day.
        assert_eq!(year_month_of_unix(1_709_164_800), (2024, 2));
    }

    #[test]
    fn test_first_resignation_scenario() {
        // EUR 50.00 jackpot, ten confirmed EUR 3.00 entries. An employee
        // resigns in March with two selectors, first resignation of the
        // edition; one selector activated the Chiringuito.
        let pool = total_pool(5_000, std::iter::repeat(300).take(10)).unwrap();
        let bps = payout_bps(3, 2).unwrap();
        let attributable = attributable_amount(pool, bps, rank_share_bps(1)).unwrap();
        assert_eq!(attributable, 2_240);

        let amounts = distribute(attributable, &stakes(&[false, true])).unwrap();
        assert_eq!(amounts, vec![896, 1_344]);
    }
}
