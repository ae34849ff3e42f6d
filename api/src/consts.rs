use const_crypto::ed25519;
use solana_program::{pubkey, pubkey::Pubkey};

/// The authority allowed to initialize the program.
pub const ADMIN_ADDRESS: Pubkey = pubkey!("2qKkR5P84vCoKTE8zA6RWHDSDnTxQF3i9XQiR8gVQ4iD");

/// The decimal precision of monetary amounts.
/// All amounts are euro cents (two fraction digits, no floating point).
pub const CURRENCY_DECIMALS: u8 = 2;

/// One euro, denominated in cents.
pub const ONE_EURO: u64 = 10u64.pow(CURRENCY_DECIMALS as u32);

/// The default entry fee for a new edition (EUR 3.00).
pub const DEFAULT_ENTRY_FEE: u64 = 3 * ONE_EURO;

/// Upper bound for a single payment or jackpot contribution (EUR 10,000.00).
pub const MAX_PAYMENT_AMOUNT: u64 = 10_000 * ONE_EURO;

/// The number of employees picked in one bet.
pub const PICKS_PER_BET: usize = 3;

/// Sentinel value for a bet without a Chiringuito bonus.
pub const BONUS_NONE: u8 = u8::MAX;

/// The maximum length of an employee name, in bytes.
pub const EMPLOYEE_NAME_LEN: usize = 64;

/// Denominator for percentage calculations in basis points.
pub const DENOMINATOR_BPS: u64 = 10_000;

/// Share of a resignation's attributable amount awarded to the bettors who
/// activated the Chiringuito bonus on the resigned employee. The remaining
/// share goes to the other selectors of that employee.
pub const BONUS_SHARE_BPS: u64 = 6_000;

/// Only the first three resignations of an edition carry a payout share.
pub const MAX_RANKED_RESIGNATIONS: usize = 3;

/// The pool share carried by the first, second and third resignation.
pub const RANK_SHARE_BPS: [u64; MAX_RANKED_RESIGNATIONS] = [7_000, 2_500, 500];

/// The number of months modeled by the payout table.
pub const PAYOUT_MONTHS: usize = 12;

/// The highest selector count modeled by the payout table.
/// Larger counts clamp to the last column.
pub const MAX_TRACKED_SELECTORS: usize = 10;

/// Payout percentages in basis points, keyed by [month - 1][selectors - 1].
///
/// The percentage shrinks as the resignation arrives later in the year and
/// as more players picked the same employee. Zero entries mean the
/// resignation pays nothing (too late, too crowded); they are reference
/// data, not an error.
pub const PAYOUT_TABLE_BPS: [[u64; MAX_TRACKED_SELECTORS]; PAYOUT_MONTHS] = [
    // Jan
    [6_000, 4_800, 3_600, 3_000, 2_400, 1_800, 1_500, 1_200, 900, 600],
    // Feb
    [5_500, 4_400, 3_300, 2_750, 2_200, 1_650, 1_375, 1_100, 825, 550],
    // Mar
    [5_000, 4_000, 3_000, 2_500, 2_000, 1_500, 1_250, 1_000, 750, 500],
    // Apr
    [4_500, 3_600, 2_700, 2_250, 1_800, 1_350, 1_125, 900, 675, 450],
    // May
    [4_000, 3_200, 2_400, 2_000, 1_600, 1_200, 1_000, 800, 600, 400],
    // Jun
    [3_500, 2_800, 2_100, 1_750, 1_400, 1_050, 875, 700, 525, 350],
    // Jul
    [3_000, 2_400, 1_800, 1_500, 1_200, 900, 750, 600, 450, 300],
    // Aug
    [2_500, 2_000, 1_500, 1_250, 1_000, 750, 625, 500, 375, 250],
    // Sep
    [2_000, 1_600, 1_200, 1_000, 800, 600, 500, 400, 300, 200],
    // Oct
    [1_500, 1_200, 900, 750, 600, 450, 375, 300, 225, 0],
    // Nov
    [1_000, 800, 600, 500, 400, 300, 250, 200, 0, 0],
    // Dec
    [500, 400, 300, 250, 200, 0, 0, 0, 0, 0],
];

/// The seed of the config account PDA.
pub const CONFIG: &[u8] = b"config";

/// The seed of the edition account PDA.
pub const EDITION: &[u8] = b"edition";

/// The seed of the participant account PDA.
pub const PARTICIPANT: &[u8] = b"participant";

/// The seed of the employee account PDA.
pub const EMPLOYEE: &[u8] = b"employee";

/// The seed of the bet account PDA.
pub const BET: &[u8] = b"bet";

/// Program id for const pda derivations
const PROGRAM_ID: [u8; 32] = unsafe { *(&crate::id() as *const Pubkey as *const [u8; 32]) };

/// The address of the config account.
pub const CONFIG_ADDRESS: Pubkey =
    Pubkey::new_from_array(ed25519::derive_program_address(&[CONFIG], &PROGRAM_ID).0);
