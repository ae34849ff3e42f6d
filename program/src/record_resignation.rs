use dvfactor_api::prelude::*;
use solana_program::log::sol_log;
use steel::*;

/// Admin-only instruction to record an employee's resignation. The month is
/// derived from the resignation date, and the resignation takes the next
/// rank of the edition (first, second, third...). An employee resigns at
/// most once.
pub fn process_record_resignation(accounts: &[AccountInfo<'_>], data: &[u8]) -> ProgramResult {
    // Parse args
    let args = RecordResignation::try_from_bytes(data)?;
    let resignation_date = i64::from_le_bytes(args.resignation_date);

    // Load accounts
    let [signer_info, config_info, edition_info, employee_info] = accounts else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    signer_info.is_signer()?;
    config_info.has_seeds(&[CONFIG], &dvfactor_api::ID)?;
    edition_info.is_writable()?;
    employee_info.is_writable()?;

    let config = config_info.as_account::<Config>(&dvfactor_api::ID)?;

    if config.admin != *signer_info.key {
        sol_log("Error: Only admin can record resignations");
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
    if !employee.active() {
        sol_log(&format!("Employee {} is not active", employee.id));
        return Err(DvFactorError::EmployeeNotActive.into());
    }

    let (year, month) = year_month_of_unix(resignation_date);
    if year < 0 || year as u64 != edition.year {
        sol_log(&format!(
            "Resignation date of employee {} falls in {}, not {}",
            employee.id, year, edition.year
        ));
        return Err(DvFactorError::DateOutsideEdition.into());
    }

    let rank = edition
        .resignation_count
        .checked_add(1)
        .ok_or(DvFactorError::ArithmeticOverflow)?;
    edition.resignation_count = rank;

    let clock = Clock::get()?;
    employee.set_resigned(resignation_date, month, rank, clock.unix_timestamp);

    sol_log(&format!(
        "Employee {} resigned in month {} of {}, rank {}",
        employee.id, month, edition.year, rank
    ));

    Ok(())
}
