use dvfactor_api::prelude::*;
use solana_program::log::sol_log;
use steel::*;

/// Admin-only instruction to add an employee to the roster.
pub fn process_create_employee(accounts: &[AccountInfo<'_>], data: &[u8]) -> ProgramResult {
    // Parse args
    let args = CreateEmployee::try_from_bytes(data)?;
    let id = u64::from_le_bytes(args.id);
    let hire_date = i64::from_le_bytes(args.hire_date);

    // Load accounts
    let [signer_info, config_info, employee_info, system_program] = accounts else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    signer_info.is_signer()?;
    config_info.has_seeds(&[CONFIG], &dvfactor_api::ID)?;
    employee_info
        .is_empty()?
        .is_writable()?
        .has_seeds(&[EMPLOYEE, &id.to_le_bytes()], &dvfactor_api::ID)?;
    system_program.is_program(&system_program::ID)?;

    let config = config_info.as_account::<Config>(&dvfactor_api::ID)?;

    if config.admin != *signer_info.key {
        sol_log("Error: Only admin can create employees");
        return Err(DvFactorError::NotAdmin.into());
    }

    // Id 0 is reserved as "no pick".
    if id == 0 {
        return Err(ProgramError::InvalidArgument);
    }

    create_program_account::<Employee>(
        employee_info,
        system_program,
        signer_info,
        &dvfactor_api::ID,
        &[EMPLOYEE, &id.to_le_bytes()],
    )?;
    let employee = employee_info.as_account_mut::<Employee>(&dvfactor_api::ID)?;
    employee.id = id;
    employee.name = args.name;
    employee.hire_date = hire_date;
    employee.is_active = 1;
    employee.resignation_month = 0;
    employee.resignation_rank = 0;
    employee.is_settled = 0;
    employee.resignation_date = 0;
    employee.resignation_notified_at = 0;

    sol_log(&format!("Employee {} ({}) created", id, employee.name()));

    Ok(())
}
