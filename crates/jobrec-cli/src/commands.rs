//! Command implementations for the jobrec CLI.

use std::path::PathBuf;

use anyhow::{Context, bail};
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{ContentArrangement, Table};
use jobrec_model::{JobApplication, Salary};
use jobrec_settings::SettingsStore;
use jobrec_validate::{JobAppForm, load_currency_choices_or_empty};

use crate::cli::{AddArgs, CurrenciesArgs, InitArgs, ListArgs};

/// Create a fresh, structurally valid data file and remember it.
pub fn run_init(settings: &SettingsStore, args: &InitArgs) -> anyhow::Result<()> {
    jobrec_store::write_placeholder(&args.path)
        .with_context(|| format!("creating data file {}", args.path.display()))?;
    settings
        .remember_last_file(&args.path)
        .context("remembering data file path")?;
    tracing::info!(path = %args.path.display(), "created data file");
    println!("Created {}", args.path.display());
    Ok(())
}

/// Run every input through the form validators; append the record only when
/// the whole form is valid. Returns the process exit code.
pub fn run_add(settings: &SettingsStore, args: &AddArgs) -> anyhow::Result<i32> {
    let choices = load_currency_choices_or_empty(&args.currency_data);
    let mut form = JobAppForm::new(choices);

    form.set_company_name(args.company.as_deref().unwrap_or_default());
    form.set_job_title(args.title.as_deref().unwrap_or_default());
    form.set_job_url(args.url.as_deref().unwrap_or_default());
    form.set_job_location(args.location.as_deref().unwrap_or_default());
    form.set_job_flexibility(args.flexibility.as_deref().unwrap_or_default());
    form.set_min_salary(args.min_salary.as_deref().unwrap_or_default());
    form.set_max_salary(args.max_salary.as_deref().unwrap_or_default());
    form.set_currency(args.currency.as_deref().unwrap_or_default());
    form.set_application_date(args.date);
    form.set_general_notes(args.notes.as_deref().unwrap_or_default());

    if !form.is_valid() {
        eprintln!("The application was not recorded:");
        for error in form.ledger().all_errors() {
            eprintln!("  {}: {}", error.field, error.message);
        }
        return Ok(1);
    }

    let record = form.to_record().context("building record from form")?;
    let path = resolve_data_path(settings, args.file.clone())?;
    jobrec_store::append_record(&path, record)
        .with_context(|| format!("saving to {}", path.display()))?;
    println!("Recorded application in {}", path.display());
    Ok(0)
}

/// Print the applications in a data file as a table.
pub fn run_list(settings: &SettingsStore, args: &ListArgs) -> anyhow::Result<()> {
    let path = resolve_data_path(settings, args.file.clone())?;
    let file = jobrec_store::read_records(&path)
        .with_context(|| format!("reading {}", path.display()))?;

    if file.is_empty() {
        println!("No applications recorded in {}", path.display());
        return Ok(());
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            "Company", "Title", "Location", "Flexibility", "Salary", "Applied",
        ]);
    for record in &file.applications {
        table.add_row(record_row(record));
    }
    println!("{table}");
    println!("{} application(s) in {}", file.len(), path.display());
    Ok(())
}

/// Show the selectable currency choices.
pub fn run_currencies(args: &CurrenciesArgs) -> anyhow::Result<()> {
    let choices = load_currency_choices_or_empty(&args.currency_data);
    if choices.is_empty() {
        bail!(
            "no currencies available from {} - the add form cannot pass validation",
            args.currency_data.display()
        );
    }
    for choice in choices {
        println!("{choice}");
    }
    Ok(())
}

fn resolve_data_path(settings: &SettingsStore, explicit: Option<PathBuf>) -> anyhow::Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path);
    }
    settings
        .load()
        .last_file_path_used
        .context("no data file given and none remembered; run `jobrec init` or pass --file")
}

fn record_row(record: &JobApplication) -> Vec<String> {
    let job = &record.job;
    vec![
        job.company_name.clone(),
        job.job_title.clone(),
        job.job_location.clone(),
        job.job_flexibility.to_string(),
        format_salary(&job.salary),
        job.date_of_applying.to_string(),
    ]
}

fn format_salary(salary: &Salary) -> String {
    match salary.maximum {
        Some(maximum) => format!("{} - {} {}", salary.amount, maximum, salary.currency),
        None => format!("{} {}", salary.amount, salary.currency),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn salary_formats_fixed_and_range() {
        assert_eq!(format_salary(&Salary::fixed(50_000, "$ - USD")), "50000 $ - USD");
        assert_eq!(
            format_salary(&Salary::range(50_000, 60_000, "$ - USD")),
            "50000 - 60000 $ - USD"
        );
    }
}
