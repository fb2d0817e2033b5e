use std::collections::BTreeMap;
use std::io::Write;
use std::path::Path;

use vitalcheck_core::models::flow::{Step, VitalsRoute};
use vitalcheck_core::storage_keys::VITALS_SUMMARY_FILE;
use vitalcheck_core::symptoms::{self, Checklist};
use vitalcheck_export::pdf::generate_pdf;
use vitalcheck_export::render::{render_results_summary, render_vitals_summary};
use vitalcheck_export::HealthReport;
use vitalcheck_scoring::cbac::CbacScore;
use vitalcheck_scoring::guidance;
use vitalcheck_session::forms::{DemographicsForm, RiskFactorsForm, SymptomsForm, VitalsForm};
use vitalcheck_session::{AssessmentSession, SessionError, SessionStore};

use crate::cli::{
    Command, ConfigArgs, DemographicsArgs, ExportArgs, RiskFactorsArgs, SymptomsArgs, VitalsArgs,
};
use crate::config::{save_config, Settings, VitalcheckConfig};

/// Execute one session command, writing user-facing output to `out`.
pub fn run<S: SessionStore>(
    command: &Command,
    session: &mut AssessmentSession<S>,
    settings: &Settings,
    out: &mut impl Write,
) -> eyre::Result<()> {
    match command {
        Command::Start => {
            session.reset()?;
            writeln!(out, "Started a new assessment.")?;
            print_next(out, session.current_step())
        }
        Command::Demographics(args) => demographics(session, args, out),
        Command::Vitals(args) => vitals(session, args, out),
        Command::RiskFactors(args) => risk_factors(session, args, out),
        Command::Symptoms(args) => symptom_check(session, args, out),
        Command::Results { json } => results(session, *json, out),
        Command::Export(args) => export(session, settings, args, out),
        Command::Reset => {
            session.reset()?;
            writeln!(out, "All answers cleared.")?;
            Ok(())
        }
        Command::Config(_) => Err(eyre::eyre!("the config command does not open a session")),
    }
}

fn demographics<S: SessionStore>(
    session: &mut AssessmentSession<S>,
    args: &DemographicsArgs,
    out: &mut impl Write,
) -> eyre::Result<()> {
    let form = DemographicsForm {
        age: args.age.clone(),
        gender: args.gender,
        activity_level: args.activity,
    };
    let next = submitted(session.submit_demographics(&form), out)?;
    if let Some(notice) = session.underage_notice() {
        writeln!(out, "Note: {notice}")?;
    }
    print_next(out, next)
}

fn vitals<S: SessionStore>(
    session: &mut AssessmentSession<S>,
    args: &VitalsArgs,
    out: &mut impl Write,
) -> eyre::Result<()> {
    let form = VitalsForm {
        height: args.height.clone(),
        weight: args.weight.clone(),
        systolic: args.systolic.clone(),
        diastolic: args.diastolic.clone(),
        sugar_type: args.sugar_type,
        sugar_value: args.sugar_value.clone(),
    };
    let route = submitted(session.submit_vitals(&form), out)?;

    for row in &session.summary().measurements {
        writeln!(
            out,
            "{}: {} ({})",
            row.name,
            row.value_or_placeholder(),
            row.badge_label()
        )?;
    }

    if route == VitalsRoute::Advisory {
        writeln!(out)?;
        writeln!(out, "{}", Step::Advisory.title())?;
        writeln!(out, "{}", guidance::VITALS_ADVISORY)?;
        writeln!(
            out,
            "Run `vitalcheck export --text` to save a summary of your readings."
        )?;
        return Ok(());
    }
    print_next(out, route.step())
}

fn risk_factors<S: SessionStore>(
    session: &mut AssessmentSession<S>,
    args: &RiskFactorsArgs,
    out: &mut impl Write,
) -> eyre::Result<()> {
    let form = RiskFactorsForm {
        tobacco_use: args.tobacco,
        alcohol_use: args.alcohol,
        waist: args.waist.clone(),
        waist_reference: args.waist_reference,
        family_history: args.family_history,
    };

    if args.preview {
        let score = session.preview_cbac(&form);
        writeln!(out, "CBAC score (preview, not saved): {}", score.total)?;
        print_breakdown(out, &score)?;
        return Ok(());
    }

    let next = submitted(session.submit_risk_factors(&form), out)?;
    let score = session.summary().cbac;
    writeln!(out, "CBAC score: {}", score.total)?;
    print_breakdown(out, &score)?;
    print_next(out, next)
}

fn print_breakdown(out: &mut impl Write, score: &CbacScore) -> eyre::Result<()> {
    let b = &score.breakdown;
    for (label, points) in [
        ("Age", b.age),
        ("Tobacco", b.tobacco),
        ("Alcohol", b.alcohol),
        ("Waist", b.waist),
        ("Physical activity", b.activity),
        ("Family history", b.family_history),
    ] {
        writeln!(out, "  {label}: {points}")?;
    }
    writeln!(out, "Risk level: {}", score.tier.label())?;
    Ok(())
}

fn symptom_check<S: SessionStore>(
    session: &mut AssessmentSession<S>,
    args: &SymptomsArgs,
    out: &mut impl Write,
) -> eyre::Result<()> {
    if args.list {
        for checklist in symptoms::checklists_for(session.input().gender) {
            let heading = match checklist {
                Checklist::General => "General symptoms",
                Checklist::Women => "Women-specific symptoms",
            };
            writeln!(out, "{heading}")?;
            for symptom in symptoms::all_symptoms().filter(|s| s.checklist == *checklist) {
                writeln!(out, "  {:<24} {}", symptom.id, symptom.label)?;
            }
        }
        return Ok(());
    }

    let mut general = BTreeMap::new();
    let mut women = BTreeMap::new();
    let answers = args
        .yes
        .iter()
        .map(|id| (id, true))
        .chain(args.no.iter().map(|id| (id, false)));
    for (id, answer) in answers {
        // Unknown ids go to the general list, where the session rejects them.
        let target = match symptoms::find_symptom(id) {
            Ok(symptom) if symptom.checklist == Checklist::Women => &mut women,
            _ => &mut general,
        };
        target.insert(id.clone(), answer);
    }

    let next = submitted(session.submit_symptoms(&SymptomsForm { general, women }), out)?;
    if session.summary().has_cancer_symptom {
        writeln!(out, "{}", guidance::SYMPTOM_CONSULT)?;
    }
    print_next(out, next)
}

fn results<S: SessionStore>(
    session: &AssessmentSession<S>,
    json: bool,
    out: &mut impl Write,
) -> eyre::Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&session.summary())?)?;
        return Ok(());
    }

    if session.current_step() != Step::Results {
        writeln!(
            out,
            "Assessment incomplete (current step: {}).\n",
            session.current_step().title()
        )?;
    }
    let report = HealthReport::new(session.input().clone(), today());
    write!(out, "{}", render_results_summary(&report)?)?;
    Ok(())
}

fn export<S: SessionStore>(
    session: &AssessmentSession<S>,
    settings: &Settings,
    args: &ExportArgs,
    out: &mut impl Write,
) -> eyre::Result<()> {
    let dir = args.out.as_deref().unwrap_or(settings.export_dir.as_path());
    std::fs::create_dir_all(dir)?;

    let report = HealthReport::new(session.input().clone(), today());
    let write_pdf = args.pdf || !args.text;

    if write_pdf {
        let bytes = generate_pdf(&report, &settings.pdf)?;
        let path = dir.join(report.pdf_file_name());
        std::fs::write(&path, bytes)?;
        tracing::info!(path = %path.display(), "PDF report written");
        writeln!(out, "Wrote {}", path.display())?;
    }

    if args.text {
        let (file_name, text) = if session.vitals_route() == Some(VitalsRoute::Advisory) {
            (VITALS_SUMMARY_FILE.to_string(), render_vitals_summary(&report)?)
        } else {
            (report.text_file_name(), render_results_summary(&report)?)
        };
        let path = dir.join(file_name);
        std::fs::write(&path, text)?;
        tracing::info!(path = %path.display(), "text summary written");
        writeln!(out, "Wrote {}", path.display())?;
    }
    Ok(())
}

/// Show or update the config file.
pub fn configure(
    path: &Path,
    mut config: VitalcheckConfig,
    args: &ConfigArgs,
    out: &mut impl Write,
) -> eyre::Result<()> {
    let mut changed = false;
    if let Some(dir) = &args.set_session_dir {
        config.session_dir = Some(dir.clone());
        changed = true;
    }
    if let Some(dir) = &args.set_export_dir {
        config.export_dir = Some(dir.clone());
        changed = true;
    }
    if changed {
        save_config(path, &config)?;
    }

    writeln!(out, "# {}", path.display())?;
    writeln!(out, "{}", serde_json::to_string_pretty(&config)?)?;
    Ok(())
}

/// Print field errors and turn a rejected submission into an error.
fn submitted<T>(result: Result<T, SessionError>, out: &mut impl Write) -> eyre::Result<T> {
    match result {
        Ok(value) => Ok(value),
        Err(SessionError::Validation(errors)) => {
            writeln!(out, "Please correct the following:")?;
            for error in &errors {
                writeln!(out, "  {}: {}", error.field, error.message)?;
            }
            Err(eyre::eyre!(
                "{} field(s) need attention; nothing was saved",
                errors.len()
            ))
        }
        Err(SessionError::AdvisoryRoute) => {
            writeln!(out, "{}", guidance::VITALS_ADVISORY)?;
            Err(SessionError::AdvisoryRoute.into())
        }
        Err(SessionError::OutOfOrder { expected }) => {
            if let Some(command) = step_command(expected) {
                writeln!(
                    out,
                    "Finish \"{}\" first (run `vitalcheck {command}`).",
                    expected.title()
                )?;
            }
            Err(SessionError::OutOfOrder { expected }.into())
        }
        Err(e) => Err(e.into()),
    }
}

/// The subcommand that fills in `step`. The advisory screen has none.
fn step_command(step: Step) -> Option<&'static str> {
    match step {
        Step::Demographics => Some("demographics"),
        Step::Vitals => Some("vitals"),
        Step::Advisory => None,
        Step::RiskFactors => Some("risk-factors"),
        Step::Symptoms => Some("symptoms"),
        Step::Results => Some("results"),
    }
}

fn print_next(out: &mut impl Write, step: Step) -> eyre::Result<()> {
    if let Some(command) = step_command(step) {
        writeln!(out, "Next: {} (run `vitalcheck {command}`)", step.title())?;
    }
    Ok(())
}

fn today() -> jiff::civil::Date {
    jiff::Zoned::now().date()
}
