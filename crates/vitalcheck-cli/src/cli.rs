use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use vitalcheck_core::models::input::{
    parse_yes_no, ActivityLevel, AlcoholUse, Gender, SugarType, TobaccoUse, WaistReference,
};

#[derive(Debug, Parser)]
#[command(name = "vitalcheck")]
#[command(version)]
#[command(about = "Anonymous health self-assessment: vitals, NCD risk score and symptom check", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Directory holding the in-progress assessment
    #[arg(long, global = true)]
    pub session_dir: Option<PathBuf>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Discard any saved answers and begin a new assessment
    Start,

    /// Step 1: age, gender and activity level
    Demographics(DemographicsArgs),

    /// Step 2: height, weight and optional blood pressure / blood sugar
    Vitals(VitalsArgs),

    /// Step 3: CBAC risk factors
    RiskFactors(RiskFactorsArgs),

    /// Step 4: cancer symptom checklist
    Symptoms(SymptomsArgs),

    /// Show the results summary
    Results {
        /// Print the full summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write the PDF report and/or a plain-text summary
    Export(ExportArgs),

    /// Clear all saved answers
    Reset,

    /// Show or update the configuration file
    Config(ConfigArgs),
}

#[derive(Debug, Args)]
pub struct DemographicsArgs {
    /// Age in years (1-120)
    #[arg(long)]
    pub age: Option<String>,

    #[arg(long)]
    pub gender: Option<Gender>,

    /// sedentary, moderate or adequate
    #[arg(long)]
    pub activity: Option<ActivityLevel>,
}

#[derive(Debug, Args)]
pub struct VitalsArgs {
    /// Height in cm (50-300)
    #[arg(long)]
    pub height: Option<String>,

    /// Weight in kg (10-500)
    #[arg(long)]
    pub weight: Option<String>,

    /// Systolic pressure in mmHg
    #[arg(long)]
    pub systolic: Option<String>,

    /// Diastolic pressure in mmHg
    #[arg(long)]
    pub diastolic: Option<String>,

    /// rbs, fbs, ppbs or hba1c
    #[arg(long)]
    pub sugar_type: Option<SugarType>,

    /// mg/dL, or % for HbA1c
    #[arg(long)]
    pub sugar_value: Option<String>,
}

#[derive(Debug, Args)]
pub struct RiskFactorsArgs {
    /// never, past or daily
    #[arg(long)]
    pub tobacco: Option<TobaccoUse>,

    /// yes or no
    #[arg(long)]
    pub alcohol: Option<AlcoholUse>,

    /// Waist circumference in cm
    #[arg(long)]
    pub waist: Option<String>,

    /// Waist chart to score against: male or female
    #[arg(long)]
    pub waist_reference: Option<WaistReference>,

    /// Parent or sibling with diabetes, hypertension or heart disease (yes/no)
    #[arg(long, value_parser = parse_yes_no)]
    pub family_history: Option<bool>,

    /// Print the live score without saving the answers
    #[arg(long)]
    pub preview: bool,
}

#[derive(Debug, Args)]
pub struct SymptomsArgs {
    /// Symptom answered "yes" (repeatable)
    #[arg(long = "yes", value_name = "ID")]
    pub yes: Vec<String>,

    /// Symptom answered "no" (repeatable)
    #[arg(long = "no", value_name = "ID")]
    pub no: Vec<String>,

    /// Print the symptom checklists and exit
    #[arg(long)]
    pub list: bool,
}

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Write the PDF report (the default when no format is given)
    #[arg(long)]
    pub pdf: bool,

    /// Write a plain-text summary
    #[arg(long)]
    pub text: bool,

    /// Output directory
    #[arg(long)]
    pub out: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Store a default session directory
    #[arg(long = "set-session-dir", value_name = "DIR")]
    pub set_session_dir: Option<PathBuf>,

    /// Store a default export directory
    #[arg(long = "set-export-dir", value_name = "DIR")]
    pub set_export_dir: Option<PathBuf>,
}
