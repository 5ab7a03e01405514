use crate::infra::parse_flag;
use crate::report::{run_evaluate, run_export, EvaluateArgs, ExportArgs};
use crate::server;
use clap::{ArgAction, Args, Parser, Subcommand};
use ivf_navigator::error::AppError;
use ivf_navigator::navigator::ClinicalInputs;

#[derive(Parser, Debug)]
#[command(
    name = "NAVIGATOR",
    about = "Score IVF readiness and suggest a transfer path from standard clinic inputs",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Score one patient and print the suggested path
    Evaluate(EvaluateArgs),
    /// Score one patient and write an export-ready CSV record
    Export(ExportArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

/// Patient and cycle inputs shared by the scoring subcommands.
#[derive(Args, Debug, Clone)]
pub(crate) struct InputArgs {
    /// Age in years
    #[arg(long, default_value_t = 34.0)]
    pub(crate) age: f64,
    /// Body-mass index
    #[arg(long, default_value_t = 25.0)]
    pub(crate) bmi: f64,
    /// Endometrial thickness in mm
    #[arg(long, default_value_t = 9.0)]
    pub(crate) emt_mm: f64,
    /// Progesterone around transfer in ng/mL
    #[arg(long, default_value_t = 10.5)]
    pub(crate) prog_ng_ml: f64,
    /// Euploid embryo available (yes/no)
    #[arg(long, default_value = "yes", value_parser = parse_flag, action = ArgAction::Set)]
    pub(crate) euploid: bool,
    /// Good embryo grade (yes/no)
    #[arg(long, default_value = "yes", value_parser = parse_flag, action = ArgAction::Set)]
    pub(crate) good_grade: bool,
}

impl From<InputArgs> for ClinicalInputs {
    fn from(args: InputArgs) -> Self {
        Self {
            age: args.age,
            bmi: args.bmi,
            emt_mm: args.emt_mm,
            prog_ng_ml: args.prog_ng_ml,
            euploid: args.euploid,
            good_grade: args.good_grade,
        }
    }
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Evaluate(args) => run_evaluate(args),
        Command::Export(args) => run_export(args),
    }
}
