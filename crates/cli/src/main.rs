use std::sync::Arc;

use api_shared::{ClassifyReq, RecommendReq, RecommendRes, SubunitsRes};
use clap::{Parser, Subcommand};
use flap_core::{config::usage_log_path_from_env_value, recommend, CoreConfig, UsageLog};

#[derive(Parser)]
#[command(name = "flap")]
#[command(about = "Head-and-neck flap selector CLI")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List anatomical subunits with their size cutoffs
    Subunits,
    /// Classify a defect diameter for a subunit
    Classify {
        /// Subunit identifier or label (e.g. nasal_tip)
        subunit: String,
        /// Defect diameter in cm
        diameter_cm: f64,
    },
    /// Recommend a reconstructive flap
    Recommend {
        /// Subunit identifier or label (e.g. upper_lip_central)
        subunit: String,
        /// Defect diameter in cm
        diameter_cm: f64,
        /// Depth: superficial, partial or full
        #[arg(long, default_value = "superficial")]
        depth: String,
        /// Defect type: oncologic, traumatic or congenital
        #[arg(long, default_value = "oncologic")]
        defect_type: String,
        /// Patient age in years
        #[arg(long)]
        age: u32,
        /// Defect lies in hair-bearing skin
        #[arg(long)]
        hair_bearing: bool,
        /// Patient is diabetic
        #[arg(long)]
        diabetic: bool,
        /// Patient is an active smoker
        #[arg(long)]
        smoker: bool,
        /// Site has been irradiated
        #[arg(long)]
        irradiated: bool,
        /// Print JSON instead of Markdown
        #[arg(long)]
        json: bool,
    },
    /// Count logged cases (reads FLAP_USAGE_LOG)
    LogCount,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Subunits) => {
            for entry in SubunitsRes::from_catalog()?.subunits {
                let zone = entry.zone.map(|z| format!(" [{z}]")).unwrap_or_default();
                println!(
                    "{:<24} {} (small ≤ {} cm, medium ≤ {} cm){}",
                    entry.id, entry.label, entry.low_cm, entry.mid_cm, zone
                );
            }
        }
        Some(Commands::Classify {
            subunit,
            diameter_cm,
        }) => {
            let req = ClassifyReq {
                subunit,
                diameter_cm,
            };
            match req.classify() {
                Ok(size) => println!("{size}"),
                Err(e) => eprintln!("Error classifying defect: {}", e),
            }
        }
        Some(Commands::Recommend {
            subunit,
            diameter_cm,
            depth,
            defect_type,
            age,
            hair_bearing,
            diabetic,
            smoker,
            irradiated,
            json,
        }) => {
            let req = RecommendReq {
                subunit,
                defect_type,
                diameter_cm,
                depth,
                hair_bearing,
                age,
                diabetic,
                active_smoker: smoker,
                previously_irradiated: irradiated,
            };
            match req.to_case().and_then(|case| recommend(&case)) {
                Ok(rec) if json => {
                    let res = RecommendRes::from(rec);
                    println!("{}", serde_json::to_string_pretty(&res)?);
                }
                Ok(rec) => println!("{}", rec.to_markdown()),
                Err(e) => eprintln!("Error recommending flap: {}", e),
            }
        }
        Some(Commands::LogCount) => {
            let cfg = CoreConfig::new(
                usage_log_path_from_env_value(std::env::var("FLAP_USAGE_LOG").ok()),
                None,
            )?;
            let log = UsageLog::new(Arc::new(cfg));
            println!("Logged cases: {}", log.count()?);
        }
        None => {
            println!("Use 'flap --help' for commands");
        }
    }

    Ok(())
}
