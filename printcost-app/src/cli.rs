use clap::{Parser, ValueEnum};
use printcost_schemas::labor::CrewMember;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Quote crew labor time and cost for a print-shop production order.
///
/// With no arguments the built-in example order is quoted. Flags override
/// single fields of the example or of the order file given with --order.
#[derive(Debug, Parser)]
#[command(name = "printcost", version, about)]
pub struct Cli {
    /// YAML order file to quote instead of the built-in example
    #[arg(long, value_name = "FILE")]
    pub order: Option<PathBuf>,

    /// Units ordered
    #[arg(long)]
    pub quantity: Option<u64>,

    /// Rated machine throughput, units per hour
    #[arg(long)]
    pub nominal_rate: Option<f64>,

    /// Fraction of the nominal rate achieved, e.g. 0.70
    #[arg(long)]
    pub efficiency: Option<f64>,

    /// Payroll burden on wages, e.g. 0.80 for 80%
    #[arg(long)]
    pub burden_rate: Option<f64>,

    /// Fixed setup time per job, in minutes
    #[arg(long)]
    pub setup_minutes: Option<f64>,

    /// Paid crew hours per month
    #[arg(long)]
    pub monthly_hours: Option<f64>,

    /// Crew member as ROLE=WAGE; repeat for each role. Replaces the whole roster.
    #[arg(long = "crew", value_name = "ROLE=WAGE", value_parser = parse_crew_member)]
    pub crew: Vec<CrewMember>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Log progress to stderr (RUST_LOG takes precedence)
    #[arg(short, long)]
    pub verbose: bool,
}

fn parse_crew_member(raw: &str) -> Result<CrewMember, String> {
    let (role, wage) = raw
        .rsplit_once('=')
        .ok_or_else(|| format!("expected ROLE=WAGE, got '{}'", raw))?;
    let role = role.trim();
    if role.is_empty() {
        return Err(format!("missing role name in '{}'", raw));
    }
    let monthly_wage = wage
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("invalid wage in '{}': {}", raw, e))?;
    Ok(CrewMember {
        role: role.to_string(),
        monthly_wage,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crew_flag_splits_on_last_equals() {
        let member = parse_crew_member("Operador=Maquina=3000.50").unwrap();
        assert_eq!(member.role, "Operador=Maquina");
        assert_eq!(member.monthly_wage, 3000.50);
    }

    #[test]
    fn crew_flag_rejects_bad_input() {
        assert!(parse_crew_member("Ajudante").is_err());
        assert!(parse_crew_member("=2500").is_err());
        assert!(parse_crew_member("Ajudante=lots").is_err());
    }

    #[test]
    fn no_arguments_means_text_and_no_overrides() {
        let cli = Cli::parse_from(["printcost"]);
        assert_eq!(cli.format, OutputFormat::Text);
        assert!(cli.order.is_none());
        assert!(cli.crew.is_empty());
        assert!(cli.quantity.is_none());
    }

    #[test]
    fn flags_parse_into_fields() {
        let cli = Cli::parse_from([
            "printcost",
            "--quantity",
            "250",
            "--efficiency",
            "0.85",
            "--crew",
            "Ajudante=2500",
            "--crew",
            "Supervisor=4000",
            "--format",
            "json",
        ]);
        assert_eq!(cli.quantity, Some(250));
        assert_eq!(cli.efficiency, Some(0.85));
        assert_eq!(cli.crew.len(), 2);
        assert_eq!(cli.format, OutputFormat::Json);
    }
}
