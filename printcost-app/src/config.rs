use crate::cli::Cli;
use anyhow::{Context, Result};
use printcost_schemas::{
    file_formats::OrderFile,
    labor::CrewRoster,
    order::{OrderRequest, ShiftCalendar, DEFAULT_SETUP_MINUTES},
};
use std::{fs, path::Path};

const SUPPORTED_SCHEMA_VERSION: &str = "1.0";

/// Everything needed for one quote: the order and the calendar its crew is paid on.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderSettings {
    pub order: OrderRequest,
    pub calendar: ShiftCalendar,
}

impl OrderSettings {
    /// A 1000 shirt run on a 120 pieces/hour press at 70% efficiency, with an
    /// operator and a helper under Brazilian CLT payroll burden (~80%).
    pub fn example() -> Self {
        Self {
            order: OrderRequest {
                quantity: 1000,
                nominal_rate_per_hour: 120.0,
                efficiency: 0.70,
                crew: CrewRoster::new()
                    .with_member("Operador Maquina", 3000.00)
                    .with_member("Ajudante", 2500.00),
                burden_rate: 0.80,
                setup_minutes: DEFAULT_SETUP_MINUTES,
            },
            calendar: ShiftCalendar::default(),
        }
    }

    /// Loads an order from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        tracing::info!("Loading order from {:?}", path);
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read order file: {:?}", path))?;
        Self::from_yaml(&content).with_context(|| format!("Failed to parse YAML from {:?}", path))
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        let file: OrderFile = serde_yaml::from_str(content)?;
        if file.schema_version != SUPPORTED_SCHEMA_VERSION {
            tracing::warn!(
                found = %file.schema_version,
                expected = SUPPORTED_SCHEMA_VERSION,
                "order file schema version differs; reading it anyway"
            );
        }
        Ok(Self {
            order: file.order,
            calendar: file.calendar.unwrap_or_default(),
        })
    }

    /// Builds the settings for a run: the order file when given, otherwise the
    /// example, then any single-field overrides from the command line.
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let mut settings = match &cli.order {
            Some(path) => Self::load(path)?,
            None => {
                tracing::debug!("No order file given, using the built-in example order");
                Self::example()
            }
        };
        settings.apply_overrides(cli);
        Ok(settings)
    }

    fn apply_overrides(&mut self, cli: &Cli) {
        let order = &mut self.order;
        if let Some(quantity) = cli.quantity {
            order.quantity = quantity;
        }
        if let Some(rate) = cli.nominal_rate {
            order.nominal_rate_per_hour = rate;
        }
        if let Some(efficiency) = cli.efficiency {
            order.efficiency = efficiency;
        }
        if let Some(burden_rate) = cli.burden_rate {
            order.burden_rate = burden_rate;
        }
        if let Some(setup_minutes) = cli.setup_minutes {
            order.setup_minutes = setup_minutes;
        }
        if !cli.crew.is_empty() {
            order.crew = cli.crew.iter().cloned().collect();
        }
        if let Some(monthly_hours) = cli.monthly_hours {
            self.calendar = ShiftCalendar::new(monthly_hours);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;

    const ORDER_YAML: &str = r#"
schema_version: "1.0"
order:
  quantity: 300
  nominal_rate_per_hour: 150
  efficiency: 0.6
  burden_rate: 0.7
  setup_minutes: 20
  crew:
    - role: Operador Maquina
      monthly_wage: 3200.0
    - role: Ajudante
      monthly_wage: 2400.0
    - role: Supervisor
      monthly_wage: 4000.0
calendar:
  monthly_hours: 352
"#;

    #[test]
    fn example_matches_reference_order() {
        let settings = OrderSettings::example();
        assert_eq!(settings.order.quantity, 1000);
        assert_eq!(settings.order.crew.total_wages(), 5500.0);
        assert_eq!(settings.order.setup_minutes, 15.0);
        assert_eq!(settings.calendar.monthly_hours, 176.0);
    }

    #[test]
    fn parses_order_file() {
        let settings = OrderSettings::from_yaml(ORDER_YAML).unwrap();
        assert_eq!(settings.order.quantity, 300);
        assert_eq!(settings.order.crew.len(), 3);
        assert_eq!(settings.order.setup_minutes, 20.0);
        assert_eq!(settings.calendar.monthly_hours, 352.0);
    }

    #[test]
    fn calendar_defaults_when_omitted() {
        let yaml = "schema_version: \"1.0\"\norder:\n  quantity: 10\n  nominal_rate_per_hour: 60\n  efficiency: 1.0\n  burden_rate: 0.0\n  crew: []\n";
        let settings = OrderSettings::from_yaml(yaml).unwrap();
        assert_eq!(settings.calendar, ShiftCalendar::default());
        assert_eq!(settings.order.setup_minutes, DEFAULT_SETUP_MINUTES);
    }

    #[test]
    fn malformed_order_file_is_an_error() {
        assert!(OrderSettings::from_yaml("schema_version: \"1.0\"\norder:\n  quantity: lots\n").is_err());
    }

    #[test]
    fn cli_flags_override_order_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(ORDER_YAML.as_bytes()).unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let cli = Cli::parse_from([
            "printcost",
            "--order",
            path.as_str(),
            "--quantity",
            "900",
            "--crew",
            "Operador Maquina=3500",
            "--monthly-hours",
            "176",
        ]);
        let settings = OrderSettings::resolve(&cli).unwrap();
        assert_eq!(settings.order.quantity, 900);
        assert_eq!(settings.order.efficiency, 0.6);
        assert_eq!(settings.order.crew.len(), 1);
        assert_eq!(settings.order.crew.wage("Operador Maquina"), Some(3500.0));
        assert_eq!(settings.calendar.monthly_hours, 176.0);
    }

    #[test]
    fn missing_order_file_names_the_path() {
        let cli = Cli::parse_from(["printcost", "--order", "/nonexistent/order.yaml"]);
        let err = OrderSettings::resolve(&cli).unwrap_err();
        assert!(format!("{:#}", err).contains("order.yaml"));
    }
}
