use anyhow::Result;
use printcost_schemas::report::CostReport;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct QuoteOutput<'a> {
    quantity: u64,
    #[serde(flatten)]
    report: &'a CostReport,
}

/// Renders the console quote. Field order is fixed; throughput keeps one
/// decimal even though it is already rounded to a whole number.
pub fn render_text(quantity: u64, report: &CostReport) -> String {
    let mut out = format!("--- ORÇAMENTO DE MÃO DE OBRA PARA {} PEÇAS ---\n", quantity);
    out.push_str(&format!("Custo Hora da Equipe (R$): {:.2}\n", report.hourly_crew_cost));
    out.push_str(&format!("Velocidade Real (peças/h): {:.1}\n", report.real_units_per_hour));
    out.push_str(&format!("Tempo Total Job (Horas): {:.2}\n", report.total_job_hours));
    out.push_str(&format!("Custo Total M.O. Job (R$): {:.2}\n", report.total_labor_cost));
    out.push_str(&format!("Custo M.O. por Camiseta (R$): {:.2}\n", report.labor_cost_per_unit));
    out
}

pub fn render_json(quantity: u64, report: &CostReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(&QuoteOutput { quantity, report })?)
}
