//! Report rendering — fixed-order, human-readable text.

use crate::aggregate::SalesSummary;
use crate::weekday::weekday_name;

/// Render the full report in its fixed section order: global statistics,
/// product highlights, per-region totals, per-weekday averages, busiest
/// weekday, and the cyclic weekday variation.
///
/// Returns the text exactly as printed, leading blank line included.
/// Currency values carry two decimals; the most-sold count is printed as a
/// whole number. Weekdays with no records are left out of the averages.
pub fn render_report(summary: &SalesSummary) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(String::new());
    lines.push("### ANÁLISE ESTATÍSTICA ###".to_string());
    lines.push(format!("Média do valor total: {:.2}", summary.mean_value));
    lines.push(format!("Mediana do valor total: {:.2}", summary.median_value));
    lines.push(format!(
        "Desvio padrão do valor total: {:.2}",
        summary.std_dev_value
    ));

    if let Some(top) = &summary.most_sold {
        lines.push(String::new());
        lines.push(format!(
            "O produto '{}' foi vendido {:.0} vezes, sendo o mais vendido.",
            top.product, top.total
        ));
    }
    if let Some(top) = &summary.highest_grossing {
        lines.push(format!(
            "O produto '{}' rendeu um total de R${:.2}, sendo o produto com o maior valor total de vendas.",
            top.product, top.total
        ));
    }

    for (region, total) in &summary.value_by_region {
        lines.push(format!("A região {region} teve um total de R${total:.2}."));
    }

    for (&day, average) in &summary.average_value_by_weekday {
        lines.push(format!("{}: R${average:.2}", weekday_name(day)));
    }

    lines.push(String::new());
    lines.push(String::new());
    lines.push("### ANÁLISE TEMPORAL ###".to_string());

    if let Some(day) = summary.busiest_weekday {
        lines.push(String::new());
        lines.push(format!(
            "{} foi o dia da semana com o maior número de vendas.",
            weekday_name(day)
        ));
    }

    lines.push(String::new());
    lines.push("### VARIAÇÃO DIÁRIA NO VALOR TOTAL DAS VENDAS ###".to_string());
    for step in &summary.weekday_variation {
        lines.push(format!(
            "De {} para {}: R${:.2}",
            weekday_name(step.from),
            weekday_name(step.to),
            step.delta
        ));
    }

    let mut text = lines.join("\n");
    text.push('\n');
    text
}
