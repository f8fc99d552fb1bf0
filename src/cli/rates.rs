use super::ui;
use crate::core::{HttpClient, RateTable};
use crate::providers::exchangerate_api::ExchangeRateClient;
use anyhow::Result;

/// Prints every rate reported for `from` from a single request.
pub async fn run<C: HttpClient>(client: &ExchangeRateClient<C>, from: &str) -> Result<()> {
    let table = client.fetch_rate_table(from).await?;
    println!("{}", display_rate_table(from, &table));
    Ok(())
}

pub fn display_rate_table(from: &str, table: &RateTable) -> String {
    let base = table.base.as_deref().unwrap_or(from);

    let mut output = format!(
        "Rates for 1 {}\n",
        ui::style_text(base, ui::StyleType::Title)
    );
    if let Some(updated) = table.last_updated() {
        output.push_str(&ui::style_text(
            &format!("Last updated: {}\n", updated.format("%Y-%m-%d %H:%M UTC")),
            ui::StyleType::Subtle,
        ));
    } else if let Some(date) = &table.date {
        output.push_str(&ui::style_text(
            &format!("Date: {date}\n"),
            ui::StyleType::Subtle,
        ));
    }
    output.push('\n');

    let mut grid = ui::new_styled_table();
    grid.set_header(vec![ui::header_cell("Currency"), ui::header_cell("Rate")]);
    for (code, rate) in table.sorted_rates() {
        grid.add_row(vec![comfy_table::Cell::new(code), ui::rate_cell(rate)]);
    }
    output.push_str(&grid.to_string());

    output
}
