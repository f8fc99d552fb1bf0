use super::ui;
use crate::core::CurrencyRateProvider;
use anyhow::Result;

/// Fetches a single rate and prints it. A rate missing from the provider
/// response is shown as `N/A` rather than treated as an error.
pub async fn run(provider: &dyn CurrencyRateProvider, from: &str, to: &str) -> Result<()> {
    let rate = provider.get_rate(from, to).await?;
    println!("{}", display_rate(from, to, rate));
    Ok(())
}

pub fn display_rate(from: &str, to: &str, rate: Option<f64>) -> String {
    let value = match rate {
        Some(r) => ui::style_text(&ui::format_rate(r), ui::StyleType::Value),
        None => ui::style_text("N/A", ui::StyleType::Error),
    };
    format!("1 {from} = {value} {to}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct FixedProvider(Option<f64>);

    #[async_trait]
    impl CurrencyRateProvider for FixedProvider {
        async fn get_rate(&self, _from: &str, _to: &str) -> Result<Option<f64>> {
            Ok(self.0)
        }
    }

    struct FailingProvider;

    #[async_trait]
    impl CurrencyRateProvider for FailingProvider {
        async fn get_rate(&self, _from: &str, _to: &str) -> Result<Option<f64>> {
            anyhow::bail!("Failed to fetch exchange rate")
        }
    }

    #[test]
    fn test_display_rate() {
        console::set_colors_enabled(false);
        assert_eq!(display_rate("USD", "EUR", Some(0.92)), "1 USD = 0.9200 EUR");
        assert_eq!(display_rate("USD", "JPY", None), "1 USD = N/A JPY");
    }

    #[tokio::test]
    async fn test_run_missing_rate_is_ok() {
        assert!(run(&FixedProvider(None), "USD", "JPY").await.is_ok());
        assert!(run(&FixedProvider(Some(0.92)), "USD", "EUR").await.is_ok());
    }

    #[tokio::test]
    async fn test_run_propagates_error() {
        let err = run(&FailingProvider, "USD", "EUR").await.unwrap_err();
        assert_eq!(err.to_string(), "Failed to fetch exchange rate");
    }
}
