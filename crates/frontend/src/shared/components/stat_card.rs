use crate::shared::icons::icon;
use leptos::prelude::*;

/// Summary tile shown above report tables.
#[component]
pub fn StatCard(
    /// Label displayed above the value
    label: String,
    /// Icon name from the icon() helper
    icon_name: String,
    /// Pre-formatted value ("-" while loading)
    #[prop(into)]
    value: Signal<String>,
    /// Accent modifier class, e.g. "success" / "error"
    #[prop(optional, into)]
    accent: Option<String>,
) -> impl IntoView {
    let card_class = match accent.as_deref() {
        Some("success") => "stat-card stat-card--success",
        Some("error") => "stat-card stat-card--error",
        Some("warning") => "stat-card stat-card--warning",
        _ => "stat-card",
    };

    view! {
        <div class=card_class>
            <div class="stat-card__icon">
                {icon(&icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{value}</div>
            </div>
        </div>
    }
}

/// Format a monetary amount with thousands separators, e.g. "12,345.60".
pub fn format_amount(val: f64) -> String {
    let negative = val < 0.0;
    // Rounded in cents before splitting, so .999 carries into the units
    let cents = (val.abs() * 100.0).round() as i64;
    let grouped = format_thousands(cents / 100);
    let sign = if negative { "-" } else { "" };
    format!("{}{}.{:02}", sign, grouped, cents % 100)
}

/// Format an integer count with thousands separators.
pub fn format_count(n: u32) -> String {
    format_thousands(n as i64)
}

fn format_thousands(n: i64) -> String {
    let s = n.abs().to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    if n < 0 {
        result.push('-');
    }
    result.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount_groups_thousands() {
        assert_eq!(format_amount(0.0), "0.00");
        assert_eq!(format_amount(1234.5), "1,234.50");
        assert_eq!(format_amount(9876543.21), "9,876,543.21");
        assert_eq!(format_amount(-1500.0), "-1,500.00");
    }

    #[test]
    fn test_format_amount_rounds_fraction() {
        assert_eq!(format_amount(9.999), "10.00");
        // exact binary half: 12.5 cents rounds away from zero
        assert_eq!(format_amount(0.125), "0.13");
        assert_eq!(format_amount(1999.999), "2,000.00");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(1000000), "1,000,000");
    }
}
