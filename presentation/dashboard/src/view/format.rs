use chrono::{DateTime, Utc};

/// Formats an amount in pt-BR currency style, e.g. `R$ 1.234,56`.
pub fn format_price(value: f64) -> String {
    let cents = (value * 100.0).round() as i64;
    let reais = (cents / 100).to_string();

    let mut grouped = String::new();
    for (i, digit) in reais.chars().enumerate() {
        if i > 0 && (reais.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }

    format!("R$ {},{:02}", grouped, cents % 100)
}

/// Formats a timestamp as `dd/mm/yyyy`.
pub fn format_date(at: &DateTime<Utc>) -> String {
    at.format("%d/%m/%Y").to_string()
}
