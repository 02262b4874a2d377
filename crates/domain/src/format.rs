//! Presentation formatting helpers (es-BO locale)

use chrono::{DateTime, Datelike, NaiveDate};

use crate::error::{DomainError, DomainResult};

/// Spanish month names, January first.
const MONTHS_ES: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

/// Formats an amount in bolivianos: `Bs 1.234,56`.
///
/// Dot thousands separators, comma decimals, always two decimal places.
#[must_use]
pub fn format_currency(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    // Work in centavos to avoid binary float artifacts at two decimals.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let cents = (value.abs() * 100.0).round() as u64;
    let integer = cents / 100;
    let fraction = cents % 100;

    let digits = integer.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    let grouped: String = grouped.chars().rev().collect();

    format!("{sign}Bs {grouped},{fraction:02}")
}

/// Formats a timestamp as a long es-BO date: `5 de marzo de 2026`.
///
/// Accepts RFC 3339 timestamps and bare `YYYY-MM-DD` dates.
///
/// # Errors
///
/// Returns [`DomainError::InvalidDate`] when the input parses as neither.
pub fn format_date(value: &str) -> DomainResult<String> {
    let (year, month, day) = DateTime::parse_from_rfc3339(value)
        .map(|dt| (dt.year(), dt.month0(), dt.day()))
        .or_else(|_| {
            NaiveDate::parse_from_str(value, "%Y-%m-%d").map(|d| (d.year(), d.month0(), d.day()))
        })
        .map_err(|_| DomainError::InvalidDate(value.to_string()))?;

    let month_name = MONTHS_ES
        .get(month as usize)
        .copied()
        .unwrap_or("desconocido");
    Ok(format!("{day} de {month_name} de {year}"))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_format_currency_groups_thousands() {
        assert_eq!(format_currency(0.0), "Bs 0,00");
        assert_eq!(format_currency(1234.5), "Bs 1.234,50");
        assert_eq!(format_currency(1_234_567.89), "Bs 1.234.567,89");
    }

    #[test]
    fn test_format_currency_rounds_to_centavos() {
        assert_eq!(format_currency(99.999), "Bs 100,00");
        assert_eq!(format_currency(49.994), "Bs 49,99");
    }

    #[test]
    fn test_format_currency_negative() {
        assert_eq!(format_currency(-1500.0), "-Bs 1.500,00");
    }

    #[test]
    fn test_format_date_rfc3339() {
        assert_eq!(
            format_date("2026-03-05T14:30:00Z").unwrap(),
            "5 de marzo de 2026"
        );
    }

    #[test]
    fn test_format_date_bare_date() {
        assert_eq!(format_date("2026-12-01").unwrap(), "1 de diciembre de 2026");
    }

    #[test]
    fn test_format_date_rejects_garbage() {
        assert!(matches!(
            format_date("ayer"),
            Err(DomainError::InvalidDate(_))
        ));
    }
}
