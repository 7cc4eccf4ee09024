use chrono::NaiveDate;
use painel_core::{DateRange, PainelError};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("data de teste invalida")
}

#[test]
fn inverted_range_is_rejected() {
    assert_eq!(
        DateRange::new(date(2024, 3, 2), date(2024, 3, 1)),
        Err(PainelError::InvertedRange)
    );
    assert!(DateRange::new(date(2024, 3, 1), date(2024, 3, 1)).is_ok());
}

#[test]
fn filter_inputs_are_validated() {
    assert_eq!(
        DateRange::parse_inputs("", "2024-01-31"),
        Err(PainelError::MissingDate)
    );
    assert_eq!(
        DateRange::parse_inputs("2024-02-01", "2024-01-31"),
        Err(PainelError::InvertedRange)
    );
    assert_eq!(
        DateRange::parse_inputs("31/01/2024", "2024-01-31"),
        Err(PainelError::InvalidDate("31/01/2024".to_string()))
    );

    let range = DateRange::parse_inputs("2024-01-01", "2024-01-31").expect("intervalo valido");
    assert_eq!(range.start_param(), "2024-01-01");
    assert_eq!(range.end_param(), "2024-01-31");
}

#[test]
fn error_messages_match_filter_panel_copy() {
    assert_eq!(PainelError::MissingDate.to_string(), "Preencha as duas datas.");
    assert_eq!(
        PainelError::InvertedRange.to_string(),
        "Data inicial nao pode ser maior que a final."
    );
}

#[test]
fn previous_month_covers_whole_calendar_month() {
    let range = DateRange::previous_month(date(2024, 3, 15));
    assert_eq!(range.start(), date(2024, 2, 1));
    assert_eq!(range.end(), date(2024, 2, 29));

    let range = DateRange::previous_month(date(2025, 1, 1));
    assert_eq!(range.start(), date(2024, 12, 1));
    assert_eq!(range.end(), date(2024, 12, 31));
}
