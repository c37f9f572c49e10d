//! Integration tests for the built-in field kinds, driven through the prelude.

use pretty_assertions::assert_eq;
use toolbox_validator::prelude::*;

// ============================================================================
// TEXT AND DATES
// ============================================================================

#[test]
fn sanitizer_and_date_normalizer() {
    let text = "  <p>Olá</p>\u{a0}";
    let once = sanitize(text);
    assert_eq!(once, "Olá");
    assert_eq!(sanitize(&once), once);

    assert_eq!(to_storage_order("31/02/2020"), "2020-02-31");
}

#[test]
fn text_rejects_denylisted_input_even_when_optional() {
    let err = Field::new(TextRule::new())
        .label("Comentário")
        .validate(Some("DELETE FROM users"))
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidCharacters);
    assert_eq!(err.message, "Comentário apresenta caracteres inválidos");
}

// ============================================================================
// NUMBERS
// ============================================================================

#[test]
fn integer_between_bounds_depends_on_mode() {
    let literal = Field::new(IntegerRule::new().bounds(Bounds::new().minimum(10).maximum(20)));
    let err = literal.validate(Some("15")).unwrap_err();
    assert_eq!(err.code, ErrorCode::Maximum);
    assert_eq!(err.param("maximum"), Some("20"));

    let inclusive = Field::new(
        IntegerRule::new().bounds(Bounds::new().minimum(10).maximum(20).mode(BoundMode::Inclusive)),
    );
    assert_eq!(inclusive.validate(Some("15")).unwrap(), Some("15".to_owned()));
}

#[test]
fn integer_below_minimum_and_too_long() {
    let field = Field::new(IntegerRule::new().bounds(Bounds::new().minimum(10))).label("Qtd");
    assert_eq!(field.validate(Some("5")).unwrap_err().code, ErrorCode::Minimum);

    let err = Field::new(IntegerRule::new().max_length(10))
        .validate(Some("123456789012"))
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::MaxDigits);
}

#[test]
fn decimal_normalization() {
    let field = Field::new(DecimalRule::new());
    assert_eq!(field.validate(Some("10,5")).unwrap(), Some("10.5".to_owned()));
    assert_eq!(field.validate(Some("10")).unwrap(), Some("10.00".to_owned()));
}

// ============================================================================
// CONTACT AND DOCUMENTS
// ============================================================================

#[test]
fn email_cases() {
    let field = Field::new(EmailRule::new().max_length(50)).label("E-mail");
    assert!(field.validate(Some("a@b@c.com")).is_err());
    assert_eq!(
        field.validate(Some("user@example.com")).unwrap(),
        Some("user@example.com".to_owned())
    );
}

#[test]
fn tax_id_cases() {
    let field = Field::new(TaxIdRule::new()).label("CPF");
    assert_eq!(
        field.validate(Some("529.982.247-25")).unwrap(),
        Some("52998224725".to_owned())
    );
    let err = field.validate(Some("123.456.789-00")).unwrap_err();
    assert_eq!(err.code, ErrorCode::Invalid);
    assert_eq!(err.message, "CPF inválido(a)");
}

#[test]
fn phone_and_area_code() {
    let ddd = Field::new(AreaCodeRule::new().max_length(3)).label("DDD");
    let phone = Field::new(PhoneRule::new().max_length(9)).label("Telefone");

    assert!(ddd.validate(Some("81")).is_ok());
    assert!(phone.validate(Some("998877665")).is_ok());
    assert_eq!(ddd.validate(Some("8")).unwrap_err().code, ErrorCode::Invalid);
    assert_eq!(phone.validate(Some("9988776655")).unwrap_err().code, ErrorCode::MaxDigits);
}

#[test]
fn url_failure_keeps_cause() {
    let field = Field::new(UrlRule::new().max_length(20)).label("Site");
    let err = field
        .validate(Some("https://a-very-long-domain.example.com"))
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::Invalid);
    assert_eq!(err.nested[0].code, ErrorCode::MaxLength);
}

// ============================================================================
// SELECTION
// ============================================================================

#[test]
fn choice_options() {
    let choice = Choice::new().options([("1", "A"), ("2", "B")]);
    assert!(choice.validate(Some("2".into())).is_ok());
    assert_eq!(
        choice.validate(Some("3".into())).unwrap_err().code,
        ErrorCode::Unavailable
    );
}

#[test]
fn boolean_words() {
    let flag = Boolean::new();
    assert_eq!(flag.validate(Some("On")).unwrap(), Some(true));
    assert_eq!(flag.validate(Some("TRUE")).unwrap(), Some(true));
    assert_eq!(flag.validate(Some("")).unwrap(), Some(false));
    assert_eq!(flag.validate(Some("off")).unwrap(), Some(false));
    assert_eq!(flag.validate(None).unwrap(), Some(false));
    assert!(flag.validate(Some("maybe")).is_err());
    assert_eq!(Boolean::new().silent().validate(Some("maybe")).unwrap(), None);
}
