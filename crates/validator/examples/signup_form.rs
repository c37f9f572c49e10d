//! Validates a sign-up form and prints every failure.
//!
//! Run with `RUST_LOG=toolbox_validator=trace` to see each field's outcome.

use toolbox_validator::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("toolbox_validator=debug")),
        )
        .init();

    let name = Field::new(TextRule::new().max_length(40)).required().label("Nome");
    let cpf = Field::new(TaxIdRule::new()).required().label("CPF");
    let birth = Field::new(BrDateRule).label("Nascimento");
    let salary = Field::new(DecimalRule::new().max_digits(7)).label("Salário");
    let email = Field::new(EmailRule::new().max_length(80)).required().label("E-mail");
    let state = Choice::new()
        .options([("PE", "Pernambuco"), ("SP", "São Paulo")])
        .required()
        .label("Estado");
    let terms = Boolean::new().label("Termos");

    let mut errors = ValidationErrors::new();
    let values = (
        errors.record(name.validate(Some("  <b>Maria</b> da Silva "))),
        errors.record(cpf.validate(Some("529.982.247-25"))),
        errors.record(birth.validate(Some("14/07/1989"))),
        errors.record(salary.validate(Some("4500,5"))),
        errors.record(email.validate(Some("Maria@Example.com"))),
        errors.record(state.validate(Some("RJ".into()))),
        errors.record(terms.validate(Some("on"))),
    );

    println!("accepted: {values:#?}");
    match errors.into_result(()) {
        Ok(()) => println!("form is valid"),
        Err(errors) => println!("{errors}"),
    }
}
