/// calculator form - raw strings in, projections out, logged with tracing
use term_deposit_rs::{CalculatorForm, CalculatorInputs, ProjectionEngine};
use tracing_subscriber::EnvFilter;

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let engine = ProjectionEngine::default();

    let forms = [
        CalculatorForm::default(),
        CalculatorForm {
            amount: "250000".to_string(),
            annual_rate: "95.5".to_string(),
            period_days: "40".to_string(),
            reinvest: true,
        },
        // still typing: blank amount yields the empty result
        CalculatorForm {
            amount: String::new(),
            ..CalculatorForm::default()
        },
    ];

    for form in &forms {
        let inputs = CalculatorInputs::from_form(form, engine.config());
        let result = inputs.project(&engine);
        println!("{:?}", inputs);
        println!("{}\n", result.json());
    }
}
