use clap::{Parser, ValueEnum};
use vtest::{CollectSink, Tester};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Kind {
    Equal,
    NotEqual,
    LessThan,
    LessOrEqual,
    GreaterThan,
    GreaterOrEqual,
    IsTrue,
    IsFalse,
}

/// Simple runner: evaluate one verbose check from the shell. Exits 1 when
/// the check fails, so it composes with `&&` chains and CI scripts.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Comparison to evaluate
    kind: Kind,
    /// Left operand
    lhs: String,
    /// Right operand (omitted for is-true / is-false)
    rhs: Option<String>,
    /// Tolerance margin; selects the approximate numeric comparisons
    #[arg(long)]
    margin: Option<f64>,
    /// Description printed alongside the check
    #[arg(long, default_value = "cli check")]
    message: String,
    /// Scope labels for the printed headers
    #[arg(long, default_value = "vtest")]
    group: String,
    #[arg(long, default_value = "cli")]
    case: String,
}

fn main() {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let mut t = Tester::with_parts(std::io::stdout(), CollectSink::new());
    t.scope(&args.group, &args.case);

    match args.kind {
        Kind::IsTrue | Kind::IsFalse => {
            let value: bool = match args.lhs.parse() {
                Ok(v) => v,
                Err(_) => usage_error(&format!("not a boolean: {}", args.lhs)),
            };
            match args.kind {
                Kind::IsTrue => t.is_true(&args.message, value),
                _ => t.is_false(&args.message, value),
            }
        }
        kind => {
            let rhs = match args.rhs.as_deref() {
                Some(rhs) => rhs,
                None => usage_error("this comparison needs a right operand"),
            };
            run_comparison(&mut t, kind, &args.message, &args.lhs, rhs, args.margin);
        }
    }

    let (_, sink) = t.into_parts();
    if sink.into_result().is_err() {
        std::process::exit(1);
    }
}

/// Numeric operands compare numerically through the approximate forms, with
/// a zero margin when none was given; anything else compares lexically.
fn run_comparison(
    t: &mut Tester<std::io::Stdout, CollectSink>,
    kind: Kind,
    message: &str,
    lhs: &str,
    rhs: &str,
    margin: Option<f64>,
) {
    if let (Ok(a), Ok(b)) = (lhs.parse::<f64>(), rhs.parse::<f64>()) {
        let m = margin.unwrap_or(0.0);
        match kind {
            Kind::Equal => t.equal_within(message, a, b, m),
            Kind::NotEqual => t.not_equal_within(message, a, b, m),
            Kind::LessThan => t.less_than_within(message, a, b, m),
            Kind::LessOrEqual => t.less_or_equal_within(message, a, b, m),
            Kind::GreaterThan => t.greater_than_within(message, a, b, m),
            Kind::GreaterOrEqual => t.greater_or_equal_within(message, a, b, m),
            Kind::IsTrue | Kind::IsFalse => unreachable!("handled by caller"),
        }
        return;
    }
    if margin.is_some() {
        usage_error("--margin requires numeric operands");
    }
    match kind {
        Kind::Equal => t.equal(message, lhs, rhs),
        Kind::NotEqual => t.not_equal(message, lhs, rhs),
        Kind::LessThan => t.less_than(message, lhs, rhs),
        Kind::LessOrEqual => t.less_or_equal(message, lhs, rhs),
        Kind::GreaterThan => t.greater_than(message, lhs, rhs),
        Kind::GreaterOrEqual => t.greater_or_equal(message, lhs, rhs),
        Kind::IsTrue | Kind::IsFalse => unreachable!("handled by caller"),
    }
}

fn usage_error(reason: &str) -> ! {
    eprintln!("{reason}");
    std::process::exit(2);
}
