use clap::{Parser, Subcommand};
use equation_core::format::superscript;
use equation_core::{catalog, Equation, EquationKind, Target, Unit, UnitValues};
use tracing_subscriber::EnvFilter;

/// Solve the built-in electrical equations from the command line
#[derive(Parser, Debug)]
#[command(name = "equation-solve")]
#[command(about = "Solve V = IR style relations for any one unknown", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the built-in equations and their units
    List,

    /// Solve one equation for one unknown
    Solve {
        /// Equation name (vir, qit, wpt, wqv, pvi, pv2r, pri2)
        #[arg(short, long)]
        equation: EquationKind,

        /// Unknown to solve for: a symbol (I, V^2) or a position (top:0, bottom:1).
        /// Out-of-range positions fall back to the equation's default target.
        #[arg(short, long)]
        target: Option<String>,

        /// Known values as SYMBOL=NUMBER; missing values count as 0
        #[arg(short = 'v', long = "value", value_parser = parse_value)]
        values: Vec<(Unit, f64)>,
    },

    /// Solve one unknown while stepping one known value over a range
    Sweep {
        /// Equation name (vir, qit, wpt, wqv, pvi, pv2r, pri2)
        #[arg(short, long)]
        equation: EquationKind,

        /// Unknown to solve for: a symbol or a position
        #[arg(short, long)]
        target: Option<String>,

        /// Symbol of the value to step
        #[arg(long)]
        vary: String,

        /// First value of the stepped input
        #[arg(long, default_value_t = 1.0)]
        from: f64,

        /// Last value of the stepped input
        #[arg(long, default_value_t = 10.0)]
        to: f64,

        /// Number of samples, including both ends
        #[arg(long, default_value_t = 10)]
        steps: usize,

        /// Other known values as SYMBOL=NUMBER
        #[arg(short = 'v', long = "value", value_parser = parse_value)]
        values: Vec<(Unit, f64)>,
    },
}

fn parse_unit(symbol: &str) -> Result<Unit, String> {
    catalog::unit_by_symbol(symbol).ok_or_else(|| format!("unknown unit symbol '{symbol}'"))
}

fn parse_value(arg: &str) -> Result<(Unit, f64), String> {
    let (symbol, value) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected SYMBOL=NUMBER, got '{arg}'"))?;
    let value = value
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("invalid number in '{arg}': {e}"))?;
    Ok((parse_unit(symbol)?, value))
}

/// Resolve the `--target` argument against `equation`
fn resolve_target(equation: &Equation, arg: Option<&str>) -> Result<Target, String> {
    let Some(arg) = arg else {
        return Ok(equation.normalize(Target::Top(usize::MAX)));
    };

    let positional = arg.split_once(':').and_then(|(role, index)| {
        let index = index.trim().parse::<usize>().ok()?;
        match role.trim() {
            "top" => Some(Target::Top(index)),
            "bottom" => Some(Target::Bottom(index)),
            _ => None,
        }
    });
    if let Some(target) = positional {
        return Ok(equation.normalize(target));
    }

    let unit = parse_unit(arg)?;
    equation
        .position(&unit)
        .ok_or_else(|| format!("'{arg}' does not appear in {equation}"))
}

fn describe_unit(unit: &Unit) -> String {
    format!(
        "{} ({}, {})",
        superscript(&unit.equation_symbol()),
        unit.unit_purpose(),
        superscript(unit.unit_symbol())
    )
}

fn list() {
    for kind in EquationKind::ALL {
        let equation = kind.equation();
        println!("{:<5} {}", kind, superscript(&equation.to_string()));
        for (unit, target) in equation.flatten() {
            println!("        {:<10} {}", target.to_string(), describe_unit(&unit));
        }
    }
}

fn solve(kind: EquationKind, target: Option<&str>, values: &[(Unit, f64)]) -> Result<(), String> {
    let equation = kind.equation();
    let target = resolve_target(equation, target)?;
    let unit = equation.resolve(target).map_err(|e| e.to_string())?;

    let values: UnitValues = values.iter().copied().collect();
    let result = equation
        .solve_by_value_map(target, &values)
        .map_err(|e| e.to_string())?;

    println!("{}", superscript(&equation.to_string()));
    println!(
        "{} = {} {}",
        superscript(unit.raw_symbol()),
        result,
        superscript(unit.unit_symbol())
    );
    Ok(())
}

fn sweep(
    kind: EquationKind,
    target: Option<&str>,
    vary: &str,
    from: f64,
    to: f64,
    steps: usize,
    values: &[(Unit, f64)],
) -> Result<(), String> {
    let equation = kind.equation();
    let target = resolve_target(equation, target)?;
    let unknown = equation.resolve(target).map_err(|e| e.to_string())?;
    let varied = parse_unit(vary)?;
    if equation.position(&varied).is_none() {
        return Err(format!("'{vary}' does not appear in {equation}"));
    }
    if steps < 2 {
        return Err("sweep needs at least 2 steps".to_string());
    }

    let base: UnitValues = values.iter().copied().collect();
    let samples: Vec<f64> = (0..steps)
        .map(|i| from + (to - from) * i as f64 / (steps - 1) as f64)
        .collect();
    let inputs: Vec<UnitValues> = samples
        .iter()
        .map(|&sample| {
            let mut values = base.clone();
            values.insert(varied, sample);
            values
        })
        .collect();
    let results = equation
        .solve_batch(target, &inputs)
        .map_err(|e| e.to_string())?;

    println!("{}", superscript(&equation.to_string()));
    println!(
        "{:>14} {:>14}",
        superscript(&varied.equation_symbol()),
        superscript(unknown.raw_symbol())
    );
    for (sample, result) in samples.iter().zip(results) {
        println!("{sample:>14.4} {result:>14.4}");
    }
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let outcome = match &args.command {
        Command::List => {
            list();
            Ok(())
        }
        Command::Solve {
            equation,
            target,
            values,
        } => solve(*equation, target.as_deref(), values),
        Command::Sweep {
            equation,
            target,
            vary,
            from,
            to,
            steps,
            values,
        } => sweep(
            *equation,
            target.as_deref(),
            vary,
            *from,
            *to,
            *steps,
            values,
        ),
    };

    if let Err(message) = outcome {
        eprintln!("error: {message}");
        std::process::exit(1);
    }
}
