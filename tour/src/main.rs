use num_bigint::BigUint;
use resumable::*;

#[derive(clap::Parser)]
#[command(name = "tour", version, about = "Walk through resumable generator demonstrations")]
struct Cli {
    #[command(subcommand)]
    demo: Option<Demo>,
}

#[derive(clap::Subcommand)]
enum Demo {
    /// Integer range, printing the final count
    Range {
        #[arg(long, default_value_t = 1)]
        start: i64,
        /// Omit for an unbounded range (stopped by --limit)
        #[arg(long)]
        end: Option<i64>,
        #[arg(long, default_value_t = 1)]
        step: i64,
        /// Stop after this many steps
        #[arg(long, default_value_t = 100)]
        limit: usize,
    },
    /// The first COUNT Fibonacci numbers
    Fib {
        #[arg(long, default_value_t = 5)]
        count: usize,
    },
    /// Endless Fibonacci numbers restarted by a value passed back in
    Restart {
        /// Number of plain steps before the reset
        #[arg(long, default_value_t = 4)]
        before: usize,
        /// Number of plain steps after the reset
        #[arg(long, default_value_t = 3)]
        after: usize,
    },
    /// Error injected into a generator that catches it
    Throw {
        #[arg(long, default_value = "Something went wrong")]
        message: String,
    },
    /// Early completion with a return value
    Finish {
        #[arg(long, default_value_t = 1)]
        value: i64,
    },
    /// Two closures sharing one captured local
    Closure,
    /// Every demonstration with default parameters
    All,
}

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
    // Initialize logger (controlled by RUST_LOG)
    env_logger::init();

    let cli = <Cli as clap::Parser>::parse();
    match cli.demo.unwrap_or(Demo::All) {
        Demo::Range { start, end, step, limit } => run_range(start, end, step, limit)?,
        Demo::Fib { count } => run_fibonacci(count)?,
        Demo::Restart { before, after } => run_restarting(before, after)?,
        Demo::Throw { message } => run_throw(&message)?,
        Demo::Finish { value } => run_finish(value)?,
        Demo::Closure => run_closure(),
        Demo::All => {
            run_range(1, Some(10), 1, 100)?;
            run_fibonacci(5)?;
            run_restarting(4, 3)?;
            run_throw("Something went wrong")?;
            run_finish(1)?;
            run_closure();
        }
    }
    Ok(())
}

fn run_range(start: i64, end: Option<i64>, step: i64, limit: usize) -> Result<(), GeneratorError> {
    println!("** Range generator **");
    let mut range = Generator::new(Range::new(start, end, step));
    for _ in 0..limit {
        let result = range.advance(None)?;
        println!("{result}");
        if result.is_done() {
            return Ok(());
        }
    }
    log::info!("range stopped after {limit} steps");
    Ok(())
}

fn run_fibonacci(count: usize) -> Result<(), GeneratorError> {
    println!("** Fibonacci generator **");
    let mut fibonacci = Generator::new(Fibonacci::<BigUint>::new(count));
    loop {
        let result = fibonacci.advance(None)?;
        println!("{result}");
        if result.is_done() {
            return Ok(());
        }
    }
}

fn run_restarting(before: usize, after: usize) -> Result<(), GeneratorError> {
    let mut fibonacci = Generator::new(RestartingFibonacci::<BigUint>::new());
    println!("** Starting restarting generator **");
    for _ in 0..before {
        println!("{}", fibonacci.advance(None)?);
    }
    println!("** Resetting state of generator **");
    println!("{}", fibonacci.advance(Some(true))?);
    for _ in 0..after {
        println!("{}", fibonacci.advance(None)?);
    }
    Ok(())
}

fn run_throw(message: &str) -> Result<(), GeneratorError> {
    let mut counter = Generator::new(Counter::new());
    println!("** Starting error generator **");
    println!("{}", counter.advance(None)?);
    counter.inject_error(Exception::new(message))?;
    for e in counter.body().caught() {
        println!("Error caught: {e}");
    }
    println!("**State of generator after catching error**");
    println!("{}", counter.advance(None)?);
    Ok(())
}

fn run_finish(value: i64) -> Result<(), GeneratorError> {
    let mut values = Generator::new(Values::new([1, 2, 3]));
    println!("**Initial values of generator**");
    println!("{}", values.advance(None)?);
    println!("{}", values.advance(None)?);
    println!("{}", values.finish(Some(value))?);
    println!("{}", values.advance(None)?);
    Ok(())
}

fn run_closure() {
    println!("** Closure scope **");
    println!("{}", add_and_multiply());
}

// `result` is local to this function; both closures share the same binding.
fn add_and_multiply() -> i64 {
    let result = std::cell::Cell::new(0);
    let add = |num: i64| result.set(result.get() + num);
    let multiply = |num: i64| result.set(result.get() * num);

    add(5);
    multiply(2);
    add(5);
    multiply(3);

    result.get()
}
