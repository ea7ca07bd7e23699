//! Vector Calculator
//!
//! A menu-driven calculator for 3D vector arithmetic. Reads two vectors,
//! shows a numbered menu, performs the chosen operation and prints the result
//! to two decimal places.
//!
//! # Usage
//!
//! ```bash
//! cargo run --package vector-calc
//! cargo run --package vector-calc -- -vv    # debug logs on stderr
//! RUST_LOG=vector_calc_core=debug cargo run --package vector-calc
//! ```
//!
//! # Operations
//!
//! 1. Vector Addition
//! 2. Vector Subtraction
//! 3. Dot Product
//! 4. Cross Product
//! 5. Vector Projection
//! 6. Magnitude (of both vectors)
//! 7. Scalar Projection
//! 8. Vector Triple Product (asks for a third vector)
//! 9. Angle Between Vectors
//! 10. Unit Vector (of both vectors)
//! 11. Plane Equation (asks for a normal and a point)
//! 12. Line Equation (asks for a point and a direction)

mod error;
mod input;
mod menu;
mod session;

use clap::{ArgAction, Parser};
use std::io;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use crate::session::Session;

/// Menu-driven 3D vector calculator
#[derive(Parser, Debug)]
#[command(name = "vector-calc")]
#[command(version, about = "Menu-driven 3D vector calculator", long_about = None)]
struct Args {
    /// Log verbosity on stderr (-v info, -vv debug, -vvv trace); `RUST_LOG` overrides
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.log_level());

    let mut session = Session::new(io::stdin().lock(), io::stdout().lock());
    match session.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
