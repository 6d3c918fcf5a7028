use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use fixed_bignum::bignum::{Bignum, Bn128, SubMode};
use std::fmt::Display;
use tracing_subscriber::EnvFilter;

/// Operand type for the arithmetic subcommands
type Num = Bn128;

/// Two 32 bit limbs, the layout the tour walks through
type TourNum = Bignum<u32, 2>;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// log at debug level, ignoring RUST_LOG
    #[arg(short, long, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

/// Operands are hex, either plain digits (optionally 0x prefixed) or the
/// underscore separated form that results are printed in.
#[derive(Subcommand, Debug)]
enum Command {
    /// walk through clear, add, shift and subtract on a 64 bit number
    Tour,

    /// a + b
    Add { a: Num, b: Num },

    /// a - b, wrapping unless --strict is given
    Sub {
        a: Num,
        b: Num,

        /// fail instead of wrapping when b > a
        #[arg(short, long, default_value_t = false)]
        strict: bool,
    },

    /// a * b
    Mul { a: Num, b: Num },

    /// n / d and n % d
    Divmod { n: Num, d: Num },

    /// base ^ exponent % modulus
    Powmod {
        base: Num,
        exponent: Num,
        modulus: Num,
    },
}

fn print_hex(label: &str, value: &impl Display) {
    println!("{label}{value}");
}

fn tour() -> Result<()> {
    println!("BITS = {}, LIMBS = {}", TourNum::BITS, TourNum::ZERO.limbs().len());

    println!("-- clear and add --");
    let mut a = TourNum::ZERO;
    let mut b = TourNum::ZERO;
    let mut c = TourNum::ZERO;
    a.limbs_mut()[0] = 0xFFFFFFFF;
    b.limbs_mut()[0] = 0xFFFFFFFF;
    a.add(&b, &mut c).context("Adding a and b.")?;
    print_hex("a   = ", &a);
    print_hex("b   = ", &b);
    print_hex("a+b = ", &c);

    println!("-- shift left --");
    c.clear();
    c.limbs_mut()[0] = 0x40000000;
    print_hex("c     = ", &c);
    c.shl1_in_place();
    print_hex("shl 1 = ", &c);
    c.shift_left_1(&mut b);
    print_hex("shlCp = ", &b);
    print_hex("orig  = ", &c);

    println!("-- clear and shr --");
    c.clear();
    c.limbs_mut()[1] = 0x1;
    print_hex("c     = ", &c);
    c.shr1_in_place();
    print_hex("shr 1 = ", &c);
    c.shift_right_1(&mut b);
    print_hex("shrCp = ", &b);
    print_hex("orig  = ", &c);

    println!("-- clear and subtract --");
    let a = TourNum::from_limbs([0xFFEAFFEE, 0x42]);
    let b = TourNum::from_limbs([0xDDAEAFEA, 0x03]);
    a.sub(&b, &mut c).context("Subtracting b from a.")?;
    print_hex("a     = ", &a);
    print_hex("b     = ", &b);
    print_hex("a - b = ", &c);

    let a = TourNum::from_limbs([0, 1]);
    let b = TourNum::from_limbs([0, 2]);
    a.sub(&b, &mut c).context("Subtracting b from a.")?;
    print_hex("a     = ", &a);
    print_hex("b     = ", &b);
    print_hex("a - b = ", &c);
    if let Err(err) = a.sub_strict(&b, &mut c) {
        println!("strict a - b: {err}");
    }

    Ok(())
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Tour => tour()?,
        Command::Add { a, b } => {
            let sum = a.checked_add(&b).context("Adding the operands.")?;
            print_hex("a + b = ", &sum);
        }
        Command::Sub { a, b, strict } => {
            let mode = if strict {
                SubMode::Strict
            } else {
                SubMode::Wrapping
            };
            let mut diff = Num::ZERO;
            a.sub_with_mode(&b, &mut diff, mode)
                .with_context(|| format!("Subtracting with {mode:?} mode."))?;
            print_hex("a - b = ", &diff);
        }
        Command::Mul { a, b } => {
            let product = a.checked_mul(&b).context("Multiplying the operands.")?;
            print_hex("a * b = ", &product);
        }
        Command::Divmod { n, d } => {
            let (q, r) = n.div_rem(&d).context("Dividing n by d.")?;
            print_hex("n / d = ", &q);
            print_hex("n % d = ", &r);
        }
        Command::Powmod {
            base,
            exponent,
            modulus,
        } => {
            let result = base
                .checked_powmod(&exponent, &modulus)
                .context("Raising base to exponent modulo modulus.")?;
            print_hex("base ^ exponent % modulus = ", &result);
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    let args: Args = Args::try_parse()?;

    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(command = ?args.command, "running");
    run(args.command)
}
