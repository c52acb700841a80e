use anyhow::{bail, Context, Result};
use aurora_vm::dump::{hex_dump, register_bytes};
use aurora_vm::sample::SAMPLE_PROGRAM;
use aurora_vm::{Cpu, MachineState, StdoutConsole, StepOutcome};
use clap::{ArgAction, Parser};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "aurora-vm",
    about = "Run a raw Aurora machine image (defaults to the built-in hello-world sample)."
)]
struct Args {
    /// Raw program image; omitted to run the built-in sample.
    #[arg(value_name = "PATH")]
    program: Option<PathBuf>,

    /// Address the image is copied to.
    #[arg(long, value_name = "ADDR", default_value = "0", value_parser = parse_address)]
    load_address: u32,

    /// Initial program counter (defaults to the load address).
    #[arg(long, value_name = "ADDR", value_parser = parse_address)]
    entry: Option<u32>,

    /// Stop after this many instructions even if the machine has not halted.
    #[arg(long, default_value_t = 32)]
    max_steps: u64,

    /// Hex dump the register file before every step.
    #[arg(long, default_value_t = false)]
    dump_registers: bool,

    /// Hex dump the first N bytes of memory after the run.
    #[arg(long, value_name = "N")]
    dump_memory: Option<usize>,

    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG overrides.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn parse_address(raw: &str) -> Result<u32, String> {
    let trimmed = raw.trim();
    let parsed = match trimmed.strip_prefix("0x") {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => trimmed.parse::<u32>(),
    };
    parsed.map_err(|e| format!("invalid address `{raw}`: {e}"))
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let image = match &args.program {
        Some(path) => std::fs::read(path)
            .with_context(|| format!("reading program image {}", path.display()))?,
        None => SAMPLE_PROGRAM.to_vec(),
    };

    let mut state = MachineState::new();
    state
        .load_program(args.load_address, &image)
        .context("loading program image")?;
    state.set_pc(args.entry.unwrap_or(args.load_address));

    tracing::info!(
        bytes = image.len(),
        load_address = args.load_address,
        pc = state.pc(),
        "program loaded"
    );

    let mut cpu = Cpu::with_state(state, StdoutConsole);
    let mut fault = None;

    for _ in 0..args.max_steps {
        if args.dump_registers {
            print_step_header(cpu.state());
        }

        match cpu.step() {
            Ok(StepOutcome::Continue) => {}
            Ok(StepOutcome::Halt) => break,
            Err(err) => {
                fault = Some(err);
                break;
            }
        }
    }

    if let Some(len) = args.dump_memory {
        let memory = cpu.state().memory().as_slice();
        print!("{}", hex_dump(Some("memory"), &memory[..len.min(memory.len())]));
    }

    if let Some(err) = fault {
        bail!("machine fault after {} steps: {}", cpu.steps(), err);
    }

    Ok(())
}

fn print_step_header(state: &MachineState) {
    print!("{}", hex_dump(Some("regs"), &register_bytes(state)));

    let pc = state.pc();
    let memory = state.memory();
    println!(
        "on byte 0x{:08x} ({}), ins: 0x{:02x}{:02x}",
        pc,
        pc,
        memory.get(pc).unwrap_or(0),
        memory.get(pc.wrapping_add(1)).unwrap_or(0)
    );
}
