//! `lockc-loader` — loads the compiled `lockc-ebpf` object, attaches
//! it to the kernel hooks named in the loader config, and forwards its
//! trace diagnostics to the host's `log` facade.
//!
//! Does not itself decide policy, watch a container runtime, or
//! register OCI hooks (spec.md §1) — it exposes the map handles the
//! external collaborator populates and then blocks, keeping the
//! programs attached.

mod cli;
mod config;

use anyhow::{Context, Result};
use aya::programs::{Lsm, TracePoint};
use aya::Ebpf;
use clap::Parser;
use config::LoaderConfig;
use log::info;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    match cli.command {
        cli::Command::Run(ref args) => run(&cli, args),
    }
}

fn run(cli: &cli::Cli, args: &cli::RunArgs) -> Result<()> {
    let config = LoaderConfig::load(&args.config)
        .with_context(|| format!("failed to load {}", args.config.display()))?;

    let level = if cli.verbose { "trace" } else { config.log_level.as_str() };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let mut ebpf = load_ebpf_object()?;

    if let Err(e) = aya_log::EbpfLogger::init(&mut ebpf) {
        // Not fatal: the loader keeps running, just without forwarded
        // eBPF trace diagnostics (spec.md §4.6).
        info!("failed to initialize eBPF logger: {e}");
    }

    let btf = aya::Btf::from_sys_fs().context("failed to load kernel BTF")?;

    if config.hooks.fork {
        attach_tracepoint(&mut ebpf, "sched_process_fork", "sched", "sched_process_fork")?;
    }
    if config.hooks.task_alloc {
        attach_lsm(&mut ebpf, &btf, "task_alloc")?;
    }
    if config.hooks.syslog {
        attach_lsm(&mut ebpf, &btf, "syslog")?;
    }
    if config.hooks.mount {
        attach_lsm(&mut ebpf, &btf, "sb_mount")?;
    }
    if config.hooks.setuid {
        attach_lsm(&mut ebpf, &btf, "task_fix_setuid")?;
    }
    if config.hooks.open {
        attach_lsm(&mut ebpf, &btf, "file_open")?;
    }

    info!("lockc-loader: all configured hooks attached, holding programs open");

    // The loader's entire job after attaching is to keep the eBPF
    // object's file descriptors alive; policy tables are populated by
    // the external collaborator through `ebpf.map_mut(..)`. Block
    // until interrupted rather than busy-polling.
    let (tx, rx) = std::sync::mpsc::channel();
    ctrlc::set_handler(move || {
        let _ = tx.send(());
    })
    .context("failed to install Ctrl-C handler")?;
    rx.recv().context("shutdown channel closed unexpectedly")?;

    info!("lockc-loader: shutting down");
    Ok(())
}

fn load_ebpf_object() -> Result<Ebpf> {
    let bytes = aya::include_bytes_aligned!(concat!(env!("OUT_DIR"), "/lockc-ebpf"));
    Ebpf::load(bytes).context("failed to load lockc-ebpf object")
}

fn attach_tracepoint(ebpf: &mut Ebpf, program_name: &str, category: &str, name: &str) -> Result<()> {
    let program: &mut TracePoint = ebpf
        .program_mut(program_name)
        .with_context(|| format!("no program named {program_name} in object"))?
        .try_into()?;
    program.load()?;
    program.attach(category, name)?;
    Ok(())
}

fn attach_lsm(ebpf: &mut Ebpf, btf: &aya::Btf, hook: &str) -> Result<()> {
    let program: &mut Lsm = ebpf
        .program_mut(hook)
        .with_context(|| format!("no program named {hook} in object"))?
        .try_into()?;
    program.load(hook, btf)?;
    program.attach()?;
    Ok(())
}
