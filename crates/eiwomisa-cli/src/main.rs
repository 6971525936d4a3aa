use std::net::UdpSocket;
use std::process::ExitCode;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::{Context, Result};
use clap::Parser;
use clap::error::ErrorKind;

use eiwomisa_core::config::{DEFAULT_BAUD_RATE, DEFAULT_SERIAL_DEVICE, DEFAULT_UDP_PORT};
use eiwomisa_core::{Bridge, BridgeConfig, Protocol, SerialLink};

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (commit ",
    env!("EIWOMISA_BUILD_COMMIT"),
    ", ",
    env!("EIWOMISA_BUILD_DATE"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "eiwomisa-bridge")]
#[command(version, long_version = LONG_VERSION)]
#[command(
    about = "Forwards UDP control packets to an EIWOMISA controller over RS-232.",
    long_about = None,
    after_help = "Examples:\n  eiwomisa-bridge -p 1337 -s /dev/ttyS0 -b 9600\n  eiwomisa-bridge --protocol 1 --debug"
)]
struct Cli {
    /// UDP port to listen on
    #[arg(short = 'p', long, default_value_t = DEFAULT_UDP_PORT)]
    port: u16,

    /// Serial device the controller is attached to
    #[arg(short = 's', long = "serial", default_value = DEFAULT_SERIAL_DEVICE)]
    serial: String,

    /// Serial baud rate
    #[arg(short = 'b', long, default_value_t = DEFAULT_BAUD_RATE)]
    baud: u32,

    /// Wire protocol: 0 = EIWOMISA, 1 = ATMO (other values fall back to EIWOMISA)
    #[arg(long, default_value_t = 0)]
    protocol: u8,

    /// Log every validation step
    #[arg(long, conflicts_with = "silent")]
    debug: bool,

    /// Only log errors
    #[arg(long)]
    silent: bool,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = err.print();
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            let _ = err.print();
            eprintln!("Try 'eiwomisa-bridge --help' for more information.");
            return ExitCode::from(1);
        }
    };

    init_logger(&cli);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(1)
        }
    }
}

fn init_logger(cli: &Cli) {
    let default_filter = if cli.debug {
        "debug"
    } else if cli.silent {
        "error"
    } else {
        "info"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = BridgeConfig {
        udp_port: cli.port,
        serial_device: cli.serial,
        baud_rate: cli.baud,
        protocol: Protocol::from_tag(cli.protocol),
    };
    log::info!(
        "bridging UDP port {} to {} at {} baud, protocol {}",
        config.udp_port,
        config.serial_device,
        config.baud_rate,
        config.protocol
    );

    // Startup order is fixed: bind the socket, open the serial device,
    // install the signal handler, then receive. The device must be open
    // before the first datagram because frames are written on arrival.
    let socket = UdpSocket::bind(("0.0.0.0", config.udp_port))
        .with_context(|| format!("failed to bind UDP port {}", config.udp_port))?;
    log::info!("listening on 0.0.0.0:{}", config.udp_port);

    let link = SerialLink::open(&config.serial_device, config.baud_rate)
        .with_context(|| format!("failed to open serial device {}", config.serial_device))?;

    let mut bridge = Bridge::new(socket, link, config.protocol)
        .context("failed to configure bridge socket")?;

    let running = Arc::new(AtomicBool::new(true));
    let flag = Arc::clone(&running);
    ctrlc::set_handler(move || {
        log::info!("termination signal received");
        flag.store(false, Ordering::Relaxed);
    })
    .context("failed to install signal handler")?;

    bridge.run(&running).context("bridge loop failed")?;

    // Dropping the bridge closes the serial link.
    log::info!("serial device closed, exiting");
    Ok(())
}
