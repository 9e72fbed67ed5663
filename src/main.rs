use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;
use tracing::{debug, trace};

use ccsds_crc::crc::{crc16_ccsds, crc16_ccsds_table};
use ccsds_crc::hex::decode_hex;

#[derive(Parser, Debug)]
#[command(name = "ccsds-crc", about = "CCSDS CRC-16 of a hexadecimal string")]
struct Args {
    /// Hexadecimal input, spaces allowed. Prompted for when omitted.
    #[arg(value_name = "HEX", env = "CCSDS_CRC_HEX")]
    hex: Option<String>,

    /// Use the table-driven computation
    #[arg(long, env = "CCSDS_CRC_TABLE")]
    table: bool,

    /// Print only the checksum digits
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr so stdout only carries the checksum.
    let env_filter = tracing_subscriber::EnvFilter::builder()
        .with_default_directive("ccsds_crc=warn".parse()?)
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();

    let input = match args.hex {
        Some(hex) => hex.trim().to_string(),
        None => prompt_for_hex()?,
    };
    debug!(len = input.len(), "input received");

    let data = match decode_hex(&input) {
        Ok(data) => data,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };
    debug!(bytes = data.len(), "decoded input");

    let crc = if args.table {
        trace!("using table-driven crc");
        crc16_ccsds_table(&data)
    } else {
        trace!("using bitwise crc");
        crc16_ccsds(&data)
    };

    if args.quiet {
        println!("{}", format_crc(crc));
    } else {
        println!("CRC-16 (CCSDS) of {}: {}", input, format_crc(crc));
    }

    Ok(())
}

fn prompt_for_hex() -> Result<String> {
    print!("Enter hexadecimal string (e.g. 'ABCD1234'): ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Four uppercase, zero-padded hex digits.
fn format_crc(crc: u16) -> String {
    format!("{crc:04X}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checksum_is_zero_padded_uppercase() {
        assert_eq!(format_crc(4660), "1234");
        assert_eq!(format_crc(0x0EC9), "0EC9");
        assert_eq!(format_crc(0xabcd), "ABCD");
        assert_eq!(format_crc(0), "0000");
    }

    #[test]
    fn args_parse_flags() {
        let args = Args::try_parse_from(["ccsds-crc", "--table", "-q", "AB CD"]).unwrap();
        assert_eq!(args.hex.as_deref(), Some("AB CD"));
        assert!(args.table);
        assert!(args.quiet);
    }
}
