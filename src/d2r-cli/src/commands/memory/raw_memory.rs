//! Raw memory access command handlers

use anyhow::{Context, Result};
use d2r::MemorySource;

/// Parse a hex or decimal address string
pub fn parse_address(address: &str) -> Result<usize> {
    let address = address.trim();
    if let Some(hex) = address
        .strip_prefix("0x")
        .or_else(|| address.strip_prefix("0X"))
    {
        usize::from_str_radix(hex, 16).with_context(|| format!("Invalid hex address: {}", address))
    } else {
        address
            .parse::<usize>()
            .with_context(|| format!("Invalid address: {}", address))
    }
}

/// Format bytes as a hex dump with an ASCII column
pub fn hex_dump(base: usize, data: &[u8]) -> String {
    let mut out = String::new();
    for (i, chunk) in data.chunks(16).enumerate() {
        out.push_str(&format!("{:08x}  ", base + i * 16));
        for j in 0..16 {
            match chunk.get(j) {
                Some(byte) => out.push_str(&format!("{:02x} ", byte)),
                None => out.push_str("   "),
            }
            if j == 7 {
                out.push(' ');
            }
        }
        out.push_str(" |");
        for byte in chunk {
            let c = *byte as char;
            out.push(if c.is_ascii_graphic() || c == ' ' { c } else { '.' });
        }
        out.push_str("|\n");
    }
    out
}

/// Handle the Read command
///
/// Reads bytes from memory and displays them as a hex dump.
pub fn handle_read(source: &dyn MemorySource, address: &str, size: usize) -> Result<()> {
    let addr = parse_address(address)?;
    let data = source.read_bytes(addr, size)?;

    println!("Reading {} bytes at {:#x}:", size, addr);
    print!("{}", hex_dump(addr, &data));

    Ok(())
}
