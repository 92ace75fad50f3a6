use docso::*;

fn main() {
    // ── 1. Sample conversions in both regions ─────────────────────────
    println!("=== Conversions ===");
    for n in [0, 15, 21, 105, 1_005, 100_005, 1_000_005, 999_999_999_999] {
        println!("{n:>15}  north: {}", convert(n, Region::North).unwrap());
        println!("{:>15}  south: {}", "", convert(n, Region::South).unwrap());
    }

    // ── 2. Command-line input: <number> [north|south] ─────────────────
    let mut args = std::env::args().skip(1);
    if let Some(number) = args.next() {
        let region = args.next().unwrap_or_else(|| "north".into());
        println!("\n=== {number} ({region}) ===");
        match convert_str(&number, &region) {
            Ok(words) => println!("  {words}"),
            Err(e) => println!("  Conversion failed: {e}"),
        }
    }

    // ── 3. Errors ─────────────────────────────────────────────────────
    println!("\n=== Errors ===");
    for (number, region) in [("-7", "north"), ("2.5", "south"), ("1000000000000", "north"), ("1", "central")] {
        if let Err(e) = convert_str(number, region) {
            println!("  {number} / {region}: {e}");
        }
    }
}
