use idx_reader::{ElementType, Endian, IdxElement, IdxReader};
use std::env;
use std::fmt::Display;
use std::io::Read;

const DEFAULT_SHOWN: usize = 3;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <path-to-idx-file> [--little-endian] [--show <N>]", args[0]);
        std::process::exit(1);
    }

    let idx_path = &args[1];
    let endian = Endian::from_little_endian(args.iter().any(|arg| arg == "--little-endian"));
    let mut shown = DEFAULT_SHOWN;
    // Parse --show argument
    if let Some(show_idx) = args.iter().position(|arg| arg == "--show") {
        match args.get(show_idx + 1).map(|s| s.parse::<usize>()) {
            Some(Ok(n)) => shown = n,
            Some(Err(_)) => {
                eprintln!("ERROR: Invalid --show value. Expected a non-negative integer.");
                std::process::exit(1);
            }
            None => {
                eprintln!("ERROR: --show flag requires an argument.");
                std::process::exit(1);
            }
        }
    }

    println!("Reading IDX file: {} ({})", idx_path, endian);
    println!("{}", "=".repeat(60));

    let reader = match IdxReader::open(idx_path, endian) {
        Ok(reader) => reader,
        Err(e) => {
            eprintln!("\nERROR: Failed to read IDX header");
            eprintln!("  {}", e);
            std::process::exit(1);
        }
    };

    let header = reader.header().clone();
    println!("\nHeader:");
    println!("  Element type: {}", header.element_type);
    println!("  Rank: {}", header.rank);
    println!("  Element dims: {:?}", header.element_dims);
    println!("  Dataset length: {}", header.dataset_length);
    println!("  Data offset: {} bytes", header.data_offset());
    println!("  Data size: {} bytes", header.data_size_bytes());

    println!("\nSample Elements (first {}):", shown.min(header.dataset_length));
    let sampled = match header.element_type {
        ElementType::UInt8 => print_samples::<_, u8>(reader, shown),
        ElementType::Int8 => print_samples::<_, i8>(reader, shown),
        ElementType::Int16 => print_samples::<_, i16>(reader, shown),
        ElementType::Int32 => print_samples::<_, i32>(reader, shown),
        ElementType::Float32 => print_samples::<_, f32>(reader, shown),
        ElementType::Float64 => print_samples::<_, f64>(reader, shown),
    };
    if let Err(e) = sampled {
        eprintln!("\nERROR: Failed to decode IDX data");
        eprintln!("  {}", e);
        std::process::exit(1);
    }

    if header.dataset_length > shown {
        println!("  ... and {} more", header.dataset_length - shown);
    }
}

/// Streams the first `shown` elements, printing each as soon as it is decoded.
fn print_samples<R: Read, T: IdxElement + Display>(reader: IdxReader<R>, shown: usize) -> idx_reader::Result<()> {
    if reader.header().is_scalar() {
        for (i, value) in reader.into_scalars::<T>()?.take(shown).enumerate() {
            println!("  {}. {}", i, value?);
        }
    } else {
        let rank = reader.header().rank;
        for (i, element) in reader.into_arrays_with_rank::<T>(rank)?.take(shown).enumerate() {
            println!("  {}. {}", i, element?);
        }
    }
    Ok(())
}
