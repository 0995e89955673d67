use saspoint5::{cdf, pdf, quantile};
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

const DEFAULT_RESULTS_DIR: &str = "results";

type SweepFn = fn(&mut dyn Write) -> io::Result<()>;

struct Sweep {
    name: &'static str,
    file: &'static str,
    run: SweepFn,
}

const SWEEPS: [Sweep; 7] = [
    Sweep {
        name: "pdf",
        file: "saspoint5_pdf.csv",
        run: sweep_pdf,
    },
    Sweep {
        name: "pdf_limit",
        file: "saspoint5_pdf_limit.csv",
        run: sweep_pdf_limit,
    },
    Sweep {
        name: "cdf",
        file: "saspoint5_cdf.csv",
        run: sweep_cdf,
    },
    Sweep {
        name: "cdf_limit",
        file: "saspoint5_cdf_limit.csv",
        run: sweep_cdf_limit,
    },
    Sweep {
        name: "quantile",
        file: "saspoint5_quantile.csv",
        run: sweep_quantile,
    },
    Sweep {
        name: "quantilelower_limit",
        file: "saspoint5_quantilelower_limit.csv",
        run: sweep_quantile_lower_limit,
    },
    Sweep {
        name: "quantileupper_limit",
        file: "saspoint5_quantileupper_limit.csv",
        run: sweep_quantile_upper_limit,
    },
];

/// Start of each octave in `[64, 2^64]`.
fn octaves() -> impl Iterator<Item = f64> {
    std::iter::successors(Some(64.0f64), |&x0| Some(x0 * 2.0))
        .take_while(|&x0| x0 <= 2.0f64.powi(64))
}

fn sweep_pdf(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "x,pdf")?;
    let mut x = -6.0f64;
    while x <= 64.0 {
        writeln!(out, "{:.16e},{:.16e}", x, pdf(x))?;
        x += 1.0 / 1024.0;
    }
    Ok(())
}

fn sweep_pdf_limit(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "x,pdf")?;
    for x0 in octaves() {
        let mut x = x0;
        while x < x0 * 2.0 {
            writeln!(out, "{:.16e},{:.16e}", x, pdf(x))?;
            x += x0 / 256.0;
        }
    }
    Ok(())
}

fn sweep_cdf(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "x,cdf,ccdf")?;
    let mut x = -6.0f64;
    while x <= 64.0 {
        writeln!(
            out,
            "{:.16e},{:.16e},{:.16e}",
            x,
            cdf(x, false),
            cdf(x, true)
        )?;
        x += 1.0 / 1024.0;
    }
    Ok(())
}

fn sweep_cdf_limit(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "x,ccdf")?;
    for x0 in octaves() {
        let mut x = x0;
        while x < x0 * 2.0 {
            writeln!(out, "{:.16e},{:.16e}", x, cdf(x, true))?;
            x += x0 / 256.0;
        }
    }
    Ok(())
}

fn sweep_quantile(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "x,quantile")?;
    let mut p = 1.0 / 8192.0;
    while p < 1.0 {
        writeln!(out, "{:.16e},{:.16e}", p, quantile(p, false))?;
        p += 1.0 / 8192.0;
    }
    Ok(())
}

fn sweep_quantile_lower_limit(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "x,quantile")?;
    let floor = 2.0f64.powi(-1000);
    let mut p = 1.0 / 8192.0;
    while p > floor {
        writeln!(out, "{:.16e},{:.16e}", p, quantile(p, false))?;
        p /= 2.0;
    }
    Ok(())
}

fn sweep_quantile_upper_limit(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "x,cquantile")?;
    let floor = 2.0f64.powi(-128);
    let mut p0 = 1.0 / 8192.0;
    while p0 > floor {
        let mut p = p0;
        while p > p0 / 2.0 {
            writeln!(out, "{:.16e},{:.16e}", p, quantile(p, true))?;
            p -= p0 / 256.0;
        }
        p0 /= 2.0;
    }
    Ok(())
}

fn write_sweep(dir: &Path, sweep: &Sweep) -> io::Result<PathBuf> {
    let path = dir.join(sweep.file);
    let mut out = BufWriter::new(File::create(&path)?);
    (sweep.run)(&mut out)?;
    out.flush()?;
    Ok(path)
}

fn print_usage() {
    println!("Usage: saspoint5_csv [--output DIR] [--only SWEEP]");
    println!();
    println!("Options:");
    println!(
        "  --output DIR   Directory for the CSV files (default: $SASPOINT5_RESULTS_DIR or {DEFAULT_RESULTS_DIR})"
    );
    println!("  --only SWEEP   Write a single sweep");
    println!();
    println!("Sweeps:");
    for sweep in &SWEEPS {
        println!("  {:<20} {}", sweep.name, sweep.file);
    }
}

fn parse_args() -> (PathBuf, Option<String>) {
    let args: Vec<String> = std::env::args().collect();
    let mut output = std::env::var("SASPOINT5_RESULTS_DIR")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_RESULTS_DIR));
    let mut only = None;
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--output" | "-o" => {
                i += 1;
                match args.get(i) {
                    Some(dir) => output = PathBuf::from(dir),
                    None => {
                        eprintln!("Missing value for --output");
                        std::process::exit(1);
                    }
                }
            }
            "--only" => {
                i += 1;
                match args.get(i) {
                    Some(name) if SWEEPS.iter().any(|s| s.name == name) => {
                        only = Some(name.clone());
                    }
                    Some(name) => {
                        eprintln!("Unknown sweep: {name}");
                        std::process::exit(1);
                    }
                    None => {
                        eprintln!("Missing value for --only");
                        std::process::exit(1);
                    }
                }
            }
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {other}");
                std::process::exit(1);
            }
        }
        i += 1;
    }
    (output, only)
}

fn main() {
    let (output, only) = parse_args();

    if let Err(err) = fs::create_dir_all(&output) {
        eprintln!("Failed to create {}: {err}", output.display());
        std::process::exit(1);
    }

    let selected = SWEEPS
        .iter()
        .filter(|s| only.as_deref().is_none_or(|name| name == s.name));
    for sweep in selected {
        match write_sweep(&output, sweep) {
            Ok(path) => eprintln!("wrote {}", path.display()),
            Err(err) => {
                eprintln!("Failed to write {} sweep: {err}", sweep.name);
                std::process::exit(1);
            }
        }
    }

    println!("END");
}
