use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use legacy_keccak::{Digest, KeccakError, KeccakHasher, Variant};
use log::{debug, info};

const READ_CHUNK: usize = 64 * 1024;

#[derive(Parser, Debug)]
#[command(author, version, about = "Print legacy Keccak (pre-FIPS 202) checksums")]
struct Cli {
    /// Digest width in bits: 224, 256, 384 or 512
    #[arg(short, long, default_value = "256", value_parser = parse_variant)]
    bits: Variant,

    /// Write raw digest bytes instead of hex lines
    #[arg(long, action = clap::ArgAction::SetTrue)]
    raw: bool,

    /// Hash the given text instead of a file. May be repeated
    #[arg(short, long = "string", value_name = "TEXT")]
    strings: Vec<String>,

    /// Files to hash. `-` reads standard input, which is also the default
    files: Vec<PathBuf>,
}

fn parse_variant(s: &str) -> Result<Variant, KeccakError> {
    s.parse()
}

#[derive(Debug, PartialEq, Eq)]
enum Input {
    Text(String),
    Stdin,
    File(PathBuf),
}

impl Input {
    fn name(&self) -> String {
        match self {
            Input::Text(text) => format!("{text:?}"),
            Input::Stdin => "-".to_owned(),
            Input::File(path) => path.display().to_string(),
        }
    }
}

impl Cli {
    fn inputs(&self) -> Vec<Input> {
        let mut inputs: Vec<Input> = self.strings.iter().cloned().map(Input::Text).collect();
        inputs.extend(self.files.iter().map(|path| {
            if path.as_os_str() == "-" {
                Input::Stdin
            } else {
                Input::File(path.clone())
            }
        }));
        if inputs.is_empty() {
            inputs.push(Input::Stdin);
        }
        inputs
    }
}

/// Stream `reader` into `hasher` in fixed-size chunks. Returns the number of bytes read.
fn absorb_reader(hasher: &mut KeccakHasher, mut reader: impl Read) -> io::Result<u64> {
    let mut buf = vec![0u8; READ_CHUNK];
    let mut total = 0u64;
    loop {
        match reader.read(&mut buf) {
            Ok(0) => return Ok(total),
            Ok(n) => {
                hasher.update(&buf[..n]);
                total += n as u64;
            }
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
}

fn write_digest(out: &mut impl Write, digest: &Digest, name: &str, raw: bool) -> io::Result<()> {
    if raw {
        out.write_all(digest.as_bytes())
    } else {
        writeln!(out, "{digest}  {name}")
    }
}

fn run(cli: &Cli, mut stdin: impl Read, out: &mut impl Write) -> anyhow::Result<()> {
    let mut hasher = KeccakHasher::new(cli.bits);
    for input in cli.inputs() {
        let name = input.name();
        let len = match &input {
            Input::Text(text) => {
                hasher.update_str(text);
                text.len() as u64
            }
            Input::Stdin => absorb_reader(&mut hasher, &mut stdin)
                .context("failed to read standard input")?,
            Input::File(path) => {
                let file = File::open(path)
                    .with_context(|| format!("failed to open {}", path.display()))?;
                absorb_reader(&mut hasher, file)
                    .with_context(|| format!("failed to read {}", path.display()))?
            }
        };
        debug!("{name}: absorbed {len} bytes");

        let digest = hasher.finalize_reset();
        info!("{} {name} = {digest}", cli.bits);
        write_digest(out, &digest, &name, cli.raw)
            .with_context(|| format!("failed to write digest of {name}"))?;
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    run(&cli, io::stdin().lock(), &mut out)?;
    out.flush().context("failed to flush standard output")?;
    Ok(())
}
