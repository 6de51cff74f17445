use narwhal::coord::{self, CoordOperator};
use narwhal::{CoordConfig, Horizable, Size};
use serde::{Deserialize, Serialize};
use std::io::Read;

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Json(serde_json::Error),
    Layout(narwhal::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
            CliError::Layout(err) => write!(f, "layout error: {err}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

impl From<narwhal::Error> for CliError {
    fn from(value: narwhal::Error) -> Self {
        Self::Layout(value)
    }
}

#[derive(Debug, Default)]
struct Args {
    input: Option<String>,
    out: Option<String>,
    operator: Option<String>,
    pretty: bool,
}

/// One entity of the input document. Placeholders default to zero size.
#[derive(Debug, Deserialize)]
struct Entity {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    width: f64,
    #[serde(default)]
    height: f64,
    #[serde(default)]
    dummy: bool,
    #[serde(skip)]
    x: Option<f64>,
}

impl Horizable for Entity {
    fn x(&self) -> Option<f64> {
        self.x
    }

    fn set_x(&mut self, x: f64) {
        self.x = Some(x);
    }
}

#[derive(Debug, Deserialize)]
struct LayoutIn {
    #[serde(default)]
    coord: CoordConfig,
    layers: Vec<Vec<Entity>>,
}

#[derive(Serialize)]
struct EntityOut<'a> {
    id: Option<&'a str>,
    dummy: bool,
    x: f64,
}

#[derive(Serialize)]
struct LayoutOut<'a> {
    operator: &'static str,
    width: f64,
    layers: Vec<Vec<EntityOut<'a>>>,
}

fn usage() -> &'static str {
    "narwhal-cli\n\
\n\
USAGE:\n\
  narwhal-cli [--pretty] [--operator <name>] [--out <path>] [<path>|-]\n\
\n\
INPUT:\n\
  {\"coord\": {\"operator\": \"center\"}, \"layers\": [[{\"id\": \"a\", \"width\": 10}, {\"dummy\": true}]]}\n\
\n\
NOTES:\n\
  - If <path> is omitted or '-', input is read from stdin.\n\
  - --operator overrides the operator named in the document.\n\
  - Set RUST_LOG=narwhal=debug to trace the assignment on stderr.\n\
"
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args::default();

    let mut it = argv.iter().skip(1);
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "--pretty" => args.pretty = true,
            "--operator" => {
                let Some(name) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.operator = Some(name.clone());
            }
            "--out" => {
                let Some(out) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.out = Some(out.clone());
            }
            other if other.starts_with('-') && other != "-" => {
                return Err(CliError::Usage(usage()));
            }
            path => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some(path.to_string());
            }
        }
    }

    Ok(args)
}

fn read_input(input: Option<&str>) -> Result<String, CliError> {
    match input {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Some(path) => Ok(std::fs::read_to_string(path)?),
    }
}

fn write_json(value: &impl Serialize, pretty: bool, out: Option<&str>) -> Result<(), CliError> {
    let mut text = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    text.push('\n');
    match out {
        None => print!("{text}"),
        Some(path) => std::fs::write(path, text)?,
    }
    Ok(())
}

fn run(args: Args) -> Result<(), CliError> {
    let text = read_input(args.input.as_deref())?;
    let mut doc: LayoutIn = serde_json::from_str(&text)?;
    if let Some(name) = args.operator {
        doc.coord.operator = name;
    }

    let op = coord::from_config(&doc.coord)?;
    tracing::debug!(operator = op.name(), layers = doc.layers.len(), "layout document loaded");
    let width = op.assign(&mut doc.layers, |e: &Entity| Size::new(e.width, e.height))?;

    let layers: Vec<Vec<EntityOut<'_>>> = doc
        .layers
        .iter()
        .map(|layer| {
            layer
                .iter()
                .map(|e| EntityOut {
                    id: e.id.as_deref(),
                    dummy: e.dummy,
                    x: e.x.unwrap_or_default(),
                })
                .collect()
        })
        .collect();

    write_json(
        &LayoutOut {
            operator: op.name(),
            width,
            layers,
        },
        args.pretty,
        args.out.as_deref(),
    )
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_tracing();

    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    if let Err(err) = run(args) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
