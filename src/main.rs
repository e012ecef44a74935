use keys::{Key, KeyError};
use std::env;
use std::process;

const USAGE: &str = "Usage: keys [-v] <key name>...
       keys [-v] --tokenize <key name>...
       keys [-v] --signature <key signature>...";

enum Command {
    Describe,
    Tokenize,
    Signature,
}

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();

    let mut verbose: u8 = 0;
    let mut command = Command::Describe;
    let mut names: Vec<&String> = Vec::new();

    // Parse flags
    for arg in &args {
        match arg.as_str() {
            "-v" | "--verbose" => verbose = u8::saturating_add(verbose, 1),
            "--tokenize" => command = Command::Tokenize,
            "--signature" => command = Command::Signature,
            "-h" | "--help" => {
                println!("{}", USAGE);
                return;
            }
            _ => names.push(arg),
        }
    }

    init_logging(verbose);

    if names.is_empty() {
        eprintln!("{}", USAGE);
        process::exit(1);
    }

    let mut failed = false;
    for (i, name) in names.iter().enumerate() {
        let output = match command {
            Command::Describe => describe(name),
            Command::Tokenize => {
                serde_yaml::to_string(&keys::tokenize(name)).map_err(KeyError::from)
            }
            Command::Signature => keys::major_tonic_from_key_signature(name)
                .and_then(|tonic| describe(&format!("{} major", tonic))),
        };

        match output {
            Ok(yaml) => {
                if i > 0 {
                    println!("---");
                }
                print!("{}", yaml);
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                failed = true;
            }
        }
    }

    if failed {
        process::exit(1);
    }
}

fn describe(name: &str) -> Result<String, KeyError> {
    let key: Key = name.parse()?;
    keys::to_yaml(&key)
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();
}
